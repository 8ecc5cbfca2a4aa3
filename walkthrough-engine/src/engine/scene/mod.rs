//! Environment setup outside the interaction core.
//!
//! Sun lighting, the manifest-declared generated ground plane, and the
//! optional skybox cubemap.

/// Generated ground plane spawning and its collision quad.
///
/// Used when the environment model floats above a reference elevation.
pub mod ground;

/// Directional sun light for the walkthrough scene.
pub mod lighting;

/// Skybox cubemap loading and camera attachment.
pub mod sky;
