//! Environment loading pipeline.
//!
//! Manages the staged path from manifest parsing through scene spawning to
//! incremental collidable registration, with progress tracking for state
//! transitions.

/// Scene spawning and incremental collidable registration.
///
/// Spawns the glTF scene, camera rig, and generated ground; registers each
/// named mesh as collidable once its geometry is readable.
pub mod environment;

/// Environment manifest loading from JSON configuration.
///
/// Holds the pending asset handle and promotes the parsed manifest to a
/// resource.
pub mod manifest_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
