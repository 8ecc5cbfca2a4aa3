//! Environment description assets.

/// Environment manifest loaded from JSON. Mirrors the on-disk structure.
///
/// Names the scene file, designated ground mesh, spawn placement, and the
/// optional generated ground plane and skybox.
pub mod environment_manifest;
