//! Runtime diagnostics systems.

/// FPS overlay updates from frame-time diagnostics.
pub mod fps_tracking;
