//! Interactive tools layered on the walkthrough.
//!
//! ## Pick annotation
//!
//! Right-clicking casts a ray from the pointer through the camera into the
//! registered scene geometry. A hit spawns a short-lived screen-anchored
//! label naming the mesh:
//!
//! ```text
//! Pointer down (secondary button)
//!   └─> viewport ray through the active camera
//!       └─> nearest collider hit
//!           ├─> display name shortened at the first '_'
//!           └─> label child of the overlay root, disposed after 2 s
//! ```
//!
//! Primary and middle buttons are owned by the pointer capture state
//! machine and never reach the annotator; misses are a no-op.

/// Right-click pick-to-label annotation tool.
pub mod annotate;
