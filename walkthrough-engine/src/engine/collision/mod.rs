//! Collision queries against the registered environment geometry.
//!
//! Holds the collidable registry plus the two pure geometry operations the
//! walkthrough consumes: ellipsoid collide-and-slide for locomotion and
//! ray casting for pointer picking.

/// Registry of named world-space triangle soups with floor designation.
///
/// Populated incrementally as environment meshes finish loading.
pub mod registry;

/// Ray/triangle intersection and nearest-hit queries for pointer picking.
///
/// Möller–Trumbore against the registry, nearest hit wins.
pub mod raycast;

/// Ellipsoid collide-and-slide displacement resolution.
///
/// Sweeps a unit sphere in ellipsoid space and redirects blocked motion
/// along the obstructing surface.
pub mod sweep;
