//! First-person camera rig and locomotion.

/// First-person rig state and the per-tick locomotion system.
///
/// Mouse-look while the pointer is captured, key movement rotated by yaw,
/// unconditional gravity, and collide-and-slide resolution against the
/// collidable registry.
pub mod first_person;
