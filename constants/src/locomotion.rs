use bevy::prelude::*;

/// Walking speed in metres per reference tick.
pub const MOVEMENT_SPEED: f32 = 0.5;

/// Mouse-look sensitivity in radians per pixel of pointer delta.
pub const ANGULAR_SPEED: f32 = 0.003;

/// Downward acceleration in metres per second squared.
pub const GRAVITY_ACCELERATION: f32 = -9.81;

/// Reference tick rate the per-tick gravity displacement is derived from.
pub const FRAMES_PER_SECOND: f32 = 60.0;

/// Pitch clamp keeping the look direction short of straight up/down.
pub const PITCH_LIMIT_RADIANS: f32 = 1.55;

/// Camera collision ellipsoid radii in metres.
pub const CAMERA_ELLIPSOID: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Near clip distance for the first-person camera.
pub const CAMERA_NEAR_CLIP: f32 = 0.75;

/// Maximum collide-and-slide resolution passes per tick.
pub const MAX_SLIDE_ITERATIONS: usize = 3;

/// Contact offset keeping the ellipsoid a hair off obstructing surfaces.
pub const COLLISION_SKIN: f32 = 1e-3;

/// Default direction key bindings.
pub const KEY_FORWARD: KeyCode = KeyCode::KeyW;
pub const KEY_BACKWARD: KeyCode = KeyCode::KeyS;
pub const KEY_LEFT: KeyCode = KeyCode::KeyA;
pub const KEY_RIGHT: KeyCode = KeyCode::KeyD;
