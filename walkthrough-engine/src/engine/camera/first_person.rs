use bevy::input::mouse::MouseMotion;
use bevy::math::EulerRot;
use bevy::prelude::*;
use constants::locomotion::{
    ANGULAR_SPEED, CAMERA_ELLIPSOID, FRAMES_PER_SECOND, GRAVITY_ACCELERATION, KEY_BACKWARD,
    KEY_FORWARD, KEY_LEFT, KEY_RIGHT, MOVEMENT_SPEED, PITCH_LIMIT_RADIANS,
};

use crate::engine::collision::registry::CollidableRegistry;
use crate::engine::collision::sweep::slide_move;
use crate::engine::input::pointer_capture::PointerCapture;

/// Marker for the walkthrough camera entity.
#[derive(Component)]
pub struct WalkthroughCamera;

/// One key per movement direction, fixed after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionBindings {
    forward: KeyCode,
    backward: KeyCode,
    left: KeyCode,
    right: KeyCode,
}

impl DirectionBindings {
    /// Build a binding set. A set that does not map one distinct key to each
    /// direction falls back to the default W/A/S/D bindings.
    pub fn new(forward: KeyCode, backward: KeyCode, left: KeyCode, right: KeyCode) -> Self {
        let keys = [forward, backward, left, right];
        let distinct = keys
            .iter()
            .enumerate()
            .all(|(i, key)| keys[..i].iter().all(|prior| prior != key));
        if !distinct {
            warn!("Duplicate direction key bindings supplied, keeping defaults");
            return Self::default();
        }
        Self {
            forward,
            backward,
            left,
            right,
        }
    }

    pub fn forward(&self) -> KeyCode {
        self.forward
    }

    pub fn backward(&self) -> KeyCode {
        self.backward
    }

    pub fn left(&self) -> KeyCode {
        self.left
    }

    pub fn right(&self) -> KeyCode {
        self.right
    }
}

impl Default for DirectionBindings {
    fn default() -> Self {
        Self {
            forward: KEY_FORWARD,
            backward: KEY_BACKWARD,
            left: KEY_LEFT,
            right: KEY_RIGHT,
        }
    }
}

/// First-person rig state. Orientation and tuning live here; the camera
/// position lives in the camera entity's `Transform`, written only by
/// `locomotion_system`.
#[derive(Resource)]
pub struct FirstPersonRig {
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub angular_speed: f32,
    pub ellipsoid: Vec3,
    bindings: DirectionBindings,
}

impl FirstPersonRig {
    pub fn with_heading(yaw: f32) -> Self {
        Self {
            yaw,
            ..Self::default()
        }
    }

    pub fn bindings(&self) -> DirectionBindings {
        self.bindings
    }
}

impl Default for FirstPersonRig {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            speed: MOVEMENT_SPEED,
            angular_speed: ANGULAR_SPEED,
            ellipsoid: CAMERA_ELLIPSOID,
            bindings: DirectionBindings::default(),
        }
    }
}

/// Constant per-tick downward displacement, derived from a fixed
/// acceleration and the reference frame rate. Recomputed only when the
/// frame rate changes.
#[derive(Resource)]
pub struct GravityVector {
    acceleration: f32,
    frames_per_second: f32,
    per_tick: Vec3,
}

impl GravityVector {
    pub fn new(acceleration: f32, frames_per_second: f32) -> Self {
        Self {
            acceleration,
            frames_per_second,
            per_tick: Vec3::new(0.0, acceleration / frames_per_second, 0.0),
        }
    }

    pub fn per_tick(&self) -> Vec3 {
        self.per_tick
    }

    pub fn frames_per_second(&self) -> f32 {
        self.frames_per_second
    }

    pub fn set_frame_rate(&mut self, frames_per_second: f32) {
        self.frames_per_second = frames_per_second;
        self.per_tick = Vec3::new(0.0, self.acceleration / frames_per_second, 0.0);
    }
}

impl Default for GravityVector {
    fn default() -> Self {
        Self::new(GRAVITY_ACCELERATION, FRAMES_PER_SECOND)
    }
}

/// Apply a mouse-look delta, clamping pitch short of vertical inversion.
pub fn apply_look(yaw: f32, pitch: f32, delta: Vec2, angular_speed: f32) -> (f32, f32) {
    let yaw = yaw - delta.x * angular_speed;
    let pitch =
        (pitch - delta.y * angular_speed).clamp(-PITCH_LIMIT_RADIANS, PITCH_LIMIT_RADIANS);
    (yaw, pitch)
}

/// Sum the yaw-rotated unit vectors of the pressed directions, normalised so
/// diagonal input never exceeds walking speed.
pub fn wish_displacement(
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    yaw: f32,
    speed: f32,
    tick_scale: f32,
) -> Vec3 {
    let rotation = Quat::from_rotation_y(yaw);
    let mut wish = Vec3::ZERO;
    if forward {
        wish += rotation * Vec3::NEG_Z;
    }
    if backward {
        wish += rotation * Vec3::Z;
    }
    if left {
        wish += rotation * Vec3::NEG_X;
    }
    if right {
        wish += rotation * Vec3::X;
    }
    wish.normalize_or_zero() * speed * tick_scale
}

/// Per-tick camera update: orientation from captured mouse deltas, position
/// from key movement plus gravity, resolved by collide-and-slide.
pub fn locomotion_system(
    mut rig: ResMut<FirstPersonRig>,
    capture: Res<PointerCapture>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    gravity: Res<GravityVector>,
    registry: Res<CollidableRegistry>,
    time: Res<Time>,
    mut cameras: Query<&mut Transform, With<WalkthroughCamera>>,
) {
    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };

    // Drain motion events every tick; they only steer while captured.
    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if capture.is_captured() && mouse_delta != Vec2::ZERO {
        let (yaw, pitch) = apply_look(rig.yaw, rig.pitch, mouse_delta, rig.angular_speed);
        rig.yaw = yaw;
        rig.pitch = pitch;
    }

    let tick_scale = time.delta_secs() * gravity.frames_per_second();
    let bindings = rig.bindings();
    let mut candidate = wish_displacement(
        keyboard.pressed(bindings.forward()),
        keyboard.pressed(bindings.backward()),
        keyboard.pressed(bindings.left()),
        keyboard.pressed(bindings.right()),
        rig.yaw,
        rig.speed,
        tick_scale,
    );
    // Gravity applies whether or not the environment has registered yet; an
    // empty registry means free fall until meshes arrive.
    candidate.y += gravity.per_tick().y * tick_scale;

    if candidate != Vec3::ZERO {
        let resolved = slide_move(transform.translation, rig.ellipsoid, candidate, &registry);
        transform.translation += resolved;
    }
    transform.rotation = Quat::from_euler(EulerRot::YXZ, rig.yaw, rig.pitch, 0.0);
}
