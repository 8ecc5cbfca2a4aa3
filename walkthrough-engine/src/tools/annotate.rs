use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::interaction::{LABEL_FONT_SIZE, LABEL_TIME_TO_LIVE_SECS, NAME_DELIMITER};

use crate::engine::camera::first_person::WalkthroughCamera;
use crate::engine::collision::raycast::{RayHit, cast_ray};
use crate::engine::collision::registry::CollidableRegistry;
use crate::engine::core::app_state::UiOverlayRoot;

/// Outcome of one pointer pick. Produced per event, consumed immediately,
/// never persisted.
struct PickResult {
    hit: Option<RayHit>,
    screen_location: Vec2,
}

/// Transient annotation label. Disposed only by timeout expiry; a second
/// pick before expiry leaves an independent overlapping label running on
/// its own clock.
#[derive(Component)]
pub struct AnnotationLabel {
    pub timeout: Timer,
}

impl AnnotationLabel {
    pub fn new() -> Self {
        Self {
            timeout: Timer::from_seconds(LABEL_TIME_TO_LIVE_SECS, TimerMode::Once),
        }
    }
}

impl Default for AnnotationLabel {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorten a display name at the first occurrence of `delimiter`.
///
/// Names without the delimiter pass through whole.
pub fn short_identifier(name: &str, delimiter: char) -> &str {
    name.split(delimiter).next().unwrap_or(name)
}

/// Right-click picking: ray from the pointer location through the camera,
/// nearest registered mesh wins, hit spawns a screen-anchored label.
pub fn annotate_on_pick(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<WalkthroughCamera>>,
    registry: Res<CollidableRegistry>,
    overlay: Res<UiOverlayRoot>,
) {
    // Secondary button only; primary and middle belong to pointer capture.
    if !mouse.just_pressed(MouseButton::Right) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    // Under capture the cursor has no reported position; pick through the
    // window centre instead.
    let screen_location = window
        .cursor_position()
        .unwrap_or_else(|| window.size() * 0.5);
    let Ok(ray) = camera.viewport_to_world(camera_transform, screen_location) else {
        return;
    };

    let pick = PickResult {
        hit: cast_ray(&registry, ray.origin, *ray.direction),
        screen_location,
    };
    let Some(hit) = pick.hit else {
        return;
    };

    let label = short_identifier(&hit.name, NAME_DELIMITER);
    info!("Pointer down on mesh: {}", label);
    spawn_label(&mut commands, overlay.0, label, pick.screen_location);
}

fn spawn_label(commands: &mut Commands, root: Entity, text: &str, position: Vec2) {
    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Text::new(text),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(position.x),
                top: Val::Px(position.y),
                ..default()
            },
            AnnotationLabel::new(),
        ));
    });
}

/// Dispose labels exactly on timeout expiry. There is no earlier disposal
/// path.
pub fn expire_labels(
    mut commands: Commands,
    time: Res<Time>,
    mut labels: Query<(Entity, &mut AnnotationLabel)>,
) {
    for (entity, mut label) in &mut labels {
        if label.timeout.tick(time.delta()).finished() {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn name_is_shortened_at_first_delimiter() {
        assert_eq!(short_identifier("Wall_02", '_'), "Wall");
        assert_eq!(short_identifier("Street_Lamp_03", '_'), "Street");
    }

    #[test]
    fn name_without_delimiter_passes_through_whole() {
        assert_eq!(short_identifier("Rock", '_'), "Rock");
    }

    #[test]
    fn leading_delimiter_yields_empty_identifier() {
        assert_eq!(short_identifier("_Floor", '_'), "");
    }

    #[test]
    fn label_lives_to_1999_ms_and_not_to_2001_ms() {
        let mut label = AnnotationLabel::new();
        label.timeout.tick(Duration::from_millis(1999));
        assert!(!label.timeout.finished());
        label.timeout.tick(Duration::from_millis(2));
        assert!(label.timeout.finished());
    }

    #[test]
    fn overlapping_labels_expire_independently() {
        let mut first = AnnotationLabel::new();
        first.timeout.tick(Duration::from_millis(500));
        let mut second = AnnotationLabel::new();

        // Both visible through the window where their lifetimes overlap.
        first.timeout.tick(Duration::from_millis(1499));
        second.timeout.tick(Duration::from_millis(1499));
        assert!(!first.timeout.finished());
        assert!(!second.timeout.finished());

        // The earlier label dies first; the later one runs its own clock.
        first.timeout.tick(Duration::from_millis(2));
        second.timeout.tick(Duration::from_millis(2));
        assert!(first.timeout.finished());
        assert!(!second.timeout.finished());

        second.timeout.tick(Duration::from_millis(500));
        assert!(second.timeout.finished());
    }
}
