use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

/// Pointer ownership mode. While `Captured`, mouse movement drives camera
/// orientation and the OS cursor is locked and hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Free,
    Captured,
}

/// Current pointer capture mode.
#[derive(Resource, Default)]
pub struct PointerCapture {
    state: CaptureState,
    pending_release: bool,
}

impl PointerCapture {
    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_captured(&self) -> bool {
        self.state == CaptureState::Captured
    }

    /// Explicit exit request, folded into the next tick's transition.
    pub fn request_release(&mut self) {
        self.pending_release = true;
    }
}

/// Map one tick of pointer/key input onto a capture transition, if any.
///
/// Left click is the only way in; Escape, middle click, or an explicit
/// release request are the only ways out.
pub fn capture_transition(
    state: CaptureState,
    left_pressed: bool,
    middle_pressed: bool,
    release_requested: bool,
) -> Option<CaptureState> {
    match state {
        CaptureState::Free if left_pressed => Some(CaptureState::Captured),
        CaptureState::Captured if middle_pressed || release_requested => Some(CaptureState::Free),
        _ => None,
    }
}

pub fn pointer_capture_system(
    mut capture: ResMut<PointerCapture>,
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let release_requested = capture.pending_release || keyboard.just_pressed(KeyCode::Escape);
    capture.pending_release = false;

    let Some(next) = capture_transition(
        capture.state,
        mouse.just_pressed(MouseButton::Left),
        mouse.just_pressed(MouseButton::Middle),
        release_requested,
    ) else {
        return;
    };
    capture.state = next;

    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    match next {
        CaptureState::Captured => {
            window.cursor_options.grab_mode = CursorGrabMode::Locked;
            window.cursor_options.visible = false;
        }
        CaptureState::Free => {
            window.cursor_options.grab_mode = CursorGrabMode::None;
            window.cursor_options.visible = true;
        }
    }
    info!("Pointer capture: {:?}", next);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_click_captures_from_free() {
        assert_eq!(
            capture_transition(CaptureState::Free, true, false, false),
            Some(CaptureState::Captured)
        );
    }

    #[test]
    fn escape_releases_from_captured() {
        assert_eq!(
            capture_transition(CaptureState::Captured, false, false, true),
            Some(CaptureState::Free)
        );
    }

    #[test]
    fn middle_click_releases_from_captured() {
        assert_eq!(
            capture_transition(CaptureState::Captured, false, true, false),
            Some(CaptureState::Free)
        );
    }

    #[test]
    fn explicit_release_request_is_observed_next_tick() {
        let mut capture = PointerCapture {
            state: CaptureState::Captured,
            pending_release: false,
        };
        capture.request_release();
        assert!(capture.pending_release);
        assert_eq!(
            capture_transition(capture.state, false, false, capture.pending_release),
            Some(CaptureState::Free)
        );
    }

    #[test]
    fn no_other_event_changes_state() {
        // Releases do nothing while free; left click does nothing while captured.
        assert_eq!(capture_transition(CaptureState::Free, false, true, false), None);
        assert_eq!(capture_transition(CaptureState::Free, false, false, true), None);
        assert_eq!(capture_transition(CaptureState::Captured, true, false, false), None);
        assert_eq!(capture_transition(CaptureState::Free, false, false, false), None);
        assert_eq!(capture_transition(CaptureState::Captured, false, false, false), None);
    }
}
