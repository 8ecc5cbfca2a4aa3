use bevy::prelude::*;

/// Key that re-requests an immersive session after the previous one ended.
pub const SESSION_RESTART_KEY: KeyCode = KeyCode::F6;
