use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Preparing,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Fullscreen node the transient overlays attach to.
#[derive(Resource)]
pub struct UiOverlayRoot(pub Entity);

// Transition to Preparing once the manifest resource is in place
pub fn transition_to_preparing(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.manifest_loaded {
        info!("→ Transitioning to Preparing state");
        next_state.set(AppState::Preparing);
    }
}

// Final transition to running state; collidables keep streaming in after it
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.environment_spawned {
        info!("→ Environment ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
