use bevy::prelude::*;
use constants::session::SESSION_RESTART_KEY;

use crate::engine::collision::registry::CollidableRegistry;
use crate::engine::session::runtime::{
    FeatureRequest, FeatureTier, ImmersiveRuntime, ImmersiveRuntimeHandle, SessionPoll,
};

/// Lifecycle of the immersive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unavailable,
    Requested,
    Active,
    Ended,
}

/// Features successfully negotiated for the active session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnabledFeatures {
    pub pointer_selection: bool,
    pub teleportation: bool,
    pub teleport_floors: Vec<String>,
}

/// Request to issue a fresh session after the previous one ended.
#[derive(Event)]
pub struct SessionRestartEvent;

/// Immersive session controller.
///
/// Probes support once, then drives the session lifecycle from the frame
/// loop by polling the runtime collaborator. Feature negotiation is
/// best-effort; rejections leave locomotion as the only interaction mode.
#[derive(Resource, Default)]
pub struct ImmersiveSession {
    state: SessionState,
    supported: bool,
    features: EnabledFeatures,
}

impl ImmersiveSession {
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn features(&self) -> &EnabledFeatures {
        &self.features
    }

    /// One-shot startup probe. Unsupported platforms stay Unavailable for
    /// the lifetime of the application.
    pub fn initialise(&mut self, runtime: &mut dyn ImmersiveRuntime) {
        self.supported = runtime.probe();
        if !self.supported {
            info!("Immersive sessions unsupported on this platform");
            return;
        }
        runtime.request_session();
        self.state = SessionState::Requested;
        info!("Immersive session requested");
    }

    /// Re-issue a session request once the previous session has ended.
    pub fn request_restart(&mut self, runtime: &mut dyn ImmersiveRuntime) {
        if self.state != SessionState::Ended || !self.supported {
            return;
        }
        runtime.request_session();
        self.state = SessionState::Requested;
        info!("Immersive session re-requested");
    }

    /// One tick of session progress. Non-blocking; a request may stay
    /// pending indefinitely.
    pub fn advance(&mut self, runtime: &mut dyn ImmersiveRuntime, floor_meshes: &[String]) {
        match self.state {
            SessionState::Unavailable | SessionState::Ended => {}
            SessionState::Requested => match runtime.poll_session() {
                SessionPoll::Pending => {}
                SessionPoll::Denied => {
                    warn!("Immersive session request denied");
                    self.state = SessionState::Unavailable;
                }
                SessionPoll::Granted => {
                    info!("Immersive session active");
                    self.state = SessionState::Active;
                    self.negotiate_features(runtime, floor_meshes);
                }
            },
            SessionState::Active => {
                if runtime.poll_ended() {
                    info!("Immersive session ended");
                    self.state = SessionState::Ended;
                    self.features = EnabledFeatures::default();
                }
            }
        }
    }

    fn negotiate_features(&mut self, runtime: &mut dyn ImmersiveRuntime, floor_meshes: &[String]) {
        let selection = FeatureRequest::PointerSelection {
            all_controllers: true,
        };
        match runtime.enable_feature(&selection, FeatureTier::Stable) {
            Ok(()) => self.features.pointer_selection = true,
            Err(rejected) => warn!("{rejected}"),
        }

        // Walls and props are never teleport targets.
        let floors = floor_meshes.to_vec();
        let teleportation = FeatureRequest::Teleportation {
            floor_meshes: floors.clone(),
        };
        match runtime.enable_feature(&teleportation, FeatureTier::Stable) {
            Ok(()) => {
                self.features.teleportation = true;
                self.features.teleport_floors = floors;
            }
            Err(rejected) => warn!("{rejected}"),
        }
    }
}

/// Startup probe and initial session request.
pub fn initialise_session(
    mut session: ResMut<ImmersiveSession>,
    mut runtime: ResMut<ImmersiveRuntimeHandle>,
) {
    session.initialise(runtime.0.as_mut());
}

/// Per-tick session progress, independent of loading and locomotion.
pub fn immersive_session_system(
    mut session: ResMut<ImmersiveSession>,
    mut runtime: ResMut<ImmersiveRuntimeHandle>,
    registry: Res<CollidableRegistry>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut restart_events: EventReader<SessionRestartEvent>,
) {
    let restart_event = restart_events.read().count() > 0;
    let restart_requested = restart_event || keyboard.just_pressed(SESSION_RESTART_KEY);
    if restart_requested {
        session.request_restart(runtime.0.as_mut());
    }
    session.advance(runtime.0.as_mut(), &registry.floor_names());
}
