use bevy::prelude::*;
use std::fmt;

/// Optional capabilities negotiable within an active immersive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFeature {
    PointerSelection,
    Teleportation,
}

/// Stability tier requested for a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureTier {
    Stable,
}

/// Per-feature enable options.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureRequest {
    /// Pointer selection across the available immersive input controllers.
    PointerSelection { all_controllers: bool },
    /// Teleportation restricted to the given target surfaces.
    Teleportation { floor_meshes: Vec<String> },
}

impl FeatureRequest {
    pub fn feature(&self) -> SessionFeature {
        match self {
            FeatureRequest::PointerSelection { .. } => SessionFeature::PointerSelection,
            FeatureRequest::Teleportation { .. } => SessionFeature::Teleportation,
        }
    }
}

/// Rejection of a best-effort feature request. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRejected {
    pub feature: SessionFeature,
    pub reason: String,
}

impl fmt::Display for FeatureRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feature {:?} rejected: {}", self.feature, self.reason)
    }
}

/// Observation of a pending session request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPoll {
    Pending,
    Granted,
    Denied,
}

/// Platform collaborator hosting immersive sessions.
///
/// All operations are non-blocking; session start is observed through
/// repeated polling from the frame loop.
pub trait ImmersiveRuntime: Send + Sync {
    /// Whether the platform can host an immersive session at all.
    fn probe(&mut self) -> bool;

    /// Begin an asynchronous session request.
    fn request_session(&mut self);

    /// Observe the pending request. May stay `Pending` indefinitely.
    fn poll_session(&mut self) -> SessionPoll;

    /// Best-effort feature negotiation inside an active session.
    fn enable_feature(
        &mut self,
        request: &FeatureRequest,
        tier: FeatureTier,
    ) -> Result<(), FeatureRejected>;

    /// Whether the user or platform has ended the active session.
    fn poll_ended(&mut self) -> bool;
}

/// Runtime for platforms without immersive support. The probe always fails,
/// leaving the session permanently unavailable.
#[derive(Default)]
pub struct UnsupportedRuntime;

impl ImmersiveRuntime for UnsupportedRuntime {
    fn probe(&mut self) -> bool {
        false
    }

    fn request_session(&mut self) {}

    fn poll_session(&mut self) -> SessionPoll {
        SessionPoll::Pending
    }

    fn enable_feature(
        &mut self,
        request: &FeatureRequest,
        _tier: FeatureTier,
    ) -> Result<(), FeatureRejected> {
        Err(FeatureRejected {
            feature: request.feature(),
            reason: "no immersive session is available".into(),
        })
    }

    fn poll_ended(&mut self) -> bool {
        false
    }
}

/// The active runtime collaborator behind a trait object.
#[derive(Resource)]
pub struct ImmersiveRuntimeHandle(pub Box<dyn ImmersiveRuntime>);

impl Default for ImmersiveRuntimeHandle {
    fn default() -> Self {
        Self(Box::new(UnsupportedRuntime))
    }
}
