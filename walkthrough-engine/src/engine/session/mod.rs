//! Immersive (head-mounted) session management.
//!
//! Detects platform support, requests a session without blocking the frame
//! loop, and negotiates optional features once the runtime grants one.
//! Locomotion and picking never depend on any of this.

/// Session lifecycle state machine and feature negotiation.
///
/// Unavailable → Requested → Active → Ended, restartable from Ended.
pub mod immersive;

/// Platform runtime collaborator trait and the desktop fallback.
///
/// Capability probe, asynchronous session start, per-feature enable with a
/// stability tier, and session-end notification.
pub mod runtime;
