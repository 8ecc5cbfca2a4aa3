//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and system scheduling for the walkthrough.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with asset loading, interaction, and session
/// systems wired to the lifecycle states.
pub mod app_setup;

/// Application state machine and loading progress transitions.
///
/// Manages states from manifest loading through environment spawning to
/// runtime execution.
pub mod app_state;

/// Window configuration for the walkthrough.
pub mod window_config;
