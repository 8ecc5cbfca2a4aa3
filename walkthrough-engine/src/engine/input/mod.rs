//! Pointer input state for the first-person walkthrough.

/// Pointer capture state machine and OS cursor grab synchronisation.
///
/// Left click captures the pointer for mouse-look; Escape or middle click
/// releases it. No other event changes capture state.
pub mod pointer_capture;
