/// Asset-relative directory of the default environment.
pub const RELATIVE_ENVIRONMENT_PATH: &str = "environments/downtown";

/// Display name of the generated ground plane.
pub const GROUND_PLANE_NAME: &str = "Ground";

/// Controls summary shown in the corner overlay.
pub const HELP_TEXT: &str = "First-person walkthrough\n\
Left click: capture pointer\n\
Move mouse: look around\n\
Esc / middle click: release pointer\n\
W/A/S/D: move\n\n\
Right click: show mesh name";
