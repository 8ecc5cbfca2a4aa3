/// Seconds a pick annotation label stays on screen before disposal.
pub const LABEL_TIME_TO_LIVE_SECS: f32 = 2.0;

/// Mesh display names are shortened at the first occurrence of this character.
pub const NAME_DELIMITER: char = '_';

/// Font size for pick annotation labels.
pub const LABEL_FONT_SIZE: f32 = 24.0;

/// Font size for the controls help and FPS overlays.
pub const OVERLAY_FONT_SIZE: f32 = 16.0;
