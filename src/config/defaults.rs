//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Texture selected by the brush tool before the user picks one
pub const DEFAULT_BRUSH_TEXTURE: &str = "L0#0";

/// Number of textures kept in the brush history
pub const DEFAULT_BRUSH_HISTORY_CAPACITY: usize = 5;

/// Upper bound applied to a configured or saved history capacity
pub const MAX_BRUSH_HISTORY_CAPACITY: usize = 64;

/// Brush size bounds (inclusive) and the initial size
pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 50;
pub const DEFAULT_BRUSH_SIZE: u32 = 1;

/// Default file locations, `~` expanded at lookup time
pub const DEFAULT_CONFIG_PATH: &str = "~/.settings-kit/config.json";
pub const DEFAULT_SETTINGS_PATH: &str = "~/.settings-kit/settings.json";
pub const DEFAULT_BRUSH_STATE_PATH: &str = "~/.settings-kit/brush.json";
