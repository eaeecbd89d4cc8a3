//! Configuration module - crate settings and user preferences
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, BrushConfig)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{
    DEFAULT_BRUSH_HISTORY_CAPACITY, DEFAULT_BRUSH_SIZE, DEFAULT_BRUSH_TEXTURE,
    MAX_BRUSH_HISTORY_CAPACITY, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE,
};

pub use types::{BrushConfig, Config};

pub use loader::{load_config, load_config_from};

#[cfg(test)]
pub use defaults::{DEFAULT_BRUSH_STATE_PATH, DEFAULT_SETTINGS_PATH};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
