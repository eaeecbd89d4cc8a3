//! In-game settings window
//!
//! - `store` - typed key-value settings, changesets and change sinks
//! - `defaults` - built-in default values and setting names
//! - `display` - resolutions and window modes
//! - `graphics` - texture filtering, water and lighting options
//! - `sliders` - slider position ↔ value mapping
//! - `locales` - preferred locale list
//! - `script_pages` - searchable script settings pages
//! - `window` - controller tying the above to user interactions

pub mod defaults;
mod display;
pub mod graphics;
mod locales;
mod script_pages;
mod sliders;
mod store;
mod window;

pub use display::{
    aspect_label, parse_resolution, sort_resolutions, Resolution, ResolutionList, WindowMode,
};
pub use graphics::{LightingMethod, TextureFiltering};
pub use locales::{current_locales, set_preferred_locale, LanguageOptions};
pub use script_pages::ScriptSettingsPanel;
pub use sliders::{SliderKind, SliderSpec, CELL_SIZE_IN_UNITS};
pub use store::{
    apply_changes, ChangeSink, Changeset, MemorySettings, SettingKey, SettingValue, SettingsStore,
};
pub use window::SettingsWindow;

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
