//! settings-kit - non-visual core of a level editor's texture brush tool and
//! an in-game settings window.
//!
//! - [`brush`] - brush shape, size, texture and the recently used texture history
//! - [`search`] - weighted word search used to filter script settings pages
//! - [`settings`] - settings store, option mappings and the window controller

pub mod brush;
pub mod config;
pub mod error;
pub mod logging;
pub mod search;
pub mod settings;
