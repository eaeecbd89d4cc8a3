//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;
use crate::brush::BrushShape;

// ============================================
// BRUSH CONFIG
// ============================================

/// Defaults for the texture brush tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrushConfig {
    /// Texture id selected on startup and used to seed the history (default: "L0#0")
    #[serde(default = "default_brush_texture")]
    pub default_texture: String,
    /// Maximum number of entries in the brush history (default: 5)
    #[serde(default = "default_brush_history_capacity")]
    pub history_capacity: usize,
    /// Initial brush size, clamped to 1-50 (default: 1)
    #[serde(default = "default_brush_size")]
    pub default_size: u32,
    /// Initial brush shape (default: point)
    #[serde(default)]
    pub default_shape: BrushShape,
}

fn default_brush_texture() -> String {
    DEFAULT_BRUSH_TEXTURE.to_string()
}
fn default_brush_history_capacity() -> usize {
    DEFAULT_BRUSH_HISTORY_CAPACITY
}
fn default_brush_size() -> u32 {
    DEFAULT_BRUSH_SIZE
}

impl Default for BrushConfig {
    fn default() -> Self {
        BrushConfig {
            default_texture: default_brush_texture(),
            history_capacity: DEFAULT_BRUSH_HISTORY_CAPACITY,
            default_size: DEFAULT_BRUSH_SIZE,
            default_shape: BrushShape::default(),
        }
    }
}

// ============================================
// MAIN CONFIG
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Texture brush defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brush: Option<BrushConfig>,
    /// Where the settings store is persisted (default: ~/.settings-kit/settings.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_path: Option<String>,
    /// Where the brush tool state is persisted (default: ~/.settings-kit/brush.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brush_state_path: Option<String>,
}

impl Config {
    /// Returns the brush config, or defaults if not configured
    pub fn get_brush(&self) -> BrushConfig {
        self.brush.clone().unwrap_or_default()
    }

    /// Returns the settings file path with `~` expanded
    pub fn get_settings_path(&self) -> PathBuf {
        expand_path(self.settings_path.as_deref().unwrap_or(DEFAULT_SETTINGS_PATH))
    }

    /// Returns the brush state file path with `~` expanded
    pub fn get_brush_state_path(&self) -> PathBuf {
        expand_path(
            self.brush_state_path
                .as_deref()
                .unwrap_or(DEFAULT_BRUSH_STATE_PATH),
        )
    }
}

pub(crate) fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
