//! Persistence of the brush tool between sessions
//!
//! Stored as compact JSON and written atomically (temp file + rename).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

use super::history::BrushHistory;
use super::tool::BrushShape;
use crate::config::BrushConfig;
use crate::error::{io_error, json_error, Result};
#[cfg(test)]
use crate::error::SettingsKitError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrushState {
    #[serde(default)]
    pub shape: BrushShape,
    pub size: u32,
    pub texture: String,
    pub history: BrushHistory,
}

impl BrushState {
    pub fn from_config(config: &BrushConfig) -> Self {
        BrushState {
            shape: config.default_shape,
            size: config.default_size,
            texture: config.default_texture.clone(),
            history: BrushHistory::with_capacity(
                config.default_texture.clone(),
                config.history_capacity,
            ),
        }
    }

    /// Load a saved state. Returns `Ok(None)` when nothing has been saved yet.
    #[instrument(name = "brush_state_load")]
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!(path = %path.display(), "No saved brush state");
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(io_error(path))?;
        let mut state: BrushState = serde_json::from_str(&content).map_err(json_error(path))?;
        state.history.enforce_capacity();

        info!(
            path = %path.display(),
            texture = %state.texture,
            history_len = state.history.len(),
            "Loaded brush state"
        );
        Ok(Some(state))
    }

    /// Save using atomic write (write temp + rename)
    #[instrument(name = "brush_state_save", skip(self))]
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }

        let json = serde_json::to_string(self).map_err(json_error(path))?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &json).map_err(io_error(&temp_path))?;
        fs::rename(&temp_path, path).map_err(io_error(path))?;

        info!(path = %path.display(), bytes = json.len(), "Saved brush state (atomic)");
        Ok(())
    }
}
