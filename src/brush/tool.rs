//! Texture brush tool controller
//!
//! Holds the brush shape, size and selected texture plus the texture history
//! shown in the tool's popup panel. Listeners registered with
//! [`TextureBrushTool::subscribe`] are told about every change so the
//! toolbar icon, tooltip and terrain editing mode can follow along.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::history::BrushHistory;
use super::state::BrushState;
use crate::config::{BrushConfig, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushShape {
    #[default]
    Point,
    Square,
    Circle,
    Custom,
}

impl BrushShape {
    pub const ALL: [BrushShape; 4] = [
        BrushShape::Point,
        BrushShape::Square,
        BrushShape::Circle,
        BrushShape::Custom,
    ];

    /// Position of the shape's button in the shape selector
    pub fn index(self) -> usize {
        match self {
            BrushShape::Point => 0,
            BrushShape::Square => 1,
            BrushShape::Circle => 2,
            BrushShape::Custom => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BrushShape::Point => "point",
            BrushShape::Square => "square",
            BrushShape::Circle => "circle",
            BrushShape::Custom => "custom",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            BrushShape::Point => "Change texture of a single point",
            BrushShape::Square => "Change texture of a square area",
            BrushShape::Circle => "Change texture of a circular area",
            BrushShape::Custom => "Change texture of a custom selection",
        }
    }

    /// Toolbar icon resource for the shape
    pub fn icon(self) -> &'static str {
        match self {
            BrushShape::Point => ":scenetoolbar/brush-point",
            BrushShape::Square => ":scenetoolbar/brush-square",
            BrushShape::Circle => ":scenetoolbar/brush-circle",
            BrushShape::Custom => ":scenetoolbar/brush-custom",
        }
    }
}

impl fmt::Display for BrushShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrushShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown brush shape '{}'", s))
    }
}

/// Notifications sent to brush listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrushEvent {
    ShapeChanged(BrushShape),
    SizeChanged(u32),
    /// The selected texture changed (by drop, by history pick or programmatically)
    TextureChanged(String),
    /// A texture was picked from the history panel
    TexturePicked(String),
}

pub type BrushListener = Box<dyn FnMut(&BrushEvent) + 'static>;

/// Lookup of land texture records by id
pub trait TextureCatalog {
    /// Texture file name for `id`, if the record exists
    fn texture_file(&self, id: &str) -> Option<String>;
}

impl TextureCatalog for HashMap<String, String> {
    fn texture_file(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

impl TextureCatalog for BTreeMap<String, String> {
    fn texture_file(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

/// One row of the history panel: texture id and its file name (empty if unknown)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: String,
    pub file: String,
}

pub struct TextureBrushTool {
    shape: BrushShape,
    size: u32,
    texture: String,
    history: BrushHistory,
    listeners: Vec<BrushListener>,
}

impl fmt::Debug for TextureBrushTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureBrushTool")
            .field("shape", &self.shape)
            .field("size", &self.size)
            .field("texture", &self.texture)
            .field("history", &self.history)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn clamp_size(size: u32) -> u32 {
    size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
}

impl TextureBrushTool {
    pub fn new(config: &BrushConfig) -> Self {
        Self::from_state(BrushState::from_config(config))
    }

    pub fn from_state(state: BrushState) -> Self {
        TextureBrushTool {
            shape: state.shape,
            size: clamp_size(state.size),
            texture: state.texture,
            history: state.history,
            listeners: Vec::new(),
        }
    }

    /// Snapshot of the tool for persistence
    pub fn state(&self) -> BrushState {
        BrushState {
            shape: self.shape,
            size: self.size,
            texture: self.texture.clone(),
            history: self.history.clone(),
        }
    }

    pub fn subscribe(&mut self, listener: BrushListener) {
        self.listeners.push(listener);
    }

    fn emit(&mut self, event: BrushEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    pub fn shape(&self) -> BrushShape {
        self.shape
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn texture(&self) -> &str {
        &self.texture
    }

    pub fn history(&self) -> &BrushHistory {
        &self.history
    }

    pub fn set_shape(&mut self, shape: BrushShape) {
        self.shape = shape;
        debug!(shape = %shape, "Brush shape changed");
        self.emit(BrushEvent::ShapeChanged(shape));
    }

    /// Set the brush size, clamped to 1-50. Returns the size actually applied.
    pub fn set_size(&mut self, size: u32) -> u32 {
        let clamped = clamp_size(size);
        if clamped != size {
            warn!(requested = size, applied = clamped, "Brush size out of range");
        }
        self.size = clamped;
        self.emit(BrushEvent::SizeChanged(clamped));
        clamped
    }

    pub fn set_texture(&mut self, id: impl Into<String>) {
        let id = id.into();
        debug!(texture = %id, "Brush texture changed");
        self.texture = id.clone();
        self.emit(BrushEvent::TextureChanged(id));
    }

    /// Put `id` at the top of the history
    pub fn record_texture_use(&mut self, id: impl Into<String>) {
        self.history.record_use(id);
    }

    /// A texture was dropped on the tool: select it and remember it
    pub fn drop_texture(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.set_texture(id.clone());
        self.record_texture_use(id);
    }

    /// Pick the texture in history row `row`.
    ///
    /// The row is brought to the front of the history, becomes the selected
    /// texture and listeners receive [`BrushEvent::TexturePicked`]. Returns
    /// `None` (and changes nothing) when the row isn't in the history.
    pub fn select_history_row(&mut self, row: usize) -> Option<String> {
        let Some(id) = self.history.get(row).map(str::to_string) else {
            warn!(row, len = self.history.len(), "History row out of range");
            return None;
        };
        self.history.swap_to_front(row);
        self.set_texture(id.clone());
        info!(texture = %id, row, "Texture picked from history");
        self.emit(BrushEvent::TexturePicked(id.clone()));
        Some(id)
    }

    pub fn history_rows(&self, catalog: &dyn TextureCatalog) -> Vec<HistoryRow> {
        self.history
            .iter()
            .map(|id| HistoryRow {
                id: id.to_string(),
                file: catalog.texture_file(id).unwrap_or_default(),
            })
            .collect()
    }

    /// Label under the shape buttons, e.g. `Selected texture: L0#3 grass.dds`
    pub fn selected_label(&self, catalog: &dyn TextureCatalog) -> String {
        format!(
            "Selected texture: {} {}",
            self.texture,
            catalog.texture_file(&self.texture).unwrap_or_default()
        )
    }

    /// Rich-text tooltip for the toolbar button
    pub fn tooltip(&self, catalog: &dyn TextureCatalog) -> String {
        format!(
            "Brush settings <p>Currently selected: {}<p>{}<br>(drop texture here to change)",
            self.shape.tooltip(),
            self.selected_label(catalog)
        )
    }
}
