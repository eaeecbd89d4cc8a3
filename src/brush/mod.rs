//! Texture brush tool
//!
//! - `history` - bounded most-recently-used texture list
//! - `tool` - brush controller (shape, size, texture, listeners)
//! - `state` - JSON persistence of the controller

mod history;
mod state;
mod tool;

pub use history::BrushHistory;
pub use state::BrushState;
pub use tool::{
    BrushEvent, BrushListener, BrushShape, HistoryRow, TextureBrushTool, TextureCatalog,
};
