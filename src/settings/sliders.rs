//! Slider position ↔ setting value mapping

use serde::{Deserialize, Serialize};

use super::store::{SettingValue, SettingsStore};
use crate::error::Result;

/// World units per exterior cell, used by `Cell` sliders
pub const CELL_SIZE_IN_UNITS: f64 = 8192.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderKind {
    /// Float setting scaled into `min..=max`, label with two decimals
    Float,
    /// Integer setting scaled into `min..=max`
    Integer,
    /// Integer distance in units, labelled in cells
    Cell,
    /// Integer setting equal to the scroll position
    Raw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub category: String,
    pub name: String,
    pub kind: SliderKind,
    pub min: f64,
    pub max: f64,
    pub scroll_range: usize,
    /// Caption template, `%s` is replaced by the value text
    #[serde(default)]
    pub label_caption: Option<String>,
}

impl SliderSpec {
    pub fn new(category: &str, name: &str, kind: SliderKind, scroll_range: usize) -> Self {
        SliderSpec {
            category: category.to_string(),
            name: name.to_string(),
            kind,
            min: 0.0,
            max: 1.0,
            scroll_range,
            label_caption: None,
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_label(mut self, caption: &str) -> Self {
        self.label_caption = Some(caption.to_string());
        self
    }

    fn last_position(&self) -> usize {
        self.scroll_range.saturating_sub(1)
    }

    /// Value for a scroll position before integer settings truncate it
    fn scaled_value(&self, pos: usize) -> f64 {
        if self.kind == SliderKind::Raw {
            return pos as f64;
        }
        let fraction = match self.last_position() {
            0 => 0.0,
            last => pos as f64 / last as f64,
        };
        self.min + (self.max - self.min) * fraction
    }

    /// Setting value for a scroll position
    pub fn value_at(&self, pos: usize) -> SettingValue {
        let value = self.scaled_value(pos);
        match self.kind {
            SliderKind::Float => SettingValue::Float(value),
            _ => SettingValue::Int(value as i64),
        }
    }

    /// Scroll position for a setting value, clamped into the slider range
    pub fn position_for(&self, value: f64) -> usize {
        if self.kind == SliderKind::Raw {
            return value.max(0.0) as usize;
        }
        if self.max <= self.min {
            return 0;
        }
        let normalized = (value.clamp(self.min, self.max) - self.min) / (self.max - self.min);
        (normalized * self.last_position() as f64) as usize
    }

    pub fn value_text(&self, value: f64) -> String {
        match self.kind {
            SliderKind::Cell => format!("{:.2}", value / CELL_SIZE_IN_UNITS),
            SliderKind::Float => format!("{:.2}", value),
            SliderKind::Integer | SliderKind::Raw => (value as i64).to_string(),
        }
    }

    /// Label caption with the value substituted, if the slider has a label
    pub fn label(&self, value_text: &str) -> Option<String> {
        self.label_caption
            .as_ref()
            .map(|caption| caption.replace("%s", value_text))
    }

    /// Current `(position, value text)` from the store
    pub fn read(&self, store: &dyn SettingsStore) -> Result<(usize, String)> {
        let value = match self.kind {
            SliderKind::Raw => store.get_int(&self.category, &self.name)? as f64,
            _ => store.get_float(&self.category, &self.name)?,
        };
        Ok((self.position_for(value), self.value_text(value)))
    }

    /// Store the value for `pos` and return its value text.
    ///
    /// The text is formatted from the scaled value, so a `Cell` label keeps
    /// the fraction that the stored integer drops.
    pub fn write(&self, store: &mut dyn SettingsStore, pos: usize) -> String {
        store.set(&self.category, &self.name, self.value_at(pos));
        self.value_text(self.scaled_value(pos))
    }
}
