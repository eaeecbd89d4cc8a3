//! Bounded most-recently-used list of brush textures.
//!
//! Newest entries go to the front and the oldest entry falls off the back
//! once the list is full. Reinserting an id that is already present does not
//! remove the older copy.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::config::{DEFAULT_BRUSH_HISTORY_CAPACITY, MAX_BRUSH_HISTORY_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushHistory {
    entries: VecDeque<String>,
    #[serde(default = "default_capacity")]
    capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_BRUSH_HISTORY_CAPACITY
}

fn clamp_capacity(capacity: usize) -> usize {
    capacity.clamp(1, MAX_BRUSH_HISTORY_CAPACITY)
}

impl BrushHistory {
    /// Create a history holding only `seed`, with the default capacity of 5
    pub fn new(seed: impl Into<String>) -> Self {
        Self::with_capacity(seed, DEFAULT_BRUSH_HISTORY_CAPACITY)
    }

    /// Create a history holding only `seed`. The capacity is clamped to
    /// `1..=MAX_BRUSH_HISTORY_CAPACITY`.
    pub fn with_capacity(seed: impl Into<String>, capacity: usize) -> Self {
        let capacity = clamp_capacity(capacity);
        let mut entries = VecDeque::new();
        entries.push_back(seed.into());
        Self { entries, capacity }
    }

    /// Record a use of `id`: insert it at the front, evicting the tail when full
    pub fn record_use(&mut self, id: impl Into<String>) {
        self.entries.push_front(id.into());
        self.entries.truncate(self.capacity);
    }

    /// Bring the entry at `position` to the front without growing the list.
    ///
    /// Entries that were ahead of it move back by one slot.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    pub fn swap_to_front(&mut self, position: usize) {
        assert!(
            position < self.entries.len(),
            "history position {} out of range for length {}",
            position,
            self.entries.len()
        );
        self.entries.make_contiguous()[..=position].rotate_right(1);
    }

    /// Re-establish the capacity bound after deserializing untrusted data
    pub(crate) fn enforce_capacity(&mut self) {
        self.capacity = clamp_capacity(self.capacity);
        self.entries.truncate(self.capacity);
    }

    pub fn front(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for BrushHistory {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_BRUSH_TEXTURE)
    }
}
