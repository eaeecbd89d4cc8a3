//! Display modes: resolution parsing, ordering, aspect labels and the
//! window mode options.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsKitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Resolution { width, height }
    }

    /// Reduced aspect ratio, `None` for a zero-sized mode
    pub fn aspect_label(&self) -> Option<String> {
        aspect_label(self.width, self.height)
    }

    /// List label: `"1920 x 1080 (16 : 9)"`
    pub fn label(&self) -> String {
        match self.aspect_label() {
            Some(aspect) => format!("{} x {} ({})", self.width, self.height, aspect),
            None => format!("{} x {}", self.width, self.height),
        }
    }

    /// Larger widths first, then larger heights
    pub fn cmp_descending(&self, other: &Self) -> Ordering {
        other
            .width
            .cmp(&self.width)
            .then_with(|| other.height.cmp(&self.height))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Resolution {
    type Err = SettingsKitError;

    fn from_str(s: &str) -> Result<Self> {
        parse_resolution(s)
    }
}

/// Parse a resolution label or a bare `WxH`.
///
/// The text is split on `@`, `(` and `x`; the first two parts are the width
/// and height. Anything after them (aspect, refresh rate) is ignored.
pub fn parse_resolution(text: &str) -> Result<Resolution> {
    let invalid = || SettingsKitError::InvalidResolution(text.to_string());
    let mut parts = text
        .split(['@', '(', 'x'])
        .map(str::trim)
        .filter(|part| !part.is_empty());

    let width = parts.next().ok_or_else(invalid)?;
    let height = parts.next().ok_or_else(invalid)?;
    Ok(Resolution {
        width: width.parse().map_err(|_| invalid())?,
        height: height.parse().map_err(|_| invalid())?,
    })
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `"16 : 9"`; 8:5 is reported as `"16 : 10"`
pub fn aspect_label(width: u32, height: u32) -> Option<String> {
    let divisor = gcd(width, height);
    if divisor == 0 {
        return None;
    }
    let (x, y) = (width / divisor, height / divisor);
    if (x, y) == (8, 5) {
        return Some("16 : 10".to_string());
    }
    Some(format!("{} : {}", x, y))
}

pub fn sort_resolutions(modes: &mut [Resolution]) {
    modes.sort_by(Resolution::cmp_descending);
}

/// The resolution list shown in the video tab.
///
/// Items are unique labels in descending order; at most one item is
/// highlighted.
#[derive(Debug, Clone, Default)]
pub struct ResolutionList {
    items: Vec<String>,
    selected: Option<usize>,
}

impl ResolutionList {
    pub fn new(modes: &[Resolution]) -> Self {
        let mut sorted = modes.to_vec();
        sort_resolutions(&mut sorted);

        let mut items: Vec<String> = Vec::with_capacity(sorted.len());
        for mode in sorted {
            let label = mode.label();
            if !items.contains(&label) {
                items.push(label);
            }
        }
        ResolutionList {
            items,
            selected: None,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.items.len());
    }

    pub fn resolution_at(&self, index: usize) -> Option<Resolution> {
        self.items
            .get(index)
            .and_then(|label| parse_resolution(label).ok())
    }

    pub fn selected_resolution(&self) -> Option<Resolution> {
        self.selected.and_then(|i| self.resolution_at(i))
    }

    pub fn contains(&self, resolution: Resolution) -> bool {
        self.position(resolution).is_some()
    }

    pub fn position(&self, resolution: Resolution) -> Option<usize> {
        (0..self.items.len()).find(|&i| self.resolution_at(i) == Some(resolution))
    }

    /// Select the item matching `current`, clearing the selection if none does
    pub fn highlight(&mut self, current: Resolution) -> Option<usize> {
        self.selected = self.position(current);
        self.selected
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    Fullscreen,
    WindowedFullscreen,
    #[default]
    Windowed,
}

impl WindowMode {
    pub const ALL: [WindowMode; 3] = [
        WindowMode::Fullscreen,
        WindowMode::WindowedFullscreen,
        WindowMode::Windowed,
    ];

    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(self) -> i64 {
        match self {
            WindowMode::Fullscreen => 0,
            WindowMode::WindowedFullscreen => 1,
            WindowMode::Windowed => 2,
        }
    }

    /// The border toggle only applies to a regular window
    pub fn window_border_enabled(self) -> bool {
        self == WindowMode::Windowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_and_bare_forms() {
        assert_eq!(
            parse_resolution("1920 x 1080 (16 : 9)").unwrap(),
            Resolution::new(1920, 1080)
        );
        assert_eq!(
            parse_resolution("1280x800").unwrap(),
            Resolution::new(1280, 800)
        );
        assert_eq!(
            "640 x 480 @ 60".parse::<Resolution>().unwrap(),
            Resolution::new(640, 480)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_resolution("").is_err());
        assert!(parse_resolution("1920").is_err());
        assert!(matches!(
            parse_resolution("wide x tall"),
            Err(SettingsKitError::InvalidResolution(_))
        ));
    }

    #[test]
    fn test_aspect_labels() {
        assert_eq!(aspect_label(1920, 1080).as_deref(), Some("16 : 9"));
        assert_eq!(aspect_label(1280, 800).as_deref(), Some("16 : 10"));
        assert_eq!(aspect_label(1024, 768).as_deref(), Some("4 : 3"));
        assert_eq!(aspect_label(0, 0), None);
        assert_eq!(Resolution::new(0, 0).label(), "0 x 0");
    }

    #[test]
    fn test_sort_descending_by_width_then_height() {
        let mut modes = vec![
            Resolution::new(1280, 720),
            Resolution::new(1920, 1080),
            Resolution::new(1280, 1024),
            Resolution::new(800, 600),
        ];
        sort_resolutions(&mut modes);
        assert_eq!(
            modes,
            vec![
                Resolution::new(1920, 1080),
                Resolution::new(1280, 1024),
                Resolution::new(1280, 720),
                Resolution::new(800, 600),
            ]
        );
    }

    #[test]
    fn test_list_skips_duplicates_and_highlights() {
        let mut list = ResolutionList::new(&[
            Resolution::new(800, 600),
            Resolution::new(1920, 1080),
            Resolution::new(800, 600),
        ]);
        assert_eq!(list.items(), &["1920 x 1080 (16 : 9)", "800 x 600 (4 : 3)"]);

        assert_eq!(list.highlight(Resolution::new(800, 600)), Some(1));
        assert_eq!(list.selected_resolution(), Some(Resolution::new(800, 600)));

        assert_eq!(list.highlight(Resolution::new(1024, 768)), None);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_window_mode_border() {
        assert_eq!(WindowMode::from_index(0), Some(WindowMode::Fullscreen));
        assert_eq!(WindowMode::from_index(3), None);
        assert_eq!(WindowMode::from_index(-1), None);
        assert!(WindowMode::Windowed.window_border_enabled());
        assert!(!WindowMode::WindowedFullscreen.window_border_enabled());
        assert_eq!(WindowMode::default().index(), 2);
    }
}
