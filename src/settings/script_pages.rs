//! Script settings tab: pages registered by scripts, filtered by a search box

use tracing::debug;

use crate::search::{CandidateProvider, RankedResult, WordSearch};

#[derive(Debug, Clone, Default)]
pub struct ScriptSettingsPanel {
    filter: String,
    rows: Vec<RankedResult>,
    current_page: Option<usize>,
    page_count: usize,
}

impl ScriptSettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Visible rows, best match first
    pub fn rows(&self) -> &[RankedResult] {
        &self.rows
    }

    pub fn current_page(&self) -> Option<usize> {
        self.current_page
    }

    /// The tab is hidden until at least one page is registered
    pub fn is_enabled(&self) -> bool {
        self.page_count > 0
    }

    /// Rebuild the rows from the provider's current pages
    pub fn render<P: CandidateProvider + ?Sized>(&mut self, provider: &P) {
        let pages = provider.candidates();
        self.page_count = pages.len();

        self.rows = match WordSearch::new(&self.filter) {
            Ok(search) => search.rank(&pages),
            Err(err) => {
                crate::debug_panic!("escaped script filter failed to compile: {}", err);
                Vec::new()
            }
        };

        if self.current_page.is_some_and(|page| page >= self.page_count) {
            self.current_page = None;
        }

        debug!(
            filter = %self.filter,
            pages = self.page_count,
            rows = self.rows.len(),
            "Rendered script settings"
        );
    }

    pub fn set_filter<P: CandidateProvider + ?Sized>(&mut self, filter: &str, provider: &P) {
        self.filter = filter.to_string();
        self.render(provider);
    }

    /// Show the page behind list row `row`; rows outside the list show nothing
    pub fn select(&mut self, row: usize) -> Option<usize> {
        self.current_page = self.rows.get(row).map(|result| result.index);
        self.current_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchableRecord;

    fn pages() -> Vec<SearchableRecord> {
        SearchableRecord::enumerate([
            ("Camera", "third person view offset"),
            ("Controls", "always run toggle sneak"),
            ("Interface", "hud camera text"),
        ])
    }

    #[test]
    fn test_empty_filter_lists_all_pages_alphabetically() {
        let mut panel = ScriptSettingsPanel::new();
        panel.render(&pages());
        let names: Vec<&str> = panel.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Camera", "Controls", "Interface"]);
        assert!(panel.is_enabled());
    }

    #[test]
    fn test_filter_prefers_name_matches() {
        let mut panel = ScriptSettingsPanel::new();
        panel.set_filter("camera", &pages());
        let indices: Vec<usize> = panel.rows().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_select_maps_row_to_page_index() {
        let mut panel = ScriptSettingsPanel::new();
        panel.set_filter("run", &pages());
        assert_eq!(panel.select(0), Some(1));
        assert_eq!(panel.current_page(), Some(1));
        assert_eq!(panel.select(5), None);
        assert_eq!(panel.current_page(), None);
    }

    #[test]
    fn test_no_pages_disables_panel() {
        let mut panel = ScriptSettingsPanel::new();
        panel.render(&Vec::<SearchableRecord>::new());
        assert!(!panel.is_enabled());
        assert!(panel.rows().is_empty());
    }

    #[test]
    fn test_current_page_dropped_when_pages_disappear() {
        let mut panel = ScriptSettingsPanel::new();
        panel.render(&pages());
        panel.select(2);
        panel.render(&pages()[..1]);
        assert_eq!(panel.current_page(), None);
    }
}
