//! Filtering and ordering of searchable records
//!
//! Every record is scored on its name and on its hint with the same
//! [`WordSearch`]. Records scoring zero on both are dropped; the rest are
//! ordered by name score (descending), hint score (descending), name
//! (ascending, byte order) and finally original index.

use std::cmp::{Ordering, Reverse};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pattern::WordSearch;
use crate::error::Result;

/// A unit of content that can be filtered, e.g. a script settings page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableRecord {
    /// Stable identity of the record within its provider
    #[serde(default)]
    pub index: usize,
    pub name: String,
    /// Extra text searched but not displayed
    #[serde(default)]
    pub hint: String,
}

impl SearchableRecord {
    pub fn new(index: usize, name: impl Into<String>, hint: impl Into<String>) -> Self {
        SearchableRecord {
            index,
            name: name.into(),
            hint: hint.into(),
        }
    }

    /// Number records by position, e.g. pages as registered by scripts
    pub fn enumerate<N, H>(pages: impl IntoIterator<Item = (N, H)>) -> Vec<Self>
    where
        N: Into<String>,
        H: Into<String>,
    {
        pages
            .into_iter()
            .enumerate()
            .map(|(index, (name, hint))| Self::new(index, name, hint))
            .collect()
    }
}

/// Supplies the live candidate set each time a search runs
pub trait CandidateProvider {
    fn candidates(&self) -> Vec<SearchableRecord>;
}

impl CandidateProvider for [SearchableRecord] {
    fn candidates(&self) -> Vec<SearchableRecord> {
        self.to_vec()
    }
}

impl CandidateProvider for Vec<SearchableRecord> {
    fn candidates(&self) -> Vec<SearchableRecord> {
        self.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedResult {
    pub index: usize,
    pub name: String,
    pub name_score: usize,
    pub hint_score: usize,
}

impl RankedResult {
    fn sort_key(&self) -> (Reverse<usize>, Reverse<usize>, &str, usize) {
        (
            Reverse(self.name_score),
            Reverse(self.hint_score),
            self.name.as_str(),
            self.index,
        )
    }
}

impl Ord for RankedResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for RankedResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl WordSearch {
    /// Score, filter and order `records`
    pub fn rank(&self, records: &[SearchableRecord]) -> Vec<RankedResult> {
        let mut ranked: Vec<RankedResult> = records
            .iter()
            .filter_map(|record| {
                let name_score = self.score(&record.name);
                let hint_score = self.score(&record.hint);
                (name_score + hint_score > 0).then(|| RankedResult {
                    index: record.index,
                    name: record.name.clone(),
                    name_score,
                    hint_score,
                })
            })
            .collect();
        ranked.sort();

        debug!(
            pattern = self.as_str(),
            candidates = records.len(),
            matched = ranked.len(),
            "Ranked search candidates"
        );
        ranked
    }
}

/// Compile `query` and rank `records` against it
pub fn rank_records(query: &str, records: &[SearchableRecord]) -> Result<Vec<RankedResult>> {
    Ok(WordSearch::new(query)?.rank(records))
}
