//! Weighted text search over named, hinted records
//!
//! - `pattern` - query tokenization, escaping and per-field scoring
//! - `ranker` - record filtering and ordering

mod pattern;
mod ranker;

pub use pattern::{build_pattern, query_words, WordSearch, MATCH_ALL_PATTERN};
pub use ranker::{rank_records, CandidateProvider, RankedResult, SearchableRecord};

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
