//! Query to pattern compilation and per-field scoring
//!
//! A query is split into whitespace-separated words. Each word is escaped
//! with [`regex::escape`], which covers every metacharacter of the `regex`
//! dialect (`\ . + * ? ( ) | [ ] { } ^ $ # & - ~`), and the words are joined
//! into one capturing alternation group, e.g. `fire ice` -> `(fire|ice)`.
//! Matching is case-insensitive. A query with no words compiles to the
//! match-all pattern `^(.*)$`.

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// Pattern used when the query has no words; matches every text
pub const MATCH_ALL_PATTERN: &str = "^(.*)$";

/// Split a query on whitespace runs
pub fn query_words(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}

/// Build the (uncompiled) alternation pattern for `query`
pub fn build_pattern(query: &str) -> String {
    let words: Vec<String> = query_words(query).into_iter().map(regex::escape).collect();
    if words.is_empty() {
        return MATCH_ALL_PATTERN.to_string();
    }
    format!("({})", words.join("|"))
}

/// A compiled, case-insensitive word search
#[derive(Debug, Clone)]
pub struct WordSearch {
    regex: Regex,
    match_all: bool,
}

impl WordSearch {
    pub fn new(query: &str) -> Result<Self> {
        let pattern = build_pattern(query);
        // dot_matches_new_line keeps the match-all pattern true for multi-line hints
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()?;
        Ok(WordSearch {
            regex,
            match_all: pattern == MATCH_ALL_PATTERN,
        })
    }

    /// True when the query had no words and every text matches
    pub fn is_match_all(&self) -> bool {
        self.match_all
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Score `text`: the number of groups reported by the first match.
    ///
    /// That is 0 when nothing matches and otherwise the group count of the
    /// pattern including the whole-match group, i.e. always 2. It does not
    /// grow with the number of words or occurrences found.
    pub fn score(&self, text: &str) -> usize {
        self.regex
            .captures(text)
            .map(|captures| captures.len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_words_split_on_whitespace_runs() {
        assert_eq!(query_words("  fire \t ice\nbolt "), vec!["fire", "ice", "bolt"]);
        assert!(query_words(" \t\n").is_empty());
    }

    #[test]
    fn test_build_pattern_joins_words() {
        assert_eq!(build_pattern("fire ice"), "(fire|ice)");
        assert_eq!(build_pattern("fire"), "(fire)");
    }

    #[test]
    fn test_build_pattern_escapes_metacharacters() {
        assert_eq!(build_pattern("a.b (c)"), r"(a\.b|\(c\))");
        assert_eq!(build_pattern("x|y"), r"(x\|y)");
        assert_eq!(build_pattern(r"end\"), r"(end\\)");
        assert_eq!(build_pattern("a]b}"), r"(a\]b\})");
    }

    #[test]
    fn test_empty_query_is_match_all() {
        assert_eq!(build_pattern(""), MATCH_ALL_PATTERN);
        assert_eq!(build_pattern("   "), MATCH_ALL_PATTERN);
        assert!(WordSearch::new("").unwrap().is_match_all());
        assert!(!WordSearch::new("x").unwrap().is_match_all());
    }

    #[test]
    fn test_every_ascii_punctuation_query_compiles() {
        let punctuation: String = (33u8..127)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation())
            .collect();
        for c in punctuation.chars() {
            let query = format!("{}x{}", c, c);
            let search = WordSearch::new(&query).unwrap();
            assert_eq!(search.score(&query), 2, "query {:?}", query);
            assert_eq!(search.score("x"), 0, "query {:?}", query);
        }
    }

    #[test]
    fn test_score_is_group_count_of_first_match() {
        let search = WordSearch::new("fire").unwrap();
        assert_eq!(search.score("Fireball"), 2);
        assert_eq!(search.score("FIRE fire fire"), 2);
        assert_eq!(search.score("Ice Spike"), 0);
        assert_eq!(search.score(""), 0);

        // More words do not raise the score
        let search = WordSearch::new("fire ball").unwrap();
        assert_eq!(search.score("Fireball"), 2);
    }

    #[test]
    fn test_match_all_scores_everything() {
        let search = WordSearch::new(" ").unwrap();
        assert_eq!(search.score(""), 2);
        assert_eq!(search.score("anything"), 2);
        assert_eq!(search.score("line one\nline two"), 2);
    }

    #[test]
    fn test_case_insensitive_unicode() {
        let search = WordSearch::new("ÉCLAIR").unwrap();
        assert_eq!(search.score("éclair de feu"), 2);
    }
}
