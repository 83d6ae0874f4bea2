//! Query normalization and mode selection.

use crate::types::{MatchError, MatchMode};

/// A validated, lower-cased, trimmed query.
///
/// `tokens` holds the whitespace-separated fragments of the working query; it
/// is never empty and contains no empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    text: String,
    tokens: Vec<String>,
    mode: MatchMode,
}

impl NormalizedQuery {
    /// Lower-case, then trim. Empty and whitespace-only input is rejected.
    pub fn parse(raw: &str) -> Result<Self, MatchError> {
        let lowered = raw.to_lowercase();
        let text = lowered.trim();
        if text.is_empty() {
            return Err(MatchError::MissingQuery);
        }

        let mode = if text.chars().any(char::is_whitespace) {
            MatchMode::MultiToken
        } else {
            MatchMode::SingleToken
        };
        let tokens = text.split_whitespace().map(str::to_string).collect();

        Ok(Self {
            text: text.to_string(),
            tokens,
            mode,
        })
    }

    /// The working query: lower-cased and trimmed, interior whitespace kept.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Whether the working query appears in `haystack`, ignoring case.
    pub(crate) fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(self.text.as_str())
    }

    /// Whether every token appears in `haystack`, ignoring case.
    pub(crate) fn all_tokens_in(&self, haystack: &str) -> bool {
        let haystack = haystack.to_lowercase();
        self.tokens.iter().all(|token| haystack.contains(token.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        let q = NormalizedQuery::parse("  Physics  ").unwrap();
        assert_eq!(q.text(), "physics");
        assert_eq!(q.mode(), MatchMode::SingleToken);
        assert_eq!(q.tokens(), ["physics"]);
    }

    #[test]
    fn interior_whitespace_selects_multi_token() {
        let q = NormalizedQuery::parse("Physics   Tutor").unwrap();
        assert_eq!(q.mode(), MatchMode::MultiToken);
        assert_eq!(q.text(), "physics   tutor");
        assert_eq!(q.tokens(), ["physics", "tutor"]);
    }

    #[test]
    fn tabs_and_newlines_count_as_whitespace() {
        let q = NormalizedQuery::parse("physics\ttutor\nonline").unwrap();
        assert_eq!(q.mode(), MatchMode::MultiToken);
        assert_eq!(q.tokens(), ["physics", "tutor", "online"]);
    }

    #[test]
    fn empty_and_whitespace_only_are_missing() {
        for raw in ["", " ", "\t", " \n \t "] {
            assert_eq!(NormalizedQuery::parse(raw), Err(MatchError::MissingQuery), "{raw:?}");
        }
    }

    #[test]
    fn substring_tests_ignore_case() {
        let q = NormalizedQuery::parse("CAT").unwrap();
        assert!(q.found_in("Concatenate"));
        assert!(!q.found_in("dog"));

        let multi = NormalizedQuery::parse("tutor physics").unwrap();
        assert!(multi.all_tokens_in("You are a Physics Tutor"));
        assert!(!multi.found_in("You are a Physics Tutor"));
    }
}
