use catalog::{PromptRecord, QuestionRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Matching strategy, selected by the shape of the normalized query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// No whitespace in the query: substring OR across all prompt fields.
    SingleToken,
    /// Whitespace present: every token must appear in the system message.
    MultiToken,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::SingleToken => write!(f, "single_token"),
            MatchMode::MultiToken => write!(f, "multi_token"),
        }
    }
}

/// How questions are matched in multi-token mode.
///
/// In single-token mode both policies reduce to the same substring test.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuestionMatch {
    /// The whole trimmed query must be a substring of the question text.
    #[default]
    Phrase,
    /// Every token must be a substring of the question text.
    AllTokens,
}

/// Per-matcher options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MatchOptions {
    #[serde(default)]
    pub question_match: QuestionMatch,
}

/// A prompt that matched a query, with the fields that produced the match.
///
/// The record is a copy; flags are computed per query and never written back
/// to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptHit {
    #[serde(flatten)]
    pub prompt: PromptRecord,
    #[serde(rename = "MatchedCategory", default)]
    pub matched_category: bool,
    #[serde(rename = "MatchedSubcategory", default)]
    pub matched_subcategory: bool,
    #[serde(rename = "MatchedSystemMessage", default)]
    pub matched_system_message: bool,
}

impl PromptHit {
    /// A copy of `prompt` with every flag cleared.
    pub fn unflagged(prompt: &PromptRecord) -> Self {
        Self {
            prompt: prompt.clone(),
            matched_category: false,
            matched_subcategory: false,
            matched_system_message: false,
        }
    }
}

/// Everything a query matched, in catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub results: Vec<PromptHit>,
    #[serde(rename = "resultsQ")]
    pub results_q: Vec<QuestionRecord>,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.results_q.is_empty()
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The query was empty or whitespace only.
    #[error("Missing query param 'q'")]
    MissingQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_phrase_questions() {
        assert_eq!(MatchOptions::default().question_match, QuestionMatch::Phrase);
    }

    #[test]
    fn options_deserialize_snake_case() {
        let opts: MatchOptions =
            serde_json::from_str(r#"{"question_match":"all_tokens"}"#).expect("options parse");
        assert_eq!(opts.question_match, QuestionMatch::AllTokens);

        let empty: MatchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, MatchOptions::default());
    }

    #[test]
    fn result_serializes_wire_field_names() {
        let hit = PromptHit {
            matched_category: true,
            ..PromptHit::unflagged(&PromptRecord {
                id: "p-1".into(),
                system_message: "You are a physics tutor".into(),
                ..Default::default()
            })
        };
        let result = MatchResult {
            results: vec![hit],
            results_q: vec![QuestionRecord {
                id: "q-1".into(),
                question_text: "Why?".into(),
            }],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["results"][0]["id"], "p-1");
        assert_eq!(value["results"][0]["system_message"], "You are a physics tutor");
        assert_eq!(value["results"][0]["MatchedCategory"], true);
        assert_eq!(value["results"][0]["MatchedSubcategory"], false);
        assert_eq!(value["results"][0]["MatchedSystemMessage"], false);
        assert_eq!(value["resultsQ"][0]["Q"], "Why?");
    }

    #[test]
    fn empty_result_serializes_empty_lists() {
        let value = serde_json::to_value(MatchResult::default()).unwrap();
        assert_eq!(value, serde_json::json!({"results": [], "resultsQ": []}));
    }
}
