//! # Prompt Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` answers free-text queries against a [`catalog::Catalog`]
//! snapshot. It owns the whole query-time policy: normalization, mode
//! selection, case-insensitive substring matching and per-field match flags.
//!
//! ## Matching Modes
//!
//! The normalized query (lower-cased, trimmed) selects the mode:
//!
//! - [`MatchMode::SingleToken`]: no whitespace. A prompt matches if the query
//!   is a substring of its category, subcategory, system message or any
//!   keyword. A question matches if the query is a substring of its text.
//! - [`MatchMode::MultiToken`]: whitespace present. A prompt matches only if
//!   every token is a substring of its system message. Questions still match
//!   on the full query unless [`QuestionMatch::AllTokens`] is selected.
//!
//! Matching is pure substring containment; word boundaries are not considered.
//!
//! ## Core Types
//!
//! - [`Matcher`]: stateless engine configured by [`MatchOptions`].
//! - [`NormalizedQuery`]: validated query with its tokens and mode.
//! - [`PromptHit`]: copy of a matched prompt plus `Matched*` flags.
//! - [`MatchResult`]: `results` and `resultsQ`, in catalog order.
//! - [`MatchError`]: the only failure, an empty query.
//!
//! ## Example Usage
//!
//! ```
//! use catalog::PromptRecord;
//! use matcher::search;
//!
//! let prompts = vec![PromptRecord {
//!     id: "p-1".into(),
//!     category: "Science".into(),
//!     subcategory: "Physics".into(),
//!     system_message: "You are a physics tutor".into(),
//!     keywords: vec!["mechanics".into(), "energy".into()],
//!     topic: "education".into(),
//! }];
//!
//! let by_keyword = search("Mechanics", &prompts, &[]).expect("search");
//! assert_eq!(by_keyword.results.len(), 1);
//! assert!(!by_keyword.results[0].matched_system_message);
//!
//! let by_phrase = search("physics tutor", &prompts, &[]).expect("search");
//! assert!(by_phrase.results[0].matched_system_message);
//! ```
//!
//! ## Observability
//!
//! Install a [`SearchMetrics`] implementation via [`set_search_metrics`] to
//! record per-search latency and hit counts.

pub mod engine;
pub mod metrics;
pub mod query;
pub mod types;

pub use crate::engine::{search, Matcher};
pub use crate::metrics::{set_search_metrics, SearchMetrics};
pub use crate::query::NormalizedQuery;
pub use crate::types::{MatchError, MatchMode, MatchOptions, MatchResult, PromptHit, QuestionMatch};
