//! Workspace umbrella crate for Prompt Search.
//!
//! This crate stitches the catalog loader and the matcher together so callers
//! can go from a resource source and a raw query to a [`MatchResult`] with a
//! single call. Long-running services should load a [`Catalog`] once and call
//! [`Matcher::search_catalog`] per query instead; [`search_source`] reloads on
//! every call and shares nothing between calls.

pub use catalog::{
    load, Catalog, DirectorySource, Group, LoadControl, LoadError, Loader, PromptRecord,
    QuestionRecord, ResourceSource, StaticSource,
};
pub use matcher::{
    search, set_search_metrics, MatchError, MatchMode, MatchOptions, MatchResult, Matcher,
    NormalizedQuery, PromptHit, QuestionMatch, SearchMetrics,
};

use std::error::Error;
use std::fmt;

/// Errors that can occur while answering a query end-to-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Load(LoadError),
    Match(MatchError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Load(err) => write!(f, "catalog load failure: {err}"),
            PipelineError::Match(err) => write!(f, "query rejected: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Load(err) => Some(err),
            PipelineError::Match(err) => Some(err),
        }
    }
}

impl From<LoadError> for PipelineError {
    fn from(value: LoadError) -> Self {
        PipelineError::Load(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        PipelineError::Match(value)
    }
}

/// Load `source` and answer `raw_query` against it, with explicit options.
///
/// The query is validated before anything is read, so an empty query never
/// touches the source.
pub fn search_source_with_options<S: ResourceSource>(
    source: S,
    raw_query: &str,
    options: MatchOptions,
    control: &LoadControl,
) -> Result<MatchResult, PipelineError> {
    let query = NormalizedQuery::parse(raw_query)?;
    let catalog = Loader::new(source).load_with(control)?;
    tracing::debug!(
        mode = %query.mode(),
        prompts = catalog.prompt_count(),
        questions = catalog.question_count(),
        "searching freshly loaded catalog"
    );
    Ok(Matcher::new(options).search_normalized(&query, &catalog.prompts, &catalog.questions))
}

/// Load `source` and answer `raw_query` against it using default options.
pub fn search_source<S: ResourceSource>(
    source: S,
    raw_query: &str,
) -> Result<MatchResult, PipelineError> {
    search_source_with_options(source, raw_query, MatchOptions::default(), &LoadControl::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: &str = r#"[
        {"id":"p-1","category":"Science","subcategory":"Physics",
         "system_message":"You are a physics tutor","keywords":["mechanics","energy"],"topic":"edu"}
    ]"#;
    const QUESTIONS: &str = r#"[{"id":"q-1","Q":"What is the capital of France?"}]"#;

    fn fixture() -> StaticSource {
        StaticSource::new()
            .with_prompts("science.json", ROLES)
            .with_questions("geo.json", QUESTIONS)
    }

    #[test]
    fn search_source_loads_and_matches() {
        let result = search_source(fixture(), "capital").expect("search should succeed");
        assert!(result.results.is_empty());
        assert_eq!(result.results_q.len(), 1);
    }

    #[test]
    fn empty_query_is_rejected_before_loading() {
        let control = LoadControl::new();
        control.cancel();
        let err = search_source_with_options(fixture(), "  ", MatchOptions::default(), &control)
            .unwrap_err();
        assert_eq!(err, PipelineError::Match(MatchError::MissingQuery));
    }

    #[test]
    fn load_errors_propagate_unchanged() {
        let control = LoadControl::new();
        control.cancel();
        let err = search_source_with_options(fixture(), "physics", MatchOptions::default(), &control)
            .unwrap_err();
        assert_eq!(err, PipelineError::Load(LoadError::Cancelled));
        assert!(err.source().is_some());
    }

    #[test]
    fn display_names_the_failing_stage() {
        let err = PipelineError::from(MatchError::MissingQuery);
        assert_eq!(err.to_string(), "query rejected: Missing query param 'q'");
    }
}
