use std::error::Error;

use promptsearch::{
    search, search_source, search_source_with_options, LoadControl, LoadError, MatchError,
    MatchOptions, PipelineError, StaticSource,
};

fn source() -> StaticSource {
    StaticSource::new()
        .with_prompts(
            "roles.json",
            r#"[{"id":"p-1","category":"Science","subcategory":"Physics",
                 "system_message":"You are a physics tutor","keywords":["mechanics"],"topic":"edu"}]"#,
        )
        .with_questions("questions.json", r#"[{"id":"q-1","Q":"What is energy?"}]"#)
}

#[test]
fn whitespace_only_query_is_missing_query() {
    for raw in ["", " ", "\t", " \n "] {
        let result = search_source(source(), raw);
        assert!(
            matches!(result, Err(PipelineError::Match(MatchError::MissingQuery))),
            "query {raw:?}"
        );
    }
}

#[test]
fn no_match_is_not_an_error() {
    let result = search_source(source(), "zebra").expect("no match is success");
    assert!(result.results.is_empty());
    assert!(result.results_q.is_empty());
}

#[test]
fn empty_source_is_not_an_error() {
    let result = search_source(StaticSource::new(), "physics").expect("empty source is success");
    assert!(result.is_empty());
}

#[test]
fn malformed_static_unit_is_skipped() {
    let source = source().with_prompts("broken.json", "[{]");
    let result = search_source(source, "physics").unwrap();
    assert_eq!(result.results.len(), 1);
}

#[test]
fn cancelled_load_reports_cancellation() {
    let control = LoadControl::new();
    control.cancel();

    let err = search_source_with_options(source(), "physics", MatchOptions::default(), &control)
        .unwrap_err();
    assert_eq!(err, PipelineError::Load(LoadError::Cancelled));
}

#[test]
fn pipeline_error_exposes_its_cause() {
    let err = search_source(source(), "").unwrap_err();
    let cause = err.source().expect("pipeline errors carry a source");
    assert_eq!(cause.to_string(), "Missing query param 'q'");
}

#[test]
fn matcher_error_is_returned_directly_by_search() {
    assert_eq!(search("   ", &[], &[]), Err(MatchError::MissingQuery));
}
