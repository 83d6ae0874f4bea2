use std::time::Instant;

use catalog::{Catalog, PromptRecord, QuestionRecord};

use crate::metrics::metrics_recorder;
use crate::query::NormalizedQuery;
use crate::types::{MatchError, MatchMode, MatchOptions, MatchResult, PromptHit, QuestionMatch};


/// Matcher for answering keyword queries over a catalog snapshot.
///
/// Holds no data of its own; every call borrows the records it scans and
/// returns freshly allocated results, so one `Matcher` can serve concurrent
/// queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    options: MatchOptions,
}

impl Matcher {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Run `raw_query` against a whole catalog snapshot.
    pub fn search_catalog(
        &self,
        raw_query: &str,
        catalog: &Catalog,
    ) -> Result<MatchResult, MatchError> {
        self.search(raw_query, &catalog.prompts, &catalog.questions)
    }

    /// Run `raw_query` against the given prompts and questions.
    ///
    /// Both result lists keep input order. No matches is a successful, empty
    /// result; only an empty query is an error.
    pub fn search(
        &self,
        raw_query: &str,
        prompts: &[PromptRecord],
        questions: &[QuestionRecord],
    ) -> Result<MatchResult, MatchError> {
        let query = NormalizedQuery::parse(raw_query)?;
        Ok(self.search_normalized(&query, prompts, questions))
    }

    /// Run an already normalized query. Never fails.
    pub fn search_normalized(
        &self,
        query: &NormalizedQuery,
        prompts: &[PromptRecord],
        questions: &[QuestionRecord],
    ) -> MatchResult {
        let start = Instant::now();

        let results: Vec<PromptHit> = prompts
            .iter()
            .filter_map(|prompt| evaluate_prompt(query, prompt))
            .collect();
        let results_q: Vec<QuestionRecord> = questions
            .iter()
            .filter(|question| self.question_matches(query, question))
            .cloned()
            .collect();

        let latency = start.elapsed();
        tracing::debug!(
            mode = %query.mode(),
            prompts = results.len(),
            questions = results_q.len(),
            latency_us = latency.as_micros() as u64,
            "search complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_search(query.mode(), latency, results.len(), results_q.len());
        }

        MatchResult { results, results_q }
    }

    fn question_matches(&self, query: &NormalizedQuery, question: &QuestionRecord) -> bool {
        match (query.mode(), self.options.question_match) {
            (MatchMode::MultiToken, QuestionMatch::AllTokens) => {
                query.all_tokens_in(&question.question_text)
            }
            _ => query.found_in(&question.question_text),
        }
    }
}

/// Flag a copy of `prompt` against `query` and keep it if it matched.
///
/// Category and subcategory flags always test the untokenized query. The
/// system-message flag is the inclusion test in multi-token mode.
fn evaluate_prompt(query: &NormalizedQuery, prompt: &PromptRecord) -> Option<PromptHit> {
    let mut hit = PromptHit::unflagged(prompt);
    hit.matched_category = query.found_in(&prompt.category);
    hit.matched_subcategory = query.found_in(&prompt.subcategory);

    let included = match query.mode() {
        MatchMode::SingleToken => {
            hit.matched_system_message = query.found_in(&prompt.system_message);
            let keyword_match = prompt.keywords.iter().any(|k| query.found_in(k));
            hit.matched_category
                || hit.matched_subcategory
                || hit.matched_system_message
                || keyword_match
        }
        MatchMode::MultiToken => {
            hit.matched_system_message = query.all_tokens_in(&prompt.system_message);
            hit.matched_system_message
        }
    };

    included.then_some(hit)
}

/// Search with default options.
pub fn search(
    raw_query: &str,
    prompts: &[PromptRecord],
    questions: &[QuestionRecord],
) -> Result<MatchResult, MatchError> {
    Matcher::default().search(raw_query, prompts, questions)
}
