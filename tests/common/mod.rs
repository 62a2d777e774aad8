//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::PathBuf;

use wikiquery::{run_query, Additive, Error, IndexStore, ScoredResultSet, StoreError};

// Re-export canonical test utilities from wikiquery::testing
pub use wikiquery::testing::{
    cat_dog_index, make_index, make_results, RecordingIndex, UnreachableIndex,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// Small Wikipedia-flavoured index checked into the repo.
pub const WIKI_INDEX: &str = "fixtures/wiki_index.json";

pub fn wiki_index_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(WIKI_INDEX)
}

// ============================================================================
// QUERY HELPERS
// ============================================================================

/// Run `tokens` against `store`, counting how many times the store is opened.
pub fn run_counting_opens<S: IndexStore>(
    tokens: &[&str],
    store: S,
) -> (Result<ScoredResultSet, Error>, usize) {
    let mut opens = 0;
    let result = run_query(tokens.iter().copied(), Additive, || {
        opens += 1;
        Ok::<S, StoreError>(store)
    });
    (result, opens)
}

/// Ranked output as owned pairs, for easy comparison.
pub fn ranked(results: &ScoredResultSet) -> Vec<(String, u32)> {
    results
        .ranked()
        .map(|(doc, score)| (doc.to_string(), score))
        .collect()
}

/// Shorthand for building the expected side of `ranked` comparisons.
pub fn pairs(entries: &[(&str, u32)]) -> Vec<(String, u32)> {
    entries
        .iter()
        .map(|&(doc, score)| (doc.to_string(), score))
        .collect()
}
