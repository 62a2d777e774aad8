//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::store::{IndexStore, MemoryIndex};
use crate::types::{Relevance, ScoredResultSet, TermCounts};

/// Build a result set from `(document, score)` pairs.
pub fn make_results(entries: &[(&str, Relevance)]) -> ScoredResultSet {
    entries.iter().copied().collect()
}

/// Build an in-memory index from `(term, [(document, count)])` rows.
pub fn make_index(rows: &[(&str, &[(&str, Relevance)])]) -> MemoryIndex {
    let mut index = MemoryIndex::new();
    for (term, postings) in rows {
        let counts: TermCounts = postings
            .iter()
            .map(|&(doc, count)| (doc.to_string(), count))
            .collect();
        index.insert_term(*term, counts);
    }
    index
}

/// The index used by the worked query examples.
///
/// - cat -> {docA: 2, docB: 1}
/// - dog -> {docA: 3}
pub fn cat_dog_index() -> MemoryIndex {
    make_index(&[
        ("cat", &[("docA", 2), ("docB", 1)]),
        ("dog", &[("docA", 3)]),
    ])
}

/// Wraps a store and records every term looked up, in order.
#[derive(Debug, Default)]
pub struct RecordingIndex<S> {
    inner: S,
    lookups: RefCell<Vec<String>>,
}

impl<S: IndexStore> RecordingIndex<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// Terms looked up so far.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.borrow().len()
    }
}

impl<S: IndexStore> IndexStore for RecordingIndex<S> {
    fn term_counts(&self, term: &str) -> Result<TermCounts, StoreError> {
        self.lookups.borrow_mut().push(term.to_string());
        self.inner.term_counts(term)
    }
}

/// A store that can't be reached.
///
/// Answers `healthy_lookups` lookups from an empty index, then fails.
#[derive(Debug, Default)]
pub struct UnreachableIndex {
    healthy_lookups: usize,
    served: RefCell<usize>,
}

impl UnreachableIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(healthy_lookups: usize) -> Self {
        Self {
            healthy_lookups,
            served: RefCell::new(0),
        }
    }
}

impl IndexStore for UnreachableIndex {
    fn term_counts(&self, _term: &str) -> Result<TermCounts, StoreError> {
        let mut served = self.served.borrow_mut();
        if *served < self.healthy_lookups {
            *served += 1;
            return Ok(TermCounts::new());
        }
        Err(StoreError::Unavailable {
            path: PathBuf::from("unreachable"),
            source: io::Error::new(io::ErrorKind::ConnectionRefused, "index offline"),
        })
    }
}
