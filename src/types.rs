// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The scored result set: what every lookup and every combinator produces.
//!
//! A result set maps document identifiers (usually page URLs) to an integer
//! relevance score. Nothing more. The interesting rules live in `algebra`;
//! this module only guarantees the two invariants everything else leans on.
//!
//! # Invariants
//!
//! - **Absence is zero**: a document missing from the map and a document stored
//!   with score 0 are indistinguishable through [`ScoredResultSet::relevance`].
//!   Combinators keep zero-score entries around (see `intersect`), so callers
//!   that want "real" matches filter with [`ScoredResultSet::matching`].
//!
//! - **Scores are non-negative**: `Relevance` is unsigned, so this one is free.
//!
//! Result sets are built once and never mutated. Every combinator returns a
//! fresh value.
//!
//! Iteration order is the document id order of the backing `BTreeMap`, which
//! makes ranking ties deterministic across runs.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::StoreError;
use crate::store::IndexStore;

/// Relevance score of a document for a query.
pub type Relevance = u32;

/// Term frequencies returned by an index lookup: document id to count.
pub type TermCounts = BTreeMap<String, Relevance>;

/// An immutable mapping from document identifier to relevance score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoredResultSet {
    scores: BTreeMap<String, Relevance>,
}

/// One line of ranked output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub document: String,
    pub relevance: Relevance,
}

impl ScoredResultSet {
    /// An empty result set. Every document has relevance 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a lookup result.
    pub fn from_counts(counts: TermCounts) -> Self {
        Self { scores: counts }
    }

    /// Look up a single term and wrap its counts as a result set.
    pub fn search<S: IndexStore + ?Sized>(term: &str, store: &S) -> Result<Self, StoreError> {
        store.term_counts(term).map(Self::from_counts)
    }

    /// Relevance of `doc`, or 0 when the document is absent.
    #[inline]
    pub fn relevance(&self, doc: &str) -> Relevance {
        self.scores.get(doc).copied().unwrap_or(0)
    }

    /// Whether `doc` has an entry, zero-score entries included.
    #[inline]
    pub fn contains(&self, doc: &str) -> bool {
        self.scores.contains_key(doc)
    }

    /// Document identifiers with an entry in this set.
    ///
    /// Zero-score entries may or may not be present depending on how the set
    /// was produced. Don't rely on either.
    pub fn documents(&self) -> BTreeSet<&str> {
        self.scores.keys().map(String::as_str).collect()
    }

    /// Iterate over `(document, relevance)` pairs in document id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Relevance)> + '_ {
        self.scores.iter().map(|(doc, &score)| (doc.as_str(), score))
    }

    /// Entries with a non-zero score, in document id order.
    pub fn matching(&self) -> impl Iterator<Item = (&str, Relevance)> + '_ {
        self.iter().filter(|&(_, score)| score != 0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entries sorted ascending by relevance.
    ///
    /// The sort is stable, so equal scores keep document id order.
    pub fn ranked(&self) -> std::vec::IntoIter<(&str, Relevance)> {
        let mut entries: Vec<(&str, Relevance)> = self.iter().collect();
        entries.sort_by_key(|&(_, score)| score);
        entries.into_iter()
    }

    /// Owned form of [`ranked`](Self::ranked), ready for serialization.
    pub fn ranked_entries(&self) -> Vec<RankedEntry> {
        self.ranked()
            .map(|(doc, relevance)| RankedEntry {
                document: doc.to_string(),
                relevance,
            })
            .collect()
    }
}

impl<D: Into<String>> FromIterator<(D, Relevance)> for ScoredResultSet {
    /// Later duplicates overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (D, Relevance)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().map(|(doc, score)| (doc.into(), score)).collect(),
        }
    }
}

impl std::fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.document, self.relevance)
    }
}
