// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use super::IndexStore;
use crate::error::StoreError;
use crate::types::{Relevance, TermCounts};

/// In-memory inverted index: term -> document -> count.
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    terms: HashMap<String, TermCounts>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `term` occurs `count` times in `document`.
    ///
    /// Repeated calls for the same pair accumulate.
    pub fn add(&mut self, term: &str, document: &str, count: Relevance) -> &mut Self {
        let slot = self
            .terms
            .entry(term.to_string())
            .or_default()
            .entry(document.to_string())
            .or_insert(0);
        *slot = slot.saturating_add(count);
        self
    }

    /// Replace all counts for `term`.
    pub fn insert_term(&mut self, term: impl Into<String>, counts: TermCounts) {
        self.terms.insert(term.into(), counts);
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

impl From<HashMap<String, TermCounts>> for MemoryIndex {
    fn from(terms: HashMap<String, TermCounts>) -> Self {
        Self { terms }
    }
}

impl IndexStore for MemoryIndex {
    fn term_counts(&self, term: &str) -> Result<TermCounts, StoreError> {
        Ok(self.terms.get(term).cloned().unwrap_or_default())
    }
}
