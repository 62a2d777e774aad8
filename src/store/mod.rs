// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index store: where term frequencies come from.
//!
//! The query core needs exactly one thing from an index, the per-document
//! counts for a term. [`IndexStore`] is that contract and nothing else. No
//! writes, no deletes, no metadata.
//!
//! Two implementations ship here:
//!
//! - [`MemoryIndex`]: a map in memory. Tests and embedding.
//! - [`JsonIndex`]: a JSON file loaded once when opened. What the CLI uses.
//!
//! Lookups are blocking. An unknown term is an empty map, not an error.

mod json;
mod memory;

pub use json::{IndexFile, JsonIndex};
pub use memory::MemoryIndex;

use crate::error::StoreError;
use crate::types::TermCounts;

/// Source of term frequencies.
pub trait IndexStore {
    /// Document counts for `term`. Empty when the term is not indexed.
    fn term_counts(&self, term: &str) -> Result<TermCounts, StoreError>;
}

impl<S: IndexStore + ?Sized> IndexStore for &S {
    fn term_counts(&self, term: &str) -> Result<TermCounts, StoreError> {
        (**self).term_counts(term)
    }
}

impl<S: IndexStore + ?Sized> IndexStore for Box<S> {
    fn term_counts(&self, term: &str) -> Result<TermCounts, StoreError> {
        (**self).term_counts(term)
    }
}
