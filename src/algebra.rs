// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result algebra: OR, AND and NOT over scored result sets.
//!
//! All three are pure functions of two result sets and return a new one.
//! None of them can fail.
//!
//! ```text
//!   union(A, B)        docs = A ∪ B          score = c(A(d), B(d))
//!   intersect(A, B)    docs = A              score = c(A(d), B(d)) if both != 0, else 0
//!   difference(A, B)   docs = {d ∈ A | B(d) == 0}   score = A(d)
//! ```
//!
//! where `X(d)` is `X.relevance(d)` (0 when absent) and `c` is the
//! [`RelevanceCombiner`].
//!
//! # Intersection is left-driven
//!
//! `intersect` walks the left operand's documents only. A document that exists
//! only on the right never shows up, and a left document missing on the right
//! stays in the output with score 0 instead of being removed. So
//! `A AND B` and `B AND A` can return different document sets with the same
//! non-zero entries. Queries depend on this; don't "fix" it to a symmetric
//! intersection.

use std::collections::BTreeMap;

use crate::scoring::{Additive, RelevanceCombiner};
use crate::types::{Relevance, ScoredResultSet};

/// Documents in either set. Shared documents get `combiner(left, right)`.
pub fn union<C: RelevanceCombiner + ?Sized>(
    left: &ScoredResultSet,
    right: &ScoredResultSet,
    combiner: &C,
) -> ScoredResultSet {
    let mut scores: BTreeMap<String, Relevance> = BTreeMap::new();
    for (doc, _) in left.iter().chain(right.iter()) {
        if scores.contains_key(doc) {
            continue;
        }
        let score = combiner.combine(left.relevance(doc), right.relevance(doc));
        scores.insert(doc.to_string(), score);
    }
    ScoredResultSet::from_counts(scores)
}

/// Left documents, scored only where both sides are non-zero.
///
/// See the module docs for why this isn't a symmetric set intersection.
pub fn intersect<C: RelevanceCombiner + ?Sized>(
    left: &ScoredResultSet,
    right: &ScoredResultSet,
    combiner: &C,
) -> ScoredResultSet {
    left.iter()
        .map(|(doc, here)| {
            let there = right.relevance(doc);
            let score = if here != 0 && there != 0 {
                combiner.combine(here, there)
            } else {
                0
            };
            (doc, score)
        })
        .collect()
}

/// Left documents that have zero relevance on the right, scores unchanged.
pub fn difference(left: &ScoredResultSet, right: &ScoredResultSet) -> ScoredResultSet {
    left.iter()
        .filter(|&(doc, _)| right.relevance(doc) == 0)
        .collect()
}

impl ScoredResultSet {
    /// `self OR other` with additive scoring.
    pub fn or(&self, other: &ScoredResultSet) -> ScoredResultSet {
        union(self, other, &Additive)
    }

    /// `self AND other` with additive scoring.
    pub fn and(&self, other: &ScoredResultSet) -> ScoredResultSet {
        intersect(self, other, &Additive)
    }

    /// `self` minus every document `other` considers relevant.
    pub fn minus(&self, other: &ScoredResultSet) -> ScoredResultSet {
        difference(self, other)
    }
}
