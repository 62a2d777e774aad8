// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The relevance combiner contract and the policies that ship with it.
//!
//! # Contract
//!
//! Any combiner `c` must satisfy, for all non-negative `a`, `b`, `a' >= a`:
//!
//! ```text
//! c(a, b) == c(b, a)            symmetric
//! c(a, b) >= 0                  non-negative (free with unsigned scores)
//! c(a', b) >= c(a, b)           monotonically non-decreasing
//! ```
//!
//! Both built-in policies are checked against this in the property tests and
//! in `kani-proofs/`. Arithmetic saturates at `Relevance::MAX` so a pathological
//! index can't panic a query in debug builds.

use crate::types::Relevance;

/// Merges the relevance a document has on each side of a combinator.
pub trait RelevanceCombiner {
    fn combine(&self, left: Relevance, right: Relevance) -> Relevance;
}

/// Sum of both scores. The default policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Additive;

/// The stronger of the two scores.
///
/// Useful when one very frequent term shouldn't drown out the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strongest;

impl RelevanceCombiner for Additive {
    #[inline]
    fn combine(&self, left: Relevance, right: Relevance) -> Relevance {
        left.saturating_add(right)
    }
}

impl RelevanceCombiner for Strongest {
    #[inline]
    fn combine(&self, left: Relevance, right: Relevance) -> Relevance {
        left.max(right)
    }
}

/// Runtime-selectable policy, for callers that pick scoring from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringPolicy {
    #[default]
    Sum,
    Max,
}

impl RelevanceCombiner for ScoringPolicy {
    #[inline]
    fn combine(&self, left: Relevance, right: Relevance) -> Relevance {
        match self {
            ScoringPolicy::Sum => Additive.combine(left, right),
            ScoringPolicy::Max => Strongest.combine(left, right),
        }
    }
}

impl<C: RelevanceCombiner + ?Sized> RelevanceCombiner for &C {
    #[inline]
    fn combine(&self, left: Relevance, right: Relevance) -> Relevance {
        (**self).combine(left, right)
    }
}

/// The default `totalRelevance` rule: the sum of the term frequencies.
#[inline]
pub fn total_relevance(left: Relevance, right: Relevance) -> Relevance {
    Additive.combine(left, right)
}
