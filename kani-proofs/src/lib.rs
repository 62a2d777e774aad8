// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for wikiquery relevance arithmetic.
//!
//! This standalone crate extracts the two relevance combiners and the
//! per-document scoring rules of union, intersection and difference, and
//! proves them over every possible `u32` input.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: combiners saturate instead of overflowing
//! 2. **Symmetry**: combine(a, b) == combine(b, a)
//! 3. **Identity**: zero is absence, combine(a, 0) == a
//! 4. **Monotonicity**: a combined score never drops below either input
//! 5. **Intersection zeroing**: a zero on either side scores zero

/// Relevance of one document for one query (mirrors `wikiquery::Relevance`).
pub type Relevance = u32;

// ============================================================================
// COMBINERS (copied from src/scoring/core.rs)
// ============================================================================

/// Sum policy.
pub fn additive(left: Relevance, right: Relevance) -> Relevance {
    left.saturating_add(right)
}

/// Max policy.
pub fn strongest(left: Relevance, right: Relevance) -> Relevance {
    left.max(right)
}

// ============================================================================
// PER-DOCUMENT ALGEBRA (copied from src/algebra.rs)
// ============================================================================

/// Score of one document in a union. Absent documents score zero.
pub fn union_score(
    left: Relevance,
    right: Relevance,
    combine: fn(Relevance, Relevance) -> Relevance,
) -> Relevance {
    combine(left, right)
}

/// Score of one left document in an intersection.
pub fn intersect_score(
    left: Relevance,
    right: Relevance,
    combine: fn(Relevance, Relevance) -> Relevance,
) -> Relevance {
    if left != 0 && right != 0 {
        combine(left, right)
    } else {
        0
    }
}

/// Whether a left document survives a difference.
pub fn survives_difference(right: Relevance) -> bool {
    right == 0
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Saturating addition never panics and never wraps.
    #[kani::proof]
    fn verify_additive_no_overflow() {
        let a: Relevance = kani::any();
        let b: Relevance = kani::any();

        let sum = additive(a, b);

        kani::assert(sum >= a && sum >= b, "sum must not wrap below an input");
        if a.checked_add(b).is_none() {
            kani::assert(sum == Relevance::MAX, "overflow must saturate");
        } else {
            kani::assert(sum == a + b, "in-range sum must be exact");
        }
    }

    /// Both combiners are symmetric.
    #[kani::proof]
    fn verify_combiners_symmetric() {
        let a: Relevance = kani::any();
        let b: Relevance = kani::any();

        kani::assert(additive(a, b) == additive(b, a), "additive must be symmetric");
        kani::assert(strongest(a, b) == strongest(b, a), "strongest must be symmetric");
    }

    /// Zero is the identity for both combiners.
    #[kani::proof]
    fn verify_zero_identity() {
        let a: Relevance = kani::any();

        kani::assert(additive(a, 0) == a, "additive must treat zero as absence");
        kani::assert(strongest(a, 0) == a, "strongest must treat zero as absence");
    }

    /// Strongest returns one of its inputs.
    #[kani::proof]
    fn verify_strongest_picks_input() {
        let a: Relevance = kani::any();
        let b: Relevance = kani::any();

        let m = strongest(a, b);
        kani::assert(m == a || m == b, "strongest must return an input");
        kani::assert(m >= a && m >= b, "strongest must dominate both inputs");
    }

    /// A union score is never below either side, under either policy.
    #[kani::proof]
    fn verify_union_monotonic() {
        let a: Relevance = kani::any();
        let b: Relevance = kani::any();

        for combine in [additive as fn(Relevance, Relevance) -> Relevance, strongest] {
            let score = union_score(a, b, combine);
            kani::assert(score >= a && score >= b, "union must not lose relevance");
        }
    }

    /// Intersection scores zero unless both sides are non-zero.
    #[kani::proof]
    fn verify_intersection_zeroing() {
        let a: Relevance = kani::any();
        let b: Relevance = kani::any();

        let score = intersect_score(a, b, additive);
        if a == 0 || b == 0 {
            kani::assert(score == 0, "one-sided match must score zero");
        } else {
            kani::assert(score > 0, "two-sided match must score non-zero");
        }
    }

    /// Difference drops exactly the documents the right side matched.
    #[kani::proof]
    fn verify_difference_membership() {
        let b: Relevance = kani::any();

        kani::assert(
            survives_difference(b) == (b == 0),
            "difference must drop matched documents",
        );
    }
}

// ============================================================================
// UNIT TESTS (run without Kani)
// ============================================================================
