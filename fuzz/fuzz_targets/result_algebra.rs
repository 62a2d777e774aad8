// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the scored result algebra.
//!
//! Relevance is drawn from the full u32 range, so combiners see values close
//! to overflow. Nothing may panic, and the membership rules of union,
//! intersection and difference must hold for both scoring policies.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wikiquery::{difference, intersect, union, Relevance, ScoredResultSet, ScoringPolicy};

#[derive(Debug, Arbitrary)]
struct AlgebraInput {
    left: Vec<(u8, Relevance)>,
    right: Vec<(u8, Relevance)>,
    use_max: bool,
}

fn results(entries: &[(u8, Relevance)]) -> ScoredResultSet {
    entries
        .iter()
        .take(32)
        .map(|&(doc, relevance)| (format!("doc{}", doc % 16), relevance))
        .collect()
}

fuzz_target!(|input: AlgebraInput| {
    let left = results(&input.left);
    let right = results(&input.right);
    let policy = if input.use_max {
        ScoringPolicy::Max
    } else {
        ScoringPolicy::Sum
    };

    // INVARIANT 1: union holds every document from both sides
    let either = union(&left, &right, &policy);
    assert_eq!(either.len(), left.documents().union(&right.documents()).count());

    // INVARIANT 2: intersection keeps exactly the left documents
    let both = intersect(&left, &right, &policy);
    assert_eq!(both.documents(), left.documents());
    for (doc, relevance) in both.iter() {
        if relevance > 0 {
            assert!(left.relevance(doc) > 0 && right.relevance(doc) > 0);
        }
    }

    // INVARIANT 3: difference never keeps a document the right side matched
    let rest = difference(&left, &right);
    for (doc, relevance) in rest.iter() {
        assert_eq!(right.relevance(doc), 0);
        assert_eq!(relevance, left.relevance(doc));
    }
});
