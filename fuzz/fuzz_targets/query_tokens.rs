// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for token interpretation.
//!
//! Arbitrary bytes are split on whitespace and fed to the interpreter over a
//! small fixed index. Operators, exclusions and empty tokens land in every order the
//! fuzzer can think of. The interpreter must never panic, must reject a
//! stream only when it holds no plain term, and must never return a document
//! that an exclusion matched.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;
use wikiquery::{search, Error, MemoryIndex, QueryError, QueryPlan, ScoredResultSet};

fn index() -> &'static MemoryIndex {
    static INDEX: OnceLock<MemoryIndex> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = MemoryIndex::new();
        index
            .add("cat", "docA", 2)
            .add("cat", "docB", 1)
            .add("dog", "docA", 3)
            .add("dog", "docC", 2)
            .add("bird", "docC", 5)
            .add("-dog", "docD", 9)
            .add("AND", "docE", 1);
        index
    })
}

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Split on single spaces so empty tokens survive
    let tokens: Vec<&str> = text.split(' ').take(64).collect();

    let plan = QueryPlan::parse(&tokens);
    let outcome = search(index(), &tokens);

    match (plan, outcome) {
        (Ok(plan), Ok(results)) => {
            // INVARIANT 1: excluded documents are gone
            for term in &plan.exclusions {
                let excluded = ScoredResultSet::search(term, index()).unwrap();
                for (doc, _) in excluded.matching() {
                    assert!(!results.contains(doc), "{doc} survived -{term}");
                }
            }

            // INVARIANT 2: ranking is non-decreasing
            let scores: Vec<u32> = results.ranked().map(|(_, score)| score).collect();
            assert!(scores.windows(2).all(|w| w[0] <= w[1]));
        }
        (Err(_), Err(Error::Query(QueryError::NoValidTerm))) => {}
        (plan, outcome) => panic!("parse and search disagree: {plan:?} vs {outcome:?}"),
    }
});
