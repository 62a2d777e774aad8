// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query-token interpreter.
//!
//! Raw tokens go through three stages:
//!
//! ```text
//! ["cat", "AND", "dog", "-fish"]
//!        │
//!        ▼  token.rs        classify: Term / Operator / Exclude
//!        ▼  plan.rs         state machine -> QueryPlan (no I/O)
//!        ▼  interpreter.rs  lookups + algebra folds -> ScoredResultSet
//! ```
//!
//! [`run_query`] is the whole pipeline with scoped store acquisition. It parses
//! first and only opens the store when there is something to look up, so a
//! query with no valid term never touches the index.

mod interpreter;
mod plan;
mod token;

pub use interpreter::Interpreter;
pub use plan::{QueryPlan, Step};
pub use token::{Operator, Token, AND, EXCLUDE_PREFIX, OR};

use crate::error::{Result, StoreError};
use crate::scoring::{Additive, RelevanceCombiner};
use crate::store::IndexStore;
use crate::types::ScoredResultSet;

/// Parse `tokens`, open the store, run the query, release the store.
///
/// `open` is called at most once, and only after parsing succeeds. The store
/// it returns is dropped before this function returns, whether the query
/// succeeded or a lookup failed.
pub fn run_query<I, T, S, C, F>(tokens: I, combiner: C, open: F) -> Result<ScoredResultSet>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
    S: IndexStore,
    C: RelevanceCombiner,
    F: FnOnce() -> std::result::Result<S, StoreError>,
{
    let plan = QueryPlan::parse(tokens)?;
    tracing::debug!(
        seed = %plan.seed,
        steps = plan.steps.len(),
        exclusions = plan.exclusions.len(),
        "parsed query"
    );

    let store = open()?;
    let interpreter = Interpreter::with_combiner(store, combiner);
    Ok(interpreter.execute(&plan)?)
}

/// Run `tokens` against an already open store with additive scoring.
pub fn search<I, T, S>(store: &S, tokens: I) -> Result<ScoredResultSet>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
    S: IndexStore + ?Sized,
{
    run_query(tokens, Additive, || Ok(store))
}
