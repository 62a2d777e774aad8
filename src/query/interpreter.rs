// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query plan -> scored result set.
//!
//! Walks a [`QueryPlan`] against an [`IndexStore`], one blocking lookup at a
//! time, in token order:
//!
//! 1. Look up the seed term. That's the running result.
//! 2. For each step, look up its term and fold it in with AND or OR.
//! 3. For each excluded term, look it up and subtract it.
//!
//! A failed lookup aborts the whole query. Nothing is retried.

use super::plan::QueryPlan;
use super::token::Operator;
use crate::algebra::{difference, intersect, union};
use crate::error::StoreError;
use crate::scoring::{Additive, RelevanceCombiner};
use crate::store::IndexStore;
use crate::types::ScoredResultSet;

/// Executes query plans against a store with a given scoring policy.
#[derive(Debug, Clone)]
pub struct Interpreter<S, C = Additive> {
    store: S,
    combiner: C,
}

impl<S: IndexStore> Interpreter<S, Additive> {
    /// Interpreter with the default additive scoring.
    pub fn new(store: S) -> Self {
        Self {
            store,
            combiner: Additive,
        }
    }
}

impl<S: IndexStore, C: RelevanceCombiner> Interpreter<S, C> {
    pub fn with_combiner(store: S, combiner: C) -> Self {
        Self { store, combiner }
    }

    /// Run `plan` and return the final result set.
    pub fn execute(&self, plan: &QueryPlan) -> Result<ScoredResultSet, StoreError> {
        let mut result = self.lookup(&plan.seed)?;

        for step in &plan.steps {
            let other = self.lookup(&step.term)?;
            result = self.apply(step.operator, &result, &other);
        }

        if let Some(operator) = plan.dangling_operator {
            tracing::warn!(%operator, "query ends with an operator, ignoring it");
        }

        for term in &plan.exclusions {
            let excluded = self.lookup(term)?;
            result = difference(&result, &excluded);
        }

        tracing::debug!(documents = result.len(), "query complete");
        Ok(result)
    }

    /// Fold `other` into `result` with `operator`.
    pub fn apply(
        &self,
        operator: Operator,
        result: &ScoredResultSet,
        other: &ScoredResultSet,
    ) -> ScoredResultSet {
        match operator {
            Operator::And => intersect(result, other, &self.combiner),
            Operator::Or => union(result, other, &self.combiner),
        }
    }

    fn lookup(&self, term: &str) -> Result<ScoredResultSet, StoreError> {
        let found = ScoredResultSet::search(term, &self.store)?;
        tracing::debug!(term, documents = found.len(), "looked up term");
        Ok(found)
    }
}
