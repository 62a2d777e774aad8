// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how two relevance scores become one.
//!
//! Every combinator in `algebra` that merges a document present on both sides
//! funnels through a [`RelevanceCombiner`]. Summing term frequencies is the
//! default and the simplest thing that works; the trait exists so a smarter
//! policy (TF-IDF weighting, say) can slot in without touching the algebra.

mod core;

pub use core::*;
