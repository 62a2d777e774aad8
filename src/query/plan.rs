// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token stream -> query plan.
//!
//! Parsing is a four-state machine that reads tokens left to right:
//!
//! ```text
//! SeekFirstTerm   -x: exclude    AND/OR: skip    term: seed  -> Accumulate
//!                 end: NoValidTerm
//! Accumulate      -x: exclude    term: implicit AND          AND/OR -> AwaitOperand
//!                 end -> Done
//! AwaitOperand    any token: operand                         -> Accumulate
//!                 end: dangling operator                     -> Done
//! ```
//!
//! The token after an operator is its operand, verbatim. `cat AND -dog` ANDs
//! in a lookup of the literal `-dog`, it doesn't exclude `dog`. An operator
//! at the very end has nothing to apply to and is dropped without error.
//!
//! No lookups happen here. The plan records which terms to look up and in
//! what order, so the quirks above can be tested without a store.

use super::token::{Operator, Token};
use crate::error::QueryError;

/// One combinator application after the seed term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub operator: Operator,
    pub term: String,
    /// True when no operator token was written (adjacent terms).
    pub implicit: bool,
}

/// Everything the interpreter needs to run a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    /// First plain term; seeds the running result.
    pub seed: String,
    /// Combinator applications in token order.
    pub steps: Vec<Step>,
    /// Excluded terms (prefix stripped) in collection order.
    pub exclusions: Vec<String>,
    /// Set when the stream ended right after an operator.
    pub dangling_operator: Option<Operator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    SeekFirstTerm,
    Accumulate,
    AwaitOperand(Operator),
    Done,
}

impl QueryPlan {
    /// Parse a token stream.
    ///
    /// Fails only when the stream holds no plain term at all: it is empty or
    /// made solely of operators and exclusions.
    pub fn parse<I, T>(tokens: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut tokens = tokens.into_iter();
        let mut seed = String::new();
        let mut steps = Vec::new();
        let mut exclusions = Vec::new();
        let mut dangling_operator = None;

        let mut state = ParseState::SeekFirstTerm;
        loop {
            state = match state {
                ParseState::Done => break,

                ParseState::SeekFirstTerm => {
                    let Some(raw) = tokens.next() else {
                        return Err(QueryError::NoValidTerm);
                    };
                    match Token::classify(raw.as_ref()) {
                        Token::Term(term) => {
                            seed = term.to_string();
                            ParseState::Accumulate
                        }
                        Token::Exclude(term) => {
                            exclusions.push(term.to_string());
                            ParseState::SeekFirstTerm
                        }
                        Token::Operator(_) => ParseState::SeekFirstTerm,
                    }
                }

                ParseState::Accumulate => match tokens.next() {
                    None => ParseState::Done,
                    Some(raw) => match Token::classify(raw.as_ref()) {
                        Token::Term(term) => {
                            steps.push(Step {
                                operator: Operator::And,
                                term: term.to_string(),
                                implicit: true,
                            });
                            ParseState::Accumulate
                        }
                        Token::Exclude(term) => {
                            exclusions.push(term.to_string());
                            ParseState::Accumulate
                        }
                        Token::Operator(operator) => ParseState::AwaitOperand(operator),
                    },
                },

                ParseState::AwaitOperand(operator) => match tokens.next() {
                    None => {
                        dangling_operator = Some(operator);
                        ParseState::Done
                    }
                    Some(raw) => {
                        steps.push(Step {
                            operator,
                            term: raw.as_ref().to_string(),
                            implicit: false,
                        });
                        ParseState::Accumulate
                    }
                },
            };
        }

        Ok(Self {
            seed,
            steps,
            exclusions,
            dangling_operator,
        })
    }

    /// Every term the plan will look up, in lookup order.
    ///
    /// Seed first, then each step, then exclusions.
    pub fn lookups(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.seed.as_str())
            .chain(self.steps.iter().map(|step| step.term.as_str()))
            .chain(self.exclusions.iter().map(String::as_str))
    }
}
