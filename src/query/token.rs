// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

/// Operator keyword for AND.
pub const AND: &str = "AND";

/// Operator keyword for OR.
pub const OR: &str = "OR";

/// Prefix marking a term whose documents are removed from the result.
pub const EXCLUDE_PREFIX: char = '-';

/// Binary combinator named by an operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
}

/// One classified query token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `AND` or `OR`, case-sensitive.
    Operator(Operator),
    /// `-term`; holds the term without its prefix.
    Exclude(&'a str),
    /// Anything else, the empty string included.
    Term(&'a str),
}

impl<'a> Token<'a> {
    pub fn classify(raw: &'a str) -> Self {
        if let Some(term) = raw.strip_prefix(EXCLUDE_PREFIX) {
            return Token::Exclude(term);
        }
        match raw {
            AND => Token::Operator(Operator::And),
            OR => Token::Operator(Operator::Or),
            _ => Token::Term(raw),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Operator::And => AND,
            Operator::Or => OR,
        })
    }
}
