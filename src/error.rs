// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two things can go wrong with a query: the tokens contain nothing to search
//! for, or the index can't answer. The first is the user's problem and the CLI
//! turns it into a friendly message. The second aborts the query. There is no
//! retry. The algebra itself has no error cases.

use std::path::PathBuf;

use thiserror::Error;

/// The token stream contains no searchable term.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Please enter at least one valid search term.")]
    NoValidTerm,
}

/// The index store could not answer a lookup.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("index at {} is unavailable", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("index at {} is malformed", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything a full query run can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
