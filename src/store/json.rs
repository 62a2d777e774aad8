// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON-file index store.
//!
//! The file holds every term's counts up front:
//!
//! ```json
//! {
//!   "terms": {
//!     "java": { "https://en.wikipedia.org/wiki/Java_(programming_language)": 12 },
//!     "coffee": { "https://en.wikipedia.org/wiki/Coffee": 31 }
//!   }
//! }
//! ```
//!
//! Opening the store reads and parses the whole file. After that, lookups are
//! plain map reads and can't fail. Dropping the store releases it.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{IndexStore, MemoryIndex};
use crate::error::StoreError;
use crate::types::TermCounts;

/// On-disk layout of a JSON index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexFile {
    #[serde(default)]
    pub terms: HashMap<String, TermCounts>,
}

impl IndexFile {
    /// Read and parse an index file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the index as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| StoreError::Unavailable {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Index store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonIndex {
    path: PathBuf,
    index: MemoryIndex,
}

impl JsonIndex {
    /// Load the index at `path`.
    ///
    /// A missing or unreadable file is [`StoreError::Unavailable`]; a file that
    /// isn't a valid index is [`StoreError::Malformed`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let file = IndexFile::load(path)?;
        tracing::info!(path = %path.display(), terms = file.terms.len(), "opened index");
        Ok(Self {
            path: path.to_path_buf(),
            index: MemoryIndex::from(file.terms),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn term_count(&self) -> usize {
        self.index.term_count()
    }
}

impl IndexStore for JsonIndex {
    fn term_counts(&self, term: &str) -> Result<TermCounts, StoreError> {
        self.index.term_counts(term)
    }
}

impl Drop for JsonIndex {
    fn drop(&mut self) {
        tracing::debug!(path = %self.path.display(), "released index");
    }
}
