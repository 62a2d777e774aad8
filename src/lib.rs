//! Boolean term queries with relevance scoring over a precomputed inverted index.
//!
//! A query is a list of tokens: plain terms, the operators `AND` and `OR`, and
//! `-term` exclusions. Each term is looked up in an [`IndexStore`], which
//! answers with per-document term frequencies. Those become
//! [`ScoredResultSet`]s and get folded together left to right.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  query/     │────▶│  store/      │────▶│  types.rs    │
//! │ (tokens,    │     │ (IndexStore, │     │ (ScoredResult│
//! │  QueryPlan) │     │  JsonIndex)  │     │  Set)        │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │          algebra.rs  +  scoring/                     │
//! │  (union, intersect, difference, RelevanceCombiner)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Semantics worth knowing
//!
//! | Query            | Meaning                                             |
//! |------------------|-----------------------------------------------------|
//! | `cat dog`        | `cat AND dog` (adjacent terms imply AND)            |
//! | `cat OR dog`     | union, shared documents score `cat + dog`           |
//! | `cat AND dog`    | cat's documents; score `cat + dog` if both non-zero, else 0 |
//! | `cat -dog`       | cat's documents that don't mention dog              |
//! | `cat OR`         | `cat` (a trailing operator is ignored)              |
//!
//! Operators fold strictly left to right with no precedence. Exclusions are
//! applied last, whatever their position.
//!
//! # Usage
//!
//! ```
//! use wikiquery::{search, MemoryIndex};
//!
//! let mut index = MemoryIndex::new();
//! index.add("cat", "docA", 2).add("cat", "docB", 1).add("dog", "docA", 5);
//!
//! let results = search(&index, ["cat", "-dog"]).unwrap();
//! let ranked: Vec<_> = results.ranked().collect();
//! assert_eq!(ranked, vec![("docB", 1)]);
//! ```

// Module declarations
pub mod algebra;
pub mod error;
pub mod query;
pub mod scoring;
pub mod store;
mod types;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use algebra::{difference, intersect, union};
pub use error::{Error, QueryError, Result, StoreError};
pub use query::{run_query, search, Interpreter, Operator, QueryPlan, Step, Token};
pub use scoring::{total_relevance, Additive, RelevanceCombiner, ScoringPolicy, Strongest};
pub use store::{IndexFile, IndexStore, JsonIndex, MemoryIndex};
pub use types::{RankedEntry, Relevance, ScoredResultSet, TermCounts};
