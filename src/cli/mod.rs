// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the wikiquery command-line interface.
//!
//! One command, no subcommands: everything after the options is the query.
//! Query tokens may start with `-` (that's how exclusions are written), so
//! options have to come first. `--` works too.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use wikiquery::{RankedEntry, ScoredResultSet, ScoringPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "wikiquery",
    about = "Boolean term search over a precomputed inverted index",
    version,
    after_help = "EXAMPLES:\n    wikiquery java\n    wikiquery java AND programming -coffee\n    wikiquery --json java OR python"
)]
pub struct Cli {
    /// Path to the JSON index file
    #[arg(long, env = "WIKIQUERY_INDEX", default_value = "index.json")]
    pub index: PathBuf,

    /// How relevance scores are combined across terms
    #[arg(long, value_enum, default_value_t = Scoring::Sum)]
    pub scoring: Scoring,

    /// Hide documents whose final relevance is zero
    #[arg(long)]
    pub matching: bool,

    /// Print results as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Log level for diagnostics on stderr
    #[arg(long, env = "WIKIQUERY_LOG", default_value = "warn")]
    pub log_level: tracing::Level,

    /// Search terms, `AND` / `OR` operators and `-term` exclusions
    #[arg(allow_hyphen_values = true, trailing_var_arg = true, value_name = "TOKENS")]
    pub tokens: Vec<String>,
}

/// Scoring policy as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scoring {
    /// Add term frequencies
    Sum,
    /// Keep the larger term frequency
    Max,
}

impl From<Scoring> for ScoringPolicy {
    fn from(scoring: Scoring) -> Self {
        match scoring {
            Scoring::Sum => ScoringPolicy::Sum,
            Scoring::Max => ScoringPolicy::Max,
        }
    }
}

/// Print `results` ascending by relevance, as `document=score` lines or as a
/// JSON array. With `matching`, zero-score documents are left out.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &ScoredResultSet,
    matching: bool,
    json: bool,
) -> anyhow::Result<()> {
    let entries: Vec<RankedEntry> = results
        .ranked_entries()
        .into_iter()
        .filter(|entry| !matching || entry.relevance != 0)
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &entries).context("serialize results")?;
        writeln!(out)?;
    } else {
        for entry in &entries {
            writeln!(out, "{}", entry)?;
        }
    }
    out.flush()?;
    Ok(())
}
