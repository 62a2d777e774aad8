use std::io;

use anyhow::Context;
use clap::Parser;
use wikiquery::{run_query, Error, JsonIndex, QueryError, ScoringPolicy};

mod cli;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    let policy = ScoringPolicy::from(cli.scoring);
    let index_path = cli.index.clone();

    // The index is opened only once the query has a term to look up.
    let results = match run_query(&cli.tokens, policy, || JsonIndex::open(&index_path)) {
        Ok(results) => results,
        Err(Error::Query(QueryError::NoValidTerm)) => {
            println!("{}", QueryError::NoValidTerm);
            return Ok(());
        }
        Err(Error::Store(e)) => {
            return Err(e).with_context(|| format!("query failed against {}", index_path.display()));
        }
    };

    let stdout = io::stdout();
    cli::write_results(&mut stdout.lock(), &results, cli.matching, cli.json)?;

    Ok(())
}
