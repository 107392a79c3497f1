use std::io;

use anyhow::{Context, Result};
use tracing::info;

use gomoku_engine::SearchConfig;
use gomoku_protocol::GomokuEngine;

fn main() -> Result<()> {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("gomoku starting");

    let mut engine = GomokuEngine::new(SearchConfig::default());
    engine
        .run(io::stdin().lock(), io::stdout().lock())
        .context("protocol loop failed")?;
    Ok(())
}
