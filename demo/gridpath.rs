//! Terminal pathfinding demo.
//!
//! Run: cargo run --bin gridpath [config.toml]
//!
//! Set `RUST_LOG=debug` to see the engine's per-search log lines.

use std::io;
use std::path::Path;

use anyhow::Context;
use gridpath_demo::{DemoConfig, render, run_all};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let arg = std::env::args().nth(1);
    let config = DemoConfig::load(arg.as_deref().map(Path::new))?;
    let grid = config.build_grid()?;
    let reports = run_all(&grid, &config)?;

    let mut stdout = io::stdout();
    for report in &reports {
        render(&grid, report, &mut stdout).context("failed to draw map")?;
    }
    Ok(())
}
