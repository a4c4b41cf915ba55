//! file: main.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:55:37 Sunday
//! brief:

mod app;
mod board;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    let grid = config.bounds()?;
    info!(width = grid.width(), height = grid.height(), "starting roomba");

    app::run(grid, config);
    Ok(())
}

/// `RUST_LOG` when set and valid, `info` otherwise.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

const DEFAULT_LOG_FILTER: &str = "info";
