//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Terminal output and fail-fast exit

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod configure;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cmd = cli::Cli::parse();
    tracing::debug!(?cmd, "parsed CLI arguments");
    cmd.run().await
}

/// Initialize the global tracing subscriber on stderr.
///
/// `RUST_LOG` overrides the default (e.g. `RUST_LOG=weather_core=debug`).
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("weather_cli=warn,weather_core=warn"));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
