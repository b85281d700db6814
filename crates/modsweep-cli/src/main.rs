#![forbid(unsafe_code)]
#![deny(warnings, unused_must_use, clippy::all, clippy::pedantic)]
#![allow(clippy::redundant_pub_crate)]

//! Bulk moderation client for imageboard admin endpoints.
//!
//! Layout:
//! - `cli.rs`: argument parsing
//! - `surface.rs`: display-surface and auth adapters over parsed arguments
//! - `commands.rs`: command handlers
//! - `client.rs`: shared context, errors, and exit-code policy
//! - `main.rs`: thin entrypoint delegating to `run()`

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod client;
mod commands;
mod surface;

use crate::cli::{Cli, Command};
use crate::client::{AppContext, CliResult};

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("error: {}", err.display_message());
        process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let ctx = AppContext::from_cli(&cli);
    match cli.command {
        Command::Delete(args) => commands::handle_delete(&ctx, args).await,
        Command::Ban(args) => commands::handle_ban(&ctx, args).await,
        Command::Checkboxes(args) => commands::handle_checkboxes(&ctx, args),
    }
}

/// Install the global tracing subscriber; `RUST_LOG` overrides the default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
