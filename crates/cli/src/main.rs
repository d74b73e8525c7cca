// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cw - cluster watch CLI

mod commands;
mod completions;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::watch;
use completions::CompletionsArgs;

#[derive(Parser)]
#[command(
    name = "cw",
    version,
    about = "Cluster watch - stream job, node, and partition changes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll a resource listing and print changes as they happen
    Watch(watch::WatchArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    match cli.command {
        Commands::Watch(args) => watch::handle(args).await,
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout stays a clean event stream
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("CW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
