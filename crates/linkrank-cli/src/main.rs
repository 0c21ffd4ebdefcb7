//! Linkrank CLI
//!
//! Estimate the PageRank of a directory of linked documents.

use anyhow::Result;
use clap::Parser;
use linkrank_core::error::exit_codes;
use linkrank_core::LinkRankError;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};
use commands::rank::Method;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<LinkRankError>()
            .map(LinkRankError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    let params = &cli.params;

    match cli.command {
        Commands::Rank(args) => commands::rank::run(args, Method::Both, config, params, cli.format),
        Commands::Sample(args) => {
            commands::rank::run(args, Method::Sampling, config, params, cli.format)
        }
        Commands::Iterate(args) => {
            commands::rank::run(args, Method::Iteration, config, params, cli.format)
        }
        Commands::Transition(args) => commands::transition::run(args, config, params, cli.format),
        Commands::Graph(args) => commands::graph::run(args, config, params, cli.format),
    }
}
