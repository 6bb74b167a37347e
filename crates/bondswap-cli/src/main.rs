//! # bondswap CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// bondswap — peer-to-peer escrow for bonded stake tokens.
///
/// Runs complete escrow lifecycles against in-memory ledgers so the
/// state machine and its fund flows can be inspected from a terminal.
#[derive(Parser, Debug)]
#[command(name = "bondswap", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Successful trade: create, commit, fulfill.
    Trade(bondswap_cli::scenario::ScenarioArgs),
    /// Missed delivery: create, commit, buyer claims at the deadline.
    Timeout(bondswap_cli::scenario::ScenarioArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing; scenarios narrate at info level by default.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Trade(args) => bondswap_cli::trade::run(&args),
        Commands::Timeout(args) => bondswap_cli::timeout::run(&args),
    }
}
