//! VibeDev CLI - document tooling.
//!
//! Provides commands for:
//! - `render`: Render a stored editor document (JSON) to HTML

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::RenderArgs;
use output::Output;

/// VibeDev - community platform document tooling.
#[derive(Parser)]
#[command(name = "vibedev", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a stored document to HTML.
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&err);
        std::process::exit(1);
    }
}
