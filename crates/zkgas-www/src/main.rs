//! zkgas-www CLI - Documentation site configuration tool.
//!
//! Provides commands for:
//! - `check`: Validate the site configuration
//! - `export`: Emit the configuration as JSON for the site generator
//! - `show`: Print the sidebar tree

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, ShowArgs};
use output::Output;

/// zkgas-www - Documentation site configuration tool.
#[derive(Parser)]
#[command(name = "zkgas-www", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site configuration.
    Check(CheckArgs),
    /// Export the configuration as JSON for the site generator.
    Export(ExportArgs),
    /// Print the sidebar tree.
    Show(ShowArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose on check enables DEBUG level, otherwise use RUST_LOG or default
    let verbose = matches!(&cli.command, Commands::Check(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Show(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
