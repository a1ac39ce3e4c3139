//! # greet CLI
//!
//! Command-line interface for greet - a small interactive command shell.
//!
//! ## Usage
//!
//! - `greet` - Start interactive mode
//! - `greet compare <left> <right>` - Compare two strings
//!
//! Interactive mode prints a welcome banner, then reads one command per
//! prompt until `quit` or end of input.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

use commands::{compare_command, interactive_command};
use config::CliConfigLoader;

/// greet - A small interactive command shell
#[derive(Parser)]
#[command(name = "greet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A small interactive command shell with a welcome banner")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Program title shown in the welcome banner
    #[arg(long, env = "GREET_TITLE")]
    title: Option<String>,

    /// Do not clear the screen before banners
    #[arg(long)]
    no_clear: bool,

    /// Maximum accepted input line length in bytes
    #[arg(long)]
    max_input_len: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two strings for equality and ordering
    Compare {
        /// Left-hand string
        left: String,
        /// Right-hand string
        right: String,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new().with_no_clear(cli.no_clear);

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(title) = &cli.title {
        loader = loader.with_title_override(title.clone());
    }

    if let Some(max_input_len) = cli.max_input_len {
        loader = loader.with_max_input_len_override(max_input_len);
    }

    loader
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    greet_core::init_tracing_with_debug(cli.verbose);

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Compare { left, right }) => compare_command(&left, &right),
        None => interactive_command(config_loader),
    }
}
