//! # blink CLI
//!
//! Command-line interface for the Blink OS site.
//!
//! ## Usage
//!
//! - `blink` - Browse the site in the terminal
//! - `blink routes` - List the known routes
//! - `blink render /demo` - Print one page as text or HTML
//! - `blink export --out dist` - Write the static site
//!
//! The terminal browser is powered by iocraft and drives the same router
//! the static export uses.

use anyhow::Result;
use blink_core::NotFoundMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;

use commands::{browse_command, export_command, render_command, routes_command, RenderFormat};
use config::CliConfigLoader;

/// blink - The Blink OS site in your terminal
#[derive(Parser)]
#[command(name = "blink")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse, render and export the Blink OS site")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to start browsing at
    #[arg(long, global = true)]
    path: Option<String>,

    /// What unknown paths show (page, blank)
    #[arg(long, global = true)]
    not_found: Option<NotFoundMode>,

    /// Jump to the top after navigation instead of scrolling smoothly
    #[arg(long, global = true)]
    instant_scroll: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output mode (default is normal mode)
    #[arg(short = 'd', long = "debug", global = true)]
    debug_output: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the site in the terminal (default)
    Browse,

    /// List the known routes
    Routes,

    /// Print the page for a path
    Render {
        /// Path to render, e.g. /how-it-works
        path: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = RenderFormat::Text)]
        format: RenderFormat,

        /// Text width in columns
        #[arg(long)]
        width: Option<usize>,
    },

    /// Write the static site
    Export {
        /// Output directory (defaults to the configured output_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new().with_instant_scroll(cli.instant_scroll);

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(path) = &cli.path {
        loader = loader.with_path_override(path.clone());
    }

    if let Some(mode) = cli.not_found {
        loader = loader.with_not_found_override(mode);
    }

    if let Some(Commands::Export { out: Some(out) }) = &cli.command {
        loader = loader.with_output_override(out.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    blink_core::init_tracing_with_debug(cli.verbose || cli.debug_output);

    let config_loader = build_config_loader(&cli);

    match cli.command {
        None | Some(Commands::Browse) => browse_command(config_loader, cli.debug_output).await,
        Some(Commands::Routes) => routes_command().await,
        Some(Commands::Render {
            path,
            format,
            width,
        }) => render_command(config_loader, path, format, width).await,
        Some(Commands::Export { .. }) => export_command(config_loader).await,
    }
}
