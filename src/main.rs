//! Folio - A static site generator for Markdown pages.

mod cli;
mod compiler;
mod config;
mod embed;
mod logger;
mod page;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Build { .. } => build(&config),
    }
}

/// Run a build. Page failures are logged and reported but do not fail
/// the process; setup and traversal errors do.
fn build(config: &SiteConfig) -> Result<()> {
    build_site(config, false)?;
    Ok(())
}
