//! Ember CLI
//!
//! Render the component gallery and check `ember.toml` files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod gallery;

use config::EmberConfig;

#[derive(Parser)]
#[command(name = "ember")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ember component library CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every component into a static HTML page
    Gallery {
        /// Config file (defaults to ./ember.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output path, overriding the config
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the resolved configuration
    Config {
        /// Config file (defaults to ./ember.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a configuration file
    Check {
        /// Config file (defaults to ./ember.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Gallery { config, out } => cmd_gallery(config, out),
        Commands::Config { config } => cmd_config(config),
        Commands::Check { config } => cmd_check(config),
    }
}

fn cmd_gallery(config: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let config = EmberConfig::resolve(config.as_deref())?;
    let out = out.unwrap_or_else(|| config.gallery.output.clone());

    let page = gallery::render_page(&config);
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out, page)?;

    info!("Wrote gallery to {}", out.display());
    Ok(())
}

fn cmd_config(config: Option<PathBuf>) -> Result<()> {
    let config = EmberConfig::resolve(config.as_deref())?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn cmd_check(config: Option<PathBuf>) -> Result<()> {
    let config = EmberConfig::resolve(config.as_deref())?;
    info!(
        "Config OK: prefix={} scheme={:?} radius={:?}",
        config.theme.prefix, config.theme.scheme, config.theme.radius
    );
    Ok(())
}
