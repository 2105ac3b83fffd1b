//! invctl - Console-driven in-memory inventory manager
//!
//! A numbered menu on stdout, one line of stdin per answer, nothing
//! persisted anywhere.

use anyhow::Result;
use clap::Parser;
use invctl::config::{Config, OutputFormat};
use invctl::format::Formatter;
use invctl::inventory::Store;
use invctl::session::Session;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "invctl",
    version,
    about = "Console-driven in-memory inventory manager",
    long_about = "An interactive inventory console: list, search, add, remove, and reprice \
                  product records held in memory for the lifetime of the process."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format for listings
    #[arg(short, long, env = "INVCTL_FORMAT")]
    format: Option<OutputFormat>,

    /// Price above which a product counts as expensive in the aggregate view
    #[arg(short, long, env = "INVCTL_THRESHOLD")]
    threshold: Option<f64>,

    /// Start with an empty inventory instead of the seed products
    #[arg(long)]
    no_seed: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr so it never interleaves with the menu
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(threshold) = cli.threshold {
        config.price_threshold = threshold;
    }

    let store = if cli.no_seed { Store::new() } else { Store::with_seed(&config.seed) };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        store,
        config.price_threshold,
        Formatter::new(config.format),
        stdin.lock(),
        stdout.lock(),
    );
    session.run()?;

    Ok(())
}
