use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use phonebook::cli::{self, context::CliContext};
use phonebook::config::Config;
use phonebook::input::LineInput;
use phonebook::phonebook::Phonebook;
use phonebook::seed;

#[derive(Parser)]
#[command(name = "phonebook")]
#[command(about = "Interactive console phonebook: add, search, update, and delete people")]
struct Cli {
    /// Phonebook name shown in the menu
    #[arg(short, long)]
    name: Option<String>,

    /// Start from a JSON file of people instead of the defaults
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Start with an empty phonebook
    #[arg(long)]
    no_defaults: bool,

    /// Bad entries allowed per prompt before giving up (0 for unlimited)
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Log level when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let mut config = Config::from_env()?;
    apply_overrides(&mut config, args);

    // stdout belongs to the menu
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let book = match build_phonebook(&config) {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to build phonebook: {:#}", e);
            return Err(e);
        }
    };
    info!("Starting {} with {} people", book.name(), book.count());

    let mut input = LineInput::console().with_max_attempts(config.max_attempts);
    let mut ctx = CliContext::new(book, &mut input);
    cli::run(&mut ctx);
    Ok(())
}

fn apply_overrides(config: &mut Config, args: Cli) {
    if let Some(name) = args.name {
        config.phonebook_name = name;
    }
    if args.seed.is_some() {
        config.seed_file = args.seed;
    }
    if args.no_defaults {
        config.seed_defaults = false;
    }
    if let Some(max) = args.max_attempts {
        config.max_attempts = (max > 0).then_some(max);
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
}

fn build_phonebook(config: &Config) -> Result<Phonebook> {
    if let Some(path) = &config.seed_file {
        let (book, stats) = seed::import_json(&config.phonebook_name, path)
            .with_context(|| format!("Failed to import {}", path.display()))?;
        info!(
            "Loaded {} people ({} skipped)",
            stats.people + stats.assigned,
            stats.skipped
        );
        return Ok(book);
    }

    let mut book = Phonebook::new(&config.phonebook_name);
    if config.seed_defaults {
        seed::load_default_people(&mut book);
    }
    Ok(book)
}
