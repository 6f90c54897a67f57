//! calpane - a themeable desktop month calendar
//!
//! This is the main entry point for the calpane application.

mod app;
pub mod styles;
mod widgets;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, warn};

use calpane_core::clock::SystemClock;
use calpane_core::navigator::ViewState;
use calpane_core::{logging, Config, ThemeMode};

/// calpane - a themeable desktop month calendar
#[derive(Parser, Debug)]
#[command(name = "calpane", version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (uses XDG lookup if not specified)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Month to open on, as a lowercase name like "march".
    /// Unknown names open on the current month.
    #[arg(short, long)]
    month: Option<String>,

    /// Year to open on (defaults to the current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print example configuration and exit
    #[arg(long)]
    print_example_config: bool,

    /// Validate configuration and exit (returns non-zero on errors)
    #[arg(long)]
    check_config: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    logging::init(args.verbose);

    // Load configuration using the XDG lookup chain.
    // If --config is specified, it must exist and be valid (no fallback).
    let load_result = match Config::find_and_load(args.config.as_deref()) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(ref source) = load_result.source {
        info!("Loaded configuration from {:?}", source);
    } else if load_result.used_defaults {
        warn!("Using default configuration (no config file found)");
    }

    let config = load_result.config;

    // Validate configuration (strict - fail on invalid values)
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    debug!("Configuration validated successfully");

    // --check-config: validate, surface warnings, and exit
    if args.check_config {
        if let Some(ref source) = load_result.source {
            println!("Configuration valid: {}", source.display());
        } else {
            println!("Configuration valid (using defaults)");
        }
        for warning in config.warnings() {
            println!("Warning: {}", warning);
        }
        return ExitCode::SUCCESS;
    }

    // --print-example-config: print the example config with comments
    if args.print_example_config {
        print!("{}", calpane_core::config::DEFAULT_CONFIG_TOML);
        return ExitCode::SUCCESS;
    }

    for warning in config.warnings() {
        warn!("{}", warning);
    }

    // Initial view state: the CLI month overrides the configured start
    // month; either may be unknown and fall back to the current month.
    let clock = SystemClock;
    let theme = ThemeMode::from_config_value(&config.theme.mode).unwrap_or_default();
    let start_month = args
        .month
        .as_deref()
        .unwrap_or(&config.calendar.start_month);
    let mut state = ViewState::initial(&clock, start_month, theme);
    if let Some(year) = args.year {
        state.year = year;
    }

    info!(
        "Opening on {} {} ({} theme)",
        state.month().name,
        state.year,
        state.theme.as_str()
    );

    app::run(config, state)
}
