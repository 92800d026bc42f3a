//! MediaProbe CLI
//!
//! Runs ffprobe against a media file and prints its streams, chapters and
//! container format, either as a readable summary or as JSON.
//!
//! # Usage
//!
//! ```bash
//! mediaprobe probe --input "video.mkv"
//! mediaprobe probe --input "video.mkv" --json --probe-size 10000000
//! mediaprobe args --input "video.mkv" --sexagesimal
//! ```

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{debug, info};

use mediaprobe::app::DefaultAppContainer;
use mediaprobe::cli::{commands, Cli, Commands};
use mediaprobe::config_initialization::initialize_configuration_hierarchy;
use mediaprobe::utils::logging::{LogFormat, LogLevel, LoggingConfig};

/// Main entry point for the MediaProbe application
fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Resolve configuration before logging so the file can set the level
    let settings = initialize_configuration_hierarchy(&cli)?;

    // Initialize logging
    let level = match settings.log_level.as_deref() {
        Some(level) => level.parse::<LogLevel>().map_err(|e| anyhow!(e))?,
        None => LogLevel::Warn,
    };
    let format = cli.log_format.parse::<LogFormat>().map_err(|e| anyhow!(e))?;
    LoggingConfig::new(level, format).initialize();

    info!("Starting MediaProbe");
    debug!(?settings, "Resolved configuration");

    let container = DefaultAppContainer::new();

    // Execute the requested command
    match cli.command {
        Commands::Probe(args) => {
            info!("Executing probe command");
            commands::probe(&container, args, &settings)?;
        }
        Commands::Args(args) => {
            info!("Executing args command");
            commands::show_args(args, &settings)?;
        }
    }

    Ok(())
}
