//! CLI module for MediaProbe
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

pub use args::{ProbeCommandArgs, ProbeFlags, ShowArgs};

/// MediaProbe
///
/// Runs ffprobe against a media file and reports its streams, chapters and
/// container format.
#[derive(Parser, Debug)]
#[command(name = "mediaprobe")]
#[command(about = "MediaProbe - Typed ffprobe stream, chapter and format inspection")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, env = "MEDIAPROBE_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Log output format (pretty, compact, json)
    #[arg(long, default_value = "compact", global = true)]
    pub log_format: String,

    /// Configuration file with a [mediaprobe] table
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe a media file and print its streams, chapters and format
    Probe(args::ProbeCommandArgs),
    /// Print the ffprobe command line without running it
    Args(args::ShowArgs),
}

impl Cli {
    /// Probe options passed on the command line for the selected command
    pub fn probe_flags(&self) -> &ProbeFlags {
        match &self.command {
            Commands::Probe(args) => &args.flags,
            Commands::Args(args) => &args.flags,
        }
    }
}
