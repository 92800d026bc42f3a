//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

use crate::adapters::ProbeSettings;

/// ffprobe invocation options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ProbeFlags {
    /// ffprobe executable name or path
    #[arg(long, env = "MEDIAPROBE_FFPROBE")]
    pub ffprobe: Option<String>,

    /// Microseconds analysed to detect streams (0..=2147483647, default 5000000)
    #[arg(long, env = "MEDIAPROBE_ANALYZE_DURATION", allow_negative_numbers = true)]
    pub analyze_duration: Option<i64>,

    /// Bytes read while probing (32..=2147483647, default 5000000)
    #[arg(long, env = "MEDIAPROBE_PROBE_SIZE", allow_negative_numbers = true)]
    pub probe_size: Option<i64>,

    /// Show the unit of displayed values
    #[arg(long)]
    pub unit: bool,

    /// Use sexagesimal (HH:MM:SS.MICROSECONDS) time values
    #[arg(long)]
    pub sexagesimal: bool,

    /// Request bit-exact output (accepted, not forwarded to ffprobe)
    #[arg(long)]
    pub bit_exact: bool,

    /// Kill ffprobe if it runs longer than this many seconds
    #[arg(long, env = "MEDIAPROBE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl ProbeFlags {
    /// Settings explicitly given on the command line or through the environment.
    ///
    /// Switches that were not passed stay unset so a config file can still enable them.
    pub fn to_settings(&self) -> ProbeSettings {
        ProbeSettings {
            ffprobe_path: self.ffprobe.clone(),
            analyze_duration: self.analyze_duration,
            probe_size: self.probe_size,
            unit: self.unit.then_some(true),
            sexagesimal: self.sexagesimal.then_some(true),
            bit_exact: self.bit_exact.then_some(true),
            timeout_secs: self.timeout_secs,
            log_level: None,
        }
    }
}

/// Arguments for the probe command
#[derive(Args, Debug)]
pub struct ProbeCommandArgs {
    /// Input media file path
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub flags: ProbeFlags,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the args command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Input media file path
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub flags: ProbeFlags,
}
