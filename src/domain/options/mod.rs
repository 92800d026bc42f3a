// Probe options - Normalised configuration for a single probe

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Fallback for both analyzeduration (microseconds) and probesize (bytes)
pub const DEFAULT_PROBE_LIMIT: i64 = 5_000_000;

/// Smallest probesize ffprobe accepts
pub const MIN_PROBE_SIZE: i64 = 32;

/// Executable used when no explicit path is configured
pub const DEFAULT_FFPROBE: &str = "ffprobe";

/// Microseconds of input analysed to detect stream parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeDuration(i64);

impl AnalyzeDuration {
    /// Accepts `[0, i32::MAX]`; absent or out-of-range input becomes the default
    pub fn new(micros: Option<i64>) -> Self {
        match micros {
            Some(v) if (0..=i32::MAX as i64).contains(&v) => Self(v),
            _ => Self(DEFAULT_PROBE_LIMIT),
        }
    }

    pub fn micros(&self) -> i64 {
        self.0
    }
}

impl Default for AnalyzeDuration {
    fn default() -> Self {
        Self(DEFAULT_PROBE_LIMIT)
    }
}

impl fmt::Display for AnalyzeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bytes of input read while probing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSize(i64);

impl ProbeSize {
    /// Accepts `[32, i32::MAX]`; absent or out-of-range input becomes the default
    pub fn new(bytes: Option<i64>) -> Self {
        match bytes {
            Some(v) if (MIN_PROBE_SIZE..=i32::MAX as i64).contains(&v) => Self(v),
            _ => Self(DEFAULT_PROBE_LIMIT),
        }
    }

    pub fn bytes(&self) -> i64 {
        self.0
    }
}

impl Default for ProbeSize {
    fn default() -> Self {
        Self(DEFAULT_PROBE_LIMIT)
    }
}

impl fmt::Display for ProbeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options controlling how ffprobe is invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    pub ffprobe_path: PathBuf,
    pub analyze_duration: AnalyzeDuration,
    pub probe_size: ProbeSize,
    /// Show units of the displayed values
    pub unit: bool,
    /// Use HH:MM:SS.MICROSECONDS time values
    pub sexagesimal: bool,
    /// Accepted but never translated into a command-line flag
    pub bit_exact: bool,
    /// Kill the child after this long; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            ffprobe_path: PathBuf::from(DEFAULT_FFPROBE),
            analyze_duration: AnalyzeDuration::default(),
            probe_size: ProbeSize::default(),
            unit: false,
            sexagesimal: false,
            bit_exact: false,
            timeout: None,
        }
    }
}

impl ProbeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ffprobe_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffprobe_path = path.into();
        self
    }

    pub fn with_analyze_duration(mut self, micros: Option<i64>) -> Self {
        self.analyze_duration = AnalyzeDuration::new(micros);
        self
    }

    pub fn with_probe_size(mut self, bytes: Option<i64>) -> Self {
        self.probe_size = ProbeSize::new(bytes);
        self
    }

    pub fn with_unit(mut self, unit: bool) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_sexagesimal(mut self, sexagesimal: bool) -> Self {
        self.sexagesimal = sexagesimal;
        self
    }

    pub fn with_bit_exact(mut self, bit_exact: bool) -> Self {
        self.bit_exact = bit_exact;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
