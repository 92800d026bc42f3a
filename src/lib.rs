//! MediaProbe Library
//!
//! A thin wrapper around the `ffprobe` executable: it builds the probe
//! command line, runs ffprobe synchronously and maps its JSON output onto
//! typed stream, chapter and format records.
//!
//! ```no_run
//! use mediaprobe::{FFprobe, ProbeOptions};
//!
//! let options = ProbeOptions::new().with_probe_size(Some(10_000_000));
//! let probe = FFprobe::new("movie.mkv", &options)?;
//! for video in &probe.metadata().streams.video {
//!     println!("{:?}x{:?}", video.width, video.height);
//! }
//! # Ok::<(), mediaprobe::ProbeError>(())
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod probe;
pub mod utils;

// Re-export commonly used types
pub use domain::model::{
    AudioStream, Chapter, ChapterTags, Disposition, FormatInfo, FormatTags, ProbeResult,
    StreamKind, StreamTags, StreamsByKind, SubtitleStream, VideoStream,
};
pub use domain::options::{AnalyzeDuration, ProbeOptions, ProbeSize};
pub use error::{ProbeError, ProbeOutcome};
pub use probe::{parse_probe_output, FFprobe, ProbeArgs};
