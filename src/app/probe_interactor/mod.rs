// Probe interactor - Orchestrates the probe use case and renders its result

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::domain::model::*;
use crate::domain::options::ProbeOptions;
use crate::error::{ProbeError, ProbeOutcome};
use crate::ports::ProcessPort;
use crate::probe::FFprobe;
use crate::utils::Utils;

/// How the probe result is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Request to probe one file
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    pub input: PathBuf,
    pub options: ProbeOptions,
    pub format: OutputFormat,
}

/// Rendered probe result
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub metadata: ProbeResult,
    pub command_line: String,
    pub summary: String,
}

/// Interactor for the probe use case
pub struct ProbeInteractor {
    process_port: Arc<dyn ProcessPort>,
}

impl ProbeInteractor {
    /// Create new probe interactor with injected ports
    pub fn new(process_port: Arc<dyn ProcessPort>) -> Self {
        Self { process_port }
    }

    /// Execute the probe and render it in the requested format
    pub fn execute(&self, request: ProbeRequest) -> ProbeOutcome<ProbeResponse> {
        info!(path = %request.input.display(), "Starting probe");

        let probe = FFprobe::with_runner(&request.input, &request.options, self.process_port.as_ref())?;
        let command_line = probe.args().command_line();
        let metadata = probe.into_metadata();

        let summary = match request.format {
            OutputFormat::Json => Self::format_as_json(&metadata)?,
            OutputFormat::Text => Self::format_as_text(&metadata, &request),
        };

        Ok(ProbeResponse {
            metadata,
            command_line,
            summary,
        })
    }

    /// Format metadata as pretty JSON
    fn format_as_json(metadata: &ProbeResult) -> ProbeOutcome<String> {
        serde_json::to_string_pretty(metadata).map_err(ProbeError::Json)
    }

    /// Format metadata as human-readable text
    fn format_as_text(metadata: &ProbeResult, request: &ProbeRequest) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Media File Information:");
        let _ = writeln!(out, "  File: {}", request.input.display());

        if metadata.is_empty() {
            let _ = writeln!(out, "  No information reported by ffprobe");
            return out;
        }

        if let Some(format) = &metadata.format {
            Self::write_format(&mut out, format);
        }

        let streams = &metadata.streams;
        if !streams.video.is_empty() {
            let _ = writeln!(out, "\nVideo Streams ({}):", streams.video.len());
            for stream in &streams.video {
                let _ = writeln!(
                    out,
                    "  Stream #{}: {} {}x{} {} @ {} fps{}",
                    or_unknown(stream.index),
                    stream.codec_name.as_deref().unwrap_or("unknown"),
                    or_unknown(stream.width),
                    or_unknown(stream.height),
                    stream.pix_fmt.as_deref().unwrap_or("-"),
                    stream.avg_frame_rate.as_deref().unwrap_or("?"),
                    describe_extras(stream.tags.as_ref(), stream.disposition.as_ref()),
                );
            }
        }

        if !streams.audio.is_empty() {
            let _ = writeln!(out, "\nAudio Streams ({}):", streams.audio.len());
            for stream in &streams.audio {
                let _ = writeln!(
                    out,
                    "  Stream #{}: {} {} Hz, {} channels ({}){}",
                    or_unknown(stream.index),
                    stream.codec_name.as_deref().unwrap_or("unknown"),
                    stream.sample_rate.as_deref().unwrap_or("?"),
                    or_unknown(stream.channels),
                    stream.channel_layout.as_deref().unwrap_or("-"),
                    describe_extras(stream.tags.as_ref(), stream.disposition.as_ref()),
                );
            }
        }

        if !streams.subtitle.is_empty() {
            let _ = writeln!(out, "\nSubtitle Streams ({}):", streams.subtitle.len());
            for stream in &streams.subtitle {
                let _ = writeln!(
                    out,
                    "  Stream #{}: {}{}",
                    or_unknown(stream.index),
                    stream.codec_name.as_deref().unwrap_or("unknown"),
                    describe_extras(stream.tags.as_ref(), stream.disposition.as_ref()),
                );
            }
        }

        if !metadata.chapters.is_empty() {
            let _ = writeln!(out, "\nChapters ({}):", metadata.chapters.len());
            for chapter in &metadata.chapters {
                let _ = writeln!(
                    out,
                    "  {} - {}: {}",
                    chapter.start_time.as_deref().unwrap_or("?"),
                    chapter.end_time.as_deref().unwrap_or("?"),
                    chapter.title().unwrap_or("(untitled)"),
                );
            }
        }

        out
    }

    fn write_format(out: &mut String, format: &FormatInfo) {
        if let Some(name) = format.format_long_name.as_deref().or(format.format_name.as_deref()) {
            let _ = writeln!(out, "  Container: {}", name);
        }
        if let Some(duration) = format
            .duration_seconds()
            .and_then(|s| Duration::try_from_secs_f64(s).ok())
        {
            let _ = writeln!(out, "  Duration: {}", Utils::format_duration(duration));
        }
        if let Some(size) = format.size_bytes() {
            let _ = writeln!(out, "  File Size: {}", Utils::format_file_size(size));
        }
        if let Some(bps) = format.bit_rate_bps() {
            let _ = writeln!(out, "  Bit Rate: {}", Utils::format_bit_rate(bps));
        }
        if let Some(tags) = &format.tags {
            if let Some(title) = &tags.title {
                let _ = writeln!(out, "  Title: {}", title);
            }
            if let Some(created) = &tags.creation_time {
                let _ = writeln!(out, "  Created: {}", created.to_rfc3339());
            }
        }
    }
}

fn or_unknown(value: Option<i64>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

fn describe_extras(tags: Option<&StreamTags>, disposition: Option<&Disposition>) -> String {
    let mut extras = Vec::new();
    if let Some(language) = tags.and_then(|t| t.language.as_deref()) {
        extras.push(language.to_string());
    }
    if let Some(disposition) = disposition {
        extras.extend(disposition.active_flags().into_iter().map(str::to_string));
    }
    if extras.is_empty() {
        String::new()
    } else {
        format!(" [{}]", extras.join(", "))
    }
}
