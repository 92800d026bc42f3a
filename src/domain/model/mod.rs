// Domain models - Typed records for ffprobe's streams/chapters/format output
//
// Every field is optional: ffprobe omits fields depending on container and
// codec, and a missing field must stay distinguishable from a reported zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Aggregate produced by a single probe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub streams: StreamsByKind,
    pub chapters: Vec<Chapter>,
    pub format: Option<FormatInfo>,
}

impl ProbeResult {
    /// True when the probe yielded nothing at all
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty() && self.chapters.is_empty() && self.format.is_none()
    }

    /// Number of recognised streams across all kinds
    pub fn total_streams(&self) -> usize {
        self.streams.len()
    }
}

/// Streams partitioned by their `codec_type`, in source order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamsByKind {
    pub video: Vec<VideoStream>,
    pub audio: Vec<AudioStream>,
    pub subtitle: Vec<SubtitleStream>,
}

impl StreamsByKind {
    pub fn len(&self) -> usize {
        self.video.len() + self.audio.len() + self.subtitle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stream kinds routed by the `codec_type` discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Video,
    Audio,
    Subtitle,
}

impl StreamKind {
    /// Map a discriminator to a kind; anything else (data, attachment, ...) is unrecognised
    pub fn from_codec_type(codec_type: &str) -> Option<Self> {
        match codec_type {
            "video" => Some(StreamKind::Video),
            "audio" => Some(StreamKind::Audio),
            "subtitle" => Some(StreamKind::Subtitle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamKind::Video => "video",
            StreamKind::Audio => "audio",
            StreamKind::Subtitle => "subtitle",
        }
    }
}

/// Video elementary stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoStream {
    pub index: Option<i64>,
    pub codec_name: Option<String>,
    pub codec_long_name: Option<String>,
    pub profile: Option<String>,
    pub codec_type: Option<String>,
    pub codec_tag_string: Option<String>,
    pub codec_tag: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub coded_width: Option<i64>,
    pub coded_height: Option<i64>,
    pub closed_captions: Option<i64>,
    pub film_grain: Option<i64>,
    pub has_b_frames: Option<i64>,
    pub sample_aspect_ratio: Option<String>,
    pub display_aspect_ratio: Option<String>,
    pub pix_fmt: Option<String>,
    pub level: Option<i64>,
    pub chroma_location: Option<String>,
    pub field_order: Option<String>,
    pub refs: Option<i64>,
    pub is_avc: Option<String>,
    pub nal_length_size: Option<String>,
    pub r_frame_rate: Option<String>,
    pub avg_frame_rate: Option<String>,
    pub time_base: Option<String>,
    pub start_pts: Option<i64>,
    pub start_time: Option<String>,
    pub bits_per_raw_sample: Option<String>,
    pub extradata_size: Option<i64>,
    pub disposition: Option<Disposition>,
    pub tags: Option<StreamTags>,
}

/// Audio elementary stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioStream {
    pub index: Option<i64>,
    pub codec_name: Option<String>,
    pub codec_long_name: Option<String>,
    pub codec_type: Option<String>,
    pub codec_tag_string: Option<String>,
    pub codec_tag: Option<String>,
    pub sample_fmt: Option<String>,
    pub sample_rate: Option<String>,
    pub channels: Option<i64>,
    pub channel_layout: Option<String>,
    pub bits_per_sample: Option<i64>,
    pub initial_padding: Option<i64>,
    pub r_frame_rate: Option<String>,
    pub avg_frame_rate: Option<String>,
    pub time_base: Option<String>,
    pub start_pts: Option<i64>,
    pub start_time: Option<String>,
    pub bit_rate: Option<String>,
    pub disposition: Option<Disposition>,
    pub tags: Option<StreamTags>,
}

/// Subtitle elementary stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtitleStream {
    pub index: Option<i64>,
    pub codec_name: Option<String>,
    pub codec_long_name: Option<String>,
    pub codec_type: Option<String>,
    pub codec_tag_string: Option<String>,
    pub codec_tag: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub r_frame_rate: Option<String>,
    pub avg_frame_rate: Option<String>,
    pub time_base: Option<String>,
    pub start_pts: Option<i64>,
    pub start_time: Option<String>,
    pub disposition: Option<Disposition>,
    pub tags: Option<StreamTags>,
}

/// Stream role flags as reported by ffprobe (0 or 1 per flag)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disposition {
    pub default: Option<i64>,
    pub dub: Option<i64>,
    pub original: Option<i64>,
    pub comment: Option<i64>,
    pub lyrics: Option<i64>,
    pub karaoke: Option<i64>,
    pub forced: Option<i64>,
    pub hearing_impaired: Option<i64>,
    pub visual_impaired: Option<i64>,
    pub clean_effects: Option<i64>,
    pub attached_pic: Option<i64>,
    pub timed_thumbnails: Option<i64>,
    pub non_diegetic: Option<i64>,
    pub captions: Option<i64>,
    pub descriptions: Option<i64>,
    pub metadata: Option<i64>,
    pub dependent: Option<i64>,
    pub still_image: Option<i64>,
}

fn flag_set(flag: Option<i64>) -> bool {
    matches!(flag, Some(n) if n != 0)
}

impl Disposition {
    pub fn is_default(&self) -> bool {
        flag_set(self.default)
    }

    pub fn is_forced(&self) -> bool {
        flag_set(self.forced)
    }

    pub fn is_hearing_impaired(&self) -> bool {
        flag_set(self.hearing_impaired)
    }

    pub fn is_visual_impaired(&self) -> bool {
        flag_set(self.visual_impaired)
    }

    pub fn is_attached_pic(&self) -> bool {
        flag_set(self.attached_pic)
    }

    pub fn is_comment(&self) -> bool {
        flag_set(self.comment)
    }

    /// Names of every flag reported as set, in ffprobe's field order
    pub fn active_flags(&self) -> Vec<&'static str> {
        [
            ("default", self.default),
            ("dub", self.dub),
            ("original", self.original),
            ("comment", self.comment),
            ("lyrics", self.lyrics),
            ("karaoke", self.karaoke),
            ("forced", self.forced),
            ("hearing_impaired", self.hearing_impaired),
            ("visual_impaired", self.visual_impaired),
            ("clean_effects", self.clean_effects),
            ("attached_pic", self.attached_pic),
            ("timed_thumbnails", self.timed_thumbnails),
            ("non_diegetic", self.non_diegetic),
            ("captions", self.captions),
            ("descriptions", self.descriptions),
            ("metadata", self.metadata),
            ("dependent", self.dependent),
            ("still_image", self.still_image),
        ]
        .into_iter()
        .filter(|(_, flag)| flag_set(*flag))
        .map(|(name, _)| name)
        .collect()
    }
}

/// Per-stream tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamTags {
    pub language: Option<String>,
}

/// Named time range within the media
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: Option<i64>,
    pub time_base: Option<String>,
    pub start: Option<i64>,
    pub start_time: Option<String>,
    pub end: Option<i64>,
    pub end_time: Option<String>,
    pub tags: Option<ChapterTags>,
}

impl Chapter {
    /// Chapter title, if tagged
    pub fn title(&self) -> Option<&str> {
        self.tags.as_ref().and_then(|t| t.title.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterTags {
    pub title: Option<String>,
}

/// Container-level metadata
///
/// `start_time`, `duration`, `size` and `bit_rate` stay as the decimal strings
/// ffprobe prints; use the `*_seconds`/`*_bytes`/`*_bps` helpers for numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatInfo {
    pub filename: Option<String>,
    pub nb_streams: Option<i64>,
    pub nb_programs: Option<i64>,
    pub nb_stream_groups: Option<i64>,
    pub format_name: Option<String>,
    pub format_long_name: Option<String>,
    pub start_time: Option<String>,
    pub duration: Option<String>,
    pub size: Option<String>,
    pub bit_rate: Option<String>,
    pub probe_score: Option<i64>,
    pub tags: Option<FormatTags>,
}

impl FormatInfo {
    pub fn duration_seconds(&self) -> Option<f64> {
        self.duration.as_deref().and_then(|d| d.trim().parse().ok())
    }

    pub fn start_time_seconds(&self) -> Option<f64> {
        self.start_time.as_deref().and_then(|s| s.trim().parse().ok())
    }

    pub fn size_bytes(&self) -> Option<u64> {
        self.size.as_deref().and_then(|s| s.trim().parse().ok())
    }

    pub fn bit_rate_bps(&self) -> Option<u64> {
        self.bit_rate.as_deref().and_then(|b| b.trim().parse().ok())
    }

    /// Comma-separated `format_name` split into its demuxer names
    pub fn format_names(&self) -> Vec<&str> {
        self.format_name
            .as_deref()
            .map(|names| names.split(',').map(str::trim).filter(|n| !n.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Container tags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatTags {
    pub title: Option<String>,
    pub encoder: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub creation_time: Option<DateTime<Utc>>,
}

/// Parse an RFC 3339 timestamp, mapping anything unparsable to `None`
/// so one odd tag does not discard the whole format record.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    })
}
