//! Mapping of ffprobe's JSON writer output onto [`ProbeResult`]

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::model::*;
use crate::error::{ProbeError, ProbeOutcome};

/// Parse captured ffprobe stdout.
///
/// Blank output is a normal "nothing to report" outcome and yields an empty
/// aggregate. Individual streams or chapters that fail to decode are skipped;
/// only a document that is not JSON at all (or is `null`) is an error.
pub fn parse_probe_output(text: &str) -> ProbeOutcome<ProbeResult> {
    if text.trim().is_empty() {
        return Ok(ProbeResult::default());
    }

    let root: Value = serde_json::from_str(text)?;
    if root.is_null() {
        return Err(ProbeError::NullDocument);
    }

    let mut result = ProbeResult::default();

    if let Some(Value::Array(streams)) = root.get("streams") {
        result.streams = partition_streams(streams);
    }

    if let Some(Value::Array(chapters)) = root.get("chapters") {
        result.chapters = chapters
            .iter()
            .enumerate()
            .filter_map(|(position, chapter)| decode(chapter, "chapter", position))
            .collect();
    }

    let format = root
        .get("format")
        .filter(|f| f.as_object().is_some_and(|members| !members.is_empty()));
    if let Some(format) = format {
        result.format = decode(format, "format", 0);
    }

    Ok(result)
}

/// Route each stream object by its `codec_type`, keeping source order per kind
fn partition_streams(streams: &[Value]) -> StreamsByKind {
    let mut partitioned = StreamsByKind::default();

    for (position, stream) in streams.iter().enumerate() {
        let kind = stream
            .get("codec_type")
            .and_then(Value::as_str)
            .and_then(StreamKind::from_codec_type);

        let Some(kind) = kind else {
            debug!(
                position,
                codec_type = ?stream.get("codec_type"),
                "Skipping stream with unrecognised codec_type"
            );
            continue;
        };

        let what = kind.as_str();
        match kind {
            StreamKind::Video => partitioned.video.extend(decode::<VideoStream>(stream, what, position)),
            StreamKind::Audio => partitioned.audio.extend(decode::<AudioStream>(stream, what, position)),
            StreamKind::Subtitle => partitioned
                .subtitle
                .extend(decode::<SubtitleStream>(stream, what, position)),
        }
    }

    partitioned
}

fn decode<T: DeserializeOwned>(value: &Value, what: &str, position: usize) -> Option<T> {
    match T::deserialize(value) {
        Ok(record) => Some(record),
        Err(e) => {
            debug!(position, error = %e, "Skipping malformed {} entry", what);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &str = r#"{
        "streams": [
            {"index": 0, "codec_type": "video", "codec_name": "h264", "width": 1920, "height": 1080},
            {"index": 1, "codec_type": "audio", "codec_name": "aac", "channels": 2, "sample_rate": "48000"},
            {"index": 2, "codec_type": "subtitle", "codec_name": "subrip", "tags": {"language": "eng"}},
            {"index": 3, "codec_type": "data", "codec_name": "bin_data"}
        ],
        "chapters": [],
        "format": {"filename": "in.mkv", "nb_streams": 4}
    }"#;

    #[test]
    fn test_partition_by_codec_type() {
        let result = parse_probe_output(MIXED).unwrap();
        assert_eq!(result.streams.video.len(), 1);
        assert_eq!(result.streams.audio.len(), 1);
        assert_eq!(result.streams.subtitle.len(), 1);
        assert_eq!(result.total_streams(), 3);

        assert_eq!(result.streams.video[0].codec_type.as_deref(), Some("video"));
        assert_eq!(result.streams.audio[0].sample_rate.as_deref(), Some("48000"));
        assert_eq!(
            result.streams.subtitle[0].tags.as_ref().unwrap().language.as_deref(),
            Some("eng")
        );
        let indices: Vec<_> = [
            result.streams.video[0].index,
            result.streams.audio[0].index,
            result.streams.subtitle[0].index,
        ]
        .to_vec();
        assert!(!indices.contains(&Some(3)));
        assert!(result.chapters.is_empty());
        assert_eq!(result.format.unwrap().nb_streams, Some(4));
    }

    #[test]
    fn test_partition_preserves_order() {
        let json = r#"{"streams": [
            {"index": 0, "codec_type": "audio", "codec_name": "opus"},
            {"index": 1, "codec_type": "video", "codec_name": "vp9"},
            {"index": 2, "codec_type": "audio", "codec_name": "flac"},
            {"index": 3, "codec_type": "attachment"},
            {"index": 4, "codec_type": "audio", "codec_name": "ac3"}
        ]}"#;
        let result = parse_probe_output(json).unwrap();
        let audio: Vec<_> = result
            .streams
            .audio
            .iter()
            .map(|a| a.codec_name.as_deref().unwrap())
            .collect();
        assert_eq!(audio, vec!["opus", "flac", "ac3"]);
        assert_eq!(result.streams.video.len(), 1);
    }

    #[test]
    fn test_stream_without_codec_type_dropped() {
        let json = r#"{"streams": [{"index": 0, "codec_name": "h264"}, {"index": 1, "codec_type": 7}]}"#;
        let result = parse_probe_output(json).unwrap();
        assert!(result.streams.is_empty());
    }

    #[test]
    fn test_malformed_stream_skipped() {
        let json = r#"{"streams": [
            {"index": "zero", "codec_type": "video"},
            {"index": 1, "codec_type": "video", "width": 640}
        ]}"#;
        let result = parse_probe_output(json).unwrap();
        assert_eq!(result.streams.video.len(), 1);
        assert_eq!(result.streams.video[0].width, Some(640));
    }

    #[test]
    fn test_malformed_chapter_skipped() {
        let json = r#"{"chapters": [
            {"id": 0, "start": 0, "end": 1000, "tags": {"title": "One"}},
            {"id": "bogus", "start": []},
            42,
            {"id": 2, "start": 2000, "end": 3000, "tags": {"title": "Three"}}
        ]}"#;
        let result = parse_probe_output(json).unwrap();
        let titles: Vec<_> = result.chapters.iter().map(|c| c.title().unwrap()).collect();
        assert_eq!(titles, vec!["One", "Three"]);
    }

    #[test]
    fn test_blank_output_is_empty_result() {
        assert!(parse_probe_output("").unwrap().is_empty());
        assert!(parse_probe_output("  \n\t \r\n").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = parse_probe_output("{\"streams\": [").unwrap_err();
        assert!(matches!(err, ProbeError::Json(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_null_document_is_error() {
        assert!(matches!(
            parse_probe_output("null").unwrap_err(),
            ProbeError::NullDocument
        ));
    }

    #[test]
    fn test_empty_format_object_is_absent() {
        let result = parse_probe_output(r#"{"format": {}}"#).unwrap();
        assert!(result.format.is_none());
        assert!(result.is_empty());
    }

    #[test]
    fn test_format_survives_odd_creation_time() {
        let json = r#"{"format": {"filename": "a.mp4", "nb_streams": 2, "tags": {"creation_time": 1700000000}}}"#;
        let format = parse_probe_output(json).unwrap().format.unwrap();
        assert_eq!(format.filename.as_deref(), Some("a.mp4"));
        assert_eq!(format.nb_streams, Some(2));
        assert!(format.tags.unwrap().creation_time.is_none());
    }

    #[test]
    fn test_wrong_member_shapes_ignored() {
        let json = r#"{"streams": {"index": 0}, "chapters": "none", "format": []}"#;
        let result = parse_probe_output(json).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_non_object_root_yields_empty() {
        assert!(parse_probe_output("[1, 2, 3]").unwrap().is_empty());
        assert!(parse_probe_output("\"text\"").unwrap().is_empty());
    }
}
