//! ffprobe command-line construction

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::options::ProbeOptions;

/// Arguments for one ffprobe invocation requesting streams, chapters and format as JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeArgs {
    flags: Vec<String>,
    input: PathBuf,
}

impl ProbeArgs {
    /// Build the argument list for `input` from already-normalised options.
    ///
    /// `bit_exact` is deliberately not emitted; ffprobe's `-bitexact` is never
    /// passed even when the option is set.
    pub fn build(input: impl AsRef<Path>, options: &ProbeOptions) -> Self {
        let mut flags: Vec<String> = vec!["-hide_banner".into(), "-v".into(), "quiet".into()];

        flags.push("-analyzeduration".into());
        flags.push(options.analyze_duration.to_string());
        flags.push("-probesize".into());
        flags.push(options.probe_size.to_string());

        if options.unit {
            flags.push("-unit".into());
        }
        if options.sexagesimal {
            flags.push("-sexagesimal".into());
        }

        for flag in ["-show_streams", "-show_chapters", "-show_format", "-of", "json"] {
            flags.push(flag.into());
        }

        Self {
            flags,
            input: input.as_ref().to_path_buf(),
        }
    }

    /// Option tokens, without the input path
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// argv handed to the child; the input path is a single element
    pub fn tokens(&self) -> Vec<OsString> {
        self.flags
            .iter()
            .map(OsString::from)
            .chain(std::iter::once(self.input.as_os_str().to_os_string()))
            .collect()
    }

    /// Flattened, space-joined rendition with the input path double-quoted
    pub fn command_line(&self) -> String {
        format!("{} \"{}\"", self.flags.join(" "), self.input.display())
    }
}

impl fmt::Display for ProbeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_line() {
        let args = ProbeArgs::build("movie.mkv", &ProbeOptions::default());
        assert_eq!(
            args.command_line(),
            "-hide_banner -v quiet -analyzeduration 5000000 -probesize 5000000 \
             -show_streams -show_chapters -show_format -of json \"movie.mkv\""
        );
    }

    #[test]
    fn test_unit_and_sexagesimal_flags() {
        let options = ProbeOptions::new().with_unit(true).with_sexagesimal(true);
        let line = ProbeArgs::build("a.mp4", &options).command_line();
        assert!(line.contains(" -probesize 5000000 -unit -sexagesimal -show_streams "));

        let only_unit = ProbeArgs::build("a.mp4", &ProbeOptions::new().with_unit(true));
        assert!(only_unit.flags().iter().any(|f| f == "-unit"));
        assert!(!only_unit.flags().iter().any(|f| f == "-sexagesimal"));

        let neither = ProbeArgs::build("a.mp4", &ProbeOptions::new());
        assert!(!neither.flags().iter().any(|f| f == "-unit" || f == "-sexagesimal"));
    }

    #[test]
    fn test_limits_are_emitted_verbatim() {
        let options = ProbeOptions::new()
            .with_analyze_duration(Some(0))
            .with_probe_size(Some(32));
        let line = ProbeArgs::build("a.mp4", &options).command_line();
        assert!(line.contains("-analyzeduration 0 "));
        assert!(line.contains("-probesize 32 "));
    }

    #[test]
    fn test_out_of_range_limits_fall_back() {
        let options = ProbeOptions::new()
            .with_analyze_duration(Some(-5))
            .with_probe_size(Some(31));
        let line = ProbeArgs::build("a.mp4", &options).command_line();
        assert!(line.contains("-analyzeduration 5000000 "));
        assert!(line.contains("-probesize 5000000 "));
    }

    #[test]
    fn test_bit_exact_is_not_emitted() {
        let with = ProbeArgs::build("a.mp4", &ProbeOptions::new().with_bit_exact(true));
        let without = ProbeArgs::build("a.mp4", &ProbeOptions::new());
        assert_eq!(with, without);
        assert!(!with.command_line().contains("bitexact"));
    }

    #[test]
    fn test_tokens_keep_path_whole() {
        let args = ProbeArgs::build("/media/My Movie (2024).mkv", &ProbeOptions::default());
        let tokens = args.tokens();
        assert_eq!(tokens.first().unwrap(), "-hide_banner");
        assert_eq!(tokens.last().unwrap(), "/media/My Movie (2024).mkv");
        assert_eq!(tokens[tokens.len() - 2], "json");
        assert!(args
            .command_line()
            .ends_with("-of json \"/media/My Movie (2024).mkv\""));
    }
}
