//! Media file probing via an external ffprobe executable
//!
//! [`FFprobe::new`] checks that the input exists, builds the ffprobe command
//! line, runs it synchronously and maps the JSON it prints. Any failure after
//! the existence check is logged and degrades to an empty [`ProbeResult`].

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::adapters::StdProcessAdapter;
use crate::domain::model::ProbeResult;
use crate::domain::options::ProbeOptions;
use crate::error::{ProbeError, ProbeOutcome};
use crate::ports::ProcessPort;

pub mod args;
pub mod mapper;

pub use args::ProbeArgs;
pub use mapper::parse_probe_output;

/// A completed probe of one media file
#[derive(Debug, Clone)]
pub struct FFprobe {
    input: PathBuf,
    args: ProbeArgs,
    metadata: ProbeResult,
}

impl FFprobe {
    /// Probe `input` with the system process runner.
    ///
    /// Fails only when `input` is not an existing file.
    pub fn new(input: impl AsRef<Path>, options: &ProbeOptions) -> ProbeOutcome<Self> {
        Self::with_runner(input, options, &StdProcessAdapter::new())
    }

    /// Probe `input` using the given process runner
    pub fn with_runner(
        input: impl AsRef<Path>,
        options: &ProbeOptions,
        runner: &dyn ProcessPort,
    ) -> ProbeOutcome<Self> {
        let input = input.as_ref();
        let args = ProbeArgs::build(input, options);

        let metadata = match probe_with(&args, options, runner) {
            Ok(metadata) => metadata,
            Err(ProbeError::FileNotFound { path }) => return Err(ProbeError::FileNotFound { path }),
            Err(e) => {
                error!(path = %input.display(), error = %e, "Probe failed, returning empty metadata");
                ProbeResult::default()
            }
        };

        Ok(Self {
            input: input.to_path_buf(),
            args,
            metadata,
        })
    }

    /// Probe `input`, surfacing every failure kind instead of degrading
    pub fn try_probe(input: impl AsRef<Path>, options: &ProbeOptions) -> ProbeOutcome<ProbeResult> {
        let args = ProbeArgs::build(input.as_ref(), options);
        probe_with(&args, options, &StdProcessAdapter::new())
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Arguments ffprobe was invoked with
    pub fn args(&self) -> &ProbeArgs {
        &self.args
    }

    pub fn metadata(&self) -> &ProbeResult {
        &self.metadata
    }

    pub fn into_metadata(self) -> ProbeResult {
        self.metadata
    }
}

/// Run one probe end to end, returning the typed failure on any step
pub fn probe_with(
    args: &ProbeArgs,
    options: &ProbeOptions,
    runner: &dyn ProcessPort,
) -> ProbeOutcome<ProbeResult> {
    let input = args.input();
    if !input.is_file() {
        return Err(ProbeError::FileNotFound {
            path: input.display().to_string(),
        });
    }

    info!(path = %input.display(), "Probing media file");
    debug!(
        program = %options.ffprobe_path.display(),
        command_line = %args,
        bit_exact = options.bit_exact,
        "Built ffprobe arguments"
    );

    let output = runner.run(&options.ffprobe_path, &args.tokens(), options.timeout)?;
    let result = parse_probe_output(&output.stdout)?;

    info!(
        path = %input.display(),
        video = result.streams.video.len(),
        audio = result.streams.audio.len(),
        subtitle = result.streams.subtitle.len(),
        chapters = result.chapters.len(),
        format = result.format.is_some(),
        "Probe completed"
    );
    Ok(result)
}
