// Ports - Interface definitions (contracts)

use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

use crate::error::ProbeOutcome;

/// Captured result of one child process run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when the child was terminated by a signal
    pub exit_code: Option<i32>,
    /// Everything the child wrote to stdout, lossily decoded as UTF-8
    pub stdout: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Port for running the probing executable
///
/// Implementations block until the child exits (or the timeout elapses)
/// and must release the child handle on every path.
pub trait ProcessPort: Send + Sync {
    fn run(
        &self,
        program: &Path,
        args: &[OsString],
        timeout: Option<Duration>,
    ) -> ProbeOutcome<ProcessOutput>;
}
