//! Process execution adapter
//!
//! Runs the probing executable with `std::process`, capturing stdout and
//! optionally enforcing a deadline.
//!
//! On timeout only the direct child is killed and reaped. The stdout reader
//! thread is not joined on that path: if the child spawned descendants that
//! still hold the pipe (a wrapper script that does not `exec`), the thread
//! lingers until they exit, while `run` itself returns at the deadline.

use std::ffi::OsString;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::{ProbeError, ProbeOutcome};
use crate::ports::{ProcessOutput, ProcessPort};

/// How often a child is polled while a timeout is active
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// `std::process` backed process adapter
#[derive(Debug, Default, Clone, Copy)]
pub struct StdProcessAdapter;

impl StdProcessAdapter {
    /// Create new process adapter
    pub fn new() -> Self {
        Self
    }
}

impl ProcessPort for StdProcessAdapter {
    fn run(
        &self,
        program: &Path,
        args: &[OsString],
        timeout: Option<Duration>,
    ) -> ProbeOutcome<ProcessOutput> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        hide_console_window(&mut command);

        debug!(program = %program.display(), "Spawning probe process");
        let mut child = command.spawn().map_err(|source| ProbeError::Spawn {
            program: program.display().to_string(),
            source,
        })?;

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "child stdout was not captured"))?;

        // Drain stdout concurrently so a full pipe cannot stall the child while we wait.
        let reader = thread::spawn(move || -> io::Result<Vec<u8>> {
            let mut buffer = Vec::new();
            stdout.read_to_end(&mut buffer)?;
            Ok(buffer)
        });

        let status = match timeout {
            Some(limit) => wait_with_deadline(&mut child, limit)?,
            None => child.wait()?,
        };

        let bytes = reader
            .join()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "stdout reader thread panicked"))??;

        let output = ProcessOutput {
            exit_code: status.code(),
            stdout: String::from_utf8_lossy(&bytes).into_owned(),
        };

        if !output.success() {
            warn!(
                program = %program.display(),
                exit_code = ?output.exit_code,
                "Probe process exited unsuccessfully"
            );
        }

        Ok(output)
    }
}

/// Poll the child until it exits; kill and reap it once `limit` elapses.
fn wait_with_deadline(child: &mut Child, limit: Duration) -> ProbeOutcome<ExitStatus> {
    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) if start.elapsed() >= limit => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ProbeError::Timeout { limit });
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ProbeError::Io(e));
            }
        }
    }
}

#[cfg(windows)]
fn hide_console_window(command: &mut Command) {
    use std::os::windows::process::CommandExt;
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    command.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn hide_console_window(_command: &mut Command) {}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<OsString> {
        vec![OsString::from("-c"), OsString::from(script)]
    }

    #[test]
    fn test_captures_stdout() {
        let output = StdProcessAdapter::new()
            .run(Path::new("sh"), &sh("printf '{\"streams\": []}'"), None)
            .unwrap();
        assert!(output.success());
        assert_eq!(output.stdout, "{\"streams\": []}");
    }

    #[test]
    fn test_stderr_not_captured() {
        let output = StdProcessAdapter::new()
            .run(Path::new("sh"), &sh("echo noise >&2; printf ok"), None)
            .unwrap();
        assert_eq!(output.stdout, "ok");
    }

    #[test]
    fn test_nonzero_exit_still_returns_output() {
        let output = StdProcessAdapter::new()
            .run(Path::new("sh"), &sh("printf partial; exit 3"), None)
            .unwrap();
        assert_eq!(output.exit_code, Some(3));
        assert!(!output.success());
        assert_eq!(output.stdout, "partial");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = StdProcessAdapter::new()
            .run(Path::new("/nonexistent/ffprobe-binary"), &[], None)
            .unwrap_err();
        assert!(matches!(err, ProbeError::Spawn { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_timeout_kills_child() {
        let start = Instant::now();
        let err = StdProcessAdapter::new()
            .run(
                Path::new("sh"),
                &sh("exec sleep 10"),
                Some(Duration::from_millis(200)),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ProbeError::Timeout { limit } if limit == Duration::from_millis(200)
        ));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_timeout_returns_while_grandchild_holds_stdout() {
        // No `exec`: the shell is killed but its `sleep` keeps the pipe open.
        let start = Instant::now();
        let err = StdProcessAdapter::new()
            .run(
                Path::new("sh"),
                &sh("sleep 3; printf late"),
                Some(Duration::from_millis(200)),
            )
            .unwrap_err();
        assert!(matches!(err, ProbeError::Timeout { .. }));
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_timeout_not_hit_for_fast_child() {
        let output = StdProcessAdapter::new()
            .run(Path::new("sh"), &sh("printf done"), Some(Duration::from_secs(10)))
            .unwrap();
        assert_eq!(output.stdout, "done");
    }
}
