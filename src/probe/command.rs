//! Time-bounded command execution.
//!
//! Every probe runs its child process through [`execute_bounded`]: stdin is
//! closed, stdout and stderr are drained on reader threads, and the child is
//! killed once the deadline passes. Nothing the child prints reaches the
//! terminal.

use crate::error::ProbeError;
use crate::requirements::ToolDescriptor;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use super::ProbeOutcome;

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Time allowed to collect output from a child that exits at its deadline.
const DRAIN_GRACE: Duration = Duration::from_millis(100);

/// Output of a process that finished before its deadline.
#[derive(Debug, Clone)]
pub struct BoundedOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether the process exited 0.
    pub success: bool,

    /// Standard output, lossily decoded.
    pub stdout: String,

    /// Standard error, lossily decoded.
    pub stderr: String,

    /// Wall time from spawn to exit.
    pub duration: Duration,
}

/// Run `program` with `args`, giving up after `timeout`.
///
/// A missing executable is reported as [`ProbeError::NotFound`] and an
/// expired deadline as [`ProbeError::TimedOut`]; a non-zero exit is not an
/// error, callers inspect [`BoundedOutput::success`].
///
/// The deadline also bounds output collection. A background grandchild that
/// keeps the pipes open only loses whatever it writes after the deadline.
/// A timeout too large to represent as an [`Instant`] means no deadline.
pub fn execute_bounded(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<BoundedOutput, ProbeError> {
    let start = Instant::now();

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ProbeError::NotFound {
                    program: program.to_string(),
                }
            } else {
                ProbeError::Spawn {
                    program: program.to_string(),
                    source,
                }
            }
        })?;

    let stdout_rx = child.stdout.take().map(drain);
    let stderr_rx = child.stderr.take().map(drain);

    let deadline = start.checked_add(timeout);
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if deadline.is_some_and(|d| Instant::now() >= d) => {
                reap(&mut child);
                // Reader threads are left to finish on their own: a grandchild
                // may still hold the pipes open.
                return Err(ProbeError::TimedOut {
                    program: program.to_string(),
                    timeout,
                });
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(source) => {
                reap(&mut child);
                return Err(ProbeError::Wait {
                    program: program.to_string(),
                    source,
                });
            }
        }
    };

    let duration = start.elapsed();
    let drain_until = deadline.map(|d| d.max(Instant::now() + DRAIN_GRACE));

    Ok(BoundedOutput {
        exit_code: status.code(),
        success: status.success(),
        stdout: collect(program, stdout_rx, drain_until),
        stderr: collect(program, stderr_rx, drain_until),
        duration,
    })
}

/// Check whether an external tool is installed and runnable.
///
/// Runs `<command> <version_flag>` and reports it available only when it
/// exits 0 within `timeout`.
pub fn check_command(tool: &ToolDescriptor, timeout: Duration) -> ProbeOutcome {
    let result = execute_bounded(tool.command, &[tool.version_flag], timeout);
    let outcome = ProbeOutcome::from_result(&result);

    match &result {
        Ok(output) => tracing::debug!(
            tool = tool.command,
            flag = tool.version_flag,
            exit_code = ?output.exit_code,
            elapsed_ms = output.duration.as_millis() as u64,
            "tool probe finished"
        ),
        Err(e) => tracing::debug!(tool = tool.command, error = %e, "tool probe failed"),
    }

    outcome
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Only used to
/// report where a tool lives; availability is decided by running it.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Forward everything read from `pipe` as chunks until EOF.
///
/// The reader thread is never joined; it ends on EOF or once the receiver
/// is dropped and its next send fails.
fn drain<R: Read + Send + 'static>(mut pipe: R) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut chunk = [0u8; 4096];
        loop {
            match pipe.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => {
                    if tx.send(chunk[..n].to_vec()).is_err() {
                        break;
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(_) => break,
            }
        }
    });
    rx
}

/// Gather chunks until the pipe closes or `until` passes.
fn collect(program: &str, rx: Option<Receiver<Vec<u8>>>, until: Option<Instant>) -> String {
    let Some(rx) = rx else {
        return String::new();
    };

    let mut bytes = Vec::new();
    loop {
        let chunk = match until {
            Some(until) => rx.recv_timeout(until.saturating_duration_since(Instant::now())),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match chunk {
            Ok(data) => bytes.extend_from_slice(&data),
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                tracing::debug!(program, "output pipe still open at deadline, detaching reader");
                break;
            }
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}
