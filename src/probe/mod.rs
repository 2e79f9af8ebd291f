//! System probes.
//!
//! A probe answers one yes/no question about the host: is this tool
//! runnable, can this module be imported, which interpreter is installed.
//! Failures are folded into [`ProbeOutcome::Unavailable`] here and never
//! travel further.
//!
//! # Modules
//!
//! - [`command`] - Time-bounded subprocess execution and PATH lookup
//! - [`mock`] - Scripted probe for tests
//! - [`python`] - Interpreter discovery and module import checks

pub mod command;
pub mod mock;
pub mod python;

pub use command::{check_command, execute_bounded, resolve_tool_path, BoundedOutput};
pub use mock::MockProbe;
pub use python::{check_module, detect_interpreter, Interpreter};

use crate::error::ProbeError;
use crate::requirements::ToolDescriptor;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Why a probe came back negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// Executable not on PATH.
    NotFound,
    /// Process exceeded the probe timeout.
    TimedOut,
    /// Process ran but exited non-zero (None if killed by signal).
    ExitedWith(Option<i32>),
    /// Process could not be started or waited on.
    SpawnFailed(String),
    /// Module name was not a Python identifier.
    InvalidName,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::TimedOut => write!(f, "timed out"),
            Self::ExitedWith(Some(code)) => write!(f, "exited with code {}", code),
            Self::ExitedWith(None) => write!(f, "terminated by signal"),
            Self::SpawnFailed(msg) => write!(f, "{}", msg),
            Self::InvalidName => write!(f, "invalid module name"),
        }
    }
}

impl From<&ProbeError> for UnavailableReason {
    fn from(err: &ProbeError) -> Self {
        match err {
            ProbeError::NotFound { .. } => Self::NotFound,
            ProbeError::TimedOut { .. } => Self::TimedOut,
            ProbeError::Spawn { .. } | ProbeError::Wait { .. } => {
                Self::SpawnFailed(err.to_string())
            }
        }
    }
}

/// Result of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Available,
    Unavailable(UnavailableReason),
}

impl ProbeOutcome {
    /// Fold a bounded execution into an outcome: available iff it exited 0.
    pub fn from_result(result: &Result<BoundedOutput, ProbeError>) -> Self {
        match result {
            Ok(output) if output.success => Self::Available,
            Ok(output) => Self::Unavailable(UnavailableReason::ExitedWith(output.exit_code)),
            Err(e) => Self::Unavailable(e.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// The reason, if unavailable.
    pub fn reason(&self) -> Option<&UnavailableReason> {
        match self {
            Self::Available => None,
            Self::Unavailable(reason) => Some(reason),
        }
    }
}

/// The questions the report asks of the host.
///
/// [`HostProbe`] answers them for real; tests substitute a scripted probe.
pub trait SystemProbe {
    /// Locate a working Python interpreter.
    fn interpreter(&mut self) -> Option<Interpreter>;

    /// Check whether `import_name` imports under `interpreter`.
    fn module_importable(&mut self, interpreter: &Interpreter, import_name: &str)
        -> ProbeOutcome;

    /// Check whether an external tool runs.
    fn tool_available(&mut self, tool: &ToolDescriptor) -> ProbeOutcome;

    /// Where the tool's executable lives, if it can be found on PATH.
    fn tool_location(&self, _tool: &ToolDescriptor) -> Option<PathBuf> {
        None
    }

    /// Read an environment variable.
    fn env_var(&self, name: &str) -> Option<String>;
}

/// Probes the real host: spawns processes and reads the real environment.
#[derive(Debug, Clone)]
pub struct HostProbe {
    timeout: Duration,
    python_candidates: Vec<String>,
    path_entries: Vec<PathBuf>,
}

impl HostProbe {
    /// Create a probe that tries `python_candidates` in order.
    pub fn new(timeout: Duration, python_candidates: Vec<String>) -> Self {
        Self {
            timeout,
            python_candidates,
            path_entries: command::parse_system_path(),
        }
    }
}

impl SystemProbe for HostProbe {
    fn interpreter(&mut self) -> Option<Interpreter> {
        detect_interpreter(&self.python_candidates, self.timeout)
    }

    fn module_importable(
        &mut self,
        interpreter: &Interpreter,
        import_name: &str,
    ) -> ProbeOutcome {
        check_module(&interpreter.command, import_name, self.timeout)
    }

    fn tool_available(&mut self, tool: &ToolDescriptor) -> ProbeOutcome {
        check_command(tool, self.timeout)
    }

    fn tool_location(&self, tool: &ToolDescriptor) -> Option<PathBuf> {
        resolve_tool_path(tool.command, &self.path_entries)
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
