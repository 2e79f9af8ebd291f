//! Python interpreter discovery and module import checks.
//!
//! The interpreter is asked directly: `-c "import sys; print(sys.version)"`
//! for the version and `-c "import <module>"` for each package, both under
//! the same deadline as tool probes.

use crate::requirements::PythonVersion;
use serde::Serialize;
use std::time::Duration;

use super::command::execute_bounded;
use super::{ProbeOutcome, UnavailableReason};

/// Script that prints `sys.version`.
const VERSION_SCRIPT: &str = "import sys; print(sys.version)";

/// A Python interpreter that answered the version query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpreter {
    /// Command used to invoke it (e.g., "python3").
    pub command: String,
    /// `sys.version`, folded onto one line.
    pub version_text: String,
    /// Parsed version, if `sys.version` was recognizable.
    pub version: Option<PythonVersion>,
}

/// Find the first candidate interpreter that reports its version.
///
/// Candidates that are missing, time out, or exit non-zero are skipped.
pub fn detect_interpreter(candidates: &[String], timeout: Duration) -> Option<Interpreter> {
    for command in candidates {
        match execute_bounded(command, &["-c", VERSION_SCRIPT], timeout) {
            Ok(output) if output.success => {
                let version_text = fold_lines(&output.stdout);
                let version = PythonVersion::parse(&version_text);
                tracing::debug!(
                    interpreter = %command,
                    version = %version_text,
                    "found python interpreter"
                );
                return Some(Interpreter {
                    command: command.clone(),
                    version_text,
                    version,
                });
            }
            Ok(output) => {
                tracing::debug!(
                    interpreter = %command,
                    exit_code = ?output.exit_code,
                    "interpreter rejected version query"
                );
            }
            Err(e) => {
                tracing::debug!(interpreter = %command, error = %e, "interpreter unavailable")
            }
        }
    }
    None
}

/// Check whether `module` can be imported by `interpreter`.
pub fn check_module(interpreter: &str, module: &str, timeout: Duration) -> ProbeOutcome {
    if !is_valid_module_name(module) {
        return ProbeOutcome::Unavailable(UnavailableReason::InvalidName);
    }

    let script = format!("import {}", module);
    let result = execute_bounded(interpreter, &["-c", &script], timeout);
    let outcome = ProbeOutcome::from_result(&result);
    tracing::debug!(
        %interpreter,
        %module,
        available = outcome.is_available(),
        "module probe finished"
    );
    outcome
}

/// Whether `name` is a dotted Python identifier (`yaml`, `google.protobuf`).
///
/// Only names that pass are interpolated into `-c` scripts.
pub fn is_valid_module_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
                && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        })
}

/// Collapse multi-line `sys.version` output (older Pythons wrap the
/// compiler banner onto a second line).
fn fold_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_names_accept_dotted_identifiers() {
        assert!(is_valid_module_name("click"));
        assert!(is_valid_module_name("google.protobuf"));
        assert!(is_valid_module_name("_private"));
        assert!(is_valid_module_name("py3"));
    }

    #[test]
    fn module_names_reject_injection() {
        assert!(!is_valid_module_name(""));
        assert!(!is_valid_module_name("os; print(1)"));
        assert!(!is_valid_module_name("a..b"));
        assert!(!is_valid_module_name("3d"));
        assert!(!is_valid_module_name("rich "));
    }

    #[test]
    fn invalid_module_name_never_spawns() {
        let outcome = check_module(
            "prc-verify-definitely-missing-python",
            "os; import sys",
            Duration::from_secs(10),
        );
        assert_eq!(
            outcome,
            ProbeOutcome::Unavailable(UnavailableReason::InvalidName)
        );
    }

    #[test]
    fn missing_interpreter_makes_module_unavailable() {
        let outcome = check_module(
            "prc-verify-definitely-missing-python",
            "click",
            Duration::from_secs(10),
        );
        assert_eq!(
            outcome,
            ProbeOutcome::Unavailable(UnavailableReason::NotFound)
        );
    }

    #[test]
    fn detect_interpreter_skips_missing_candidates() {
        let candidates = vec![
            "prc-verify-missing-python-a".to_string(),
            "prc-verify-missing-python-b".to_string(),
        ];
        assert!(detect_interpreter(&candidates, Duration::from_secs(10)).is_none());
    }

    #[test]
    fn fold_lines_joins_wrapped_banner() {
        let folded = fold_lines("2.7.5 (default, Nov 16 2020)\n[GCC 4.8.5]\n");
        assert_eq!(folded, "2.7.5 (default, Nov 16 2020) [GCC 4.8.5]");
    }
}
