//! Settings schema.
//!
//! Maps `.prc/verify.yml`. Every field is optional in the file; missing
//! fields take the defaults below.

use crate::requirements::PythonVersion;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Minimum Python version PRC supports.
pub const DEFAULT_MINIMUM_PYTHON: PythonVersion = PythonVersion::new(3, 9, 0);

/// Per-process probe deadline in seconds.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Largest accepted probe deadline in seconds.
pub const MAX_PROBE_TIMEOUT_SECS: u64 = 3600;

/// Variable holding the OpenAI key for AI insights.
pub const DEFAULT_AI_KEY_VARIABLE: &str = "OPENAI_API_KEY";

/// Verification settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifySettings {
    /// Versions below this get a warning.
    pub minimum_python: PythonVersion,

    /// Deadline for each spawned process, in seconds.
    pub probe_timeout_secs: u64,

    /// Interpreter commands to try, in order.
    pub python: Vec<String>,

    /// Environment variable that enables AI insights when non-empty.
    pub ai_key_variable: String,
}

impl Default for VerifySettings {
    fn default() -> Self {
        Self {
            minimum_python: DEFAULT_MINIMUM_PYTHON,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            python: vec!["python3".to_string(), "python".to_string()],
            ai_key_variable: DEFAULT_AI_KEY_VARIABLE.to_string(),
        }
    }
}

impl VerifySettings {
    /// The probe deadline as a [`Duration`].
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Apply command-line overrides on top of file settings.
    pub fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(python) = &overrides.python {
            self.python = vec![python.clone()];
        }
        if let Some(timeout) = overrides.probe_timeout_secs {
            self.probe_timeout_secs = timeout;
        }
    }
}

/// Values supplied on the command line (or their env fallbacks).
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// Single interpreter to use instead of the candidate list.
    pub python: Option<String>,
    /// Probe deadline in seconds.
    pub probe_timeout_secs: Option<u64>,
}
