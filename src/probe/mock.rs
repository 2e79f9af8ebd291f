//! Mock probe implementation for testing.
//!
//! `MockProbe` implements [`SystemProbe`] from a fixed description of the
//! host and records every question it is asked.
//!
//! # Example
//!
//! ```
//! use prc_verify::config::VerifySettings;
//! use prc_verify::probe::MockProbe;
//! use prc_verify::report::build_report;
//!
//! let mut probe = MockProbe::new()
//!     .with_python("3.11.4 (main)")
//!     .with_modules(&["click", "rich"])
//!     .with_tools(&["trivy"]);
//!
//! let report = build_report(&mut probe, &VerifySettings::default());
//! assert_eq!(report.tools_available, 1);
//! assert_eq!(probe.tool_calls(), ["trivy", "checkov", "gitleaks"]);
//! ```

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::requirements::{PythonVersion, ToolDescriptor};

use super::{Interpreter, ProbeOutcome, SystemProbe, UnavailableReason};

/// Scripted [`SystemProbe`].
#[derive(Debug, Default)]
pub struct MockProbe {
    interpreter: Option<Interpreter>,
    modules: HashSet<String>,
    tools: HashSet<String>,
    env: HashMap<String, String>,
    module_calls: Vec<String>,
    tool_calls: Vec<String>,
    last_interpreter: Option<Interpreter>,
}

impl MockProbe {
    /// A host with no interpreter, no tools and an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `python3` reporting `version_text` as its `sys.version`.
    pub fn with_python(mut self, version_text: &str) -> Self {
        self.interpreter = Some(Interpreter {
            command: "python3".to_string(),
            version_text: version_text.to_string(),
            version: PythonVersion::parse(version_text),
        });
        self
    }

    /// Make these modules importable.
    pub fn with_modules(mut self, modules: &[&str]) -> Self {
        self.modules.extend(modules.iter().map(|m| m.to_string()));
        self
    }

    /// Make these tool commands runnable.
    pub fn with_tools(mut self, commands: &[&str]) -> Self {
        self.tools.extend(commands.iter().map(|c| c.to_string()));
        self
    }

    /// Set an environment variable.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    /// Modules asked about, in order.
    pub fn module_calls(&self) -> &[String] {
        &self.module_calls
    }

    /// Tool commands asked about, in order.
    pub fn tool_calls(&self) -> &[String] {
        &self.tool_calls
    }

    /// Interpreter passed to the most recent module check.
    pub fn last_interpreter(&self) -> Option<&Interpreter> {
        self.last_interpreter.as_ref()
    }
}

impl SystemProbe for MockProbe {
    fn interpreter(&mut self) -> Option<Interpreter> {
        self.interpreter.clone()
    }

    fn module_importable(
        &mut self,
        interpreter: &Interpreter,
        import_name: &str,
    ) -> ProbeOutcome {
        self.module_calls.push(import_name.to_string());
        self.last_interpreter = Some(interpreter.clone());
        if self.modules.contains(import_name) {
            ProbeOutcome::Available
        } else {
            ProbeOutcome::Unavailable(UnavailableReason::ExitedWith(Some(1)))
        }
    }

    fn tool_available(&mut self, tool: &ToolDescriptor) -> ProbeOutcome {
        self.tool_calls.push(tool.command.to_string());
        if self.tools.contains(tool.command) {
            ProbeOutcome::Available
        } else {
            ProbeOutcome::Unavailable(UnavailableReason::NotFound)
        }
    }

    fn tool_location(&self, tool: &ToolDescriptor) -> Option<PathBuf> {
        self.tools
            .contains(tool.command)
            .then(|| PathBuf::from("/usr/local/bin").join(tool.command))
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }
}
