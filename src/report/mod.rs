//! The readiness report.
//!
//! [`build_report`] runs every check in a fixed order against a
//! [`SystemProbe`](crate::probe::SystemProbe) and returns a
//! [`VerificationReport`]; [`render_text`] and [`render_json`] print it.
//!
//! # Example
//!
//! ```no_run
//! use prc_verify::config::VerifySettings;
//! use prc_verify::probe::HostProbe;
//! use prc_verify::report::{build_report, render_text, ReportTheme};
//!
//! let settings = VerifySettings::default();
//! let mut probe = HostProbe::new(settings.probe_timeout(), settings.python.clone());
//! let report = build_report(&mut probe, &settings);
//! render_text(&report, &ReportTheme::plain(), &mut std::io::stdout()).unwrap();
//! ```

pub mod builder;
pub mod render;
pub mod theme;

pub use builder::build_report;
pub use render::{render_json, render_text};
pub use theme::{should_use_colors, ReportTheme, Tag};

use crate::requirements::PythonVersion;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of the interpreter/version check.
#[derive(Debug, Clone, Serialize)]
pub struct InterpreterCheck {
    /// Command of the interpreter that answered, if any.
    pub command: Option<String>,
    /// Its `sys.version`.
    pub version_text: Option<String>,
    /// Parsed version.
    pub version: Option<PythonVersion>,
    /// Minimum recommended version.
    pub minimum: PythonVersion,
    /// Whether `version` meets `minimum`. False when the version is unknown.
    pub compatible: bool,
}

/// Outcome of one package import check.
#[derive(Debug, Clone, Serialize)]
pub struct PackageCheck {
    pub name: &'static str,
    pub import_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub installed: bool,
    /// Why the import failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PackageCheck {
    /// The pip command that installs this package.
    pub fn install_command(&self) -> String {
        format!("pip install {}", self.name)
    }
}

/// Outcome of one external tool check.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCheck {
    pub command: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub install_hint: &'static str,
    pub available: bool,
    /// Resolved executable path, when the tool is on PATH.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Outcome of the environment variable check.
#[derive(Debug, Clone, Serialize)]
pub struct EnvVarCheck {
    pub variable: String,
    /// Present and non-empty.
    pub set: bool,
}

/// Everything the verification run found.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub generated_at: DateTime<Utc>,
    pub interpreter: InterpreterCheck,
    pub required_packages: Vec<PackageCheck>,
    pub optional_packages: Vec<PackageCheck>,
    pub tools: Vec<ToolCheck>,
    /// Number of entries in `tools` that are available.
    pub tools_available: usize,
    pub ai_insights: EnvVarCheck,
}

impl VerificationReport {
    /// Required packages that failed to import.
    pub fn missing_required(&self) -> impl Iterator<Item = &PackageCheck> {
        self.required_packages.iter().filter(|p| !p.installed)
    }

    /// Whether PRC has to rely on the built-in scanner alone.
    pub fn builtin_only(&self) -> bool {
        self.tools_available == 0
    }
}
