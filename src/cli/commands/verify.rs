//! Verify command implementation.
//!
//! Loads settings, runs every probe against the host, and prints the
//! report. Problems found on the host are part of the report, not errors;
//! the only error this command returns is a failed write to `out`.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::config::{load_settings, SettingsOverrides, VerifySettings};
use crate::error::Result;
use crate::probe::{HostProbe, SystemProbe};
use crate::report::{
    build_report, render_json, render_text, should_use_colors, ReportTheme, VerificationReport,
};

/// The verify command implementation.
pub struct VerifyCommand {
    project_root: PathBuf,
    args: Cli,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(project_root: &Path, args: Cli) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolve settings: file (or defaults), then command-line overrides.
    ///
    /// An unreadable or invalid settings file is logged and replaced by the
    /// defaults so the report still runs.
    pub fn settings(&self) -> VerifySettings {
        let mut settings = match load_settings(&self.project_root, self.args.config.as_deref()) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("{}; using default settings", e);
                VerifySettings::default()
            }
        };

        settings.apply_overrides(&SettingsOverrides {
            python: self.args.python.clone(),
            probe_timeout_secs: self.args.timeout,
        });
        settings
    }

    /// Run against the real host and write the report to `out`.
    pub fn execute(&self, out: &mut dyn Write) -> Result<VerificationReport> {
        let settings = self.settings();
        let mut probe = HostProbe::new(settings.probe_timeout(), settings.python.clone());
        let colors = !self.args.no_color && should_use_colors();
        self.execute_with(&mut probe, &settings, colors, out)
    }

    /// Run against `probe` and write the report to `out`.
    pub fn execute_with(
        &self,
        probe: &mut dyn SystemProbe,
        settings: &VerifySettings,
        colors: bool,
        out: &mut dyn Write,
    ) -> Result<VerificationReport> {
        let report = build_report(probe, settings);

        if self.args.json {
            render_json(&report, out)?;
        } else {
            render_text(&report, &ReportTheme::for_terminal(colors), out)?;
        }

        Ok(report)
    }
}
