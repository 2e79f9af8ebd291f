//! prc-verify - Setup verification for the PRC security and compliance scanner.
//!
//! Checks that the Python interpreter, the Python packages PRC imports, and
//! the external scanners it can delegate to are present, then prints a
//! readiness report. Findings are informational: the run always succeeds.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading and validation
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Time-bounded checks against the host
//! - [`report`] - Report assembly and rendering
//! - [`requirements`] - Package and tool tables, Python versions
//!
//! # Example
//!
//! ```
//! use prc_verify::config::VerifySettings;
//! use prc_verify::probe::MockProbe;
//! use prc_verify::report::{build_report, render_text, ReportTheme};
//!
//! let mut probe = MockProbe::new().with_python("3.11.4").with_env("OPENAI_API_KEY", "sk");
//! let report = build_report(&mut probe, &VerifySettings::default());
//!
//! let mut out = Vec::new();
//! render_text(&report, &ReportTheme::plain(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("[OK] Python version is compatible"));
//! assert!(text.contains("AI insights enabled"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod requirements;

pub use error::{Result, VerifyError};
