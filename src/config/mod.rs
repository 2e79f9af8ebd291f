//! Settings for the verification run.
//!
//! - Schema and defaults in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use prc_verify::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".prc")).unwrap();
//! fs::write(temp.path().join(".prc/verify.yml"), "probe_timeout_secs: 5").unwrap();
//!
//! let settings = load_settings(temp.path(), None).unwrap();
//! assert_eq!(settings.probe_timeout_secs, 5);
//! ```
//!
//! # Precedence
//!
//! Built-in defaults, then `.prc/verify.yml` (or the `--config` file),
//! then command-line flags and their environment fallbacks.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_config, load_settings, load_settings_file, parse_settings, CONFIG_DIR,
    CONFIG_FILE,
};
pub use schema::{
    SettingsOverrides, VerifySettings, DEFAULT_AI_KEY_VARIABLE, DEFAULT_MINIMUM_PYTHON,
    DEFAULT_PROBE_TIMEOUT_SECS, MAX_PROBE_TIMEOUT_SECS,
};
pub use validator::{validate, validate_settings, ValidationError};
