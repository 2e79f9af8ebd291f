//! Settings file discovery and loading.

use crate::config::schema::VerifySettings;
use crate::config::validator::validate;
use crate::error::{Result, VerifyError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding PRC project configuration.
pub const CONFIG_DIR: &str = ".prc";

/// Settings file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "verify.yml";

/// Find the project settings file at `.prc/verify.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_DIR).join(CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load and validate a single settings file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if a value is out of range.
pub fn load_settings_file(path: &Path) -> Result<VerifySettings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VerifyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VerifyError::Io(e)
        }
    })?;

    parse_settings(&content, path)
}

/// Parse YAML content into validated settings.
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<VerifySettings> {
    if content.trim().is_empty() {
        return Ok(VerifySettings::default());
    }

    let settings: VerifySettings =
        serde_yaml::from_str(content).map_err(|e| VerifyError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate(&settings)?;
    Ok(settings)
}

/// Load settings with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project file is used when present, and the defaults when it is not.
pub fn load_settings(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<VerifySettings> {
    if let Some(path) = config_override {
        return load_settings_file(path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading settings");
            load_settings_file(&path)
        }
        None => Ok(VerifySettings::default()),
    }
}
