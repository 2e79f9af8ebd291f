//! Settings validation rules.
//!
//! - The probe timeout must be between 1 and 3600 seconds
//! - At least one interpreter candidate, none blank
//! - The AI key variable name must be a valid environment variable name

use crate::config::schema::{VerifySettings, MAX_PROBE_TIMEOUT_SECS};
use crate::error::{Result, VerifyError};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Field the error applies to
    pub field: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Validate settings and return all errors.
pub fn validate_settings(settings: &VerifySettings) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if settings.probe_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "probe_timeout_secs",
            message: "probe_timeout_secs must be greater than 0".to_string(),
        });
    } else if settings.probe_timeout_secs > MAX_PROBE_TIMEOUT_SECS {
        errors.push(ValidationError {
            field: "probe_timeout_secs",
            message: format!(
                "probe_timeout_secs must be at most {}",
                MAX_PROBE_TIMEOUT_SECS
            ),
        });
    }

    if settings.python.is_empty() {
        errors.push(ValidationError {
            field: "python",
            message: "python must list at least one interpreter".to_string(),
        });
    } else if settings.python.iter().any(|p| p.trim().is_empty()) {
        errors.push(ValidationError {
            field: "python",
            message: "python entries must not be blank".to_string(),
        });
    }

    if !is_env_var_name(&settings.ai_key_variable) {
        errors.push(ValidationError {
            field: "ai_key_variable",
            message: format!(
                "ai_key_variable '{}' is not a valid variable name",
                settings.ai_key_variable
            ),
        });
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(settings: &VerifySettings) -> Result<()> {
    let errors = validate_settings(settings);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(VerifyError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

fn is_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
