//! Environment variable expansion for configured resource paths.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//! - a leading `~` - expands to the home directory

use crate::ConfigError;

/// Expand environment variables and a leading tilde in a path string.
///
/// Bare `$VAR` is left untouched; only the braced form is expanded.
pub(crate) fn expand_path(value: &str, field: &str) -> Result<String, ConfigError> {
    let expanded = if value.contains("${") {
        shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
            std::env::var(var)
                .map(Some)
                .map_err(|_| UnsetVar(var.to_owned()))
        })
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })?
        .into_owned()
    } else {
        value.to_owned()
    };

    Ok(shellexpand::tilde(&expanded).into_owned())
}

/// Name of an environment variable that is not set.
struct UnsetVar(String);
