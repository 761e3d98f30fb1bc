//! CLI error types.

use docmill_config::ConfigError;
use docmill_pages::{TransformError, WriteError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid page tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize manifest: {0}")]
    Manifest(#[source] serde_json::Error),

    #[error("{0}")]
    Transform(#[from] TransformError),

    #[error("{0}")]
    Write(#[from] WriteError),

    #[error("{0}")]
    Validation(String),
}
