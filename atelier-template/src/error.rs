//! Error types for atelier-template.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template registry operations.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template directory does not exist under the templates root.
    #[error("template '{id}' not found")]
    TemplateNotFound { id: String },

    /// The template directory exists but has no definition file.
    #[error("template definition missing at {path}")]
    ConfigMissing { path: PathBuf },

    /// The definition file exists but is not a valid definition document.
    #[error("invalid template definition at {path}: {source}")]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem error while enumerating or reading templates.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`TemplateError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> TemplateError {
    TemplateError::Io { path: path.into(), source }
}
