//! Error types for atelier-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (write/save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parse error on load — the store exists but is not a valid document.
    /// Fatal; no auto-repair or backup is attempted.
    #[error("store at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Persistence failure — the store location is not writable.
    #[error("cannot write store at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.atelier/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// The referenced project name is not in the store.
    #[error("project '{name}' not found")]
    ProjectNotFound { name: String },

    /// A project with this name is already tracked.
    #[error("project '{name}' is already tracked")]
    ProjectExists { name: String },

    /// `update_field` was given a field name it does not know.
    #[error("unknown field '{field}'; expected: category, description, visibility, repoUrl, nextSteps, docs")]
    UnknownField { field: String },
}
