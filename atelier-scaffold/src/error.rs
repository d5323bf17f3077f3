//! Error types for atelier-scaffold.

use std::path::PathBuf;

use thiserror::Error;

use atelier_core::StoreError;
use atelier_template::TemplateError;

/// All fatal errors the scaffold pipeline can report.
///
/// Docs-directory and git-init failures are deliberately not here: they are
/// non-fatal warnings carried on the scaffold report.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Template resolution failed (missing, no definition, unparsable).
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Store registration failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The project name was empty.
    #[error("project name must not be empty")]
    EmptyName,

    /// The destination path already exists — nothing is created.
    #[error("destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// Creating the destination directory failed (e.g. permission denied).
    /// Anything created before this point stays on disk.
    #[error("cannot create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while copying the template tree, with path context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`ScaffoldError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::Io { path: path.into(), source }
}
