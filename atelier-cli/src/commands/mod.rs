//! Command implementations, one module per subcommand.

pub mod add;
pub mod export;
pub mod list;
pub mod mcp;
pub mod new;
pub mod remove;
pub mod scan;
pub mod state;
pub mod template;
pub mod update;

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Resolve the user's home directory for the `_at` store/template APIs.
pub(crate) fn home() -> Result<PathBuf> {
    dirs::home_dir().context("could not determine home directory")
}
