//! `atelier add <path> [--name <n>] [--category <c>] [--description <d>]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use atelier_core::{store, types::ProjectRecord};

/// Track an existing project directory.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Absolute or relative path to the project root directory.
    pub path: PathBuf,

    /// Project name; defaults to the directory name.
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Free-form category (e.g. "tools", "client-work").
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// One-line description.
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

impl AddArgs {
    pub fn run(self) -> Result<()> {
        let home = super::home()?;
        let path = self
            .path
            .canonicalize()
            .with_context(|| format!("cannot resolve path '{}'", self.path.display()))?;

        let name = match self.name {
            Some(n) => n,
            None => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .context("path has no final component to use as a name; pass --name")?,
        };

        let mut record = ProjectRecord::new(&name, path.clone());
        record.category = self.category;
        record.description = self.description;
        store::refresh_record(&mut record);

        let record = store::add_project_at(&home, record)
            .with_context(|| format!("failed to add '{name}'"))?;

        println!("✓ Tracking '{}' at {}", record.name, record.path.display());
        Ok(())
    }
}
