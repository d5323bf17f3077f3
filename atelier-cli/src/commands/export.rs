//! `atelier export [--output <file>]` — dump the whole store as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use atelier_core::store;

/// Export the full store (all states, all fields) as pretty-printed JSON.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write to a file instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    pub fn run(self) -> Result<()> {
        let home = super::home()?;
        let mut loaded = store::load_at(&home).context("failed to load project store")?;
        store::refresh_store(&mut loaded);

        let json = serde_json::to_string_pretty(&loaded).context("failed to serialize store")?;
        match self.output {
            Some(path) => {
                std::fs::write(&path, json)
                    .with_context(|| format!("cannot write '{}'", path.display()))?;
                println!("✓ Exported {} project(s) to {}", loaded.projects.len(), path.display());
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}
