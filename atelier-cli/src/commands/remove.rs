//! `atelier remove <name>` — stop tracking; never touches the directory.

use anyhow::{Context, Result};
use clap::Args;

use atelier_core::store;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Project name.
    pub name: String,
}

impl RemoveArgs {
    pub fn run(self) -> Result<()> {
        let home = super::home()?;
        let removed = store::remove_project_at(&home, &self.name)
            .with_context(|| format!("failed to remove '{}'", self.name))?;

        println!("✓ No longer tracking '{}'", removed.name);
        println!("  Directory left in place: {}", removed.path.display());
        Ok(())
    }
}
