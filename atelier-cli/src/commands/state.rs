//! `atelier complete|pause|archive|reactivate <name>`

use anyhow::{Context, Result};
use clap::Args;

use atelier_core::{lifecycle, types::ProjectState};

/// Shared arguments for the four lifecycle subcommands.
#[derive(Args, Debug)]
pub struct StateArgs {
    /// Project name as shown by `atelier list`.
    pub name: String,
}

impl StateArgs {
    pub fn run(self, target: ProjectState) -> Result<()> {
        let home = super::home()?;
        let record = lifecycle::transition_to_at(&home, &self.name, target)
            .with_context(|| format!("failed to update '{}'", self.name))?;

        println!("✓ '{}' is now {}", record.name, record.state);
        if let Some(at) = record.completed_at {
            println!("  completed at: {}", at.to_rfc3339());
        }
        Ok(())
    }
}
