//! `atelier update <name> <field> <value>`

use anyhow::{Context, Result};
use clap::Args;

use atelier_core::store;

/// Set one metadata field on a project. An empty value clears the field.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Project name.
    pub name: String,

    /// Field: category | description | visibility | repoUrl | nextSteps | docs.
    pub field: String,

    /// New value; pass "" to clear.
    pub value: String,
}

impl UpdateArgs {
    pub fn run(self) -> Result<()> {
        let home = super::home()?;
        let record = store::update_field_at(&home, &self.name, &self.field, &self.value)
            .with_context(|| format!("failed to update '{}'", self.name))?;

        if self.value.is_empty() {
            println!("✓ Cleared {} on '{}'", self.field, record.name);
        } else {
            println!("✓ Set {} on '{}'", self.field, record.name);
        }
        Ok(())
    }
}
