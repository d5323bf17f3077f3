//! `atelier template list` and `atelier template init`

use anyhow::{Context, Result};
use clap::Subcommand;
use tabled::{settings::Style, Table, Tabled};

use atelier_template::registry;

/// Manage scaffolding templates under ~/.atelier/templates/.
#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// List available templates.
    List,

    /// Write a starter template skeleton (no-op if templates already exist).
    Init,
}

#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "description")]
    description: String,
}

pub fn run(cmd: TemplateCommand) -> Result<()> {
    match cmd {
        TemplateCommand::List => list(),
        TemplateCommand::Init => init(),
    }
}

fn list() -> Result<()> {
    let home = super::home()?;
    let templates = registry::list_templates_at(&home).context("failed to list templates")?;

    if templates.is_empty() {
        println!("No templates found.");
        println!("Run: atelier template init");
        return Ok(());
    }

    let rows: Vec<TemplateRow> = templates
        .into_iter()
        .map(|t| TemplateRow { id: t.id, name: t.name, description: t.description })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    Ok(())
}

fn init() -> Result<()> {
    let home = super::home()?;
    let written = registry::init_templates_at(&home).context("failed to write starter template")?;

    if written.is_empty() {
        println!("Templates directory already exists; nothing written.");
    } else {
        for id in written {
            println!("✓ Wrote starter template '{id}'");
        }
        println!("  Edit it under: ~/.atelier/templates/");
    }
    Ok(())
}
