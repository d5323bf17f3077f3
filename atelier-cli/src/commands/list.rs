//! `atelier list` — tracked projects as a table or JSON.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use atelier_core::{
    store,
    types::{ProjectRecord, ProjectState},
};

/// Arguments for `atelier list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show only projects in this state.
    #[arg(long, short = 's')]
    pub state: Option<ProjectState>,

    /// Include archived projects (hidden by default).
    #[arg(long, short = 'a', conflicts_with = "state")]
    pub all: bool,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "state")]
    state: String,
    #[tabled(rename = "path")]
    path: String,
    #[tabled(rename = "modified")]
    modified: String,
    #[tabled(rename = "category")]
    category: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let home = super::home()?;
        let mut records = store::list_projects_at(&home, self.state)
            .context("failed to load project store")?;
        if self.state.is_none() && !self.all {
            records.retain(|r| r.state != ProjectState::Archived);
        }

        // Opportunistic refresh against the filesystem; in-memory only.
        for record in &mut records {
            store::refresh_record(record);
        }

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&records).context("failed to serialize projects")?
            );
            return Ok(());
        }

        if records.is_empty() {
            println!("No projects tracked.");
            println!("Run: atelier add <path>  or  atelier scan <dir>");
            return Ok(());
        }

        print_table(&records);
        Ok(())
    }
}

fn print_table(records: &[ProjectRecord]) {
    let rows: Vec<ProjectRow> = records
        .iter()
        .map(|r| ProjectRow {
            name: r.name.clone(),
            state: state_label(r.state),
            path: r.path.display().to_string(),
            modified: format_age(r.last_modified),
            category: r.category.clone().unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("{} projects", records.len());
}

fn state_label(state: ProjectState) -> String {
    match state {
        ProjectState::Active => "active".green().to_string(),
        ProjectState::Paused => "paused".yellow().to_string(),
        ProjectState::Completed => "completed".blue().to_string(),
        ProjectState::Archived => "archived".bright_black().to_string(),
    }
}

/// Human-readable age of a timestamp ("3d ago", "just now").
fn format_age(at: DateTime<Utc>) -> String {
    let delta = Utc::now().signed_duration_since(at);
    if delta.num_minutes() < 1 {
        "just now".to_string()
    } else if delta.num_hours() < 1 {
        format!("{}m ago", delta.num_minutes())
    } else if delta.num_days() < 1 {
        format!("{}h ago", delta.num_hours())
    } else if delta.num_days() < 30 {
        format!("{}d ago", delta.num_days())
    } else {
        at.format("%Y-%m-%d").to_string()
    }
}
