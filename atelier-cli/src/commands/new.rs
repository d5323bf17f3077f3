//! `atelier new [template] [--name …] [--path …] [--docs …] [--git|--no-git]`
//!
//! With template and name on the command line this runs the scaffold pipeline
//! directly; with either missing it prompts for the inputs, then calls the
//! exact same pipeline — the two entry points cannot diverge.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use inquire::{Confirm, Select, Text};

use atelier_scaffold::{scaffold_at, ScaffoldReport, ScaffoldRequest};
use atelier_template::registry;

/// Scaffold a new project from a stored template.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Template id (see `atelier template list`). Prompts when omitted.
    pub template: Option<String>,

    /// Project name. Prompts when omitted.
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Destination directory; defaults to ./<name>.
    #[arg(long, short = 'p')]
    pub path: Option<PathBuf>,

    /// Documentation directory; overrides the template's docsLocation.
    #[arg(long)]
    pub docs: Option<PathBuf>,

    /// Initialize a git repository (overrides the template default).
    #[arg(long, conflicts_with = "no_git")]
    pub git: bool,

    /// Skip git initialization (overrides the template default).
    #[arg(long)]
    pub no_git: bool,
}

impl NewArgs {
    pub fn run(self) -> Result<()> {
        let home = super::home()?;

        let git_override = match (self.git, self.no_git) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        let request = match (self.template, self.name) {
            (Some(template_id), Some(name)) => ScaffoldRequest {
                template_id,
                destination: resolve_destination(self.path, &name)?,
                name,
                docs: self.docs,
                git: git_override,
            },
            (template, name) => {
                build_interactively(&home, template, name, self.path, self.docs, git_override)?
            }
        };

        let report = scaffold_at(&home, &request)
            .with_context(|| format!("failed to scaffold '{}'", request.name))?;
        print_report(&report);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Interactive mode
// ---------------------------------------------------------------------------

fn build_interactively(
    home: &Path,
    template: Option<String>,
    name: Option<String>,
    path: Option<PathBuf>,
    docs: Option<PathBuf>,
    git_override: Option<bool>,
) -> Result<ScaffoldRequest> {
    let template_id = match template {
        Some(id) => id,
        None => {
            let templates = registry::list_templates_at(home)
                .context("failed to list templates")?;
            if templates.is_empty() {
                bail!("no templates found; run `atelier template init` first");
            }
            let labels: Vec<String> = templates
                .iter()
                .map(|t| format!("{} — {}", t.id, t.description))
                .collect();
            let chosen = Select::new("Template:", labels.clone()).prompt()?;
            let idx = labels
                .iter()
                .position(|l| l == &chosen)
                .context("selected template disappeared from the list")?;
            templates[idx].id.clone()
        }
    };

    let name = match name {
        Some(n) => n,
        None => Text::new("Project name:").prompt()?,
    };

    let destination = match path {
        Some(p) => resolve_destination(Some(p), &name)?,
        None => {
            let default = resolve_destination(None, &name)?;
            let answer = Text::new("Destination:")
                .with_default(&default.display().to_string())
                .prompt()?;
            resolve_destination(Some(PathBuf::from(answer)), &name)?
        }
    };

    let docs = match docs {
        Some(d) => Some(d),
        None => {
            let answer = Text::new("Docs directory (empty = template default):").prompt()?;
            if answer.trim().is_empty() { None } else { Some(PathBuf::from(answer)) }
        }
    };

    let git = match git_override {
        Some(g) => Some(g),
        None => {
            let template_default = registry::load_template_at(home, &template_id)
                .map(|t| t.git_init.unwrap_or(true))
                .unwrap_or(true);
            Some(
                Confirm::new("Initialize git repository?")
                    .with_default(template_default)
                    .prompt()?,
            )
        }
    };

    Ok(ScaffoldRequest { template_id, name, destination, docs, git })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Absolute destination: explicit path made absolute against the current
/// directory, or `./<name>` when omitted.
fn resolve_destination(path: Option<PathBuf>, name: &str) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    Ok(match path {
        Some(p) if p.is_absolute() => p,
        Some(p) => cwd.join(p),
        None => cwd.join(name),
    })
}

fn print_report(report: &ScaffoldReport) {
    println!("✓ Scaffolded '{}' at {}", report.record.name, report.destination.display());
    if let Some(docs) = &report.docs {
        println!("  docs: {}", docs.display());
    }
    if report.git_initialized {
        println!("  git repository initialized");
    }
    for warning in &report.warnings {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }
    if !report.next_steps.is_empty() {
        println!("\nNext steps:");
        for (i, step) in report.next_steps.iter().enumerate() {
            println!("  {}. {step}", i + 1);
        }
    }
}
