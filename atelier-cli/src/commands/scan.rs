//! `atelier scan <dir> [--dry-run]` — discover and register project roots.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use atelier_core::{store, types::ProjectRecord};
use atelier_scan::scan_directory;

/// Scan one level under a directory for project roots and track the new ones.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory whose children are inspected.
    pub dir: PathBuf,

    /// Report what would be added without touching the store.
    #[arg(long)]
    pub dry_run: bool,
}

impl ScanArgs {
    pub fn run(self) -> Result<()> {
        let home = super::home()?;
        let dir = self
            .dir
            .canonicalize()
            .with_context(|| format!("cannot resolve path '{}'", self.dir.display()))?;

        let detected = scan_directory(&dir)
            .with_context(|| format!("scan of '{}' failed", dir.display()))?;
        if detected.is_empty() {
            println!("No project directories found under {}", dir.display());
            return Ok(());
        }

        let existing = store::load_at(&home).context("failed to load project store")?;
        let mut added = 0usize;
        for candidate in detected {
            let already = existing
                .projects
                .iter()
                .any(|r| r.path == candidate.path || r.name == candidate.name);
            if already {
                println!("  - {} (already tracked)", candidate.name);
                continue;
            }

            if self.dry_run {
                println!("  + {} [{}] (would add)", candidate.name, candidate.kind);
                added += 1;
                continue;
            }

            let mut record = ProjectRecord::new(&candidate.name, candidate.path.clone());
            record.category = Some(candidate.kind.clone());
            store::refresh_record(&mut record);
            store::add_project_at(&home, record)
                .with_context(|| format!("failed to add '{}'", candidate.name))?;
            println!("  + {} [{}]", candidate.name, candidate.kind);
            added += 1;
        }

        if self.dry_run {
            println!("Dry run: {added} project(s) would be added.");
        } else {
            println!("✓ Added {added} project(s).");
        }
        Ok(())
    }
}
