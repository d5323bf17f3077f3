//! The scaffold pipeline.
//!
//! ## Nine steps, in order
//!
//! 1. Validate: template loads, name non-empty, destination absent.
//! 2. Resolve the docs path (override > template pattern > none).
//! 3. Resolve the git decision (override > template default > true).
//! 4. Create the destination directory.
//! 5. Copy the template file tree with substitution.
//! 6. Create the docs directory (warn-and-continue on failure).
//! 7. `git init` if resolved true (warn-and-continue on failure).
//! 8. Build the project record.
//! 9. Register and persist it in the store.
//!
//! The pipeline halts at the first fatal error and does not roll back:
//! a destination created in step 4 stays on disk if step 5 fails. Both CLI
//! entry points (direct and interactive) call [`scaffold_at`] so the
//! semantics cannot drift.

use std::path::{Path, PathBuf};

use atelier_core::store;
use atelier_core::types::ProjectRecord;
use atelier_template::registry;
use atelier_template::vars::{substitute, Variables};

use crate::copy::copy_template_files;
use crate::error::ScaffoldError;
use crate::git::git_init;

// ---------------------------------------------------------------------------
// Request / report
// ---------------------------------------------------------------------------

/// Inputs to one scaffold run.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub template_id: String,
    pub name: String,
    /// Where the project directory will be created. Must not exist yet.
    pub destination: PathBuf,
    /// Explicit docs directory; overrides the template's `docsLocation`.
    pub docs: Option<PathBuf>,
    /// Explicit git decision; overrides the template's `gitInit`.
    pub git: Option<bool>,
}

/// Outcome of a successful scaffold.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub record: ProjectRecord,
    pub destination: PathBuf,
    pub docs: Option<PathBuf>,
    pub git_initialized: bool,
    pub next_steps: Vec<String>,
    /// Non-fatal problems (docs dir, git init) surfaced to the caller.
    pub warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Docs path resolution
// ---------------------------------------------------------------------------

/// Expand a substituted docs pattern into a concrete path.
///
/// A leading `~` resolves against `home`; a relative pattern (with or
/// without a `./` marker) resolves against the destination.
fn expand_docs_pattern(pattern: &str, home: &Path, destination: &Path) -> PathBuf {
    if let Some(rest) = pattern.strip_prefix("~/") {
        return home.join(rest);
    }
    if pattern == "~" {
        return home.to_path_buf();
    }
    let path = Path::new(pattern);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let trimmed = pattern.strip_prefix("./").unwrap_or(pattern);
    destination.join(trimmed)
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Materialize a project from a template and register it in the store.
pub fn scaffold_at(home: &Path, req: &ScaffoldRequest) -> Result<ScaffoldReport, ScaffoldError> {
    // Step 1: validate inputs. Nothing is created on failure here.
    let template = registry::load_template_at(home, &req.template_id)?;
    if req.name.trim().is_empty() {
        return Err(ScaffoldError::EmptyName);
    }
    if req.destination.exists() {
        return Err(ScaffoldError::DestinationExists { path: req.destination.clone() });
    }

    // Step 2: docs path — explicit override wins over the template pattern.
    let base_vars = Variables::standard(&req.name, &req.destination, None);
    let docs = match (&req.docs, &template.docs_location) {
        (Some(explicit), _) => Some(explicit.clone()),
        (None, Some(pattern)) => {
            let substituted = substitute(pattern, &base_vars);
            Some(expand_docs_pattern(&substituted, home, &req.destination))
        }
        (None, None) => None,
    };

    // Step 3: git decision — explicit flag > template default > true.
    let want_git = req.git.or(template.git_init).unwrap_or(true);

    // Step 4: destination directory.
    std::fs::create_dir_all(&req.destination).map_err(|e| ScaffoldError::DirectoryCreate {
        path: req.destination.clone(),
        source: e,
    })?;

    // Step 5: copy the template tree with the full standard variable set.
    let vars = Variables::standard(&req.name, &req.destination, docs.as_deref());
    let files = registry::template_files_dir_at(home, &req.template_id);
    copy_template_files(&files, &req.destination, &vars)?;

    let mut warnings = Vec::new();

    // Step 6: docs directory — convenience, not correctness.
    if let Some(docs_dir) = &docs {
        if !docs_dir.exists() {
            if let Err(e) = std::fs::create_dir_all(docs_dir) {
                let warning = format!("could not create docs directory {}: {e}", docs_dir.display());
                tracing::warn!("{warning}");
                warnings.push(warning);
            }
        }
    }

    // Step 7: git init — the scaffold itself has already succeeded.
    let mut git_initialized = false;
    if want_git {
        match git_init(&req.destination) {
            Ok(()) => git_initialized = true,
            Err(msg) => {
                let warning = format!("git init failed: {msg}");
                tracing::warn!("{warning}");
                warnings.push(warning);
            }
        }
    }

    // Step 8: build the record.
    let next_steps = template.next_steps.clone().unwrap_or_default();
    let mut record = ProjectRecord::new(&req.name, req.destination.clone());
    record.size = store::directory_size(&req.destination);
    record.docs = docs.clone();
    if !next_steps.is_empty() {
        record.next_steps = Some(next_steps.join("; "));
    }

    // Step 9: register and persist.
    let record = store::add_project_at(home, record)?;

    tracing::info!("scaffolded '{}' at {}", record.name, req.destination.display());
    Ok(ScaffoldReport {
        record,
        destination: req.destination.clone(),
        docs,
        git_initialized,
        next_steps,
        warnings,
    })
}

// ---------------------------------------------------------------------------
// Unit tests (end-to-end coverage lives in tests/scaffold_tests.rs)
// ---------------------------------------------------------------------------
