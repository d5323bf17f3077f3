//! Single-document JSON store.
//!
//! # Storage layout
//!
//! ```text
//! ~/.atelier/
//!   projects.json   (the whole store — mode 0600, created on first load)
//! ```
//!
//! # API pattern
//!
//! Every function touching disk has two forms:
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.
//!
//! # Concurrency
//!
//! There is no cache and no lock: every command-level operation loads,
//! mutates, and saves the full document. Concurrent invocations are
//! last-writer-wins at whole-file granularity.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::StoreError;
use crate::types::{ProjectRecord, ProjectState, Store};

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `<home>/.atelier/` — pure, no I/O.
pub fn atelier_dir_at(home: &Path) -> PathBuf {
    home.join(".atelier")
}

/// `<home>/.atelier/projects.json` — pure, no I/O.
pub fn store_path_at(home: &Path) -> PathBuf {
    atelier_dir_at(home).join("projects.json")
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Load the store from `<home>/.atelier/projects.json`.
///
/// If the file does not exist, a default empty store is created on disk and
/// returned. A present-but-unparsable file yields `StoreError::Corrupt` with
/// path context — the caller must halt, nothing is repaired or backed up.
///
/// Records lacking a `state` key come back as `active` (serde-level
/// normalization; see [`crate::migrate`]). The file itself is not rewritten
/// until an explicit [`save_at`].
pub fn load_at(home: &Path) -> Result<Store, StoreError> {
    let path = store_path_at(home);
    if !path.exists() {
        let store = Store::default();
        save_at(home, &store)?;
        return Ok(store);
    }
    let contents = std::fs::read_to_string(&path)?;
    let store: Store = serde_json::from_str(&contents)
        .map_err(|e| StoreError::Corrupt { path, source: e })?;
    Ok(crate::migrate::migrate_store(store))
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Store, StoreError> {
    load_at(&home()?)
}

// ---------------------------------------------------------------------------
// 3. Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically save the store to `<home>/.atelier/projects.json`.
///
/// Write flow: serialize → `.json.tmp` sibling → `chmod 0600` → `rename`.
/// `.tmp` is always in the same directory as the target (same filesystem —
/// no EXDEV on macOS). Project order is written exactly as held in memory.
pub fn save_at(home: &Path, store: &Store) -> Result<(), StoreError> {
    let dir = atelier_dir_at(home);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| StoreError::Write { path: dir.clone(), source: e })?;
        set_dir_permissions(&dir)?;
    }

    let path = store_path_at(home);
    let tmp_path = path.with_file_name("projects.json.tmp");

    let json = serde_json::to_string_pretty(store)?;
    std::fs::write(&tmp_path, json)
        .map_err(|e| StoreError::Write { path: tmp_path.clone(), source: e })?;
    set_file_permissions(&tmp_path)?;
    std::fs::rename(&tmp_path, &path)
        .map_err(|e| StoreError::Write { path, source: e })?;
    Ok(())
}

/// `save_at` convenience wrapper.
pub fn save(store: &Store) -> Result<(), StoreError> {
    save_at(&home()?, store)
}

// ---------------------------------------------------------------------------
// 4. Record operations (each loads, mutates, saves)
// ---------------------------------------------------------------------------

/// Register a new project. Rejects an already-tracked name.
pub fn add_project_at(
    home: &Path,
    record: ProjectRecord,
) -> Result<ProjectRecord, StoreError> {
    let mut store = load_at(home)?;
    if store.find(&record.name).is_some() {
        return Err(StoreError::ProjectExists { name: record.name });
    }
    store.projects.push(record.clone());
    save_at(home, &store)?;
    Ok(record)
}

/// `add_project_at` convenience wrapper.
pub fn add_project(record: ProjectRecord) -> Result<ProjectRecord, StoreError> {
    add_project_at(&home()?, record)
}

/// Remove a project by name. `ProjectNotFound` if absent.
pub fn remove_project_at(home: &Path, name: &str) -> Result<ProjectRecord, StoreError> {
    let mut store = load_at(home)?;
    let idx = store
        .projects
        .iter()
        .position(|r| r.name == name)
        .ok_or_else(|| StoreError::ProjectNotFound { name: name.to_string() })?;
    let removed = store.projects.remove(idx);
    save_at(home, &store)?;
    Ok(removed)
}

/// `remove_project_at` convenience wrapper.
pub fn remove_project(name: &str) -> Result<ProjectRecord, StoreError> {
    remove_project_at(&home()?, name)
}

/// Fetch one project by name. `ProjectNotFound` if absent.
pub fn get_project_at(home: &Path, name: &str) -> Result<ProjectRecord, StoreError> {
    let store = load_at(home)?;
    store
        .find(name)
        .cloned()
        .ok_or_else(|| StoreError::ProjectNotFound { name: name.to_string() })
}

/// `get_project_at` convenience wrapper.
pub fn get_project(name: &str) -> Result<ProjectRecord, StoreError> {
    get_project_at(&home()?, name)
}

/// List projects, optionally filtered to one state. Insertion order.
pub fn list_projects_at(
    home: &Path,
    state: Option<ProjectState>,
) -> Result<Vec<ProjectRecord>, StoreError> {
    let store = load_at(home)?;
    Ok(store
        .projects
        .into_iter()
        .filter(|r| state.map(|s| r.state == s).unwrap_or(true))
        .collect())
}

/// `list_projects_at` convenience wrapper.
pub fn list_projects(state: Option<ProjectState>) -> Result<Vec<ProjectRecord>, StoreError> {
    list_projects_at(&home()?, state)
}

/// Case-insensitive substring search over name, description, and category.
pub fn search_projects_at(home: &Path, query: &str) -> Result<Vec<ProjectRecord>, StoreError> {
    let needle = query.to_lowercase();
    let store = load_at(home)?;
    Ok(store
        .projects
        .into_iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle)
                || r.description
                    .as_deref()
                    .map(|d| d.to_lowercase().contains(&needle))
                    .unwrap_or(false)
                || r.category
                    .as_deref()
                    .map(|c| c.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .collect())
}

/// `search_projects_at` convenience wrapper.
pub fn search_projects(query: &str) -> Result<Vec<ProjectRecord>, StoreError> {
    search_projects_at(&home()?, query)
}

/// Aggregate counts across the store.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub total: usize,
    /// Count per state, keyed by the lowercase state name.
    pub by_state: BTreeMap<String, usize>,
    /// Sum of recorded sizes (bytes) across records that have one.
    pub total_size: u64,
}

/// Compute per-state counts and total recorded size.
pub fn stats_at(home: &Path) -> Result<StoreStats, StoreError> {
    let store = load_at(home)?;
    let mut by_state = BTreeMap::new();
    for state in ProjectState::all() {
        by_state.insert(state.to_string(), 0usize);
    }
    let mut total_size = 0u64;
    for record in &store.projects {
        *by_state.entry(record.state.to_string()).or_insert(0) += 1;
        total_size += record.size.unwrap_or(0);
    }
    Ok(StoreStats {
        total: store.projects.len(),
        by_state,
        total_size,
    })
}

/// `stats_at` convenience wrapper.
pub fn stats() -> Result<StoreStats, StoreError> {
    stats_at(&home()?)
}

/// Set a single free-form metadata field on a project.
///
/// Field names are the on-disk keys: `category`, `description`, `visibility`,
/// `repoUrl`, `nextSteps`, `docs`. An empty value clears the field.
pub fn update_field_at(
    home: &Path,
    name: &str,
    field: &str,
    value: &str,
) -> Result<ProjectRecord, StoreError> {
    let mut store = load_at(home)?;
    let record = store
        .find_mut(name)
        .ok_or_else(|| StoreError::ProjectNotFound { name: name.to_string() })?;

    let opt = if value.is_empty() { None } else { Some(value.to_string()) };
    match field {
        "category" => record.category = opt,
        "description" => record.description = opt,
        "visibility" => record.visibility = opt,
        "repoUrl" => record.repo_url = opt,
        "nextSteps" => record.next_steps = opt,
        "docs" => record.docs = opt.map(PathBuf::from),
        other => {
            return Err(StoreError::UnknownField { field: other.to_string() });
        }
    }
    let updated = record.clone();
    save_at(home, &store)?;
    Ok(updated)
}

/// `update_field_at` convenience wrapper.
pub fn update_field(name: &str, field: &str, value: &str) -> Result<ProjectRecord, StoreError> {
    update_field_at(&home()?, name, field, value)
}

// ---------------------------------------------------------------------------
// 5. Opportunistic metadata refresh
// ---------------------------------------------------------------------------

/// Refresh `last_modified` and `size` from the filesystem.
///
/// No-op when the project path does not exist. In-memory only — the caller
/// decides whether to persist the refreshed store.
pub fn refresh_record(record: &mut ProjectRecord) {
    if !record.path.exists() {
        return;
    }
    if let Ok(meta) = std::fs::metadata(&record.path) {
        if let Ok(mtime) = meta.modified() {
            record.last_modified = DateTime::<Utc>::from(mtime);
        }
    }
    record.size = directory_size(&record.path);
}

/// Refresh every record whose path still exists. In-memory only.
pub fn refresh_store(store: &mut Store) {
    for record in &mut store.projects {
        refresh_record(record);
    }
}

/// Best-effort recursive byte count of a directory tree.
///
/// Unreadable entries are skipped silently; `None` only when the root itself
/// cannot be read.
pub fn directory_size(path: &Path) -> Option<u64> {
    let meta = std::fs::metadata(path).ok()?;
    if meta.is_file() {
        return Some(meta.len());
    }
    let entries = std::fs::read_dir(path).ok()?;
    let mut total = 0u64;
    for entry in entries.filter_map(|e| e.ok()) {
        let child = entry.path();
        match entry.metadata() {
            Ok(m) if m.is_dir() => total += directory_size(&child).unwrap_or(0),
            Ok(m) => total += m.len(),
            Err(_) => {}
        }
    }
    Some(total)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, StoreError> {
    dirs::home_dir().ok_or(StoreError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
