//! Domain types for the Atelier project store.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! All types are serializable/deserializable via serde + serde_json. Field names
//! are camelCase on disk (`lastModified`, `completedAt`, …) to match the
//! persisted document layout.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Schema version written into every new store document.
pub const STORE_VERSION: &str = "1.0.0";

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lifecycle state of a tracked project.
///
/// The graph is complete: every state is reachable from every other. A record
/// persisted before states existed has no `state` key; `#[serde(default)]` on
/// [`ProjectRecord::state`] normalizes it to `Active` at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectState {
    #[default]
    Active,
    Paused,
    Completed,
    Archived,
}

impl ProjectState {
    /// All states in a stable order.
    pub fn all() -> &'static [ProjectState] {
        &[
            ProjectState::Active,
            ProjectState::Paused,
            ProjectState::Completed,
            ProjectState::Archived,
        ]
    }
}

impl fmt::Display for ProjectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectState::Active => write!(f, "active"),
            ProjectState::Paused => write!(f, "paused"),
            ProjectState::Completed => write!(f, "completed"),
            ProjectState::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for ProjectState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(ProjectState::Active),
            "paused" => Ok(ProjectState::Paused),
            "completed" => Ok(ProjectState::Completed),
            "archived" => Ok(ProjectState::Archived),
            other => Err(format!(
                "unknown state '{other}'; expected: active, paused, completed, archived"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One tracked project.
///
/// `category`, `description`, `visibility`, `repo_url` and `next_steps` are
/// deliberately open strings, not enums — the vocabulary is user-defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Unique key within the store (case-sensitive, linear-scan lookup).
    pub name: String,
    /// Absolute path to the project root on disk.
    pub path: PathBuf,
    /// Set once at registration; immutable thereafter.
    pub added: DateTime<Utc>,
    /// Refreshed opportunistically when the store is read and `path` exists.
    pub last_modified: DateTime<Utc>,
    /// Best-effort size in bytes, refreshed alongside `last_modified`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Documentation directory, if one was set or derived at scaffold time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<PathBuf>,
    #[serde(default)]
    pub state: ProjectState,
    /// Present iff the record was marked completed without a later clear.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<String>,
}

impl ProjectRecord {
    /// A fresh record at `path`, state `active`, timestamps set to now.
    pub fn new(name: impl Into<String>, path: PathBuf) -> Self {
        let now = Utc::now();
        ProjectRecord {
            name: name.into(),
            path,
            added: now,
            last_modified: now,
            size: None,
            docs: None,
            state: ProjectState::default(),
            completed_at: None,
            category: None,
            description: None,
            visibility: None,
            repo_url: None,
            next_steps: None,
        }
    }
}

/// Root of the persisted Atelier store.
///
/// `projects` is insertion-ordered; load/save never reorders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub version: String,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

impl Default for Store {
    fn default() -> Self {
        Store {
            version: STORE_VERSION.to_string(),
            projects: vec![],
        }
    }
}

impl Store {
    /// Linear scan by name.
    pub fn find(&self, name: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|r| r.name == name)
    }

    /// Linear scan by name, mutable.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ProjectRecord> {
        self.projects.iter_mut().find(|r| r.name == name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
