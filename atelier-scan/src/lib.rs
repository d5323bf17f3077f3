//! Project discovery for `atelier-scan`.
//!
//! `scan_directory(parent)` inspects the immediate children of a directory
//! and reports those that look like project roots. A child qualifies when it
//! contains a known marker file; markers are ordered by specificity, and the
//! first match names the detected kind. One level deep only — nested project
//! roots are the child's own business.

use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Marker files that identify a directory as a project root, most specific
/// first. `.git` last: version control alone is the weakest signal.
const MARKERS: &[(&str, &str)] = &[
    ("Cargo.toml", "rust"),
    ("package.json", "node"),
    ("pyproject.toml", "python"),
    ("go.mod", "go"),
    ("composer.json", "php"),
    ("mix.exs", "elixir"),
    ("Gemfile", "ruby"),
    ("pom.xml", "jvm"),
    ("build.gradle", "jvm"),
    (".git", "git"),
];

/// A directory that looks like a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedProject {
    /// Directory name, the natural project name.
    pub name: String,
    /// Absolute path to the directory.
    pub path: PathBuf,
    /// The marker file that matched (e.g. `"Cargo.toml"`).
    pub marker: String,
    /// Coarse kind derived from the marker (e.g. `"rust"`, `"node"`).
    pub kind: String,
}

/// Errors from directory scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Check a single directory for a project marker.
pub fn detect_project(dir: &Path) -> Option<DetectedProject> {
    let (marker, kind) = MARKERS.iter().find(|(m, _)| dir.join(m).exists())?;
    Some(DetectedProject {
        name: dir
            .file_name()
            .unwrap_or(dir.as_os_str())
            .to_string_lossy()
            .into_owned(),
        path: dir.to_path_buf(),
        marker: (*marker).to_string(),
        kind: (*kind).to_string(),
    })
}

/// Scan the immediate children of `parent` for project roots.
///
/// Hidden directories are skipped. Results are sorted by name for
/// deterministic output.
pub fn scan_directory(parent: &Path) -> Result<Vec<DetectedProject>, ScanError> {
    if !parent.is_dir() {
        return Err(ScanError::NotADirectory { path: parent.to_path_buf() });
    }
    let entries = std::fs::read_dir(parent)
        .map_err(|e| ScanError::Io { path: parent.to_path_buf(), source: e })?;

    let mut detected = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        if let Some(project) = detect_project(&entry.path()) {
            detected.push(project);
        }
    }
    detected.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(detected)
}

// ---------------------------------------------------------------------------
// Unit tests (parameterised cases live in tests/scan_tests.rs)
// ---------------------------------------------------------------------------
