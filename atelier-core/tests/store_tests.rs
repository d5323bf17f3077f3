//! Store error-message, atomic-write-safety, and migration integration tests.
//! Storage layout: ~/.atelier/projects.json (single document).

use assert_fs::prelude::*;
use atelier_core::{
    lifecycle, store,
    types::{ProjectRecord, ProjectState, Store},
    StoreError,
};
use predicates::prelude::predicate;
use std::fs;
use std::path::PathBuf;

fn record(name: &str) -> ProjectRecord {
    ProjectRecord::new(name, PathBuf::from("/code").join(name))
}

// ---------------------------------------------------------------------------
// 1. Load error messages
// ---------------------------------------------------------------------------

#[test]
fn load_corrupt_json_returns_corrupt_with_path() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let dir = home.path().join(".atelier");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("projects.json"), b"{\"version\": \"1.0.0\", \"projects\": [broken")
        .expect("write");

    let err = store::load_at(home.path()).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }), "got: {err}");
    let msg = err.to_string();
    assert!(msg.contains("projects.json"), "must contain file path, got: {msg}");
    let source_msg = match &err {
        StoreError::Corrupt { source, .. } => source.to_string(),
        _ => unreachable!(),
    };
    assert!(!source_msg.is_empty(), "serde_json must provide error context");
}

#[test]
fn load_wrong_shape_json_returns_corrupt() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let dir = home.path().join(".atelier");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("projects.json"), b"[1, 2, 3]").expect("write");

    let err = store::load_at(home.path()).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }), "got: {err}");
}

#[test]
fn not_found_error_names_the_project() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let err = store::get_project_at(home.path(), "missing").unwrap_err();
    assert!(err.to_string().contains("'missing'"), "got: {err}");
}

// ---------------------------------------------------------------------------
// 2. First-load scaffold and atomic write safety
// ---------------------------------------------------------------------------

#[test]
fn first_load_persists_default_document() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let store = store::load_at(home.path()).expect("load");
    assert!(store.projects.is_empty());

    home.child(".atelier/projects.json").assert(predicate::path::exists());
    let contents = fs::read_to_string(store::store_path_at(home.path())).expect("read");
    assert!(contents.contains("\"1.0.0\""));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(store::store_path_at(home.path()))
            .expect("meta")
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o600, "expected 0600, got {mode:o}");
    }
}

#[test]
fn mid_write_crash_leaves_original_intact() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let mut doc = Store::default();
    doc.projects.push(record("app"));
    store::save_at(home.path(), &doc).expect("save");

    let path = store::store_path_at(home.path());
    let original_bytes = fs::read(&path).expect("read original");

    // Simulate crash: .tmp written but process died before rename
    let tmp = path.with_file_name("projects.json.tmp");
    fs::write(&tmp, b"CRASH - INCOMPLETE WRITE").expect("write crash tmp");

    let current_bytes = fs::read(&path).expect("read after crash");
    assert_eq!(original_bytes, current_bytes, "original must be unchanged after crash");
    assert!(tmp.exists(), ".tmp orphan must exist (crash = no cleanup)");
}

#[test]
fn save_load_roundtrip_is_identity() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let mut doc = Store::default();
    let mut full = record("full");
    full.size = Some(4096);
    full.docs = Some(PathBuf::from("/docs/full"));
    full.category = Some("experiments".into());
    full.description = Some("A test fixture".into());
    full.visibility = Some("private".into());
    full.repo_url = Some("https://example.com/full".into());
    full.next_steps = Some("Write docs".into());
    doc.projects.push(full);
    doc.projects.push(record("minimal"));

    store::save_at(home.path(), &doc).expect("save");
    let loaded = store::load_at(home.path()).expect("load");
    assert_eq!(loaded, doc, "round-trip must preserve order and every field");
}

// ---------------------------------------------------------------------------
// 3. Migration
// ---------------------------------------------------------------------------

#[test]
fn stateless_records_load_as_active_without_disk_mutation() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let dir = home.path().join(".atelier");
    fs::create_dir_all(&dir).expect("mkdir");
    let raw = r#"{
  "version": "1.0.0",
  "projects": [
    {"name": "old-one", "path": "/code/old-one",
     "added": "2023-06-01T12:00:00Z", "lastModified": "2023-06-01T12:00:00Z"},
    {"name": "old-two", "path": "/code/old-two",
     "added": "2023-07-01T12:00:00Z", "lastModified": "2023-07-01T12:00:00Z",
     "state": "paused"}
  ]
}"#;
    let path = store::store_path_at(home.path());
    fs::write(&path, raw).expect("write");

    let loaded = store::load_at(home.path()).expect("load");
    assert_eq!(loaded.projects[0].state, ProjectState::Active, "migrated default");
    assert_eq!(loaded.projects[1].state, ProjectState::Paused, "explicit state kept");

    assert_eq!(fs::read_to_string(&path).expect("read"), raw, "load must not rewrite");

    // An explicit save does materialize the state field.
    store::save_at(home.path(), &loaded).expect("save");
    let rewritten = fs::read_to_string(&path).expect("read");
    assert!(rewritten.contains("\"active\""));
}

// ---------------------------------------------------------------------------
// 4. Lifecycle through the persistence layer
// ---------------------------------------------------------------------------

#[test]
fn lifecycle_policy_end_to_end() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    store::add_project_at(home.path(), record("journey")).expect("add");

    let done = lifecycle::complete_at(home.path(), "journey").expect("complete");
    let stamp = done.completed_at.expect("completed_at set");

    let archived = lifecycle::archive_at(home.path(), "journey").expect("archive");
    assert_eq!(archived.completed_at, Some(stamp), "archive preserves history");

    let active = lifecycle::reactivate_at(home.path(), "journey").expect("reactivate");
    assert!(active.completed_at.is_none(), "reactivate clears history");

    let reloaded = store::get_project_at(home.path(), "journey").expect("get");
    assert_eq!(reloaded.state, ProjectState::Active);
    assert!(reloaded.completed_at.is_none());
}
