//! End-to-end scaffold pipeline tests against a TempDir home.

use assert_fs::prelude::*;
use atelier_core::{store, types::ProjectState};
use atelier_scaffold::{scaffold_at, ScaffoldError, ScaffoldRequest};
use atelier_template::registry;
use predicates::prelude::predicate;
use std::fs;
use std::path::Path;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn write_basic_template(home: &Path) {
    let dir = registry::template_dir_at(home, "basic");
    let files = registry::template_files_dir_at(home, "basic");
    fs::create_dir_all(&files).expect("mkdir files");
    fs::write(
        dir.join("template.json"),
        r#"{"name": "Basic", "description": "starter",
            "docsLocation": "./docs", "gitInit": true,
            "nextSteps": ["Install dependencies"]}"#,
    )
    .expect("write definition");
    fs::write(files.join("README.md"), "# {name}\n\nLives at {location}.\n").expect("write readme");
    fs::create_dir_all(files.join("src")).expect("mkdir src");
    fs::write(files.join("src").join("main.txt"), "project: {name}").expect("write main");
    fs::write(files.join("logo.png"), b"\x89PNG{name}\x00").expect("write png");
}

fn request(home: &Path, name: &str) -> ScaffoldRequest {
    ScaffoldRequest {
        template_id: "basic".into(),
        name: name.into(),
        destination: home.join("code").join(name),
        docs: None,
        git: Some(false),
    }
}

// ---------------------------------------------------------------------------
// Precondition failures create nothing
// ---------------------------------------------------------------------------

#[test]
fn missing_template_creates_nothing() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let req = request(home.path(), "my-app");
    let err = scaffold_at(home.path(), &req).unwrap_err();
    assert!(matches!(err, ScaffoldError::Template(_)), "got: {err}");
    assert!(!req.destination.exists());
}

#[test]
fn empty_name_is_rejected() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_basic_template(home.path());
    let req = request(home.path(), "  ");
    let err = scaffold_at(home.path(), &req).unwrap_err();
    assert!(matches!(err, ScaffoldError::EmptyName), "got: {err}");
}

#[test]
fn existing_destination_is_rejected_without_writes() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_basic_template(home.path());
    let req = request(home.path(), "my-app");
    fs::create_dir_all(&req.destination).expect("pre-create");
    fs::write(req.destination.join("keep.txt"), "do not touch").expect("marker");

    let err = scaffold_at(home.path(), &req).unwrap_err();
    assert!(matches!(err, ScaffoldError::DestinationExists { .. }), "got: {err}");

    // Only the precondition check ran: the marker is alone and untouched.
    let entries: Vec<_> = fs::read_dir(&req.destination).unwrap().collect();
    assert_eq!(entries.len(), 1);
    // No record was registered either.
    let loaded = store::load_at(home.path()).expect("load");
    assert!(loaded.projects.is_empty());
}

// ---------------------------------------------------------------------------
// The full pipeline
// ---------------------------------------------------------------------------

#[test]
fn end_to_end_scaffold_with_git_overridden_off() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_basic_template(home.path());
    let req = request(home.path(), "my-app");

    let report = scaffold_at(home.path(), &req).expect("scaffold");

    // Tree copied with substitution.
    let readme = fs::read_to_string(req.destination.join("README.md")).expect("readme");
    assert!(readme.starts_with("# my-app"));
    assert!(readme.contains(&req.destination.display().to_string()));
    let main = fs::read_to_string(req.destination.join("src").join("main.txt")).expect("main");
    assert_eq!(main, "project: my-app");

    // Binary copied byte-for-byte.
    assert_eq!(fs::read(req.destination.join("logo.png")).unwrap(), b"\x89PNG{name}\x00");

    // Git disabled via explicit override beats the template's gitInit=true.
    assert!(!report.git_initialized);
    assert!(!req.destination.join(".git").exists());

    // Docs derived from "./docs" against the destination and created.
    let docs = report.docs.as_ref().expect("docs resolved");
    assert_eq!(docs, &req.destination.join("docs"));
    assert!(docs.is_dir());

    // Registered record.
    let record = store::get_project_at(home.path(), "my-app").expect("registered");
    assert_eq!(record.state, ProjectState::Active);
    assert_eq!(record.path, req.destination);
    assert_eq!(record.docs.as_ref(), Some(docs));
    assert!(record.next_steps.as_deref().unwrap().contains("Install dependencies"));
    assert!(record.size.is_some());
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
}

#[test]
fn explicit_docs_override_wins() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_basic_template(home.path());
    let mut req = request(home.path(), "with-docs");
    let custom = home.path().join("notes").join("with-docs");
    req.docs = Some(custom.clone());

    let report = scaffold_at(home.path(), &req).expect("scaffold");
    assert_eq!(report.docs.as_ref(), Some(&custom));
    assert!(custom.is_dir());
    home.child("code/with-docs/docs").assert(predicate::path::missing());
}

#[test]
fn duplicate_project_name_fails_at_registration() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_basic_template(home.path());
    scaffold_at(home.path(), &request(home.path(), "twice")).expect("first");

    let mut again = request(home.path(), "twice");
    again.destination = home.path().join("code").join("twice-2");
    let err = scaffold_at(home.path(), &again).unwrap_err();
    assert!(matches!(err, ScaffoldError::Store(_)), "got: {err}");
    // No rollback: the second destination was created before registration failed.
    assert!(again.destination.exists());
}

#[test]
fn template_without_files_dir_scaffolds_empty_project() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let dir = registry::template_dir_at(home.path(), "bare");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("template.json"), r#"{"name": "Bare", "description": "no files"}"#)
        .expect("write definition");

    let req = ScaffoldRequest {
        template_id: "bare".into(),
        name: "empty-app".into(),
        destination: home.path().join("code").join("empty-app"),
        docs: None,
        git: Some(false),
    };
    let report = scaffold_at(home.path(), &req).expect("scaffold");
    assert!(req.destination.is_dir());
    assert!(report.docs.is_none(), "no docsLocation, no override, no docs");
    assert!(report.next_steps.is_empty());
}
