//! Parameterised project discovery tests for `atelier-scan`.
//!
//! Each `#[case]` gets an isolated `TempDir` — no shared state.

use atelier_scan::{detect_project, scan_directory};
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

fn make_parent() -> TempDir {
    TempDir::new().expect("tempdir")
}

fn child_with_marker(parent: &TempDir, name: &str, marker: &str) {
    let dir = parent.path().join(name);
    fs::create_dir_all(&dir).expect("mkdir");
    if marker == ".git" {
        fs::create_dir(dir.join(marker)).expect("mkdir .git");
    } else {
        fs::write(dir.join(marker), "").expect("write marker");
    }
}

// ---------------------------------------------------------------------------
// Marker table
// ---------------------------------------------------------------------------

#[rstest]
#[case("Cargo.toml", "rust")]
#[case("package.json", "node")]
#[case("pyproject.toml", "python")]
#[case("go.mod", "go")]
#[case("composer.json", "php")]
#[case("mix.exs", "elixir")]
#[case("Gemfile", "ruby")]
#[case("pom.xml", "jvm")]
#[case("build.gradle", "jvm")]
#[case(".git", "git")]
fn each_marker_is_detected(#[case] marker: &str, #[case] kind: &str) {
    let parent = make_parent();
    child_with_marker(&parent, "proj", marker);
    let found = scan_directory(parent.path()).expect("scan");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "proj");
    assert_eq!(found[0].marker, marker);
    assert_eq!(found[0].kind, kind);
    assert_eq!(found[0].path, parent.path().join("proj"));
}

// ---------------------------------------------------------------------------
// Scan behavior
// ---------------------------------------------------------------------------

#[test]
fn scan_skips_plain_and_hidden_directories() {
    let parent = make_parent();
    child_with_marker(&parent, "real", "Cargo.toml");
    child_with_marker(&parent, ".hidden", "Cargo.toml");
    fs::create_dir(parent.path().join("plain")).expect("mkdir plain");
    fs::write(parent.path().join("loose-file.txt"), "x").expect("write file");

    let found = scan_directory(parent.path()).expect("scan");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "real");
}

#[test]
fn scan_results_are_sorted_by_name() {
    let parent = make_parent();
    child_with_marker(&parent, "zeta", "go.mod");
    child_with_marker(&parent, "alpha", "package.json");
    child_with_marker(&parent, "mid", ".git");

    let found = scan_directory(parent.path()).expect("scan");
    let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn scan_is_one_level_deep() {
    let parent = make_parent();
    // A nested project root two levels down must not be reported.
    let nested = parent.path().join("group").join("inner");
    fs::create_dir_all(&nested).expect("mkdir");
    fs::write(nested.join("Cargo.toml"), "").expect("write");

    let found = scan_directory(parent.path()).expect("scan");
    assert!(found.is_empty(), "got: {found:?}");
}

#[test]
fn detect_project_reports_directory_name() {
    let parent = make_parent();
    child_with_marker(&parent, "named-app", "pyproject.toml");
    let p = detect_project(&parent.path().join("named-app")).expect("detected");
    assert_eq!(p.name, "named-app");
}
