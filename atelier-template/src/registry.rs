//! Template registry.
//!
//! # Storage layout
//!
//! ```text
//! ~/.atelier/
//!   templates/
//!     <template_id>/
//!       template.json   (definition)
//!       files/          (tree copied at scaffold time; optional)
//! ```
//!
//! The id is the directory name. Mutating/reading functions follow the
//! `fn_at(home, …)` / `fn(…)` split used across the workspace; tests always
//! use the `_at` form with a `TempDir` home.

use std::path::{Path, PathBuf};

use crate::error::{io_err, TemplateError};
use crate::types::{TemplateDefinition, TemplateSummary};

/// Definition file name inside each template directory.
pub const DEFINITION_FILE: &str = "template.json";

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `<home>/.atelier/templates/` — pure, no I/O.
pub fn templates_root_at(home: &Path) -> PathBuf {
    home.join(".atelier").join("templates")
}

/// `<home>/.atelier/templates/<id>/` — pure, no I/O.
pub fn template_dir_at(home: &Path, id: &str) -> PathBuf {
    templates_root_at(home).join(id)
}

/// `<home>/.atelier/templates/<id>/files/` — pure, no I/O.
pub fn template_files_dir_at(home: &Path, id: &str) -> PathBuf {
    template_dir_at(home, id).join("files")
}

// ---------------------------------------------------------------------------
// 2. List
// ---------------------------------------------------------------------------

/// Enumerate templates under the root, sorted by id.
///
/// An absent root yields an empty list. Subdirectories whose definition file
/// is missing or unparsable are skipped silently — a template mid-authoring
/// must not break listing.
pub fn list_templates_at(home: &Path) -> Result<Vec<TemplateSummary>, TemplateError> {
    let root = templates_root_at(home);
    if !root.exists() {
        return Ok(vec![]);
    }

    let mut entries: Vec<_> = std::fs::read_dir(&root)
        .map_err(|e| io_err(&root, e))?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut summaries = Vec::new();
    for entry in entries {
        let id = entry.file_name().to_string_lossy().into_owned();
        match load_template_at(home, &id) {
            Ok(def) => summaries.push(TemplateSummary {
                id,
                name: def.name,
                description: def.description,
            }),
            Err(_) => continue,
        }
    }
    Ok(summaries)
}

// ---------------------------------------------------------------------------
// 3. Load
// ---------------------------------------------------------------------------

/// Load one template definition by id.
///
/// `TemplateNotFound` if the directory is absent, `ConfigMissing` if it has
/// no definition file, `ConfigInvalid` if the file does not parse.
pub fn load_template_at(home: &Path, id: &str) -> Result<TemplateDefinition, TemplateError> {
    let dir = template_dir_at(home, id);
    if !dir.exists() {
        return Err(TemplateError::TemplateNotFound { id: id.to_string() });
    }
    let path = dir.join(DEFINITION_FILE);
    if !path.exists() {
        return Err(TemplateError::ConfigMissing { path });
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    serde_json::from_str(&contents).map_err(|e| TemplateError::ConfigInvalid { path, source: e })
}

// ---------------------------------------------------------------------------
// 4. Starter skeleton
// ---------------------------------------------------------------------------

const STARTER_ID: &str = "basic";

const STARTER_DEFINITION: &str = r#"{
  "name": "Basic",
  "description": "Minimal starter: README and docs directory",
  "docsLocation": "./docs",
  "gitInit": true,
  "nextSteps": [
    "Edit README.md",
    "Set a category with: atelier update <name> category <value>"
  ]
}
"#;

const STARTER_README: &str = "# {name}\n\nCreated {date} at {location}.\n";

/// Write a starter `basic` template if the templates root does not exist yet.
///
/// Idempotent: an existing root is left untouched. Returns the ids written
/// (empty when nothing was done).
pub fn init_templates_at(home: &Path) -> Result<Vec<String>, TemplateError> {
    let root = templates_root_at(home);
    if root.exists() {
        return Ok(vec![]);
    }

    let files = template_files_dir_at(home, STARTER_ID);
    std::fs::create_dir_all(&files).map_err(|e| io_err(&files, e))?;
    let def_path = template_dir_at(home, STARTER_ID).join(DEFINITION_FILE);
    std::fs::write(&def_path, STARTER_DEFINITION).map_err(|e| io_err(&def_path, e))?;
    let readme = files.join("README.md");
    std::fs::write(&readme, STARTER_README).map_err(|e| io_err(&readme, e))?;
    Ok(vec![STARTER_ID.to_string()])
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_home() -> TempDir {
        TempDir::new().expect("tempdir")
    }

    fn write_template(home: &Path, id: &str, definition: &str) {
        let dir = template_dir_at(home, id);
        std::fs::create_dir_all(&dir).expect("mkdir");
        std::fs::write(dir.join(DEFINITION_FILE), definition).expect("write");
    }

    #[test]
    fn absent_root_lists_empty() {
        let home = make_home();
        assert!(list_templates_at(home.path()).expect("list").is_empty());
    }

    #[test]
    fn list_is_sorted_and_skips_invalid() {
        let home = make_home();
        write_template(home.path(), "zeta", r#"{"name": "Z", "description": "last"}"#);
        write_template(home.path(), "alpha", r#"{"name": "A", "description": "first"}"#);
        // Mid-authoring: directory with no definition file.
        std::fs::create_dir_all(template_dir_at(home.path(), "draft")).expect("mkdir");
        // Broken definition.
        write_template(home.path(), "broken", "not json");

        let list = list_templates_at(home.path()).expect("list");
        let ids: Vec<&str> = list.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn load_missing_template_is_not_found() {
        let home = make_home();
        let err = load_template_at(home.path(), "ghost").unwrap_err();
        assert!(matches!(err, TemplateError::TemplateNotFound { .. }), "got: {err}");
    }

    #[test]
    fn load_without_definition_is_config_missing() {
        let home = make_home();
        std::fs::create_dir_all(template_dir_at(home.path(), "empty")).expect("mkdir");
        let err = load_template_at(home.path(), "empty").unwrap_err();
        assert!(matches!(err, TemplateError::ConfigMissing { .. }), "got: {err}");
    }

    #[test]
    fn load_unparsable_definition_is_config_invalid() {
        let home = make_home();
        write_template(home.path(), "bad", "{ nope");
        let err = load_template_at(home.path(), "bad").unwrap_err();
        assert!(matches!(err, TemplateError::ConfigInvalid { .. }), "got: {err}");
        assert!(err.to_string().contains("template.json"), "got: {err}");
    }

    #[test]
    fn load_parses_full_definition() {
        let home = make_home();
        write_template(
            home.path(),
            "web",
            r#"{"name": "Web", "description": "Web app",
                "docsLocation": "./docs/{name}", "gitInit": false,
                "nextSteps": ["Install dependencies"]}"#,
        );
        let def = load_template_at(home.path(), "web").expect("load");
        assert_eq!(def.docs_location.as_deref(), Some("./docs/{name}"));
        assert_eq!(def.git_init, Some(false));
        assert_eq!(def.next_steps.as_deref(), Some(&["Install dependencies".to_string()][..]));
    }

    #[test]
    fn init_writes_starter_once() {
        let home = make_home();
        let written = init_templates_at(home.path()).expect("init");
        assert_eq!(written, vec!["basic".to_string()]);
        assert!(template_files_dir_at(home.path(), "basic").join("README.md").exists());

        let def = load_template_at(home.path(), "basic").expect("starter parses");
        assert_eq!(def.git_init, Some(true));

        // Second init is a no-op.
        assert!(init_templates_at(home.path()).expect("re-init").is_empty());
    }
}
