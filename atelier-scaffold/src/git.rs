//! Git repository initialization for scaffolded projects.

use std::path::Path;
use std::process::Command;

/// Run `git init` in `dir`.
///
/// Failures here are non-fatal from the pipeline's point of view — the
/// scaffold has already succeeded — so this just reports what went wrong.
pub fn git_init(dir: &Path) -> Result<(), String> {
    let output = Command::new("git")
        .arg("init")
        .current_dir(dir)
        .output()
        .map_err(|e| format!("could not run git: {e}"))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(format!(
            "git init exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ))
    }
}
