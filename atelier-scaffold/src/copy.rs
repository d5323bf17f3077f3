//! Recursive template tree copy with text substitution.
//!
//! Binary-vs-text is decided by extension against a fixed denylist. This is a
//! heuristic: a text file with an unlisted binary extension gets substituted.
//! No content sniffing.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;

use atelier_template::vars::{substitute, Variables};

use crate::error::{io_err, ScaffoldError};

// Images, archives, fonts, executables, shared libraries.
static BINARY_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tiff",
        "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "jar",
        "ttf", "otf", "woff", "woff2", "eot",
        "exe", "dll", "bin", "so", "dylib",
    ]
    .into_iter()
    .collect()
});

/// Whether `path` should be copied byte-for-byte instead of substituted.
pub fn is_binary_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| BINARY_EXTENSIONS.contains(e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Mirror the tree at `src` into `dest`.
///
/// Directory structure is copied exactly — empty source directories are still
/// created. Binary files (by extension) are copied verbatim; every other file
/// is read as text, passed through [`substitute`], and written out. An absent
/// `src` is treated as an empty tree.
pub fn copy_template_files(
    src: &Path,
    dest: &Path,
    vars: &Variables,
) -> Result<(), ScaffoldError> {
    if !src.exists() {
        return Ok(());
    }
    let entries = std::fs::read_dir(src).map_err(|e| io_err(src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(src, e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let meta = entry.metadata().map_err(|e| io_err(&from, e))?;

        if meta.is_dir() {
            std::fs::create_dir_all(&to).map_err(|e| io_err(&to, e))?;
            copy_template_files(&from, &to, vars)?;
        } else if is_binary_path(&from) {
            std::fs::copy(&from, &to).map_err(|e| io_err(&to, e))?;
        } else {
            let text = std::fs::read_to_string(&from).map_err(|e| io_err(&from, e))?;
            std::fs::write(&to, substitute(&text, vars)).map_err(|e| io_err(&to, e))?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
