//! # atelier-scaffold
//!
//! Materializes a new project directory from a stored template and registers
//! it in the project store: validate, resolve docs/git decisions, create the
//! destination, copy-and-substitute the template tree, then persist a record.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use atelier_scaffold::{scaffold_at, ScaffoldRequest};
//! use std::path::{Path, PathBuf};
//!
//! fn scaffold(home: &Path) {
//!     let req = ScaffoldRequest {
//!         template_id: "basic".into(),
//!         name: "my-app".into(),
//!         destination: PathBuf::from("/code/my-app"),
//!         docs: None,
//!         git: Some(false),
//!     };
//!     match scaffold_at(home, &req) {
//!         Ok(report) => println!("created {}", report.destination.display()),
//!         Err(e) => eprintln!("scaffold failed: {e}"),
//!     }
//! }
//! ```

pub mod copy;
pub mod error;
pub mod git;
pub mod pipeline;

pub use copy::{copy_template_files, is_binary_path};
pub use error::ScaffoldError;
pub use pipeline::{scaffold_at, ScaffoldReport, ScaffoldRequest};
