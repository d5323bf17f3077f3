//! # atelier-template
//!
//! Template registry and literal variable substitution: enumerates template
//! definitions under `~/.atelier/templates/`, parses them, and provides the
//! `{placeholder}` replacement used when scaffolding project trees.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use atelier_template::{registry, vars::{substitute, Variables}};
//! use std::path::Path;
//!
//! fn greet(home: &Path) {
//!     if let Ok(templates) = registry::list_templates_at(home) {
//!         let vars = Variables::new().set("name", "my-app");
//!         for t in templates {
//!             println!("{}: {}", t.id, substitute(&t.description, &vars));
//!         }
//!     }
//! }
//! ```

pub mod error;
pub mod registry;
pub mod types;
pub mod vars;

pub use error::TemplateError;
pub use types::{TemplateDefinition, TemplateSummary};
pub use vars::{substitute, Variables};
