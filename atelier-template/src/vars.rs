//! Literal `{placeholder}` substitution.
//!
//! One pass, no recursion: inserted values are never rescanned, and a token
//! whose key is absent (or defined but valueless) stays verbatim in the
//! output. There is no error path — substitution cannot fail.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9_]*)\}").expect("valid token pattern"));

/// Substitution variables: name → optional value.
///
/// A key mapped to `None` behaves like an absent key — the token is left
/// verbatim. This mirrors the scaffolder, where `docs` may be undefined.
#[derive(Debug, Clone, Default)]
pub struct Variables(BTreeMap<String, Option<String>>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), Some(value.into()));
        self
    }

    /// Define a variable that may be absent.
    pub fn set_opt(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|v| v.as_deref())
    }

    /// The standard scaffolding set: `name`, `location`, `docs`, and `date`
    /// (ISO date, no time component).
    pub fn standard(name: &str, location: &Path, docs: Option<&Path>) -> Self {
        Variables::new()
            .set("name", name)
            .set("location", location.display().to_string())
            .set_opt("docs", docs.map(|p| p.display().to_string()))
            .set("date", chrono::Utc::now().format("%Y-%m-%d").to_string())
    }
}

/// Replace every `{token}` whose key is defined in `vars`; leave the rest
/// untouched.
pub fn substitute(text: &str, vars: &Variables) -> String {
    TOKEN
        .replace_all(text, |caps: &Captures<'_>| match vars.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
