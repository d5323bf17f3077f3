//! Template metadata types.

use serde::{Deserialize, Serialize};

/// Parsed `template.json` for one template.
///
/// The template id is the containing directory name and is not stored inside
/// the definition itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDefinition {
    pub name: String,
    pub description: String,
    /// Docs directory pattern; may contain `{name}`, `{location}`, `{date}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_location: Option<String>,
    /// Default git-init policy; overridable per scaffold, absent means true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_init: Option<bool>,
    /// Suggested follow-ups, surfaced on the scaffolded record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<Vec<String>>,
}

/// One row of a template listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}
