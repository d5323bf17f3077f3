//! Read-time schema normalization.

use crate::types::Store;

/// Normalize a freshly parsed [`Store`].
///
/// The only schema rule today — records without a `state` key default to
/// `active` — is handled by `#[serde(default)]` during deserialization, so
/// this is a pass-through. When the document version gains a second schema,
/// add a match arm on `store.version` here. Normalization never writes back
/// to disk; only an explicit save does.
pub fn migrate_store(store: Store) -> Store {
    store
}
