//! Atelier core library — domain types, store persistence, lifecycle, errors.
//!
//! Public API surface:
//! - [`types`] — [`ProjectRecord`], [`ProjectState`], [`Store`]
//! - [`error`] — [`StoreError`]
//! - [`store`] — load / save / record operations
//! - [`lifecycle`] — state transitions
//! - [`migrate`] — read-time schema normalization

pub mod error;
pub mod lifecycle;
pub mod migrate;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use types::{ProjectRecord, ProjectState, Store, STORE_VERSION};
