//! Project lifecycle transitions.
//!
//! All four states are mutually reachable — this is a complete graph, not a
//! sequence. The interesting rule is what happens to `completed_at`:
//!
//! | operation  | new state | clears `completed_at` on leave |
//! |------------|-----------|--------------------------------|
//! | complete   | completed | (stamps a fresh date instead)  |
//! | pause      | paused    | yes                            |
//! | archive    | archived  | no — history is preserved      |
//! | reactivate | active    | yes                            |
//!
//! The asymmetry is intentional: an archived-after-completed project keeps
//! its completion record; pausing or reactivating implies it was never
//! actually finished.

use std::path::Path;

use chrono::Utc;

use crate::error::StoreError;
use crate::store::{load_at, save_at};
use crate::types::{ProjectRecord, ProjectState};

// ---------------------------------------------------------------------------
// Transition primitive
// ---------------------------------------------------------------------------

/// Apply a state transition to a single record.
///
/// Entering `completed` always stamps a fresh `completed_at`, even when the
/// record was already completed. Leaving any state clears `completed_at`
/// only when `clear_completed_on_leave` is set.
pub fn set_state(
    record: &mut ProjectRecord,
    new_state: ProjectState,
    clear_completed_on_leave: bool,
) {
    record.state = new_state;
    if new_state == ProjectState::Completed {
        record.completed_at = Some(Utc::now());
    } else if clear_completed_on_leave {
        record.completed_at = None;
    }
}

// ---------------------------------------------------------------------------
// Named operations
// ---------------------------------------------------------------------------

fn transition_at(
    home: &Path,
    name: &str,
    new_state: ProjectState,
    clear_completed_on_leave: bool,
) -> Result<ProjectRecord, StoreError> {
    let mut store = load_at(home)?;
    let record = store
        .find_mut(name)
        .ok_or_else(|| StoreError::ProjectNotFound { name: name.to_string() })?;
    set_state(record, new_state, clear_completed_on_leave);
    let updated = record.clone();
    save_at(home, &store)?;
    Ok(updated)
}

/// Mark a project completed, stamping `completed_at`.
pub fn complete_at(home: &Path, name: &str) -> Result<ProjectRecord, StoreError> {
    transition_at(home, name, ProjectState::Completed, false)
}

/// Pause a project, clearing any completion date.
pub fn pause_at(home: &Path, name: &str) -> Result<ProjectRecord, StoreError> {
    transition_at(home, name, ProjectState::Paused, true)
}

/// Archive a project, preserving any completion date.
pub fn archive_at(home: &Path, name: &str) -> Result<ProjectRecord, StoreError> {
    transition_at(home, name, ProjectState::Archived, false)
}

/// Return a project to active, clearing any completion date.
pub fn reactivate_at(home: &Path, name: &str) -> Result<ProjectRecord, StoreError> {
    transition_at(home, name, ProjectState::Active, true)
}

/// Dispatch a transition by target state, applying the per-operation
/// `completed_at` policy from the table above.
pub fn transition_to_at(
    home: &Path,
    name: &str,
    state: ProjectState,
) -> Result<ProjectRecord, StoreError> {
    match state {
        ProjectState::Completed => complete_at(home, name),
        ProjectState::Paused => pause_at(home, name),
        ProjectState::Archived => archive_at(home, name),
        ProjectState::Active => reactivate_at(home, name),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
