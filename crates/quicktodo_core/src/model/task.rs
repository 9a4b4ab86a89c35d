//! Task domain model.
//!
//! # Responsibility
//! - Define the single record type shown on the to-do screen.
//! - Keep identity assignment outside the model (the session owns the
//!   counter).
//!
//! # Invariants
//! - `id` is unique among live tasks and never reassigned to another task.
//! - `completed` starts as `false` for every new task.

use serde::{Deserialize, Serialize};

/// Stable identifier for a task within one session.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u64;

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Session-unique id, assigned monotonically by the session counter.
    pub id: TaskId,
    /// Raw text as typed. Emptiness is enforced at the session boundary,
    /// so the stored value may carry leading/trailing whitespace.
    pub text: String,
    /// Completion flag driven by the surface checkbox.
    pub completed: bool,
}

impl Task {
    /// Creates a new, not-yet-completed task with the given id and text.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}
