//! Surface intent vocabulary and render projection.
//!
//! # Responsibility
//! - Name every discrete gesture the rendering surface can emit.
//! - Define the view-record shape the surface renders from.

use serde::{Deserialize, Serialize};

use crate::model::task::{Task, TaskId};

/// Discrete gesture events emitted by the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Add button tapped; carries the input field's value at tap time.
    AddRequested(String),
    /// Delete button tapped on one row.
    DeleteRequested(TaskId),
    /// Checkbox tapped on one row.
    ToggleRequested(TaskId),
    /// Edit button tapped on one row.
    BeginEditRequested(TaskId),
    /// Keystroke in the inline edit field.
    EditTextChanged(String),
    /// Confirm button tapped on the row being edited.
    CommitEditRequested,
    /// Keystroke in the add-task input field.
    InputTextChanged(String),
}

/// One row of render input for the surface.
///
/// Serializes with camelCase keys to match the surface schema
/// (`isBeingEdited`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub is_being_edited: bool,
}

impl TaskView {
    /// Projects a stored task into render input.
    pub fn project(task: &Task, editing: Option<TaskId>) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
            is_being_edited: editing == Some(task.id),
        }
    }
}
