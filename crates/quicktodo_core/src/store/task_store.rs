//! Task list store and its transition function.
//!
//! # Responsibility
//! - Hold the ordered task sequence.
//! - Apply `TaskAction`s as a pure value-to-value transition.
//!
//! # Invariants
//! - Insertion order is preserved; no action reorders tasks.
//! - Every action is total: a missing id degrades to a silent no-op, never
//!   an error.

use serde::{Deserialize, Serialize};

use crate::model::task::{Task, TaskId};

/// Tagged action vocabulary consumed by [`TaskList::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Append a fully-formed task at the end of the sequence.
    ///
    /// The dispatching session is responsible for id assignment and for
    /// rejecting empty text before the action is ever constructed.
    Add(Task),
    /// Remove the task with this id, if present.
    Delete(TaskId),
    /// Flip `completed` on the task with this id, if present.
    Toggle(TaskId),
    /// Replace `text` on the task with this id, if present. The new text is
    /// stored verbatim; no trimming happens at this layer.
    Edit { id: TaskId, text: String },
}

impl TaskAction {
    /// Stable label used in metadata-only log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Delete(_) => "delete",
            Self::Toggle(_) => "toggle",
            Self::Edit { .. } => "edit",
        }
    }
}

/// Ordered task sequence with value-semantics transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action and returns the next state.
    ///
    /// # Contract
    /// - Total over all inputs; never fails and never panics.
    /// - Actions referencing an absent id return the state unchanged.
    /// - Insertion order is preserved across every action.
    pub fn apply(mut self, action: TaskAction) -> Self {
        match action {
            TaskAction::Add(task) => self.tasks.push(task),
            TaskAction::Delete(id) => self.tasks.retain(|task| task.id != id),
            TaskAction::Toggle(id) => {
                if let Some(task) = self.find_mut(id) {
                    task.completed = !task.completed;
                }
            }
            TaskAction::Edit { id, text } => {
                if let Some(task) = self.find_mut(id) {
                    task.text = text;
                }
            }
        }
        self
    }

    /// Returns the tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of live tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}
