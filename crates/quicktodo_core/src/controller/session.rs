//! Interaction session for the to-do screen.
//!
//! # Responsibility
//! - Translate surface intents into store actions and hold the result.
//! - Own the pending input/edit buffers, the id counter and edit mode.
//!
//! # Invariants
//! - Ids start at 1, grow by 1 per successful add, and are never reused.
//! - Emptiness checks run on trimmed text; the stored value is the raw
//!   buffer as typed.
//! - Edit mode never references an id absent from the store.

use log::debug;

use crate::controller::intent::{Intent, TaskView};
use crate::model::task::{Task, TaskId};
use crate::store::task_store::{TaskAction, TaskList};

/// Controller-owned state for one live to-do screen.
#[derive(Debug, Clone)]
pub struct TodoSession {
    tasks: TaskList,
    input_text: String,
    edit_text: String,
    next_id: TaskId,
    editing: Option<TaskId>,
}

impl Default for TodoSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoSession {
    /// Creates an empty session with the id counter at 1.
    pub fn new() -> Self {
        Self {
            tasks: TaskList::new(),
            input_text: String::new(),
            edit_text: String::new(),
            next_id: 1,
            editing: None,
        }
    }

    /// Routes one surface intent onto the request operations below.
    ///
    /// `AddRequested` carries the input field's final value at tap time, so
    /// it replaces the buffer before requesting the add. `BeginEditRequested`
    /// resolves the task's current text from the store and is a no-op for an
    /// absent id.
    pub fn handle_intent(&mut self, intent: Intent) {
        match intent {
            Intent::AddRequested(text) => {
                self.input_text_changed(text);
                self.request_add();
            }
            Intent::DeleteRequested(id) => self.request_delete(id),
            Intent::ToggleRequested(id) => self.request_toggle(id),
            Intent::BeginEditRequested(id) => {
                if let Some(text) = self.tasks.get(id).map(|task| task.text.clone()) {
                    self.request_begin_edit(id, text);
                }
            }
            Intent::EditTextChanged(text) => self.edit_text_changed(text),
            Intent::CommitEditRequested => self.request_commit_edit(),
            Intent::InputTextChanged(text) => self.input_text_changed(text),
        }
    }

    /// Replaces the pending add-input buffer.
    pub fn input_text_changed(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    /// Replaces the pending edit buffer. Unconditional; outside edit mode
    /// this updates the buffer and nothing else.
    pub fn edit_text_changed(&mut self, text: impl Into<String>) {
        self.edit_text = text.into();
    }

    /// Adds a task from the pending input buffer.
    ///
    /// # Contract
    /// - Whitespace-only input is refused: nothing is dispatched and the
    ///   counter and buffer keep their values.
    /// - On success the raw (untrimmed) buffer becomes the task text, the
    ///   counter advances and the buffer is cleared.
    pub fn request_add(&mut self) {
        if self.input_text.trim().is_empty() {
            debug!("event=add_refused module=core reason=empty_input");
            return;
        }
        let task = Task::new(self.next_id, self.input_text.clone());
        self.dispatch(TaskAction::Add(task));
        self.next_id += 1;
        self.input_text.clear();
    }

    /// Deletes a task by id; a missing id is a silent no-op in the store.
    ///
    /// Deleting the task currently in edit mode also clears edit mode and
    /// the edit buffer, so the session never points at a removed id.
    pub fn request_delete(&mut self, id: TaskId) {
        self.dispatch(TaskAction::Delete(id));
        if self.editing == Some(id) {
            self.editing = None;
            self.edit_text.clear();
        }
    }

    /// Toggles completion on a task by id.
    ///
    /// Refused only for the task currently in edit mode; toggling other
    /// tasks while one is mid-edit stays permitted.
    pub fn request_toggle(&mut self, id: TaskId) {
        if self.editing == Some(id) {
            debug!("event=toggle_refused module=core reason=row_in_edit_mode id={id}");
            return;
        }
        self.dispatch(TaskAction::Toggle(id));
    }

    /// Enters edit mode for `id`, seeding the edit buffer with the caller's
    /// snapshot of the task's current text.
    pub fn request_begin_edit(&mut self, id: TaskId, current_text: impl Into<String>) {
        self.editing = Some(id);
        self.edit_text = current_text.into();
    }

    /// Commits the pending edit to the task in edit mode.
    ///
    /// # Contract
    /// - No-op when no edit is active.
    /// - Whitespace-only buffer refuses the commit; edit mode and the
    ///   buffer stay as they are.
    /// - On success the raw (untrimmed) buffer becomes the task text and
    ///   edit mode plus buffer are cleared.
    pub fn request_commit_edit(&mut self) {
        let Some(id) = self.editing else {
            return;
        };
        if self.edit_text.trim().is_empty() {
            debug!("event=commit_refused module=core reason=empty_edit id={id}");
            return;
        }
        let text = std::mem::take(&mut self.edit_text);
        self.dispatch(TaskAction::Edit { id, text });
        self.editing = None;
    }

    /// Returns the live task list.
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Current add-input buffer contents.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Current edit buffer contents.
    pub fn edit_text(&self) -> &str {
        &self.edit_text
    }

    /// Id of the task in edit mode, if any.
    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    /// Projects the store into ordered render input for the surface.
    pub fn view_records(&self) -> Vec<TaskView> {
        self.tasks
            .tasks()
            .iter()
            .map(|task| TaskView::project(task, self.editing))
            .collect()
    }

    fn dispatch(&mut self, action: TaskAction) {
        debug!("event=dispatch module=core action={}", action.label());
        let tasks = std::mem::take(&mut self.tasks);
        self.tasks = tasks.apply(action);
    }
}
