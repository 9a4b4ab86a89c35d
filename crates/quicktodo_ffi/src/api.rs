//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the to-do screen's intents as stable sync functions to Dart.
//! - Own the process-global session behind a mutex; the core stays
//!   global-free.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every mutating call returns the full session snapshot, so the UI can
//!   always rebuild itself from the latest return value.

use log::debug;
use quicktodo_core::{
    core_version as core_version_inner, default_log_level, init_logging as init_logging_inner,
    ping as ping_inner, Intent, TodoSession,
};
use std::sync::{Mutex, OnceLock};

static SESSION: OnceLock<Mutex<TodoSession>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive), or
///   empty to use the build-mode default.
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same configuration (idempotent).
/// - Reconfiguration attempts with a different level or directory fail.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = if level.trim().is_empty() {
        default_log_level().to_string()
    } else {
        level
    };
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One rendered row of the to-do list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskViewItem {
    /// Session-unique task id.
    pub id: u64,
    /// Raw task text as stored.
    pub text: String,
    /// Completion flag for the row checkbox.
    pub completed: bool,
    /// Whether this row renders the inline edit field.
    pub is_being_edited: bool,
}

/// Full render snapshot of the to-do screen.
///
/// Carries the controller-owned buffers alongside the rows so the UI can
/// rebuild every widget from one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Rows in insertion order.
    pub items: Vec<TaskViewItem>,
    /// Pending add-input buffer.
    pub input_text: String,
    /// Pending edit buffer.
    pub edit_text: String,
    /// Id of the row in edit mode, if any.
    pub editing_id: Option<u64>,
}

/// Returns the current screen snapshot without mutating anything.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn session_view() -> SessionView {
    with_session(|session| snapshot(session))
}

/// Keystroke in the add-task input field.
///
/// # FFI contract
/// - Sync call, never panics; returns the resulting snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn input_text_changed(text: String) -> SessionView {
    apply_intent(Intent::InputTextChanged(text))
}

/// Add button tapped; `text` is the input field's value at tap time.
///
/// Whitespace-only text leaves the task list and the id counter unchanged.
///
/// # FFI contract
/// - Sync call, never panics; returns the resulting snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn add_requested(text: String) -> SessionView {
    apply_intent(Intent::AddRequested(text))
}

/// Delete button tapped on the row with `id`.
///
/// A stale id is a silent no-op. Deleting the row in edit mode also leaves
/// edit mode.
///
/// # FFI contract
/// - Sync call, never panics; returns the resulting snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_requested(id: u64) -> SessionView {
    apply_intent(Intent::DeleteRequested(id))
}

/// Checkbox tapped on the row with `id`.
///
/// Refused for the row currently in edit mode; other rows toggle normally.
///
/// # FFI contract
/// - Sync call, never panics; returns the resulting snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_requested(id: u64) -> SessionView {
    apply_intent(Intent::ToggleRequested(id))
}

/// Edit button tapped on the row with `id`.
///
/// Seeds the edit buffer with the row's current text; a stale id is a
/// silent no-op.
///
/// # FFI contract
/// - Sync call, never panics; returns the resulting snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn begin_edit_requested(id: u64) -> SessionView {
    apply_intent(Intent::BeginEditRequested(id))
}

/// Keystroke in the inline edit field.
///
/// # FFI contract
/// - Sync call, never panics; returns the resulting snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_text_changed(text: String) -> SessionView {
    apply_intent(Intent::EditTextChanged(text))
}

/// Confirm button tapped on the row being edited.
///
/// Whitespace-only edit text refuses the commit and keeps edit mode active.
///
/// # FFI contract
/// - Sync call, never panics; returns the resulting snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn commit_edit_requested() -> SessionView {
    apply_intent(Intent::CommitEditRequested)
}

/// Drops all session state and returns the empty snapshot.
///
/// Exists for Flutter hot-restart: the Dart side restarts while Rust
/// statics persist, so the UI calls this to start from a clean screen.
///
/// # FFI contract
/// - Sync call, never panics; returns the resulting snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn session_reset() -> SessionView {
    with_session(|session| {
        debug!("event=session_reset module=ffi status=ok");
        *session = TodoSession::new();
        snapshot(session)
    })
}

fn apply_intent(intent: Intent) -> SessionView {
    with_session(|session| {
        session.handle_intent(intent);
        snapshot(session)
    })
}

fn with_session<T>(f: impl FnOnce(&mut TodoSession) -> T) -> T {
    let lock = SESSION.get_or_init(|| Mutex::new(TodoSession::new()));
    // A poisoned lock is absorbed: the session data stays usable and the
    // never-panic FFI contract holds.
    let mut guard = match lock.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

fn snapshot(session: &TodoSession) -> SessionView {
    SessionView {
        items: session
            .view_records()
            .into_iter()
            .map(|record| TaskViewItem {
                id: record.id,
                text: record.text,
                completed: record.completed,
                is_being_edited: record.is_being_edited,
            })
            .collect(),
        input_text: session.input_text().to_owned(),
        edit_text: session.edit_text().to_owned(),
        editing_id: session.editing(),
    }
}
