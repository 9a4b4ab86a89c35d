//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quicktodo_core` linkage.
//! - Walk one deterministic screen scenario for quick local sanity checks.

use quicktodo_core::{Intent, TodoSession};

fn main() {
    println!("quicktodo_core ping={}", quicktodo_core::ping());
    println!("quicktodo_core version={}", quicktodo_core::core_version());

    // Logging is opt-in for the probe; the mobile embedder normally owns it.
    if let Ok(dir) = std::env::var("QUICKTODO_LOG_DIR") {
        if let Err(err) = quicktodo_core::init_logging(quicktodo_core::default_log_level(), &dir) {
            eprintln!("logging setup skipped: {err}");
        }
    }

    let mut session = TodoSession::new();
    session.handle_intent(Intent::AddRequested("Buy milk".to_string()));
    session.handle_intent(Intent::ToggleRequested(1));
    session.handle_intent(Intent::BeginEditRequested(1));
    session.handle_intent(Intent::EditTextChanged("Buy oat milk".to_string()));
    session.handle_intent(Intent::CommitEditRequested);

    for record in session.view_records() {
        println!(
            "task id={} completed={} editing={} text={}",
            record.id, record.completed, record.is_being_edited, record.text
        );
    }
}
