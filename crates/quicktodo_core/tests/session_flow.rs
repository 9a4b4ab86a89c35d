use quicktodo_core::{Intent, TodoSession};

#[test]
fn ids_are_strictly_increasing_from_one_with_no_reuse_after_delete() {
    let mut session = TodoSession::new();
    session.handle_intent(Intent::AddRequested("a".to_string()));
    session.handle_intent(Intent::AddRequested("b".to_string()));
    session.handle_intent(Intent::DeleteRequested(1));
    session.handle_intent(Intent::AddRequested("c".to_string()));

    let ids: Vec<_> = session.tasks().tasks().iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn task_count_matches_the_number_of_non_empty_adds() {
    let mut session = TodoSession::new();
    for text in ["one", "", "two", "   ", "three"] {
        session.handle_intent(Intent::AddRequested(text.to_string()));
    }

    assert_eq!(session.tasks().len(), 3);
    let ids: Vec<_> = session.tasks().tasks().iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![1, 2, 3], "refused adds must not burn ids");
}

#[test]
fn whitespace_add_leaves_state_counter_and_buffer_unchanged() {
    let mut session = TodoSession::new();
    session.input_text_changed("   ");
    session.request_add();

    assert!(session.tasks().is_empty());
    assert_eq!(session.input_text(), "   ", "refused add keeps the buffer");

    session.input_text_changed("real task");
    session.request_add();
    assert_eq!(session.tasks().tasks()[0].id, 1, "counter must not advance on refusal");
}

#[test]
fn add_stores_the_raw_untrimmed_buffer() {
    let mut session = TodoSession::new();
    session.handle_intent(Intent::AddRequested("  padded  ".to_string()));

    assert_eq!(session.tasks().tasks()[0].text, "  padded  ");
    assert!(session.input_text().is_empty(), "successful add clears the buffer");
}

#[test]
fn begin_edit_seeds_the_buffer_from_the_task_text() {
    let mut session = TodoSession::new();
    session.handle_intent(Intent::AddRequested("Buy milk".to_string()));
    session.handle_intent(Intent::BeginEditRequested(1));

    assert_eq!(session.editing(), Some(1));
    assert_eq!(session.edit_text(), "Buy milk");
}

#[test]
fn begin_edit_for_an_absent_id_is_a_noop() {
    let mut session = TodoSession::new();
    session.handle_intent(Intent::AddRequested("only".to_string()));
    session.handle_intent(Intent::BeginEditRequested(42));

    assert_eq!(session.editing(), None);
    assert!(session.edit_text().is_empty());
}

#[test]
fn refused_commit_keeps_edit_mode_and_the_buffer() {
    let mut session = TodoSession::new();
    session.handle_intent(Intent::AddRequested("Buy milk".to_string()));
    session.handle_intent(Intent::BeginEditRequested(1));
    session.handle_intent(Intent::EditTextChanged("   ".to_string()));
    session.handle_intent(Intent::CommitEditRequested);

    assert_eq!(session.editing(), Some(1), "refused commit stays in edit mode");
    assert_eq!(session.edit_text(), "   ");
    assert_eq!(session.tasks().get(1).unwrap().text, "Buy milk");
}

#[test]
fn successful_commit_stores_raw_text_and_clears_edit_state() {
    let mut session = TodoSession::new();
    session.handle_intent(Intent::AddRequested("Buy milk".to_string()));
    session.handle_intent(Intent::BeginEditRequested(1));
    session.handle_intent(Intent::EditTextChanged("  Buy oat milk  ".to_string()));
    session.handle_intent(Intent::CommitEditRequested);

    assert_eq!(session.tasks().get(1).unwrap().text, "  Buy oat milk  ");
    assert_eq!(session.editing(), None);
    assert!(session.edit_text().is_empty());
}

#[test]
fn commit_without_an_active_edit_is_a_noop() {
    let mut session = TodoSession::new();
    session.handle_intent(Intent::AddRequested("stable".to_string()));
    session.handle_intent(Intent::EditTextChanged("stray keystrokes".to_string()));
    session.handle_intent(Intent::CommitEditRequested);

    assert_eq!(session.tasks().get(1).unwrap().text, "stable");
    assert_eq!(session.editing(), None);
    assert_eq!(
        session.edit_text(),
        "stray keystrokes",
        "buffer writes outside edit mode update the buffer and nothing else"
    );
}

#[test]
fn toggle_is_refused_for_the_task_in_edit_mode() {
    let mut session = TodoSession::new();
    session.handle_intent(Intent::AddRequested("Buy milk".to_string()));
    session.handle_intent(Intent::BeginEditRequested(1));
    session.handle_intent(Intent::ToggleRequested(1));

    assert!(!session.tasks().get(1).unwrap().completed);
}

#[test]
fn toggle_of_other_tasks_stays_permitted_mid_edit() {
    let mut session = TodoSession::new();
    session.handle_intent(Intent::AddRequested("editing me".to_string()));
    session.handle_intent(Intent::AddRequested("toggle me".to_string()));
    session.handle_intent(Intent::BeginEditRequested(1));
    session.handle_intent(Intent::ToggleRequested(2));

    assert!(session.tasks().get(2).unwrap().completed);
    assert_eq!(session.editing(), Some(1), "edit mode survives the toggle");
}

#[test]
fn deleting_the_edited_task_clears_edit_state() {
    let mut session = TodoSession::new();
    session.handle_intent(Intent::AddRequested("doomed".to_string()));
    session.handle_intent(Intent::BeginEditRequested(1));
    session.handle_intent(Intent::DeleteRequested(1));

    assert!(session.tasks().is_empty());
    assert_eq!(session.editing(), None);
    assert!(session.edit_text().is_empty());
}

#[test]
fn deleting_another_task_keeps_the_active_edit() {
    let mut session = TodoSession::new();
    session.handle_intent(Intent::AddRequested("keep editing".to_string()));
    session.handle_intent(Intent::AddRequested("collateral".to_string()));
    session.handle_intent(Intent::BeginEditRequested(1));
    session.handle_intent(Intent::DeleteRequested(2));

    assert_eq!(session.editing(), Some(1));
    assert_eq!(session.edit_text(), "keep editing");
}

#[test]
fn delete_of_a_stale_id_is_a_silent_noop() {
    let mut session = TodoSession::new();
    session.handle_intent(Intent::AddRequested("survivor".to_string()));
    session.handle_intent(Intent::DeleteRequested(99));

    assert_eq!(session.tasks().len(), 1);
}

#[test]
fn full_screen_scenario_add_toggle_edit_delete() {
    let mut session = TodoSession::new();

    session.handle_intent(Intent::AddRequested("Buy milk".to_string()));
    {
        let tasks = session.tasks().tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(!tasks[0].completed);
    }

    session.handle_intent(Intent::AddRequested(String::new()));
    assert_eq!(session.tasks().len(), 1);

    session.handle_intent(Intent::ToggleRequested(1));
    assert!(session.tasks().get(1).unwrap().completed);

    session.handle_intent(Intent::BeginEditRequested(1));
    session.handle_intent(Intent::EditTextChanged("Buy oat milk".to_string()));
    session.handle_intent(Intent::CommitEditRequested);
    {
        let task = session.tasks().get(1).unwrap();
        assert_eq!(task.text, "Buy oat milk");
        assert!(task.completed);
    }
    assert_eq!(session.editing(), None);

    session.handle_intent(Intent::DeleteRequested(1));
    assert!(session.tasks().is_empty());
}
