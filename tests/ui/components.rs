use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskboard::constants::ERROR_TITLE_REQUIRED;
use taskboard::model::{FormField, NewTask, Priority, PriorityFilter, Task};
use taskboard::store::TaskStats;
use ratatui::{backend::TestBackend, Terminal};
use taskboard::ui::components::badge::create_status_badge;
use taskboard::ui::components::dialogs::system_dialogs::HELP_TEXT;
use taskboard::ui::components::{
    DialogComponent, TaskFilterComponent, TaskFormComponent, TaskListComponent, TaskStatsComponent,
};
use taskboard::ui::core::{Action, Component, DialogType};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 0,
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            priority: Priority::Low,
            completed: false,
        },
        Task {
            id: 4,
            title: "Pay rent".to_string(),
            description: "Before the 5th".to_string(),
            priority: Priority::High,
            completed: true,
        },
    ]
}

#[test]
fn test_form_edits_focused_text_field() {
    let mut form = TaskFormComponent::new();
    for c in "Tea".chars() {
        form.handle_key_events(key(KeyCode::Char(c)));
    }
    form.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(form.draft.title, "Te");

    form.handle_key_events(key(KeyCode::Tab));
    assert_eq!(form.focused_field, FormField::Description);
    form.handle_key_events(key(KeyCode::Char('x')));
    assert_eq!(form.draft.description, "x");

    // Control chords are not text
    form.handle_key_events(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(form.draft.description, "x");

    form.handle_key_events(key(KeyCode::BackTab));
    assert_eq!(form.focused_field, FormField::Title);
}

#[test]
fn test_form_priority_selection() {
    let mut form = TaskFormComponent::new();
    form.focused_field = FormField::Priority;

    form.handle_key_events(key(KeyCode::Right));
    assert_eq!(form.draft.priority, Some(Priority::Low));
    form.handle_key_events(key(KeyCode::Char(' ')));
    assert_eq!(form.draft.priority, Some(Priority::Medium));
    form.handle_key_events(key(KeyCode::Char('3')));
    assert_eq!(form.draft.priority, Some(Priority::High));
    form.handle_key_events(key(KeyCode::Right));
    assert_eq!(form.draft.priority, Some(Priority::Low));
    form.handle_key_events(key(KeyCode::Left));
    assert_eq!(form.draft.priority, Some(Priority::High));

    // Letters pick a priority instead of being typed
    form.handle_key_events(key(KeyCode::Char('m')));
    assert_eq!(form.draft.priority, Some(Priority::Medium));
    assert!(form.draft.title.is_empty());
}

#[test]
fn test_form_submit() {
    let mut form = TaskFormComponent::new();
    form.draft.title = "   ".to_string();
    form.draft.description = "Call the plumber".to_string();
    form.draft.priority = Some(Priority::High);

    assert_eq!(form.submit(), Action::None);
    assert_eq!(form.errors.len(), 1);
    assert_eq!(form.errors.get(FormField::Title), Some(ERROR_TITLE_REQUIRED));

    form.draft.title = "Fix sink".to_string();
    let action = form.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::SubmitTask(NewTask {
            title: "Fix sink".to_string(),
            description: "Call the plumber".to_string(),
            priority: Priority::High,
        })
    );
    assert!(form.errors.is_empty());
    // The draft stays until the commit lands
    assert_eq!(form.draft.title, "Fix sink");

    form.reset_after_commit();
    assert!(form.draft.title.is_empty());
    assert_eq!(form.draft.priority, None);
    assert_eq!(form.draft.id, None);
}

#[test]
fn test_form_escape_depends_on_pending_commits() {
    let mut form = TaskFormComponent::new();
    assert_eq!(form.handle_key_events(key(KeyCode::Esc)), Action::FocusList);

    form.set_pending_commits(2);
    assert!(form.is_pending());
    assert_eq!(form.handle_key_events(key(KeyCode::Esc)), Action::CancelPendingCommits);
}

#[test]
fn test_filter_cycles_priorities() {
    let mut filter = TaskFilterComponent::new();
    assert_eq!(
        filter.handle_key_events(key(KeyCode::Char('f'))),
        Action::SetFilter(PriorityFilter::Only(Priority::Low))
    );

    filter.update_data(PriorityFilter::Only(Priority::High));
    assert_eq!(
        filter.handle_key_events(key(KeyCode::Char('f'))),
        Action::SetFilter(PriorityFilter::All)
    );
    assert_eq!(
        filter.handle_key_events(key(KeyCode::Char('F'))),
        Action::SetFilter(PriorityFilter::All)
    );
    assert_eq!(filter.handle_key_events(key(KeyCode::Char('x'))), Action::None);
}

#[test]
fn test_task_list_navigation_wraps() {
    let mut list = TaskListComponent::new();
    list.update_data(sample_tasks(), 2, PriorityFilter::All);
    assert_eq!(list.selected_task().map(|task| task.id), Some(0));

    let action = list.handle_key_events(key(KeyCode::Char('j')));
    list.update(action);
    assert_eq!(list.selected_task().map(|task| task.id), Some(4));

    let action = list.handle_key_events(key(KeyCode::Down));
    list.update(action);
    assert_eq!(list.selected_index, 0);

    let action = list.handle_key_events(key(KeyCode::Up));
    list.update(action);
    assert_eq!(list.selected_index, 1);
}

#[test]
fn test_task_list_actions_use_task_ids() {
    let mut list = TaskListComponent::new();
    list.update_data(sample_tasks(), 2, PriorityFilter::All);
    list.selected_index = 1;

    assert_eq!(list.handle_key_events(key(KeyCode::Char(' '))), Action::ToggleTask(4));
    assert_eq!(list.handle_key_events(key(KeyCode::Delete)), Action::RemoveTask(4));
    assert_eq!(list.handle_key_events(key(KeyCode::Char('a'))), Action::FocusForm);
}

#[test]
fn test_task_list_selection_clamps_when_rows_disappear() {
    let mut list = TaskListComponent::new();
    list.update_data(sample_tasks(), 2, PriorityFilter::All);
    list.selected_index = 1;

    list.update_data(sample_tasks()[..1].to_vec(), 2, PriorityFilter::Only(Priority::Low));
    assert_eq!(list.selected_index, 0);

    list.update_data(Vec::new(), 2, PriorityFilter::Only(Priority::Medium));
    assert!(list.selected_task().is_none());
    assert_eq!(list.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('d'))), Action::None);
}

#[test]
fn test_stats_lines() {
    let mut stats = TaskStatsComponent::new();
    stats.update_data(TaskStats::from_tasks(&sample_tasks()));
    assert_eq!(
        stats.lines(),
        [
            "There are a total of 2 task(s).".to_string(),
            "There are 1 Completed task(s).".to_string(),
            "There are 1 Pending task(s).".to_string(),
        ]
    );
}

#[test]
fn test_dialog_show_scroll_and_hide() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None);

    dialog.update_logs(vec!["third".to_string(), "second".to_string(), "first".to_string()]);
    dialog.update(Action::ShowDialog(DialogType::Logs));
    assert!(dialog.is_visible());

    dialog.handle_key_events(key(KeyCode::Char('j')));
    dialog.handle_key_events(key(KeyCode::Char('j')));
    dialog.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(dialog.scroll_offset, 2);
    dialog.handle_key_events(key(KeyCode::Home));
    assert_eq!(dialog.scroll_offset, 0);

    let action = dialog.handle_key_events(key(KeyCode::Char('q')));
    assert_eq!(action, Action::HideDialog);
    dialog.update(action);
    assert!(!dialog.is_visible());
}

#[test]
fn test_error_dialog_closes_on_any_key() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Error("Task 3 not found".to_string())));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('z'))), Action::HideDialog);
}

#[test]
fn test_non_dialog_actions_pass_through() {
    let mut dialog = DialogComponent::new();
    assert_eq!(dialog.update(Action::ToggleTask(1)), Action::ToggleTask(1));
}

#[test]
fn test_status_badge_follows_task_status() {
    let tasks = sample_tasks();
    assert_eq!(tasks[0].status_label(), "To Do");
    assert_eq!(create_status_badge(&tasks[0]).content, "[ ] To Do");
    assert_eq!(create_status_badge(&tasks[1]).content, "[x] Completed");
}

#[test]
fn test_scroll_offset_stays_on_last_full_page() {
    let mut dialog = DialogComponent::new();
    dialog.update_logs((0..100).map(|i| format!("entry {}", i)).collect());
    dialog.update(Action::ShowDialog(DialogType::Logs));

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    assert!(dialog.page_height > 0);
    let last_page = 100 - dialog.page_height;

    dialog.handle_key_events(key(KeyCode::End));
    assert_eq!(dialog.scroll_offset, last_page);

    // Down past the end is a no-op, and Up moves immediately
    dialog.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(dialog.scroll_offset, last_page);
    dialog.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(dialog.scroll_offset, last_page - 1);

    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    assert_eq!(dialog.scroll_offset, last_page - 1);
}

#[test]
fn test_render_clamps_stored_offset() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));
    // Before any render the page size is unknown
    dialog.handle_key_events(key(KeyCode::End));
    assert_eq!(dialog.scroll_offset, HELP_TEXT.lines().count() - 1);

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    let expected = HELP_TEXT.lines().count().saturating_sub(dialog.page_height);
    assert_eq!(dialog.scroll_offset, expected);
}

#[test]
fn test_help_lists_every_binding() {
    for binding in ["?, h", "Space, Enter", "d, Delete", "l/m/h", "1/2/3", "Ctrl+C"] {
        assert!(HELP_TEXT.contains(binding), "help is missing {}", binding);
    }
}
