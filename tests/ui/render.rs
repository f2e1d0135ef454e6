use crate::support::{fill_form, new_app, press, wait_for_commits};
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use taskboard::constants::{EMPTY_TASKS_MESSAGE, ERROR_PRIORITY_REQUIRED, ERROR_TITLE_REQUIRED, TITLE_FORM, TITLE_STATS};
use taskboard::ui::core::Component;
use taskboard::ui::AppComponent;

fn render_to_text(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_empty_board_renders_placeholder() {
    let mut app = new_app();
    let screen = render_to_text(&mut app);

    assert!(screen.contains(TITLE_FORM));
    assert!(screen.contains(TITLE_STATS));
    assert!(screen.contains(EMPTY_TASKS_MESSAGE));
    assert!(screen.contains("There are a total of 0 task(s)."));
}

#[tokio::test(start_paused = true)]
async fn test_committed_task_is_rendered() {
    let mut app = new_app();
    fill_form(&mut app, "Buy milk", "2%", '1');
    press(&mut app, KeyCode::Enter);

    let screen = render_to_text(&mut app);
    assert!(screen.contains("Adding"));
    assert!(screen.contains(EMPTY_TASKS_MESSAGE));

    wait_for_commits(&mut app).await;
    let screen = render_to_text(&mut app);

    assert!(!screen.contains(EMPTY_TASKS_MESSAGE));
    assert!(screen.contains("Buy milk"));
    assert!(screen.contains("Priority: Low"));
    assert!(screen.contains("To Do"));
    assert!(screen.contains("There are a total of 1 task(s)."));
    assert!(screen.contains("There are 1 Pending task(s)."));
}

#[tokio::test(start_paused = true)]
async fn test_filter_header_and_filtered_empty_list() {
    let mut app = new_app();
    fill_form(&mut app, "Buy milk", "2%", '1');
    press(&mut app, KeyCode::Enter);
    wait_for_commits(&mut app).await;

    press(&mut app, KeyCode::Esc);
    for _ in 0..3 {
        press(&mut app, KeyCode::Char('f'));
    }

    let screen = render_to_text(&mut app);
    assert!(screen.contains("Filtering by High Priority"));
    // The collection is not empty, so no placeholder even with nothing visible
    assert!(!screen.contains(EMPTY_TASKS_MESSAGE));
    assert!(!screen.contains("Buy milk"));
}

#[test]
fn test_error_dialog_overlay() {
    let mut app = new_app();
    app.handle_app_action(taskboard::ui::core::Action::RemoveTask(3));

    let screen = render_to_text(&mut app);
    assert!(screen.contains("Task 3 not found"));
}

#[test]
fn test_form_shows_errors_under_fields() {
    let mut app = new_app();
    press(&mut app, KeyCode::Enter);

    let screen = render_to_text(&mut app);
    assert!(screen.contains("Title"));
    assert!(screen.contains("Description"));
    assert!(screen.contains("Priority"));
    assert!(screen.contains(ERROR_TITLE_REQUIRED));
    assert!(screen.contains(ERROR_PRIORITY_REQUIRED));
}
