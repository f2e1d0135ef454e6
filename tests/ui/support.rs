use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use taskboard::config::Config;
use taskboard::logger::Logger;
use taskboard::ui::core::EventType;
use taskboard::ui::AppComponent;

pub const COMMIT_DELAY: Duration = Duration::from_millis(1500);

pub fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn new_app() -> AppComponent {
    AppComponent::new(&Config::default(), Logger::new())
}

pub fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(key(code)).unwrap();
}

pub fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Fill all three fields starting from the title field, leaving focus on Priority.
/// `priority_key` is '1', '2' or '3'.
pub fn fill_form(app: &mut AppComponent, title: &str, description: &str, priority_key: char) {
    type_text(app, title);
    press(app, KeyCode::Tab);
    type_text(app, description);
    press(app, KeyCode::Tab);
    press(app, KeyCode::Char(priority_key));
}

/// Let every pending commit fire and apply them to the app
pub async fn wait_for_commits(app: &mut AppComponent) -> usize {
    tokio::time::sleep(COMMIT_DELAY + Duration::from_millis(1)).await;
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    app.apply_background_actions()
}
