//! Modal dialog component.
//!
//! Hosts the error, help and logs dialogs on top of the main screen. While a
//! dialog is visible it receives every key press.

use crate::ui::components::dialogs::system_dialogs;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub logs: Vec<String>,
    pub scroll_offset: usize,
    /// Content lines visible at the last render, zero before the first one
    pub page_height: usize,
    pub scrollbar_state: ScrollbarState,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            logs: Vec::new(),
            scroll_offset: 0,
            page_height: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    /// Newest-first log lines for the logs dialog
    pub fn update_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.page_height = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    /// Largest offset that still shows a full page
    fn max_scroll(&self) -> usize {
        if self.page_height == 0 {
            self.content_len().saturating_sub(1)
        } else {
            system_dialogs::clamp_scroll(usize::MAX, self.content_len(), self.page_height)
        }
    }

    fn content_len(&self) -> usize {
        match self.dialog_type {
            Some(DialogType::Logs) => self.logs.len(),
            Some(DialogType::Help) => system_dialogs::HELP_TEXT.lines().count(),
            _ => 0,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.dialog_type {
            None => Action::None,
            Some(DialogType::Error(_)) => Action::HideDialog,
            Some(_) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Action::HideDialog,
                KeyCode::Char('?') if matches!(self.dialog_type, Some(DialogType::Help)) => Action::HideDialog,
                KeyCode::Char('G') if matches!(self.dialog_type, Some(DialogType::Logs)) => Action::HideDialog,
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.scroll_offset < self.max_scroll() {
                        self.scroll_offset += 1;
                    }
                    Action::None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                    Action::None
                }
                KeyCode::Home => {
                    self.scroll_offset = 0;
                    Action::None
                }
                KeyCode::End => {
                    self.scroll_offset = self.max_scroll();
                    Action::None
                }
                _ => Action::None,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll_offset = 0;
                self.page_height = 0;
                self.scrollbar_state = ScrollbarState::new(0);
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let view = match &self.dialog_type {
            Some(DialogType::Error(message)) => {
                system_dialogs::render_error_dialog(f, rect, message);
                return;
            }
            Some(DialogType::Help) => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state)
            }
            Some(DialogType::Logs) => system_dialogs::render_logs_dialog(
                f,
                rect,
                &self.logs,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            None => return,
        };
        // Keep the stored offset on the last full page so Up moves right away
        self.scroll_offset = view.offset;
        self.page_height = view.page_height;
    }
}
