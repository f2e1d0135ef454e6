//! Task creation form.
//!
//! Owns the draft and the field error map. A valid submit emits
//! [`Action::SubmitTask`] with a snapshot of the draft; the app schedules the
//! delayed commit and calls [`TaskFormComponent::reset_after_commit`] once the
//! task has landed in the store.

use crate::constants::{PENDING_COMMIT_MESSAGE, TITLE_FORM};
use crate::model::{FormErrors, FormField, Priority, TaskDraft};
use crate::ui::components::badge::priority_color;
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_error_line, create_input_paragraph, create_instructions_line, create_selection_paragraph,
    shortcuts,
};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct TaskFormComponent {
    pub draft: TaskDraft,
    pub errors: FormErrors,
    pub focused_field: FormField,
    pub pending_commits: usize,
    pub has_focus: bool,
}

impl Default for TaskFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFormComponent {
    pub fn new() -> Self {
        Self {
            draft: TaskDraft::new(),
            errors: FormErrors::default(),
            focused_field: FormField::Title,
            pending_commits: 0,
            has_focus: true,
        }
    }

    pub fn set_pending_commits(&mut self, pending_commits: usize) {
        self.pending_commits = pending_commits;
    }

    pub fn is_pending(&self) -> bool {
        self.pending_commits > 0
    }

    /// Validate the draft. Errors replace the previous map either way.
    pub fn submit(&mut self) -> Action {
        match self.draft.to_new_task() {
            Ok(task) => {
                self.errors = FormErrors::default();
                log::info!("Form: submitted '{}' ({})", task.title, task.priority);
                Action::SubmitTask(task)
            }
            Err(errors) => {
                log::warn!("Form: submit rejected with {} field error(s)", errors.len());
                self.errors = errors;
                Action::None
            }
        }
    }

    /// Blank the draft once a commit has landed
    pub fn reset_after_commit(&mut self) {
        self.draft = TaskDraft::cleared();
    }

    fn select_priority(&mut self, priority: Priority) {
        self.draft.priority = Some(priority);
    }

    fn handle_priority_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Right | KeyCode::Char(' ') => {
                let next = self.draft.priority.map_or(Priority::Low, Priority::next);
                self.select_priority(next);
            }
            KeyCode::Left => {
                let previous = self.draft.priority.map_or(Priority::High, Priority::previous);
                self.select_priority(previous);
            }
            KeyCode::Char('1') | KeyCode::Char('l') => self.select_priority(Priority::Low),
            KeyCode::Char('2') | KeyCode::Char('m') => self.select_priority(Priority::Medium),
            KeyCode::Char('3') | KeyCode::Char('h') => self.select_priority(Priority::High),
            _ => {}
        }
        Action::None
    }

    fn handle_text_key(&mut self, key: KeyEvent) -> Action {
        let Some(text) = self.draft.text_mut(self.focused_field) else {
            return Action::None;
        };
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                text.push(c);
            }
            KeyCode::Backspace => {
                text.pop();
            }
            _ => {}
        }
        Action::None
    }

    fn render_priority_selector(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for priority in Priority::ALL {
            let selected = self.draft.priority == Some(priority);
            let marker = if selected { "(•) " } else { "( ) " };
            let style = if selected {
                Style::default().fg(priority_color(priority)).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!("{}{}", marker, priority), style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }

    fn error_line(&self, field: FormField) -> Line<'static> {
        self.errors.get(field).map(create_error_line).unwrap_or_default()
    }

    fn footer_line(&self) -> Line<'static> {
        if self.is_pending() {
            let mut line = Line::from(Span::styled(
                format!("⟳ {} ", PENDING_COMMIT_MESSAGE),
                Style::default().fg(Color::Yellow),
            ));
            line.spans.extend(create_instructions_line(&[shortcuts::ESC_CANCEL]).spans);
            line
        } else if self.has_focus {
            create_instructions_line(&[
                shortcuts::ENTER_SUBMIT,
                shortcuts::SEPARATOR,
                shortcuts::TAB_NEXT,
                shortcuts::SEPARATOR,
                shortcuts::ESC_LIST,
            ])
        } else {
            Line::from(Span::styled("Press 'a' to add a task", Style::default().fg(Color::DarkGray)))
        }
    }
}

impl Component for TaskFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.focused_field = self.focused_field.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focused_field = self.focused_field.previous();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => {
                if self.is_pending() {
                    Action::CancelPendingCommits
                } else {
                    Action::FocusList
                }
            }
            _ if self.focused_field == FormField::Priority => self.handle_priority_key(key),
            _ => self.handle_text_key(key),
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.has_focus { Color::Cyan } else { Color::Gray };
        let block = create_dialog_block(TITLE_FORM, border_color);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

        for (index, field) in FormField::ALL.into_iter().enumerate() {
            let focused = self.has_focus && self.focused_field == field;
            let input = match field {
                FormField::Title => create_input_paragraph(&self.draft.title, field.label(), focused),
                FormField::Description => create_input_paragraph(&self.draft.description, field.label(), focused),
                FormField::Priority => {
                    create_selection_paragraph(self.render_priority_selector(), field.label(), focused)
                }
            };
            f.render_widget(input, chunks[index * 2]);
            f.render_widget(Paragraph::new(self.error_line(field)), chunks[index * 2 + 1]);
        }

        f.render_widget(Paragraph::new(self.footer_line()), chunks[6]);
    }

    fn on_focus(&mut self) {
        self.has_focus = true;
    }

    fn on_blur(&mut self) {
        self.has_focus = false;
    }
}
