use crate::constants::{EMPTY_TASKS_MESSAGE, TITLE_TASKS};
use crate::model::{PriorityFilter, Task};
use crate::ui::components::badge::{create_priority_badge, create_status_badge};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct TaskListComponent {
    /// Tasks that pass the current filter, in store order
    pub tasks: Vec<Task>,
    /// Size of the whole collection, filtered or not
    pub total_tasks: usize,
    pub filter: PriorityFilter,
    pub selected_index: usize,
    pub list_state: ListState,
    pub show_descriptions: bool,
    pub has_focus: bool,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            total_tasks: 0,
            filter: PriorityFilter::All,
            selected_index: 0,
            list_state: ListState::default(),
            show_descriptions: true,
            has_focus: false,
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>, total_tasks: usize, filter: PriorityFilter) {
        self.tasks = tasks;
        self.total_tasks = total_tasks;
        self.filter = filter;
        self.update_list_state();
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn title(&self) -> String {
        match self.filter.priority() {
            Some(priority) => format!("{} · Filtering by {} Priority", TITLE_TASKS, priority),
            None => TITLE_TASKS.to_string(),
        }
    }

    fn create_task_item(&self, task: &Task) -> ListItem<'static> {
        let title_style = if task.completed {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let mut lines = vec![Line::from(vec![
            create_status_badge(task),
            Span::raw("  "),
            Span::styled(task.title.clone(), title_style),
            Span::raw("  "),
            create_priority_badge(task.priority),
        ])];

        if self.show_descriptions {
            lines.push(Line::from(Span::styled(
                format!("    {}", task.description),
                Style::default().fg(Color::Gray),
            )));
        }

        ListItem::new(lines)
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextTask,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousTask,
            KeyCode::Char(' ') | KeyCode::Enter => self
                .selected_task()
                .map_or(Action::None, |task| Action::ToggleTask(task.id)),
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_task()
                .map_or(Action::None, |task| Action::RemoveTask(task.id)),
            KeyCode::Char('a') | KeyCode::Tab => Action::FocusForm,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_style = if self.has_focus {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title())
            .border_style(border_style);

        if self.total_tasks == 0 {
            let empty_list = List::new(vec![ListItem::new(EMPTY_TASKS_MESSAGE)]).block(block);
            f.render_widget(empty_list, rect);
        } else {
            let items: Vec<ListItem> = self.tasks.iter().map(|task| self.create_task_item(task)).collect();
            let mut list_state = self.list_state.clone();

            let highlight = if self.has_focus {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let tasks_list = List::new(items).block(block).highlight_style(highlight);

            f.render_stateful_widget(tasks_list, rect, &mut list_state);
            self.list_state = list_state;
        }
    }

    fn on_focus(&mut self) {
        self.has_focus = true;
    }

    fn on_blur(&mut self) {
        self.has_focus = false;
    }
}
