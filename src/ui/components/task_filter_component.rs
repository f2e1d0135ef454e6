//! Priority filter selector.
//!
//! The selected value belongs to the app state. This component only mirrors
//! it for rendering and emits [`Action::SetFilter`] with the value the user
//! asked for.

use crate::constants::{FILTER_ALL_LABEL, TITLE_FILTER};
use crate::model::{Priority, PriorityFilter};
use crate::ui::components::badge::priority_color;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct TaskFilterComponent {
    pub value: PriorityFilter,
}

impl TaskFilterComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, value: PriorityFilter) {
        self.value = value;
    }

    fn option_span(label: &'static str, selected: bool, color: Color) -> Span<'static> {
        if selected {
            Span::styled(
                format!("[{}]", label),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(Color::Gray))
        }
    }
}

impl Component for TaskFilterComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('f') => Action::SetFilter(self.value.next()),
            KeyCode::Char('F') => Action::SetFilter(PriorityFilter::All),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut spans = vec![Self::option_span(
            FILTER_ALL_LABEL,
            self.value == PriorityFilter::All,
            Color::White,
        )];
        for priority in Priority::ALL {
            spans.push(Span::raw(" "));
            spans.push(Self::option_span(
                priority.label(),
                self.value == PriorityFilter::Only(priority),
                priority_color(priority),
            ));
        }
        spans.push(Span::styled("   f: cycle • F: clear", Style::default().fg(Color::DarkGray)));

        let selector = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title(TITLE_FILTER));
        f.render_widget(selector, rect);
    }
}
