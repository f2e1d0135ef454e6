use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::model::{Priority, Task};

#[must_use]
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::Green,
        Priority::Medium => Color::Yellow,
        Priority::High => Color::Red,
    }
}

/// Create the "Priority: X" badge shown on every task row
#[must_use]
pub fn create_priority_badge(priority: Priority) -> Span<'static> {
    Span::styled(
        format!(" Priority: {} ", priority),
        Style::default()
            .fg(Color::Black)
            .bg(priority_color(priority))
            .add_modifier(Modifier::BOLD),
    )
}

/// Create the completion status badge
#[must_use]
pub fn create_status_badge(task: &Task) -> Span<'static> {
    let (marker, style) = if task.completed {
        ("[x]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        ("[ ]", Style::default().fg(Color::Gray))
    };
    Span::styled(format!("{} {}", marker, task.status_label()), style)
}
