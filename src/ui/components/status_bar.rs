//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::core::Focus;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, focus: Focus, pending_commits: usize) {
        let status_text = if pending_commits > 0 {
            format!("⟳ Adding {} task(s)... • Esc in form: cancel", pending_commits)
        } else {
            match focus {
                Focus::Form => "Tab: next field • Enter: add task • Esc: task list • Ctrl+C: quit".to_string(),
                Focus::List => {
                    "Space: toggle • d: remove • f: filter • a: add task • ?: help • q: quit".to_string()
                }
            }
        };

        let status_color = if pending_commits > 0 { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
