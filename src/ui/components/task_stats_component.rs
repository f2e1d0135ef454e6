use crate::constants::TITLE_STATS;
use crate::store::TaskStats;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Read-only statistics panel
#[derive(Default)]
pub struct TaskStatsComponent {
    pub stats: TaskStats,
}

impl TaskStatsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, stats: TaskStats) {
        self.stats = stats;
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("There are a total of {} task(s).", self.stats.total),
            format!("There are {} Completed task(s).", self.stats.completed),
            format!("There are {} Pending task(s).", self.stats.pending),
        ]
    }
}

impl Component for TaskStatsComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [total, completed, pending] = self.lines();
        let text = vec![
            Line::styled(total, Style::default().fg(Color::White)),
            Line::styled(completed, Style::default().fg(Color::Green)),
            Line::styled(pending, Style::default().fg(Color::Yellow)),
        ];
        let panel = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(TITLE_STATS));
        f.render_widget(panel, rect);
    }
}
