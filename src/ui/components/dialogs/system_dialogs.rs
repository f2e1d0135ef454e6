use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::constants::{DIALOG_TITLE_ERROR, DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

pub const HELP_TEXT: &str = "\
TASK FORM
---------
Tab / Shift+Tab   Move between Title, Description, Priority
Left / Right      Pick a priority (or 1/2/3, l/m/h)
Enter             Add the task (lands after a short delay)
Esc               Cancel a pending task, or go back to the list

TASK LIST
---------
j/k, Up/Down      Select task
Space, Enter      Toggle completion
d, Delete         Remove task
f / F             Cycle priority filter / clear filter
a, Tab            Focus the form

GENERAL
-------
?, h              This help
G                 Logs
q, Ctrl+C         Quit";

pub fn render_error_dialog(f: &mut Frame, area: Rect, message: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(DIALOG_TITLE_ERROR, Color::Red);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let [message_area, instructions_area] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let message_paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(message_paragraph, message_area);
    f.render_widget(create_instructions_paragraph(&[shortcuts::ESC_CLOSE]), instructions_area);
}

/// Where a scrolling dialog ended up after rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollView {
    /// Offset actually used, clamped to the last full page
    pub offset: usize,
    /// Number of content lines that fit in the dialog
    pub page_height: usize,
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> ScrollView {
    let lines: Vec<String> = HELP_TEXT.lines().map(str::to_string).collect();
    render_scrolling_dialog(f, area, DIALOG_TITLE_HELP, Color::Cyan, &lines, scroll_offset, scrollbar_state)
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logs: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> ScrollView {
    if logs.is_empty() {
        let empty = vec!["No log entries yet.".to_string()];
        render_scrolling_dialog(f, area, DIALOG_TITLE_LOGS, Color::Yellow, &empty, 0, scrollbar_state)
    } else {
        render_scrolling_dialog(f, area, DIALOG_TITLE_LOGS, Color::Yellow, logs, scroll_offset, scrollbar_state)
    }
}

/// Clamp a scroll offset so the last page stays full
pub fn clamp_scroll(scroll_offset: usize, total_lines: usize, visible_height: usize) -> usize {
    scroll_offset.min(total_lines.saturating_sub(visible_height))
}

fn render_scrolling_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    lines: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> ScrollView {
    let dialog_area = LayoutManager::centered_rect(80, 70, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, color);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let [content_area, instructions_area] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let visible_height = content_area.height as usize;
    let offset = clamp_scroll(scroll_offset, lines.len(), visible_height);
    let visible: Vec<ratatui::text::Line> = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .map(|line| ratatui::text::Line::from(line.clone()))
        .collect();

    f.render_widget(
        Paragraph::new(visible).style(Style::default().fg(Color::White)),
        content_area,
    );
    f.render_widget(
        create_instructions_paragraph(&[shortcuts::SCROLL, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE]),
        instructions_area,
    );

    if lines.len() > visible_height {
        *scrollbar_state = scrollbar_state
            .content_length(lines.len())
            .viewport_content_length(visible_height)
            .position(offset);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, scrollbar_state);
    }

    ScrollView {
        offset,
        page_height: visible_height,
    }
}
