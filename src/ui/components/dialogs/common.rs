use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block, with a visual cursor while focused
pub fn create_input_paragraph<'a>(input_buffer: &'a str, field_title: &str, focused: bool) -> Paragraph<'a> {
    let input_display = if focused {
        format!("{}█", input_buffer)
    } else {
        input_buffer.to_string()
    };

    Paragraph::new(input_display)
        .block(field_block(field_title, focused))
        .style(Style::default().fg(Color::White))
}

/// Creates a selection field block (read-only display with title)
pub fn create_selection_paragraph<'a>(value: Line<'a>, field_title: &str, focused: bool) -> Paragraph<'a> {
    Paragraph::new(value).block(field_block(field_title, focused))
}

/// Red one-line message shown under a form field
pub fn create_error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Red)))
}

fn field_block(field_title: &str, focused: bool) -> Block<'static> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    Paragraph::new(create_instructions_line(instructions)).alignment(Alignment::Center)
}

pub fn create_instructions_line<'a>(instructions: &[InstructionShortcut]) -> Line<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }
    Line::from(instruction_text)
}

/// Common instruction shortcuts used across panes and dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel pending");
    pub const ESC_LIST: InstructionShortcut = ("Esc", Color::Red, " Back to list");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Add Task");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const SCROLL: InstructionShortcut = ("j/k", Color::Cyan, " Scroll");
}
