//! Footer bar widget with keyboard shortcuts.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode};

/// Draw the footer bar with context-sensitive help.
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.input_mode {
        InputMode::FileDialog => format!("Path: {}_  |  Enter: Load  Esc: Cancel", app.input_buffer),
        InputMode::Normal if app.has_data() => {
            "[d] Load  [c/C] Country  [m] Metric  [↑↓] Horizon  [q] Quit".to_string()
        }
        InputMode::Normal => "[d] Load CSV  [q] Quit".to_string(),
    };

    let display_text = match (&app.status_message, app.input_mode) {
        (Some((status, _)), InputMode::Normal) => format!("{} | {}", status, help_text),
        _ => help_text,
    };

    let style = match app.input_mode {
        InputMode::FileDialog => Style::default().fg(Color::Yellow),
        InputMode::Normal => Style::default().fg(Color::DarkGray),
    };

    let footer = Paragraph::new(display_text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(footer, area);
}
