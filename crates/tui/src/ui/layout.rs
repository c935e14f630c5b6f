//! Main layout for the TUI.

use ratatui::prelude::*;

use super::controls::draw_controls;
use super::footer::draw_footer;
use super::header::draw_header;
use super::sections::draw_body;
use crate::app::App;

/// Draw the main UI layout.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Header, controls, body, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(size);

    draw_header(frame, chunks[0]);
    draw_controls(frame, chunks[1], app);
    draw_body(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);
}
