//! Selection controls bar.

use electrify_facade::Metric;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Draw the current data source, country, metric and horizon.
pub fn draw_controls(frame: &mut Frame, area: Rect, app: &App) {
    let bounds = app.dashboard().config().horizon;
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    let source = app
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "none".to_string());

    let country = match (&app.controls, app.selected_country()) {
        (Some(controls), Some(country)) => format!(
            "{} ({}/{})",
            country,
            app.country_index + 1,
            controls.countries.len()
        ),
        _ => "-".to_string(),
    };

    let metrics: Vec<Span> = Metric::all()
        .iter()
        .flat_map(|m| {
            let span = if *m == app.metric {
                Span::styled(format!("[{}]", m.label()), value)
            } else {
                Span::styled(m.label(), label)
            };
            [span, Span::raw(" ")]
        })
        .collect();

    let mut spans = vec![
        Span::styled("Data: ", label),
        Span::raw(source),
        Span::raw("   "),
        Span::styled("Country: ", label),
        Span::styled(country, value),
        Span::raw("   "),
        Span::styled("Metric: ", label),
    ];
    spans.extend(metrics);
    spans.extend([
        Span::raw("  "),
        Span::styled("Horizon: ", label),
        Span::styled(format!("{} years", app.horizon), value),
        Span::styled(format!(" [{}-{}]", bounds.min, bounds.max), label),
    ]);

    let controls = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Controls "));

    frame.render_widget(controls, area);
}
