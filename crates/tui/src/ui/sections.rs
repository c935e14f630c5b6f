//! Dashboard body: trend, heat map, forecast, model summary and insights.

use electrify_facade::{content, DashboardReport, Halt, Section};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::widgets::{create_forecast_chart, create_trend_chart, heat_map_lines, series_points};

/// Draw whatever sections the last run produced.
pub fn draw_body(frame: &mut Frame, area: Rect, app: &App) {
    let report = &app.report;

    if let Some(err) = &app.error {
        draw_message(frame, area, " Error ", err, Color::Red);
        return;
    }
    if report.trend().is_none() {
        draw_welcome(frame, area, report);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(42),
            Constraint::Percentage(42),
            Constraint::Min(6),
        ])
        .split(area);
    let top = halves(rows[0]);
    let middle = halves(rows[1]);

    draw_trend(frame, top[0], report);
    draw_heat_map(frame, top[1], report);
    draw_forecast(frame, middle[0], report);
    draw_summary(frame, middle[1], report);
    draw_insights(frame, rows[2], report);
}

fn halves(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn draw_message(frame: &mut Frame, area: Rect, title: &str, text: &str, color: Color) {
    let widget = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(widget, area);
}

fn halt_line(halt: &Halt) -> Line<'static> {
    match halt {
        Halt::Warning(msg) => Line::from(Span::styled(
            format!("⚠ {}", msg),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Halt::Error(msg) => Line::from(Span::styled(
            format!("✖ {}", msg),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    }
}

/// Title page shown before data is loaded.
fn draw_welcome(frame: &mut Frame, area: Rect, report: &DashboardReport) {
    let mut lines = Vec::new();
    for section in &report.sections {
        if let Section::Title { description, .. } = section {
            lines.extend(description.lines().map(|l| Line::from(l.to_string())));
        }
    }
    lines.push(Line::default());
    if let Some(halt) = &report.halt {
        lines.push(halt_line(halt));
    }
    lines.push(Line::from(Span::styled(
        "Press [d] to load a CSV file.",
        Style::default().fg(Color::DarkGray),
    )));

    let welcome = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Welcome "));
    frame.render_widget(welcome, area);
}

fn draw_trend(frame: &mut Frame, area: Rect, report: &DashboardReport) {
    let Some(chart) = report.trend() else {
        return;
    };
    if chart.series.is_empty() {
        let text = format!("No {} values for {}", chart.series.metric.label(), chart.series.country);
        draw_message(frame, area, " Trend ", &text, Color::DarkGray);
        return;
    }
    let points = series_points(&chart.series.points);
    frame.render_widget(create_trend_chart(chart, &points), area);
}

fn draw_heat_map(frame: &mut Frame, area: Rect, report: &DashboardReport) {
    let Some(map) = report.heat_map() else {
        return;
    };
    let widget = Paragraph::new(heat_map_lines(map))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", content::HEAT_MAP_TITLE)),
        );
    frame.render_widget(widget, area);
}

fn draw_forecast(frame: &mut Frame, area: Rect, report: &DashboardReport) {
    let Some(chart) = report.forecast() else {
        let (text, color) = match &report.halt {
            Some(halt) => (halt.message().to_string(), Color::Red),
            None => (String::new(), Color::DarkGray),
        };
        draw_message(frame, area, " Forecast ", &text, color);
        return;
    };

    let history = series_points(&chart.history.points);
    // Start the projection at the last observation so the lines join
    let mut forecast: Vec<(f64, f64)> = history.last().copied().into_iter().collect();
    forecast.extend(series_points(&chart.forecast.points));

    frame.render_widget(create_forecast_chart(chart, &history, &forecast), area);
}

fn draw_summary(frame: &mut Frame, area: Rect, report: &DashboardReport) {
    let text = report.model_summary().unwrap_or_default();
    let widget = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", content::SUMMARY_HEADER)),
        );
    frame.render_widget(widget, area);
}

fn draw_insights(frame: &mut Frame, area: Rect, report: &DashboardReport) {
    let mut lines = Vec::new();

    if let Some(rec) = report.recommendation() {
        let color = if rec.is_warning() {
            Color::Yellow
        } else {
            Color::Green
        };
        lines.push(Line::from(Span::styled(
            rec.message(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Suggested Actions:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )));
        lines.extend(rec.suggestions.iter().map(|s| Line::from(format!("  - {}", s))));
    }
    if let Some(halt) = &report.halt {
        lines.push(halt_line(halt));
    }
    for section in &report.sections {
        if let Section::Footer { caption } = section {
            lines.push(Line::from(Span::styled(
                caption.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", content::INSIGHTS_HEADER)),
        );
    frame.render_widget(widget, area);
}
