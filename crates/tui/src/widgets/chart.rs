//! Chart widgets for access-rate series.

use electrify_facade::{content, ForecastChart, SeriesPoint, TrendChart};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

/// `(year, value)` pairs for a ratatui dataset.
pub fn series_points(points: &[SeriesPoint]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.year as f64, p.value)).collect()
}

/// Bounds with a little headroom so lines don't sit on the border.
fn bounds(points: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !x_min.is_finite() {
        return ([0.0, 1.0], [0.0, 100.0]);
    }
    if x_max - x_min < 1.0 {
        x_max = x_min + 1.0;
    }
    let pad = ((y_max - y_min) * 0.1).max(1.0);
    ([x_min, x_max], [y_min - pad, y_max + pad])
}

fn year_labels(x: [f64; 2]) -> Vec<Span<'static>> {
    let mid = ((x[0] + x[1]) / 2.0).round();
    vec![
        Span::raw(format!("{}", x[0] as i32)),
        Span::raw(format!("{}", mid as i32)),
        Span::raw(format!("{}", x[1] as i32)),
    ]
}

fn value_labels(y: [f64; 2]) -> Vec<Span<'static>> {
    vec![
        Span::raw(format!("{:.1}", y[0])),
        Span::raw(format!("{:.1}", (y[0] + y[1]) / 2.0)),
        Span::raw(format!("{:.1}", y[1])),
    ]
}

/// Line chart of one country's history with point markers.
pub fn create_trend_chart<'a>(chart: &'a TrendChart, points: &'a [(f64, f64)]) -> Chart<'a> {
    let (x, y) = bounds(points);

    let datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(points),
        Dataset::default()
            .marker(Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::LightCyan))
            .data(points),
    ];

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", chart.title)),
        )
        .x_axis(
            Axis::default()
                .title(chart.x_label.as_str())
                .style(Style::default().fg(Color::Gray))
                .bounds(x)
                .labels(year_labels(x)),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_label.as_str())
                .style(Style::default().fg(Color::Gray))
                .bounds(y)
                .labels(value_labels(y)),
        )
}

/// History and projection on one chart; the projection is drawn dotted.
///
/// `forecast` should start at the last historical point so the two lines
/// meet.
pub fn create_forecast_chart<'a>(
    chart: &'a ForecastChart,
    history: &'a [(f64, f64)],
    forecast: &'a [(f64, f64)],
) -> Chart<'a> {
    let all: Vec<(f64, f64)> = history.iter().chain(forecast).copied().collect();
    let (x, y) = bounds(&all);

    let datasets = vec![
        Dataset::default()
            .name(content::LEGEND_HISTORICAL)
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(history),
        Dataset::default()
            .name(content::LEGEND_FORECAST)
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(forecast),
    ];

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", chart.title)),
        )
        .x_axis(
            Axis::default()
                .title(chart.x_label.as_str())
                .style(Style::default().fg(Color::Gray))
                .bounds(x)
                .labels(year_labels(x)),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_label.as_str())
                .style(Style::default().fg(Color::Gray))
                .bounds(y)
                .labels(value_labels(y)),
        )
}
