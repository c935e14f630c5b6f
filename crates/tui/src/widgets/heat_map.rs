//! Country x year heat map drawn with colored block cells.

use electrify_facade::HeatMap;
use ratatui::prelude::*;

/// Yellow-green-blue ramp, light for low access and dark for high.
const RAMP: [(u8, u8, u8); 9] = [
    (255, 255, 217),
    (237, 248, 177),
    (199, 233, 180),
    (127, 205, 187),
    (65, 182, 196),
    (29, 145, 192),
    (34, 94, 168),
    (37, 52, 148),
    (8, 29, 88),
];

const CELL: &str = "██";

/// Ramp color for `value` within `[lo, hi]`.
pub fn heat_color(value: f64, lo: f64, hi: f64) -> Color {
    let span = hi - lo;
    let t = if span.abs() < 1e-10 {
        1.0
    } else {
        ((value - lo) / span).clamp(0.0, 1.0)
    };
    let idx = (t * (RAMP.len() - 1) as f64).round() as usize;
    let (r, g, b) = RAMP[idx.min(RAMP.len() - 1)];
    Color::Rgb(r, g, b)
}

/// One line per country plus a year header and a scale legend.
///
/// Years are labelled by their last two digits to keep cells narrow.
pub fn heat_map_lines(map: &HeatMap) -> Vec<Line<'static>> {
    if map.is_empty() {
        return vec![Line::from(Span::styled(
            format!("No {} values to show", map.metric.label()),
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let (lo, hi) = map.value_range().unwrap_or((0.0, 100.0));
    let width = map
        .countries
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
        .min(16);

    let mut lines = Vec::with_capacity(map.countries.len() + 2);

    let mut header = format!("{:<width$} ", "", width = width);
    for year in &map.years {
        header.push_str(&format!("{:02} ", year.rem_euclid(100)));
    }
    lines.push(Line::from(Span::styled(
        header,
        Style::default().fg(Color::Gray),
    )));

    for (country, row) in map.countries.iter().zip(&map.cells) {
        let name: String = country.chars().take(width).collect();
        let mut spans = vec![Span::raw(format!("{:<width$} ", name, width = width))];
        for cell in row {
            match cell {
                Some(v) => spans.push(Span::styled(
                    CELL,
                    Style::default().fg(heat_color(*v, lo, hi)),
                )),
                None => spans.push(Span::raw("  ")),
            }
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let mut legend = vec![Span::raw(format!("{:.1} ", lo))];
    for &(r, g, b) in &RAMP {
        legend.push(Span::styled("█", Style::default().fg(Color::Rgb(r, g, b))));
    }
    legend.push(Span::raw(format!(" {:.1}", hi)));
    lines.push(Line::from(legend));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use electrify_facade::Metric;

    fn map() -> HeatMap {
        HeatMap {
            metric: Metric::ElectricityAccess,
            countries: vec!["Ghana".to_string(), "Kenya".to_string()],
            years: vec![2019, 2020],
            cells: vec![vec![Some(80.0), None], vec![Some(40.0), Some(60.0)]],
        }
    }

    #[test]
    fn test_color_ends_of_ramp() {
        assert_eq!(heat_color(0.0, 0.0, 100.0), Color::Rgb(255, 255, 217));
        assert_eq!(heat_color(100.0, 0.0, 100.0), Color::Rgb(8, 29, 88));
        assert_eq!(heat_color(150.0, 0.0, 100.0), Color::Rgb(8, 29, 88));
    }

    #[test]
    fn test_one_line_per_country() {
        let lines = heat_map_lines(&map());
        // header + 2 countries + legend
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].spans[0].content, "      19 20 ");
        assert!(lines[1].spans[0].content.starts_with("Ghana"));
    }

    #[test]
    fn test_missing_cell_left_blank() {
        let lines = heat_map_lines(&map());
        let ghana = &lines[1];
        // name, cell, gap, blank, gap
        assert_eq!(ghana.spans[1].content, CELL);
        assert_eq!(ghana.spans[3].content, "  ");
    }

    #[test]
    fn test_empty_map() {
        let mut empty = map();
        empty.countries.clear();
        empty.cells.clear();
        assert_eq!(heat_map_lines(&empty).len(), 1);
    }
}
