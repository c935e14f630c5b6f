//! Plain-text rendering of a [`DashboardReport`].

use std::fmt;

use electrify_spi::{
    CountrySeries, DashboardReport, ForecastChart, Halt, HeatMap, Recommendation, Section,
    TrendChart,
};

use crate::content::{LEGEND_FORECAST, LEGEND_HISTORICAL};

const SHADES: [char; 5] = ['·', '░', '▒', '▓', '█'];
const BAR_WIDTH: f64 = 40.0;

/// Shade character for `value` within `[lo, hi]`; darker is higher.
pub fn shade(value: f64, lo: f64, hi: f64) -> char {
    let span = hi - lo;
    let t = if span.abs() < 1e-10 {
        1.0
    } else {
        ((value - lo) / span).clamp(0.0, 1.0)
    };
    let idx = (t * (SHADES.len() - 1) as f64).round() as usize;
    SHADES[idx.min(SHADES.len() - 1)]
}

fn bar(value: f64) -> String {
    "█".repeat(bar_len(value))
}

fn bar_len(value: f64) -> usize {
    ((value / 100.0).clamp(0.0, 1.0) * BAR_WIDTH).round() as usize
}

/// [`Display`](fmt::Display) adapter that lays a report out as plain text.
pub struct TextReport<'a>(pub &'a DashboardReport);

fn header(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    writeln!(f, "\n## {}\n", text.trim())
}

fn write_trend(f: &mut fmt::Formatter<'_>, chart: &TrendChart) -> fmt::Result {
    writeln!(f, "{}", chart.title)?;
    writeln!(f, "{:<6}{:>8}", chart.x_label, chart.y_label)?;
    for p in &chart.series.points {
        writeln!(f, "{:<6}{:>8.1}  o {}", p.year, p.value, bar(p.value))?;
    }
    Ok(())
}

fn write_heat_map(f: &mut fmt::Formatter<'_>, title: &str, map: &HeatMap) -> fmt::Result {
    writeln!(f, "{}", title)?;
    if map.is_empty() {
        return writeln!(f, "(no data for {})", map.metric);
    }
    let (lo, hi) = map.value_range().unwrap_or((0.0, 100.0));
    let width = map.countries.iter().map(|c| c.chars().count()).max().unwrap_or(7).max(7);

    write!(f, "{:<width$}", "country", width = width)?;
    for year in &map.years {
        write!(f, " {:>7}", year)?;
    }
    writeln!(f)?;

    for (country, row) in map.countries.iter().zip(&map.cells) {
        write!(f, "{:<width$}", country, width = width)?;
        for cell in row {
            match cell {
                Some(v) => write!(f, " {:>6.1}{}", v, shade(*v, lo, hi))?,
                None => write!(f, " {:>7}", "")?,
            }
        }
        writeln!(f)?;
    }
    writeln!(
        f,
        "scale: {} {:.1} .. {:.1} {}",
        SHADES[0],
        lo,
        hi,
        SHADES[SHADES.len() - 1]
    )
}

fn write_series_rows(f: &mut fmt::Formatter<'_>, series: &CountrySeries, label: &str) -> fmt::Result {
    for p in &series.points {
        writeln!(f, "{:<6}{:>8.1}  {:<11}{}", p.year, p.value, label, bar(p.value))?;
    }
    Ok(())
}

fn write_forecast(f: &mut fmt::Formatter<'_>, chart: &ForecastChart) -> fmt::Result {
    writeln!(f, "{}", chart.title)?;
    writeln!(f, "{:<6}{:>8}", chart.x_label, chart.y_label)?;
    write_series_rows(f, &chart.history, LEGEND_HISTORICAL)?;
    for p in &chart.forecast.points {
        writeln!(
            f,
            "{:<6}{:>8.1}  {:<11}{}",
            p.year,
            p.value,
            LEGEND_FORECAST,
            "╌".repeat(bar_len(p.value))
        )?;
    }
    Ok(())
}

fn write_recommendation(f: &mut fmt::Formatter<'_>, rec: &Recommendation) -> fmt::Result {
    let tag = if rec.is_warning() { "WARNING" } else { "SUCCESS" };
    writeln!(f, "[{}] {}", tag, rec.message())?;
    writeln!(f, "\nSuggested Actions:")?;
    for s in &rec.suggestions {
        writeln!(f, "- {}", s)?;
    }
    Ok(())
}

fn write_section(f: &mut fmt::Formatter<'_>, section: &Section) -> fmt::Result {
    match section {
        Section::Title { title, description } => {
            writeln!(f, "{}", title)?;
            writeln!(f, "{}", "=".repeat(title.chars().count()))?;
            writeln!(f, "{}", description)
        }
        Section::Trend {
            header: h,
            chart,
            interpretation,
        } => {
            header(f, h)?;
            write_trend(f, chart)?;
            writeln!(f, "\nInterpretation:\n{}", interpretation)
        }
        Section::HeatMap {
            header: h,
            title,
            heat_map,
            insight,
        } => {
            header(f, h)?;
            write_heat_map(f, title, heat_map)?;
            writeln!(f, "\nHeat Map Insight:\n{}", insight)
        }
        Section::Forecast {
            header: h,
            chart,
            explanation,
        } => {
            header(f, h)?;
            write_forecast(f, chart)?;
            writeln!(f, "\nForecast Explanation:\n{}", explanation)
        }
        Section::ModelSummary { header: h, text } => {
            header(f, h)?;
            writeln!(f, "{}", text)
        }
        Section::Recommendation {
            header: h,
            recommendation,
        } => {
            header(f, h)?;
            write_recommendation(f, recommendation)
        }
        Section::Footer { caption } => writeln!(f, "\n---\n{}", caption),
    }
}

impl fmt::Display for TextReport<'_> {
    /// Sections in order, ending with the halt message if the run stopped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.0.sections {
            write_section(f, section)?;
        }
        match &self.0.halt {
            Some(Halt::Warning(msg)) => writeln!(f, "\n[WARNING] {}", msg),
            Some(Halt::Error(msg)) => writeln!(f, "\n[ERROR] {}", msg),
            None => Ok(()),
        }
    }
}

/// Render a report as plain text.
pub fn render_text(report: &DashboardReport) -> String {
    TextReport(report).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::recommend;

    #[test]
    fn test_shade_extremes() {
        assert_eq!(shade(0.0, 0.0, 100.0), '·');
        assert_eq!(shade(100.0, 0.0, 100.0), '█');
        assert_eq!(shade(50.0, 50.0, 50.0), '█');
    }

    #[test]
    fn test_halt_rendered_last() {
        let mut report = DashboardReport::new();
        report.push(Section::Title {
            title: "T".to_string(),
            description: "d".to_string(),
        });
        let report = report.halt(Halt::Warning("upload please".to_string()));
        let text = render_text(&report);
        assert!(text.starts_with("T\n=\n"));
        assert!(text.trim_end().ends_with("[WARNING] upload please"));
    }

    #[test]
    fn test_display_matches_render_text() {
        let mut report = DashboardReport::new();
        report.push(Section::Footer {
            caption: "caption".to_string(),
        });
        let report = report.halt(Halt::Error("stopped".to_string()));
        assert_eq!(format!("{}", TextReport(&report)), render_text(&report));
        assert!(render_text(&report).ends_with("\n---\ncaption\n\n[ERROR] stopped\n"));
    }

    #[test]
    fn test_recommendation_block() {
        let mut report = DashboardReport::new();
        report.push(Section::Recommendation {
            header: "Planning Insights".to_string(),
            recommendation: recommend("Kenya", 82.3, 90.0),
        });
        let text = render_text(&report);
        assert!(text.contains("## Planning Insights"));
        assert!(text.contains("[WARNING] Kenya is projected to remain below universal access (82.3%)."));
        assert!(text.contains("- Expand rural grid connections or mini-grids"));
    }
}
