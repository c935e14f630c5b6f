//! Rendered dashboard: ordered sections plus an optional early stop.

use serde::Serialize;

use crate::model::{CountrySeries, ForecastResult, HeatMap, Recommendation};

/// Line chart of one country's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: CountrySeries,
}

/// History and projection drawn together, projection dashed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub history: CountrySeries,
    pub forecast: ForecastResult,
}

/// One block of the page, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Title {
        title: String,
        description: String,
    },
    Trend {
        header: String,
        chart: TrendChart,
        interpretation: String,
    },
    HeatMap {
        header: String,
        title: String,
        heat_map: HeatMap,
        insight: String,
    },
    Forecast {
        header: String,
        chart: ForecastChart,
        explanation: String,
    },
    ModelSummary {
        header: String,
        text: String,
    },
    Recommendation {
        header: String,
        recommendation: Recommendation,
    },
    Footer {
        caption: String,
    },
}

impl Section {
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Title { .. } => "title",
            Section::Trend { .. } => "trend",
            Section::HeatMap { .. } => "heat_map",
            Section::Forecast { .. } => "forecast",
            Section::ModelSummary { .. } => "model_summary",
            Section::Recommendation { .. } => "recommendation",
            Section::Footer { .. } => "footer",
        }
    }
}

/// Why a run stopped before the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "snake_case")]
pub enum Halt {
    Warning(String),
    Error(String),
}

impl Halt {
    pub fn message(&self) -> &str {
        match self {
            Halt::Warning(msg) | Halt::Error(msg) => msg,
        }
    }
}

/// Output of one dashboard run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardReport {
    pub sections: Vec<Section>,
    pub halt: Option<Halt>,
}

impl DashboardReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Stop the run; no further sections follow.
    pub fn halt(mut self, halt: Halt) -> Self {
        self.halt = Some(halt);
        self
    }

    pub fn is_halted(&self) -> bool {
        self.halt.is_some()
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.sections.iter().map(Section::kind).collect()
    }

    pub fn trend(&self) -> Option<&TrendChart> {
        self.sections.iter().find_map(|s| match s {
            Section::Trend { chart, .. } => Some(chart),
            _ => None,
        })
    }

    pub fn heat_map(&self) -> Option<&HeatMap> {
        self.sections.iter().find_map(|s| match s {
            Section::HeatMap { heat_map, .. } => Some(heat_map),
            _ => None,
        })
    }

    pub fn forecast(&self) -> Option<&ForecastChart> {
        self.sections.iter().find_map(|s| match s {
            Section::Forecast { chart, .. } => Some(chart),
            _ => None,
        })
    }

    pub fn model_summary(&self) -> Option<&str> {
        self.sections.iter().find_map(|s| match s {
            Section::ModelSummary { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.sections.iter().find_map(|s| match s {
            Section::Recommendation { recommendation, .. } => Some(recommendation),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halt_serializes_with_level() {
        let report = DashboardReport::new().halt(Halt::Warning("upload".to_string()));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["halt"]["level"], "warning");
        assert_eq!(json["halt"]["message"], "upload");
    }

    #[test]
    fn test_sections_tagged_by_kind() {
        let mut report = DashboardReport::new();
        report.push(Section::Footer {
            caption: "done".to_string(),
        });
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sections"][0]["kind"], "footer");
        assert_eq!(report.kinds(), vec!["footer"]);
        assert!(!report.is_halted());
    }
}
