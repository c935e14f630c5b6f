//! Fixed page copy.

pub const PAGE_TITLE: &str = "Electrification Forecasting Dashboard";

pub const DESCRIPTION: &str = "\
This dashboard analyzes historical electricity access data and predicts future
electrification needs using time-series models.

Project: Kubeflow – AI-Driven Electrification Planning
Audience: Policymakers, researchers, energy planners";

pub const UPLOAD_PROMPT: &str = "Please upload a CSV file to continue.";

pub const TREND_HEADER: &str = "Historical Electrification Trends";

pub const TREND_INTERPRETATION: &str = "\
This plot shows how electricity access has evolved over time.
Upward trends indicate infrastructure expansion, while flat regions
suggest stagnation or policy constraints.";

pub const HEAT_MAP_HEADER: &str = "Electrification Heat Map";

pub const HEAT_MAP_TITLE: &str = "Electricity Access Heat Map";

pub const HEAT_MAP_INSIGHT: &str = "\
Darker regions indicate higher electricity access. Persistent light areas
highlight regions requiring urgent electrification investment.";

pub const FORECAST_HEADER: &str = "Forecasting Future Electrification";

pub const NOT_ENOUGH_DATA: &str = "Not enough data points for forecasting.";

pub const FORECAST_EXPLANATION: &str = "\
The dashed line represents projected electricity access assuming historical
patterns continue. Forecast uncertainty increases further into the future,
so results should guide planning, not replace policy judgment.";

pub const SUMMARY_HEADER: &str = "Model Summary";

pub const INSIGHTS_HEADER: &str = "Planning Insights";

pub const FOOTER_CAPTION: &str =
    "Kubeflow Electrification Project | Streamlit Dashboard | AI-assisted planning";

pub const AXIS_YEAR: &str = "Year";

pub const AXIS_ACCESS: &str = "Access (%)";

pub const LEGEND_HISTORICAL: &str = "Historical";

pub const LEGEND_FORECAST: &str = "Forecast";
