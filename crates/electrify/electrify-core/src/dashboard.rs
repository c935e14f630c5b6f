//! The dashboard pipeline.
//!
//! Every control change re-runs [`Dashboard::render`] from scratch: a pure
//! function of the upload, the selection and the configuration. Only CSV
//! parsing is memoized, through the [`DatasetCache`].

use std::sync::Arc;

use electrify_spi::{
    Controls, DashboardConfig, DashboardReport, Dataset, ForecastChart, ForecastProvider, Halt,
    Result, Section, Selection, SelectionRequest, Upload,
};

use crate::cache::DatasetCache;
use crate::content;
use crate::forecast::{ArimaProvider, ForecastEngine};
use crate::heat_map;
use crate::recommendation::recommend;
use crate::selection;
use crate::table;
use crate::trend;

/// Pipeline from upload to report.
#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    engine: ForecastEngine,
    cache: DatasetCache,
}

impl Dashboard {
    /// Dashboard backed by the default ARIMA provider.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        Self::with_provider(config, Arc::new(ArimaProvider))
    }

    pub fn with_provider(config: DashboardConfig, provider: Arc<dyn ForecastProvider>) -> Result<Self> {
        config.validate()?;
        let engine = ForecastEngine::new(provider, config.order, config.min_observations);
        let cache = DatasetCache::new(config.cache_capacity);
        Ok(Self {
            config,
            engine,
            cache,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn engine(&self) -> &ForecastEngine {
        &self.engine
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    /// Parse `upload`, reusing an earlier parse of identical bytes.
    pub fn load(&self, upload: &Upload) -> Result<Arc<Dataset>> {
        self.cache.get_or_load(upload)
    }

    /// Choices offered for `upload`.
    pub fn controls(&self, upload: &Upload) -> Result<Controls> {
        let dataset = self.load(upload)?;
        selection::controls(&dataset, &self.config)
    }

    /// Run the whole page for an optional upload.
    ///
    /// A missing or empty upload halts after the title with a warning. Any
    /// other failure is returned as an error.
    pub fn render(&self, upload: Option<&Upload>, request: &SelectionRequest) -> Result<DashboardReport> {
        let mut report = DashboardReport::new();
        report.push(title_section());

        let upload = match upload {
            Some(upload) if !upload.is_empty() => upload,
            _ => {
                tracing::warn!("no upload supplied");
                return Ok(report.halt(Halt::Warning(content::UPLOAD_PROMPT.to_string())));
            }
        };

        let dataset = self.load(upload)?;
        let controls = selection::controls(&dataset, &self.config)?;
        let selection = selection::resolve(&controls, request)?;
        self.render_views(report, &dataset, &selection)
    }

    fn render_views(
        &self,
        mut report: DashboardReport,
        dataset: &Dataset,
        selection: &Selection,
    ) -> Result<DashboardReport> {
        tracing::debug!(
            country = %selection.country,
            metric = %selection.metric,
            horizon = selection.horizon,
            "rendering dashboard"
        );

        let series = table::country_series(dataset, &selection.country, selection.metric)?;
        report.push(Section::Trend {
            header: content::TREND_HEADER.to_string(),
            chart: trend::trend_chart(series.clone()),
            interpretation: content::TREND_INTERPRETATION.to_string(),
        });

        report.push(Section::HeatMap {
            header: content::HEAT_MAP_HEADER.to_string(),
            title: content::HEAT_MAP_TITLE.to_string(),
            heat_map: heat_map::pivot(dataset, selection.metric)?,
            insight: content::HEAT_MAP_INSIGHT.to_string(),
        });

        if !self.engine.is_forecastable(&series) {
            tracing::warn!(
                country = %selection.country,
                observations = series.len(),
                required = self.engine.required_observations(),
                "series too short to forecast"
            );
            return Ok(report.halt(Halt::Error(content::NOT_ENOUGH_DATA.to_string())));
        }

        let forecast = self.engine.forecast(&series, selection.horizon)?;
        let summary_text = forecast.summary.to_string();
        let future_value = forecast.final_value();

        report.push(Section::Forecast {
            header: content::FORECAST_HEADER.to_string(),
            chart: ForecastChart {
                title: format!("{} – Electrification Forecast", selection.country),
                x_label: content::AXIS_YEAR.to_string(),
                y_label: content::AXIS_ACCESS.to_string(),
                history: series,
                forecast,
            },
            explanation: content::FORECAST_EXPLANATION.to_string(),
        });

        report.push(Section::ModelSummary {
            header: content::SUMMARY_HEADER.to_string(),
            text: summary_text,
        });

        if let Some(future_value) = future_value {
            report.push(Section::Recommendation {
                header: content::INSIGHTS_HEADER.to_string(),
                recommendation: recommend(&selection.country, future_value, self.config.threshold),
            });
        }

        report.push(Section::Footer {
            caption: content::FOOTER_CAPTION.to_string(),
        });
        Ok(report)
    }
}

fn title_section() -> Section {
    Section::Title {
        title: content::PAGE_TITLE.to_string(),
        description: content::DESCRIPTION.to_string(),
    }
}
