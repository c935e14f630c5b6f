//! Application state management for the TUI.

use std::path::{Path, PathBuf};
use std::time::Instant;

use electrify_facade::{
    Controls, Dashboard, DashboardReport, Metric, SelectionRequest, Upload,
};

use crate::services::read_upload;

/// Main application state.
pub struct App {
    /// Whether the app should quit
    pub should_quit: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Path typed into the file prompt
    pub input_buffer: String,
    /// Status message with expiry
    pub status_message: Option<(String, Instant)>,
    dashboard: Dashboard,
    /// Currently loaded upload
    pub upload: Option<Upload>,
    /// Where the upload was read from
    pub source: Option<PathBuf>,
    /// Choices offered for the loaded upload
    pub controls: Option<Controls>,
    /// Index into `controls.countries`
    pub country_index: usize,
    pub metric: Metric,
    /// Forecast horizon in years
    pub horizon: usize,
    /// Last rendered dashboard
    pub report: DashboardReport,
    /// Pipeline failure from the last refresh
    pub error: Option<String>,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        let horizon = dashboard.config().horizon.default;
        let mut app = Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            status_message: None,
            dashboard,
            upload: None,
            source: None,
            controls: None,
            country_index: 0,
            metric: Metric::default(),
            horizon,
            report: DashboardReport::new(),
            error: None,
        };
        app.refresh();
        app
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Clear expired status messages (older than 5 seconds).
    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }

    /// Check if data is loaded.
    pub fn has_data(&self) -> bool {
        self.upload.is_some()
    }

    /// Country currently selected, if any data is loaded.
    pub fn selected_country(&self) -> Option<&str> {
        self.controls
            .as_ref()
            .and_then(|c| c.countries.get(self.country_index))
            .map(String::as_str)
    }

    /// Load a CSV file and reset the country choice.
    ///
    /// A failed load keeps the previous data.
    pub fn load_path(&mut self, path: &Path) {
        let upload = match read_upload(path) {
            Ok(upload) => upload,
            Err(e) => {
                self.set_status(e.to_string());
                return;
            }
        };

        match self.dashboard.controls(&upload) {
            Ok(controls) => {
                let count = controls.countries.len();
                self.set_status(format!("Loaded {} ({} countries)", upload.name, count));
                self.controls = Some(controls);
                self.upload = Some(upload);
                self.source = Some(path.to_path_buf());
                self.country_index = 0;
                self.refresh();
            }
            Err(e) => self.set_status(format!("Failed to load {}: {}", path.display(), e)),
        }
    }

    /// Re-run the dashboard for the current selection.
    pub fn refresh(&mut self) {
        let mut request = SelectionRequest::new()
            .metric(self.metric)
            .horizon(self.horizon);
        if let Some(country) = self.selected_country() {
            request = request.country(country);
        }

        match self.dashboard.render(self.upload.as_ref(), &request) {
            Ok(report) => {
                self.report = report;
                self.error = None;
            }
            Err(e) => {
                self.report = DashboardReport::new();
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn next_country(&mut self) {
        let count = self.country_count();
        if count > 0 {
            self.country_index = (self.country_index + 1) % count;
            self.refresh();
        }
    }

    pub fn previous_country(&mut self) {
        let count = self.country_count();
        if count > 0 {
            self.country_index = (self.country_index + count - 1) % count;
            self.refresh();
        }
    }

    pub fn next_metric(&mut self) {
        self.metric = self.metric.next();
        self.set_status(format!("Metric: {}", self.metric.label()));
        self.refresh();
    }

    pub fn increase_horizon(&mut self) {
        if self.horizon < self.dashboard.config().horizon.max {
            self.horizon += 1;
            self.refresh();
        }
    }

    pub fn decrease_horizon(&mut self) {
        if self.horizon > self.dashboard.config().horizon.min {
            self.horizon -= 1;
            self.refresh();
        }
    }

    fn country_count(&self) -> usize {
        self.controls.as_ref().map_or(0, |c| c.countries.len())
    }
}

/// Input mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    FileDialog,
}
