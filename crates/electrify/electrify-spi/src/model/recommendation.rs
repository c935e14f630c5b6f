//! Planning recommendation narrative.

use serde::Serialize;

/// Which of the two canned messages applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    /// Forecast stays under the universal-access threshold
    BelowTarget,
    /// Forecast reaches the threshold
    OnTrack,
}

/// Narrative derived from the final forecast value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub outlook: Outlook,
    pub country: String,
    pub future_value: f64,
    pub threshold: f64,
    pub headline: String,
    pub advice: Option<String>,
    /// Static list, independent of the data
    pub suggestions: Vec<String>,
}

impl Recommendation {
    /// Headline followed by the advice sentence, if any.
    pub fn message(&self) -> String {
        match &self.advice {
            Some(advice) => format!("{} {}", self.headline, advice),
            None => self.headline.clone(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.outlook == Outlook::BelowTarget
    }
}
