//! Access metric definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// One of the fixed electricity-access percentage columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Share of the whole population with access
    #[default]
    ElectricityAccess,
    /// Share of the rural population with access
    RuralAccess,
    /// Share of the urban population with access
    UrbanAccess,
}

impl Metric {
    /// Column name in the (lowercased) dataset.
    pub fn field(self) -> &'static str {
        match self {
            Metric::ElectricityAccess => "electricity_access",
            Metric::RuralAccess => "rural_access",
            Metric::UrbanAccess => "urban_access",
        }
    }

    /// Human-readable label used in chart titles.
    pub fn label(self) -> &'static str {
        match self {
            Metric::ElectricityAccess => "Electricity Access",
            Metric::RuralAccess => "Rural Access",
            Metric::UrbanAccess => "Urban Access",
        }
    }

    pub fn all() -> &'static [Metric] {
        &[
            Metric::ElectricityAccess,
            Metric::RuralAccess,
            Metric::UrbanAccess,
        ]
    }

    pub fn next(self) -> Self {
        match self {
            Metric::ElectricityAccess => Metric::RuralAccess,
            Metric::RuralAccess => Metric::UrbanAccess,
            Metric::UrbanAccess => Metric::ElectricityAccess,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

impl FromStr for Metric {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Metric::all()
            .iter()
            .copied()
            .find(|m| m.field() == needle)
            .ok_or_else(|| DashboardError::InvalidParameter {
                name: "metric".to_string(),
                reason: format!(
                    "'{}' is not one of electricity_access, rural_access, urban_access",
                    s
                ),
            })
    }
}
