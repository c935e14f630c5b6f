//! Contract module containing trait definitions for pluggable collaborators

mod forecast_provider;

pub use forecast_provider::ForecastProvider;
