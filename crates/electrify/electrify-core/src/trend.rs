//! Historical trend view.

use electrify_spi::{CountrySeries, Dataset, Result, Selection, TrendChart};

use crate::content::{AXIS_ACCESS, AXIS_YEAR};
use crate::table;

/// Chart of an already-filtered series.
pub fn trend_chart(series: CountrySeries) -> TrendChart {
    TrendChart {
        title: format!("{} – {}", series.country, series.metric.label()),
        x_label: AXIS_YEAR.to_string(),
        y_label: AXIS_ACCESS.to_string(),
        series,
    }
}

/// Filter `dataset` to the selected country and chart the selected metric.
pub fn country_trend(dataset: &Dataset, selection: &Selection) -> Result<TrendChart> {
    let series = table::country_series(dataset, &selection.country, selection.metric)?;
    Ok(trend_chart(series))
}
