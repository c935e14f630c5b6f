//! ARIMA (AutoRegressive Integrated Moving Average) forecast provider
//!
//! - **AR**: Yule-Walker coefficients solved with Levinson-Durbin
//! - **I**: `d`-fold differencing, undone by cumulative sums
//! - **MA**: lag autocorrelation of the AR residuals, bounded for stability
//!
//! The mean of the differenced series is kept as a drift constant, so a
//! steadily rising access rate keeps rising in the projection.

use std::f64::consts::PI;

use electrify_spi::{
    DashboardError, ForecastProvider, ModelOrder, ModelSummary, ProviderForecast, Result,
};

/// ARIMA model for short annual series
#[derive(Debug, Clone)]
pub struct Arima {
    order: ModelOrder,
    /// AR coefficients
    ar_coeffs: Vec<f64>,
    /// MA coefficients
    ma_coeffs: Vec<f64>,
    /// Drift on the differenced scale
    constant: f64,
    /// Number of original observations
    nobs: usize,
    /// Last value of each differencing level, original scale first
    levels: Vec<f64>,
    /// Differenced data
    differenced_data: Vec<f64>,
    /// Residuals of the full ARMA fit
    residuals: Vec<f64>,
    fitted: bool,
}

impl Arima {
    /// Create an unfitted model; orders are bounded by [`ModelOrder::validate`].
    pub fn new(order: ModelOrder) -> Result<Self> {
        order.validate()?;
        Ok(Self {
            order,
            ar_coeffs: vec![0.0; order.p],
            ma_coeffs: vec![0.0; order.q],
            constant: 0.0,
            nobs: 0,
            levels: Vec::new(),
            differenced_data: Vec::new(),
            residuals: Vec::new(),
            fitted: false,
        })
    }

    /// Fewest observations the estimator can work with.
    pub fn min_required(&self) -> usize {
        self.order.p + self.order.d + self.order.q + 2
    }

    fn difference(data: &[f64]) -> Vec<f64> {
        data.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Reverse differencing to get original scale
    fn undifference(&self, forecasts: &[f64]) -> Vec<f64> {
        let mut result = forecasts.to_vec();
        for &last in self.levels.iter().rev() {
            let mut acc = last;
            for v in result.iter_mut() {
                acc += *v;
                *v = acc;
            }
        }
        result
    }

    /// Estimate AR coefficients using Yule-Walker equations
    fn estimate_ar_coefficients(&self, data: &[f64]) -> Vec<f64> {
        let p = self.order.p;
        if p == 0 {
            return Vec::new();
        }

        let n = data.len();
        let mean: f64 = data.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = data.iter().map(|x| x - mean).collect();

        let mut autocorr = vec![0.0; p + 1];
        for (k, ac) in autocorr.iter_mut().enumerate() {
            let sum: f64 = (k..n).map(|i| centered[i] * centered[i - k]).sum();
            *ac = sum / n as f64;
        }

        // Levinson-Durbin
        let mut coeffs = vec![0.0; p];
        if autocorr[0].abs() > 1e-10 {
            coeffs[0] = autocorr[1] / autocorr[0];

            for k in 1..p {
                let mut sum = autocorr[k + 1];
                for j in 0..k {
                    sum -= coeffs[j] * autocorr[k - j];
                }

                let mut denom = autocorr[0];
                for j in 0..k {
                    denom -= coeffs[j] * autocorr[j + 1];
                }

                if denom.abs() > 1e-10 {
                    let new_coeff = sum / denom;
                    let old_coeffs = coeffs.clone();
                    coeffs[k] = new_coeff;
                    for j in 0..k {
                        coeffs[j] = old_coeffs[j] - new_coeff * old_coeffs[k - 1 - j];
                    }
                }
            }
        }

        coeffs
    }

    /// Estimate MA coefficients from residuals
    fn estimate_ma_coefficients(&self, residuals: &[f64]) -> Vec<f64> {
        let q = self.order.q;
        if q == 0 || residuals.is_empty() {
            return vec![0.0; q];
        }

        let n = residuals.len();
        let mean: f64 = residuals.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = residuals.iter().map(|x| x - mean).collect();
        let var: f64 = centered.iter().map(|x| x * x).sum::<f64>() / n as f64;

        let mut coeffs = vec![0.0; q];
        if var.abs() > 1e-10 {
            for (k, coeff) in coeffs.iter_mut().enumerate() {
                let sum: f64 = ((k + 1)..n)
                    .map(|i| centered[i] * centered[i - k - 1])
                    .sum();
                *coeff = ((sum / n as f64) / var).clamp(-0.99, 0.99);
            }
        }

        coeffs
    }

    /// One-step-ahead errors on the differenced scale for the given MA terms.
    fn residuals_for(&self, ma_coeffs: &[f64]) -> Vec<f64> {
        let p = self.order.p;
        let data = &self.differenced_data;
        let mut residuals = vec![0.0; data.len()];

        for i in p..data.len() {
            let mut prediction = self.constant;
            for (j, phi) in self.ar_coeffs.iter().enumerate() {
                prediction += phi * (data[i - j - 1] - self.constant);
            }
            for (j, theta) in ma_coeffs.iter().enumerate() {
                if i > j {
                    prediction += theta * residuals[i - j - 1];
                }
            }
            residuals[i] = data[i] - prediction;
        }

        residuals
    }

    /// Fit the model to historical data
    pub fn fit(&mut self, data: &[f64]) -> Result<()> {
        let min_required = self.min_required();
        if data.len() < min_required {
            return Err(DashboardError::InsufficientData {
                required: min_required,
                actual: data.len(),
            });
        }

        if data.iter().any(|x| !x.is_finite()) {
            return Err(DashboardError::Forecast(
                "Data contains NaN or infinite values".to_string(),
            ));
        }

        self.nobs = data.len();
        self.levels.clear();
        let mut current = data.to_vec();
        for _ in 0..self.order.d {
            if let Some(&last) = current.last() {
                self.levels.push(last);
            }
            current = Self::difference(&current);
        }
        self.differenced_data = current;

        let n = self.differenced_data.len();
        self.constant = self.differenced_data.iter().sum::<f64>() / n as f64;
        self.ar_coeffs = self.estimate_ar_coefficients(&self.differenced_data);

        let ar_residuals = self.residuals_for(&[]);
        self.ma_coeffs = self.estimate_ma_coefficients(&ar_residuals[self.order.p..]);
        self.residuals = self.residuals_for(&self.ma_coeffs);

        let estimates_finite = self.constant.is_finite()
            && self.ar_coeffs.iter().all(|c| c.is_finite())
            && self.ma_coeffs.iter().all(|c| c.is_finite());
        if !estimates_finite {
            return Err(DashboardError::Forecast(
                "ARIMA estimation produced non-finite coefficients".to_string(),
            ));
        }

        self.fitted = true;
        Ok(())
    }

    /// Predict future values
    pub fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(DashboardError::Forecast(
                "Model must be fitted before prediction".to_string(),
            ));
        }

        if steps == 0 {
            return Ok(Vec::new());
        }

        let n = self.differenced_data.len();
        let mut extended = self.differenced_data.clone();
        let mut extended_residuals = self.residuals.clone();

        for _ in 0..steps {
            let mut forecast = self.constant;

            for (j, phi) in self.ar_coeffs.iter().enumerate() {
                let idx = extended.len() - j - 1;
                forecast += phi * (extended[idx] - self.constant);
            }

            for (j, theta) in self.ma_coeffs.iter().enumerate() {
                if extended_residuals.len() > j {
                    let idx = extended_residuals.len() - j - 1;
                    forecast += theta * extended_residuals[idx];
                }
            }

            extended.push(forecast);
            extended_residuals.push(0.0); // future shocks are zero
        }

        let forecasts = self.undifference(&extended[n..]);
        if forecasts.iter().any(|v| !v.is_finite()) {
            return Err(DashboardError::Forecast(
                "ARIMA projection diverged".to_string(),
            ));
        }
        Ok(forecasts)
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    pub fn order(&self) -> ModelOrder {
        self.order
    }

    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coeffs
    }

    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coeffs
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Gaussian diagnostics of the fitted residuals.
    pub fn summary(&self) -> Result<ModelSummary> {
        if !self.fitted {
            return Err(DashboardError::Forecast(
                "Model must be fitted before summarizing".to_string(),
            ));
        }

        let effective = &self.residuals[self.order.p..];
        let m = effective.len().max(1) as f64;
        let sigma2 = effective.iter().map(|e| e * e).sum::<f64>() / m;
        let log_likelihood = -0.5 * m * ((2.0 * PI * sigma2.max(f64::EPSILON)).ln() + 1.0);
        let k = (self.order.p + self.order.q + 2) as f64;

        let mut params = vec![("const".to_string(), self.constant)];
        params.extend(
            self.ar_coeffs
                .iter()
                .enumerate()
                .map(|(i, c)| (format!("ar.L{}", i + 1), *c)),
        );
        params.extend(
            self.ma_coeffs
                .iter()
                .enumerate()
                .map(|(i, c)| (format!("ma.L{}", i + 1), *c)),
        );
        params.push(("sigma2".to_string(), sigma2));

        Ok(ModelSummary {
            order: self.order,
            dep_variable: String::new(),
            nobs: self.nobs,
            sample: None,
            params,
            log_likelihood,
            aic: -2.0 * log_likelihood + 2.0 * k,
            bic: -2.0 * log_likelihood + k * m.ln(),
        })
    }
}

/// Default [`ForecastProvider`]: fits a fresh [`Arima`] per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArimaProvider;

impl ForecastProvider for ArimaProvider {
    fn name(&self) -> &str {
        "arima"
    }

    fn min_observations(&self, order: ModelOrder) -> usize {
        order.p + order.d + order.q + 2
    }

    fn forecast(&self, values: &[f64], order: ModelOrder, horizon: usize) -> Result<ProviderForecast> {
        let mut model = Arima::new(order)?;
        model.fit(values)?;
        Ok(ProviderForecast {
            values: model.predict(horizon)?,
            summary: model.summary()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rising() -> Vec<f64> {
        vec![55.0, 58.0, 61.0, 63.0, 66.0, 69.0, 72.0, 75.0]
    }

    #[test]
    fn test_arima_creation() {
        assert!(Arima::new(ModelOrder::new(1, 1, 1)).is_ok());
        assert!(Arima::new(ModelOrder::new(11, 0, 0)).is_err());
    }

    #[test]
    fn test_arima_fit_predict() {
        let mut model = Arima::new(ModelOrder::default()).unwrap();
        model.fit(&rising()).unwrap();
        assert!(model.is_fitted());

        let forecast = model.predict(5).unwrap();
        assert_eq!(forecast.len(), 5);
        // drift keeps a rising series rising
        assert!(forecast[0] > 75.0);
        assert!(forecast.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_linear_series_continues_linearly() {
        let data: Vec<f64> = (0..8).map(|i| 40.0 + 2.0 * i as f64).collect();
        let mut model = Arima::new(ModelOrder::default()).unwrap();
        model.fit(&data).unwrap();
        let forecast = model.predict(3).unwrap();
        for (i, v) in forecast.iter().enumerate() {
            assert!((v - (54.0 + 2.0 * (i + 1) as f64)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_second_order_differencing_undone() {
        // quadratic: second differences are constant 2
        let data: Vec<f64> = (0..8).map(|i| (i * i) as f64).collect();
        let mut model = Arima::new(ModelOrder::new(0, 2, 0)).unwrap();
        model.fit(&data).unwrap();
        let forecast = model.predict(2).unwrap();
        assert!((forecast[0] - 64.0).abs() < 1e-9);
        assert!((forecast[1] - 81.0).abs() < 1e-9);
    }

    #[test]
    fn test_too_short() {
        let mut model = Arima::new(ModelOrder::default()).unwrap();
        let err = model.fit(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, DashboardError::InsufficientData { required: 5, actual: 3 }));
    }

    #[test]
    fn test_non_finite_input_fails() {
        let mut data = rising();
        data[3] = f64::NAN;
        let mut model = Arima::new(ModelOrder::default()).unwrap();
        assert!(matches!(model.fit(&data), Err(DashboardError::Forecast(_))));
    }

    #[test]
    fn test_predict_before_fit() {
        let model = Arima::new(ModelOrder::default()).unwrap();
        assert!(model.predict(3).is_err());
    }

    #[test]
    fn test_summary_parameters() {
        let mut model = Arima::new(ModelOrder::default()).unwrap();
        model.fit(&rising()).unwrap();
        let summary = model.summary().unwrap();
        let names: Vec<&str> = summary.params.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["const", "ar.L1", "ma.L1", "sigma2"]);
        assert_eq!(summary.nobs, 8);
        assert!(summary.log_likelihood.is_finite());
        assert!(summary.aic.is_finite());
        assert!(summary.bic.is_finite());
    }

    #[test]
    fn test_provider_returns_horizon_values() {
        let out = ArimaProvider
            .forecast(&rising(), ModelOrder::default(), 15)
            .unwrap();
        assert_eq!(out.values.len(), 15);
    }
}
