//! Goodness-of-fit diagnostics for the fitted IDF curves.

use pluvia_stats::{linear_regression, mean};

use crate::equation::relative_error;

/// OLS line of calculated against observed intensities.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

/// Mean absolute relative error between calculated and observed
/// intensities, in percent. Slices must be the same length.
pub fn mean_relative_error(real: &[f64], calculated: &[f64]) -> f64 {
    let errors: Vec<f64> = real
        .iter()
        .zip(calculated.iter())
        .map(|(&r, &c)| relative_error(c, r))
        .collect();
    mean(&errors)
}

/// Nash-Sutcliffe efficiency of the calculated intensities. Returns
/// `None` when the observed values are constant.
pub fn nash_sutcliffe(real: &[f64], calculated: &[f64]) -> Option<f64> {
    let real_mean = mean(real);
    let mut residual = 0.0;
    let mut spread = 0.0;
    for (&r, &c) in real.iter().zip(calculated.iter()) {
        residual += (r - c) * (r - c);
        spread += (r - real_mean) * (r - real_mean);
    }
    if spread == 0.0 {
        return None;
    }
    Some(1.0 - residual / spread)
}

/// Fits calculated intensities against observed ones. Returns `None`
/// when the observed values are constant.
pub fn fit_regression(real: &[f64], calculated: &[f64]) -> Option<Regression> {
    linear_regression(real, calculated).map(|(slope, intercept)| Regression { slope, intercept })
}
