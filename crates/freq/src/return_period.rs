//! Return-period grid and frequency-factor coefficients.

use pluvia_stats::round4;

use crate::distribution::Distribution;
use crate::error::FreqError;
use crate::sample::SampleStats;

/// Return periods (years) the pipeline reports on.
pub const RETURN_PERIODS: [u32; 8] = [2, 5, 10, 20, 30, 50, 75, 100];

/// Frequency factor of the selected distribution at one return period.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ReturnPeriodRow {
    /// Return period in years.
    pub tr: u32,
    /// Annual exceedance probability `1 / tr`.
    pub exceedance: f64,
    /// Annual non-exceedance probability.
    pub non_exceedance: f64,
    /// Frequency factor K, rounded to four decimals.
    pub k: f64,
}

/// Evaluates the selected distribution's frequency factor at every
/// return period in [`RETURN_PERIODS`].
///
/// # Errors
///
/// Returns [`FreqError::NoDistributionSelected`] if the factor is
/// undefined for this sample, which only happens for the Pearson
/// variants on a zero-skew sample.
pub fn coefficients(
    distribution: Distribution,
    stats: &SampleStats,
) -> Result<Vec<ReturnPeriodRow>, FreqError> {
    RETURN_PERIODS
        .iter()
        .map(|&tr| {
            let exceedance = 1.0 / f64::from(tr);
            let non_exceedance = 1.0 - exceedance;
            let k = distribution
                .frequency_factor(stats, non_exceedance, exceedance)
                .ok_or(FreqError::NoDistributionSelected)?;
            Ok(ReturnPeriodRow {
                tr,
                exceedance,
                non_exceedance,
                k: round4(k),
            })
        })
        .collect()
}
