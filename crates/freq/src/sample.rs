//! Sample statistics feeding the candidate distributions.

use tracing::debug;

use pluvia_annual::AnnualSeries;
use pluvia_stats::{mean, sd, skewness};
use pluvia_tables::YnSigmaTable;

use crate::error::FreqError;

/// Moments and auxiliary parameters of the screened annual-maximum
/// sample, in both depth space and log10 space.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStats {
    /// Sample size after screening.
    pub n: usize,
    /// Mean annual-maximum depth (mm).
    pub mean: f64,
    /// Sample standard deviation of depths.
    pub std: f64,
    /// Adjusted skewness of depths.
    pub g: f64,
    /// Gamma shape parameter `4 / g^2` (infinite for zero skew).
    pub alpha: f64,
    /// Mean of log10 depths.
    pub meanw: f64,
    /// Sample standard deviation of log10 depths.
    pub stdw: f64,
    /// Adjusted skewness of log10 depths.
    pub gw: f64,
    /// Gamma shape parameter in log space, `4 / gw^2`.
    pub alphaw: f64,
    /// Gumbel reduced mean for this sample size.
    pub yn: f64,
    /// Gumbel reduced standard deviation for this sample size.
    pub sigma_n: f64,
}

impl SampleStats {
    /// Computes the sample statistics from a screened series.
    ///
    /// The minimum sample size is enforced here as well as at series
    /// construction: outlier screening may have shrunk the record below
    /// the floor.
    ///
    /// # Errors
    ///
    /// - [`FreqError::InsufficientSample`] if fewer than `min_years`
    ///   records remain.
    /// - [`FreqError::DegenerateSample`] if the depths are constant.
    /// - [`FreqError::Table`] if the Gumbel reduced statistics are not
    ///   tabulated for this sample size.
    pub fn from_series(
        series: &AnnualSeries,
        gumbel: &YnSigmaTable,
        min_years: usize,
    ) -> Result<Self, FreqError> {
        let n = series.len();
        if n < min_years {
            return Err(FreqError::InsufficientSample { n, min: min_years });
        }

        let depths = series.pmax_values();
        let logs: Vec<f64> = depths.iter().map(|p| p.log10()).collect();

        let g = skewness(&depths).ok_or(FreqError::DegenerateSample)?;
        let gw = skewness(&logs).ok_or(FreqError::DegenerateSample)?;
        let reduced = gumbel.lookup(n)?;

        let stats = SampleStats {
            n,
            mean: mean(&depths),
            std: sd(&depths),
            g,
            alpha: 4.0 / (g * g),
            meanw: mean(&logs),
            stdw: sd(&logs),
            gw,
            alphaw: 4.0 / (gw * gw),
            yn: reduced.yn,
            sigma_n: reduced.sigma_n,
        };
        debug!(
            n,
            mean = stats.mean,
            std = stats.std,
            g = stats.g,
            gw = stats.gw,
            "sample statistics"
        );
        Ok(stats)
    }
}
