//! Scoring and selection of the best-fitting distribution.

use tracing::{debug, info};

use pluvia_annual::AnnualSeries;
use pluvia_stats::{pearson_correlation, round4};

use crate::distribution::Distribution;
use crate::error::FreqError;
use crate::position::{plotting_positions, PlottingPosition};
use crate::sample::SampleStats;

/// One scored candidate distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionFit {
    pub distribution: Distribution,
    /// Fitted depths at the sample's plotting positions, record order.
    pub fitted: Vec<f64>,
    /// Coefficient of determination against the observed depths,
    /// rounded to four decimals.
    pub r2: f64,
}

/// Fits every candidate distribution to the sample and scores it by
/// squared Pearson correlation between observed and fitted depths.
/// Candidates whose factors are undefined for this sample are skipped.
pub fn fit_candidates(
    series: &AnnualSeries,
    stats: &SampleStats,
    positions: &[PlottingPosition],
) -> Vec<DistributionFit> {
    let observed = series.pmax_values();
    let mut fits = Vec::new();
    for dist in Distribution::ALL {
        let Some(fitted) = dist.fitted_depths(stats, positions) else {
            debug!(distribution = dist.display_name(), "candidate not fittable");
            continue;
        };
        let Some(r) = pearson_correlation(&observed, &fitted) else {
            debug!(distribution = dist.display_name(), "correlation undefined");
            continue;
        };
        let r2 = round4(r * r);
        debug!(distribution = dist.display_name(), r2, "candidate scored");
        fits.push(DistributionFit {
            distribution: dist,
            fitted,
            r2,
        });
    }
    fits
}

/// Picks the candidate with the highest score. On ties the candidate
/// evaluated first wins.
///
/// # Errors
///
/// Returns [`FreqError::NoDistributionSelected`] if no candidate was
/// fittable.
pub fn select_distribution(candidates: &[DistributionFit]) -> Result<&DistributionFit, FreqError> {
    let mut best: Option<&DistributionFit> = None;
    for fit in candidates {
        if best.map_or(true, |b| fit.r2 > b.r2) {
            best = Some(fit);
        }
    }
    let best = best.ok_or(FreqError::NoDistributionSelected)?;
    info!(
        distribution = best.distribution.display_name(),
        r2 = best.r2,
        "distribution selected"
    );
    Ok(best)
}

/// Convenience wrapper: positions, candidate fits and selection in one
/// call, returning the winning fit by value.
pub fn fit_and_select(
    series: &AnnualSeries,
    stats: &SampleStats,
) -> Result<DistributionFit, FreqError> {
    let positions = plotting_positions(series.len());
    let candidates = fit_candidates(series, stats, &positions);
    select_distribution(&candidates).cloned()
}
