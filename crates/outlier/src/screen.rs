//! Iterative high/low outlier removal.

use tracing::{debug, info};

use pluvia_annual::{AnnualRecord, AnnualSeries};
use pluvia_stats::{mean, sd};
use pluvia_tables::GrubbsTable;

use crate::error::OutlierError;

/// Critical values for one screener invocation, all derived from the
/// pre-removal statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreeningBounds {
    /// Grubbs critical value for the sample size (10% significance).
    pub t_crit: f64,
    /// Grubbs-Beck upper bound in depth space.
    pub x_h: f64,
    /// Grubbs-Beck lower bound in depth space.
    pub x_l: f64,
}

/// Generalized Grubbs-Beck exponent for the 10% significance level as
/// a function of sample size.
pub fn k10(n: usize) -> f64 {
    let nf = n as f64;
    -3.62201 + 6.28446 * nf.powf(0.25) - 2.49835 * nf.powf(0.5) + 0.491436 * nf.powf(0.75)
        - 0.037911 * nf
}

/// Computes the screening bounds from the series' pre-removal
/// statistics.
///
/// # Errors
///
/// Returns [`OutlierError::EmptySeries`] for an empty series,
/// [`OutlierError::DegenerateSample`] when the log-space standard
/// deviation is zero, and a table error when the sample size is not
/// covered by `table`.
pub fn screening_bounds(
    series: &AnnualSeries,
    table: &GrubbsTable,
) -> Result<ScreeningBounds, OutlierError> {
    let n = series.len();
    if n == 0 {
        return Err(OutlierError::EmptySeries);
    }

    let ln_values = series.ln_values();
    let ln_mean = mean(&ln_values);
    let ln_std = sd(&ln_values);
    if ln_std == 0.0 {
        return Err(OutlierError::DegenerateSample);
    }

    let t_crit = table.critical_value(n)?;
    let k = k10(n);
    let x_h = (ln_mean + k * ln_std).exp();
    let x_l = (ln_mean - k * ln_std).exp();

    debug!(n, t_crit, x_h, x_l, "screening bounds");
    Ok(ScreeningBounds { t_crit, x_h, x_l })
}

/// Removes high and low outliers from the annual series.
///
/// The Grubbs critical value, the Grubbs-Beck bounds, and the sample
/// mean/standard deviation are all computed once from the pre-removal
/// statistics and reused across every removal in this invocation; they
/// are deliberately not recomputed per removal.
///
/// High loop: the current maximum is dropped while its standardized
/// deviate exceeds `t_crit` AND it exceeds `x_h`. Low loop: the current
/// minimum is dropped while it falls below `x_l`. Both loops are
/// bounded by the sample size.
///
/// # Errors
///
/// Propagates [`screening_bounds`] failures. The returned series may be
/// smaller than the minimum statistical sample; the caller enforces
/// that floor.
pub fn screen_outliers(
    series: &AnnualSeries,
    table: &GrubbsTable,
) -> Result<AnnualSeries, OutlierError> {
    let bounds = screening_bounds(series, table)?;

    let values = series.pmax_values();
    let p_mean = mean(&values);
    let p_std = sd(&values);
    if p_std == 0.0 {
        return Err(OutlierError::DegenerateSample);
    }

    // Records are sorted descending, so the maximum is at the front and
    // the minimum at the back.
    let mut records: Vec<AnnualRecord> = series.records().to_vec();
    let mut removed_high = 0usize;
    let mut removed_low = 0usize;

    while let Some(first) = records.first() {
        let t_larger = (first.pmax - p_mean) / p_std;
        if t_larger <= bounds.t_crit || first.pmax <= bounds.x_h {
            break;
        }
        debug!(year = first.year, pmax = first.pmax, "removing high outlier");
        records.remove(0);
        removed_high += 1;
    }

    while let Some(last) = records.last() {
        if last.pmax >= bounds.x_l {
            break;
        }
        debug!(year = last.year, pmax = last.pmax, "removing low outlier");
        records.pop();
        removed_low += 1;
    }

    if removed_high + removed_low > 0 {
        info!(removed_high, removed_low, remaining = records.len(), "outliers removed");
    }

    Ok(series.with_records(records))
}
