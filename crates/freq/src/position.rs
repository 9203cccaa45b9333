//! Weibull plotting positions over the descending-sorted sample.

use pluvia_stats::round4;

/// Plotting position of one ranked record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlottingPosition {
    /// Zero-based rank in the descending-sorted sample (0 = largest).
    pub rank: usize,
    /// Exceedance probability `(rank + 1) / (n + 1)`, rounded to four
    /// decimals.
    pub exceedance: f64,
    /// Complement of the exceedance probability.
    pub non_exceedance: f64,
}

/// Computes the Weibull plotting positions for a sample of size `n`.
///
/// Positions follow record order, i.e. the largest depth gets the
/// smallest exceedance probability.
pub fn plotting_positions(n: usize) -> Vec<PlottingPosition> {
    (0..n)
        .map(|rank| {
            let exceedance = round4((rank + 1) as f64 / (n + 1) as f64);
            PlottingPosition {
                rank,
                exceedance,
                non_exceedance: 1.0 - exceedance,
            }
        })
        .collect()
}
