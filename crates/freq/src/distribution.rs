//! Candidate probability distributions and their frequency factors.

use statrs::distribution::{ContinuousCDF, Gamma, Normal};

use crate::position::PlottingPosition;
use crate::sample::SampleStats;

/// The five candidate distributions scored against the observed sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    LogNormal,
    Pearson3,
    LogPearson3,
    GumbelTheoretical,
    GumbelFinite,
}

impl Distribution {
    /// All candidates in evaluation order. Ties in the selection score
    /// resolve to the earliest entry.
    pub const ALL: [Distribution; 5] = [
        Distribution::LogNormal,
        Distribution::Pearson3,
        Distribution::LogPearson3,
        Distribution::GumbelTheoretical,
        Distribution::GumbelFinite,
    ];

    /// Human-readable name used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Distribution::LogNormal => "log-normal",
            Distribution::Pearson3 => "Pearson Type III",
            Distribution::LogPearson3 => "log-Pearson Type III",
            Distribution::GumbelTheoretical => "Gumbel (theoretical)",
            Distribution::GumbelFinite => "Gumbel (finite sample)",
        }
    }

    /// Whether the frequency factor applies to log10 moments rather
    /// than depth-space moments.
    pub fn uses_log_space(&self) -> bool {
        matches!(self, Distribution::LogNormal | Distribution::LogPearson3)
    }

    /// Frequency factor K for a non-exceedance probability.
    ///
    /// The factor converts sample moments to a quantile: in depth space
    /// `x = mean + K * std`, in log10 space `x = 10^(meanw + K * stdw)`.
    /// Returns `None` when the factor is undefined for this sample
    /// (zero skew makes the gamma shape parameter non-finite).
    pub fn frequency_factor(
        &self,
        stats: &SampleStats,
        non_exceedance: f64,
        exceedance: f64,
    ) -> Option<f64> {
        match self {
            Distribution::LogNormal => Some(std_normal().inverse_cdf(non_exceedance)),
            Distribution::Pearson3 => {
                pearson_factor(stats.g, stats.alpha, non_exceedance, exceedance)
            }
            Distribution::LogPearson3 => {
                pearson_factor(stats.gw, stats.alphaw, non_exceedance, exceedance)
            }
            Distribution::GumbelTheoretical => {
                Some(0.7797 * reduced_variate(non_exceedance) - 0.45)
            }
            Distribution::GumbelFinite => {
                Some((reduced_variate(non_exceedance) - stats.yn) / stats.sigma_n)
            }
        }
    }

    /// Fitted depth at one plotting position.
    pub fn fitted_depth(&self, stats: &SampleStats, position: &PlottingPosition) -> Option<f64> {
        let k = self.frequency_factor(stats, position.non_exceedance, position.exceedance)?;
        Some(if self.uses_log_space() {
            10f64.powf(stats.meanw + stats.stdw * k)
        } else {
            stats.mean + stats.std * k
        })
    }

    /// Fitted depths for the whole sample, in record order. `None` when
    /// the distribution cannot be fitted to this sample.
    pub fn fitted_depths(
        &self,
        stats: &SampleStats,
        positions: &[PlottingPosition],
    ) -> Option<Vec<f64>> {
        positions.iter().map(|p| self.fitted_depth(stats, p)).collect()
    }
}

fn std_normal() -> Normal {
    Normal::new(0.0, 1.0).expect("standard normal parameters are valid")
}

/// Gumbel reduced variate `y = -ln(-ln(p))` for non-exceedance `p`.
fn reduced_variate(non_exceedance: f64) -> f64 {
    -(-non_exceedance.ln()).ln()
}

/// Pearson Type III frequency factor `K = (g/2) * (y - alpha)` where `y`
/// is a unit-scale gamma quantile. Positive skew reads the quantile at
/// the non-exceedance probability, negative skew at the exceedance
/// probability.
fn pearson_factor(g: f64, alpha: f64, non_exceedance: f64, exceedance: f64) -> Option<f64> {
    // Zero skew sends alpha to infinity; statrs accepts an infinite
    // shape and its quantiles come back NaN, so reject it here.
    if !alpha.is_finite() || alpha <= 0.0 {
        return None;
    }
    let gamma = Gamma::new(alpha, 1.0).ok()?;
    let p = if g > 0.0 { non_exceedance } else { exceedance };
    let y = gamma.inverse_cdf(p);
    Some((g / 2.0) * (y - alpha))
}
