//! Regime evaluation and JSON report assembly.

use serde::Serialize;

use pluvia_annual::AnnualSeries;
use pluvia_freq::{plotting_positions, DistributionFit, SampleStats};

use crate::diagnostics::{fit_regression, mean_relative_error, nash_sutcliffe, Regression};
use crate::disaggregate::{IdfRow, Regime};
use crate::equation::ChowParams;
use crate::error::VenTeChowError;
use crate::optimize::{fit_regime, FitConfig};

/// One regime's fitted curve with its diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimeFit {
    pub params: ChowParams,
    /// Observed (disaggregated) intensities, sorted ascending.
    pub i_real: Vec<f64>,
    /// Curve intensities, sorted ascending.
    pub i_calculated: Vec<f64>,
    /// Mean absolute relative error in percent.
    pub mean_relative_error: f64,
    /// Nash-Sutcliffe efficiency; `None` if undefined.
    pub ns: Option<f64>,
    /// OLS line of calculated against observed; `None` if undefined.
    pub regression: Option<Regression>,
}

/// Evaluates fitted parameters against one regime's rows.
///
/// # Errors
///
/// Returns [`VenTeChowError::EmptyRegime`] if no row belongs to
/// `regime`.
pub fn evaluate_regime(
    rows: &[IdfRow],
    regime: Regime,
    params: ChowParams,
) -> Result<RegimeFit, VenTeChowError> {
    let mut real = Vec::new();
    let mut calculated = Vec::new();
    for row in rows.iter().filter(|r| r.regime == regime) {
        real.push(row.intensity);
        calculated.push(params.intensity(f64::from(row.tr), row.td_minutes));
    }
    if real.is_empty() {
        return Err(VenTeChowError::EmptyRegime {
            regime: regime.label(),
        });
    }

    // Diagnostics pair rows positionally, so compute them before the
    // series are sorted for presentation.
    let mre = mean_relative_error(&real, &calculated);
    let ns = nash_sutcliffe(&real, &calculated);
    let regression = fit_regression(&real, &calculated);

    real.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    calculated.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(RegimeFit {
        params,
        i_real: real,
        i_calculated: calculated,
        mean_relative_error: mre,
        ns,
        regression,
    })
}

/// Both fitted regimes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveFit {
    pub short: RegimeFit,
    pub long: RegimeFit,
}

/// Fits and evaluates both duration regimes of the IDF table.
pub fn fit_curves(rows: &[IdfRow], config: &FitConfig) -> Result<CurveFit, VenTeChowError> {
    let short_params = fit_regime(rows, Regime::Short, config)?;
    let long_params = fit_regime(rows, Regime::Long, config)?;
    Ok(CurveFit {
        short: evaluate_regime(rows, Regime::Short, short_params)?,
        long: evaluate_regime(rows, Regime::Long, long_params)?,
    })
}

/// Observed-versus-fitted data for the frequency plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphData {
    /// Exceedance probabilities in percent, record order (largest
    /// depth first).
    pub f_percent: Vec<f64>,
    /// Observed annual maxima, ascending.
    pub p_max: Vec<f64>,
    /// Depths fitted by the selected distribution, ascending.
    pub p_dist: Vec<f64>,
}

/// The full analysis report serialized for consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdfReport {
    pub graph_data: GraphData,
    pub short_durations: RegimeFit,
    pub long_durations: RegimeFit,
    pub distribution: String,
    pub sample_size: usize,
    pub sample_size_above_30: bool,
    pub used_raw_fallback: bool,
    pub first_year: i32,
    pub last_year: i32,
    pub empty_years: Vec<i32>,
}

impl IdfReport {
    /// Assembles the report from the pipeline's intermediate products.
    pub fn assemble(
        series: &AnnualSeries,
        stats: &SampleStats,
        best: &DistributionFit,
        curves: CurveFit,
    ) -> Self {
        let f_percent: Vec<f64> = plotting_positions(series.len())
            .iter()
            .map(|p| 100.0 * p.exceedance)
            .collect();
        let mut p_max = series.pmax_values();
        p_max.reverse();
        let mut p_dist = best.fitted.clone();
        p_dist.reverse();

        IdfReport {
            graph_data: GraphData {
                f_percent,
                p_max,
                p_dist,
            },
            short_durations: curves.short,
            long_durations: curves.long,
            distribution: best.distribution.display_name().to_string(),
            sample_size: stats.n,
            sample_size_above_30: stats.n >= 30,
            used_raw_fallback: series.used_raw_fallback(),
            first_year: series.first_year(),
            last_year: series.last_year(),
            empty_years: series.empty_years().to_vec(),
        }
    }
}

/// Terminal result of one station analysis: either a full report or a
/// sentinel for records too short to analyze.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Report(IdfReport),
    InsufficientData { reason: String },
}

impl AnalysisOutcome {
    /// Pretty-printed JSON rendition of the outcome.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pluvia_annual::{AnnualRecord, AnnualSeries};
    use pluvia_freq::Distribution;

    fn series_and_fit() -> (AnnualSeries, SampleStats, DistributionFit) {
        let depths = [
            120.0, 104.0, 96.0, 88.0, 82.0, 76.0, 71.0, 66.0, 61.0, 56.0, 51.0, 45.0,
        ];
        let records: Vec<AnnualRecord> = depths
            .iter()
            .enumerate()
            .map(|(i, &pmax)| AnnualRecord {
                year: 1995 + i as i32,
                pmax,
                ln_pmax: pmax.ln(),
            })
            .collect();
        let series = AnnualSeries::new(records, vec![2003], false, 1995, 2007);
        let stats = SampleStats::from_series(
            &series,
            &pluvia_tables::YnSigmaTable::default(),
            10,
        )
        .unwrap();
        let fit = pluvia_freq::fit_and_select(&series, &stats).unwrap();
        (series, stats, fit)
    }

    fn sample_rows() -> Vec<IdfRow> {
        let truth = ChowParams {
            k: 820.0,
            m: 0.15,
            c: 12.0,
            n: 0.74,
        };
        let mut rows = Vec::new();
        for tr in [2u32, 10, 100] {
            for (td, regime) in [
                (30.0, Regime::Short),
                (60.0, Regime::Short),
                (60.0, Regime::Long),
                (120.0, Regime::Long),
                (1440.0, Regime::Long),
            ] {
                rows.push(IdfRow {
                    tr,
                    duration: "synthetic",
                    td_minutes: td,
                    regime,
                    intensity: truth.intensity(f64::from(tr), td),
                });
            }
        }
        rows
    }

    #[test]
    fn evaluate_regime_perfect_parameters() {
        let rows = sample_rows();
        let truth = ChowParams {
            k: 820.0,
            m: 0.15,
            c: 12.0,
            n: 0.74,
        };
        let fit = evaluate_regime(&rows, Regime::Long, truth).unwrap();
        assert_eq!(fit.i_real.len(), 9);
        assert_relative_eq!(fit.mean_relative_error, 0.0, epsilon = 1e-9);
        assert_relative_eq!(fit.ns.unwrap(), 1.0, epsilon = 1e-9);
        let reg = fit.regression.unwrap();
        assert_relative_eq!(reg.slope, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn evaluate_regime_sorts_series_ascending() {
        let rows = sample_rows();
        let params = ChowParams {
            k: 500.0,
            m: 0.1,
            c: 10.0,
            n: 0.7,
        };
        let fit = evaluate_regime(&rows, Regime::Short, params).unwrap();
        for w in fit.i_real.windows(2) {
            assert!(w[0] <= w[1]);
        }
        for w in fit.i_calculated.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn report_carries_series_metadata() {
        let (series, stats, fit) = series_and_fit();
        let rows = sample_rows();
        let curves = fit_curves(&rows, &FitConfig::new()).unwrap();
        let report = IdfReport::assemble(&series, &stats, &fit, curves);

        assert_eq!(report.sample_size, 12);
        assert!(!report.sample_size_above_30);
        assert_eq!(report.first_year, 1995);
        assert_eq!(report.last_year, 2007);
        assert_eq!(report.empty_years, vec![2003]);
        assert_eq!(report.graph_data.f_percent.len(), 12);
        // p_max is presented ascending while f_percent keeps record
        // order, so the largest depth pairs with the smallest F.
        assert!(report.graph_data.p_max.windows(2).all(|w| w[0] <= w[1]));
        assert!(report.graph_data.f_percent.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn outcome_json_shape() {
        let outcome = AnalysisOutcome::InsufficientData {
            reason: "insufficient sample: 7 years remain, at least 10 required".to_string(),
        };
        let json = outcome.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "insufficient_data");
        assert!(value["reason"].as_str().unwrap().contains("insufficient"));
    }

    #[test]
    fn report_json_is_tagged() {
        let (series, stats, fit) = series_and_fit();
        let rows = sample_rows();
        let curves = fit_curves(&rows, &FitConfig::new()).unwrap();
        let report = IdfReport::assemble(&series, &stats, &fit, curves);
        let json = AnalysisOutcome::Report(report).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "report");
        assert!(value["graph_data"]["p_max"].is_array());
        assert!(value["short_durations"]["params"]["k"].is_number());
    }
}
