//! Disaggregation of 1-day depths into the long-format IDF table.

use tracing::debug;

use pluvia_freq::{Distribution, ReturnPeriodRow, SampleStats};
use pluvia_tables::DurationTable;

/// Duration regime of one IDF row. The two regimes are fitted
/// separately; the 60-minute duration belongs to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Durations of 5 up to and including 60 minutes.
    Short,
    /// Durations of 60 minutes (exclusive) up to 24 hours.
    Long,
}

impl Regime {
    pub fn label(&self) -> &'static str {
        match self {
            Regime::Short => "short",
            Regime::Long => "long",
        }
    }
}

/// One row of the long-format IDF table: a return period, a duration
/// and the disaggregated rainfall intensity.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfRow {
    /// Return period in years.
    pub tr: u32,
    /// Duration label, e.g. `"30min"`.
    pub duration: &'static str,
    /// Duration in minutes.
    pub td_minutes: f64,
    pub regime: Regime,
    /// Disaggregated intensity in mm/h.
    pub intensity: f64,
}

/// Builds the long-format IDF table from the selected distribution's
/// return-period frequency factors.
///
/// For each return period the 1-day depth comes from the sample
/// moments (log10 moments for the log-space distributions), is scaled
/// to a 24-hour depth by the base coefficient, disaggregated to every
/// shorter duration, and divided by the duration length to yield an
/// intensity. The 60-minute row is emitted once per regime so both
/// fits see the hinge duration.
pub fn build_idf_table(
    stats: &SampleStats,
    distribution: Distribution,
    factors: &[ReturnPeriodRow],
    durations: &DurationTable,
) -> Vec<IdfRow> {
    let base = durations.base();
    let mut rows = Vec::new();

    for factor in factors {
        let one_day = if distribution.uses_log_space() {
            10f64.powf(stats.meanw + factor.k * stats.stdw)
        } else {
            stats.mean + factor.k * stats.std
        };
        let base_depth = one_day * base.coefficient;

        for entry in durations.entries() {
            let depth = if entry.label == base.label {
                base_depth
            } else {
                base_depth * entry.coefficient
            };
            let intensity = depth / entry.hours;
            let td = entry.minutes();

            if td == 60.0 {
                rows.push(IdfRow {
                    tr: factor.tr,
                    duration: entry.label,
                    td_minutes: td,
                    regime: Regime::Short,
                    intensity,
                });
                rows.push(IdfRow {
                    tr: factor.tr,
                    duration: entry.label,
                    td_minutes: td,
                    regime: Regime::Long,
                    intensity,
                });
            } else if (5.0..60.0).contains(&td) {
                rows.push(IdfRow {
                    tr: factor.tr,
                    duration: entry.label,
                    td_minutes: td,
                    regime: Regime::Short,
                    intensity,
                });
            } else if td > 60.0 && td <= 1440.0 {
                rows.push(IdfRow {
                    tr: factor.tr,
                    duration: entry.label,
                    td_minutes: td,
                    regime: Regime::Long,
                    intensity,
                });
            } else {
                debug!(duration = entry.label, td, "duration outside both regimes, skipped");
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn stats() -> SampleStats {
        SampleStats {
            n: 30,
            mean: 80.0,
            std: 20.0,
            g: 0.8,
            alpha: 6.25,
            meanw: 1.89,
            stdw: 0.105,
            gw: 0.3,
            alphaw: 4.0 / 0.09,
            yn: 0.536,
            sigma_n: 1.112,
        }
    }

    fn factor(tr: u32, k: f64) -> ReturnPeriodRow {
        let exceedance = 1.0 / f64::from(tr);
        ReturnPeriodRow {
            tr,
            exceedance,
            non_exceedance: 1.0 - exceedance,
            k,
        }
    }

    fn eight_factors() -> Vec<ReturnPeriodRow> {
        [2u32, 5, 10, 20, 30, 50, 75, 100]
            .iter()
            .enumerate()
            .map(|(i, &tr)| factor(tr, i as f64 * 0.4))
            .collect()
    }

    #[test]
    fn full_grid_has_120_rows() {
        let rows = build_idf_table(
            &stats(),
            Distribution::GumbelFinite,
            &eight_factors(),
            &DurationTable::default(),
        );
        assert_eq!(rows.len(), 120);
        let short = rows.iter().filter(|r| r.regime == Regime::Short).count();
        let long = rows.iter().filter(|r| r.regime == Regime::Long).count();
        assert_eq!(short, 56);
        assert_eq!(long, 64);
    }

    #[test]
    fn sixty_minute_row_in_both_regimes() {
        let rows = build_idf_table(
            &stats(),
            Distribution::GumbelFinite,
            &[factor(10, 1.0)],
            &DurationTable::default(),
        );
        let hinge: Vec<&IdfRow> = rows.iter().filter(|r| r.td_minutes == 60.0).collect();
        assert_eq!(hinge.len(), 2);
        assert_eq!(hinge[0].regime, Regime::Short);
        assert_eq!(hinge[1].regime, Regime::Long);
        assert_relative_eq!(hinge[0].intensity, hinge[1].intensity, epsilon = 1e-12);
    }

    #[test]
    fn depth_space_intensities_hand_computed() {
        // k = 1.0 gives a 1-day depth of 100 mm, a 24h depth of 114 mm.
        let rows = build_idf_table(
            &stats(),
            Distribution::GumbelFinite,
            &[factor(10, 1.0)],
            &DurationTable::default(),
        );
        let by_label = |label: &str| {
            rows.iter().find(|r| r.duration == label).unwrap().intensity
        };
        assert_relative_eq!(by_label("24h"), 114.0 / 24.0, epsilon = 1e-9);
        assert_relative_eq!(by_label("12h"), 114.0 * 0.85 / 12.0, epsilon = 1e-9);
        assert_relative_eq!(by_label("30min"), 114.0 * 0.311 / 0.5, epsilon = 1e-9);
        assert_relative_eq!(by_label("5min"), 114.0 * 0.106 / (5.0 / 60.0), epsilon = 1e-9);
    }

    #[test]
    fn log_space_distribution_exponentiates_the_factor() {
        let s = stats();
        let rows = build_idf_table(
            &s,
            Distribution::LogNormal,
            &[factor(10, 2.0)],
            &DurationTable::default(),
        );
        let one_day = 10f64.powf(s.meanw + 2.0 * s.stdw);
        let row = rows.iter().find(|r| r.duration == "24h").unwrap();
        assert_relative_eq!(row.intensity, one_day * 1.14 / 24.0, epsilon = 1e-9);
    }

    #[test]
    fn intensities_increase_with_return_period() {
        let rows = build_idf_table(
            &stats(),
            Distribution::GumbelTheoretical,
            &eight_factors(),
            &DurationTable::default(),
        );
        for label in ["24h", "1h", "5min"] {
            // Take one row per return period (the 1h hinge appears twice).
            let mut series: Vec<(u32, f64)> = Vec::new();
            for r in rows.iter().filter(|r| r.duration == label) {
                if series.last().map(|(tr, _)| *tr) != Some(r.tr) {
                    series.push((r.tr, r.intensity));
                }
            }
            let series: Vec<f64> = series.into_iter().map(|(_, i)| i).collect();
            for w in series.windows(2) {
                assert!(w[1] > w[0], "{label} intensity not increasing");
            }
        }
    }
}
