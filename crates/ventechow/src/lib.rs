//! Ven Te Chow IDF curve fitting.
//!
//! Takes the selected distribution's return-period frequency factors,
//! disaggregates the 1-day depths into the 14 standard durations, fits
//! the intensity equation `i = k * Tr^m / (c + td)^n` separately for
//! the short- and long-duration regimes, and assembles the final
//! analysis report.

pub mod diagnostics;
pub mod disaggregate;
pub mod equation;
pub mod error;
pub mod optimize;
pub mod output;

pub use diagnostics::{fit_regression, mean_relative_error, nash_sutcliffe, Regression};
pub use disaggregate::{build_idf_table, IdfRow, Regime};
pub use equation::{relative_error, ChowParams};
pub use error::VenTeChowError;
pub use optimize::{fit_regime, FitConfig};
pub use output::{
    evaluate_regime, fit_curves, AnalysisOutcome, CurveFit, GraphData, IdfReport, RegimeFit,
};
