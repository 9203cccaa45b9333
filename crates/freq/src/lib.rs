//! Frequency analysis of annual-maximum rainfall series.
//!
//! Scores five candidate distributions (log-normal, Pearson Type III,
//! log-Pearson Type III, and two Gumbel variants) against the observed
//! sample at Weibull plotting positions, selects the best by squared
//! Pearson correlation, and evaluates the winner's frequency factors at
//! the standard return periods.

pub mod distribution;
pub mod error;
pub mod position;
pub mod return_period;
pub mod sample;
pub mod select;

pub use distribution::Distribution;
pub use error::FreqError;
pub use position::{plotting_positions, PlottingPosition};
pub use return_period::{coefficients, ReturnPeriodRow, RETURN_PERIODS};
pub use sample::SampleStats;
pub use select::{fit_and_select, fit_candidates, select_distribution, DistributionFit};
