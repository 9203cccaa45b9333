//! Annual-maximum rainfall series construction for the pluvia IDF
//! pipeline.
//!
//! Turns a station's monthly maximum-rainfall observations (two
//! provider consistency levels) into one clean annual-maximum series
//! per hydrological year, with natural-log companion values and
//! empty-year bookkeeping.

mod config;
mod error;
mod monthly;
mod observation;
mod series;

pub use config::AnnualConfig;
pub use error::AnnualError;
pub use observation::{ConsistencyLevel, Observation};
pub use series::{build_annual_series, AnnualRecord, AnnualSeries};
