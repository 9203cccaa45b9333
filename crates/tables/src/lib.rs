//! Fixed reference tables for the pluvia IDF pipeline.
//!
//! All tables are read-only, process-lifetime data: Grubbs critical
//! values for outlier screening, finite-sample Gumbel Yn/sigma_n
//! statistics, and the empirical duration-disaggregation coefficients.
//! Defaults are built in; every table also accepts injected entries so
//! tests can substitute alternates.

mod duration;
mod error;
mod grubbs;
mod gumbel;

pub use duration::{DurationEntry, DurationTable};
pub use error::TableError;
pub use grubbs::GrubbsTable;
pub use gumbel::{YnSigma, YnSigmaTable};
