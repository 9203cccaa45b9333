//! Outlier screening for annual-maximum rainfall series.
//!
//! Implements a one-pass Grubbs deviate test for high values combined
//! with Grubbs-Beck log-space bounds, as applied to annual-maximum
//! rainfall records before frequency analysis. All critical values and
//! sample statistics are fixed from the unscreened series, so a single
//! call settles the sample.

pub mod error;
pub mod screen;

pub use error::OutlierError;
pub use screen::{k10, screen_outliers, screening_bounds, ScreeningBounds};
