//! Error types for the pluvia-outlier crate.

/// Error type for the outlier screener.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OutlierError {
    /// Returned when the input series has no records.
    #[error("annual series is empty")]
    EmptySeries,

    /// Returned when the sample's standard deviation is zero, making
    /// the standardized deviate undefined.
    #[error("degenerate sample: zero standard deviation")]
    DegenerateSample,

    /// A critical-value table lookup failed (unsupported sample size).
    #[error(transparent)]
    Table(#[from] pluvia_tables::TableError),
}
