//! Error types for the pluvia-freq crate.

/// Error type for the frequency-analysis stage.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FreqError {
    /// Returned when the screened series is too small for a frequency
    /// analysis.
    #[error("insufficient sample: {n} years remain, at least {min} required")]
    InsufficientSample { n: usize, min: usize },

    /// Returned when the sample statistics are undefined (constant
    /// depths).
    #[error("degenerate sample: zero variance in annual maxima")]
    DegenerateSample,

    /// Returned when no candidate distribution produced a usable fit.
    #[error("no distribution could be fitted to the sample")]
    NoDistributionSelected,

    /// A Gumbel reduced-statistics lookup failed.
    #[error(transparent)]
    Table(#[from] pluvia_tables::TableError),
}

impl FreqError {
    /// `true` when the error reflects a too-small sample rather than a
    /// defect, so the caller can emit a sentinel result instead of
    /// failing.
    pub fn is_insufficient(&self) -> bool {
        matches!(self, FreqError::InsufficientSample { .. })
    }
}
