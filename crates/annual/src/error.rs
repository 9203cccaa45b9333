//! Error types for the pluvia-annual crate.

/// Error type for all fallible operations in the pluvia-annual crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnnualError {
    /// Returned when no observations are supplied at all.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when an observation depth is NaN or infinite.
    #[error("non-finite depth on {date}")]
    NonFiniteDepth {
        /// Date of the offending observation (ISO format).
        date: String,
    },

    /// Returned when an observation depth is negative.
    #[error("negative depth {depth} on {date}")]
    NegativeDepth {
        /// Date of the offending observation (ISO format).
        date: String,
        /// The offending value.
        depth: f64,
    },

    /// Returned when the water-year start month is invalid.
    #[error("invalid water-year start month: {month} (must be 1..=12)")]
    InvalidStartMonth {
        /// The invalid month value.
        month: u8,
    },

    /// Returned when the merged series never completes a water year
    /// (no trailing end-month or no leading start-month row exists).
    #[error("series does not span a complete water year")]
    NoCompleteWaterYear,

    /// Returned when fewer valid hydrological years remain than the
    /// configured minimum.
    #[error("insufficient data: {n} valid hydrological years, need at least {min}")]
    InsufficientYears {
        /// Number of non-empty hydrological years found.
        n: usize,
        /// Minimum required.
        min: usize,
    },
}

impl AnnualError {
    /// Returns `true` for the insufficient-sample failure path, which
    /// the caller reports as a sentinel result rather than an error.
    pub fn is_insufficient(&self) -> bool {
        matches!(
            self,
            AnnualError::InsufficientYears { .. } | AnnualError::NoCompleteWaterYear
        )
    }
}
