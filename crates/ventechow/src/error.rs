//! Error types for the pluvia-ventechow crate.

/// Error type for the curve-fitting stage.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VenTeChowError {
    /// Returned when a regime has no rows to fit against.
    #[error("no rows in the {regime}-duration regime")]
    EmptyRegime { regime: &'static str },

    /// Returned when the fit configuration is inconsistent.
    #[error("invalid fit configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The Nelder-Mead solver failed to produce a parameter set.
    #[error("curve-fit optimization failed")]
    OptimizationFailed,
}
