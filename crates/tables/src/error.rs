//! Error types for the pluvia-tables crate.

/// Error type for reference-table lookups.
///
/// A miss means the requested sample size or duration has no tabulated
/// value; the statistics downstream are meaningless for unsupported
/// sizes, so lookups fail instead of defaulting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Returned when the Grubbs critical-value table has no entry for a
    /// sample size.
    #[error("no Grubbs critical value tabulated for sample size {n}")]
    CriticalValueMiss {
        /// The requested sample size.
        n: usize,
    },

    /// Returned when the Yn/sigma_n table has no entry for a sample size.
    #[error("no Yn/sigma_n values tabulated for sample size {n}")]
    YnSigmaMiss {
        /// The requested sample size.
        n: usize,
    },

    /// Returned when a duration label is not in the coefficient table.
    #[error("unknown duration label: {label}")]
    UnknownDuration {
        /// The requested duration label.
        label: String,
    },

    /// Returned when a table is constructed with no entries.
    #[error("reference table is empty")]
    EmptyTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_critical_value_miss() {
        let e = TableError::CriticalValueMiss { n: 101 };
        assert_eq!(
            e.to_string(),
            "no Grubbs critical value tabulated for sample size 101"
        );
    }

    #[test]
    fn display_yn_sigma_miss() {
        let e = TableError::YnSigmaMiss { n: 9 };
        assert_eq!(
            e.to_string(),
            "no Yn/sigma_n values tabulated for sample size 9"
        );
    }

    #[test]
    fn display_unknown_duration() {
        let e = TableError::UnknownDuration {
            label: "3h".to_string(),
        };
        assert_eq!(e.to_string(), "unknown duration label: 3h");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<TableError>();
    }
}
