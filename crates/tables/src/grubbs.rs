//! Grubbs test critical values at the 10% significance level.

use crate::error::TableError;

/// One-sided Grubbs critical values for sample sizes 10..=100,
/// 10% significance level. Index 0 corresponds to n = 10.
const CRITICAL_10PCT: [f64; 91] = [
    2.036, 2.088, 2.134, 2.175, 2.213, 2.247, 2.279, 2.309, 2.335, 2.361, // 10..=19
    2.385, 2.408, 2.429, 2.448, 2.467, 2.486, 2.502, 2.519, 2.534, 2.549, // 20..=29
    2.563, 2.577, 2.591, 2.604, 2.616, 2.628, 2.639, 2.650, 2.661, 2.671, // 30..=39
    2.682, 2.692, 2.700, 2.710, 2.719, 2.727, 2.736, 2.744, 2.753, 2.760, // 40..=49
    2.768, 2.775, 2.783, 2.790, 2.798, 2.804, 2.811, 2.818, 2.824, 2.831, // 50..=59
    2.837, 2.842, 2.849, 2.854, 2.860, 2.866, 2.871, 2.877, 2.883, 2.888, // 60..=69
    2.893, 2.897, 2.903, 2.908, 2.912, 2.917, 2.922, 2.927, 2.931, 2.935, // 70..=79
    2.940, 2.945, 2.949, 2.953, 2.957, 2.961, 2.966, 2.970, 2.973, 2.977, // 80..=89
    2.981, 2.984, 2.989, 2.993, 2.996, 3.000, 3.003, 3.006, 3.011, 3.014, // 90..=99
    3.017, // 100
];

/// Critical-value table for the Grubbs outlier test, indexed by sample
/// size.
///
/// The default table covers n in 10..=100 at the upper 10% significance
/// level. Alternate tables can be injected for tests via
/// [`GrubbsTable::with_entries`].
#[derive(Debug, Clone)]
pub struct GrubbsTable {
    entries: Vec<(usize, f64)>,
}

impl GrubbsTable {
    /// Builds a table from explicit `(sample_size, critical_value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyTable`] if `entries` is empty.
    pub fn with_entries(entries: Vec<(usize, f64)>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::EmptyTable);
        }
        Ok(Self { entries })
    }

    /// Looks up the critical value for a sample size.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::CriticalValueMiss`] if `n` is not tabulated.
    pub fn critical_value(&self, n: usize) -> Result<f64, TableError> {
        self.entries
            .iter()
            .find(|(size, _)| *size == n)
            .map(|(_, v)| *v)
            .ok_or(TableError::CriticalValueMiss { n })
    }

    /// Smallest tabulated sample size.
    pub fn min_size(&self) -> usize {
        self.entries.iter().map(|(n, _)| *n).min().unwrap_or(0)
    }
}

impl Default for GrubbsTable {
    fn default() -> Self {
        Self {
            entries: CRITICAL_10PCT
                .iter()
                .enumerate()
                .map(|(i, &v)| (i + 10, v))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_covers_10_to_100() {
        let table = GrubbsTable::default();
        for n in 10..=100 {
            assert!(table.critical_value(n).is_ok(), "missing n={n}");
        }
    }

    #[test]
    fn known_values() {
        let table = GrubbsTable::default();
        assert_relative_eq!(table.critical_value(10).unwrap(), 2.036);
        assert_relative_eq!(table.critical_value(15).unwrap(), 2.247);
        assert_relative_eq!(table.critical_value(100).unwrap(), 3.017);
    }

    #[test]
    fn values_monotone_in_n() {
        let table = GrubbsTable::default();
        let mut prev = 0.0;
        for n in 10..=100 {
            let v = table.critical_value(n).unwrap();
            assert!(v > prev, "not monotone at n={n}");
            prev = v;
        }
    }

    #[test]
    fn miss_below_range() {
        let table = GrubbsTable::default();
        assert_eq!(
            table.critical_value(9).unwrap_err(),
            TableError::CriticalValueMiss { n: 9 }
        );
    }

    #[test]
    fn miss_above_range() {
        let table = GrubbsTable::default();
        assert!(matches!(
            table.critical_value(150),
            Err(TableError::CriticalValueMiss { n: 150 })
        ));
    }

    #[test]
    fn custom_entries() {
        let table = GrubbsTable::with_entries(vec![(15, 9.9)]).unwrap();
        assert_relative_eq!(table.critical_value(15).unwrap(), 9.9);
        assert!(table.critical_value(10).is_err());
        assert_eq!(table.min_size(), 15);
    }

    #[test]
    fn empty_entries_rejected() {
        assert_eq!(
            GrubbsTable::with_entries(vec![]).unwrap_err(),
            TableError::EmptyTable
        );
    }

    #[test]
    fn min_size_default() {
        assert_eq!(GrubbsTable::default().min_size(), 10);
    }
}
