//! Empirical duration-disaggregation coefficient table.

use crate::error::TableError;

/// One standard duration with its length and disaggregation coefficient.
///
/// The coefficient scales the base-duration depth down to this duration;
/// dividing by `hours` turns the disaggregated depth into an intensity.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationEntry {
    /// Display label, e.g. `"24h"`, `"30min"`.
    pub label: &'static str,
    /// Duration in hours.
    pub hours: f64,
    /// Empirical disaggregation coefficient relative to the 1-day depth.
    pub coefficient: f64,
}

impl DurationEntry {
    /// Duration in minutes.
    pub fn minutes(&self) -> f64 {
        self.hours * 60.0
    }
}

/// The 14 standard durations, longest first. The first entry is the
/// base duration whose coefficient converts the 1-day depth into a
/// 24-hour depth.
const DEFAULT_ENTRIES: [DurationEntry; 14] = [
    DurationEntry { label: "24h", hours: 24.0, coefficient: 1.14 },
    DurationEntry { label: "12h", hours: 12.0, coefficient: 0.85 },
    DurationEntry { label: "10h", hours: 10.0, coefficient: 0.82 },
    DurationEntry { label: "8h", hours: 8.0, coefficient: 0.78 },
    DurationEntry { label: "6h", hours: 6.0, coefficient: 0.72 },
    DurationEntry { label: "4h", hours: 4.0, coefficient: 0.63 },
    DurationEntry { label: "2h", hours: 2.0, coefficient: 0.52 },
    DurationEntry { label: "1h", hours: 1.0, coefficient: 0.42 },
    DurationEntry { label: "30min", hours: 0.5, coefficient: 0.311 },
    DurationEntry { label: "25min", hours: 25.0 / 60.0, coefficient: 0.283 },
    DurationEntry { label: "20min", hours: 20.0 / 60.0, coefficient: 0.252 },
    DurationEntry { label: "15min", hours: 15.0 / 60.0, coefficient: 0.218 },
    DurationEntry { label: "10min", hours: 10.0 / 60.0, coefficient: 0.168 },
    DurationEntry { label: "5min", hours: 5.0 / 60.0, coefficient: 0.106 },
];

/// Duration-to-coefficient mapping used by the disaggregation stage.
///
/// Immutable reference data; the default matches the standard Brazilian
/// (CETESB) disaggregation coefficients for a 24h base duration.
#[derive(Debug, Clone)]
pub struct DurationTable {
    entries: Vec<DurationEntry>,
}

impl DurationTable {
    /// Builds a table from explicit entries. The first entry is treated
    /// as the base duration.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyTable`] if `entries` is empty.
    pub fn with_entries(entries: Vec<DurationEntry>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::EmptyTable);
        }
        Ok(Self { entries })
    }

    /// All entries, longest duration first.
    pub fn entries(&self) -> &[DurationEntry] {
        &self.entries
    }

    /// The base duration (first entry).
    pub fn base(&self) -> &DurationEntry {
        // with_entries and Default both guarantee at least one entry.
        &self.entries[0]
    }

    /// Looks up an entry by label.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownDuration`] if `label` is not present.
    pub fn get(&self, label: &str) -> Result<&DurationEntry, TableError> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .ok_or_else(|| TableError::UnknownDuration {
                label: label.to_string(),
            })
    }

    /// Number of durations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries (never for valid tables).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DurationTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_has_14_durations() {
        assert_eq!(DurationTable::default().len(), 14);
    }

    #[test]
    fn base_is_24h() {
        let table = DurationTable::default();
        assert_eq!(table.base().label, "24h");
        assert_relative_eq!(table.base().hours, 24.0);
        assert_relative_eq!(table.base().coefficient, 1.14);
    }

    #[test]
    fn entries_sorted_longest_first() {
        let table = DurationTable::default();
        let mut prev = f64::INFINITY;
        for e in table.entries() {
            assert!(e.hours < prev, "{} out of order", e.label);
            prev = e.hours;
        }
    }

    #[test]
    fn coefficients_decrease_with_duration() {
        let table = DurationTable::default();
        let mut prev = f64::INFINITY;
        for e in table.entries() {
            assert!(e.coefficient < prev, "{} coefficient out of order", e.label);
            prev = e.coefficient;
        }
    }

    #[test]
    fn minutes_conversion() {
        let table = DurationTable::default();
        assert_relative_eq!(table.get("1h").unwrap().minutes(), 60.0);
        assert_relative_eq!(table.get("5min").unwrap().minutes(), 5.0);
        assert_relative_eq!(table.get("24h").unwrap().minutes(), 1440.0);
    }

    #[test]
    fn unknown_label() {
        let table = DurationTable::default();
        assert!(matches!(
            table.get("3h"),
            Err(TableError::UnknownDuration { .. })
        ));
    }

    #[test]
    fn empty_entries_rejected() {
        assert_eq!(
            DurationTable::with_entries(vec![]).unwrap_err(),
            TableError::EmptyTable
        );
    }
}
