//! Raw station observations.

use chrono::NaiveDate;

/// Consistency level of a station record, as flagged by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsistencyLevel {
    /// Level 1: raw, unreviewed data.
    Raw,
    /// Level 2: consistency-checked data.
    Consistent,
}

impl ConsistencyLevel {
    /// Maps a provider level code (1 or 2) to a `ConsistencyLevel`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ConsistencyLevel::Raw),
            2 => Some(ConsistencyLevel::Consistent),
            _ => None,
        }
    }
}

/// One station observation: the maximum daily rainfall reported for a
/// month, at a given consistency level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Observation date (normally the first day of the month).
    pub date: NaiveDate,
    /// Provider consistency level.
    pub level: ConsistencyLevel,
    /// Maximum daily rainfall depth in mm. Missing values are reported
    /// as 0.
    pub depth: f64,
}

impl Observation {
    /// Convenience constructor.
    pub fn new(date: NaiveDate, level: ConsistencyLevel, depth: f64) -> Self {
        Self { date, level, depth }
    }
}
