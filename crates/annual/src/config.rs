//! Configuration for annual-series construction.

/// Configuration for building the annual-maximum series.
///
/// Use the builder methods to customise parameters.
#[derive(Debug, Clone)]
pub struct AnnualConfig {
    start_month: u8,
    min_years: usize,
    min_consistent_rows: usize,
}

impl AnnualConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `start_month = 10` (October, standard hydrological
    /// year), `min_years = 10` (smallest size covered by the
    /// critical-value tables), `min_consistent_rows = 10` (below this
    /// the consistent-level subset is discarded entirely).
    pub fn new() -> Self {
        Self {
            start_month: 10,
            min_years: 10,
            min_consistent_rows: 10,
        }
    }

    /// Sets the water-year start month (1..=12).
    pub fn with_start_month(mut self, month: u8) -> Self {
        self.start_month = month;
        self
    }

    /// Sets the minimum number of valid hydrological years.
    pub fn with_min_years(mut self, n: usize) -> Self {
        self.min_years = n;
        self
    }

    /// Sets the minimum consistent-level row count below which the
    /// builder falls back to raw-level data entirely.
    pub fn with_min_consistent_rows(mut self, n: usize) -> Self {
        self.min_consistent_rows = n;
        self
    }

    /// Water-year start month.
    pub fn start_month(&self) -> u8 {
        self.start_month
    }

    /// Minimum number of valid hydrological years.
    pub fn min_years(&self) -> usize {
        self.min_years
    }

    /// Minimum consistent-level row count.
    pub fn min_consistent_rows(&self) -> usize {
        self.min_consistent_rows
    }

    /// Last month of the water year (the month before `start_month`).
    pub fn end_month(&self) -> u8 {
        if self.start_month == 1 {
            12
        } else {
            self.start_month - 1
        }
    }
}

impl Default for AnnualConfig {
    fn default() -> Self {
        Self::new()
    }
}
