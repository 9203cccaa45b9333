//! Annual-maximum series construction.

use tracing::{debug, warn};

use crate::config::AnnualConfig;
use crate::error::AnnualError;
use crate::monthly::{merge_series, monthly_series, MonthKey};
use crate::observation::{ConsistencyLevel, Observation};

/// One hydrological year's maximum rainfall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualRecord {
    /// Hydrological year, named after the calendar year of its start
    /// month.
    pub year: i32,
    /// Annual-maximum daily rainfall depth in mm (strictly positive).
    pub pmax: f64,
    /// Natural log of `pmax`.
    pub ln_pmax: f64,
}

/// The cleaned annual-maximum series, sorted descending by depth.
///
/// Years whose maximum is exactly zero are excluded from `records` but
/// listed in `empty_years`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualSeries {
    records: Vec<AnnualRecord>,
    empty_years: Vec<i32>,
    used_raw_fallback: bool,
    first_year: i32,
    last_year: i32,
}

impl AnnualSeries {
    /// Assembles a series directly from records and metadata. Records
    /// are sorted descending by depth. Prefer [`build_annual_series`]
    /// for raw observations; this constructor exists for callers that
    /// already hold per-year maxima.
    pub fn new(
        mut records: Vec<AnnualRecord>,
        empty_years: Vec<i32>,
        used_raw_fallback: bool,
        first_year: i32,
        last_year: i32,
    ) -> Self {
        records.sort_by(|a, b| b.pmax.partial_cmp(&a.pmax).unwrap_or(std::cmp::Ordering::Equal));
        Self {
            records,
            empty_years,
            used_raw_fallback,
            first_year,
            last_year,
        }
    }

    /// Annual records, sorted descending by `pmax`.
    pub fn records(&self) -> &[AnnualRecord] {
        &self.records
    }

    /// Sample size (non-empty years only).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records remain.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Hydrological years whose maximum was exactly zero.
    pub fn empty_years(&self) -> &[i32] {
        &self.empty_years
    }

    /// Whether the consistent-level subset was unusable and raw-level
    /// data was used for the whole series.
    pub fn used_raw_fallback(&self) -> bool {
        self.used_raw_fallback
    }

    /// First hydrological year covered (including empty years).
    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    /// Last hydrological year covered (including empty years).
    pub fn last_year(&self) -> i32 {
        self.last_year
    }

    /// Annual-maximum depths in record order.
    pub fn pmax_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.pmax).collect()
    }

    /// Natural-log depths in record order.
    pub fn ln_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.ln_pmax).collect()
    }

    /// Rebuilds the series with a reduced record set, keeping the
    /// metadata. Used by the outlier screener. Records are re-sorted
    /// descending by depth.
    pub fn with_records(&self, mut records: Vec<AnnualRecord>) -> Self {
        records.sort_by(|a, b| b.pmax.partial_cmp(&a.pmax).unwrap_or(std::cmp::Ordering::Equal));
        Self {
            records,
            empty_years: self.empty_years.clone(),
            used_raw_fallback: self.used_raw_fallback,
            first_year: self.first_year,
            last_year: self.last_year,
        }
    }
}

/// Builds the annual-maximum series from raw station observations.
///
/// Pipeline: validate depths, bucket each consistency level into a
/// monthly series with forward fill (falling back to raw-level data
/// entirely if the consistent subset is too small), merge the two
/// series, trim rows outside complete water years, group by
/// hydrological year taking the per-year maximum, and drop (but record)
/// zero-valued years.
///
/// # Errors
///
/// - [`AnnualError::EmptyData`] if no usable observations exist.
/// - [`AnnualError::NonFiniteDepth`] / [`AnnualError::NegativeDepth`]
///   on invalid depths.
/// - [`AnnualError::InvalidStartMonth`] on a bad configuration.
/// - [`AnnualError::NoCompleteWaterYear`] if the merged series never
///   completes a water year.
/// - [`AnnualError::InsufficientYears`] if fewer than the configured
///   minimum of non-empty years remain.
pub fn build_annual_series(
    observations: &[Observation],
    config: &AnnualConfig,
) -> Result<AnnualSeries, AnnualError> {
    if !(1..=12).contains(&config.start_month()) {
        return Err(AnnualError::InvalidStartMonth {
            month: config.start_month(),
        });
    }
    if observations.is_empty() {
        return Err(AnnualError::EmptyData);
    }
    for o in observations {
        if !o.depth.is_finite() {
            return Err(AnnualError::NonFiniteDepth {
                date: o.date.to_string(),
            });
        }
        if o.depth < 0.0 {
            return Err(AnnualError::NegativeDepth {
                date: o.date.to_string(),
                depth: o.depth,
            });
        }
    }

    let consistent_obs: Vec<&Observation> = observations
        .iter()
        .filter(|o| o.level == ConsistencyLevel::Consistent)
        .collect();
    let raw_obs: Vec<&Observation> = observations
        .iter()
        .filter(|o| o.level == ConsistencyLevel::Raw)
        .collect();

    let raw = monthly_series(&raw_obs);

    let mut used_raw_fallback = false;
    let consistent = if consistent_obs.len() < config.min_consistent_rows() {
        warn!(
            consistent_rows = consistent_obs.len(),
            "consistent-level subset too small, falling back to raw-level data"
        );
        used_raw_fallback = true;
        raw.clone()
    } else {
        monthly_series(&consistent_obs)
    };

    // An absent raw series merges against the consistent one itself.
    let raw = if raw.is_empty() { consistent.clone() } else { raw };

    let merged = merge_series(&consistent, &raw);
    if merged.is_empty() {
        return Err(AnnualError::EmptyData);
    }
    debug!(months = merged.len(), "merged monthly series");

    let trimmed = trim_to_water_years(&merged, config)?;

    let mut by_year: std::collections::BTreeMap<i32, f64> = std::collections::BTreeMap::new();
    for &((year, month), depth) in &trimmed {
        let hydro_year = if month >= u32::from(config.start_month()) {
            year
        } else {
            year - 1
        };
        let entry = by_year.entry(hydro_year).or_insert(0.0);
        if depth > *entry {
            *entry = depth;
        }
    }

    // by_year is non-empty because trim_to_water_years returned rows.
    let first_year = *by_year.keys().next().ok_or(AnnualError::NoCompleteWaterYear)?;
    let last_year = *by_year.keys().next_back().ok_or(AnnualError::NoCompleteWaterYear)?;

    let mut empty_years = Vec::new();
    let mut records = Vec::new();
    for (&year, &pmax) in &by_year {
        if pmax == 0.0 {
            empty_years.push(year);
        } else {
            records.push(AnnualRecord {
                year,
                pmax,
                ln_pmax: pmax.ln(),
            });
        }
    }

    records.sort_by(|a, b| b.pmax.partial_cmp(&a.pmax).unwrap_or(std::cmp::Ordering::Equal));

    if records.len() < config.min_years() {
        return Err(AnnualError::InsufficientYears {
            n: records.len(),
            min: config.min_years(),
        });
    }

    debug!(
        years = records.len(),
        empty = empty_years.len(),
        first_year,
        last_year,
        "annual-maximum series built"
    );

    Ok(AnnualSeries {
        records,
        empty_years,
        used_raw_fallback,
        first_year,
        last_year,
    })
}

/// Drops rows outside complete water years: everything up to and
/// including the first end-month row, and everything from the last
/// start-month row onward.
fn trim_to_water_years(
    merged: &[(MonthKey, f64)],
    config: &AnnualConfig,
) -> Result<Vec<(MonthKey, f64)>, AnnualError> {
    let end_month = u32::from(config.end_month());
    let start_month = u32::from(config.start_month());

    let first_end = merged
        .iter()
        .position(|((_, m), _)| *m == end_month)
        .ok_or(AnnualError::NoCompleteWaterYear)?;
    let last_start = merged
        .iter()
        .rposition(|((_, m), _)| *m == start_month)
        .ok_or(AnnualError::NoCompleteWaterYear)?;

    if last_start <= first_end + 1 {
        return Err(AnnualError::NoCompleteWaterYear);
    }

    Ok(merged[first_end + 1..last_start].to_vec())
}
