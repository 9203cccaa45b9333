//! Integration tests for outlier screening over realistic annual
//! series.

use pluvia_annual::{AnnualRecord, AnnualSeries};
use pluvia_outlier::{screen_outliers, OutlierError};
use pluvia_tables::GrubbsTable;

fn series(depths: &[f64]) -> AnnualSeries {
    let records: Vec<AnnualRecord> = depths
        .iter()
        .enumerate()
        .map(|(i, &pmax)| AnnualRecord {
            year: 1970 + i as i32,
            pmax,
            ln_pmax: pmax.ln(),
        })
        .collect();
    let last = 1970 + depths.len() as i32 - 1;
    AnnualSeries::new(records, vec![], false, 1970, last)
}

/// A 30-year record with plausible spread passes untouched.
#[test]
fn realistic_record_survives_screening() {
    let depths: Vec<f64> = (0..30).map(|i| 48.0 + (i as f64) * 2.3).collect();
    let s = series(&depths);
    let screened = screen_outliers(&s, &GrubbsTable::default()).unwrap();
    assert_eq!(screened.len(), 30);
    assert_eq!(screened.first_year(), s.first_year());
    assert_eq!(screened.last_year(), s.last_year());
}

#[test]
fn high_tail_removed_from_clustered_record() {
    let mut depths: Vec<f64> = (0..18).map(|i| 60.0 + (i as f64) * 1.5).collect();
    depths.push(520.0);
    let screened = screen_outliers(&series(&depths), &GrubbsTable::default()).unwrap();
    assert_eq!(screened.len(), 18);
    assert!(screened.pmax_values().iter().all(|&v| v < 500.0));
}

#[test]
fn low_tail_removed_from_clustered_record() {
    let mut depths: Vec<f64> = (0..18).map(|i| 60.0 + (i as f64) * 1.5).collect();
    depths.push(0.15);
    let screened = screen_outliers(&series(&depths), &GrubbsTable::default()).unwrap();
    assert_eq!(screened.len(), 18);
    assert!(screened.pmax_values().iter().all(|&v| v > 1.0));
}

#[test]
fn screening_preserves_descending_order() {
    let depths = [77.0, 55.0, 91.0, 63.0, 84.0, 70.0, 59.0, 66.0, 73.0, 88.0, 51.0, 95.0];
    let screened = screen_outliers(&series(&depths), &GrubbsTable::default()).unwrap();
    let values = screened.pmax_values();
    for w in values.windows(2) {
        assert!(w[0] >= w[1]);
    }
}

#[test]
fn sample_size_outside_table_is_an_error() {
    let depths = [10.0, 12.0, 14.0, 16.0];
    let err = screen_outliers(&series(&depths), &GrubbsTable::default()).unwrap_err();
    assert!(matches!(err, OutlierError::Table(_)));
}
