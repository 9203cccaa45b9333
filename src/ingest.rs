use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

use pluvia_annual::{ConsistencyLevel, Observation};

/// Column headers expected in the station export.
const COL_LEVEL: &str = "NivelConsistencia";
const COL_DATE: &str = "Data";
const COL_DEPTH: &str = "Maxima";

/// Reads a station rainfall export: semicolon-separated, Latin-1
/// encoded, `skip_rows` metadata lines before the header, dates as
/// `dd/mm/yyyy` and decimal commas. Missing depths are read as 0 and
/// rows with an unknown consistency level are dropped.
pub fn read_station_csv(path: &Path, skip_rows: usize) -> Result<Vec<Observation>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read input: {}", path.display()))?;
    // Station exports are Latin-1; a byte-to-char widening is the full
    // decoding.
    let text: String = bytes.iter().map(|&b| b as char).collect();
    let body = skip_lines(&text, skip_rows);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read CSV header: {}", path.display()))?
        .clone();
    let level_idx = column_index(&headers, COL_LEVEL)?;
    let date_idx = column_index(&headers, COL_DATE)?;
    let depth_idx = column_index(&headers, COL_DEPTH)?;

    let mut observations = Vec::new();
    let mut skipped = 0usize;
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("malformed CSV row {}", row + 1))?;
        let level_field = record.get(level_idx).unwrap_or("").trim();
        let date_field = record.get(date_idx).unwrap_or("").trim();
        let depth_field = record.get(depth_idx).unwrap_or("").trim();

        if date_field.is_empty() {
            skipped += 1;
            continue;
        }
        let Some(level) = level_field
            .parse::<u8>()
            .ok()
            .and_then(ConsistencyLevel::from_code)
        else {
            debug!(row = row + 1, level = level_field, "unknown consistency level, row dropped");
            skipped += 1;
            continue;
        };
        let date = NaiveDate::parse_from_str(date_field, "%d/%m/%Y")
            .with_context(|| format!("bad date {date_field:?} at row {}", row + 1))?;
        let depth = parse_decimal_comma(depth_field)
            .with_context(|| format!("bad depth {depth_field:?} at row {}", row + 1))?;

        observations.push(Observation::new(date, level, depth));
    }

    if observations.is_empty() {
        return Err(anyhow!("no usable rows in {}", path.display()));
    }
    info!(
        rows = observations.len(),
        skipped,
        path = %path.display(),
        "station record loaded"
    );
    Ok(observations)
}

fn skip_lines(text: &str, n: usize) -> &str {
    let mut rest = text;
    for _ in 0..n {
        match rest.find('\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return "",
        }
    }
    rest
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| anyhow!("missing column {name:?} in CSV header"))
}

/// Parses a depth field with a decimal comma. Empty fields mean a
/// missing value and read as 0.
fn parse_decimal_comma(field: &str) -> Result<f64> {
    if field.is_empty() {
        return Ok(0.0);
    }
    field
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|e| anyhow!("{e}"))
}
