use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};

use pluvia_annual::{build_annual_series, Observation};
use pluvia_freq::{coefficients, fit_and_select, SampleStats};
use pluvia_outlier::screen_outliers;
use pluvia_tables::{DurationTable, GrubbsTable, YnSigmaTable};
use pluvia_ventechow::{build_idf_table, fit_curves, AnalysisOutcome, IdfReport};

use crate::cli::AnalyzeArgs;
use crate::config::PluviaConfig;
use crate::ingest;

/// Run the full IDF analysis for one station record.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let config = PluviaConfig::load(args.config.as_deref())?;
    let observations = ingest::read_station_csv(&args.input, args.skip_rows)?;

    let outcome = analyze(&observations, &config)?;
    if let AnalysisOutcome::InsufficientData { reason } = &outcome {
        warn!(reason, "analysis ended with a sentinel result");
    }

    let json = outcome.to_json().context("failed to serialize report")?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// The analysis pipeline: annual series, outlier screening, frequency
/// analysis, disaggregation and the two-regime curve fit.
///
/// Records too short to analyze produce an
/// [`AnalysisOutcome::InsufficientData`] sentinel instead of an error;
/// everything else propagates.
fn analyze(observations: &[Observation], config: &PluviaConfig) -> Result<AnalysisOutcome> {
    let annual_config = config.annual_config();

    let series = match build_annual_series(observations, &annual_config) {
        Ok(series) => series,
        Err(e) if e.is_insufficient() => {
            return Ok(AnalysisOutcome::InsufficientData {
                reason: e.to_string(),
            })
        }
        Err(e) => return Err(e).context("failed to build annual-maximum series"),
    };
    info!(
        years = series.len(),
        first = series.first_year(),
        last = series.last_year(),
        "annual-maximum series built"
    );

    let screened = screen_outliers(&series, &GrubbsTable::default())
        .context("outlier screening failed")?;
    if screened.len() < series.len() {
        info!(removed = series.len() - screened.len(), "outliers removed from series");
    }

    let stats = match SampleStats::from_series(
        &screened,
        &YnSigmaTable::default(),
        annual_config.min_years(),
    ) {
        Ok(stats) => stats,
        Err(e) if e.is_insufficient() => {
            return Ok(AnalysisOutcome::InsufficientData {
                reason: e.to_string(),
            })
        }
        Err(e) => return Err(e).context("failed to compute sample statistics"),
    };

    let best = fit_and_select(&screened, &stats).context("distribution selection failed")?;
    info!(
        distribution = best.distribution.display_name(),
        r2 = best.r2,
        "distribution selected"
    );

    let factors = coefficients(best.distribution, &stats)
        .context("failed to evaluate return-period factors")?;
    let idf = build_idf_table(&stats, best.distribution, &factors, &DurationTable::default());

    let curves = fit_curves(&idf, &config.fit_config()).context("curve fit failed")?;

    Ok(AnalysisOutcome::Report(IdfReport::assemble(
        &screened, &stats, &best, curves,
    )))
}
