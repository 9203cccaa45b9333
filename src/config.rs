use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use pluvia_annual::AnnualConfig;
use pluvia_ventechow::FitConfig;

/// Top-level Pluvia configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluviaConfig {
    /// Annual-series settings.
    #[serde(default)]
    pub annual: AnnualToml,

    /// Curve-fit settings.
    #[serde(default)]
    pub fit: FitToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnualToml {
    /// Water-year start month (1..=12).
    #[serde(default = "default_start_month")]
    pub start_month: u8,

    /// Minimum number of valid hydrological years.
    #[serde(default = "default_min_years")]
    pub min_years: usize,

    /// Consistent-level row count below which raw data is used instead.
    #[serde(default = "default_min_consistent_rows")]
    pub min_consistent_rows: usize,
}

impl Default for AnnualToml {
    fn default() -> Self {
        Self {
            start_month: default_start_month(),
            min_years: default_min_years(),
            min_consistent_rows: default_min_consistent_rows(),
        }
    }
}

fn default_start_month() -> u8 {
    10
}
fn default_min_years() -> usize {
    10
}
fn default_min_consistent_rows() -> usize {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitToml {
    /// Starting point for the Nelder-Mead fit (k, m, c, n).
    #[serde(default = "default_initial_guess")]
    pub initial_guess: [f64; 4],

    /// Lower bounds for (k, m, c, n).
    #[serde(default = "default_lower_bounds")]
    pub lower_bounds: [f64; 4],

    /// Upper bounds for (k, m, c, n).
    #[serde(default = "default_upper_bounds")]
    pub upper_bounds: [f64; 4],

    /// Iteration cap per regime.
    #[serde(default = "default_max_iters")]
    pub max_iters: u64,

    /// Simplex standard-deviation tolerance.
    #[serde(default = "default_sd_tolerance")]
    pub sd_tolerance: f64,
}

impl Default for FitToml {
    fn default() -> Self {
        Self {
            initial_guess: default_initial_guess(),
            lower_bounds: default_lower_bounds(),
            upper_bounds: default_upper_bounds(),
            max_iters: default_max_iters(),
            sd_tolerance: default_sd_tolerance(),
        }
    }
}

fn default_initial_guess() -> [f64; 4] {
    [500.0, 0.1, 10.0, 0.7]
}
fn default_lower_bounds() -> [f64; 4] {
    [100.0, 0.0, 0.0, 0.0]
}
fn default_upper_bounds() -> [f64; 4] {
    [2000.0, 3.0, 100.0, 10.0]
}
fn default_max_iters() -> u64 {
    1000
}
fn default_sd_tolerance() -> f64 {
    1e-8
}

impl PluviaConfig {
    /// Loads the configuration from a TOML file, or returns the
    /// defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let text = std::fs::read_to_string(p)
                    .with_context(|| format!("failed to read config: {}", p.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("failed to parse config: {}", p.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Annual-series configuration for `pluvia_annual`.
    pub fn annual_config(&self) -> AnnualConfig {
        AnnualConfig::new()
            .with_start_month(self.annual.start_month)
            .with_min_years(self.annual.min_years)
            .with_min_consistent_rows(self.annual.min_consistent_rows)
    }

    /// Curve-fit configuration for `pluvia_ventechow`.
    pub fn fit_config(&self) -> FitConfig {
        FitConfig::new()
            .with_initial_guess(self.fit.initial_guess)
            .with_bounds(self.fit.lower_bounds, self.fit.upper_bounds)
            .with_max_iters(self.fit.max_iters)
            .with_sd_tolerance(self.fit.sd_tolerance)
    }
}
