//! Nelder-Mead fit of the Ven Te Chow parameters per duration regime.
//!
//! Wraps the `argmin` crate to minimize the summed absolute relative
//! error over the regime's IDF rows. The declared box bounds are
//! enforced through the cost function: any probe outside the box is
//! assigned an effectively infinite cost.

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;
use tracing::{debug, info};

use crate::disaggregate::{IdfRow, Regime};
use crate::equation::{relative_error, ChowParams};
use crate::error::VenTeChowError;

const PARAM_NAMES: [&str; 4] = ["k", "m", "c", "n"];

/// Configuration of the per-regime curve fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig {
    initial_guess: [f64; 4],
    lower: [f64; 4],
    upper: [f64; 4],
    max_iters: u64,
    sd_tolerance: f64,
}

impl FitConfig {
    /// Default configuration: guess `[500, 0.1, 10, 0.7]` inside the
    /// box `k in [100, 2000]`, `m in [0, 3]`, `c in [0, 100]`,
    /// `n in [0, 10]`.
    pub fn new() -> Self {
        Self {
            initial_guess: [500.0, 0.1, 10.0, 0.7],
            lower: [100.0, 0.0, 0.0, 0.0],
            upper: [2000.0, 3.0, 100.0, 10.0],
            max_iters: 1000,
            sd_tolerance: 1e-8,
        }
    }

    pub fn with_initial_guess(mut self, guess: [f64; 4]) -> Self {
        self.initial_guess = guess;
        self
    }

    pub fn with_bounds(mut self, lower: [f64; 4], upper: [f64; 4]) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    pub fn with_max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    pub fn with_sd_tolerance(mut self, sd_tolerance: f64) -> Self {
        self.sd_tolerance = sd_tolerance;
        self
    }

    pub fn initial_guess(&self) -> [f64; 4] {
        self.initial_guess
    }

    pub fn lower(&self) -> [f64; 4] {
        self.lower
    }

    pub fn upper(&self) -> [f64; 4] {
        self.upper
    }

    fn validate(&self) -> Result<(), VenTeChowError> {
        for i in 0..4 {
            if !(self.lower[i] < self.upper[i]) {
                return Err(VenTeChowError::InvalidConfig {
                    reason: format!("empty bound interval for {}", PARAM_NAMES[i]),
                });
            }
            if self.initial_guess[i] < self.lower[i] || self.initial_guess[i] > self.upper[i] {
                return Err(VenTeChowError::InvalidConfig {
                    reason: format!("initial guess for {} outside bounds", PARAM_NAMES[i]),
                });
            }
        }
        Ok(())
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fits the Ven Te Chow parameters to one regime's rows.
///
/// # Errors
///
/// - [`VenTeChowError::EmptyRegime`] if no row belongs to `regime`.
/// - [`VenTeChowError::InvalidConfig`] on inconsistent bounds.
/// - [`VenTeChowError::OptimizationFailed`] if the solver yields no
///   parameter set.
pub fn fit_regime(
    rows: &[IdfRow],
    regime: Regime,
    config: &FitConfig,
) -> Result<ChowParams, VenTeChowError> {
    config.validate()?;

    let targets: Vec<(f64, f64, f64)> = rows
        .iter()
        .filter(|r| r.regime == regime)
        .map(|r| (f64::from(r.tr), r.td_minutes, r.intensity))
        .collect();
    if targets.is_empty() {
        return Err(VenTeChowError::EmptyRegime {
            regime: regime.label(),
        });
    }

    let cost = ChowCost {
        targets: &targets,
        lower: config.lower,
        upper: config.upper,
    };

    // Initial simplex: the guess plus one vertex per dimension, nudged
    // by a tenth of the bound interval while staying inside the box.
    let guess = config.initial_guess;
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(5);
    simplex.push(guess.to_vec());
    for i in 0..4 {
        let step = 0.1 * (config.upper[i] - config.lower[i]);
        let mut vertex = guess.to_vec();
        vertex[i] = if guess[i] + step <= config.upper[i] {
            guess[i] + step
        } else {
            guess[i] - step
        };
        simplex.push(vertex);
    }

    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(config.sd_tolerance)
        .map_err(|_| VenTeChowError::OptimizationFailed)?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(config.max_iters))
        .run()
        .map_err(|_| VenTeChowError::OptimizationFailed)?;

    let best = result
        .state()
        .best_param
        .as_ref()
        .ok_or(VenTeChowError::OptimizationFailed)?;
    debug!(
        regime = regime.label(),
        cost = result.state().best_cost,
        iters = result.state().iter,
        "curve fit converged"
    );

    let params = ChowParams {
        k: best[0],
        m: best[1],
        c: best[2],
        n: best[3],
    }
    .rounded();
    info!(
        regime = regime.label(),
        k = params.k,
        m = params.m,
        c = params.c,
        n = params.n,
        "regime parameters fitted"
    );
    Ok(params)
}

/// Cost function for argmin: summed absolute relative error in percent,
/// with an effectively infinite cost outside the bound box.
struct ChowCost<'a> {
    targets: &'a [(f64, f64, f64)],
    lower: [f64; 4],
    upper: [f64; 4],
}

impl CostFunction for ChowCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        for i in 0..4 {
            if params[i] < self.lower[i] || params[i] > self.upper[i] {
                return Ok(f64::MAX);
            }
        }
        let candidate = ChowParams {
            k: params[0],
            m: params[1],
            c: params[2],
            n: params[3],
        };
        let total: f64 = self
            .targets
            .iter()
            .map(|&(tr, td, real)| relative_error(candidate.intensity(tr, td), real))
            .sum();
        if total.is_finite() {
            Ok(total)
        } else {
            Ok(f64::MAX)
        }
    }
}
