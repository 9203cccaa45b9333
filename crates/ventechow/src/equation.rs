//! The Ven Te Chow intensity equation and its parameter set.

/// Fitted parameters of the intensity equation
/// `i = k * Tr^m / (c + td)^n`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ChowParams {
    pub k: f64,
    pub m: f64,
    pub c: f64,
    pub n: f64,
}

impl ChowParams {
    /// Rainfall intensity (mm/h) for a return period in years and a
    /// duration in minutes. A non-finite result (degenerate `c`/`n`
    /// combinations probed during optimization) collapses to zero.
    pub fn intensity(&self, tr: f64, td_minutes: f64) -> f64 {
        let i = (self.k * tr.powf(self.m)) / (self.c + td_minutes).powf(self.n);
        if i.is_finite() {
            i
        } else {
            0.0
        }
    }

    /// Rounds every parameter to the four-decimal reporting precision.
    pub fn rounded(&self) -> Self {
        Self {
            k: pluvia_stats::round4(self.k),
            m: pluvia_stats::round4(self.m),
            c: pluvia_stats::round4(self.c),
            n: pluvia_stats::round4(self.n),
        }
    }
}

/// Absolute relative error between a calculated and an observed
/// intensity, in percent.
pub fn relative_error(calculated: f64, real: f64) -> f64 {
    ((calculated - real) / real).abs() * 100.0
}
