use twine_solvers::equation::bisection;
use uom::si::{angle::degree, f64::Angle};

/// Solver configuration for locating a force peak.
#[derive(Debug, Clone, Copy)]
pub struct PeakSearchConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the slip angle.
    pub slip_tol: Angle,

    /// Absolute tolerance on the force slope, in newtons per degree.
    pub slope_tol: f64,

    /// Half-width of the central difference used to estimate the slope.
    pub step: Angle,
}

impl Default for PeakSearchConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            slip_tol: Angle::new::<degree>(1e-9),
            slope_tol: 1e-9,
            step: Angle::new::<degree>(1e-5),
        }
    }
}

impl PeakSearchConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.slip_tol.get::<degree>(),
            x_rel_tol: 0.0,
            residual_tol: self.slope_tol,
        }
    }
}
