use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::models::vehicle::tire::core::MagicFormulaError;

/// Errors that can occur while searching for a force peak.
#[derive(Debug, Error)]
pub enum PeakSearchError {
    /// The load does not define a usable force curve.
    #[error("magic formula failed")]
    Formula(#[from] MagicFormulaError),

    /// The bisection solver encountered an error.
    ///
    /// This includes brackets whose slopes share a sign, which means the
    /// bracket holds no peak (or more than one).
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: slope={slope}")]
    MaxIters {
        /// Smallest absolute slope encountered, in newtons per degree.
        slope: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
