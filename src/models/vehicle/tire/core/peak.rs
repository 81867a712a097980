//! Bisection search for the slip angle of peak force.
//!
//! Sampled sweeps only bracket the peak to within one sample spacing. This
//! module refines it by driving the slope of the force magnitude to zero.

mod config;
mod error;
mod problem;

pub use config::PeakSearchConfig;
pub use error::PeakSearchError;

use twine_solvers::equation::bisection;
use uom::si::{
    angle::degree,
    f64::{Angle, Force},
};

use super::AxisConfig;

use problem::{PeakProblem, PeakProbeModel};

/// Location and magnitude of a force peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Slip angle where the force magnitude is stationary.
    pub slip_angle: Angle,

    /// Force at that slip angle.
    pub force: Force,
}

impl AxisConfig {
    /// Finds the slip angle within `bracket` where the force magnitude peaks.
    ///
    /// The bracket must contain exactly one stationary point of `|F|`, with the
    /// force magnitude rising at the low end and falling at the high end.
    ///
    /// # Errors
    ///
    /// Returns a [`PeakSearchError`] if the load is degenerate, the bracket
    /// holds no peak, or the solver fails to converge.
    pub fn find_peak(
        &self,
        load: Force,
        bracket: [Angle; 2],
        config: PeakSearchConfig,
    ) -> Result<Peak, PeakSearchError> {
        let factors = self.try_factors(load)?;
        let model = PeakProbeModel::new(factors, config.step);

        let solution = bisection::solve(
            &model,
            &PeakProblem,
            [bracket[0].get::<degree>(), bracket[1].get::<degree>()],
            &config.bisection(),
            |event: &bisection::Event<'_, _, _>| {
                // A non-finite slope gives no direction; keep moving toward the high end.
                if event.result().is_err() {
                    return Some(bisection::Action::assume_positive());
                }
                None
            },
        )?;

        if solution.status != bisection::Status::Converged {
            return Err(PeakSearchError::MaxIters {
                slope: solution.residual,
                iters: solution.iters,
            });
        }

        let probe = solution.snapshot.output;
        Ok(Peak {
            slip_angle: probe.slip_angle,
            force: probe.force,
        })
    }
}
