//! Problem formulation for peak finding.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};
use uom::si::{
    angle::degree,
    f64::{Angle, Force},
    force::newton,
};

use crate::models::vehicle::tire::core::MagicFormulaFactors;

/// Force and slope of the force magnitude at one slip angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Probe {
    pub(super) slip_angle: Angle,
    pub(super) force: Force,
    /// `d|F|/dα` in newtons per degree.
    pub(super) slope: f64,
}

/// The slope could not be evaluated at a slip angle.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("non-finite slope at slip_angle={slip_angle:?}")]
pub(super) struct NonFiniteSlope {
    slip_angle: Angle,
}

/// Model adapter exposing the slip angle as the sole input.
pub(super) struct PeakProbeModel {
    factors: MagicFormulaFactors,
    step: f64,
}

impl PeakProbeModel {
    pub(super) fn new(factors: MagicFormulaFactors, step: Angle) -> Self {
        Self {
            factors,
            step: step.get::<degree>(),
        }
    }
}

impl Model for PeakProbeModel {
    type Input = Angle;
    type Output = Probe;
    type Error = NonFiniteSlope;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let slip = input.get::<degree>();
        let h = self.step;

        let ahead = self.factors.force_at(slip + h).abs();
        let behind = self.factors.force_at(slip - h).abs();
        let slope = (ahead - behind) / (2.0 * h);

        if !slope.is_finite() {
            return Err(NonFiniteSlope { slip_angle: *input });
        }

        Ok(Probe {
            slip_angle: *input,
            force: Force::new::<newton>(self.factors.force_at(slip)),
            slope,
        })
    }
}

/// Equation problem whose root is a stationary point of the force magnitude.
pub(super) struct PeakProblem;

impl EquationProblem<1> for PeakProblem {
    type Input = Angle;
    type Output = Probe;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Angle::new::<degree>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.slope])
    }
}
