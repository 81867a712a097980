//! Magic Formula tire models.
//!
//! This module provides [`twine_core::Model`] implementations for the Pacejka
//! Magic Formula. The computational core is in the internal `core` module;
//! its public types are re-exported here.
//!
//! - [`MagicFormula`] evaluates a single force axis.
//! - [`MagicFormulaTire`] evaluates side and brake force together.

pub(crate) mod core;

pub use self::core::{
    AxisConfig, CoefficientSet, ForceSequence, LoadUnit, MagicFormulaError, MagicFormulaFactors,
    NonFinitePolicy, Peak, PeakSearchConfig, PeakSearchError, ShapeFactor, TireForces, TireModel,
    evaluate, evaluate_with_table, wheel_load, wheel_load_four_wheels,
};

use twine_core::Model;
use uom::si::f64::{Angle, Force};

/// Operating point shared by the tire models: one load, many slip angles.
#[derive(Debug, Clone, PartialEq)]
pub struct TireInput {
    /// Normal load on the tire.
    pub load: Force,

    /// Slip angles to evaluate.
    pub slip_angles: Vec<Angle>,
}

/// Single-axis Magic Formula model.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_tire_models::models::vehicle::tire::{AxisConfig, MagicFormula, TireInput};
/// use uom::si::{angle::degree, f64::{Angle, Force}, force::newton};
///
/// let model = MagicFormula::new(AxisConfig::lateral());
/// let input = TireInput {
///     load: Force::new::<newton>(2452.5),
///     slip_angles: vec![Angle::new::<degree>(0.0)],
/// };
///
/// let forces = model.call(&input).unwrap();
/// assert_eq!(forces[0].get::<newton>(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagicFormula {
    axis: AxisConfig,
    policy: NonFinitePolicy,
}

impl MagicFormula {
    /// Creates a model that keeps non-finite forces in its output.
    #[must_use]
    pub fn new(axis: AxisConfig) -> Self {
        Self {
            axis,
            policy: NonFinitePolicy::Propagate,
        }
    }

    /// Returns this model with a different non-finite policy.
    #[must_use]
    pub fn with_policy(mut self, policy: NonFinitePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Model for MagicFormula {
    type Input = TireInput;
    type Output = ForceSequence;
    type Error = MagicFormulaError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.axis
            .evaluate_with_policy(input.load, &input.slip_angles, self.policy)
    }
}

/// Two-axis Magic Formula model producing side and brake force.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MagicFormulaTire {
    tire: TireModel,
}

impl MagicFormulaTire {
    #[must_use]
    pub fn new(tire: TireModel) -> Self {
        Self { tire }
    }
}

impl Model for MagicFormulaTire {
    type Input = TireInput;
    type Output = TireForces;
    type Error = MagicFormulaError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.tire.try_forces(input.load, &input.slip_angles)
    }
}
