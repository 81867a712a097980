//! Uncoupled two-axis tire model.

use uom::si::f64::{Angle, Force};

use super::{AxisConfig, LoadUnit, MagicFormulaError, NonFinitePolicy, TireForces};

/// Lateral and longitudinal Magic Formula axes evaluated side by side.
///
/// The axes share the load and slip angle sweep but never interact: there is
/// no combined-slip coupling between side and brake force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TireModel {
    /// Side force (`Fy`) configuration.
    pub lateral: AxisConfig,

    /// Brake force (`Fx`) configuration.
    pub longitudinal: AxisConfig,

    /// Treatment of non-finite forces in [`TireModel::try_forces`].
    pub policy: NonFinitePolicy,
}

impl Default for TireModel {
    fn default() -> Self {
        Self {
            lateral: AxisConfig::lateral(),
            longitudinal: AxisConfig::longitudinal(),
            policy: NonFinitePolicy::default(),
        }
    }
}

impl TireModel {
    /// Creates a model from two axis configurations.
    #[must_use]
    pub fn new(lateral: AxisConfig, longitudinal: AxisConfig) -> Self {
        Self {
            lateral,
            longitudinal,
            policy: NonFinitePolicy::default(),
        }
    }

    /// Returns this model with both axes evaluating loads in `load_unit`.
    #[must_use]
    pub fn with_load_unit(mut self, load_unit: LoadUnit) -> Self {
        self.lateral = self.lateral.with_load_unit(load_unit);
        self.longitudinal = self.longitudinal.with_load_unit(load_unit);
        self
    }

    /// Returns this model with a different non-finite policy.
    #[must_use]
    pub fn with_policy(mut self, policy: NonFinitePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Evaluates both axes, keeping any non-finite forces in place.
    #[must_use]
    pub fn forces(&self, load: Force, slip_angles: &[Angle]) -> TireForces {
        TireForces {
            slip_angles: slip_angles.to_vec(),
            lateral: self.lateral.evaluate(load, slip_angles),
            longitudinal: self.longitudinal.evaluate(load, slip_angles),
        }
    }

    /// Evaluates both axes under the configured [`NonFinitePolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`MagicFormulaError::Indeterminate`] if the policy is
    /// [`NonFinitePolicy::Reject`] and either axis produces a non-finite force.
    pub fn try_forces(
        &self,
        load: Force,
        slip_angles: &[Angle],
    ) -> Result<TireForces, MagicFormulaError> {
        Ok(TireForces {
            slip_angles: slip_angles.to_vec(),
            lateral: self
                .lateral
                .evaluate_with_policy(load, slip_angles, self.policy)?,
            longitudinal: self
                .longitudinal
                .evaluate_with_policy(load, slip_angles, self.policy)?,
        })
    }
}
