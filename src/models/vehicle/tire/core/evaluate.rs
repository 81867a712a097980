//! Single-axis Magic Formula evaluation.

use log::{debug, warn};
use uom::si::{
    angle::degree,
    f64::{Angle, Force},
    force::newton,
};

use super::{
    AxisConfig, CoefficientSet, ForceSequence, MagicFormulaError, MagicFormulaFactors,
    ShapeFactor,
};

/// How an evaluation treats non-finite forces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NonFinitePolicy {
    /// Keep non-finite forces in the returned sequence.
    #[default]
    Propagate,

    /// Fail the whole evaluation at the first non-finite force.
    Reject,
}

/// Evaluates the Magic Formula for one axis with the load in newtons.
///
/// Returns one force per slip angle. Slip angles are fed to the formula in
/// degrees. Non-finite results (for example from a load where the peak factor
/// vanishes) are returned in place rather than treated as an error.
///
/// # Example
///
/// ```
/// use twine_tire_models::models::vehicle::tire::{evaluate, AxisConfig};
/// use uom::si::{angle::degree, f64::{Angle, Force}, force::newton};
///
/// let axis = AxisConfig::lateral();
/// let forces = evaluate(
///     Force::new::<newton>(2452.5),
///     &[Angle::new::<degree>(0.0), Angle::new::<degree>(5.0)],
///     &axis.coefficients,
///     axis.shape_factor,
/// );
///
/// assert_eq!(forces.len(), 2);
/// assert_eq!(forces[0].get::<newton>(), 0.0);
/// ```
#[must_use]
pub fn evaluate(
    load: Force,
    slip_angles: &[Angle],
    coefficients: &CoefficientSet,
    shape_factor: ShapeFactor,
) -> ForceSequence {
    AxisConfig::new(*coefficients, shape_factor).evaluate(load, slip_angles)
}

/// Evaluates the Magic Formula from an unvalidated coefficient table.
///
/// # Errors
///
/// Returns [`MagicFormulaError::InvalidConfiguration`] if `coefficients` does
/// not hold exactly eight values, or [`MagicFormulaError::InvalidShapeFactor`]
/// if `shape_factor` is zero or `NaN`.
pub fn evaluate_with_table(
    load: Force,
    slip_angles: &[Angle],
    coefficients: &[f64],
    shape_factor: f64,
) -> Result<ForceSequence, MagicFormulaError> {
    Ok(AxisConfig::try_new(coefficients, shape_factor)?.evaluate(load, slip_angles))
}

impl AxisConfig {
    /// Returns the Magic Formula factors at `load`.
    #[must_use]
    pub fn factors(&self, load: Force) -> MagicFormulaFactors {
        let factors = MagicFormulaFactors::at_load(
            &self.coefficients,
            self.shape_factor.into_inner(),
            self.load_unit.value_of(load),
        );
        debug!(
            "magic formula factors at {:.3} N: B={:.6} C={:.3} D={:.3} E={:.6}",
            load.get::<newton>(),
            factors.stiffness,
            factors.shape,
            factors.peak,
            factors.curvature
        );
        factors
    }

    /// Returns the Magic Formula factors at `load`, failing on a degenerate load.
    ///
    /// # Errors
    ///
    /// Returns [`MagicFormulaError::DegenerateLoad`] if the peak factor is zero
    /// or any factor is not finite.
    pub fn try_factors(&self, load: Force) -> Result<MagicFormulaFactors, MagicFormulaError> {
        let factors = self.factors(load);
        if factors.is_finite() {
            Ok(factors)
        } else {
            Err(MagicFormulaError::DegenerateLoad { load })
        }
    }

    /// Evaluates this axis at `load` for each slip angle.
    ///
    /// Non-finite forces are kept in place.
    #[must_use]
    pub fn evaluate(&self, load: Force, slip_angles: &[Angle]) -> ForceSequence {
        let factors = self.factors(load);
        let forces: ForceSequence = slip_angles
            .iter()
            .map(|slip| Force::new::<newton>(factors.force_at(slip.get::<degree>())))
            .collect();

        let indeterminate = forces.indeterminate_count();
        if indeterminate > 0 {
            warn!(
                "{indeterminate} of {} forces are not finite at load {:.3} N",
                forces.len(),
                load.get::<newton>()
            );
        }

        forces
    }

    /// Evaluates this axis at `load`, applying `policy` to non-finite forces.
    ///
    /// # Errors
    ///
    /// Under [`NonFinitePolicy::Reject`], returns
    /// [`MagicFormulaError::Indeterminate`] for the first non-finite force.
    pub fn evaluate_with_policy(
        &self,
        load: Force,
        slip_angles: &[Angle],
        policy: NonFinitePolicy,
    ) -> Result<ForceSequence, MagicFormulaError> {
        let forces = self.evaluate(load, slip_angles);

        if policy == NonFinitePolicy::Reject {
            if let Some(index) = forces.iter().position(|force| !force.value.is_finite()) {
                return Err(MagicFormulaError::Indeterminate {
                    index,
                    slip_angle: slip_angles[index],
                });
            }
        }

        Ok(forces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::vehicle::tire::core::{
        LoadUnit,
        test_support::{degrees, reference_load},
    };
    use crate::support::sweep::slip_sweep;

    #[test]
    fn zero_slip_gives_zero_force() {
        for axis in [AxisConfig::lateral(), AxisConfig::longitudinal()] {
            for load in [2452.5, -800.0, 1.0] {
                let forces = axis.evaluate(Force::new::<newton>(load), &degrees(&[0.0]));
                assert_eq!(forces[0].get::<newton>(), 0.0);
            }
        }
    }

    #[test]
    fn odd_in_slip_angle() {
        let axis = AxisConfig::lateral().with_load_unit(LoadUnit::Kilonewton);
        let slips = [0.3, 1.0, 2.5, 7.0, 12.0];
        let negated: Vec<f64> = slips.iter().map(|s| -s).collect();

        let positive = axis.evaluate(reference_load(), &degrees(&slips));
        let negative = axis.evaluate(reference_load(), &degrees(&negated));

        for (pos, neg) in positive.iter().zip(negative.iter()) {
            assert_relative_eq!(
                neg.get::<newton>(),
                -pos.get::<newton>(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn output_length_matches_input() {
        let axis = AxisConfig::longitudinal();
        for samples in [0, 1, 100] {
            let slips = slip_sweep(Angle::new::<degree>(10.0), samples);
            assert_eq!(axis.evaluate(reference_load(), &slips).len(), samples);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let axis = AxisConfig::lateral();
        let slips = slip_sweep(Angle::new::<degree>(10.0), 100);

        let first = axis.evaluate(reference_load(), &slips);
        let second = axis.evaluate(reference_load(), &slips);
        assert_eq!(first, second);
    }

    #[test]
    fn table_length_is_checked() {
        let slips = degrees(&[1.0]);
        let load = reference_load();

        for len in [7, 9] {
            let table = vec![1.0; len];
            assert_eq!(
                evaluate_with_table(load, &slips, &table, 1.3),
                Err(MagicFormulaError::InvalidConfiguration { len })
            );
        }

        let forces =
            evaluate_with_table(load, &slips, CoefficientSet::LATERAL.values(), 1.30).unwrap();
        assert_eq!(forces, AxisConfig::lateral().evaluate(load, &slips));
    }

    #[test]
    fn matches_reference_values_in_kilonewtons() {
        // Hand-evaluated at Fz = 2.4525 kN.
        let axis = AxisConfig::lateral().with_load_unit(LoadUnit::Kilonewton);
        let forces = axis.evaluate(reference_load(), &degrees(&[0.5, 1.6, 5.0]));

        assert_relative_eq!(forces[0].get::<newton>(), 1797.061_892_418_9, max_relative = 1e-9);
        assert_relative_eq!(forces[1].get::<newton>(), 2069.221_365_075_3, max_relative = 1e-9);
        assert_relative_eq!(forces[2].get::<newton>(), 1604.374_302_947_6, max_relative = 1e-9);
    }

    #[test]
    fn zero_load_propagates_nan() {
        let axis = AxisConfig::lateral();
        let zero = Force::new::<newton>(0.0);
        let slips = degrees(&[0.0, 1.0, 2.0]);

        let forces = axis.evaluate(zero, &slips);
        assert_eq!(forces.len(), 3);
        assert_eq!(forces.indeterminate_count(), 3);

        assert!(axis.evaluate_with_policy(zero, &slips, NonFinitePolicy::Propagate).is_ok());
        assert_eq!(
            axis.evaluate_with_policy(zero, &slips, NonFinitePolicy::Reject),
            Err(MagicFormulaError::Indeterminate {
                index: 0,
                slip_angle: slips[0],
            })
        );
        assert_eq!(
            axis.try_factors(zero),
            Err(MagicFormulaError::DegenerateLoad { load: zero })
        );
    }

    #[test]
    fn reject_policy_passes_finite_results() {
        let axis = AxisConfig::longitudinal();
        let slips = slip_sweep(Angle::new::<degree>(10.0), 100);

        let strict = axis
            .evaluate_with_policy(reference_load(), &slips, NonFinitePolicy::Reject)
            .unwrap();
        assert_eq!(strict, axis.evaluate(reference_load(), &slips));
    }
}
