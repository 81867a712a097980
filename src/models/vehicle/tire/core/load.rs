//! Normal load on a single tire.

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::standard_gravity,
};
use uom::si::f64::{Force, Mass};

/// Returns the normal load on each contact point when `mass` rests evenly on
/// `contact_points` tires.
///
/// No load transfer is modeled: every tire carries the same share.
///
/// # Example
///
/// ```
/// use twine_tire_models::models::vehicle::tire::wheel_load;
/// use twine_tire_models::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Mass, force::newton, mass::kilogram};
///
/// let load = wheel_load(Mass::new::<kilogram>(1000.0), StrictlyPositive::new(4).unwrap());
/// assert_eq!(load.get::<newton>(), 2452.5);
/// ```
#[must_use]
pub fn wheel_load(mass: Mass, contact_points: Constrained<u32, StrictlyPositive>) -> Force {
    let weight: Force = mass * standard_gravity();
    weight / f64::from(contact_points.into_inner())
}

/// Returns the per-tire load for a four-wheeled vehicle.
#[must_use]
pub fn wheel_load_four_wheels(mass: Mass) -> Force {
    wheel_load(mass, Constrained::new_unchecked(4))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{force::newton, mass::kilogram};

    #[test]
    fn splits_weight_evenly() {
        let mass = Mass::new::<kilogram>(1000.0);

        assert_relative_eq!(wheel_load_four_wheels(mass).get::<newton>(), 2452.5);
        assert_relative_eq!(
            wheel_load(mass, StrictlyPositive::new(2).unwrap()).get::<newton>(),
            4905.0
        );
    }

    #[test]
    fn massless_vehicle_has_no_load() {
        let load = wheel_load_four_wheels(Mass::new::<kilogram>(0.0));
        assert_eq!(load.get::<newton>(), 0.0);
    }
}
