//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (loads, masses, slip
//! angles). This module collects the small helpers models need that [`uom`]
//! doesn't provide on its own.

use uom::si::{acceleration::meter_per_second_squared, f64::Acceleration};

/// Gravitational acceleration used to turn vehicle mass into tire load.
///
/// The Magic Formula tables shipped with this crate were paired with a
/// rounded `g = 9.81 m/s²`, not the exact standard value of `9.80665 m/s²`.
///
/// ```
/// use twine_tire_models::support::units::standard_gravity;
/// use uom::si::acceleration::meter_per_second_squared;
///
/// assert_eq!(standard_gravity().get::<meter_per_second_squared>(), 9.81);
/// ```
#[must_use]
pub fn standard_gravity() -> Acceleration {
    Acceleration::new::<meter_per_second_squared>(9.81)
}
