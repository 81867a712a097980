use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly greater than zero.
///
/// # Examples
///
/// ```
/// use twine_tire_models::support::constraint::{Constrained, StrictlyPositive};
///
/// // Four tires share the vehicle weight:
/// let contact_points = Constrained::<u32, StrictlyPositive>::new(4).unwrap();
/// assert_eq!(contact_points.into_inner(), 4);
///
/// assert!(StrictlyPositive::new(0_u32).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Force, force::newton};

    #[test]
    fn integers() {
        let wheels = StrictlyPositive::new(4_u32).unwrap();
        assert_eq!(wheels.as_ref(), &4);
        assert_eq!(StrictlyPositive::new(0_u32), Err(ConstraintError::Zero));
    }

    #[test]
    fn forces() {
        assert!(StrictlyPositive::new(Force::new::<newton>(2452.5)).is_ok());
        assert!(StrictlyPositive::new(Force::new::<newton>(0.0)).is_err());
        assert!(StrictlyPositive::new(Force::new::<newton>(-1.0)).is_err());
    }
}
