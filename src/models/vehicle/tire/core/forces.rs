//! Force sequences produced by the Magic Formula.

use std::ops::Deref;

use uom::si::f64::{Angle, Force};

/// Forces computed for a sequence of slip angles.
///
/// Entry `i` is the force at the `i`-th input slip angle. Non-finite entries
/// are kept in place so one degenerate sample never hides the others; the
/// reporting helpers skip them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForceSequence(Vec<Force>);

impl ForceSequence {
    /// Returns the index of the largest finite force.
    ///
    /// Ties resolve to the first occurrence.
    /// Returns `None` if the sequence has no finite entries.
    #[must_use]
    pub fn peak_index(&self) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, force)| force.value.is_finite())
            .fold(None, |best: Option<(usize, Force)>, (i, &force)| match best {
                Some((_, max)) if max >= force => best,
                _ => Some((i, force)),
            })
            .map(|(i, _)| i)
    }

    /// Returns the largest finite force, ignoring `NaN` and infinite entries.
    #[must_use]
    pub fn peak(&self) -> Option<Force> {
        self.peak_index().map(|i| self.0[i])
    }

    /// Returns the number of non-finite entries.
    #[must_use]
    pub fn indeterminate_count(&self) -> usize {
        self.0.iter().filter(|force| !force.value.is_finite()).count()
    }

    /// Consumes the sequence and returns the underlying forces.
    #[must_use]
    pub fn into_inner(self) -> Vec<Force> {
        self.0
    }
}

impl Deref for ForceSequence {
    type Target = [Force];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Force>> for ForceSequence {
    fn from(forces: Vec<Force>) -> Self {
        Self(forces)
    }
}

impl FromIterator<Force> for ForceSequence {
    fn from_iter<I: IntoIterator<Item = Force>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ForceSequence {
    type Item = Force;
    type IntoIter = std::vec::IntoIter<Force>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Lateral and longitudinal forces over a shared slip angle sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct TireForces {
    /// Slip angles the forces were evaluated at.
    pub slip_angles: Vec<Angle>,

    /// Side force `Fy` at each slip angle.
    pub lateral: ForceSequence,

    /// Brake force `Fx` at each slip angle.
    pub longitudinal: ForceSequence,
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::force::newton;

    fn sequence(values: &[f64]) -> ForceSequence {
        values.iter().map(|&v| Force::new::<newton>(v)).collect()
    }

    #[test]
    fn peak_skips_non_finite_entries() {
        let forces = sequence(&[0.0, f64::NAN, 12.5, f64::INFINITY, 3.0]);

        assert_eq!(forces.peak_index(), Some(2));
        assert_eq!(forces.peak(), Some(Force::new::<newton>(12.5)));
        assert_eq!(forces.indeterminate_count(), 2);
    }

    #[test]
    fn peak_prefers_first_of_equal_values() {
        let forces = sequence(&[1.0, 4.0, 4.0, 2.0]);
        assert_eq!(forces.peak_index(), Some(1));
    }

    #[test]
    fn peak_of_negative_forces() {
        let forces = sequence(&[-0.0, -5.0, -2.0]);
        assert_eq!(forces.peak_index(), Some(0));
    }

    #[test]
    fn no_peak_without_finite_entries() {
        assert_eq!(ForceSequence::default().peak(), None);
        assert_eq!(sequence(&[f64::NAN, f64::NAN]).peak(), None);
    }
}
