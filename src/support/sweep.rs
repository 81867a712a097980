//! Evenly spaced sample sequences.

use uom::si::{angle::degree, f64::Angle};

/// Number of slip angle samples used when none is requested.
pub const DEFAULT_SAMPLES: usize = 100;

/// Returns `samples` evenly spaced values over the closed interval `[start, end]`.
///
/// - `samples == 0` yields an empty vector.
/// - `samples == 1` yields `[start]`.
/// - Otherwise the first value is exactly `start` and the last is exactly `end`.
///
/// # Example
///
/// ```
/// use twine_tire_models::support::sweep::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
#[must_use]
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = samples - 1;
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / last as f64;
            (0..samples)
                .map(|i| {
                    if i == last {
                        end
                    } else {
                        #[allow(clippy::cast_precision_loss)]
                        let i = i as f64;
                        start + i * step
                    }
                })
                .collect()
        }
    }
}

/// Returns a slip angle sweep from zero to `end`, inclusive.
///
/// Samples are spaced evenly in degrees, the unit the Magic Formula
/// coefficient tables expect.
#[must_use]
pub fn slip_sweep(end: Angle, samples: usize) -> Vec<Angle> {
    linspace(0.0, end.get::<degree>(), samples)
        .into_iter()
        .map(Angle::new::<degree>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn single_sample_is_start() {
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }

    #[test]
    fn endpoints_are_exact() {
        let values = linspace(0.0, 10.0, DEFAULT_SAMPLES);
        assert_eq!(values.len(), 100);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[99], 10.0);
        assert_relative_eq!(values[1], 10.0 / 99.0);
    }

    #[test]
    fn descending_interval() {
        assert_eq!(linspace(1.0, -1.0, 3), vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn zero_width_sweep_repeats_zero() {
        let sweep = slip_sweep(Angle::new::<degree>(0.0), DEFAULT_SAMPLES);
        assert_eq!(sweep.len(), 100);
        assert!(sweep.iter().all(|a| a.get::<degree>() == 0.0));
    }

    #[test]
    fn slip_sweep_is_in_degrees() {
        let sweep = slip_sweep(Angle::new::<degree>(10.0), 11);
        for (i, angle) in sweep.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = i as f64;
            assert_relative_eq!(angle.get::<degree>(), expected, epsilon = 1e-12);
        }
    }
}
