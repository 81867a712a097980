use uom::si::{
    angle::degree,
    f64::{Angle, Force},
    force::newton,
};

/// Per-wheel load of a 1000 kg vehicle on four wheels.
pub(super) fn reference_load() -> Force {
    Force::new::<newton>(2452.5)
}

pub(super) fn degrees(values: &[f64]) -> Vec<Angle> {
    values.iter().map(|&v| Angle::new::<degree>(v)).collect()
}
