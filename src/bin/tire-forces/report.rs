use std::io::{self, Write};

use log::warn;
use twine_tire_models::models::vehicle::tire::{ForceSequence, TireForces};
use uom::si::{f64::Force, force::newton};

/// Writes the console summary for a completed sweep.
pub fn write_summary(
    out: &mut impl Write,
    slip: f64,
    weight: f64,
    forces: &TireForces,
) -> io::Result<()> {
    warn_indeterminate("side", &forces.lateral);
    warn_indeterminate("brake", &forces.longitudinal);

    writeln!(
        out,
        "Computed tire forces for slip angle {slip:?} degrees and weight {weight:?} kg:"
    )?;
    writeln!(out, "Max Side Force: {}", format_peak(forces.lateral.peak()))?;
    writeln!(out, "Max Brake Force: {}", format_peak(forces.longitudinal.peak()))?;
    Ok(())
}

/// Formats a peak force in newtons with two decimals, or `n/a` if there is none.
pub fn format_peak(peak: Option<Force>) -> String {
    match peak {
        // Adding zero turns a negative zero into zero.
        Some(force) => format!("{:.2} N", force.get::<newton>() + 0.0),
        None => "n/a".to_string(),
    }
}

fn warn_indeterminate(label: &str, forces: &ForceSequence) {
    let count = forces.indeterminate_count();
    if count > 0 {
        warn!(
            "{count} of {} {label} force samples are not finite and were left out of the maximum",
            forces.len()
        );
    }
}

pub fn print_error(err: &anyhow::Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "error: {err}");

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "  caused by: {cause}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use twine_tire_models::{
        models::vehicle::tire::{LoadUnit, TireModel},
        support::sweep::slip_sweep,
    };
    use uom::si::{angle::degree, f64::Angle};

    fn summary(forces: &TireForces) -> String {
        let mut out = Vec::new();
        write_summary(&mut out, 10.0, 1000.0, forces).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reports_two_decimal_maxima() {
        let slips = slip_sweep(Angle::new::<degree>(10.0), 100);
        let forces = TireModel::default()
            .with_load_unit(LoadUnit::Kilonewton)
            .forces(Force::new::<newton>(2452.5), &slips);

        let text = summary(&forces);
        let lateral = forces.lateral.peak().unwrap().get::<newton>();
        let longitudinal = forces.longitudinal.peak().unwrap().get::<newton>();

        assert_eq!(
            text,
            format!(
                "Computed tire forces for slip angle 10.0 degrees and weight 1000.0 kg:\n\
                 Max Side Force: {lateral:.2} N\n\
                 Max Brake Force: {longitudinal:.2} N\n"
            )
        );
        assert!(text.contains("Max Side Force: 2069.13 N"));
        assert!(text.contains("Max Brake Force: 2609.23 N"));
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_peak(Some(Force::new::<newton>(-0.0))), "0.00 N");
    }

    #[test]
    fn missing_peak_prints_placeholder() {
        assert_eq!(format_peak(None), "n/a");

        let slips = slip_sweep(Angle::new::<degree>(10.0), 5);
        let forces = TireModel::default().forces(Force::new::<newton>(0.0), &slips);
        let text = summary(&forces);
        assert!(text.contains("Max Side Force: n/a"));
        assert!(text.contains("Max Brake Force: n/a"));
    }
}
