use std::{error::Error, path::Path};

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use twine_tire_models::models::vehicle::tire::{ForceSequence, TireForces};
use uom::si::{angle::degree, force::newton};

const SIZE: (u32, u32) = (1024, 768);

/// Renders side and brake force against slip angle as a PNG chart.
///
/// Non-finite samples leave gaps in their series.
pub fn render(path: &Path, forces: &TireForces) -> Result<(), Box<dyn Error>> {
    let xs: Vec<f64> = forces
        .slip_angles
        .iter()
        .map(|angle| angle.get::<degree>())
        .collect();
    let lateral = newtons(&forces.lateral);
    let longitudinal = newtons(&forces.longitudinal);

    let (x_min, x_max) = padded_range(xs.iter().copied());
    let (y_min, y_max) = padded_range(lateral.iter().chain(longitudinal.iter()).copied());

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Side & Brake Force vs. Slip Angle", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Slip Angle (Degrees)")
        .y_desc("Force (N)")
        .draw()?;

    for (i, segment) in finite_segments(&xs, &lateral).into_iter().enumerate() {
        let series = chart.draw_series(LineSeries::new(segment, BLUE.stroke_width(2)))?;
        if i == 0 {
            series.label("Side Force (Fy)").legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2))
            });
        }
    }

    for (i, segment) in finite_segments(&xs, &longitudinal)
        .into_iter()
        .enumerate()
    {
        let series = chart.draw_series(DashedLineSeries::new(
            segment,
            10,
            6,
            RED.stroke_width(2),
        ))?;
        if i == 0 {
            series.label("Brake Force (Fx)").legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2))
            });
        }
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn newtons(forces: &ForceSequence) -> Vec<f64> {
    forces.iter().map(|force| force.get::<newton>()).collect()
}

/// Splits paired samples into runs of finite points.
fn finite_segments(xs: &[f64], ys: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (&x, &y) in xs.iter().zip(ys) {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Returns a plotting range covering every finite value with a small margin.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return (0.0, 1.0);
    }
    if min == max {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.05 };
        return (min - pad, max + pad);
    }

    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_split_on_gaps() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, f64::NAN, 2.0, 3.0, f64::INFINITY];

        assert_eq!(
            finite_segments(&xs, &ys),
            vec![vec![(0.0, 0.0)], vec![(2.0, 2.0), (3.0, 3.0)]]
        );
        assert!(finite_segments(&xs, &[f64::NAN; 5]).is_empty());
    }

    #[test]
    fn ranges_are_never_empty() {
        assert_eq!(padded_range([0.0, 0.0].into_iter()), (-1.0, 1.0));
        assert_eq!(padded_range([f64::NAN].into_iter()), (0.0, 1.0));

        let (lo, hi) = padded_range([0.0, 10.0, f64::NAN].into_iter());
        assert_eq!((lo, hi), (-0.5, 10.5));
    }
}
