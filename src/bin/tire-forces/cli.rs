use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use twine_tire_models::{
    models::vehicle::tire::{
        AxisConfig, CoefficientSet, LoadUnit, MagicFormulaError, ShapeFactor, TireModel,
    },
    support::sweep::DEFAULT_SAMPLES,
};

#[derive(Parser, Debug)]
#[command(
    name = "tire-forces",
    about = "Compute and plot tire forces based on slip angle",
    version
)]
pub struct Cli {
    /// Slip angle sweep endpoint, in degrees
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub slip: f64,

    /// Vehicle weight, in kilograms
    #[arg(long, value_name = "KG", allow_negative_numbers = true)]
    pub weight: f64,

    /// Coefficient of friction (accepted, not used by the Magic Formula)
    #[arg(long, value_name = "MU", allow_negative_numbers = true)]
    pub mu: f64,

    /// Number of slip angle samples
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Chart output file (PNG)
    #[arg(short, long, value_name = "FILE", default_value = "tire_forces_plot.png")]
    pub output: PathBuf,

    /// Skip rendering the chart
    #[arg(long)]
    pub no_plot: bool,

    /// Unit the wheel load is expressed in when fed to the coefficient tables
    #[arg(long, value_enum, default_value_t = LoadUnitArg::Newton)]
    pub load_unit: LoadUnitArg,

    /// Override the side force coefficients (eight values, e.g. --fy-coefficients=-22.1,1011,...)
    #[arg(long, value_name = "A1,..,A8", value_delimiter = ',', allow_hyphen_values = true)]
    pub fy_coefficients: Option<Vec<f64>>,

    /// Override the brake force coefficients (eight values)
    #[arg(long, value_name = "A1,..,A8", value_delimiter = ',', allow_hyphen_values = true)]
    pub fx_coefficients: Option<Vec<f64>>,

    /// Override the side force shape factor C
    #[arg(long, value_name = "C", allow_negative_numbers = true)]
    pub fy_shape: Option<f64>,

    /// Override the brake force shape factor C
    #[arg(long, value_name = "C", allow_negative_numbers = true)]
    pub fx_shape: Option<f64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadUnitArg {
    Newton,
    Kilonewton,
}

impl From<LoadUnitArg> for LoadUnit {
    fn from(arg: LoadUnitArg) -> Self {
        match arg {
            LoadUnitArg::Newton => LoadUnit::Newton,
            LoadUnitArg::Kilonewton => LoadUnit::Kilonewton,
        }
    }
}

impl Cli {
    /// Builds the tire model from the built-in tables and any overrides.
    pub fn tire_model(&self) -> Result<TireModel, MagicFormulaError> {
        let lateral = with_overrides(
            AxisConfig::lateral(),
            self.fy_coefficients.as_deref(),
            self.fy_shape,
        )?;
        let longitudinal = with_overrides(
            AxisConfig::longitudinal(),
            self.fx_coefficients.as_deref(),
            self.fx_shape,
        )?;

        Ok(TireModel::new(lateral, longitudinal).with_load_unit(self.load_unit.into()))
    }
}

fn with_overrides(
    axis: AxisConfig,
    coefficients: Option<&[f64]>,
    shape: Option<f64>,
) -> Result<AxisConfig, MagicFormulaError> {
    let coefficients = match coefficients {
        Some(values) => CoefficientSet::from_slice(values)?,
        None => axis.coefficients,
    };
    let shape_factor = match shape {
        Some(c) => ShapeFactor::new(c)?,
        None => axis.shape_factor,
    };
    Ok(AxisConfig::new(coefficients, shape_factor))
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::error::ErrorKind;

    fn parse_from(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("tire-forces").chain(args.iter().copied()))
    }

    #[test]
    fn required_arguments() {
        let cli = parse_from(&["--slip", "10", "--weight", "1000", "--mu", "0.9"]).unwrap();
        assert_eq!(cli.slip, 10.0);
        assert_eq!(cli.weight, 1000.0);
        assert_eq!(cli.mu, 0.9);
        assert_eq!(cli.samples, 100);
        assert_eq!(cli.output, PathBuf::from("tire_forces_plot.png"));
        assert_eq!(cli.tire_model().unwrap(), TireModel::default());

        let err = parse_from(&["--slip", "10", "--weight", "1000"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse_from(&["--slip", "ten", "--weight", "1000", "--mu", "0.9"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn coefficient_overrides() {
        let cli = parse_from(&[
            "--slip=5",
            "--weight=800",
            "--mu=1.0",
            "--fy-coefficients=-22.1,1011,1078,1.82,0.208,0,-0.354,0.707",
            "--fx-shape=1.5",
            "--load-unit=kilonewton",
        ])
        .unwrap();

        let model = cli.tire_model().unwrap();
        assert_eq!(model.lateral.coefficients, CoefficientSet::LATERAL);
        assert_eq!(model.longitudinal.shape_factor.into_inner(), 1.5);
        assert_eq!(model.lateral.load_unit, LoadUnit::Kilonewton);
    }

    #[test]
    fn short_coefficient_table_is_rejected() {
        let cli = parse_from(&[
            "--slip=5",
            "--weight=800",
            "--mu=1.0",
            "--fx-coefficients=1,2,3,4,5,6,7",
        ])
        .unwrap();

        assert_eq!(
            cli.tire_model(),
            Err(MagicFormulaError::InvalidConfiguration { len: 7 })
        );
    }
}
