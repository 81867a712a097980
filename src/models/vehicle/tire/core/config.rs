//! Coefficient tables and per-axis configuration.

use crate::support::constraint::{Constrained, NonZero};
use uom::si::{
    f64::Force,
    force::{kilonewton, newton},
};

use super::MagicFormulaError;

/// Magic Formula shape factor `C`.
///
/// The stiffness factor divides by `C`, so it must not be zero.
pub type ShapeFactor = Constrained<f64, NonZero>;

/// Ordered Magic Formula coefficients `[a1, .., a8]`.
///
/// The formula reads every coefficient except `a6`. It is kept so tables can
/// be copied verbatim from their published source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSet([f64; 8]);

impl CoefficientSet {
    /// Number of coefficients in a table.
    pub const LEN: usize = 8;

    /// Lateral (side force, `Fy`) coefficients.
    pub const LATERAL: Self = Self::new([-22.1, 1011.0, 1078.0, 1.82, 0.208, 0.000, -0.354, 0.707]);

    /// Longitudinal (brake force, `Fx`) coefficients.
    pub const LONGITUDINAL: Self =
        Self::new([-21.3, 1144.0, 49.6, 226.0, 0.069, -0.006, 0.056, 0.486]);

    /// Creates a coefficient set from exactly eight values.
    #[must_use]
    pub const fn new(values: [f64; 8]) -> Self {
        Self(values)
    }

    /// Creates a coefficient set from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`MagicFormulaError::InvalidConfiguration`] unless the slice
    /// holds exactly [`CoefficientSet::LEN`] values.
    pub fn from_slice(values: &[f64]) -> Result<Self, MagicFormulaError> {
        <[f64; 8]>::try_from(values)
            .map(Self)
            .map_err(|_| MagicFormulaError::InvalidConfiguration { len: values.len() })
    }

    /// Returns the coefficients in order.
    #[must_use]
    pub const fn values(&self) -> &[f64; 8] {
        &self.0
    }
}

impl From<[f64; 8]> for CoefficientSet {
    fn from(values: [f64; 8]) -> Self {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for CoefficientSet {
    type Error = MagicFormulaError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

/// Unit the normal load is expressed in when it enters the formula.
///
/// Coefficient tables are fitted against a specific load unit. The built-in
/// tables are evaluated with the load in newtons, which reproduces the
/// reference force curves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadUnit {
    #[default]
    Newton,
    Kilonewton,
}

impl LoadUnit {
    /// Returns the numeric value of `load` in this unit.
    #[must_use]
    pub fn value_of(self, load: Force) -> f64 {
        match self {
            Self::Newton => load.get::<newton>(),
            Self::Kilonewton => load.get::<kilonewton>(),
        }
    }
}

/// Configuration for a single force axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    /// Coefficients `[a1, .., a8]`.
    pub coefficients: CoefficientSet,

    /// Shape factor `C`.
    pub shape_factor: ShapeFactor,

    /// Unit of the load value fed into the coefficient polynomials.
    pub load_unit: LoadUnit,
}

impl AxisConfig {
    /// Creates an axis configuration that evaluates loads in newtons.
    #[must_use]
    pub const fn new(coefficients: CoefficientSet, shape_factor: ShapeFactor) -> Self {
        Self {
            coefficients,
            shape_factor,
            load_unit: LoadUnit::Newton,
        }
    }

    /// Creates an axis configuration from unvalidated values.
    ///
    /// # Errors
    ///
    /// Returns [`MagicFormulaError::InvalidConfiguration`] if `coefficients`
    /// does not hold eight values, or [`MagicFormulaError::InvalidShapeFactor`]
    /// if `shape_factor` is zero or `NaN`.
    pub fn try_new(coefficients: &[f64], shape_factor: f64) -> Result<Self, MagicFormulaError> {
        let coefficients = CoefficientSet::from_slice(coefficients)?;
        let shape_factor = ShapeFactor::new(shape_factor)?;
        Ok(Self::new(coefficients, shape_factor))
    }

    /// Built-in lateral (side force) configuration, `C = 1.30`.
    #[must_use]
    pub const fn lateral() -> Self {
        Self::new(CoefficientSet::LATERAL, ShapeFactor::new_unchecked(1.30))
    }

    /// Built-in longitudinal (brake force) configuration, `C = 1.65`.
    #[must_use]
    pub const fn longitudinal() -> Self {
        Self::new(CoefficientSet::LONGITUDINAL, ShapeFactor::new_unchecked(1.65))
    }

    /// Returns this configuration with a different load unit.
    #[must_use]
    pub fn with_load_unit(mut self, load_unit: LoadUnit) -> Self {
        self.load_unit = load_unit;
        self
    }
}
