//! Load-dependent Magic Formula factors.

use super::CoefficientSet;

/// The `B`, `C`, `D`, `E` factors of the Magic Formula at a fixed load.
///
/// All four depend only on the load and the coefficient table, so they are
/// computed once per evaluation and reused for every slip angle:
///
/// ```text
/// D = a1·Fz² + a2·Fz
/// B = (a3·Fz² + a4·Fz) / (C·D)
/// E = a5·Fz² + a7·Fz + a8
/// ```
///
/// When `D` is zero `B` is not finite, and every force computed from these
/// factors is `NaN` (or infinite). Use [`MagicFormulaFactors::is_finite`] to
/// detect that case up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagicFormulaFactors {
    /// Stiffness factor `B`.
    pub stiffness: f64,

    /// Shape factor `C`.
    pub shape: f64,

    /// Peak factor `D`.
    pub peak: f64,

    /// Curvature factor `E`.
    pub curvature: f64,
}

impl MagicFormulaFactors {
    /// Computes the factors for a load value given in the table's load unit.
    #[must_use]
    pub fn at_load(coefficients: &CoefficientSet, shape: f64, load: f64) -> Self {
        let [a1, a2, a3, a4, a5, _a6, a7, a8] = *coefficients.values();
        let load_sq = load * load;

        let peak = a1 * load_sq + a2 * load;
        let stiffness = (a3 * load_sq + a4 * load) / (shape * peak);
        let curvature = a5 * load_sq + a7 * load + a8;

        Self {
            stiffness,
            shape,
            peak,
            curvature,
        }
    }

    /// Returns `true` if every factor is finite and the peak factor is nonzero.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.peak != 0.0
            && self.stiffness.is_finite()
            && self.shape.is_finite()
            && self.peak.is_finite()
            && self.curvature.is_finite()
    }

    /// Evaluates the force at a single slip value.
    ///
    /// The slip value is used as given, without any unit conversion, inside
    /// the arctangents:
    ///
    /// ```text
    /// φ = (1 - E)·α + (E / B)·atan(B·α)
    /// F = D·sin(C·atan(B·φ))
    /// ```
    #[must_use]
    pub fn force_at(&self, slip: f64) -> f64 {
        let Self {
            stiffness: b,
            shape: c,
            peak: d,
            curvature: e,
        } = *self;

        let phi = (1.0 - e) * slip + (e / b) * (b * slip).atan();
        d * (c * (b * phi).atan()).sin()
    }
}
