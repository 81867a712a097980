//! Pacejka Magic Formula force evaluation.
//!
//! The Magic Formula maps a slip angle `α` to a tire force through four
//! load-dependent factors:
//!
//! ```text
//! F(α) = D·sin(C·atan(B·φ)),   φ = (1 - E)·α + (E / B)·atan(B·α)
//! ```
//!
//! `D`, `B` and `E` are polynomials in the normal load whose coefficients come
//! from a fitted eight-value table (see [`CoefficientSet`]); `C` is a fixed
//! shape factor. Each force axis (side force `Fy`, brake force `Fx`) has its
//! own table and is evaluated independently.
//!
//! Slip angles enter the formula as plain degree values. The built-in tables
//! were fitted that way, so no radian conversion is applied.

mod config;
mod error;
mod evaluate;
mod factors;
mod forces;
mod load;
mod peak;
mod tire_model;

#[cfg(test)]
mod test_support;

pub use config::{AxisConfig, CoefficientSet, LoadUnit, ShapeFactor};
pub use error::MagicFormulaError;
pub use evaluate::{NonFinitePolicy, evaluate, evaluate_with_table};
pub use factors::MagicFormulaFactors;
pub use forces::{ForceSequence, TireForces};
pub use load::{wheel_load, wheel_load_four_wheels};
pub use peak::{Peak, PeakSearchConfig, PeakSearchError};
pub use tire_model::TireModel;
