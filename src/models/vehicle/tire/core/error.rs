use thiserror::Error;
use uom::si::f64::{Angle, Force};

use crate::support::constraint::ConstraintError;

/// Errors that can occur while configuring or evaluating the Magic Formula.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MagicFormulaError {
    /// A coefficient table did not hold exactly eight values.
    #[error("coefficient table must hold 8 values, got {len}")]
    InvalidConfiguration {
        /// Number of values supplied.
        len: usize,
    },

    /// The shape factor was zero or not a number.
    #[error("invalid shape factor")]
    InvalidShapeFactor(#[from] ConstraintError),

    /// The peak factor `D` vanished (or was not finite) at this load.
    #[error("degenerate load: peak factor is zero or non-finite at load={load:?}")]
    DegenerateLoad {
        /// Load that produced the degenerate factors.
        load: Force,
    },

    /// The formula produced a non-finite force.
    ///
    /// Only returned under [`NonFinitePolicy::Reject`](super::NonFinitePolicy::Reject).
    #[error("indeterminate force at sample {index}: slip_angle={slip_angle:?}")]
    Indeterminate {
        /// Position of the first offending sample.
        index: usize,

        /// Slip angle of the first offending sample.
        slip_angle: Angle,
    },
}
