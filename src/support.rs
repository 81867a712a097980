//! Supporting utilities used by models.

pub mod constraint;
pub mod sweep;
pub mod units;
