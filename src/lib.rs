//! # Twine Tire Models
//!
//! Pacejka "Magic Formula" tire force models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use twine_tire_models::models::vehicle::tire::TireModel;
//! use twine_tire_models::support::sweep::slip_sweep;
//! use uom::si::{angle::degree, f64::{Angle, Force}, force::newton};
//!
//! let model = TireModel::default();
//! let slip_angles = slip_sweep(Angle::new::<degree>(10.0), 100);
//! let forces = model.forces(Force::new::<newton>(2452.5), &slip_angles);
//!
//! assert_eq!(forces.lateral.len(), 100);
//! assert_eq!(forces.longitudinal.len(), 100);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
