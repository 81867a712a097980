//! Vehicle dynamics models.

pub mod tire;
