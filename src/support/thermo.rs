//! Thermodynamic property capabilities for refrigerant state points.
//!
//! The condenser model never computes refrigerant properties itself. It asks a
//! thermo model for a [`State`] built from temperature and pressure, or from
//! temperature and [`VaporQuality`], and then for that state's enthalpy.
//! Any model implementing the [`capability`] traits can serve.

mod error;
mod quality;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use quality::VaporQuality;
pub use state::State;
