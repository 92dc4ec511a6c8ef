//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, pressure, power).
//! This module provides extensions that are useful for condenser sizing but
//! aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The zone sizer needs the driving temperature difference between the
//! refrigerant and the entering air. [`TemperatureDifference::minus`] returns
//! that difference as a [`TemperatureInterval`](uom::si::f64::TemperatureInterval):
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::degree_celsius};
//! use twine_condenser::support::units::TemperatureDifference;
//!
//! let t_cond = ThermodynamicTemperature::new::<degree_celsius>(57.0);
//! let t_air = ThermodynamicTemperature::new::<degree_celsius>(45.0);
//! let delta_t = t_cond.minus(t_air);
//! assert!((delta_t.get::<delta_kelvin>() - 12.0).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::SpecificEnthalpy;
pub use temperature_difference::TemperatureDifference;
