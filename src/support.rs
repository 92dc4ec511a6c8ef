//! Crate-level utilities shared by models.
//!
//! - [`constraint`]: Type-level numeric invariants.
//! - [`hx`]: Effectiveness-NTU building blocks.
//! - [`thermo`]: Thermodynamic property capabilities and models.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod hx;
pub mod thermo;
pub mod units;
