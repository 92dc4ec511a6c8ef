//! Effectiveness-NTU building blocks.
//!
//! The effectiveness-NTU method relates exchanger performance to its thermal
//! size (NTU = UA / `C_min`) and the capacity ratio of the streams.
//! Condenser zone sizing runs the method backwards: the duty fixes the
//! effectiveness, and the NTU that delivers it fixes the area.
//!
//! This toolkit provides:
//!
//! - **Core types**: [`CapacitanceRate`], [`CapacityRatio`], [`Effectiveness`], [`Ntu`]
//! - **Flow arrangements**: [`CrossFlow`] with [`Unmixed`] streams
//!
//! # Example
//!
//! ```
//! use twine_condenser::support::constraint::ConstraintResult;
//! use twine_condenser::support::hx::{
//!     CapacityRatio, CrossFlow, EffectivenessRelation, Ntu, Unmixed,
//! };
//! use uom::si::ratio::ratio;
//!
//! fn main() -> ConstraintResult<()> {
//!     let coil = CrossFlow::<Unmixed, Unmixed>::new();
//!     let eff = coil.effectiveness(Ntu::new(1.0)?, CapacityRatio::new(1e-6)?)?;
//!
//!     // A vanishing capacity ratio approaches `1 - exp(-NTU)`.
//!     assert!((eff.get::<ratio>() - (1.0 - (-1.0_f64).exp())).abs() < 1e-6);
//!     Ok(())
//! }
//! ```

pub mod arrangement;
mod capacitance_rate;
mod capacity_ratio;
mod effectiveness_ntu;

pub use arrangement::{CrossFlow, Unmixed};
pub use capacitance_rate::CapacitanceRate;
pub use capacity_ratio::CapacityRatio;
pub use effectiveness_ntu::{Effectiveness, EffectivenessRelation, Ntu};
