//! Canonical refrigerant identifiers.
//!
//! A fluid type names a substance; each thermo model decides how that name is
//! interpreted (for example, the backend identifiers used by
//! [`CoolProp`](crate::support::thermo::model)).

mod r134a;
mod r407c;

pub use r134a::R134a;
pub use r407c::R407C;
