//! Thermodynamic property models.
//!
//! Refrigerant properties need a real-fluid equation of state; enable the
//! `coolprop` feature for one.

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub mod coolprop;

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub use coolprop::CoolProp;
