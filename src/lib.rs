#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Twine Condenser
//!
//! Thermal sizing of air-cooled refrigerant condenser coils for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given refrigerant state points and air-side conditions, the condenser
//! model splits the heat rejection into desuperheating, condensing, and
//! subcooling zones, sizes each zone with the effectiveness-NTU method, and
//! estimates the coil geometry implied by the required area.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific utility code starts in a model's internal `core` module and
//! only moves to [`support`] once it is useful across models.

pub mod models;
pub mod support;
