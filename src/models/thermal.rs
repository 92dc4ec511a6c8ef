//! Thermal systems models.
//!
//! This module contains models for refrigerant-to-air heat rejection
//! equipment.

pub mod condenser;
