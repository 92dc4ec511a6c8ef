use uom::si::{
    f64::{MassDensity, Ratio, SpecificHeatCapacity},
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use super::NtuSolverConfig;

/// Fixed air properties and solver settings for a sizing run.
///
/// The defaults describe dry air near 60 °C and treat the refrigerant side of
/// every single-phase zone as having nearly unbounded capacity.
#[derive(Debug, Clone, Copy)]
pub struct SizingConfig {
    /// Air density used to convert volumetric flow to mass flow.
    pub air_density: MassDensity,

    /// Air specific heat at constant pressure.
    pub air_specific_heat: SpecificHeatCapacity,

    /// Capacity ratio applied to single-phase zones.
    ///
    /// Desuperheating and subcooling are sized as if the refrigerant side had
    /// far more capacity than the air. Raise this toward the real
    /// `C_min / C_max` to correct that.
    pub capacity_ratio: Ratio,

    /// Settings for the iterative NTU solve.
    pub ntu_solver: NtuSolverConfig,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            air_density: MassDensity::new::<kilogram_per_cubic_meter>(1.06),
            air_specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1006.0),
            capacity_ratio: Ratio::new::<ratio>(1e-6),
            ntu_solver: NtuSolverConfig::default(),
        }
    }
}
