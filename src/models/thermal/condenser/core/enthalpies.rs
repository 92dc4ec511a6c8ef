//! Refrigerant enthalpies at the four state points bounding the zones.

use uom::si::{available_energy::kilojoule_per_kilogram, f64::ThermodynamicTemperature};

use crate::support::{thermo::VaporQuality, units::SpecificEnthalpy};

use super::{CondenserError, Refrigerant, traits::CondenserThermoModel};

/// Specific enthalpies at the zone boundaries, from coil inlet to outlet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneEnthalpies {
    /// Superheated vapor entering the coil.
    pub superheated_inlet: SpecificEnthalpy,

    /// Saturated vapor at the condensing temperature.
    pub saturated_vapor: SpecificEnthalpy,

    /// Saturated liquid at the condensing temperature.
    pub saturated_liquid: SpecificEnthalpy,

    /// Subcooled liquid leaving the coil.
    pub subcooled_outlet: SpecificEnthalpy,
}

/// Looks up the four boundary enthalpies for `refrigerant`.
///
/// Single-phase points are fixed by temperature and condensing pressure,
/// saturated points by condensing temperature and quality.
pub(super) fn lookup<Fluid: Clone>(
    refrigerant: &Refrigerant<Fluid>,
    thermo: &impl CondenserThermoModel<Fluid>,
) -> Result<ZoneEnthalpies, CondenserError> {
    let pressure = refrigerant.condensing_pressure;

    let single_phase = |label: &str,
                        temperature: ThermodynamicTemperature|
     -> Result<SpecificEnthalpy, CondenserError> {
        let state = thermo
            .state_from((refrigerant.fluid.clone(), temperature, pressure))
            .map_err(|err| CondenserError::lookup_failed(format!("state_from({label})"), err))?;
        thermo
            .enthalpy(&state)
            .map_err(|err| CondenserError::lookup_failed(format!("enthalpy({label})"), err))
    };

    let saturated = |label: &str, quality: VaporQuality| -> Result<SpecificEnthalpy, CondenserError> {
        let state = thermo
            .state_from((refrigerant.fluid.clone(), refrigerant.condensing, quality))
            .map_err(|err| CondenserError::lookup_failed(format!("state_from({label})"), err))?;
        thermo
            .enthalpy(&state)
            .map_err(|err| CondenserError::lookup_failed(format!("enthalpy({label})"), err))
    };

    let enthalpies = ZoneEnthalpies {
        superheated_inlet: single_phase("superheated inlet", refrigerant.superheated_inlet)?,
        saturated_vapor: saturated("saturated vapor", VaporQuality::vapor())?,
        saturated_liquid: saturated("saturated liquid", VaporQuality::liquid())?,
        subcooled_outlet: single_phase("subcooled outlet", refrigerant.subcooled_outlet)?,
    };

    tracing::debug!(
        h_super = enthalpies.superheated_inlet.get::<kilojoule_per_kilogram>(),
        h_vap = enthalpies.saturated_vapor.get::<kilojoule_per_kilogram>(),
        h_liq = enthalpies.saturated_liquid.get::<kilojoule_per_kilogram>(),
        h_sub = enthalpies.subcooled_outlet.get::<kilojoule_per_kilogram>(),
        "refrigerant enthalpies (kJ/kg)"
    );

    Ok(enthalpies)
}
