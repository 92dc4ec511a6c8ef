//! Splits the coil's heat rejection into per-zone duties.

use uom::si::{
    f64::{MassRate, Power},
    power::kilowatt,
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use super::{CondenserError, PerZone, Zone, ZoneEnthalpies};

/// A zone heat duty, never negative.
pub type Duty = Constrained<Power, NonNegative>;

/// Computes the heat rejected in each zone.
///
/// Each duty is the refrigerant mass flow times the enthalpy drop across its
/// zone:
/// - desuperheating: `h_super - h_vap`
/// - condensing: `h_vap - h_liq`
/// - subcooling: `h_liq - h_sub`
///
/// # Errors
///
/// Returns [`CondenserError::InvalidParameter`] if `mass_flow` is not strictly
/// positive and [`CondenserError::InvalidThermodynamicState`] if any duty is
/// negative, which means the enthalpies are out of order.
pub fn split_loads(
    enthalpies: &ZoneEnthalpies,
    mass_flow: MassRate,
) -> Result<PerZone<Duty>, CondenserError> {
    let mass_flow =
        StrictlyPositive::new(mass_flow).map_err(CondenserError::invalid("refrigerant_mass_flow"))?;
    let m = mass_flow.into_inner();

    let raw = PerZone {
        subcooling: m * (enthalpies.saturated_liquid - enthalpies.subcooled_outlet),
        condensing: m * (enthalpies.saturated_vapor - enthalpies.saturated_liquid),
        desuperheating: m * (enthalpies.superheated_inlet - enthalpies.saturated_vapor),
    };

    let duties = raw.try_map(|zone: Zone, duty: Power| {
        NonNegative::new(duty).map_err(|_| CondenserError::InvalidThermodynamicState { zone, duty })
    })?;

    tracing::debug!(
        q_sub = duties.subcooling.as_ref().get::<kilowatt>(),
        q_cond = duties.condensing.as_ref().get::<kilowatt>(),
        q_desuper = duties.desuperheating.as_ref().get::<kilowatt>(),
        "zone duties (kW)"
    );

    Ok(duties)
}
