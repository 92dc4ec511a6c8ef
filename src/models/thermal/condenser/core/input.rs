//! Inputs for a condenser sizing run.

use uom::si::f64::{
    HeatTransfer, MassDensity, MassRate, Pressure, ThermodynamicTemperature, Velocity, VolumeRate,
};

use super::{CoilParameters, PerZone, Zone};

/// Everything a sizing run needs from the caller.
#[derive(Debug, Clone, Copy)]
pub struct CondenserInput<Fluid> {
    pub refrigerant: Refrigerant<Fluid>,
    pub air: AirSide,

    /// Overall heat-transfer coefficient of each zone.
    pub u_values: PerZone<HeatTransfer>,

    pub coil: CoilParameters,
}

/// Refrigerant flow and its state points through the coil.
#[derive(Debug, Clone, Copy)]
pub struct Refrigerant<Fluid> {
    pub fluid: Fluid,
    pub mass_flow: MassRate,

    /// Temperature of the superheated vapor entering the coil.
    pub superheated_inlet: ThermodynamicTemperature,

    /// Saturation temperature in the condensing zone.
    pub condensing: ThermodynamicTemperature,

    /// Temperature of the subcooled liquid leaving the coil.
    pub subcooled_outlet: ThermodynamicTemperature,

    /// Condensing pressure, used for the single-phase state points.
    pub condensing_pressure: Pressure,
}

impl<Fluid> Refrigerant<Fluid> {
    /// Returns the refrigerant temperature each zone is sized against.
    ///
    /// Subcooling is referenced to the condensing temperature, where the
    /// liquid enters that zone.
    #[must_use]
    pub fn hot_side_temperature(&self, zone: Zone) -> ThermodynamicTemperature {
        match zone {
            Zone::Subcooling | Zone::Condensing => self.condensing,
            Zone::Desuperheating => self.superheated_inlet,
        }
    }
}

/// Air-side conditions.
#[derive(Debug, Clone, Copy)]
pub struct AirSide {
    /// Volumetric air flow through the coil face.
    pub volume_flow: VolumeRate,

    /// Air velocity at the coil face.
    pub face_velocity: Velocity,

    /// Air temperature entering each zone.
    pub inlet_temperatures: PerZone<ThermodynamicTemperature>,
}

impl AirSide {
    /// Returns the air mass flow at the given density.
    #[must_use]
    pub fn mass_flow(&self, density: MassDensity) -> MassRate {
        self.volume_flow * density
    }
}
