use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{
        HeatTransfer, Length, MassDensity, MassRate, Pressure, SpecificHeatCapacity,
        ThermodynamicTemperature, Velocity, VolumeRate,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::millimeter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    pressure::kilopascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
    volume_rate::cubic_meter_per_second,
};

use crate::support::{
    thermo::{
        PropertyError, State, VaporQuality,
        capability::{HasEnthalpy, StateFrom, ThermoModel},
    },
    units::{SpecificEnthalpy, TemperatureDifference},
};

use super::{AirSide, CoilParameters, CondenserInput, PerZone, Refrigerant};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(super) struct TestFluid;

/// A refrigerant that saturates at a single temperature.
///
/// Liquid and vapor have constant specific heats and densities, and pressure
/// is ignored. The numbers are close to R134a condensing at 57 °C.
#[derive(Debug, Clone, Copy)]
pub(super) struct TestRefrigerantModel {
    t_ref: ThermodynamicTemperature,
    t_sat: ThermodynamicTemperature,
    t_crit: ThermodynamicTemperature,
    cp_liquid: SpecificHeatCapacity,
    cp_vapor: SpecificHeatCapacity,
    h_fg: SpecificEnthalpy,
    rho_liquid: MassDensity,
    rho_vapor: MassDensity,
}

impl TestRefrigerantModel {
    pub(super) fn new() -> Self {
        Self {
            t_ref: ThermodynamicTemperature::new::<kelvin>(273.15),
            t_sat: ThermodynamicTemperature::new::<kelvin>(330.15),
            t_crit: ThermodynamicTemperature::new::<kelvin>(374.21),
            cp_liquid: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1600.0),
            cp_vapor: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1200.0),
            h_fg: SpecificEnthalpy::new::<kilojoule_per_kilogram>(143.0),
            rho_liquid: MassDensity::new::<kilogram_per_cubic_meter>(1100.0),
            rho_vapor: MassDensity::new::<kilogram_per_cubic_meter>(80.0),
        }
    }

    fn saturated_liquid_enthalpy(&self) -> SpecificEnthalpy {
        self.cp_liquid * self.t_sat.minus(self.t_ref)
    }

    /// Vapor quality implied by a saturated state's density.
    fn quality(&self, density: MassDensity) -> f64 {
        let v = 1.0 / density.get::<kilogram_per_cubic_meter>();
        let v_l = 1.0 / self.rho_liquid.get::<kilogram_per_cubic_meter>();
        let v_v = 1.0 / self.rho_vapor.get::<kilogram_per_cubic_meter>();
        ((v - v_l) / (v_v - v_l)).clamp(0.0, 1.0)
    }
}

impl ThermoModel for TestRefrigerantModel {
    type Fluid = TestFluid;
}

impl HasEnthalpy for TestRefrigerantModel {
    fn enthalpy(&self, state: &State<Self::Fluid>) -> Result<SpecificEnthalpy, PropertyError> {
        let h_liq = self.saturated_liquid_enthalpy();

        if state.temperature < self.t_sat {
            Ok(self.cp_liquid * state.temperature.minus(self.t_ref))
        } else if state.temperature > self.t_sat {
            Ok(h_liq + self.h_fg + self.cp_vapor * state.temperature.minus(self.t_sat))
        } else {
            Ok(h_liq + self.h_fg * self.quality(state.density))
        }
    }
}

impl StateFrom<(TestFluid, ThermodynamicTemperature, Pressure)> for TestRefrigerantModel {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, _pressure): (TestFluid, ThermodynamicTemperature, Pressure),
    ) -> Result<State<TestFluid>, Self::Error> {
        if temperature > self.t_crit {
            return Err(PropertyError::OutOfDomain {
                context: "temperature above critical point".into(),
            });
        }
        if temperature == self.t_sat {
            return Err(PropertyError::InvalidState {
                context: "temperature and pressure do not fix a saturated state".into(),
            });
        }

        let density = if temperature < self.t_sat {
            self.rho_liquid
        } else {
            self.rho_vapor
        };
        Ok(State::new(temperature, density, fluid))
    }
}

impl StateFrom<(TestFluid, ThermodynamicTemperature, VaporQuality)> for TestRefrigerantModel {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, quality): (TestFluid, ThermodynamicTemperature, VaporQuality),
    ) -> Result<State<TestFluid>, Self::Error> {
        if temperature != self.t_sat {
            return Err(PropertyError::OutOfDomain {
                context: "test refrigerant saturates only at 330.15 K".into(),
            });
        }

        let x = quality.get::<ratio>();
        let v_l = 1.0 / self.rho_liquid.get::<kilogram_per_cubic_meter>();
        let v_v = 1.0 / self.rho_vapor.get::<kilogram_per_cubic_meter>();
        let density = MassDensity::new::<kilogram_per_cubic_meter>(1.0 / (v_l + x * (v_v - v_l)));
        Ok(State::new(temperature, density, fluid))
    }
}

/// A coil rejecting about 118 kW with every zone well inside its limits.
///
/// With [`TestRefrigerantModel`] the duties are 4.8 kW subcooling,
/// 85.8 kW condensing, and 27.36 kW desuperheating.
pub(super) fn reference_input() -> CondenserInput<TestFluid> {
    CondenserInput {
        refrigerant: Refrigerant {
            fluid: TestFluid,
            mass_flow: MassRate::new::<kilogram_per_second>(0.6),
            superheated_inlet: ThermodynamicTemperature::new::<kelvin>(368.15),
            condensing: ThermodynamicTemperature::new::<kelvin>(330.15),
            subcooled_outlet: ThermodynamicTemperature::new::<kelvin>(325.15),
            condensing_pressure: Pressure::new::<kilopascal>(2352.0),
        },
        air: AirSide {
            volume_flow: VolumeRate::new::<cubic_meter_per_second>(10.0),
            face_velocity: Velocity::new::<meter_per_second>(2.5),
            inlet_temperatures: PerZone {
                subcooling: ThermodynamicTemperature::new::<kelvin>(308.15),
                condensing: ThermodynamicTemperature::new::<kelvin>(318.15),
                desuperheating: ThermodynamicTemperature::new::<kelvin>(328.15),
            },
        },
        u_values: PerZone {
            subcooling: HeatTransfer::new::<watt_per_square_meter_kelvin>(50.0),
            condensing: HeatTransfer::new::<watt_per_square_meter_kelvin>(80.0),
            desuperheating: HeatTransfer::new::<watt_per_square_meter_kelvin>(40.0),
        },
        coil: CoilParameters {
            tube_outer_diameter: Length::new::<millimeter>(9.525),
            fins_per_inch: 10.0,
            max_rows: 4,
        },
    }
}
