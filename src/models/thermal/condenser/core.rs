//! Zone-by-zone thermal sizing of an air-cooled condenser coil.
//!
//! A sizing run looks up the refrigerant enthalpies at the four zone
//! boundaries, splits the heat rejection into subcooling, condensing, and
//! desuperheating duties, then sizes each zone with the ε-NTU method and
//! estimates the coil geometry that area implies. Zones are independent of
//! one another.

mod config;
mod enthalpies;
mod error;
mod geometry;
mod input;
mod load_split;
mod ntu_solver;
mod results;
mod traits;
mod zone_sizer;
mod zones;

#[cfg(test)]
mod test_support;

pub use config::SizingConfig;
pub use enthalpies::ZoneEnthalpies;
pub use error::{CondenserError, Infeasibility};
pub use geometry::{CoilGeometry, CoilParameters, INCHES_PER_METER, estimate_geometry};
pub use input::{AirSide, CondenserInput, Refrigerant};
pub use load_split::{Duty, split_loads};
pub use ntu_solver::{NtuSolution, NtuSolveError, NtuSolverConfig, solve_ntu};
pub use results::{CondenserResults, ZoneReport};
pub use traits::CondenserThermoModel;
pub use zone_sizer::{NtuMethod, ZoneResult, ZoneSpec, size_zone};
pub use zones::{PerZone, Zone};

use crate::support::constraint::StrictlyPositive;

/// Sizes every zone of a condenser coil.
///
/// # Errors
///
/// Returns the first [`CondenserError`] raised by any step; no partial
/// results are produced.
pub fn size_condenser<Fluid: Clone>(
    input: &CondenserInput<Fluid>,
    config: &SizingConfig,
    thermo: &impl CondenserThermoModel<Fluid>,
) -> Result<CondenserResults, CondenserError> {
    let air_density = StrictlyPositive::new(config.air_density)
        .map_err(CondenserError::invalid("air_density"))?
        .into_inner();

    let enthalpies = enthalpies::lookup(&input.refrigerant, thermo)?;
    let duties = split_loads(&enthalpies, input.refrigerant.mass_flow)?;
    let air_mass_flow = input.air.mass_flow(air_density);

    let zones = duties.try_map(|zone, duty| -> Result<ZoneReport, CondenserError> {
        let spec = ZoneSpec {
            zone,
            duty,
            hot_side_temperature: input.refrigerant.hot_side_temperature(zone),
            air_inlet_temperature: *input.air.inlet_temperatures.get(zone),
            air_mass_flow,
            u_value: *input.u_values.get(zone),
            phase_change: zone.is_phase_change(),
        };
        let sizing = size_zone(&spec, config)?;
        let geometry = estimate_geometry(
            sizing.area,
            input.air.volume_flow,
            input.air.face_velocity,
            &input.coil,
        )?;
        Ok(ZoneReport {
            duty,
            sizing,
            geometry,
        })
    })?;

    Ok(CondenserResults { enthalpies, zones })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{HeatTransfer, MassDensity, ThermodynamicTemperature},
        heat_transfer::watt_per_square_meter_kelvin,
        mass_density::kilogram_per_cubic_meter,
        power::kilowatt,
        ratio::ratio,
        thermal_conductance::watt_per_kelvin,
        thermodynamic_temperature::kelvin,
    };

    use super::test_support::{TestFluid, TestRefrigerantModel, reference_input};

    fn size(input: &CondenserInput<TestFluid>) -> Result<CondenserResults, CondenserError> {
        size_condenser(input, &SizingConfig::default(), &TestRefrigerantModel::new())
    }

    #[test]
    fn reference_coil_is_dominated_by_condensing() {
        let results = size(&reference_input()).unwrap();
        let duty = |zone: Zone| results.zones.get(zone).duty.into_inner().get::<kilowatt>();

        assert_relative_eq!(duty(Zone::Subcooling), 4.8, epsilon = 1e-9);
        assert_relative_eq!(duty(Zone::Condensing), 85.8, epsilon = 1e-9);
        assert_relative_eq!(duty(Zone::Desuperheating), 27.36, epsilon = 1e-9);
        assert_relative_eq!(
            results.total_duty().get::<kilowatt>(),
            0.6 * (279.8 - 83.2),
            epsilon = 1e-9
        );

        assert!(duty(Zone::Condensing) > duty(Zone::Desuperheating));
        assert!(duty(Zone::Condensing) > duty(Zone::Subcooling));
    }

    #[test]
    fn reference_zone_sizing() {
        let results = size(&reference_input()).unwrap();

        for (zone, report) in results.zones.iter() {
            assert_relative_eq!(
                report.sizing.air_capacitance_rate.get::<watt_per_kelvin>(),
                10_663.6,
                epsilon = 1e-6
            );
            assert!(report.sizing.area.get::<square_meter>() > 0.0);
            let eps = report.sizing.effectiveness.get::<ratio>();
            assert!(eps > 0.0 && eps < 1.0, "{zone}: ε = {eps}");
        }

        let condensing = results.zones.condensing.sizing;
        assert_eq!(condensing.method, NtuMethod::ClosedForm);
        assert_relative_eq!(condensing.effectiveness.get::<ratio>(), 0.6705, epsilon = 1e-4);
        assert_relative_eq!(condensing.ntu.get::<ratio>(), 1.1102, epsilon = 1e-3);
        assert_relative_eq!(condensing.area.get::<square_meter>(), 148.0, epsilon = 0.1);

        for zone in [Zone::Subcooling, Zone::Desuperheating] {
            assert!(matches!(
                results.zones.get(zone).sizing.method,
                NtuMethod::Iterative { .. }
            ));
        }

        // Air leaving each zone is warmer by Q / C_air.
        let subcooling = results.zones.subcooling.sizing;
        assert_relative_eq!(
            subcooling.air_outlet_temperature.get::<kelvin>(),
            308.15 + 4800.0 / 10_663.6,
            epsilon = 1e-6
        );
    }

    #[test]
    fn reference_geometry_clamps_to_max_rows() {
        let results = size(&reference_input()).unwrap();

        for (_, report) in results.zones.iter() {
            let geometry = report.geometry;
            assert_relative_eq!(geometry.face_area.get::<square_meter>(), 4.0, epsilon = 1e-12);
            assert_eq!(geometry.fin_rows, 4);
            assert_eq!(geometry.tube_passes, 2);
        }
    }

    #[test]
    fn single_phase_zones_reference_their_own_hot_side() {
        let mut input = reference_input();

        // Subcooling is referenced to the condensing temperature, so air at
        // the subcooled outlet temperature still has a driving force.
        input.air.inlet_temperatures.subcooling = ThermodynamicTemperature::new::<kelvin>(325.15);
        assert!(size(&input).is_ok());

        // Desuperheating is referenced to the superheated inlet.
        input.air.inlet_temperatures.desuperheating = ThermodynamicTemperature::new::<kelvin>(368.15);
        let err = size(&input).unwrap_err();
        assert!(matches!(
            err,
            CondenserError::InfeasibleHeatExchange {
                zone: Zone::Desuperheating,
                reason: Infeasibility::NoDrivingForce { .. },
            }
        ));
    }

    #[test]
    fn hot_air_makes_condensing_infeasible() {
        let mut input = reference_input();
        input.air.inlet_temperatures.condensing = ThermodynamicTemperature::new::<kelvin>(329.15);

        let err = size(&input).unwrap_err();
        assert!(matches!(
            err,
            CondenserError::InfeasibleHeatExchange {
                zone: Zone::Condensing,
                reason: Infeasibility::EffectivenessTooHigh { .. },
            }
        ));
    }

    #[test]
    fn zero_u_value_is_invalid() {
        let mut input = reference_input();
        input.u_values.desuperheating = HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0);

        let err = size(&input).unwrap_err();
        assert!(matches!(
            err,
            CondenserError::InvalidParameter {
                parameter: "u_value",
                ..
            }
        ));
    }

    #[test]
    fn zero_air_density_is_invalid() {
        let config = SizingConfig {
            air_density: MassDensity::new::<kilogram_per_cubic_meter>(0.0),
            ..SizingConfig::default()
        };
        let err =
            size_condenser(&reference_input(), &config, &TestRefrigerantModel::new()).unwrap_err();
        assert!(matches!(
            err,
            CondenserError::InvalidParameter {
                parameter: "air_density",
                ..
            }
        ));
    }

    #[test]
    fn property_failure_aborts_the_run() {
        let mut input = reference_input();
        input.refrigerant.condensing = ThermodynamicTemperature::new::<kelvin>(331.0);

        let err = size(&input).unwrap_err();
        assert!(matches!(err, CondenserError::PropertyLookupFailure { .. }));
        assert_eq!(
            err.to_string(),
            "property lookup failed: state_from(saturated vapor)"
        );
    }
}
