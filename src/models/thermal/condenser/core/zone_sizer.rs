//! Sizes the heat-transfer area of a single zone with the ε-NTU method.

use uom::si::{
    f64::{Area, HeatTransfer, MassRate, ThermalConductance, ThermodynamicTemperature},
    area::square_meter,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{ConstraintError, ConstraintResult, StrictlyPositive},
    hx::{CapacitanceRate, CapacityRatio, CrossFlow, Effectiveness, Ntu, Unmixed},
    units::TemperatureDifference,
};

use super::{CondenserError, Duty, Infeasibility, SizingConfig, Zone, ntu_solver::solve_ntu};

/// Air passes the tubes across a single row with neither stream mixed.
const COIL_ARRANGEMENT: CrossFlow<Unmixed, Unmixed> = CrossFlow::new();

/// Everything needed to size one zone.
#[derive(Debug, Clone, Copy)]
pub struct ZoneSpec {
    pub zone: Zone,
    pub duty: Duty,

    /// Refrigerant temperature the zone is referenced to.
    pub hot_side_temperature: ThermodynamicTemperature,

    pub air_inlet_temperature: ThermodynamicTemperature,
    pub air_mass_flow: MassRate,

    /// Overall heat-transfer coefficient.
    pub u_value: HeatTransfer,

    /// Whether the refrigerant changes phase, fixing `Cr = 0`.
    pub phase_change: bool,
}

/// How a zone's NTU was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NtuMethod {
    /// `NTU = -ln(1 - ε)`, exact for a stream at constant temperature.
    ClosedForm,

    /// Numerical inversion of the cross-flow correlation.
    Iterative { iters: usize },
}

/// Sizing outcome for one zone.
#[derive(Debug, Clone, Copy)]
pub struct ZoneResult {
    /// Required heat-transfer area.
    pub area: Area,

    pub air_outlet_temperature: ThermodynamicTemperature,
    pub ntu: Ntu,
    pub effectiveness: Effectiveness,

    /// Air capacitance rate, the minimum capacity side.
    pub air_capacitance_rate: CapacitanceRate,

    /// Conductance `UA = NTU * C_air`.
    pub ua: ThermalConductance,

    pub method: NtuMethod,
}

/// Sizes a zone for its duty.
///
/// The required effectiveness is `ε = Q / (C_air * ΔT)`, where `ΔT` is the
/// hot-side temperature minus the air inlet temperature. Phase-change zones
/// use the closed form `NTU = -ln(1 - ε)`. Other zones invert the cross-flow
/// correlation at the configured capacity ratio. The area is then
/// `A = NTU * C_air / U`.
///
/// # Errors
///
/// - [`CondenserError::InvalidParameter`] if `U` or the air mass flow is not
///   finite and positive, or if the air specific heat or the capacity ratio
///   is out of range.
/// - [`CondenserError::InfeasibleHeatExchange`] if `ΔT <= 0` or `ε >= 1`.
/// - [`CondenserError::SolverDivergence`] if the NTU solve fails.
pub fn size_zone(spec: &ZoneSpec, config: &SizingConfig) -> Result<ZoneResult, CondenserError> {
    let zone = spec.zone;

    let u_value = StrictlyPositive::new(spec.u_value)
        .map_err(CondenserError::invalid("u_value"))?
        .into_inner();
    ensure_finite(u_value.value, "u_value")?;
    let air_mass_flow = StrictlyPositive::new(spec.air_mass_flow)
        .map_err(CondenserError::invalid("air_mass_flow"))?
        .into_inner();
    ensure_finite(air_mass_flow.value, "air_mass_flow")?;
    let c_air =
        CapacitanceRate::from_mass_rate_and_specific_heat(air_mass_flow, config.air_specific_heat)
            .map_err(CondenserError::invalid("air_specific_heat"))?;

    let delta_t = spec.hot_side_temperature.minus(spec.air_inlet_temperature);
    let delta_t_value = delta_t.get::<delta_kelvin>();
    if delta_t_value.is_nan() || delta_t_value <= 0.0 {
        return Err(CondenserError::InfeasibleHeatExchange {
            zone,
            reason: Infeasibility::NoDrivingForce { delta_t },
        });
    }

    let q = spec.duty.into_inner();
    let eps = (q / (*c_air * delta_t)).get::<ratio>();
    let effectiveness = Effectiveness::new(eps)
        .ok()
        .filter(|effectiveness| effectiveness.get::<ratio>() < 1.0)
        .ok_or(CondenserError::InfeasibleHeatExchange {
            zone,
            reason: Infeasibility::EffectivenessTooHigh { effectiveness: eps },
        })?;

    let (ntu, method) = if spec.phase_change {
        let ntu = closed_form_ntu(effectiveness).map_err(CondenserError::invalid("effectiveness"))?;
        (ntu, NtuMethod::ClosedForm)
    } else {
        let capacity_ratio = CapacityRatio::from_quantity(config.capacity_ratio)
            .map_err(CondenserError::invalid("capacity_ratio"))?;
        let solution = solve_ntu(
            &COIL_ARRANGEMENT,
            effectiveness,
            capacity_ratio,
            &config.ntu_solver,
        )
        .map_err(|source| CondenserError::SolverDivergence { zone, source })?;
        (
            solution.ntu,
            NtuMethod::Iterative {
                iters: solution.iters,
            },
        )
    };

    let ua = ntu.conductance(c_air);
    let area: Area = ua / u_value;
    let air_outlet_temperature = spec.air_inlet_temperature + q / *c_air;

    tracing::debug!(
        %zone,
        effectiveness = eps,
        ntu = ntu.get::<ratio>(),
        area_m2 = area.get::<square_meter>(),
        air_outlet_c = air_outlet_temperature.get::<degree_celsius>(),
        ?method,
        "sized zone"
    );

    Ok(ZoneResult {
        area,
        air_outlet_temperature,
        ntu,
        effectiveness,
        air_capacitance_rate: c_air,
        ua,
        method,
    })
}

/// Rejects a value that passed its sign check but is infinite.
fn ensure_finite(value: f64, parameter: &'static str) -> Result<(), CondenserError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CondenserError::invalid(parameter)(ConstraintError::NotFinite))
    }
}

/// Inverts `ε = 1 - exp(-NTU)`.
fn closed_form_ntu(effectiveness: Effectiveness) -> ConstraintResult<Ntu> {
    Ntu::new(-(-effectiveness.get::<ratio>()).ln_1p())
}
