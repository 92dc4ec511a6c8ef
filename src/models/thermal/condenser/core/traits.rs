//! Internal traits for condenser sizing.

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::thermo::{
    VaporQuality,
    capability::{HasEnthalpy, StateFrom, ThermoModel},
};

/// Required thermo model bounds for condenser sizing.
///
/// The model must build single-phase states from temperature and pressure,
/// saturated states from temperature and quality, and report enthalpy for
/// both.
#[doc(hidden)]
pub trait CondenserThermoModel<Fluid>:
    ThermoModel<Fluid = Fluid>
    + HasEnthalpy
    + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
    + StateFrom<(Fluid, ThermodynamicTemperature, VaporQuality)>
{
}

impl<Fluid, T> CondenserThermoModel<Fluid> for T where
    T: ThermoModel<Fluid = Fluid>
        + HasEnthalpy
        + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
        + StateFrom<(Fluid, ThermodynamicTemperature, VaporQuality)>
{
}
