//! Air-cooled refrigerant condenser coil sizing.
//!
//! [`Condenser`] implements [`twine_core::Model`]: given refrigerant state
//! points, air-side conditions, and per-zone heat-transfer coefficients, it
//! sizes the subcooling, condensing, and desuperheating zones of the coil.
//!
//! # Example
//!
//! ```ignore
//! use twine_condenser::{
//!     models::thermal::condenser::{Condenser, CondenserInput},
//!     support::thermo::{fluid::R134a, model::CoolProp},
//! };
//! use twine_core::Model;
//!
//! let condenser = Condenser::new(CoolProp::<R134a>::new()?);
//! let results = condenser.call(&input)?;
//! println!("{:?}", results.total_duty());
//! ```

mod core;

pub use self::core::{
    AirSide, CoilGeometry, CoilParameters, CondenserError, CondenserInput, CondenserResults,
    CondenserThermoModel, Duty, INCHES_PER_METER, Infeasibility, NtuMethod, NtuSolution,
    NtuSolveError, NtuSolverConfig, PerZone, Refrigerant, SizingConfig, Zone, ZoneEnthalpies,
    ZoneReport, ZoneResult, ZoneSpec, estimate_geometry, size_condenser, size_zone, solve_ntu,
    split_loads,
};

use twine_core::Model;

use crate::support::thermo::capability::ThermoModel;

/// A condenser coil sized against a refrigerant property model.
#[derive(Debug, Clone)]
pub struct Condenser<Thermo> {
    thermo: Thermo,
    config: SizingConfig,
}

impl<Thermo> Condenser<Thermo> {
    /// Creates a condenser model with the default [`SizingConfig`].
    pub fn new(thermo: Thermo) -> Self {
        Self::with_config(thermo, SizingConfig::default())
    }

    /// Creates a condenser model with a custom [`SizingConfig`].
    pub fn with_config(thermo: Thermo, config: SizingConfig) -> Self {
        Self { thermo, config }
    }

    /// Returns the sizing configuration.
    #[must_use]
    pub fn config(&self) -> &SizingConfig {
        &self.config
    }
}

impl<Fluid, Thermo> Model for Condenser<Thermo>
where
    Fluid: Clone,
    Thermo: ThermoModel<Fluid = Fluid> + CondenserThermoModel<Fluid>,
{
    type Input = CondenserInput<Fluid>;
    type Output = CondenserResults;
    type Error = CondenserError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        size_condenser(input, &self.config, &self.thermo)
    }
}
