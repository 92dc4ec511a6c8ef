use uom::si::f64::{MassDensity, ThermodynamicTemperature};

/// The thermodynamic state of a fluid.
///
/// Temperature and density fix the state of a pure fluid everywhere,
/// including inside the vapor dome where temperature and pressure do not.
///
/// # Example
///
/// ```
/// use twine_condenser::support::thermo::{State, fluid::R134a};
/// use uom::si::{
///     f64::{MassDensity, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let state = State::new(
///     ThermodynamicTemperature::new::<degree_celsius>(57.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(1110.0),
///     R134a,
/// );
/// assert_eq!(state.fluid, R134a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }
}
