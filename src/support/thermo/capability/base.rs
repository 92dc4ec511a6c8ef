/// Base trait for thermodynamic property models.
///
/// Ties a model to the fluid type its [`State`](crate::support::thermo::State)s
/// carry. Capabilities such as [`HasEnthalpy`](super::HasEnthalpy) build on it.
pub trait ThermoModel {
    type Fluid;
}
