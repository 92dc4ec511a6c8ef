/// Canonical identifier for R-134a (1,1,1,2-tetrafluoroethane).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct R134a;

#[cfg(feature = "coolprop")]
impl crate::support::thermo::model::coolprop::CoolPropFluid for R134a {
    const BACKEND: &'static str = "HEOS";
    const NAME: &'static str = "R134a";
}
