/// Canonical identifier for R-407C (R-32/R-125/R-134a blend).
///
/// `CoolProp` treats this blend as a pseudo-pure fluid, so it has no
/// temperature glide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct R407C;

#[cfg(feature = "coolprop")]
impl crate::support::thermo::model::coolprop::CoolPropFluid for R407C {
    const BACKEND: &'static str = "HEOS";
    const NAME: &'static str = "R407C";
}
