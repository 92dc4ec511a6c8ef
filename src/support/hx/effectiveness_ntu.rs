use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, UnitInterval};
use uom::si::{
    f64::{Ratio, ThermalConductance},
    ratio::ratio,
};

use super::{CapacitanceRate, CapacityRatio};

/// Trait for computing heat exchanger effectiveness from NTU.
pub trait EffectivenessRelation {
    /// Calculate the effectiveness for an arrangement given the [NTU](Ntu) and
    /// [capacity ratio](CapacityRatio).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the relation does not produce a finite value in [0, 1].
    fn effectiveness(
        &self,
        ntu: Ntu,
        capacity_ratio: CapacityRatio,
    ) -> ConstraintResult<Effectiveness>;
}

/// The effectiveness of a heat exchanger.
///
/// The effectiveness is the ratio of the actual amount of heat transferred to
/// the maximum possible amount of heat transferred in the heat exchanger.
///
/// The effectiveness must be in the interval [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Effectiveness(Constrained<Ratio, UnitInterval>);

impl Effectiveness {
    /// Create an [`Effectiveness`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let quantity = Ratio::new::<ratio>(value);
        Self::from_quantity(quantity)
    }

    /// Create an [`Effectiveness`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }
}

impl Deref for Effectiveness {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// The number of transfer units for a heat exchanger.
///
/// The number of transfer units represents the dimensionless size of a heat
/// exchanger.
///
/// The number of transfer units must be >= 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ntu(Constrained<Ratio, NonNegative>);

impl Ntu {
    /// Create an [`Ntu`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let quantity = Ratio::new::<ratio>(value);
        Self::from_quantity(quantity)
    }

    /// Create an [`Ntu`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is negative.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?))
    }

    /// An exchanger with no transfer area.
    #[must_use]
    pub fn zero() -> Self {
        Self(NonNegative::zero())
    }

    /// Returns the conductance `UA = NTU * C_min` this NTU represents.
    #[must_use]
    pub fn conductance(self, c_min: CapacitanceRate) -> ThermalConductance {
        self.0.into_inner() * *c_min
    }
}

impl Deref for Ntu {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Evaluates `fn_raw(ntu, cr)` as an effectiveness.
///
/// A zero capacity ratio always uses the limiting form `1 - exp(-NTU)`,
/// which every arrangement shares.
#[inline]
pub(crate) fn effectiveness_via(
    ntu: Ntu,
    capacity_ratio: CapacityRatio,
    fn_raw: impl Fn(f64, f64) -> f64,
) -> ConstraintResult<Effectiveness> {
    let cr = capacity_ratio.get::<ratio>();
    let ntu = ntu.get::<ratio>();
    if cr == 0.0 {
        return Effectiveness::new(-(-ntu).exp_m1());
    }
    Effectiveness::new(fn_raw(ntu, cr))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::thermal_conductance::watt_per_kelvin;

    use super::*;

    #[test]
    fn conductance_from_ntu() -> ConstraintResult<()> {
        let c_air = CapacitanceRate::new::<watt_per_kelvin>(10_663.6)?;

        let ua = Ntu::new(1.1)?.conductance(c_air);

        assert_relative_eq!(ua.get::<watt_per_kelvin>(), 11_729.96, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn zero_ratio_uses_limit() -> ConstraintResult<()> {
        let eff = effectiveness_via(Ntu::new(2.0)?, CapacityRatio::zero(), |_, _| f64::NAN)?;

        assert_relative_eq!(eff.get::<ratio>(), 1.0 - (-2.0_f64).exp(), epsilon = 1e-15);
        Ok(())
    }

    #[test]
    fn rejects_non_finite_relation() -> ConstraintResult<()> {
        let result = effectiveness_via(Ntu::new(2.0)?, CapacityRatio::new(0.5)?, |_, _| f64::NAN);

        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn rejects_negative_ntu() {
        assert!(Ntu::new(-0.1).is_err());
        assert!(Effectiveness::new(1.01).is_err());
    }
}
