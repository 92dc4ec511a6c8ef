use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};
use uom::si::{f64::Ratio, ratio::ratio};

/// Vapor mass fraction of a saturated two-phase mixture.
///
/// Zero is saturated liquid and one is saturated vapor.
#[derive(Debug, Clone, Copy)]
pub struct VaporQuality(Constrained<Ratio, UnitInterval>);

impl VaporQuality {
    /// Create a [`VaporQuality`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(Ratio::new::<ratio>(value))?))
    }

    /// Saturated liquid.
    #[must_use]
    pub fn liquid() -> Self {
        Self(UnitInterval::zero())
    }

    /// Saturated vapor.
    #[must_use]
    pub fn vapor() -> Self {
        Self(UnitInterval::one())
    }
}

impl Deref for VaporQuality {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
