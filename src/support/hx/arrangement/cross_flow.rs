//! Cross-flow effectiveness-NTU relationships.

use std::marker::PhantomData;

use crate::support::constraint::ConstraintResult;
use crate::support::hx::{
    CapacityRatio, Effectiveness, Ntu,
    effectiveness_ntu::{EffectivenessRelation, effectiveness_via},
};

/// Cross-flow heat exchanger arrangement.
///
/// Finned-tube condenser coils are cross-flow: air passes once across the
/// tube bank while refrigerant runs along the tubes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossFlow<T: MixState, U: MixState> {
    _marker: PhantomData<(T, U)>,
}

impl<T: MixState, U: MixState> CrossFlow<T, U> {
    /// Construct a cross-flow arrangement with the given mixing states.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

/// Marker type for a cross-flow stream that remains unmixed across the flow channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unmixed;

/// Trait for marker types representing the mixing state of a cross-flow stream.
pub trait MixState {}
impl MixState for Unmixed {}

/// Both streams unmixed.
///
/// `ε = 1 - exp((NTU^0.22 / Cr) * (exp(-Cr * NTU^0.78) - 1))`
///
/// The inner term is evaluated with `exp_m1`; at the tiny capacity ratios used
/// for refrigerant zones `exp(x) - 1` would lose most of its digits.
/// This relation has no closed-form inverse.
impl EffectivenessRelation for CrossFlow<Unmixed, Unmixed> {
    fn effectiveness(
        &self,
        ntu: Ntu,
        capacity_ratio: CapacityRatio,
    ) -> ConstraintResult<Effectiveness> {
        effectiveness_via(ntu, capacity_ratio, |ntu, cr| {
            -((ntu.powf(0.22) / cr) * (-cr * ntu.powf(0.78)).exp_m1()).exp_m1()
        })
    }
}
