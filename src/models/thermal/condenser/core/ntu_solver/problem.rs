//! Problem formulation for inverting an effectiveness relation.

use twine_core::{EquationProblem, Model};
use uom::si::ratio::ratio;

use crate::support::{
    constraint::ConstraintError,
    hx::{CapacityRatio, Effectiveness, EffectivenessRelation, Ntu},
};

/// A point on an effectiveness-NTU curve.
#[derive(Debug, Clone, Copy)]
pub(super) struct CurvePoint {
    pub(super) ntu: Ntu,
    pub(super) effectiveness: Effectiveness,
}

/// Model adapter evaluating an arrangement at a fixed capacity ratio.
pub(super) struct CurveModel<'a, Arrangement> {
    arrangement: &'a Arrangement,
    capacity_ratio: CapacityRatio,
}

impl<'a, Arrangement> CurveModel<'a, Arrangement> {
    pub(super) fn new(arrangement: &'a Arrangement, capacity_ratio: CapacityRatio) -> Self {
        Self {
            arrangement,
            capacity_ratio,
        }
    }
}

impl<Arrangement: EffectivenessRelation> Model for CurveModel<'_, Arrangement> {
    type Input = Ntu;
    type Output = CurvePoint;
    type Error = ConstraintError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let effectiveness = self.arrangement.effectiveness(*input, self.capacity_ratio)?;
        Ok(CurvePoint {
            ntu: *input,
            effectiveness,
        })
    }
}

/// Equation problem definition for a target effectiveness.
///
/// Computes the residual as `achieved - target`.
pub(super) struct TargetEffectiveness {
    target: f64,
}

impl TargetEffectiveness {
    pub(super) fn new(target: Effectiveness) -> Self {
        Self {
            target: target.get::<ratio>(),
        }
    }

    pub(super) fn target(&self) -> f64 {
        self.target
    }

    /// Returns the residual at `point`.
    pub(super) fn residual(&self, point: &CurvePoint) -> f64 {
        point.effectiveness.get::<ratio>() - self.target
    }
}

impl EquationProblem<1> for TargetEffectiveness {
    type Input = Ntu;
    type Output = CurvePoint;
    type Error = ConstraintError;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ntu::new(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output)])
    }
}
