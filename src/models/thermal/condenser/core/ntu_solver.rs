//! Iterative NTU solver for arrangements without a closed-form inverse.
//!
//! The target effectiveness is bracketed between `NTU = 0` and an upper
//! bound found by doubling from the configured seed, then refined by
//! bisection.

mod config;
mod error;
mod problem;

pub use config::NtuSolverConfig;
pub use error::NtuSolveError;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::ratio::ratio;

use crate::support::hx::{CapacityRatio, Effectiveness, EffectivenessRelation, Ntu};

use problem::{CurveModel, TargetEffectiveness};

/// A converged NTU and the iterations it took.
#[derive(Debug, Clone, Copy)]
pub struct NtuSolution {
    pub ntu: Ntu,
    pub iters: usize,
}

/// Solves for the NTU at which `arrangement` reaches `effectiveness`.
///
/// Zero effectiveness returns zero NTU without iterating.
///
/// # Errors
///
/// Returns [`NtuSolveError`] if the target cannot be bracketed (an
/// effectiveness of one is never bracketed), if the relation fails, or if
/// bisection does not converge within `config.max_iters`.
pub fn solve_ntu<Arrangement: EffectivenessRelation>(
    arrangement: &Arrangement,
    effectiveness: Effectiveness,
    capacity_ratio: CapacityRatio,
    config: &NtuSolverConfig,
) -> Result<NtuSolution, NtuSolveError> {
    let target = effectiveness.get::<ratio>();

    if target == 0.0 {
        return Ok(NtuSolution {
            ntu: Ntu::zero(),
            iters: 0,
        });
    }

    if target >= 1.0 {
        return Err(NtuSolveError::Unbracketed {
            effectiveness: target,
            ntu_max: f64::INFINITY,
        });
    }

    let model = CurveModel::new(arrangement, capacity_ratio);
    let problem = TargetEffectiveness::new(effectiveness);

    let upper = bracket(&model, &problem, config)?;

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, upper],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A relation that fails to produce a finite effectiveness has been
            // pushed past saturation, so steer toward smaller NTU.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(NtuSolveError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(NtuSolution {
        ntu: solution.snapshot.output.ntu,
        iters: solution.iters,
    })
}

/// Doubles the upper NTU bound from the seed until it reaches the target.
fn bracket<Arrangement: EffectivenessRelation>(
    model: &CurveModel<'_, Arrangement>,
    problem: &TargetEffectiveness,
    config: &NtuSolverConfig,
) -> Result<f64, NtuSolveError> {
    let mut upper = config.seed;

    for _ in 0..=config.max_bracket_expansions {
        let point = model.call(&Ntu::new(upper)?)?;
        let residual = problem.residual(&point);
        tracing::trace!(ntu = upper, residual, "NTU bracket candidate");

        if residual >= 0.0 {
            return Ok(upper);
        }
        upper *= 2.0;
    }

    Err(NtuSolveError::Unbracketed {
        effectiveness: problem.target(),
        ntu_max: upper / 2.0,
    })
}
