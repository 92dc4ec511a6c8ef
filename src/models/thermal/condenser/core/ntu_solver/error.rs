use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while solving for NTU.
#[derive(Debug, Error)]
pub enum NtuSolveError {
    /// The effectiveness relation produced an invalid value.
    #[error("effectiveness relation failed")]
    Relation(#[from] ConstraintError),

    /// No NTU up to `ntu_max` reaches the target effectiveness.
    #[error("effectiveness {effectiveness} not reached for NTU up to {ntu_max}")]
    Unbracketed { effectiveness: f64, ntu_max: f64 },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best effectiveness residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
