use twine_solvers::equation::bisection;

/// Solver configuration for inverting an effectiveness relation.
#[derive(Debug, Clone, Copy)]
pub struct NtuSolverConfig {
    /// First upper bracket tried for NTU.
    pub seed: f64,

    /// How many times the upper bracket may double before giving up.
    pub max_bracket_expansions: usize,

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Relative tolerance on NTU.
    ///
    /// Bisection stops once the bracket is narrower than this fraction of
    /// its magnitude. The effectiveness residual must reach exactly zero to
    /// stop earlier, so targets within rounding of 0 or 1 still iterate.
    pub ntu_rel_tol: f64,
}

impl Default for NtuSolverConfig {
    fn default() -> Self {
        Self {
            seed: 1.0,
            max_bracket_expansions: 64,
            max_iters: 200,
            ntu_rel_tol: 1e-12,
        }
    }
}

impl NtuSolverConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: 0.0,
            x_rel_tol: self.ntu_rel_tol,
            residual_tol: 0.0,
        }
    }
}
