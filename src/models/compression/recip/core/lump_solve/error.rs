use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Power;

/// Errors from the lump temperature solve.
#[derive(Debug, Error)]
pub enum LumpSolveError {
    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("lump solve hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Net shell heat flow at the best iterate.
        residual: Power,
        iters: usize,
    },
}
