use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

/// Solver configuration for the lump temperature search.
#[derive(Debug, Clone, Copy)]
pub struct LumpSolveConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the lump temperature.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance on the net shell heat flow.
    pub heat_tol: Power,
}

impl Default for LumpSolveConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-6),
            heat_tol: Power::new::<watt>(1e-6),
        }
    }
}

impl LumpSolveConfig {
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.heat_tol.get::<watt>(),
        }
    }
}
