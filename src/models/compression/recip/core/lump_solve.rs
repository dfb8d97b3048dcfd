//! Iterative solve for the shell lump temperature.
//!
//! Each candidate lump temperature drives a full cycle simulation, whose shell
//! energy balance is driven to zero by bisection.

mod config;
mod error;
mod problem;

pub use config::LumpSolveConfig;
pub use error::LumpSolveError;

use tracing::debug;
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    power::watt,
    thermodynamic_temperature::kelvin,
};

use super::LumpEnergyBalance;

use problem::LumpBalanceProblem;

/// Finds the lump temperature at which the shell energy balance closes.
///
/// `cycle` runs the cycle at a lump temperature and returns its
/// [`LumpEnergyBalance`], typically through [`Recip::lump_energy_balance`].
/// The net heat must change sign across `bracket`.
///
/// [`Recip::lump_energy_balance`]: super::Recip::lump_energy_balance
///
/// # Errors
///
/// Returns [`LumpSolveError`] if the bracket is invalid or the solver fails to
/// converge.
pub fn solve_lump_temperature<Cycle>(
    cycle: &Cycle,
    bracket: [ThermodynamicTemperature; 2],
    config: LumpSolveConfig,
) -> Result<LumpEnergyBalance, LumpSolveError>
where
    Cycle: Model<Input = ThermodynamicTemperature, Output = LumpEnergyBalance>,
    Cycle::Error: std::error::Error + Send + Sync + 'static,
{
    let solution = bisection::solve(
        cycle,
        &LumpBalanceProblem,
        [bracket[0].get::<kelvin>(), bracket[1].get::<kelvin>()],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A cycle that fails to run is treated as a lump that is too cold:
            // the search moves toward the warm end of the bracket.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(LumpSolveError::MaxIters {
            residual: Power::new::<watt>(solution.residual),
            iters: solution.iters,
        });
    }

    let balance = solution.snapshot.output;
    debug!(
        lump_k = balance.lump_temperature.get::<kelvin>(),
        net_w = balance.net().get::<watt>(),
        iters = solution.iters,
        "lump temperature converged"
    );

    Ok(balance)
}
