//! Post-cycle performance bookkeeping.
//!
//! Post-processing runs in two stages. A generic stage reduces the converged
//! cycle to shaft and isentropic powers, then the machine stage adds motor
//! losses and the overall isentropic efficiency. [`PostSolveChain`] runs both
//! in that order.

use thiserror::Error;
use tracing::debug;
use uom::si::{
    f64::{Power, Ratio},
    power::watt,
    ratio::ratio,
};

use super::{Recip, RecipError};

/// A post-processing stage applied to a converged run.
pub trait PostSolve<Run> {
    type Output;
    type Error;

    /// Computes this stage's results from `run`.
    ///
    /// # Errors
    ///
    /// Each stage defines its own failure modes.
    fn post_solve(&self, run: &Run) -> Result<Self::Output, Self::Error>;
}

/// Generic cycle results consumed by the machine stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergedRun {
    /// Shaft power, indicated power plus mechanical losses.
    pub shaft_power: Power,
    /// Isentropic compression power for the same mass flow and pressures.
    pub isentropic_power: Power,
}

/// Electrical-side performance of the machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    pub shaft_power: Power,
    pub motor_losses: Power,
    pub electrical_power: Power,
    pub overall_isentropic_efficiency: Ratio,
}

impl<Suction, Discharge> PostSolve<ConvergedRun> for Recip<Suction, Discharge> {
    type Output = Performance;
    type Error = RecipError;

    /// Adds motor losses and the overall isentropic efficiency.
    ///
    /// `Ẇ_motor = Ẇ_shaft·(1/η_motor − 1)`, `Ẇ_el = Ẇ_shaft + Ẇ_motor` and
    /// `η_oi = Ẇ_s / Ẇ_el`.
    fn post_solve(&self, run: &ConvergedRun) -> Result<Performance, RecipError> {
        let eta_motor = self.operating().motor_efficiency.get::<ratio>();

        let motor_losses = run.shaft_power * (1.0 / eta_motor - 1.0);
        let electrical_power = run.shaft_power + motor_losses;

        let electrical = electrical_power.get::<watt>();
        if electrical == 0.0 || !electrical.is_finite() {
            return Err(RecipError::UndefinedEfficiency {
                electrical: electrical_power,
            });
        }

        let performance = Performance {
            shaft_power: run.shaft_power,
            motor_losses,
            electrical_power,
            overall_isentropic_efficiency: run.isentropic_power / electrical_power,
        };

        debug!(
            shaft_w = run.shaft_power.get::<watt>(),
            motor_w = motor_losses.get::<watt>(),
            electrical_w = electrical,
            eta_oi = performance.overall_isentropic_efficiency.get::<ratio>(),
            "recip post-solve"
        );

        Ok(performance)
    }
}

/// Failure of one stage of a [`PostSolveChain`].
#[derive(Debug, Error)]
pub enum ChainError<BaseError, MachineError> {
    #[error("generic post-solve failed")]
    Base(#[source] BaseError),

    #[error("machine post-solve failed")]
    Machine(#[source] MachineError),
}

/// Runs a generic stage and then a machine stage on its output.
///
/// Each stage runs exactly once. The machine stage never runs if the generic
/// stage fails.
#[derive(Debug, Clone, Copy)]
pub struct PostSolveChain<Base, Machine> {
    pub base: Base,
    pub machine: Machine,
}

impl<Base, Machine> PostSolveChain<Base, Machine> {
    #[must_use]
    pub fn new(base: Base, machine: Machine) -> Self {
        Self { base, machine }
    }
}

impl<Run, Base, Machine> PostSolve<Run> for PostSolveChain<Base, Machine>
where
    Base: PostSolve<Run>,
    Machine: PostSolve<Base::Output>,
{
    type Output = (Base::Output, Machine::Output);
    type Error = ChainError<Base::Error, Machine::Error>;

    fn post_solve(&self, run: &Run) -> Result<Self::Output, Self::Error> {
        let generic = self.base.post_solve(run).map_err(ChainError::Base)?;
        let machine = self
            .machine
            .post_solve(&generic)
            .map_err(ChainError::Machine)?;
        Ok((generic, machine))
    }
}

impl<Suction, Discharge> Recip<Suction, Discharge> {
    /// Chains `base` in front of this machine's post-solve stage.
    pub fn post_solve_after<Base>(&self, base: Base) -> PostSolveChain<Base, &Self> {
        PostSolveChain::new(base, self)
    }
}

impl<Run, T: PostSolve<Run> + ?Sized> PostSolve<Run> for &T {
    type Output = T::Output;
    type Error = T::Error;

    fn post_solve(&self, run: &Run) -> Result<Self::Output, Self::Error> {
        (**self).post_solve(run)
    }
}
