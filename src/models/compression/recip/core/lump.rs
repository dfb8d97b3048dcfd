//! Shell lump temperatures and the lumped energy balance.

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{Energy, Power, ThermodynamicTemperature, Time},
        power::watt,
        thermodynamic_temperature::kelvin,
        time::second,
    },
};

use crate::support::units::TemperatureDifference;

use super::{Recip, RecipError};

/// Lumped shell temperatures.
///
/// Never empty. The closures read and write the first lump only, which is the
/// wall temperature seen by the chamber gas and the connecting tubes.
#[derive(Debug, Clone, PartialEq)]
pub struct Lumps {
    temperatures: Vec<ThermodynamicTemperature>,
}

impl Lumps {
    /// Creates a lump buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError::NoLumps`] if `temperatures` is empty.
    pub fn new(temperatures: Vec<ThermodynamicTemperature>) -> Result<Self, RecipError> {
        if temperatures.is_empty() {
            return Err(RecipError::NoLumps);
        }
        Ok(Self { temperatures })
    }

    /// Creates a buffer holding only the wall lump.
    #[must_use]
    pub fn single(wall: ThermodynamicTemperature) -> Self {
        Self {
            temperatures: vec![wall],
        }
    }

    /// Temperature of lump 0.
    #[must_use]
    pub fn wall(&self) -> ThermodynamicTemperature {
        self.temperatures[0]
    }

    pub fn set_wall(&mut self, temperature: ThermodynamicTemperature) {
        self.temperatures[0] = temperature;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ThermodynamicTemperature] {
        &self.temperatures
    }
}

/// Time and chamber heat-flow samples recorded over one cycle.
#[derive(Debug, Clone, Copy)]
pub struct CycleHistory<'a> {
    time: &'a [Time],
    heat: &'a [Power],
}

impl<'a> CycleHistory<'a> {
    /// Wraps matching time and heat samples.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError::HistoryLength`] if the slices differ in length and
    /// [`RecipError::HistoryTooShort`] if they hold fewer than two samples.
    pub fn new(time: &'a [Time], heat: &'a [Power]) -> Result<Self, RecipError> {
        if time.len() != heat.len() {
            return Err(RecipError::HistoryLength {
                time: time.len(),
                heat: heat.len(),
            });
        }
        if time.len() < 2 {
            return Err(RecipError::HistoryTooShort {
                samples: time.len(),
            });
        }
        Ok(Self { time, heat })
    }

    /// Uses samples `0..=last_index` of longer, preallocated buffers.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError::HistoryIndex`] if `last_index` is past the end of
    /// either buffer, otherwise the errors of [`CycleHistory::new`].
    pub fn truncated(
        time: &'a [Time],
        heat: &'a [Power],
        last_index: usize,
    ) -> Result<Self, RecipError> {
        let samples = time.len().min(heat.len());
        if last_index >= samples {
            return Err(RecipError::HistoryIndex {
                index: last_index,
                samples,
            });
        }
        Self::new(&time[..=last_index], &heat[..=last_index])
    }

    #[must_use]
    pub fn duration(&self) -> Time {
        self.time[self.time.len() - 1] - self.time[0]
    }

    /// Cycle-averaged heat flow by the trapezoid rule.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError::HistoryDuration`] if the samples span no time.
    pub fn mean_heat_rate(&self) -> Result<Power, RecipError> {
        let duration = self.duration();
        if duration.get::<second>().is_nan() || duration <= Time::ZERO {
            return Err(RecipError::HistoryDuration { duration });
        }

        let energy = self
            .time
            .windows(2)
            .zip(self.heat.windows(2))
            .fold(Energy::ZERO, |acc, (t, q)| {
                acc + (q[0] + q[1]) * (t[1] - t[0]) * 0.5
            });

        Ok(energy / duration)
    }
}

/// Terms of the shell energy balance, all positive into the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumpEnergyBalance {
    /// Lump temperature the balance was evaluated at.
    pub lump_temperature: ThermodynamicTemperature,
    /// Heat rejected by the gas to the wall, averaged over the cycle.
    pub q_from_gas: Power,
    pub w_mechanical: Power,
    pub q_ambient: Power,
}

impl LumpEnergyBalance {
    /// Net heat into the shell. Zero at the converged lump temperature.
    #[must_use]
    pub fn net(&self) -> Power {
        self.q_from_gas + self.w_mechanical + self.q_ambient
    }
}

impl<Suction, Discharge> Recip<Suction, Discharge> {
    /// Heat from the ambient into the shell at `lump_temperature`.
    #[must_use]
    pub fn ambient_heat_transfer(&self, lump_temperature: ThermodynamicTemperature) -> Power {
        let op = self.operating();
        op.shell_heat_transfer
            * op.shell_area
            * op.ambient_temperature.minus(lump_temperature)
    }

    /// Evaluates the shell energy balance for a completed cycle.
    ///
    /// `history` holds the chamber heat flow (positive into the gas), so the
    /// heat the gas delivers to the shell is its negated cycle average.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError::HistoryDuration`] if the history spans no time.
    pub fn lump_energy_balance(
        &self,
        history: &CycleHistory<'_>,
        lumps: &Lumps,
    ) -> Result<LumpEnergyBalance, RecipError> {
        let lump_temperature = lumps.wall();
        let balance = LumpEnergyBalance {
            lump_temperature,
            q_from_gas: -history.mean_heat_rate()?,
            w_mechanical: self.mechanical_losses(),
            q_ambient: self.ambient_heat_transfer(lump_temperature),
        };

        debug!(
            lump_k = lump_temperature.get::<kelvin>(),
            q_from_gas_w = balance.q_from_gas.get::<watt>(),
            w_mechanical_w = balance.w_mechanical.get::<watt>(),
            q_ambient_w = balance.q_ambient.get::<watt>(),
            net_w = balance.net().get::<watt>(),
            "lump energy balance"
        );

        Ok(balance)
    }
}
