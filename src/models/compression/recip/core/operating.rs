//! Operating point of the machine and its shell.

use thiserror::Error;
use uom::si::{
    angular_velocity::radian_per_second,
    area::square_meter,
    dynamic_viscosity::pascal_second,
    f64::{AngularVelocity, Area, DynamicViscosity, HeatTransfer, Ratio, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{
    Constraint, ConstraintError, NonNegative, StrictlyPositive, UnitIntervalLowerOpen,
};

/// Operating parameters fixed for a cycle run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operating {
    pub shaft_speed: AngularVelocity,
    pub ambient_temperature: ThermodynamicTemperature,
    /// Dynamic viscosity of the oil film in the piston gap.
    pub oil_viscosity: DynamicViscosity,
    /// Shell-to-ambient heat transfer coefficient.
    pub shell_heat_transfer: HeatTransfer,
    pub shell_area: Area,
    pub motor_efficiency: Ratio,
}

/// Reasons an [`Operating`] point is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OperatingError {
    #[error("shaft speed {value:?}: {source}")]
    ShaftSpeed {
        value: AngularVelocity,
        source: ConstraintError,
    },
    #[error("ambient temperature {value:?}: {source}")]
    AmbientTemperature {
        value: ThermodynamicTemperature,
        source: ConstraintError,
    },
    #[error("oil viscosity {value:?}: {source}")]
    OilViscosity {
        value: DynamicViscosity,
        source: ConstraintError,
    },
    #[error("shell heat transfer coefficient {value:?}: {source}")]
    ShellHeatTransfer {
        value: HeatTransfer,
        source: ConstraintError,
    },
    #[error("shell area {value:?}: {source}")]
    ShellArea { value: Area, source: ConstraintError },
    #[error("motor efficiency {value:?}: {source}")]
    MotorEfficiency { value: Ratio, source: ConstraintError },
}

/// Validated operating conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingConditions {
    op: Operating,
}

impl OperatingConditions {
    /// Validates an operating point.
    ///
    /// Shaft speed and ambient temperature must be strictly positive, oil
    /// viscosity and the shell heat-transfer terms non-negative, and the motor
    /// efficiency must lie in `(0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns the [`OperatingError`] for the first parameter that fails.
    pub fn new(op: Operating) -> Result<Self, OperatingError> {
        StrictlyPositive::check(&op.shaft_speed.get::<radian_per_second>()).map_err(|source| {
            OperatingError::ShaftSpeed {
                value: op.shaft_speed,
                source,
            }
        })?;
        StrictlyPositive::check(&op.ambient_temperature.get::<kelvin>()).map_err(|source| {
            OperatingError::AmbientTemperature {
                value: op.ambient_temperature,
                source,
            }
        })?;
        NonNegative::check(&op.oil_viscosity.get::<pascal_second>()).map_err(|source| {
            OperatingError::OilViscosity {
                value: op.oil_viscosity,
                source,
            }
        })?;
        NonNegative::check(&op.shell_heat_transfer.get::<watt_per_square_meter_kelvin>())
            .map_err(|source| OperatingError::ShellHeatTransfer {
                value: op.shell_heat_transfer,
                source,
            })?;
        NonNegative::check(&op.shell_area.get::<square_meter>()).map_err(|source| {
            OperatingError::ShellArea {
                value: op.shell_area,
                source,
            }
        })?;
        UnitIntervalLowerOpen::check(&op.motor_efficiency.get::<ratio>()).map_err(|source| {
            OperatingError::MotorEfficiency {
                value: op.motor_efficiency,
                source,
            }
        })?;

        Ok(Self { op })
    }

    /// Returns the validated parameters.
    #[must_use]
    pub fn get(&self) -> &Operating {
        &self.op
    }
}
