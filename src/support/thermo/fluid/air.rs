use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, SpecificHeatCapacity, ThermalConductivity},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    thermo::model::ideal_gas::{IdealGasFluid, IdealGasParameters},
    units::SpecificGasConstant,
};

/// Canonical identifier for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl IdealGasFluid for Air {
    /// Properties near 300 K and 1 atm.
    fn parameters() -> IdealGasParameters {
        IdealGasParameters {
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.053),
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
            viscosity: DynamicViscosity::new::<pascal_second>(1.846e-5),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.02624),
        }
    }
}
