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

/// Canonical identifier for carbon dioxide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarbonDioxide;

impl IdealGasFluid for CarbonDioxide {
    /// Dilute-gas properties near 300 K.
    fn parameters() -> IdealGasParameters {
        IdealGasParameters {
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(188.92),
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(844.0),
            viscosity: DynamicViscosity::new::<pascal_second>(1.50e-5),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.01662),
        }
    }
}
