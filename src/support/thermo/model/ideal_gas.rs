//! Ideal gas with constant heat capacities and transport properties.
//!
//! `IdealGas` is the reference property backend for the machine closures. It
//! covers every capability the chamber, valve and tube closures ask for, which
//! makes it useful for tests, quick sizing runs and cycle solvers that do not
//! need real-gas behavior.
//!
//! # Assumptions
//!
//! - Equation of state `p = ρ·R·T`
//! - Constant `cp`, with `cv = cp − R`
//! - Constant dynamic viscosity and thermal conductivity

use std::{convert::Infallible, marker::PhantomData};

use thiserror::Error;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, Pressure, Ratio, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{
        PropertyError, State,
        capability::{
            HasCp, HasCv, HasPrandtl, HasPressure, HasThermalConductivity, HasViscosity,
            StateFrom, ThermoModel, prandtl_from_parts,
        },
    },
    units::SpecificGasConstant,
};

use super::ideal_gas_eos;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IdealGasParametersError {
    #[error("invalid gas constant R: {r:?}")]
    GasConstant { r: SpecificGasConstant },
    #[error("non-physical heat capacities: cv = cp - R must be > 0; cp={cp:?}, R={r:?}, cv={cv:?}")]
    NonPhysicalCv {
        r: SpecificGasConstant,
        cp: SpecificHeatCapacity,
        cv: SpecificHeatCapacity,
    },
    #[error("invalid viscosity: {mu:?}")]
    Viscosity { mu: DynamicViscosity },
    #[error("invalid thermal conductivity: {k:?}")]
    Conductivity { k: ThermalConductivity },
}

/// Constants of an [`IdealGas`] fluid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGasParameters {
    /// Specific gas constant `R`.
    pub gas_constant: SpecificGasConstant,
    pub cp: SpecificHeatCapacity,
    pub viscosity: DynamicViscosity,
    pub conductivity: ThermalConductivity,
}

/// Fluid constants required by the [`IdealGas`] model.
pub trait IdealGasFluid {
    /// Returns the constant parameters for use with [`IdealGas`].
    fn parameters() -> IdealGasParameters;
}

/// Ideal gas property model with constant heat capacities and transport properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGas<Fluid> {
    r: SpecificGasConstant,
    cp: SpecificHeatCapacity,
    cv: SpecificHeatCapacity,
    viscosity: DynamicViscosity,
    conductivity: ThermalConductivity,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for IdealGas<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid: IdealGasFluid> IdealGas<Fluid> {
    /// Creates a model using the constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`IdealGasParametersError`] if a constant is not strictly
    /// positive or if `cv = cp − R` is non-physical.
    pub fn new() -> Result<Self, IdealGasParametersError> {
        Self::from_parameters(Fluid::parameters())
    }
}

impl<Fluid> IdealGas<Fluid> {
    /// Creates a model from explicit constants.
    ///
    /// # Errors
    ///
    /// Returns [`IdealGasParametersError`] if a constant is not strictly
    /// positive or if `cv = cp − R` is non-physical.
    pub fn from_parameters(parameters: IdealGasParameters) -> Result<Self, IdealGasParametersError> {
        let IdealGasParameters {
            gas_constant,
            cp,
            viscosity,
            conductivity,
        } = parameters;

        if StrictlyPositive::check(&gas_constant.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(IdealGasParametersError::GasConstant { r: gas_constant });
        }

        let cv = cp - gas_constant;
        if StrictlyPositive::check(&cv.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(IdealGasParametersError::NonPhysicalCv {
                r: gas_constant,
                cp,
                cv,
            });
        }

        if StrictlyPositive::check(&viscosity.get::<pascal_second>()).is_err() {
            return Err(IdealGasParametersError::Viscosity { mu: viscosity });
        }

        if StrictlyPositive::check(&conductivity.get::<watt_per_meter_kelvin>()).is_err() {
            return Err(IdealGasParametersError::Conductivity { k: conductivity });
        }

        Ok(Self {
            r: gas_constant,
            cp,
            cv,
            viscosity,
            conductivity,
            _marker: PhantomData,
        })
    }

    /// Returns the specific gas constant.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        self.r
    }
}

impl<Fluid> HasPressure for IdealGas<Fluid> {
    /// Computes pressure with `p = ρ·R·T`.
    fn pressure(&self, state: &State<Fluid>) -> Result<Pressure, PropertyError> {
        Ok(ideal_gas_eos::pressure(state.temperature, state.density, self.r))
    }
}

impl<Fluid> HasCp for IdealGas<Fluid> {
    fn cp(&self, _state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.cp)
    }
}

impl<Fluid> HasCv for IdealGas<Fluid> {
    fn cv(&self, _state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.cv)
    }
}

impl<Fluid> HasViscosity for IdealGas<Fluid> {
    fn viscosity(&self, _state: &State<Fluid>) -> Result<DynamicViscosity, PropertyError> {
        Ok(self.viscosity)
    }
}

impl<Fluid> HasThermalConductivity for IdealGas<Fluid> {
    fn thermal_conductivity(
        &self,
        _state: &State<Fluid>,
    ) -> Result<ThermalConductivity, PropertyError> {
        Ok(self.conductivity)
    }
}

impl<Fluid> HasPrandtl for IdealGas<Fluid> {
    fn prandtl(&self, state: &State<Fluid>) -> Result<Ratio, PropertyError> {
        prandtl_from_parts(self, state)
    }
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, Pressure)> for IdealGas<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (Fluid, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Fluid>, Self::Error> {
        Ok(State::new(
            temperature,
            ideal_gas_eos::density(temperature, pressure, self.r),
            fluid,
        ))
    }
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, MassDensity)> for IdealGas<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, temperature, density): (Fluid, ThermodynamicTemperature, MassDensity),
    ) -> Result<State<Fluid>, Self::Error> {
        Ok(State::new(temperature, density, fluid))
    }
}
