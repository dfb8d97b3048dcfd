use uom::{
    ConstZero,
    si::f64::{DynamicViscosity, Pressure, Ratio, SpecificHeatCapacity, ThermalConductivity},
};

use crate::support::thermo::{PropertyError, State};

use super::ThermoModel;

pub trait HasPressure: ThermoModel {
    /// Returns the pressure for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the pressure cannot be calculated.
    fn pressure(&self, state: &State<Self::Fluid>) -> Result<Pressure, PropertyError>;
}

pub trait HasCp: ThermoModel {
    /// Returns the specific heat capacity at constant pressure for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if `cp` cannot be calculated.
    fn cp(&self, state: &State<Self::Fluid>) -> Result<SpecificHeatCapacity, PropertyError>;
}

pub trait HasCv: ThermoModel {
    /// Returns the specific heat capacity at constant volume for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if `cv` cannot be calculated.
    fn cv(&self, state: &State<Self::Fluid>) -> Result<SpecificHeatCapacity, PropertyError>;
}

pub trait HasViscosity: ThermoModel {
    /// Returns the dynamic viscosity for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the viscosity cannot be calculated.
    fn viscosity(&self, state: &State<Self::Fluid>) -> Result<DynamicViscosity, PropertyError>;
}

pub trait HasThermalConductivity: ThermoModel {
    /// Returns the thermal conductivity for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the conductivity cannot be calculated.
    fn thermal_conductivity(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<ThermalConductivity, PropertyError>;
}

/// Prandtl number, `Pr = cp·μ/k`.
///
/// Backends with a direct Prandtl evaluation implement this trait themselves.
/// Backends without one can build it from their other capabilities with
/// [`prandtl_from_parts`].
pub trait HasPrandtl: ThermoModel {
    /// Returns the Prandtl number for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the Prandtl number cannot be calculated.
    fn prandtl(&self, state: &State<Self::Fluid>) -> Result<Ratio, PropertyError>;
}

/// Computes `Pr = cp·μ/k` from the individual capabilities of `model`.
///
/// # Errors
///
/// Returns [`PropertyError`] if any property fails or if `k` is zero.
pub fn prandtl_from_parts<M>(model: &M, state: &State<M::Fluid>) -> Result<Ratio, PropertyError>
where
    M: HasCp + HasViscosity + HasThermalConductivity,
{
    let k = model.thermal_conductivity(state)?;
    if k <= ThermalConductivity::ZERO {
        return Err(PropertyError::Undefined {
            context: "Prandtl number with non-positive thermal conductivity".to_string(),
        });
    }
    Ok(model.cp(state)? * model.viscosity(state)? / k)
}
