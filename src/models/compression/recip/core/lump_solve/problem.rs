use std::convert::Infallible;

use twine_core::EquationProblem;
use uom::si::{f64::ThermodynamicTemperature, power::watt, thermodynamic_temperature::kelvin};

use crate::models::compression::recip::core::LumpEnergyBalance;

/// Residual of the shell energy balance as a function of lump temperature.
///
/// The residual is the net heat into the shell in watts. It falls as the lump
/// warms, because the shell loses more to the ambient.
pub(super) struct LumpBalanceProblem;

impl EquationProblem<1> for LumpBalanceProblem {
    type Input = ThermodynamicTemperature;
    type Output = LumpEnergyBalance;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.net().get::<watt>()])
    }
}
