use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// Inputs are plain tuples such as `(Fluid, ThermodynamicTemperature, Pressure)`.
/// A model that cannot build a state from some input simply does not
/// implement `StateFrom` for it, so unsupported combinations fail to compile
/// rather than at run time.
///
/// The tube closure uses `StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>`
/// to build the outlet state from its computed temperature and pressure.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}
