use uom::si::f64::{MassDensity, ThermodynamicTemperature};

/// Thermodynamic state of a control volume or boundary.
///
/// Temperature and density fix the state of a single-phase fluid. Everything
/// else (pressure, heat capacities, transport properties) is requested from a
/// property model implementing the [`capability`](super::capability) traits.
///
/// # Example
///
/// ```
/// use recip_models::support::thermo::{State, fluid::Air};
/// use uom::si::{
///     f64::{MassDensity, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let chamber = State::new(
///     ThermodynamicTemperature::new::<kelvin>(300.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(1.2),
///     Air,
/// );
/// assert_eq!(chamber.fluid, Air);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a state from temperature, density and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }

    /// Returns the state with its temperature replaced.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    /// Returns the state with its density replaced.
    #[must_use]
    pub fn with_density(self, density: MassDensity) -> Self {
        Self { density, ..self }
    }
}
