use uom::si::{
    angular_velocity::radian_per_second,
    area::square_meter,
    dynamic_viscosity::pascal_second,
    f64::{
        AngularVelocity, Area, DynamicViscosity, HeatTransfer, Length, Pressure, Ratio,
        SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    pressure::kilopascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{
        PropertyError, State,
        capability::{
            HasCp, HasCv, HasPrandtl, HasPressure, HasThermalConductivity, HasViscosity,
            StateFrom, ThermoModel, prandtl_from_parts,
        },
    },
    units::SpecificGasConstant,
};

use super::{Dimensions, Operating, PortArea, Recip};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct TestFluid;

/// Ideal gas with `R = 287`, `cp = 1004.5` (so `k = 1.4`) and constant transport.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TestGas {
    fail_pressure: bool,
    fail_transport: bool,
}

impl TestGas {
    pub(crate) const R: f64 = 287.0;
    pub(crate) const CP: f64 = 1004.5;
    pub(crate) const MU: f64 = 1.8e-5;
    pub(crate) const K: f64 = 0.026;

    pub(crate) fn new() -> Self {
        Self {
            fail_pressure: false,
            fail_transport: false,
        }
    }

    /// A backend whose pressure evaluation always fails.
    pub(crate) fn failing_pressure() -> Self {
        Self {
            fail_pressure: true,
            fail_transport: false,
        }
    }

    /// A backend whose viscosity and conductivity evaluations always fail.
    pub(crate) fn failing_transport() -> Self {
        Self {
            fail_pressure: false,
            fail_transport: true,
        }
    }

    fn transport_check(&self, property: &str) -> Result<(), PropertyError> {
        if self.fail_transport {
            return Err(PropertyError::Undefined {
                context: format!("{property} from test backend"),
            });
        }
        Ok(())
    }
}

impl ThermoModel for TestGas {
    type Fluid = TestFluid;
}

impl HasPressure for TestGas {
    fn pressure(&self, state: &State<TestFluid>) -> Result<Pressure, PropertyError> {
        if self.fail_pressure {
            return Err(PropertyError::OutOfDomain {
                context: "test backend".to_string(),
            });
        }
        Ok(state.density * gas_constant() * state.temperature)
    }
}

impl HasCp for TestGas {
    fn cp(&self, _state: &State<TestFluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(Self::CP))
    }
}

impl HasCv for TestGas {
    fn cv(&self, _state: &State<TestFluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            Self::CP - Self::R,
        ))
    }
}

impl HasViscosity for TestGas {
    fn viscosity(&self, _state: &State<TestFluid>) -> Result<DynamicViscosity, PropertyError> {
        self.transport_check("viscosity")?;
        Ok(DynamicViscosity::new::<pascal_second>(Self::MU))
    }
}

impl HasThermalConductivity for TestGas {
    fn thermal_conductivity(
        &self,
        _state: &State<TestFluid>,
    ) -> Result<ThermalConductivity, PropertyError> {
        self.transport_check("conductivity")?;
        Ok(ThermalConductivity::new::<watt_per_meter_kelvin>(Self::K))
    }
}

impl HasPrandtl for TestGas {
    fn prandtl(&self, state: &State<TestFluid>) -> Result<Ratio, PropertyError> {
        prandtl_from_parts(self, state)
    }
}

impl StateFrom<(TestFluid, ThermodynamicTemperature, Pressure)> for TestGas {
    type Error = std::convert::Infallible;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (TestFluid, ThermodynamicTemperature, Pressure),
    ) -> Result<State<TestFluid>, Self::Error> {
        let density = pressure / (gas_constant() * temperature);
        Ok(State::new(temperature, density, fluid))
    }
}

fn gas_constant() -> SpecificGasConstant {
    SpecificGasConstant::new::<joule_per_kilogram_kelvin>(TestGas::R)
}

/// Builds a test gas state from temperature in K and pressure in kPa.
pub(crate) fn gas_state(t_kelvin: f64, p_kpa: f64) -> State<TestFluid> {
    let t = ThermodynamicTemperature::new::<kelvin>(t_kelvin);
    let p = Pressure::new::<kilopascal>(p_kpa);
    State::new(t, p / (gas_constant() * t), TestFluid)
}

fn m(value: f64) -> Length {
    Length::new::<meter>(value)
}

/// Small hermetic compressor: 20 mm crank, 80 mm rod, 30 mm bore.
pub(crate) fn dimensions() -> Dimensions {
    Dimensions {
        crank_length: m(0.02),
        connecting_rod_length: m(0.08),
        piston_diameter: m(0.03),
        piston_length: m(0.05),
        x_tdc: m(0.001),
        suction_port_diameter: m(0.01),
        discharge_port_diameter: m(0.008),
        piston_gap: m(1e-5),
    }
}

/// 3000 rpm, 300 K ambient, 5 W/m²K over 0.5 m², 90% motor.
pub(crate) fn operating() -> Operating {
    Operating {
        shaft_speed: AngularVelocity::new::<radian_per_second>(
            3000.0 * 2.0 * std::f64::consts::PI / 60.0,
        ),
        ambient_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
        oil_viscosity: DynamicViscosity::new::<pascal_second>(0.0086),
        shell_heat_transfer: HeatTransfer::new::<watt_per_square_meter_kelvin>(5.0),
        shell_area: Area::new::<square_meter>(0.5),
        motor_efficiency: Ratio::new::<ratio>(0.9),
    }
}

/// Machine with fixed port-sized valves.
pub(crate) fn recip() -> Recip<PortArea, PortArea> {
    Recip::with_port_valves(dimensions(), operating()).expect("test machine is valid")
}
