//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] quantities. This module
//! adds the few conversions the reciprocating-machine closures need that
//! [`uom`] does not provide directly.
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts two absolute temperatures and
//! returns a [`TemperatureInterval`], which is what heat-rate products such as
//! `h·A·ΔT` require:
//!
//! ```
//! use uom::si::{f64::ThermodynamicTemperature, temperature_interval, thermodynamic_temperature::kelvin};
//! use recip_models::support::units::TemperatureDifference;
//!
//! let wall = ThermodynamicTemperature::new::<kelvin>(350.0);
//! let gas = ThermodynamicTemperature::new::<kelvin>(300.0);
//! assert_eq!(wall.minus(gas).get::<temperature_interval::kelvin>(), 50.0);
//! ```
//!
//! ## Gas constants
//!
//! [`SpecificGasConstant`] names the J/kg·K quantity in `p = ρ·R·T`, which
//! [`uom`] has no alias for.
//!
//! ## Shaft rates
//!
//! [`AngularRate::per_second`] reinterprets an angular velocity in rad/s as a
//! plain frequency, so `dV/dθ · ω` comes out as a volume flow rate.

use uom::{
    si::{
        ISQ, Quantity, SI,
        angular_velocity::radian_per_second,
        f64::{AngularVelocity, Frequency, TemperatureInterval, ThermodynamicTemperature},
        frequency::hertz,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin as abs_kelvin,
    },
    typenum::{N1, N2, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Extension trait for subtracting absolute temperatures.
///
/// [`uom`] keeps [`ThermodynamicTemperature`] and [`TemperatureInterval`] as
/// separate kinds and does not subtract the former into the latter; see
/// [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

/// Extension trait for using a shaft speed as a per-second rate.
pub trait AngularRate {
    /// Returns the angular velocity in rad/s as a frequency in 1/s.
    fn per_second(self) -> Frequency;
}

impl AngularRate for AngularVelocity {
    fn per_second(self) -> Frequency {
        Frequency::new::<hertz>(self.get::<radian_per_second>())
    }
}
