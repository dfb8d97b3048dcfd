//! Flat machine configuration in SI units.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{
    angular_velocity::radian_per_second,
    area::square_meter,
    dynamic_viscosity::pascal_second,
    f64::{
        AngularVelocity, Area, DynamicViscosity, HeatTransfer, Length, Ratio,
        ThermodynamicTemperature,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use super::{Dimensions, Geometry, Operating, OperatingConditions, PortArea, Recip, RecipError};

/// Machine parameters as plain SI scalars.
///
/// Lengths in m, speed in rad/s, temperatures in K, viscosity in Pa·s, shell
/// heat-transfer coefficient in W/m²·K, shell area in m².
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecipConfig {
    pub crank_length: f64,
    pub connecting_rod_length: f64,
    pub piston_diameter: f64,
    pub piston_length: f64,
    pub x_tdc: f64,
    pub d_suction: f64,
    pub d_discharge: f64,
    pub delta_gap: f64,
    pub omega: f64,
    pub t_amb: f64,
    pub mu_oil: f64,
    pub h_shell: f64,
    pub a_shell: f64,
    pub eta_motor: f64,
}

impl RecipConfig {
    /// Typed dimensions, without validation.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        let m = Length::new::<meter>;
        Dimensions {
            crank_length: m(self.crank_length),
            connecting_rod_length: m(self.connecting_rod_length),
            piston_diameter: m(self.piston_diameter),
            piston_length: m(self.piston_length),
            x_tdc: m(self.x_tdc),
            suction_port_diameter: m(self.d_suction),
            discharge_port_diameter: m(self.d_discharge),
            piston_gap: m(self.delta_gap),
        }
    }

    /// Typed operating point, without validation.
    #[must_use]
    pub fn operating_point(&self) -> Operating {
        Operating {
            shaft_speed: AngularVelocity::new::<radian_per_second>(self.omega),
            ambient_temperature: ThermodynamicTemperature::new::<kelvin>(self.t_amb),
            oil_viscosity: DynamicViscosity::new::<pascal_second>(self.mu_oil),
            shell_heat_transfer: HeatTransfer::new::<watt_per_square_meter_kelvin>(self.h_shell),
            shell_area: Area::new::<square_meter>(self.a_shell),
            motor_efficiency: Ratio::new::<ratio>(self.eta_motor),
        }
    }

    /// Validated geometry.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError::Geometry`] if the dimensions are rejected.
    pub fn geometry(&self) -> Result<Geometry, RecipError> {
        Ok(Geometry::new(self.dimensions())?)
    }

    /// Validated operating conditions.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError::Operating`] if the operating point is rejected.
    pub fn operating(&self) -> Result<OperatingConditions, RecipError> {
        Ok(OperatingConditions::new(self.operating_point())?)
    }

    /// Builds a machine with fixed port-sized valves.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError`] if any parameter is rejected.
    pub fn build(&self) -> Result<Recip<PortArea, PortArea>, RecipError> {
        Recip::with_port_valves(self.dimensions(), self.operating_point())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::compression::recip::core::{
        GeometryError, OperatingError,
        test_support::{dimensions, operating},
    };

    fn config() -> RecipConfig {
        RecipConfig {
            crank_length: 0.02,
            connecting_rod_length: 0.08,
            piston_diameter: 0.03,
            piston_length: 0.05,
            x_tdc: 0.001,
            d_suction: 0.01,
            d_discharge: 0.008,
            delta_gap: 1e-5,
            omega: 3000.0 * 2.0 * std::f64::consts::PI / 60.0,
            t_amb: 300.0,
            mu_oil: 0.0086,
            h_shell: 5.0,
            a_shell: 0.5,
            eta_motor: 0.9,
        }
    }

    #[test]
    fn converts_to_typed_parameters() {
        let cfg = config();
        assert_eq!(cfg.geometry().unwrap().dimensions(), &dimensions());
        assert_eq!(cfg.operating().unwrap().get(), &operating());
        assert!(cfg.build().is_ok());
    }

    #[test]
    fn validation_errors_surface() {
        let cfg = RecipConfig {
            piston_diameter: -0.03,
            ..config()
        };
        assert!(matches!(
            cfg.geometry(),
            Err(RecipError::Geometry(GeometryError::NotPositive {
                name: "piston diameter",
                ..
            }))
        ));

        let cfg = RecipConfig {
            eta_motor: 1.5,
            ..config()
        };
        assert!(matches!(
            cfg.operating(),
            Err(RecipError::Operating(OperatingError::MotorEfficiency { .. }))
        ));
        assert!(cfg.build().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip() {
        let cfg = config();
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"delta_gap\""));

        let back: RecipConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
