//! In-cylinder gas-to-wall heat transfer.
//!
//! Uses the Adair-type correlation on an effective wetted area:
//!
//! ```text
//! A_ht = π·D·(V/A_piston)
//! u    = |½·(dV/dθ)·ω / A_piston|
//! Re   = ρ·u·D/μ
//! h    = 0.053·(k/D)·Pr^0.6·Re^0.8
//! Q    = h·A_ht·(T_wall − T_gas)
//! ```

use std::f64::consts::PI;

use uom::{
    ConstZero,
    si::{
        dynamic_viscosity::pascal_second,
        f64::{Angle, Area, HeatTransfer, Power, VolumeRate},
        heat_transfer::watt_per_square_meter_kelvin,
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        ratio::ratio,
        thermal_conductivity::watt_per_meter_kelvin,
        velocity::meter_per_second,
    },
};

use crate::support::{
    thermo::{
        State,
        capability::{HasPrandtl, HasThermalConductivity, HasViscosity, ThermoModel},
    },
    units::{AngularRate, TemperatureDifference},
};

use super::{Lumps, Recip, RecipError};

/// Property capabilities required by the chamber heat-transfer closure.
pub trait ChamberThermo<Fluid>:
    ThermoModel<Fluid = Fluid> + HasViscosity + HasThermalConductivity + HasPrandtl
{
}

impl<Fluid, T> ChamberThermo<Fluid> for T where
    T: ThermoModel<Fluid = Fluid> + HasViscosity + HasThermalConductivity + HasPrandtl
{
}

impl<Suction, Discharge> Recip<Suction, Discharge> {
    /// Heat flow from the wall (lump 0) into the chamber gas at crank angle `theta`.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError::Property`] if a transport property fails.
    pub fn chamber_heat_rate<Fluid>(
        &self,
        theta: Angle,
        chamber: &State<Fluid>,
        lumps: &Lumps,
        thermo: &impl ChamberThermo<Fluid>,
    ) -> Result<Power, RecipError> {
        let d = self.geometry().piston_diameter();
        let a_piston = self.derived().piston_area;
        let cv = self.volume(theta);

        let wetted: Area = d * (cv.volume / a_piston) * PI;
        let sweep: VolumeRate = cv.derivative * self.operating().shaft_speed.per_second();
        let speed = (sweep / a_piston).get::<meter_per_second>().abs() * 0.5;

        let mu = thermo
            .viscosity(chamber)
            .map_err(|e| RecipError::property("chamber viscosity", chamber, e))?
            .get::<pascal_second>();
        let k = thermo
            .thermal_conductivity(chamber)
            .map_err(|e| RecipError::property("chamber conductivity", chamber, e))?
            .get::<watt_per_meter_kelvin>();
        let pr = thermo
            .prandtl(chamber)
            .map_err(|e| RecipError::property("chamber Prandtl number", chamber, e))?
            .get::<ratio>();

        let d = d.get::<meter>();
        let re = chamber.density.get::<kilogram_per_cubic_meter>() * speed * d / mu;
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(
            0.053 * (k / d) * pr.powf(0.6) * re.powf(0.8),
        );

        Ok(h * wetted * lumps.wall().minus(chamber.temperature))
    }

    /// Heat flows into each active control volume.
    ///
    /// The chamber receives [`Recip::chamber_heat_rate`]. With more than one
    /// active control volume the second entry is zero.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError::Property`] if a transport property fails.
    pub fn heat_transfer<Fluid>(
        &self,
        theta: Angle,
        chamber: &State<Fluid>,
        lumps: &Lumps,
        active_cvs: usize,
        thermo: &impl ChamberThermo<Fluid>,
    ) -> Result<Vec<Power>, RecipError> {
        let q = self.chamber_heat_rate(theta, chamber, lumps, thermo)?;
        Ok(if active_cvs > 1 {
            vec![q, Power::ZERO]
        } else {
            vec![q]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::radian, f64::ThermodynamicTemperature, power::watt,
        thermodynamic_temperature::kelvin, volume::cubic_meter,
    };

    use crate::{
        models::compression::recip::core::test_support::{TestGas, gas_state, recip},
        support::thermo::PropertyError,
    };

    fn wall(t: f64) -> Lumps {
        Lumps::single(ThermodynamicTemperature::new::<kelvin>(t))
    }

    #[test]
    fn matches_closed_form_at_quarter_turn() {
        let machine = recip();
        let thermo = TestGas::new();
        let gas = gas_state(320.0, 300.0);
        let theta = Angle::new::<radian>(PI / 2.0);

        let q = machine
            .chamber_heat_rate(theta, &gas, &wall(350.0), &thermo)
            .unwrap();

        let cv = machine.volume(theta);
        let a_p = PI * 0.015_f64.powi(2);
        let omega = 3000.0 * 2.0 * PI / 60.0;
        let area = PI * 0.03 * cv.volume.get::<cubic_meter>() / a_p;
        let u = (0.5 * cv.derivative.get::<cubic_meter>() * omega / a_p).abs();
        let rho = gas.density.get::<kilogram_per_cubic_meter>();
        let re = rho * u * 0.03 / TestGas::MU;
        let pr = TestGas::CP * TestGas::MU / TestGas::K;
        let h = 0.053 * (TestGas::K / 0.03) * pr.powf(0.6) * re.powf(0.8);

        assert_relative_eq!(q.get::<watt>(), h * area * 30.0, max_relative = 1e-9);
        assert!(q > Power::ZERO);
    }

    #[test]
    fn cold_wall_cools_the_gas() {
        let machine = recip();
        let thermo = TestGas::new();
        let gas = gas_state(400.0, 800.0);

        let q = machine
            .chamber_heat_rate(Angle::new::<radian>(2.0), &gas, &wall(320.0), &thermo)
            .unwrap();
        assert!(q < Power::ZERO);
    }

    #[test]
    fn equal_temperatures_exchange_nothing() {
        let machine = recip();
        let thermo = TestGas::new();
        let gas = gas_state(330.0, 500.0);

        let q = machine
            .chamber_heat_rate(Angle::new::<radian>(1.0), &gas, &wall(330.0), &thermo)
            .unwrap();
        assert_relative_eq!(q.get::<watt>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn vector_length_follows_active_control_volumes() {
        let machine = recip();
        let thermo = TestGas::new();
        let gas = gas_state(320.0, 300.0);
        let theta = Angle::new::<radian>(1.0);

        let single = machine
            .heat_transfer(theta, &gas, &wall(350.0), 1, &thermo)
            .unwrap();
        assert_eq!(single.len(), 1);

        let pair = machine
            .heat_transfer(theta, &gas, &wall(350.0), 2, &thermo)
            .unwrap();
        assert_eq!(pair.len(), 2);
        assert_eq!(pair[0], single[0]);
        assert_eq!(pair[1], Power::ZERO);
    }

    #[test]
    fn transport_failure_reports_chamber_state() {
        let machine = recip();
        let thermo = TestGas::failing_transport();
        let gas = gas_state(320.0, 300.0);

        let err = machine
            .heat_transfer(Angle::new::<radian>(1.0), &gas, &wall(350.0), 2, &thermo)
            .unwrap_err();
        assert!(matches!(
            err,
            RecipError::Property {
                context: "chamber viscosity",
                temperature,
                source: PropertyError::Undefined { .. },
                ..
            } if temperature == gas.temperature
        ));
    }
}
