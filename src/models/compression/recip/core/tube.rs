//! Isothermal-wall tube connecting the machine to an external volume.
//!
//! The tube wall sits at the shell lump temperature. Gas enters at the fixed
//! end and leaves at the free end:
//!
//! ```text
//! G   = ṁ / (π·D²/4)
//! Re  = G·D/μ
//! Nu  = 3.66                      (Re < 2300)
//!     = 0.023·Re^0.8·Pr^0.4       (otherwise)
//! NTU = (Nu·k/D)·π·D·L / (ṁ·cp)
//! T_out = T_wall − (T_wall − T_in)·exp(−NTU)
//! Q     = ṁ·cp·(T_out − T_in)
//! f   = 64/Re  or  0.3164·Re^−0.25
//! Δp  = f·(L/D)·G²/(2·ρ_in)
//! ```

use std::f64::consts::PI;

use uom::{
    ConstZero,
    si::{
        dynamic_viscosity::pascal_second,
        f64::{
            Area, HeatTransfer, Length, MassRate, Power, Pressure, Ratio,
            ThermodynamicTemperature,
        },
        heat_transfer::watt_per_square_meter_kelvin,
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second,
        pressure::pascal,
        ratio::ratio,
        temperature_interval::kelvin as delta_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::{
    thermo::{
        State,
        capability::{
            HasCp, HasPrandtl, HasPressure, HasThermalConductivity, HasViscosity, StateFrom,
            ThermoModel,
        },
    },
    units::TemperatureDifference,
};

use super::{Lumps, Recip, RecipError};

/// Reynolds number below which the tube flow is treated as laminar.
const LAMINAR_LIMIT: f64 = 2300.0;

/// Property capabilities required by the tube closure.
pub trait TubeThermo<Fluid>:
    ThermoModel<Fluid = Fluid>
    + HasPressure
    + HasCp
    + HasViscosity
    + HasThermalConductivity
    + HasPrandtl
    + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
{
}

impl<Fluid, T> TubeThermo<Fluid> for T where
    T: ThermoModel<Fluid = Fluid>
        + HasPressure
        + HasCp
        + HasViscosity
        + HasThermalConductivity
        + HasPrandtl
        + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
{
}

/// Which end of a [`Tube`] holds the known inlet state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TubeEnd {
    One,
    Two,
}

/// A connecting tube with a fixed inlet end.
///
/// [`Recip::tube_code`] overwrites the free end state and `heat`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tube<Fluid> {
    pub state_1: State<Fluid>,
    pub state_2: State<Fluid>,
    /// Flow from the fixed end toward the free end.
    pub mass_rate: MassRate,
    pub fixed: TubeEnd,
    pub length: Length,
    pub inner_diameter: Length,
    /// Heat transferred from the wall into the gas.
    pub heat: Power,
}

impl<Fluid> Tube<Fluid> {
    /// State at the fixed (inlet) end.
    #[must_use]
    pub fn inlet(&self) -> &State<Fluid> {
        match self.fixed {
            TubeEnd::One => &self.state_1,
            TubeEnd::Two => &self.state_2,
        }
    }

    /// State at the free (outlet) end.
    #[must_use]
    pub fn outlet(&self) -> &State<Fluid> {
        match self.fixed {
            TubeEnd::One => &self.state_2,
            TubeEnd::Two => &self.state_1,
        }
    }

    fn outlet_mut(&mut self) -> &mut State<Fluid> {
        match self.fixed {
            TubeEnd::One => &mut self.state_2,
            TubeEnd::Two => &mut self.state_1,
        }
    }
}

impl<Suction, Discharge> Recip<Suction, Discharge> {
    /// Evaluates heat transfer and friction in `tube`.
    ///
    /// The wall is held at lump 0 of `lumps`. On success the free end of the
    /// tube holds the outlet state and `tube.heat` the wall heat.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError`] for negative flow, non-positive tube dimensions,
    /// a friction drop that consumes the inlet pressure, or a property failure.
    pub fn tube_code<Fluid: Clone, Thermo>(
        &self,
        tube: &mut Tube<Fluid>,
        lumps: &Lumps,
        thermo: &Thermo,
    ) -> Result<(), RecipError>
    where
        Thermo: TubeThermo<Fluid>,
    {
        for (name, value) in [("length", tube.length), ("inner diameter", tube.inner_diameter)] {
            if value.get::<meter>().is_nan() || value <= Length::ZERO {
                return Err(RecipError::TubeDimension { name, value });
            }
        }

        let m_dot = tube.mass_rate.get::<kilogram_per_second>();
        if m_dot.is_nan() || m_dot < 0.0 {
            return Err(RecipError::NegativeTubeFlow {
                mass_rate: tube.mass_rate,
            });
        }

        let inlet = tube.inlet().clone();
        if m_dot == 0.0 {
            tube.heat = Power::ZERO;
            *tube.outlet_mut() = inlet;
            return Ok(());
        }

        let property = |context, e| RecipError::property(context, &inlet, e);
        let p_in = thermo
            .pressure(&inlet)
            .map_err(|e| property("tube inlet pressure", e))?;
        let cp = thermo
            .cp(&inlet)
            .map_err(|e| property("tube inlet cp", e))?;
        let mu = thermo
            .viscosity(&inlet)
            .map_err(|e| property("tube inlet viscosity", e))?
            .get::<pascal_second>();
        let k = thermo
            .thermal_conductivity(&inlet)
            .map_err(|e| property("tube inlet conductivity", e))?
            .get::<watt_per_meter_kelvin>();
        let pr = thermo
            .prandtl(&inlet)
            .map_err(|e| property("tube inlet Prandtl number", e))?
            .get::<ratio>();

        let d = tube.inner_diameter.get::<meter>();
        let l = tube.length.get::<meter>();
        let rho_in = inlet.density.get::<kilogram_per_cubic_meter>();

        let mass_flux = m_dot / (PI * d * d / 4.0);
        let re = mass_flux * d / mu;
        let laminar = re < LAMINAR_LIMIT;

        let nu = if laminar {
            3.66
        } else {
            0.023 * re.powf(0.8) * pr.powf(0.4)
        };
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(nu * k / d);
        let wall_area: Area = tube.inner_diameter * tube.length * PI;
        let ntu: Ratio = h * wall_area / (tube.mass_rate * cp);
        let approach = lumps.wall().minus(inlet.temperature) * (-ntu.get::<ratio>()).exp();
        let t_out = ThermodynamicTemperature::new::<kelvin>(
            lumps.wall().get::<kelvin>() - approach.get::<delta_kelvin>(),
        );

        let friction = if laminar { 64.0 / re } else { 0.3164 * re.powf(-0.25) };
        let dp = Pressure::new::<pascal>(
            friction * (l / d) * mass_flux * mass_flux / (2.0 * rho_in),
        );
        if dp >= p_in {
            return Err(RecipError::TubePressureDrop {
                inlet: p_in,
                drop: dp,
            });
        }

        let outlet = thermo
            .state_from((inlet.fluid.clone(), t_out, p_in - dp))
            .map_err(|e| RecipError::state_failed("tube outlet state", e))?;

        tube.heat = tube.mass_rate * cp * t_out.minus(inlet.temperature);
        *tube.outlet_mut() = outlet;
        Ok(())
    }
}
