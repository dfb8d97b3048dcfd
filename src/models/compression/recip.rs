//! Single-cylinder reciprocating compressor.
//!
//! The computational core is in the internal `core` module. This module
//! re-exports the machine and its closures, and provides [`ChamberModel`], a
//! [`twine_core::Model`] adapter for one crank-angle evaluation of the
//! chamber.
//!
//! # Example
//!
//! ```
//! use recip_models::models::compression::recip::{FlowPath, Lumps, RecipConfig};
//! use recip_models::support::thermo::{capability::StateFrom, fluid::Air, model::IdealGas};
//! use uom::si::{
//!     angle::radian,
//!     f64::{Angle, Pressure, ThermodynamicTemperature},
//!     mass_rate::kilogram_per_second,
//!     power::watt,
//!     pressure::kilopascal,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let machine = RecipConfig {
//!     crank_length: 0.02,
//!     connecting_rod_length: 0.08,
//!     piston_diameter: 0.03,
//!     piston_length: 0.05,
//!     x_tdc: 0.001,
//!     d_suction: 0.01,
//!     d_discharge: 0.008,
//!     delta_gap: 1e-5,
//!     omega: 314.159,
//!     t_amb: 300.0,
//!     mu_oil: 0.0086,
//!     h_shell: 5.0,
//!     a_shell: 0.5,
//!     eta_motor: 0.9,
//! }
//! .build()
//! .unwrap();
//!
//! let air = IdealGas::<Air>::new().unwrap();
//! let state = |t: f64, p: f64| {
//!     let Ok(s) = air.state_from((
//!         Air,
//!         ThermodynamicTemperature::new::<kelvin>(t),
//!         Pressure::new::<kilopascal>(p),
//!     ));
//!     s
//! };
//!
//! let inlet = state(300.0, 101.325);
//! let chamber = state(300.0, 90.0);
//! let mut path = FlowPath::new("inlet", &inlet, "A", &chamber);
//!
//! let m_dot = machine.suction(&mut path, &(), &air).unwrap();
//! assert!(m_dot.get::<kilogram_per_second>() > 0.0);
//!
//! let lumps = Lumps::single(ThermodynamicTemperature::new::<kelvin>(320.0));
//! let heat = machine
//!     .heat_transfer(Angle::new::<radian>(1.0), &chamber, &lumps, 1, &air)
//!     .unwrap();
//! assert!(heat[0].get::<watt>() > 0.0);
//! ```

mod core;

pub use self::core::{
    ChainError, ChamberThermo, ChamberVolume, ConvergedRun, CycleHistory, DEFAULT_CHAMBER_KEY,
    DerivedGeometry, Dimensions, FixedArea, FlowAreaSource, FlowPath, Geometry, GeometryError,
    LumpEnergyBalance, LumpSolveConfig, LumpSolveError, Lumps, MIN_FLOW_AREA, NozzleThermo,
    Operating, OperatingConditions, OperatingError, Performance, PortArea, PostSolve,
    PostSolveChain, Recip, RecipConfig, RecipError, Tube, TubeEnd, TubeThermo, is_open,
    isentropic_nozzle, solve_lump_temperature,
};

use twine_core::Model;
use uom::si::f64::{Angle, Power};

use crate::support::thermo::{
    State,
    capability::{HasPrandtl, HasThermalConductivity, HasViscosity, ThermoModel},
};

/// Chamber state at one crank angle.
#[derive(Debug, Clone, PartialEq)]
pub struct ChamberInput<Fluid> {
    pub theta: Angle,
    pub state: State<Fluid>,
}

/// Chamber volume and control-volume heat flows at one crank angle.
#[derive(Debug, Clone, PartialEq)]
pub struct ChamberOutput {
    pub volume: ChamberVolume,
    pub heat: Vec<Power>,
}

/// Evaluates the chamber closures of a [`Recip`] at a crank angle.
///
/// The wall temperature comes from the borrowed lumps, so a cycle solver
/// updates the lumps between outer iterations and rebuilds the adapter.
#[derive(Debug, Clone, Copy)]
pub struct ChamberModel<'a, Suction, Discharge, Thermo> {
    machine: &'a Recip<Suction, Discharge>,
    thermo: &'a Thermo,
    lumps: &'a Lumps,
    active_cvs: usize,
}

impl<'a, Suction, Discharge, Thermo> ChamberModel<'a, Suction, Discharge, Thermo> {
    #[must_use]
    pub fn new(
        machine: &'a Recip<Suction, Discharge>,
        thermo: &'a Thermo,
        lumps: &'a Lumps,
        active_cvs: usize,
    ) -> Self {
        Self {
            machine,
            thermo,
            lumps,
            active_cvs,
        }
    }
}

impl<Suction, Discharge, Thermo> Model for ChamberModel<'_, Suction, Discharge, Thermo>
where
    Thermo: ThermoModel + HasViscosity + HasThermalConductivity + HasPrandtl,
{
    type Input = ChamberInput<Thermo::Fluid>;
    type Output = ChamberOutput;
    type Error = RecipError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(ChamberOutput {
            volume: self.machine.volume(input.theta),
            heat: self.machine.heat_transfer(
                input.theta,
                &input.state,
                self.lumps,
                self.active_cvs,
                self.thermo,
            )?,
        })
    }
}
