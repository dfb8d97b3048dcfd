//! Single-cylinder reciprocating compressor/expander closures.
//!
//! [`Recip`] owns the machine parameters and exposes the callbacks an external
//! cycle integrator evaluates:
//!
//! - per crank angle: [`Recip::volume`], [`Recip::suction`],
//!   [`Recip::discharge`], [`Recip::piston_leakage`], [`Recip::tube_code`]
//!   and [`Recip::heat_transfer`]
//! - per outer iteration: [`Recip::lump_energy_balance`]
//! - once after convergence: the [`PostSolve`] stage
//! - once at setup or on geometry change: [`Recip::pre_solve`]
//!
//! Every closure is a function of its arguments and the machine parameters.
//! Mutable run state (lump temperatures, cycle history) belongs to the caller
//! and is passed in explicitly.

mod config;
mod error;
mod flow;
mod geometry;
mod heat_transfer;
mod kinematics;
mod lump;
mod lump_solve;
mod mechanical;
mod nozzle;
mod operating;
mod performance;
mod tube;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::RecipConfig;
pub use error::RecipError;
pub use flow::{FixedArea, FlowAreaSource, FlowPath, PortArea};
pub use geometry::{DerivedGeometry, Dimensions, Geometry, GeometryError};
pub use heat_transfer::ChamberThermo;
pub use kinematics::ChamberVolume;
pub use lump::{CycleHistory, LumpEnergyBalance, Lumps};
pub use lump_solve::{LumpSolveConfig, LumpSolveError, solve_lump_temperature};
pub use nozzle::{MIN_FLOW_AREA, NozzleThermo, is_open, isentropic_nozzle};
pub use operating::{Operating, OperatingConditions, OperatingError};
pub use performance::{ChainError, ConvergedRun, Performance, PostSolve, PostSolveChain};
pub use tube::{Tube, TubeEnd, TubeThermo};

use tracing::debug;
use uom::si::{
    area::square_meter,
    f64::{Angle, Volume},
    volume::cubic_meter,
};

/// Default key of the working chamber control volume.
pub const DEFAULT_CHAMBER_KEY: &str = "A";

/// A single-cylinder reciprocating machine.
///
/// `Suction` and `Discharge` are the valve area sources, usually external
/// valve models implementing [`FlowAreaSource`].
#[derive(Debug, Clone)]
pub struct Recip<Suction, Discharge> {
    geometry: Geometry,
    operating: OperatingConditions,
    derived: DerivedGeometry,
    suction_valve: Suction,
    discharge_valve: Discharge,
    chamber_key: String,
}

impl<Suction, Discharge> Recip<Suction, Discharge> {
    /// Validates the parameters and runs the pre-solve derivation.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError::Geometry`] or [`RecipError::Operating`] if the
    /// configuration is rejected. Nothing can be evaluated on an invalid machine.
    pub fn new(
        dims: Dimensions,
        operating: Operating,
        suction_valve: Suction,
        discharge_valve: Discharge,
    ) -> Result<Self, RecipError> {
        let geometry = Geometry::new(dims)?;
        let operating = OperatingConditions::new(operating)?;

        let recip = Self {
            derived: geometry.derive(),
            geometry,
            operating,
            suction_valve,
            discharge_valve,
            chamber_key: DEFAULT_CHAMBER_KEY.to_string(),
        };
        recip.log_derived();
        Ok(recip)
    }

    /// Sets the control-volume key that identifies the working chamber.
    #[must_use]
    pub fn with_chamber_key(mut self, key: impl Into<String>) -> Self {
        self.chamber_key = key.into();
        self
    }

    /// Recomputes piston area, dead volume and port areas from the geometry.
    ///
    /// Construction and [`Recip::set_geometry`] already call this.
    pub fn pre_solve(&mut self) {
        self.derived = self.geometry.derive();
        self.log_derived();
    }

    fn log_derived(&self) {
        debug!(
            piston_area_m2 = self.derived.piston_area.get::<square_meter>(),
            dead_volume_m3 = self.derived.dead_volume.get::<cubic_meter>(),
            suction_area_m2 = self.derived.suction_port_area.get::<square_meter>(),
            discharge_area_m2 = self.derived.discharge_port_area.get::<square_meter>(),
            "recip pre-solve"
        );
    }

    /// Replaces the geometry and re-runs the pre-solve derivation.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError::Geometry`] and leaves the machine unchanged if
    /// the new dimensions are rejected.
    pub fn set_geometry(&mut self, dims: Dimensions) -> Result<(), RecipError> {
        self.geometry = Geometry::new(dims)?;
        self.pre_solve();
        Ok(())
    }

    /// Replaces the operating conditions.
    ///
    /// # Errors
    ///
    /// Returns [`RecipError::Operating`] and leaves the machine unchanged if
    /// the new conditions are rejected.
    pub fn set_operating(&mut self, operating: Operating) -> Result<(), RecipError> {
        self.operating = OperatingConditions::new(operating)?;
        Ok(())
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[must_use]
    pub fn operating(&self) -> &Operating {
        self.operating.get()
    }

    /// Areas and volumes from the last pre-solve.
    #[must_use]
    pub fn derived(&self) -> &DerivedGeometry {
        &self.derived
    }

    #[must_use]
    pub fn chamber_key(&self) -> &str {
        &self.chamber_key
    }

    #[must_use]
    pub fn suction_valve(&self) -> &Suction {
        &self.suction_valve
    }

    #[must_use]
    pub fn discharge_valve(&self) -> &Discharge {
        &self.discharge_valve
    }

    /// Chamber volume and `dV/dθ` at crank angle `theta`.
    #[must_use]
    pub fn volume(&self, theta: Angle) -> ChamberVolume {
        kinematics::chamber_volume(&self.geometry, &self.derived, theta)
    }

    /// Swept volume per revolution.
    #[must_use]
    pub fn displacement(&self) -> Volume {
        kinematics::displacement(&self.geometry, &self.derived)
    }
}

impl Recip<PortArea, PortArea> {
    /// Builds a machine whose valves expose the full suction and discharge port areas.
    ///
    /// The valve areas track the port diameters across [`Recip::set_geometry`].
    ///
    /// # Errors
    ///
    /// Returns [`RecipError::Geometry`] or [`RecipError::Operating`] if the
    /// configuration is rejected.
    pub fn with_port_valves(dims: Dimensions, operating: Operating) -> Result<Self, RecipError> {
        Self::new(dims, operating, PortArea, PortArea)
    }
}
