use std::f64::consts::PI;

use uom::si::f64::{Area, Force, Power, Velocity};

use crate::support::units::AngularRate;

use super::Recip;

impl<Suction, Discharge> Recip<Suction, Discharge> {
    /// Viscous friction loss of the oil film between piston and cylinder.
    ///
    /// Couette flow across the gap at the mean piston speed:
    /// `u = 2·L_c·ω/π`, `F = μ_oil·(π·D·L_piston)·u/δ_gap`, `Ẇ = F·u`.
    #[must_use]
    pub fn mechanical_losses(&self) -> Power {
        let geometry = self.geometry();
        let op = self.operating();

        let film: Area = geometry.piston_diameter() * geometry.piston_length() * PI;
        let mean_speed: Velocity =
            geometry.crank_length() * op.shaft_speed.per_second() * (2.0 / PI);
        let shear: Force = op.oil_viscosity * film * mean_speed / geometry.piston_gap();

        shear * mean_speed
    }
}
