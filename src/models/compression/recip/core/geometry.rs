//! Machine geometry and the pre-solve derivation of dependent areas and volumes.

use std::f64::consts::PI;

use thiserror::Error;
use uom::si::{
    f64::{Area, Length, Volume},
    length::meter,
};

use crate::support::constraint::{Constraint, NonNegative, StrictlyPositive};

/// Primary dimensions of a single-cylinder reciprocating machine.
///
/// These are the raw inputs. [`Geometry::new`] validates them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Crank radius.
    pub crank_length: Length,
    pub connecting_rod_length: Length,
    pub piston_diameter: Length,
    pub piston_length: Length,
    /// Clearance length between the piston face and the head at top dead center.
    pub x_tdc: Length,
    pub suction_port_diameter: Length,
    pub discharge_port_diameter: Length,
    /// Radial gap between piston and cylinder.
    pub piston_gap: Length,
}

/// Reasons [`Dimensions`] are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("{name} must be strictly positive, got {value:?}")]
    NotPositive { name: &'static str, value: Length },

    #[error("clearance length must not be negative, got {value:?}")]
    NegativeClearance { value: Length },

    /// The slider-crank kinematics need `L_rod > L_crank`.
    #[error("connecting rod {rod:?} must be longer than crank {crank:?}")]
    RodNotLongerThanCrank { rod: Length, crank: Length },
}

/// Validated machine geometry.
///
/// A `Geometry` always satisfies `connecting_rod_length > crank_length`, so the
/// kinematic square root `sqrt(L_rod² − L_crank²·sin²θ)` is bounded below by
/// `sqrt(L_rod² − L_crank²) > 0` for every crank angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    dims: Dimensions,
}

impl Geometry {
    /// Validates the primary dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if any length other than the clearance is not
    /// strictly positive, if the clearance is negative, or if the connecting rod
    /// is not longer than the crank.
    pub fn new(dims: Dimensions) -> Result<Self, GeometryError> {
        let positive = [
            ("crank length", dims.crank_length),
            ("connecting rod length", dims.connecting_rod_length),
            ("piston diameter", dims.piston_diameter),
            ("piston length", dims.piston_length),
            ("suction port diameter", dims.suction_port_diameter),
            ("discharge port diameter", dims.discharge_port_diameter),
            ("piston gap", dims.piston_gap),
        ];
        for (name, value) in positive {
            if StrictlyPositive::check(&value.get::<meter>()).is_err() {
                return Err(GeometryError::NotPositive { name, value });
            }
        }

        if NonNegative::check(&dims.x_tdc.get::<meter>()).is_err() {
            return Err(GeometryError::NegativeClearance { value: dims.x_tdc });
        }

        if dims.connecting_rod_length <= dims.crank_length {
            return Err(GeometryError::RodNotLongerThanCrank {
                rod: dims.connecting_rod_length,
                crank: dims.crank_length,
            });
        }

        Ok(Self { dims })
    }

    /// Returns the validated dimensions.
    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    #[must_use]
    pub fn crank_length(&self) -> Length {
        self.dims.crank_length
    }

    #[must_use]
    pub fn connecting_rod_length(&self) -> Length {
        self.dims.connecting_rod_length
    }

    #[must_use]
    pub fn piston_diameter(&self) -> Length {
        self.dims.piston_diameter
    }

    #[must_use]
    pub fn piston_length(&self) -> Length {
        self.dims.piston_length
    }

    #[must_use]
    pub fn piston_gap(&self) -> Length {
        self.dims.piston_gap
    }

    /// Computes the dependent areas and volumes.
    #[must_use]
    pub fn derive(&self) -> DerivedGeometry {
        let piston_area = circle_area(self.dims.piston_diameter);
        DerivedGeometry {
            piston_area,
            dead_volume: piston_area * self.dims.x_tdc,
            suction_port_area: circle_area(self.dims.suction_port_diameter),
            discharge_port_area: circle_area(self.dims.discharge_port_diameter),
        }
    }
}

/// Areas and volumes that follow from [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGeometry {
    /// `π·D²/4`
    pub piston_area: Area,
    /// `A_piston·x_TDC`
    pub dead_volume: Volume,
    pub suction_port_area: Area,
    pub discharge_port_area: Area,
}

fn circle_area(diameter: Length) -> Area {
    diameter * diameter * (PI / 4.0)
}
