//! Slider-crank chamber kinematics.
//!
//! Piston position is measured from top dead center (TDC):
//!
//! ```text
//! x(θ)  = L_c·cos θ + sqrt(L_r² − L_c²·sin²θ)
//! x₂(θ) = (L_r + L_c) − x(θ)
//! V(θ)  = x₂(θ)·A_piston + V_dead
//! dV/dθ = [L_c·sin θ + L_c²·sin 2θ / (2·sqrt(L_r² − L_c²·sin²θ))]·A_piston
//! ```
//!
//! `dV/dθ` is positive while the piston moves from TDC toward bottom dead
//! center (BDC), i.e. for `0 < θ < π`.

use uom::si::{
    angle::radian,
    f64::{Angle, Length, Volume},
    length::meter,
};

use super::{DerivedGeometry, Geometry};

/// Chamber volume and its crank-angle derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamberVolume {
    pub volume: Volume,
    /// `dV/dθ` in volume per radian.
    pub derivative: Volume,
}

/// Evaluates the chamber volume at crank angle `theta`.
///
/// The radicand `L_r² − L_c²·sin²θ` never drops below `L_r² − L_c²`, which
/// [`Geometry`] guarantees to be positive, so the derivative denominator stays
/// away from zero for every angle. Displacement from TDC is clamped at zero to
/// absorb round-off at `θ = 0`.
pub(super) fn chamber_volume(
    geometry: &Geometry,
    derived: &DerivedGeometry,
    theta: Angle,
) -> ChamberVolume {
    let l_c = geometry.crank_length().get::<meter>();
    let l_r = geometry.connecting_rod_length().get::<meter>();
    let theta = theta.get::<radian>();

    let sin_theta = theta.sin();
    let radicand = l_r * l_r - l_c * l_c * sin_theta * sin_theta;
    debug_assert!(radicand > 0.0, "validated geometry keeps the radicand positive");
    let root = radicand.sqrt();

    let x = l_c * theta.cos() + root;
    let x_2 = ((l_r + l_c) - x).max(0.0);
    let dx_2 = l_c * sin_theta + l_c * l_c * (2.0 * theta).sin() / (2.0 * root);

    ChamberVolume {
        volume: Length::new::<meter>(x_2) * derived.piston_area + derived.dead_volume,
        derivative: Length::new::<meter>(dx_2) * derived.piston_area,
    }
}

/// Swept volume per revolution, `2·L_c·A_piston`.
pub(super) fn displacement(geometry: &Geometry, derived: &DerivedGeometry) -> Volume {
    geometry.crank_length() * derived.piston_area * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::volume::cubic_meter;

    use crate::models::compression::recip::core::test_support::dimensions;

    fn geometry() -> (Geometry, DerivedGeometry) {
        let geometry = Geometry::new(dimensions()).unwrap();
        let derived = geometry.derive();
        (geometry, derived)
    }

    fn at(theta: f64) -> ChamberVolume {
        let (geometry, derived) = geometry();
        chamber_volume(&geometry, &derived, Angle::new::<radian>(theta))
    }

    #[test]
    fn top_dead_center_is_dead_volume() {
        let a_piston = PI * 0.015_f64.powi(2);
        let v_dead = a_piston * 0.001;

        let tdc = at(0.0);
        assert_relative_eq!(tdc.volume.get::<cubic_meter>(), v_dead, max_relative = 1e-12);
        assert_relative_eq!(tdc.derivative.get::<cubic_meter>(), 0.0, epsilon = 1e-18);
    }

    #[test]
    fn bottom_dead_center_adds_full_stroke() {
        let a_piston = PI * 0.015_f64.powi(2);
        let v_dead = a_piston * 0.001;

        let bdc = at(PI);
        assert_relative_eq!(
            bdc.volume.get::<cubic_meter>(),
            v_dead + 0.04 * a_piston,
            max_relative = 1e-12
        );
        assert_relative_eq!(bdc.derivative.get::<cubic_meter>(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn derivative_sign_follows_stroke() {
        assert!(at(PI / 2.0).derivative.get::<cubic_meter>() > 0.0);
        assert!(at(3.0 * PI / 2.0).derivative.get::<cubic_meter>() < 0.0);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let h = 1e-6;
        for theta in [0.3, 1.2, 2.5, 4.0, 5.5] {
            let fd = (at(theta + h).volume - at(theta - h).volume).get::<cubic_meter>() / (2.0 * h);
            assert_relative_eq!(
                at(theta).derivative.get::<cubic_meter>(),
                fd,
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn derivative_integrates_to_zero_over_a_revolution() {
        let n = 20_000;
        let dtheta = 2.0 * PI / f64::from(n);
        let integral: f64 = (0..n)
            .map(|i| {
                let a = at(f64::from(i) * dtheta).derivative.get::<cubic_meter>();
                let b = at(f64::from(i + 1) * dtheta).derivative.get::<cubic_meter>();
                0.5 * (a + b) * dtheta
            })
            .sum();

        let swept = 0.04 * PI * 0.015_f64.powi(2);
        assert!(integral.abs() < 1e-9 * swept, "net volume change {integral}");
    }

    #[test]
    fn displacement_is_two_crank_lengths_of_piston() {
        let (geometry, derived) = geometry();
        assert_relative_eq!(
            displacement(&geometry, &derived).get::<cubic_meter>(),
            2.0 * 0.02 * PI * 0.015_f64.powi(2),
            max_relative = 1e-12
        );
    }

    proptest! {
        #[test]
        fn volume_stays_between_dead_and_full(theta in 0.0_f64..(2.0 * PI)) {
            let (geometry, derived) = geometry();
            let v = chamber_volume(&geometry, &derived, Angle::new::<radian>(theta)).volume;
            let v_dead = derived.dead_volume.get::<cubic_meter>();
            let v_max = v_dead + displacement(&geometry, &derived).get::<cubic_meter>();

            prop_assert!(v.get::<cubic_meter>() >= v_dead);
            prop_assert!(v.get::<cubic_meter>() <= v_max * (1.0 + 1e-12));
        }
    }
}
