//! Isentropic nozzle flow between two thermodynamic states.
//!
//! The upstream gas expands isentropically to the downstream pressure, or to
//! the critical pressure if the flow chokes:
//!
//! ```text
//! k    = cp/cv                                   (upstream)
//! pr*  = (2/(k+1))^(k/(k−1))
//! pr   = max(p_down/p_up, pr*)
//! ṁ    = A·ρ_up·pr^(1/k)·sqrt(2·cp·T_up·(1 − pr^((k−1)/k)))
//! ```

use uom::{
    ConstZero,
    si::{
        area::square_meter,
        f64::{Area, MassRate},
        mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second,
        pressure::pascal,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::thermo::{
    State,
    capability::{HasCp, HasCv, HasPressure, ThermoModel},
};

use super::RecipError;

/// Smallest flow area treated as open.
///
/// Closed valves and vanishing leakage gaps report areas at or below this
/// value, and the nozzle returns zero flow for them.
pub const MIN_FLOW_AREA: f64 = 1e-15;

/// Property capabilities required by the nozzle closure.
pub trait NozzleThermo<Fluid>: ThermoModel<Fluid = Fluid> + HasPressure + HasCp + HasCv {}

impl<Fluid, T> NozzleThermo<Fluid> for T where
    T: ThermoModel<Fluid = Fluid> + HasPressure + HasCp + HasCv
{
}

/// Returns `true` if `area` is large enough to carry flow.
#[must_use]
pub fn is_open(area: Area) -> bool {
    area.get::<square_meter>() > MIN_FLOW_AREA
}

/// Mass flow from `up` to `down` through an isentropic nozzle of area `area`.
///
/// Returns zero when the area is closed (see [`MIN_FLOW_AREA`]) or when the
/// downstream pressure is not below the upstream pressure.
///
/// # Errors
///
/// Returns [`RecipError::Property`] if the backend fails at either state and
/// [`RecipError::HeatCapacityRatio`] if `cp/cv ≤ 1`.
pub fn isentropic_nozzle<Fluid>(
    area: Area,
    up: &State<Fluid>,
    down: &State<Fluid>,
    thermo: &impl NozzleThermo<Fluid>,
) -> Result<MassRate, RecipError> {
    if !is_open(area) {
        return Ok(MassRate::ZERO);
    }

    let p_up = thermo
        .pressure(up)
        .map_err(|e| RecipError::property("upstream pressure", up, e))?
        .get::<pascal>();
    let p_down = thermo
        .pressure(down)
        .map_err(|e| RecipError::property("downstream pressure", down, e))?
        .get::<pascal>();

    if p_down >= p_up {
        return Ok(MassRate::ZERO);
    }

    let cp = thermo
        .cp(up)
        .map_err(|e| RecipError::property("upstream cp", up, e))?
        .get::<joule_per_kilogram_kelvin>();
    let cv = thermo
        .cv(up)
        .map_err(|e| RecipError::property("upstream cv", up, e))?
        .get::<joule_per_kilogram_kelvin>();

    let k = cp / cv;
    if k.is_nan() || k <= 1.0 {
        return Err(RecipError::HeatCapacityRatio { ratio: k });
    }

    let pr_critical = (2.0 / (k + 1.0)).powf(k / (k - 1.0));
    let pr = (p_down / p_up).max(pr_critical);

    let rho_up = up.density.get::<kilogram_per_cubic_meter>();
    let t_up = up.temperature.get::<kelvin>();

    let rho_throat = rho_up * pr.powf(1.0 / k);
    let velocity = (2.0 * cp * t_up * (1.0 - pr.powf((k - 1.0) / k))).sqrt();

    Ok(MassRate::new::<kilogram_per_second>(
        area.get::<square_meter>() * rho_throat * velocity,
    ))
}
