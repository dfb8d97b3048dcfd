/// Base trait for property models.
///
/// Ties a model to the fluid type carried by the [`State`](crate::support::thermo::State)
/// values it accepts.
pub trait ThermoModel {
    type Fluid;
}
