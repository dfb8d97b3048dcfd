use thiserror::Error;
use uom::si::f64::{
    Length, MassDensity, MassRate, Power, Pressure, ThermodynamicTemperature, Time,
};

use crate::support::thermo::{PropertyError, State};

use super::{GeometryError, OperatingError};

/// Errors raised by the reciprocating-machine closures.
///
/// Degenerate flow areas are not errors: the flow closures return zero mass
/// flow for them. Everything here is either a rejected configuration or a
/// failure the outer cycle solver has to handle.
#[derive(Debug, Error)]
pub enum RecipError {
    /// The machine geometry was rejected.
    #[error("invalid geometry")]
    Geometry(#[from] GeometryError),

    /// The operating conditions were rejected.
    #[error("invalid operating conditions")]
    Operating(#[from] OperatingError),

    /// The property backend failed at a state.
    ///
    /// The offending state's temperature and density are attached so the
    /// cycle solver can report or retry the step.
    #[error("property evaluation failed ({context}) at T={temperature:?}, rho={density:?}")]
    Property {
        context: &'static str,
        temperature: ThermodynamicTemperature,
        density: MassDensity,
        #[source]
        source: PropertyError,
    },

    /// The property backend could not build a state.
    #[error("state construction failed: {context}")]
    StateConstruction {
        context: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The heat capacity ratio `cp/cv` is not greater than one.
    #[error("non-physical heat capacity ratio: k={ratio}")]
    HeatCapacityRatio { ratio: f64 },

    /// The lump buffer holds no temperatures.
    #[error("lump buffer is empty")]
    NoLumps,

    /// Cycle history arrays disagree in length.
    #[error("cycle history length mismatch: {time} time samples, {heat} heat samples")]
    HistoryLength { time: usize, heat: usize },

    /// Cycle history has fewer than two samples.
    #[error("cycle history needs at least two samples, got {samples}")]
    HistoryTooShort { samples: usize },

    /// The truncation index points past the end of the history.
    #[error("cycle history index {index} out of range for {samples} samples")]
    HistoryIndex { index: usize, samples: usize },

    /// The cycle history spans no time.
    #[error("cycle history duration must be positive, got {duration:?}")]
    HistoryDuration { duration: Time },

    /// Tube mass flow must run from the fixed end toward the free end.
    #[error("tube mass flow must not be negative: {mass_rate:?}")]
    NegativeTubeFlow { mass_rate: MassRate },

    /// Tube dimensions must be positive.
    #[error("tube dimension must be positive: {name}={value:?}")]
    TubeDimension { name: &'static str, value: Length },

    /// Friction in the tube consumes the whole inlet pressure.
    #[error("tube pressure drop {drop:?} reaches inlet pressure {inlet:?}")]
    TubePressureDrop { inlet: Pressure, drop: Pressure },

    /// The overall isentropic efficiency is undefined without electrical power.
    #[error("overall isentropic efficiency undefined for electrical power {electrical:?}")]
    UndefinedEfficiency { electrical: Power },
}

impl RecipError {
    /// Wraps a property failure with the state it occurred at.
    pub(crate) fn property<Fluid>(
        context: &'static str,
        state: &State<Fluid>,
        source: PropertyError,
    ) -> Self {
        Self::Property {
            context,
            temperature: state.temperature,
            density: state.density,
            source,
        }
    }

    /// Wraps a state construction failure.
    pub(crate) fn state_failed(
        context: &'static str,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::StateConstruction {
            context,
            source: Box::new(err),
        }
    }
}
