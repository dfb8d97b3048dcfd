//! Thermodynamic property capabilities consumed by the machine closures.
//!
//! The reciprocating-machine model never evaluates an equation of state itself.
//! It asks a property model for what it needs through the capability traits in
//! [`capability`], so any backend that implements them can drive a cycle.
//! [`model::IdealGas`] is a self-contained reference backend.

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;
