//! Canonical fluid identifiers.
//!
//! A fluid type names a substance. Models interpret the name through trait
//! implementations, e.g. [`IdealGasFluid`](crate::support::thermo::model::ideal_gas::IdealGasFluid)
//! supplies the constants used by [`IdealGas`](crate::support::thermo::model::IdealGas).

mod air;
mod carbon_dioxide;

pub use air::Air;
pub use carbon_dioxide::CarbonDioxide;
