//! Thermodynamic property models.

pub mod ideal_gas;
mod ideal_gas_eos;

pub use ideal_gas::IdealGas;
