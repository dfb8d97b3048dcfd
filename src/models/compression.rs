//! Positive-displacement compression machines.
//!
//! These models supply machine-specific closures (chamber volume, valve and
//! leakage flows, wall heat transfer, shell energy balance) to an external
//! quasi-steady cycle integrator.

pub mod recip;
