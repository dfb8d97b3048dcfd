//! Capability traits used to query and construct thermodynamic states.
//!
//! Closures state their property needs as trait bounds, e.g. the isentropic
//! nozzle needs `HasPressure + HasCp + HasCv` while the chamber heat transfer
//! needs the transport capabilities.

mod base;
mod properties;
mod state_from;

pub use base::ThermoModel;
pub use properties::*;
pub use state_from::StateFrom;
