//! Supporting utilities used by models.
//!
//! - [`constraint`]: validated numeric wrappers for model inputs.
//! - [`thermo`]: property-backend capability traits and a reference gas model.
//! - [`units`]: small extensions to [`uom`].

pub mod constraint;
pub mod thermo;
pub mod units;
