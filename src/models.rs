//! Public model APIs.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Machine closures for
//! positive-displacement compressors and expanders live in [`compression`].
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the computation and domain logic live. The model module re-exports
//! the types a cycle solver needs and provides thin [`twine_core::Model`]
//! adapters over the core API.

pub mod compression;
