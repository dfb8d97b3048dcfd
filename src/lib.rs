//! # Recip Models
//!
//! Machine closures for reciprocating compressors, written for
//! [Twine](https://github.com/isentropic-dev/twine)-style cycle solvers.
//!
//! A quasi-steady cycle integrator owns the control volumes, the time
//! stepping and the outer convergence loop. This crate supplies what is
//! specific to the machine: chamber volume, valve and leakage flows, wall heat
//! transfer, friction, the shell energy balance and the post-cycle efficiency
//! bookkeeping.
//!
//! ## Crate layout
//!
//! - [`models`]: Machine models and their [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once more than one model needs it.
//!
//! ## Logging
//!
//! Closures emit [`tracing`] events (`debug` for pre-solve, energy balance,
//! post-solve and lump-solve results, `trace` for closed flow paths). The
//! crate never installs a subscriber.

pub mod models;
pub mod support;
