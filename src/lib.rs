//! # Thermal Mass Models
//!
//! Lumped-capacitance thermal models and time-scale diagnostics for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! A lumped node treats a body as a single temperature that relaxes toward its
//! surroundings as `exp(-Bi * Fo)`. This crate derives the dimensionless
//! groups from physical properties, evaluates the response, maps it back to
//! absolute temperatures, and computes the time-scale ratios used to judge
//! how thermal mass interacts with a ventilated, periodically forced space.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (a warning when the lumped-capacitance
//! assumption is violated, debug events from the models) and never installs
//! a subscriber.

pub mod models;
pub mod support;
