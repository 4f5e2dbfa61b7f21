//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently just
//! `thermal`). This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! Each [`twine_core::Model`] implementation is a thin adapter. The physics
//! lives in [`support`](crate::support), so the same calculations are
//! available without going through a model.

pub mod thermal;
