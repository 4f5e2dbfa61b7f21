//! Lumped-capacitance toolkit.
//!
//! A lumped node is a body small or conductive enough that its interior stays
//! at a single temperature. Its response to a step change in surroundings is
//! then governed by two dimensionless groups, the Biot and Fourier numbers,
//! and decays as `theta = exp(-Bi * Fo)`.
//!
//! The toolkit is split into:
//!
//! - [`Material`]: a validated description of the body.
//! - Coefficient functions ([`characteristic_length`], [`diffusivity`],
//!   [`biot_number`], [`fourier_number`], [`time_constant`]) that work from
//!   raw physical parameters.
//! - The response solver ([`lumped_node_response`], [`decode_temperature`],
//!   [`time_to_fraction`], and friends).
//! - [`functional`]: the same calculations driven by a [`Material`].
//! - [`timescale`]: diagnostics for a ventilated space forced by a periodic
//!   environment.

mod coefficients;
mod dimensionless;
mod material;
mod response;

pub mod functional;
pub mod timescale;

pub use coefficients::{
    DomainError, biot_number, characteristic_length, diffusivity, fourier_number, fourier_numbers,
    time_constant,
};
pub use dimensionless::{BiotNumber, FourierNumber, Theta};
pub use material::{Material, MaterialField, ValidationError};
pub use response::{
    AssumptionWarning, LUMPED_BIOT_LIMIT, Response, ResponseConfig, ResponseError,
    SeriesResponse, check_assumption, decode_temperature, decode_temperatures,
    encode_temperature, lumped_node_response, lumped_node_series, theta_at, time_to_fraction,
};
