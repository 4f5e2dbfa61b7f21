//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, area, density).
//! This module provides extensions that are useful for lumped thermal modeling
//! but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval.
//! The dimensionless temperature of a lumped node is a ratio of two such intervals:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval::kelvin, thermodynamic_temperature::degree_celsius};
//! use thermal_mass_models::support::units::TemperatureDifference;
//!
//! let t = ThermodynamicTemperature::new::<degree_celsius>(40.0);
//! let t0 = ThermodynamicTemperature::new::<degree_celsius>(100.0);
//! let t_ext = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//!
//! let theta = t.minus(t_ext).get::<kelvin>() / t0.minus(t_ext).get::<kelvin>();
//! assert!((theta - 0.25).abs() < 1e-12);
//! ```
//!
//! ## Thermal diffusivity
//!
//! [`ThermalDiffusivity`] names the m²/s quantity produced by `k / (rho * cp)`.

mod quantities;
mod temperature_difference;

pub use quantities::ThermalDiffusivity;
pub use temperature_difference::TemperatureDifference;
