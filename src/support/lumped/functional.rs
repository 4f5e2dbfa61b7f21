//! Functional helpers that derive lumped-node quantities from a [`Material`].
//!
//! Each function here delegates to the raw-parameter version in
//! [`coefficients`](super::coefficients) or [`response`](super::response),
//! pulling its arguments from an already validated body.

use uom::si::f64::{Length, ThermodynamicTemperature, Time};

use crate::support::units::ThermalDiffusivity;

use super::{
    AssumptionWarning, BiotNumber, DomainError, FourierNumber, Material, ResponseConfig, Theta,
    coefficients, response,
};

/// Characteristic length `V / A` of a body.
///
/// # Errors
///
/// Infallible for a validated [`Material`] in practice; the quotient is not
/// checked against the physical epsilon.
pub fn characteristic_length(material: &Material) -> Result<Length, DomainError> {
    coefficients::characteristic_length(material.volume(), material.area())
}

/// Thermal diffusivity `k / (rho * cp)` of a body.
///
/// # Errors
///
/// Infallible for a validated [`Material`] in practice, but the underlying
/// check is kept so a failure is reported rather than hidden.
pub fn diffusivity(material: &Material) -> Result<ThermalDiffusivity, DomainError> {
    coefficients::diffusivity(
        material.conductivity(),
        material.density(),
        material.specific_heat(),
    )
}

/// Biot number of a body.
///
/// # Errors
///
/// Returns a [`DomainError`] if the characteristic length underflows to zero.
pub fn biot_number(material: &Material) -> Result<BiotNumber, DomainError> {
    coefficients::biot_number(
        material.convective_coefficient(),
        characteristic_length(material)?,
        material.conductivity(),
    )
}

/// Fourier number of a body after `time`.
///
/// # Errors
///
/// Returns a [`DomainError`] if `time` is not finite.
pub fn fourier_number(material: &Material, time: Time) -> Result<FourierNumber, DomainError> {
    coefficients::fourier_number(diffusivity(material)?, characteristic_length(material)?, time)
}

/// Fourier numbers of a body for an ordered series of times.
///
/// # Errors
///
/// Returns the first [`DomainError`] encountered.
pub fn fourier_numbers(
    material: &Material,
    times: &[Time],
) -> Result<Vec<FourierNumber>, DomainError> {
    coefficients::fourier_numbers(diffusivity(material)?, characteristic_length(material)?, times)
}

/// Time constant `rho * V * cp / (hc * A)` of a body.
///
/// # Errors
///
/// Infallible for a validated [`Material`] in practice.
pub fn time_constant(material: &Material) -> Result<Time, DomainError> {
    coefficients::time_constant(
        material.density(),
        material.volume(),
        material.specific_heat(),
        material.convective_coefficient(),
        material.area(),
    )
}

/// Temperature history of a body released at `initial` into `ambient`.
///
/// Runs the full pipeline for every sample: Fourier number, dimensionless
/// response, and decoding back to an absolute temperature.
///
/// # Errors
///
/// Returns a [`DomainError`] if any time is not finite.
///
/// # Example
///
/// ```
/// use thermal_mass_models::support::lumped::{
///     Material, ResponseConfig, functional::transient_temperatures,
/// };
/// use uom::si::{
///     f64::{ThermodynamicTemperature, Time},
///     thermodynamic_temperature::degree_celsius,
///     time::hour,
/// };
///
/// let slab = Material::from_si(10.0, 2.0, 8.0, 1.4, 2300.0, 880.0).unwrap();
/// let times = [Time::new::<hour>(0.0), Time::new::<hour>(6.0)];
///
/// let transient = transient_temperatures(
///     &slab,
///     ThermodynamicTemperature::new::<degree_celsius>(30.0),
///     ThermodynamicTemperature::new::<degree_celsius>(10.0),
///     &times,
///     &ResponseConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(transient.temperatures.len(), 2);
/// assert!(transient.warning.is_some());
/// ```
pub fn transient_temperatures(
    material: &Material,
    initial: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
    times: &[Time],
    config: &ResponseConfig,
) -> Result<Transient, DomainError> {
    let fourier = fourier_numbers(material, times)?;
    let series = response::lumped_node_series(biot_number(material)?, &fourier, config);
    let temperatures = response::decode_temperatures(&series.thetas, initial, ambient);

    Ok(Transient {
        fourier,
        thetas: series.thetas,
        temperatures,
        warning: series.warning,
    })
}

/// Result of [`transient_temperatures`], with one entry per input time.
#[derive(Debug, Clone, PartialEq)]
pub struct Transient {
    pub fourier: Vec<FourierNumber>,
    pub thetas: Vec<Theta>,
    pub temperatures: Vec<ThermodynamicTemperature>,
    /// Set once for the whole history when the Biot number exceeds the limit.
    pub warning: Option<AssumptionWarning>,
}
