//! Dimensionless coefficients of a lumped node from raw physical parameters.
//!
//! These functions do not need a [`Material`](super::Material). Each input is
//! checked independently, so a failure names the argument that caused it.
//!
//! Raw physical properties must be [`Significant`]. Derived inputs (a
//! characteristic length, a diffusivity, a time constant) only need to be
//! finite and strictly positive, since a valid body can produce values below
//! the physical epsilon. Results are never checked against the epsilon.

use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{
        Area, HeatTransfer, Length, MassDensity, SpecificHeatCapacity, ThermalConductivity, Time,
        Volume,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    time::second,
    volume::cubic_meter,
};

use crate::support::{
    constraint::{ConstraintError, Finite, Significant, SiValue, StrictlyPositive},
    units::ThermalDiffusivity,
};

use super::{BiotNumber, FourierNumber};

/// An argument to a coefficient or diagnostic function is outside its
/// physical domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{argument} is outside the physical domain")]
pub struct DomainError {
    /// Name of the rejected argument (or derived result).
    pub argument: &'static str,

    /// Why the value was rejected.
    #[source]
    pub source: ConstraintError,
}

impl DomainError {
    pub(crate) fn new(argument: &'static str, source: ConstraintError) -> Self {
        Self { argument, source }
    }
}

/// Checks that `value` is significant and returns it.
pub(crate) fn significant<T: SiValue>(argument: &'static str, value: T) -> Result<T, DomainError> {
    Significant::new(value)
        .map(|v| v.into_inner())
        .map_err(|source| DomainError::new(argument, source))
}

/// Checks that `value` is finite and returns it.
pub(crate) fn finite<T: SiValue>(argument: &'static str, value: T) -> Result<T, DomainError> {
    Finite::new(value)
        .map(|v| v.into_inner())
        .map_err(|source| DomainError::new(argument, source))
}

/// Checks that a derived `value` is finite and strictly positive and returns it.
pub(crate) fn positive<T>(argument: &'static str, value: T) -> Result<T, DomainError>
where
    T: SiValue + PartialOrd + num_traits::Zero,
{
    let value = finite(argument, value)?;
    StrictlyPositive::new(value)
        .map(|v| v.into_inner())
        .map_err(|source| DomainError::new(argument, source))
}

/// Characteristic length `Lc = V / A`.
///
/// The quotient may fall below the physical epsilon for a thin body.
///
/// # Errors
///
/// Returns a [`DomainError`] if either input is not significant.
pub fn characteristic_length(volume: Volume, area: Area) -> Result<Length, DomainError> {
    let volume = significant("volume", volume)?.get::<cubic_meter>();
    let area = significant("area", area)?.get::<square_meter>();

    Ok(Length::new::<meter>(volume / area))
}

/// Thermal diffusivity `alpha = k / (rho * cp)`.
///
/// # Errors
///
/// Returns a [`DomainError`] if any input is at or below the physical epsilon,
/// i.e. the body is non-conducting or massless.
///
/// # Example
///
/// ```
/// use thermal_mass_models::support::lumped::diffusivity;
/// use uom::si::{
///     f64::{MassDensity, SpecificHeatCapacity, ThermalConductivity},
///     mass_density::kilogram_per_cubic_meter,
///     specific_heat_capacity::joule_per_kilogram_kelvin,
///     thermal_conductivity::watt_per_meter_kelvin,
/// };
///
/// let rho = MassDensity::new::<kilogram_per_cubic_meter>(8500.0);
/// let cp = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(320.0);
///
/// let k = ThermalConductivity::new::<watt_per_meter_kelvin>(35.0);
/// assert!(diffusivity(k, rho, cp).is_ok());
///
/// let k = ThermalConductivity::new::<watt_per_meter_kelvin>(0.0);
/// assert_eq!(diffusivity(k, rho, cp).unwrap_err().argument, "conductivity");
/// ```
pub fn diffusivity(
    conductivity: ThermalConductivity,
    density: MassDensity,
    specific_heat: SpecificHeatCapacity,
) -> Result<ThermalDiffusivity, DomainError> {
    let k = significant("conductivity", conductivity)?;
    let rho = significant("density", density)?;
    let cp = significant("specific heat", specific_heat)?;

    Ok(k / (rho * cp))
}

/// Biot number `Bi = hc * Lc / k`.
///
/// No upper bound is enforced. Use [`BiotNumber::is_lumped`] or the solver's
/// assumption check to judge validity.
///
/// # Errors
///
/// Returns a [`DomainError`] if a property is not significant or the
/// characteristic length is not strictly positive.
pub fn biot_number(
    convective_coefficient: HeatTransfer,
    characteristic_length: Length,
    conductivity: ThermalConductivity,
) -> Result<BiotNumber, DomainError> {
    let hc = significant("convective coefficient", convective_coefficient)?
        .get::<watt_per_square_meter_kelvin>();
    let lc = positive("characteristic length", characteristic_length)?.get::<meter>();
    let k = significant("conductivity", conductivity)?.get::<watt_per_meter_kelvin>();

    BiotNumber::new(hc * lc / k).map_err(|source| DomainError::new("biot number", source))
}

/// Fourier number `Fo = alpha * t / Lc²`.
///
/// `t = 0` yields `Fo = 0` exactly. Negative times are accepted and yield a
/// negative Fourier number.
///
/// # Errors
///
/// Returns a [`DomainError`] if `alpha` or `Lc` is not strictly positive, or
/// if the time is not finite.
pub fn fourier_number(
    diffusivity: ThermalDiffusivity,
    characteristic_length: Length,
    time: Time,
) -> Result<FourierNumber, DomainError> {
    let alpha = positive("diffusivity", diffusivity)?.value;
    let lc = positive("characteristic length", characteristic_length)?.get::<meter>();
    let t = finite("time", time)?.get::<second>();

    FourierNumber::new(alpha * t / (lc * lc))
        .map_err(|source| DomainError::new("fourier number", source))
}

/// Fourier numbers for an ordered series of times.
///
/// The output has the same length and order as `times`.
///
/// # Errors
///
/// Returns the first [`DomainError`] encountered; no partial result is produced.
pub fn fourier_numbers(
    diffusivity: ThermalDiffusivity,
    characteristic_length: Length,
    times: &[Time],
) -> Result<Vec<FourierNumber>, DomainError> {
    times
        .iter()
        .map(|&t| fourier_number(diffusivity, characteristic_length, t))
        .collect()
}

/// Time constant `beta = rho * V * cp / (hc * A)`.
///
/// This is the e-folding time of the lumped response, so that
/// `Bi * Fo(t) = t / beta`.
///
/// # Errors
///
/// Returns a [`DomainError`] if any input is not significant.
pub fn time_constant(
    density: MassDensity,
    volume: Volume,
    specific_heat: SpecificHeatCapacity,
    convective_coefficient: HeatTransfer,
    area: Area,
) -> Result<Time, DomainError> {
    let rho = significant("density", density)?.get::<kilogram_per_cubic_meter>();
    let v = significant("volume", volume)?.get::<cubic_meter>();
    let cp = significant("specific heat", specific_heat)?.get::<joule_per_kilogram_kelvin>();
    let hc = significant("convective coefficient", convective_coefficient)?
        .get::<watt_per_square_meter_kelvin>();
    let a = significant("area", area)?.get::<square_meter>();

    Ok(Time::new::<second>(rho * v * cp / (hc * a)))
}
