//! Time-scale diagnostics for a ventilated space containing thermal mass.
//!
//! These ratios compare the time scales of the processes acting on a mass
//! that is forced by a periodic environment (for example, a diurnal cycle):
//!
//! - `tau`: elapsed time over the forcing period
//! - `chi`: forcing time over convective exchange time
//! - `epsilon`: heat capacity of the interior air over that of the mass
//! - `rn`: stack-driven flushing rate of the space
//! - `nu`: characteristic length over the periodic penetration depth
//!
//! None of them depend on the transient solver; they share only the
//! coefficient functions and their validation.

use uom::si::{
    area::square_meter,
    f64::{
        Area, Length, MassDensity, Ratio, SpecificHeatCapacity, TemperatureCoefficient,
        TemperatureInterval, Time, Volume, VolumeRate,
    },
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_coefficient::per_kelvin,
    temperature_interval::kelvin,
    time::second,
    volume::cubic_meter,
    volume_rate::cubic_meter_per_second,
};

use crate::support::constraint::NonNegative;

use super::{
    BiotNumber, DomainError, FourierNumber,
    coefficients::{finite, positive, significant},
};

/// Gravitational acceleration used by the stack-flow scale, m/s².
pub const GRAVITY: f64 = 9.81;

/// Dimensionless forcing time, `tau = t / P`.
///
/// # Errors
///
/// Returns a [`DomainError`] if the forcing period is not strictly positive
/// or the elapsed time is not finite.
pub fn tau(forcing_period: Time, elapsed: Time) -> Result<Ratio, DomainError> {
    let period = positive("forcing period", forcing_period.get::<second>())?;
    let t = finite("elapsed time", elapsed)?.get::<second>();

    Ok(Ratio::new::<ratio>(t / period))
}

/// Convective time-scale ratio, `chi = tau / (Fo * Bi)`.
///
/// Large values mean the mass exchanges heat with the air faster than the
/// environment changes.
///
/// # Errors
///
/// Returns a [`DomainError`] if `tau` is not finite or `Fo` is not strictly
/// positive.
pub fn chi(tau: Ratio, fourier: FourierNumber, biot: BiotNumber) -> Result<Ratio, DomainError> {
    let tau = finite("tau", tau)?.get::<ratio>();
    let fo = positive("fourier number", fourier.get::<ratio>())?;

    Ok(Ratio::new::<ratio>(tau / (fo * biot.get::<ratio>())))
}

/// Heat capacity ratio of interior air to thermal mass,
/// `epsilon = (V_z * rho_z * cp_z) / (A_m * Lc_m * rho_m * cp_m)`.
///
/// # Errors
///
/// Returns a [`DomainError`] naming the first property that is not
/// significant, or if the characteristic length is not strictly positive.
pub fn epsilon(
    air_volume: Volume,
    air_density: MassDensity,
    air_specific_heat: SpecificHeatCapacity,
    mass_area: Area,
    mass_characteristic_length: Length,
    mass_density: MassDensity,
    mass_specific_heat: SpecificHeatCapacity,
) -> Result<Ratio, DomainError> {
    let air = significant("air volume", air_volume)?.get::<cubic_meter>()
        * significant("air density", air_density)?.get::<kilogram_per_cubic_meter>()
        * significant("air specific heat", air_specific_heat)?.get::<joule_per_kilogram_kelvin>();

    let mass = significant("mass area", mass_area)?.get::<square_meter>()
        * positive("mass characteristic length", mass_characteristic_length)?.get::<meter>()
        * significant("mass density", mass_density)?.get::<kilogram_per_cubic_meter>()
        * significant("mass specific heat", mass_specific_heat)?.get::<joule_per_kilogram_kelvin>();

    Ok(Ratio::new::<ratio>(air / mass))
}

/// Stack-driven flushing scale, `Rn = A_v * sqrt(beta * g * H * dT)`.
///
/// `beta` is the volumetric expansion coefficient of the air and `H` the
/// height of the neutral plane above the vent. The product must be
/// non-negative; with a positive `beta` that means warm air inside a space
/// whose neutral plane sits above the opening.
///
/// # Errors
///
/// Returns a [`DomainError`] if the vent area is not significant, any other
/// input is not finite, or the radicand is negative.
///
/// # Example
///
/// ```
/// use thermal_mass_models::support::lumped::timescale::rn;
/// use uom::si::{
///     area::square_meter,
///     f64::{Area, Length, TemperatureCoefficient, TemperatureInterval},
///     length::meter,
///     temperature_coefficient::per_kelvin,
///     temperature_interval::kelvin,
///     volume_rate::cubic_meter_per_second,
/// };
///
/// let flow = rn(
///     Area::new::<square_meter>(0.5),
///     TemperatureCoefficient::new::<per_kelvin>(1.0 / 300.0),
///     Length::new::<meter>(2.0),
///     TemperatureInterval::new::<kelvin>(3.0),
/// )
/// .unwrap();
///
/// let expected = 0.5 * (9.81 * 2.0 * 3.0 / 300.0_f64).sqrt();
/// assert!((flow.get::<cubic_meter_per_second>() - expected).abs() < 1e-12);
/// ```
pub fn rn(
    vent_area: Area,
    expansion_coefficient: TemperatureCoefficient,
    neutral_height: Length,
    delta_temp: TemperatureInterval,
) -> Result<VolumeRate, DomainError> {
    let area = significant("vent area", vent_area)?.get::<square_meter>();
    let beta = finite("expansion coefficient", expansion_coefficient)?.get::<per_kelvin>();
    let height = finite("neutral height", neutral_height)?.get::<meter>();
    let dt = finite("temperature difference", delta_temp)?.get::<kelvin>();

    let radicand = NonNegative::new(beta * GRAVITY * height * dt)
        .map_err(|source| DomainError::new("stack radicand", source))?
        .into_inner();

    Ok(VolumeRate::new::<cubic_meter_per_second>(area * radicand.sqrt()))
}

/// Penetration time-scale ratio, `nu = sqrt(tau / (2 * Fo))`.
///
/// Values well above one mean the periodic forcing only reaches a thin skin
/// of the mass.
///
/// # Errors
///
/// Returns a [`DomainError`] if `tau` is negative or not finite, or if `Fo`
/// is not strictly positive.
pub fn nu(tau: Ratio, fourier: FourierNumber) -> Result<Ratio, DomainError> {
    let tau = finite("tau", tau)?.get::<ratio>();
    let tau = NonNegative::new(tau)
        .map_err(|source| DomainError::new("tau", source))?
        .into_inner();
    let fo = positive("fourier number", fourier.get::<ratio>())?;

    Ok(Ratio::new::<ratio>((tau / (2.0 * fo)).sqrt()))
}
