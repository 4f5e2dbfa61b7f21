//! Transient response of a lumped node.
//!
//! The response is split into a forward step, `theta = exp(-Bi * Fo)`, and a
//! decode step that maps `theta` back to an absolute temperature. Both accept
//! a single sample or an ordered series.

use std::fmt;

use thiserror::Error;
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature, Time},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    time::second,
};

use crate::support::{
    constraint::{Constrained, UnitIntervalUpperOpen},
    units::TemperatureDifference,
};

use super::{
    BiotNumber, FourierNumber, Theta,
    coefficients::{DomainError, finite, positive},
};

/// Biot number above which a body can no longer be treated as isothermal.
pub const LUMPED_BIOT_LIMIT: f64 = 0.1;

/// Configuration for lumped response evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseConfig {
    /// Largest Biot number accepted without an [`AssumptionWarning`].
    pub biot_limit: Ratio,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            biot_limit: Ratio::new::<ratio>(LUMPED_BIOT_LIMIT),
        }
    }
}

/// The lumped-capacitance assumption does not hold for this body.
///
/// The response is still computed, but a temperature gradient inside the body
/// is no longer negligible and the result should be read as an estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssumptionWarning {
    /// The Biot number that triggered the warning.
    pub biot: BiotNumber,

    /// The limit it exceeded.
    pub limit: Ratio,
}

impl fmt::Display for AssumptionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Biot number {} exceeds the lumped-capacitance limit {}",
            self.biot.get::<ratio>(),
            self.limit.get::<ratio>(),
        )
    }
}

/// A single lumped response sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Response {
    /// Dimensionless temperature at the requested Fourier number.
    pub theta: Theta,

    /// Set when the Biot number exceeds the configured limit.
    pub warning: Option<AssumptionWarning>,
}

/// A lumped response evaluated over an ordered series of Fourier numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesResponse {
    /// Dimensionless temperatures, one per input sample, in input order.
    pub thetas: Vec<Theta>,

    /// Set when the Biot number exceeds the configured limit.
    ///
    /// The Biot number is shared by every sample, so this is reported once.
    pub warning: Option<AssumptionWarning>,
}

/// Errors from mapping an absolute temperature to `theta`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ResponseError {
    /// Initial and ambient temperatures coincide, so `theta` is undefined.
    #[error("initial and ambient temperatures are equal, theta is undefined")]
    ZeroTemperatureDifference,
}

/// Checks the lumped-capacitance assumption for `biot`.
///
/// Emits a `tracing` warning carrying the Biot number when it is exceeded.
pub fn check_assumption(biot: BiotNumber, config: &ResponseConfig) -> Option<AssumptionWarning> {
    if biot.is_lumped(config.biot_limit) {
        return None;
    }

    let warning = AssumptionWarning {
        biot,
        limit: config.biot_limit,
    };
    tracing::warn!(
        biot = biot.get::<ratio>(),
        limit = config.biot_limit.get::<ratio>(),
        "lumped-capacitance assumption violated: {warning}"
    );
    Some(warning)
}

/// Dimensionless lumped-node response, `theta = exp(-Bi * Fo)`.
///
/// `theta(0) = 1` exactly and `theta` decays monotonically toward zero as the
/// Fourier number grows. Exceeding the Biot limit never fails the call; it is
/// logged and recorded in [`Response::warning`].
///
/// # Example
///
/// ```
/// use thermal_mass_models::support::lumped::{
///     BiotNumber, FourierNumber, ResponseConfig, lumped_node_response,
/// };
/// use uom::si::ratio::ratio;
///
/// let bi = BiotNumber::new(0.05).unwrap();
/// let config = ResponseConfig::default();
///
/// let start = lumped_node_response(bi, FourierNumber::new(0.0).unwrap(), &config);
/// assert_eq!(start.theta.get::<ratio>(), 1.0);
/// assert!(start.warning.is_none());
///
/// let later = lumped_node_response(bi, FourierNumber::new(20.0).unwrap(), &config);
/// assert!((later.theta.get::<ratio>() - (-1.0_f64).exp()).abs() < 1e-12);
/// ```
#[must_use]
pub fn lumped_node_response(
    biot: BiotNumber,
    fourier: FourierNumber,
    config: &ResponseConfig,
) -> Response {
    Response {
        theta: decay(biot, fourier),
        warning: check_assumption(biot, config),
    }
}

/// Lumped-node response over an ordered series of Fourier numbers.
///
/// The assumption check runs once for the whole series.
#[must_use]
pub fn lumped_node_series(
    biot: BiotNumber,
    fouriers: &[FourierNumber],
    config: &ResponseConfig,
) -> SeriesResponse {
    SeriesResponse {
        thetas: fouriers.iter().map(|&fo| decay(biot, fo)).collect(),
        warning: check_assumption(biot, config),
    }
}

fn decay(biot: BiotNumber, fourier: FourierNumber) -> Theta {
    Theta::new((-biot.get::<ratio>() * fourier.get::<ratio>()).exp())
}

/// Absolute temperature from `theta`: `T = theta * (T0 - T_ext) + T_ext`.
///
/// Temperatures may be given in any unit; the offset cancels.
#[must_use]
pub fn decode_temperature(
    theta: Theta,
    initial: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    ambient + initial.minus(ambient) * theta.get::<ratio>()
}

/// Absolute temperatures for an ordered series of `theta` values.
#[must_use]
pub fn decode_temperatures(
    thetas: &[Theta],
    initial: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
) -> Vec<ThermodynamicTemperature> {
    thetas
        .iter()
        .map(|&theta| decode_temperature(theta, initial, ambient))
        .collect()
}

/// Dimensionless temperature from an absolute one: `(T - T_ext) / (T0 - T_ext)`.
///
/// This is the exact inverse of [`decode_temperature`].
///
/// # Errors
///
/// Returns [`ResponseError::ZeroTemperatureDifference`] when `initial` equals
/// `ambient`.
pub fn encode_temperature(
    temperature: ThermodynamicTemperature,
    initial: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
) -> Result<Theta, ResponseError> {
    let span = initial.minus(ambient).get::<delta_kelvin>();
    if span == 0.0 {
        return Err(ResponseError::ZeroTemperatureDifference);
    }
    Ok(Theta::new(temperature.minus(ambient).get::<delta_kelvin>() / span))
}

/// Time for a lumped node to cover `fraction` of its initial temperature
/// difference: `t = -ln(1 - fraction) * beta`.
///
/// This inverts the response in physical time using `Bi * Fo = t / beta`.
///
/// # Errors
///
/// Returns a [`DomainError`] if the time constant is not strictly positive.
///
/// # Example
///
/// ```
/// use thermal_mass_models::support::{constraint::UnitIntervalUpperOpen, lumped::time_to_fraction};
/// use uom::si::{f64::{Ratio, Time}, ratio::ratio, time::second};
///
/// let beta = Time::new::<second>(2.0);
/// let half = UnitIntervalUpperOpen::new(Ratio::new::<ratio>(0.5)).unwrap();
///
/// let t = time_to_fraction(half, beta).unwrap();
/// assert!((t.get::<second>() - 2.0 * 2.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn time_to_fraction(
    fraction: Constrained<Ratio, UnitIntervalUpperOpen>,
    time_constant: Time,
) -> Result<Time, DomainError> {
    let beta = positive("time constant", time_constant)?.get::<second>();
    let f = fraction.into_inner().get::<ratio>();

    Ok(Time::new::<second>(-(-f).ln_1p() * beta))
}

/// Dimensionless temperature evaluated in physical time, `exp(-t / beta)`.
///
/// # Errors
///
/// Returns a [`DomainError`] if the time is not finite or the time constant
/// is not strictly positive.
pub fn theta_at(time: Time, time_constant: Time) -> Result<Theta, DomainError> {
    let t = finite("time", time)?.get::<second>();
    let beta = positive("time constant", time_constant)?.get::<second>();

    Ok(Theta::new((-t / beta).exp()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use tracing_subscriber::fmt::MakeWriter;
    use uom::si::thermodynamic_temperature::{degree_celsius, kelvin};

    fn celsius(v: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(v)
    }

    fn fraction(v: f64) -> Constrained<Ratio, UnitIntervalUpperOpen> {
        UnitIntervalUpperOpen::new(Ratio::new::<ratio>(v)).unwrap()
    }

    #[test]
    fn identity_at_origin() {
        let bi = BiotNumber::new(0.02).unwrap();
        let fo = FourierNumber::new(0.0).unwrap();

        let response = lumped_node_response(bi, fo, &ResponseConfig::default());

        assert_relative_eq!(response.theta.get::<ratio>(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn large_biot_warns_but_still_responds() {
        let bi = BiotNumber::new(0.8).unwrap();
        let fo = FourierNumber::new(1.5).unwrap();

        let response = lumped_node_response(bi, fo, &ResponseConfig::default());

        assert!(response.theta.get::<ratio>().is_finite());
        assert_relative_eq!(response.theta.get::<ratio>(), (-1.2_f64).exp());

        let warning = response.warning.expect("Bi = 0.8 should warn");
        assert_relative_eq!(warning.biot.get::<ratio>(), 0.8);
        assert!(warning.to_string().contains("0.8"));
    }

    /// Shared buffer collecting formatted `tracing` output.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn logged(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn violation_is_logged_with_biot_field() {
        let bi = BiotNumber::new(0.8).unwrap();

        let log = logged(|| {
            check_assumption(bi, &ResponseConfig::default());
        });

        assert!(log.contains("WARN"), "log: {log}");
        assert!(log.contains("biot=0.8"), "log: {log}");
        assert!(log.contains("limit=0.1"), "log: {log}");
    }

    #[test]
    fn lumped_body_logs_nothing() {
        let bi = BiotNumber::new(0.01).unwrap();

        let log = logged(|| {
            check_assumption(bi, &ResponseConfig::default());
        });

        assert!(log.is_empty(), "log: {log}");
    }

    #[test]
    fn limit_is_configurable() {
        let bi = BiotNumber::new(0.15).unwrap();
        let fo = FourierNumber::new(1.0).unwrap();
        let relaxed = ResponseConfig {
            biot_limit: Ratio::new::<ratio>(0.2),
        };

        assert!(lumped_node_response(bi, fo, &ResponseConfig::default()).warning.is_some());
        assert!(lumped_node_response(bi, fo, &relaxed).warning.is_none());
    }

    #[test]
    fn series_matches_scalar_evaluation() {
        let bi = BiotNumber::new(0.3).unwrap();
        let fos: Vec<FourierNumber> = [0.0, 0.5, 1.0, 4.0]
            .into_iter()
            .map(|v| FourierNumber::new(v).unwrap())
            .collect();
        let config = ResponseConfig::default();

        let series = lumped_node_series(bi, &fos, &config);

        assert_eq!(series.thetas.len(), fos.len());
        assert!(series.warning.is_some());
        for (theta, &fo) in series.thetas.iter().zip(&fos) {
            assert_eq!(*theta, lumped_node_response(bi, fo, &config).theta);
        }
    }

    #[test]
    fn negative_fourier_extrapolates_backwards() {
        let bi = BiotNumber::new(0.05).unwrap();
        let fo = FourierNumber::new(-2.0).unwrap();

        let theta = lumped_node_response(bi, fo, &ResponseConfig::default()).theta;

        assert!(theta.get::<ratio>() > 1.0);
    }

    #[test]
    fn decode_endpoints() {
        let (t0, t_ext) = (celsius(100.0), celsius(20.0));

        let start = decode_temperature(Theta::new(1.0), t0, t_ext);
        let end = decode_temperature(Theta::new(0.0), t0, t_ext);

        assert_relative_eq!(start.get::<degree_celsius>(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(end.get::<degree_celsius>(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn decode_handles_heating_and_equal_temperatures() {
        let heating = decode_temperature(Theta::new(0.25), celsius(0.0), celsius(40.0));
        assert_relative_eq!(heating.get::<degree_celsius>(), 30.0, epsilon = 1e-9);

        let steady = decode_temperature(Theta::new(0.7), celsius(15.0), celsius(15.0));
        assert_relative_eq!(steady.get::<degree_celsius>(), 15.0, epsilon = 1e-9);
    }

    #[test]
    fn encode_rejects_zero_difference() {
        assert_eq!(
            encode_temperature(celsius(10.0), celsius(15.0), celsius(15.0)),
            Err(ResponseError::ZeroTemperatureDifference)
        );
    }

    #[test]
    fn time_to_fraction_endpoints() {
        let beta = Time::new::<second>(5.0);

        let none = time_to_fraction(fraction(0.0), beta).unwrap();
        assert_eq!(none.get::<second>(), 0.0);

        let one_e_fold = time_to_fraction(fraction(1.0 - (-1.0_f64).exp()), beta).unwrap();
        assert_relative_eq!(one_e_fold.get::<second>(), 5.0, max_relative = 1e-12);
    }

    #[test]
    fn time_to_fraction_keeps_precision_for_small_fractions() {
        let beta = Time::new::<second>(1.0);

        let t = time_to_fraction(fraction(1e-12), beta).unwrap();

        assert_relative_eq!(t.get::<second>(), 1e-12, max_relative = 1e-9);
    }

    #[test]
    fn time_to_fraction_inverts_theta_at() {
        let beta = Time::new::<second>(12.5);
        let t = time_to_fraction(fraction(0.9), beta).unwrap();

        let theta = theta_at(t, beta).unwrap();

        assert_relative_eq!(theta.get::<ratio>(), 0.1, max_relative = 1e-12);
    }

    #[test]
    fn theta_at_rejects_zero_time_constant() {
        let err = theta_at(Time::new::<second>(1.0), Time::new::<second>(0.0)).unwrap_err();
        assert_eq!(err.argument, "time constant");
    }

    proptest! {
        #[test]
        fn theta_is_bounded_and_non_increasing(
            bi in 1e-6_f64..10.0,
            fo_a in 0.0_f64..50.0,
            step in 0.0_f64..50.0,
        ) {
            let bi = BiotNumber::new(bi).unwrap();
            let config = ResponseConfig::default();
            let a = lumped_node_response(bi, FourierNumber::new(fo_a).unwrap(), &config).theta;
            let b = lumped_node_response(bi, FourierNumber::new(fo_a + step).unwrap(), &config).theta;

            prop_assert!(a.get::<ratio>() > 0.0);
            prop_assert!(a.get::<ratio>() <= 1.0);
            prop_assert!(b.get::<ratio>() <= a.get::<ratio>());
        }

        #[test]
        fn encode_inverts_decode(
            theta in -2.0_f64..2.0,
            t0 in -50.0_f64..500.0,
            offset in prop_oneof![-300.0_f64..-1e-3, 1e-3_f64..300.0],
        ) {
            let initial = ThermodynamicTemperature::new::<kelvin>(t0 + 273.15);
            let ambient = ThermodynamicTemperature::new::<kelvin>(t0 + 273.15 + offset);

            let temperature = decode_temperature(Theta::new(theta), initial, ambient);
            let back = encode_temperature(temperature, initial, ambient).unwrap();

            prop_assert!((back.get::<ratio>() - theta).abs() < 1e-8);
        }
    }
}
