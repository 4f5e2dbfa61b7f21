//! Lumped thermal node model.
//!
//! [`LumpedNode`] is a thin [`Model`] adapter over the
//! [`lumped`](crate::support::lumped) toolkit. Given an elapsed time it
//! returns the Fourier number, dimensionless temperature, and absolute
//! temperature of a body released at a fixed initial temperature into
//! constant surroundings.

use thiserror::Error;
use twine_core::Model;
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature, Time},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
    time::second,
};

use crate::support::{
    constraint::{ConstraintError, UnitIntervalUpperOpen},
    lumped::{
        AssumptionWarning, DomainError, FourierNumber, Material, ResponseConfig, Theta,
        decode_temperature,
        functional::{self, Transient},
        lumped_node_response,
    },
};

/// A body cooling or heating toward constant surroundings.
///
/// # Example
///
/// ```
/// use thermal_mass_models::{models::thermal::LumpedNode, support::lumped::Material};
/// use twine_core::Model;
/// use uom::si::{
///     f64::{ThermodynamicTemperature, Time},
///     thermodynamic_temperature::degree_celsius,
///     time::second,
/// };
///
/// let junction = Material::from_si(3.14e-6, 5.24e-10, 210.0, 35.0, 8500.0, 320.0).unwrap();
/// let node = LumpedNode::new(
///     junction,
///     ThermodynamicTemperature::new::<degree_celsius>(100.0),
///     ThermodynamicTemperature::new::<degree_celsius>(20.0),
/// );
///
/// let output = node.call(&Time::new::<second>(0.0)).unwrap();
/// assert!((output.temperature.get::<degree_celsius>() - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumpedNode {
    material: Material,
    initial: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
    config: ResponseConfig,
}

impl LumpedNode {
    /// Creates a node with the default [`ResponseConfig`].
    #[must_use]
    pub fn new(
        material: Material,
        initial: ThermodynamicTemperature,
        ambient: ThermodynamicTemperature,
    ) -> Self {
        Self {
            material,
            initial,
            ambient,
            config: ResponseConfig::default(),
        }
    }

    /// Replaces the response configuration.
    #[must_use]
    pub fn with_config(self, config: ResponseConfig) -> Self {
        Self { config, ..self }
    }

    /// The body being modeled.
    #[must_use]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Evaluates the node over an ordered series of times.
    ///
    /// # Errors
    ///
    /// Returns [`LumpedNodeError::Domain`] if any time is not finite.
    pub fn series(&self, times: &[Time]) -> Result<Transient, LumpedNodeError> {
        Ok(functional::transient_temperatures(
            &self.material,
            self.initial,
            self.ambient,
            times,
            &self.config,
        )?)
    }

    /// Time for the node to cover `fraction` of its initial temperature
    /// difference.
    ///
    /// # Errors
    ///
    /// Returns [`LumpedNodeError::Fraction`] unless `0 <= fraction < 1`.
    pub fn time_to_fraction(&self, fraction: f64) -> Result<Time, LumpedNodeError> {
        let fraction = UnitIntervalUpperOpen::new(Ratio::new::<ratio>(fraction))?;
        let beta = functional::time_constant(&self.material)?;

        Ok(crate::support::lumped::time_to_fraction(fraction, beta)?)
    }
}

impl Model for LumpedNode {
    type Input = Time;
    type Output = LumpedNodeOutput;
    type Error = LumpedNodeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let biot = functional::biot_number(&self.material)?;
        let fourier = functional::fourier_number(&self.material, *input)?;

        tracing::debug!(
            time_s = input.get::<second>(),
            biot = biot.get::<ratio>(),
            fourier = fourier.get::<ratio>(),
            "evaluating lumped node"
        );

        let response = lumped_node_response(biot, fourier, &self.config);
        let temperature = decode_temperature(response.theta, self.initial, self.ambient);

        tracing::trace!(
            theta = response.theta.get::<ratio>(),
            temperature_k = temperature.get::<kelvin>(),
            "lumped node response"
        );

        Ok(LumpedNodeOutput {
            fourier,
            theta: response.theta,
            temperature,
            warning: response.warning,
        })
    }
}

/// State of a [`LumpedNode`] at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumpedNodeOutput {
    pub fourier: FourierNumber,
    pub theta: Theta,
    pub temperature: ThermodynamicTemperature,

    /// Set when the body is too thick or too poorly conducting to be lumped.
    pub warning: Option<AssumptionWarning>,
}

/// Errors that can occur while evaluating a [`LumpedNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LumpedNodeError {
    /// A time or derived coefficient is outside its physical domain.
    #[error("lumped node evaluation failed")]
    Domain(#[from] DomainError),

    /// The requested approach fraction is not in `[0, 1)`.
    #[error("invalid approach fraction")]
    Fraction(#[from] ConstraintError),
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    fn celsius(v: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(v)
    }

    /// Aluminum plate 2 cm thick, both faces exposed.
    fn plate() -> Material {
        Material::from_si(2.0, 0.02, 25.0, 237.0, 2702.0, 903.0).unwrap()
    }

    #[test]
    fn starts_at_initial_temperature() -> Result<(), LumpedNodeError> {
        let node = LumpedNode::new(plate(), celsius(200.0), celsius(25.0));

        let output = node.call(&Time::new::<second>(0.0))?;

        assert_relative_eq!(output.theta.get::<ratio>(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(output.temperature.get::<degree_celsius>(), 200.0, epsilon = 1e-9);
        assert!(output.warning.is_none());
        Ok(())
    }

    #[test]
    fn one_time_constant_is_one_e_fold() -> Result<(), LumpedNodeError> {
        let node = LumpedNode::new(plate(), celsius(200.0), celsius(25.0));
        let beta = functional::time_constant(node.material())?;

        let output = node.call(&beta)?;

        assert_relative_eq!(
            output.theta.get::<ratio>(),
            (-1.0_f64).exp(),
            max_relative = 1e-9
        );
        let expected = 25.0 + 175.0 * (-1.0_f64).exp();
        assert_relative_eq!(
            output.temperature.get::<degree_celsius>(),
            expected,
            epsilon = 1e-6
        );
        Ok(())
    }

    #[test]
    fn series_agrees_with_pointwise_calls() -> Result<(), LumpedNodeError> {
        let node = LumpedNode::new(plate(), celsius(200.0), celsius(25.0));
        let times: Vec<Time> = [0.0, 60.0, 600.0, 3600.0]
            .into_iter()
            .map(Time::new::<second>)
            .collect();

        let transient = node.series(&times)?;

        for (i, t) in times.iter().enumerate() {
            let output = node.call(t)?;
            assert_eq!(transient.thetas[i], output.theta);
            assert_eq!(transient.temperatures[i], output.temperature);
        }
        Ok(())
    }

    #[test]
    fn time_to_fraction_round_trips() -> Result<(), LumpedNodeError> {
        let node = LumpedNode::new(plate(), celsius(200.0), celsius(25.0));

        let t = node.time_to_fraction(0.75)?;
        let output = node.call(&t)?;

        assert_relative_eq!(output.theta.get::<ratio>(), 0.25, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn complete_approach_is_rejected() {
        let node = LumpedNode::new(plate(), celsius(200.0), celsius(25.0));

        assert_eq!(
            node.time_to_fraction(1.0),
            Err(LumpedNodeError::Fraction(ConstraintError::AboveMaximum))
        );
    }

    #[test]
    fn stricter_limit_flags_the_plate() -> Result<(), LumpedNodeError> {
        let strict = ResponseConfig {
            biot_limit: Ratio::new::<ratio>(1e-4),
        };
        let node = LumpedNode::new(plate(), celsius(200.0), celsius(25.0)).with_config(strict);

        let output = node.call(&Time::new::<second>(60.0))?;

        assert!(output.warning.is_some());
        Ok(())
    }

    #[test]
    fn non_finite_time_is_a_domain_error() {
        let node = LumpedNode::new(plate(), celsius(200.0), celsius(25.0));

        let err = node.call(&Time::new::<second>(f64::NAN)).unwrap_err();

        assert!(matches!(err, LumpedNodeError::Domain(e) if e.argument == "time"));
    }
}
