//! Thermal mass in a naturally ventilated space.
//!
//! [`VentilatedMass`] evaluates the [`timescale`] diagnostics for a slab of
//! mass inside a room that is forced by a periodic outdoor temperature and
//! flushed by stack ventilation.

use twine_core::Model;
use uom::si::{
    f64::{
        Area, Length, MassDensity, Ratio, SpecificHeatCapacity, TemperatureCoefficient,
        TemperatureInterval, ThermodynamicTemperature, Time, Volume, VolumeRate,
    },
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_coefficient::per_kelvin,
    thermodynamic_temperature::kelvin,
    volume_rate::cubic_meter_per_second,
};

use crate::support::lumped::{DomainError, Material, functional, timescale};

/// Specific gas constant of dry air, J/kg·K.
const AIR_GAS_CONSTANT: f64 = 287.053;

/// Specific heat of dry air at constant pressure, J/kg·K.
const AIR_SPECIFIC_HEAT: f64 = 1005.0;

/// Standard atmospheric pressure, Pa.
const ATMOSPHERIC_PRESSURE: f64 = 101_325.0;

/// The air filling the ventilated space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteriorAir {
    pub volume: Volume,
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
}

impl InteriorAir {
    /// Dry air at atmospheric pressure, treated as an ideal gas.
    ///
    /// Properties are not validated here. A non-physical temperature
    /// surfaces as a [`DomainError`] when the model is called.
    #[must_use]
    pub fn dry_air(volume: Volume, temperature: ThermodynamicTemperature) -> Self {
        let density = ATMOSPHERIC_PRESSURE / (AIR_GAS_CONSTANT * temperature.get::<kelvin>());
        Self {
            volume,
            density: MassDensity::new::<kilogram_per_cubic_meter>(density),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
                AIR_SPECIFIC_HEAT,
            ),
        }
    }
}

/// A ventilation opening driven by the stack effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackVent {
    /// Effective open area.
    pub area: Area,

    /// Height of the neutral pressure plane above the opening.
    pub neutral_height: Length,

    /// Volumetric expansion coefficient of the air.
    pub expansion_coefficient: TemperatureCoefficient,
}

impl StackVent {
    /// A vent in ideal-gas air, whose expansion coefficient is `1 / T`.
    #[must_use]
    pub fn ideal_gas(
        area: Area,
        neutral_height: Length,
        reference_temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            area,
            neutral_height,
            expansion_coefficient: TemperatureCoefficient::new::<per_kelvin>(
                1.0 / reference_temperature.get::<kelvin>(),
            ),
        }
    }
}

/// Thermal mass inside a space with periodic forcing and stack ventilation.
///
/// # Example
///
/// ```
/// use thermal_mass_models::{
///     models::thermal::{InteriorAir, StackVent, VentilatedMass, VentilationState},
///     support::lumped::Material,
/// };
/// use twine_core::Model;
/// use uom::si::{
///     area::square_meter,
///     f64::{Area, Length, TemperatureInterval, ThermodynamicTemperature, Time, Volume},
///     length::meter,
///     ratio::ratio,
///     temperature_interval::kelvin,
///     thermodynamic_temperature::degree_celsius,
///     time::hour,
///     volume::cubic_meter,
/// };
///
/// let room_temp = ThermodynamicTemperature::new::<degree_celsius>(20.0);
/// let model = VentilatedMass {
///     mass: Material::from_si(20.0, 2.0, 8.0, 1.4, 2300.0, 880.0).unwrap(),
///     air: InteriorAir::dry_air(Volume::new::<cubic_meter>(50.0), room_temp),
///     vent: StackVent::ideal_gas(
///         Area::new::<square_meter>(0.5),
///         Length::new::<meter>(1.5),
///         room_temp,
///     ),
///     forcing_period: Time::new::<hour>(24.0),
/// };
///
/// let scales = model
///     .call(&VentilationState {
///         elapsed: Time::new::<hour>(6.0),
///         delta_temp: TemperatureInterval::new::<kelvin>(4.0),
///     })
///     .unwrap();
///
/// assert!((scales.tau.get::<ratio>() - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VentilatedMass {
    pub mass: Material,
    pub air: InteriorAir,
    pub vent: StackVent,
    pub forcing_period: Time,
}

/// Input to [`VentilatedMass`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VentilationState {
    /// Time since the start of the forcing cycle.
    pub elapsed: Time,

    /// Indoor minus outdoor air temperature.
    pub delta_temp: TemperatureInterval,
}

/// Time-scale ratios of a [`VentilatedMass`] at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScales {
    pub tau: Ratio,
    pub chi: Ratio,
    pub epsilon: Ratio,
    pub rn: VolumeRate,
    pub nu: Ratio,
}

impl Model for VentilatedMass {
    type Input = VentilationState;
    type Output = TimeScales;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let tau = timescale::tau(self.forcing_period, input.elapsed)?;
        let fourier = functional::fourier_number(&self.mass, input.elapsed)?;
        let biot = functional::biot_number(&self.mass)?;

        let scales = TimeScales {
            tau,
            chi: timescale::chi(tau, fourier, biot)?,
            epsilon: timescale::epsilon(
                self.air.volume,
                self.air.density,
                self.air.specific_heat,
                self.mass.area(),
                functional::characteristic_length(&self.mass)?,
                self.mass.density(),
                self.mass.specific_heat(),
            )?,
            rn: timescale::rn(
                self.vent.area,
                self.vent.expansion_coefficient,
                self.vent.neutral_height,
                input.delta_temp,
            )?,
            nu: timescale::nu(tau, fourier)?,
        };

        tracing::debug!(
            tau = scales.tau.get::<ratio>(),
            chi = scales.chi.get::<ratio>(),
            epsilon = scales.epsilon.get::<ratio>(),
            rn = scales.rn.get::<cubic_meter_per_second>(),
            nu = scales.nu.get::<ratio>(),
            "ventilated mass time scales"
        );

        Ok(scales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, length::meter, temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius, time::hour, volume::cubic_meter,
    };

    use crate::support::constraint::ConstraintError;

    fn room() -> VentilatedMass {
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);
        VentilatedMass {
            mass: Material::from_si(20.0, 2.0, 8.0, 1.4, 2300.0, 880.0).unwrap(),
            air: InteriorAir::dry_air(Volume::new::<cubic_meter>(50.0), t),
            vent: StackVent::ideal_gas(
                Area::new::<square_meter>(0.5),
                Length::new::<meter>(2.0),
                t,
            ),
            forcing_period: Time::new::<hour>(24.0),
        }
    }

    fn state(hours: f64, delta_k: f64) -> VentilationState {
        VentilationState {
            elapsed: Time::new::<hour>(hours),
            delta_temp: TemperatureInterval::new::<delta_kelvin>(delta_k),
        }
    }

    #[test]
    fn dry_air_properties() {
        let air = InteriorAir::dry_air(
            Volume::new::<cubic_meter>(1.0),
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
        );

        assert_relative_eq!(
            air.density.get::<kilogram_per_cubic_meter>(),
            1.204,
            epsilon = 1e-3
        );
        assert_relative_eq!(air.specific_heat.get::<joule_per_kilogram_kelvin>(), 1005.0);
    }

    #[test]
    fn hand_computed_scales() -> Result<(), DomainError> {
        let scales = room().call(&state(6.0, 3.0))?;

        let lc = 0.1;
        let alpha = 1.4 / (2300.0 * 880.0);
        let fo = alpha * 6.0 * 3600.0 / (lc * lc);
        let bi = 8.0 * lc / 1.4;
        let rho_air = 101_325.0 / (287.053 * 300.0);

        assert_relative_eq!(scales.tau.get::<ratio>(), 0.25, max_relative = 1e-12);
        assert_relative_eq!(scales.chi.get::<ratio>(), 0.25 / (fo * bi), max_relative = 1e-9);
        assert_relative_eq!(
            scales.epsilon.get::<ratio>(),
            50.0 * rho_air * 1005.0 / (20.0 * lc * 2300.0 * 880.0),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            scales.rn.get::<cubic_meter_per_second>(),
            0.5 * (9.81 * 2.0 * 3.0 / 300.0_f64).sqrt(),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            scales.nu.get::<ratio>(),
            (0.25 / (2.0 * fo)).sqrt(),
            max_relative = 1e-9
        );
        Ok(())
    }

    #[test]
    fn start_of_cycle_has_no_fourier_scale() {
        let err = room().call(&state(0.0, 3.0)).unwrap_err();
        assert_eq!(err.argument, "fourier number");
    }

    #[test]
    fn reversed_stack_is_rejected() {
        let err = room().call(&state(6.0, -3.0)).unwrap_err();
        assert_eq!(err, DomainError::new("stack radicand", ConstraintError::Negative));
    }
}
