use std::fmt;

use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, MassDensity, SpecificHeatCapacity, ThermalConductivity, Volume},
    heat_transfer::watt_per_square_meter_kelvin,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    volume::cubic_meter,
};

use crate::support::constraint::{Constrained, ConstraintError, Significant, SiValue};

/// A homogeneous body treated as a single lumped thermal node.
///
/// Every property is checked at construction to be finite and at least
/// [`PHYSICAL_EPSILON`](crate::support::constraint::PHYSICAL_EPSILON) in SI
/// base units. There are no setters: a `Material` that exists is valid, and
/// the only way to change a property is to build a new one.
///
/// All physics lives in free functions
/// (see [`functional`](super::functional)), not on this type.
///
/// # Example
///
/// ```
/// use thermal_mass_models::support::lumped::{Material, MaterialField};
///
/// let concrete = Material::from_si(10.0, 2.0, 8.0, 1.4, 2300.0, 880.0).unwrap();
/// assert_eq!(concrete.area().value, 10.0);
///
/// let err = Material::from_si(0.0, 2.0, 8.0, 1.4, 2300.0, 880.0).unwrap_err();
/// assert_eq!(err.field, MaterialField::Area);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    area: Constrained<Area, Significant>,
    volume: Constrained<Volume, Significant>,
    convective_coefficient: Constrained<HeatTransfer, Significant>,
    conductivity: Constrained<ThermalConductivity, Significant>,
    density: Constrained<MassDensity, Significant>,
    specific_heat: Constrained<SpecificHeatCapacity, Significant>,
}

impl Material {
    /// Validates and captures the properties of a lumped body.
    ///
    /// Fields are checked in argument order and the first failure is reported.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field if any value
    /// is not finite or falls below the physical epsilon.
    pub fn new(
        area: Area,
        volume: Volume,
        convective_coefficient: HeatTransfer,
        conductivity: ThermalConductivity,
        density: MassDensity,
        specific_heat: SpecificHeatCapacity,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            area: validate(MaterialField::Area, area)?,
            volume: validate(MaterialField::Volume, volume)?,
            convective_coefficient: validate(
                MaterialField::ConvectiveCoefficient,
                convective_coefficient,
            )?,
            conductivity: validate(MaterialField::Conductivity, conductivity)?,
            density: validate(MaterialField::Density, density)?,
            specific_heat: validate(MaterialField::SpecificHeat, specific_heat)?,
        })
    }

    /// Builds a `Material` from raw SI values.
    ///
    /// Arguments are, in order: area [m²], volume [m³], convective coefficient
    /// [W/m²·K], conductivity [W/m·K], density [kg/m³], and specific heat
    /// [J/kg·K].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] as for [`Material::new`].
    pub fn from_si(
        area: f64,
        volume: f64,
        convective_coefficient: f64,
        conductivity: f64,
        density: f64,
        specific_heat: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(
            Area::new::<square_meter>(area),
            Volume::new::<cubic_meter>(volume),
            HeatTransfer::new::<watt_per_square_meter_kelvin>(convective_coefficient),
            ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity),
            MassDensity::new::<kilogram_per_cubic_meter>(density),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(specific_heat),
        )
    }

    /// Exposed surface area.
    #[must_use]
    pub fn area(&self) -> Area {
        *self.area.as_ref()
    }

    /// Body volume.
    #[must_use]
    pub fn volume(&self) -> Volume {
        *self.volume.as_ref()
    }

    /// Surface film coefficient (`hc`).
    #[must_use]
    pub fn convective_coefficient(&self) -> HeatTransfer {
        *self.convective_coefficient.as_ref()
    }

    /// Bulk thermal conductivity (`k`).
    #[must_use]
    pub fn conductivity(&self) -> ThermalConductivity {
        *self.conductivity.as_ref()
    }

    /// Density (`rho`).
    #[must_use]
    pub fn density(&self) -> MassDensity {
        *self.density.as_ref()
    }

    /// Specific heat capacity at constant pressure (`cp`).
    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        *self.specific_heat.as_ref()
    }
}

fn validate<T: SiValue>(
    field: MaterialField,
    value: T,
) -> Result<Constrained<T, Significant>, ValidationError> {
    Significant::new(value).map_err(|source| ValidationError { field, source })
}

/// Identifies one of the six properties of a [`Material`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialField {
    Area,
    Volume,
    ConvectiveCoefficient,
    Conductivity,
    Density,
    SpecificHeat,
}

impl fmt::Display for MaterialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Area => "area",
            Self::Volume => "volume",
            Self::ConvectiveCoefficient => "convective coefficient",
            Self::Conductivity => "conductivity",
            Self::Density => "density",
            Self::SpecificHeat => "specific heat",
        })
    }
}

/// A [`Material`] property failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid material {field}")]
pub struct ValidationError {
    /// The property that was rejected.
    pub field: MaterialField,

    /// Why the value was rejected.
    #[source]
    pub source: ConstraintError,
}
