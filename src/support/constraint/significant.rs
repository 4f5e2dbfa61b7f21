use uom::si::{Dimension, Quantity, Units};

use super::{Constrained, Constraint, ConstraintError};

/// Smallest magnitude, in SI base units, treated as physically meaningful.
///
/// Anything at or below this is indistinguishable from an adiabatic surface,
/// a massless body, or a body with no volume.
pub const PHYSICAL_EPSILON: f64 = 1e-10;

/// Access to a value expressed in SI base units.
///
/// Implemented for `f64` (assumed to already be in SI) and for every `uom`
/// quantity stored as `f64`, whose `value` field is always kept in base units.
pub trait SiValue {
    /// Returns the value in SI base units.
    fn si_value(&self) -> f64;
}

impl SiValue for f64 {
    fn si_value(&self) -> f64 {
        *self
    }
}

impl<D, U> SiValue for Quantity<D, U, f64>
where
    D: Dimension + ?Sized,
    U: Units<f64> + ?Sized,
{
    fn si_value(&self) -> f64 {
        self.value
    }
}

/// Marker type enforcing that a value is finite and at least [`PHYSICAL_EPSILON`].
///
/// This is the validity rule for every geometric and thermophysical input of
/// a lumped node: area, volume, film coefficient, conductivity, density, and
/// specific heat must all be resolvably positive.
/// The comparison happens in SI base units, so `1 mm²` and `1e-6 m²` are
/// judged identically.
///
/// # Examples
///
/// ```
/// use thermal_mass_models::support::constraint::Significant;
/// use uom::si::{f64::Area, area::{square_meter, square_millimeter}};
///
/// assert!(Significant::new(Area::new::<square_millimeter>(1.0)).is_ok());
/// assert!(Significant::new(Area::new::<square_meter>(0.0)).is_err());
/// assert!(Significant::new(Area::new::<square_meter>(1e-12)).is_err());
/// assert!(Significant::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Significant;

impl Significant {
    /// Constructs a [`Constrained<T, Significant>`] if the value is significant.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a number, infinite, or smaller
    /// than [`PHYSICAL_EPSILON`] in SI base units.
    pub fn new<T: SiValue>(value: T) -> Result<Constrained<T, Significant>, ConstraintError> {
        Constrained::<T, Significant>::new(value)
    }
}

impl<T: SiValue> Constraint<T> for Significant {
    fn check(value: &T) -> Result<(), ConstraintError> {
        let v = value.si_value();
        if v.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if v.is_infinite() {
            Err(ConstraintError::NotFinite)
        } else if v < 0.0 {
            Err(ConstraintError::Negative)
        } else if v == 0.0 {
            Err(ConstraintError::Zero)
        } else if v < PHYSICAL_EPSILON {
            Err(ConstraintError::BelowMinimum)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{HeatTransfer, MassDensity, Volume},
        heat_transfer::watt_per_square_meter_kelvin,
        mass_density::kilogram_per_cubic_meter,
        volume::{cubic_meter, liter},
    };

    #[test]
    fn floats() {
        assert!(Significant::new(1.0).is_ok());
        assert!(Significant::new(PHYSICAL_EPSILON).is_ok());
        assert_eq!(Significant::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(Significant::new(-3.0), Err(ConstraintError::Negative));
        assert_eq!(Significant::new(1e-11), Err(ConstraintError::BelowMinimum));
        assert_eq!(Significant::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(
            Significant::new(f64::INFINITY),
            Err(ConstraintError::NotFinite)
        );
    }

    #[test]
    fn quantities_compare_in_base_units() {
        assert!(Significant::new(Volume::new::<liter>(1.0)).is_ok());
        assert!(Significant::new(Volume::new::<cubic_meter>(-1.0)).is_err());

        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(210.0);
        assert!(Significant::new(h).is_ok());

        let rho = MassDensity::new::<kilogram_per_cubic_meter>(0.0);
        assert_eq!(Significant::new(rho), Err(ConstraintError::Zero));
    }
}
