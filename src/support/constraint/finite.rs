use super::{Constrained, Constraint, ConstraintError, SiValue};

/// Marker type enforcing that a value is finite (neither `NaN` nor infinite).
///
/// Sign is unrestricted. Elapsed times and Fourier numbers use this: a
/// negative time is a valid back-extrapolation of the exponential decay, but
/// a non-finite one has no physical reading.
///
/// # Examples
///
/// ```
/// use thermal_mass_models::support::constraint::Finite;
/// use uom::si::{f64::Time, time::second};
///
/// assert!(Finite::new(Time::new::<second>(-3.0)).is_ok());
/// assert!(Finite::new(f64::NEG_INFINITY).is_err());
/// assert!(Finite::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is `NaN` or infinite.
    pub fn new<T: SiValue>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: SiValue> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        let v = value.si_value();
        if v.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if v.is_infinite() {
            Err(ConstraintError::NotFinite)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats() {
        assert!(Finite::new(0.0).is_ok());
        assert!(Finite::new(-1e300).is_ok());
        assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(Finite::new(f64::INFINITY), Err(ConstraintError::NotFinite));
    }
}
