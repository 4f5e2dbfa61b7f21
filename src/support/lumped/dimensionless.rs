use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintResult, Finite, StrictlyPositive};

/// Biot number (`hc * Lc / k`).
///
/// The ratio of internal conductive resistance to surface convective
/// resistance. A lumped node is a good approximation when `Bi <= 0.1`; no
/// upper bound is enforced here because out-of-range values are still useful
/// for sensitivity studies.
///
/// The Biot number must be finite and strictly positive. It is a derived
/// quantity, so it may fall below the physical epsilon for a valid body.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BiotNumber(Constrained<Ratio, StrictlyPositive>);

impl BiotNumber {
    /// Create a [`BiotNumber`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not finite or not strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`BiotNumber`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not finite or not strictly positive.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Finite::new(quantity)?;
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Returns `true` if the lumped-capacitance assumption holds at `limit`.
    #[must_use]
    pub fn is_lumped(&self, limit: Ratio) -> bool {
        **self <= limit
    }
}

impl Deref for BiotNumber {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Fourier number (`alpha * t / Lc²`), the dimensionless elapsed time.
///
/// Any finite value is accepted. A negative Fourier number corresponds to a
/// time before the initial condition and extrapolates the decay backwards.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FourierNumber(Constrained<Ratio, Finite>);

impl FourierNumber {
    /// Create a [`FourierNumber`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is `NaN` or infinite.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`FourierNumber`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is `NaN` or infinite.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(Finite::new(quantity)?))
    }
}

impl Deref for FourierNumber {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Dimensionless temperature, `(T - T_ext) / (T0 - T_ext)`.
///
/// A lumped node starts at `1` and decays toward `0`. Encoding an arbitrary
/// temperature can fall outside that range (for example, a body pushed past
/// ambient), so no bounds are enforced.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Theta(Ratio);

impl Theta {
    /// Create a [`Theta`] from a scalar value.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(Ratio::new::<ratio>(value))
    }

    /// Create a [`Theta`] from a ratio quantity.
    #[must_use]
    pub fn from_quantity(quantity: Ratio) -> Self {
        Self(quantity)
    }
}

impl Deref for Theta {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
