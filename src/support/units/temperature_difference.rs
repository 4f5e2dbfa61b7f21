use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// The dimensionless temperature of a lumped node is the ratio of two
/// excesses over ambient, `(T - T_ext) / (T0 - T_ext)`, and decoding scales
/// `T0 - T_ext` back up. Both need an absolute temperature minus another as
/// a [`TemperatureInterval`], which [`uom`] does not provide for
/// [`ThermodynamicTemperature`]. Operands are read in kelvin, so a body
/// described in degrees Celsius encodes and decodes identically.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
