use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtraction of absolute temperatures.
///
/// [`uom`] keeps `ThermodynamicTemperature` and `TemperatureInterval` apart
/// (see [uom#380](https://github.com/iliekturtles/uom/issues/380)), so the
/// difference between a component limit and its local ambient needs this.
pub trait TemperatureDifference {
    /// Returns `self - other` as an interval.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
