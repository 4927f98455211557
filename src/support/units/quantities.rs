use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Length, Power, TemperatureInterval},
        length::millimeter,
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
    },
    typenum::{N1, N2, P1, P3, Z0},
};

/// Thermal resistance, K/W in SI.
///
/// A kelvin and a degree Celsius have the same size, so values in °C/W are
/// numerically identical.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Temperature gradient, K/m in SI.
pub type TemperatureGradient = Quantity<ISQ<N1, Z0, Z0, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`ThermalResistance`] from a value in K/W.
#[must_use]
pub fn thermal_resistance(kelvin_per_watt: f64) -> ThermalResistance {
    TemperatureInterval::new::<delta_kelvin>(kelvin_per_watt) / Power::new::<watt>(1.0)
}

/// Returns a [`ThermalResistance`] in K/W.
#[must_use]
pub fn kelvin_per_watt(resistance: ThermalResistance) -> f64 {
    resistance.value
}

/// Creates a [`TemperatureGradient`] from a value in K/mm.
#[must_use]
pub fn temperature_gradient(kelvin_per_millimeter: f64) -> TemperatureGradient {
    TemperatureInterval::new::<delta_kelvin>(kelvin_per_millimeter)
        / Length::new::<millimeter>(1.0)
}

/// Returns a [`TemperatureGradient`] in K/mm.
#[must_use]
pub fn kelvin_per_millimeter(gradient: TemperatureGradient) -> f64 {
    let rise: TemperatureInterval = gradient * Length::new::<millimeter>(1.0);
    rise.get::<delta_kelvin>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::meter;

    #[test]
    fn resistance_roundtrips_through_kelvin_per_watt() {
        assert_relative_eq!(kelvin_per_watt(thermal_resistance(0.35)), 0.35);
        assert_eq!(kelvin_per_watt(thermal_resistance(0.0)), 0.0);
    }

    #[test]
    fn gradient_is_stored_per_meter() {
        let gradient = temperature_gradient(0.03);
        assert_relative_eq!(kelvin_per_millimeter(gradient), 0.03, epsilon = 1e-15);

        let rise: TemperatureInterval = gradient * Length::new::<meter>(1.0);
        assert_relative_eq!(rise.get::<delta_kelvin>(), 30.0, epsilon = 1e-12);
    }
}
