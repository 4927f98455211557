//! Extensions to [`uom`] for enclosure sizing.
//!
//! [`uom`] has no thermal resistance or temperature gradient quantity, and it
//! deliberately refuses `ThermodynamicTemperature - ThermodynamicTemperature`.
//! This module fills those gaps.
//!
//! ```
//! use heatsink_sizer::support::units::{TemperatureDifference, thermal_resistance};
//! use uom::si::{
//!     f64::{Power, TemperatureInterval, ThermodynamicTemperature},
//!     power::watt,
//!     temperature_interval::kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let r_jc = thermal_resistance(0.25);
//! let rise: TemperatureInterval = Power::new::<watt>(40.0) * r_jc;
//! assert!((rise.get::<kelvin>() - 10.0).abs() < 1e-12);
//!
//! let limit = ThermodynamicTemperature::new::<degree_celsius>(125.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(45.0);
//! assert!((limit.minus(ambient).get::<kelvin>() - 80.0).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{
    TemperatureGradient, ThermalResistance, kelvin_per_millimeter, kelvin_per_watt,
    temperature_gradient, thermal_resistance,
};
pub use temperature_difference::TemperatureDifference;
