use tracing_subscriber::EnvFilter;
use uom::si::{
    f64::{Length, Power, ThermodynamicTemperature},
    length::millimeter,
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use super::ComponentRecord;

/// A standard component with no board path, no interface, and zero height.
pub(super) fn component(name: &str, quantity: u32, unit_power_w: f64, limit_c: f64) -> ComponentRecord {
    ComponentRecord::new(
        name,
        quantity,
        Power::new::<watt>(unit_power_w),
        ThermodynamicTemperature::new::<degree_celsius>(limit_c),
    )
    .expect("test power is non-negative")
}

pub(super) fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

/// Routes `tracing` output through the test harness, honoring `RUST_LOG`.
pub(super) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
