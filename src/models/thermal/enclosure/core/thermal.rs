//! Junction-to-ambient resistance path of a single component.
//!
//! Each component is modeled as a series chain: package (junction to case),
//! board or coin conduction, and thermal interface material. The chain is
//! driven by the power of one instance, so the result is independent of how
//! many identical instances share the enclosure.

use uom::{
    ConstZero,
    si::{
        area::square_meter,
        f64::{Area, Length, Power, TemperatureInterval},
        length::meter,
        thermal_conductivity::watt_per_meter_kelvin,
    },
};

use crate::support::units::{TemperatureDifference, ThermalResistance, thermal_resistance};

use super::{
    BoardType, ComponentRecord, ComponentResult, GlobalParameters, MaterialCatalog, Role,
    SpreaderFootprint,
};

/// Computes the thermal path and margin of one component.
///
/// Pure and deterministic: the result depends only on the record and the
/// parameters.
#[must_use]
pub fn component_result(record: &ComponentRecord, params: &GlobalParameters) -> ComponentResult {
    let (base_length, base_width) = footprint(record, &params.spreader);
    let footprint_area: Area = base_length * base_width;

    let rise: TemperatureInterval = params.gradient * record.height();
    let local_ambient = params.ambient + rise;

    let conduction = conduction_resistance(record, footprint_area, &params.catalog);
    let interface = interface_resistance(record, footprint_area, &params.catalog);

    let total_power: Power = record.unit_power() * f64::from(record.quantity());
    let drop: TemperatureInterval =
        record.unit_power() * (record.junction_to_case() + conduction + interface);
    let margin = record.limit().minus(local_ambient) - drop;

    ComponentResult {
        base_length,
        base_width,
        local_ambient,
        conduction,
        interface,
        total_power,
        drop,
        margin,
    }
}

/// Effective spreading footprint at the mounting surface.
///
/// The primary component sits on a spreader of fixed size. Otherwise heat
/// spreads by one path thickness on each axis, and a component with no power
/// or no path thickness has an empty footprint.
fn footprint(record: &ComponentRecord, spreader: &SpreaderFootprint) -> (Length, Length) {
    if record.is_primary() {
        return (spreader.length, spreader.width);
    }

    if record.unit_power() == Power::ZERO || record.thickness() == Length::ZERO {
        return (Length::ZERO, Length::ZERO);
    }

    (
        record.pad_length() + record.thickness(),
        record.pad_width() + record.thickness(),
    )
}

/// Conduction resistance through the board or coin.
///
/// The path spreads over the geometric mean of the pad and footprint areas.
/// The primary component adds a solder-void term; a standard via path is
/// derated by the via process efficiency.
fn conduction_resistance(
    record: &ComponentRecord,
    footprint_area: Area,
    catalog: &MaterialCatalog,
) -> ThermalResistance {
    let conductivity = catalog
        .board_conductivity(record.board_type())
        .get::<watt_per_meter_kelvin>();
    let pad_area: Area = record.pad_length() * record.pad_width();
    let pad_area = pad_area.get::<square_meter>();
    let footprint_area = footprint_area.get::<square_meter>();

    // An empty footprint on a standard component suppresses the path.
    let suppressed = record.role() == Role::Standard && footprint_area == 0.0;
    if conductivity == 0.0 || pad_area == 0.0 || suppressed {
        return thermal_resistance(0.0);
    }

    let effective_area = if footprint_area > 0.0 {
        (pad_area * footprint_area).sqrt()
    } else {
        pad_area
    };
    let mut resistance = record.thickness().get::<meter>() / (conductivity * effective_area);

    match (record.role(), record.board_type()) {
        (Role::Primary, _) => resistance += solder_void_resistance(pad_area, catalog),
        (Role::Standard, BoardType::ThermalVia) => resistance /= catalog.via_efficiency,
        (Role::Standard, BoardType::CopperCoin | BoardType::None) => {}
    }

    thermal_resistance(resistance)
}

/// Solder layer under the primary pad, over the wetted fraction of its area.
fn solder_void_resistance(pad_area_m2: f64, catalog: &MaterialCatalog) -> f64 {
    let solder = catalog.solder;
    solder.thickness.get::<meter>()
        / (solder.conductivity.get::<watt_per_meter_kelvin>()
            * pad_area_m2
            * catalog.solder_voiding)
}

/// Interface material resistance over the footprint, or the pad without one.
fn interface_resistance(
    record: &ComponentRecord,
    footprint_area: Area,
    catalog: &MaterialCatalog,
) -> ThermalResistance {
    let material = catalog.interface(record.interface_material());

    let pad_area: Area = record.pad_length() * record.pad_width();
    let target_area = if footprint_area > Area::ZERO {
        footprint_area
    } else {
        pad_area
    };

    let area = target_area.get::<square_meter>();
    let thickness = material.thickness.get::<meter>();
    if area > 0.0 && thickness > 0.0 {
        thermal_resistance(
            thickness / (material.conductivity.get::<watt_per_meter_kelvin>() * area),
        )
    } else {
        thermal_resistance(0.0)
    }
}
