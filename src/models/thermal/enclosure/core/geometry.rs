//! Inversion of the lumped convection model into fin and enclosure geometry.

use uom::{
    ConstZero,
    si::{
        area::square_meter,
        f64::{Area, Length, Power, TemperatureInterval, Volume},
        heat_transfer::watt_per_square_meter_kelvin,
        length::millimeter,
        volume::cubic_millimeter,
    },
};

use crate::support::units::{ThermalResistance, kelvin_per_watt};

use super::{ConvectiveCoefficient, FinPitch, Geometry, GlobalParameters};

/// Sizes the fin array and enclosure for a dissipation and a margin.
///
/// The sink-to-air resistance is the margin spread over the derated power,
/// `R_sa = margin / (P · ratio)`, and the area it needs is
/// `A = 1 / (h · R_sa · η)`. The base plate supplies `L · W` of that area and
/// fins on both faces supply the rest.
///
/// Returns zero geometry when there is no power or no margin to work with.
#[must_use]
pub fn solve(
    total_power: Power,
    min_margin: TemperatureInterval,
    coefficient: &ConvectiveCoefficient,
    params: &GlobalParameters,
) -> Geometry {
    if total_power <= Power::ZERO || min_margin <= TemperatureInterval::ZERO {
        return Geometry::default();
    }

    let adjusted_power = total_power * params.margin_ratio;
    let sink_resistance: ThermalResistance = min_margin / adjusted_power;
    let required_area = Area::new::<square_meter>(
        1.0 / (coefficient
            .combined()
            .get::<watt_per_square_meter_kelvin>()
            * kelvin_per_watt(sink_resistance)
            * params.fin_process.efficiency()),
    );

    let layout = &params.enclosure;
    let length = layout.length();
    let width = layout.width();
    let fin_count = fin_count(width, &params.fins);
    let fin_height = fin_height(required_area, length, width, fin_count);

    let enclosure_height =
        layout.base_thickness + fin_height + layout.cavity_depth + layout.filter_thickness;
    let volume = Volume::new::<cubic_millimeter>(
        length.get::<millimeter>() * width.get::<millimeter>() * enclosure_height.get::<millimeter>(),
    );

    Geometry {
        required_area,
        length,
        width,
        fin_count,
        fin_height,
        enclosure_height,
        volume,
    }
}

/// Number of whole fin pitches across the width.
///
/// The last fin needs a gap on its far side as well, so the count drops
/// until `n · pitch + gap` fits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn fin_count(width: Length, fins: &FinPitch) -> u32 {
    let width = width.get::<millimeter>();
    let gap = fins.gap.get::<millimeter>();
    let pitch = fins.thickness.get::<millimeter>() + gap;
    if pitch <= 0.0 || width <= 0.0 {
        return 0;
    }

    let mut count = (width / pitch).floor();
    while count > 0.0 && count * pitch + gap > width {
        count -= 1.0;
    }
    count as u32
}

/// Fin height that makes the base plate plus both fin faces reach `area`.
///
/// Floored at zero when the base plate alone is enough, and zero without fins.
pub(super) fn fin_height(area: Area, length: Length, width: Length, fin_count: u32) -> Length {
    if fin_count == 0 {
        return Length::ZERO;
    }

    let area_mm2 = area.get::<square_meter>() * 1e6;
    let length_mm = length.get::<millimeter>();
    let base_mm2 = length_mm * width.get::<millimeter>();
    let height = (area_mm2 - base_mm2) / (2.0 * f64::from(fin_count) * length_mm);

    Length::new::<millimeter>(height.max(0.0))
}
