//! Subassembly masses from the solved geometry.

use uom::si::{
    f64::{Length, Mass, MassDensity, Volume},
    length::millimeter,
    volume::cubic_millimeter,
};

use super::{Geometry, GlobalParameters, MassBreakdown};

/// Estimates the mass of each subassembly.
///
/// Every subassembly is a slab over the enclosure plan (or, for the fins, a
/// set of plates along its length) scaled by a solid fraction where the
/// volume is mostly air. An enclosure with no height has no mass.
#[must_use]
pub fn estimate(geometry: &Geometry, params: &GlobalParameters) -> MassBreakdown {
    if geometry.enclosure_height <= Length::default() {
        return MassBreakdown::default();
    }

    let layout = &params.enclosure;
    let model = &params.mass;
    let plan_mm2 = geometry.length.get::<millimeter>() * geometry.width.get::<millimeter>();

    let slab = |thickness: Length, fill: f64, density: MassDensity| -> Mass {
        let volume = Volume::new::<cubic_millimeter>(plan_mm2 * thickness.get::<millimeter>() * fill);
        volume * density
    };

    let fin_volume = Volume::new::<cubic_millimeter>(
        f64::from(geometry.fin_count)
            * params.fins.thickness.get::<millimeter>()
            * geometry.fin_height.get::<millimeter>()
            * geometry.length.get::<millimeter>(),
    );

    MassBreakdown {
        base_plate: slab(layout.base_thickness, 1.0, model.heatsink_density),
        fins: fin_volume * model.heatsink_density,
        shielding_shell: slab(
            layout.cavity_depth,
            model.shell_fill_ratio,
            model.heatsink_density,
        ),
        filter_stack: slab(
            layout.filter_thickness,
            model.filter_fill_ratio,
            model.filter_density,
        ),
        shield_can: slab(model.shield_can_thickness, 1.0, model.shield_can_density),
        board: slab(model.board_thickness, 1.0, model.board_density),
    }
}
