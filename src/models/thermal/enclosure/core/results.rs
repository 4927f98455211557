//! Result types for enclosure evaluation.

use uom::{
    ConstZero,
    si::f64::{Area, Length, Mass, Power, TemperatureInterval, ThermodynamicTemperature, Volume},
};

use crate::support::units::ThermalResistance;

use super::{ConvectiveCoefficient, Rejection};

/// Thermal path and margin of one component.
///
/// Recomputed from its record on every run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentResult {
    /// Effective spreading footprint length at the mounting surface.
    pub base_length: Length,

    /// Effective spreading footprint width at the mounting surface.
    pub base_width: Length,

    /// Air temperature at the component's height.
    pub local_ambient: ThermodynamicTemperature,

    /// Board or coin conduction resistance.
    pub conduction: ThermalResistance,

    /// Thermal interface material resistance.
    pub interface: ThermalResistance,

    /// Heat dissipated by all instances.
    pub total_power: Power,

    /// Temperature rise of a single instance from surface to limit point.
    pub drop: TemperatureInterval,

    /// Remaining headroom: `limit - drop - local_ambient`.
    ///
    /// Negative when the component already exceeds its limit.
    pub margin: TemperatureInterval,
}

/// The component with the smallest margin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bottleneck {
    /// Position in the input sequence.
    pub index: usize,
    pub name: String,
}

/// System-level reduction of the component results.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSummary {
    /// Sum of the total power of every dissipating component.
    pub total_power: Power,

    /// Margin of the bottleneck, or [`DEGENERATE_MARGIN`] without one.
    pub min_margin: TemperatureInterval,

    /// `None` when no component dissipates heat.
    pub bottleneck: Option<Bottleneck>,

    /// Heat transfer coefficient at the configured fin gap.
    pub coefficient: ConvectiveCoefficient,
}

/// Margin reported when no component dissipates heat.
pub const DEGENERATE_MARGIN: TemperatureInterval = TemperatureInterval::ZERO;

impl SystemSummary {
    /// Returns true if at least one component dissipates heat.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.bottleneck.is_some()
    }

    /// Bottleneck name for reporting, `"None"` without one.
    #[must_use]
    pub fn bottleneck_label(&self) -> &str {
        self.bottleneck
            .as_ref()
            .map_or("None", |bottleneck| bottleneck.name.as_str())
    }
}

/// Solved heatsink and enclosure geometry.
///
/// All fields are zero when there is nothing to size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    /// Total convective area required, including the margin ratio.
    pub required_area: Area,

    /// Enclosure length along the fins, including clearances.
    pub length: Length,

    /// Enclosure width across the fins, including clearances.
    pub width: Length,

    pub fin_count: u32,
    pub fin_height: Length,
    pub enclosure_height: Length,
    pub volume: Volume,
}

/// Mass of each subassembly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MassBreakdown {
    pub base_plate: Mass,
    pub fins: Mass,
    pub shielding_shell: Mass,
    pub filter_stack: Mass,
    pub shield_can: Mass,
    pub board: Mass,
}

impl MassBreakdown {
    /// Sum of all subassemblies.
    #[must_use]
    pub fn total(&self) -> Mass {
        self.base_plate
            + self.fins
            + self.shielding_shell
            + self.filter_stack
            + self.shield_can
            + self.board
    }
}

/// Geometry and mass of an accepted design.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sizing {
    pub geometry: Geometry,
    pub mass: MassBreakdown,
}

/// Outcome of the design-rule gate.
///
/// A rejected design carries no geometry: the caller must change the inputs
/// and evaluate again.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Valid(Sizing),
    Rejected(Rejection),
}

impl Verdict {
    /// Returns the sizing of a valid design.
    #[must_use]
    pub fn sizing(&self) -> Option<&Sizing> {
        match self {
            Self::Valid(sizing) => Some(sizing),
            Self::Rejected(_) => None,
        }
    }

    /// Returns the rejection of an invalid design.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Valid(_) => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Full output of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Per-component results, in input order.
    pub components: Vec<ComponentResult>,
    pub summary: SystemSummary,
    pub verdict: Verdict,
}
