//! Manufacturability and physics gate for a solved geometry.
//!
//! Rules run in a fixed order and the first failure wins. A rejected design
//! is final for the run; nothing is retried or adjusted.

use std::fmt;

use thiserror::Error;
use uom::si::{
    heat_transfer::watt_per_square_meter_kelvin, length::millimeter,
    temperature_interval::kelvin as delta_kelvin,
};

use super::{Geometry, GlobalParameters, SystemSummary};

/// Largest fin height to gap ratio that can be cast or machined.
pub const MAX_ASPECT_RATIO: f64 = 12.0;

/// Smallest useful convective term, W/m²·K.
pub const MIN_CONVECTIVE_COEFFICIENT: f64 = 4.0;

/// Smallest fin gap that still lets air flow, mm.
pub const MIN_FIN_GAP_MM: f64 = 4.0;

/// A design rule, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignRule {
    /// Fin height over fin gap.
    AspectRatio,
    /// Convective term of the heat transfer coefficient.
    PoorConvection,
    /// Fin gap.
    NarrowGap,
    /// Fin height against the process maximum.
    ProcessHeightLimit,
    /// Minimum component margin of a loaded system.
    MarginExhausted,
    /// Room for at least one fin pitch across the enclosure.
    NoFins,
}

impl fmt::Display for DesignRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AspectRatio => "aspect ratio",
            Self::PoorConvection => "poor convection",
            Self::NarrowGap => "narrow gap",
            Self::ProcessHeightLimit => "process height limit",
            Self::MarginExhausted => "margin exhausted",
            Self::NoFins => "no fins",
        })
    }
}

/// Why a design was rejected.
///
/// `value` and `limit` are in the rule's natural unit: a plain ratio,
/// W/m²·K, mm, or K.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{rule} rule failed: {message}")]
pub struct Rejection {
    pub rule: DesignRule,
    pub value: f64,
    pub limit: f64,
    pub message: String,
}

impl Rejection {
    fn new(rule: DesignRule, value: f64, limit: f64, message: String) -> Self {
        Self {
            rule,
            value,
            limit,
            message,
        }
    }
}

/// Runs every rule against a loaded design.
///
/// # Errors
///
/// Returns the [`Rejection`] of the first rule that fails.
pub fn check(
    summary: &SystemSummary,
    geometry: &Geometry,
    params: &GlobalParameters,
) -> Result<(), Rejection> {
    let gap_mm = params.fins.gap.get::<millimeter>();
    let fin_height_mm = geometry.fin_height.get::<millimeter>();

    let aspect_ratio = if gap_mm > 0.0 {
        fin_height_mm / gap_mm
    } else if fin_height_mm > 0.0 {
        f64::INFINITY
    } else {
        0.0
    };
    if aspect_ratio > MAX_ASPECT_RATIO {
        return Err(Rejection::new(
            DesignRule::AspectRatio,
            aspect_ratio,
            MAX_ASPECT_RATIO,
            format!(
                "fin height {fin_height_mm:.1} mm over gap {gap_mm:.1} mm gives ratio \
                 {aspect_ratio:.2}, above {MAX_ASPECT_RATIO}"
            ),
        ));
    }

    let convective = summary
        .coefficient
        .convective
        .get::<watt_per_square_meter_kelvin>();
    if convective < MIN_CONVECTIVE_COEFFICIENT {
        return Err(Rejection::new(
            DesignRule::PoorConvection,
            convective,
            MIN_CONVECTIVE_COEFFICIENT,
            format!(
                "convective coefficient {convective:.2} W/m²·K is below \
                 {MIN_CONVECTIVE_COEFFICIENT} W/m²·K; widen the fin gap"
            ),
        ));
    }

    if gap_mm < MIN_FIN_GAP_MM {
        return Err(Rejection::new(
            DesignRule::NarrowGap,
            gap_mm,
            MIN_FIN_GAP_MM,
            format!("fin gap {gap_mm:.1} mm is below {MIN_FIN_GAP_MM} mm"),
        ));
    }

    if let Some(max_height) = params.fin_process.max_fin_height() {
        let max_mm = max_height.get::<millimeter>();
        if fin_height_mm > max_mm {
            return Err(Rejection::new(
                DesignRule::ProcessHeightLimit,
                fin_height_mm,
                max_mm,
                format!(
                    "fin height {fin_height_mm:.1} mm exceeds the {max_mm:.0} mm \
                     the process can produce"
                ),
            ));
        }
    }

    if summary.is_loaded() {
        let margin = summary.min_margin.get::<delta_kelvin>();
        // An undefined margin is never room to spare.
        if margin.is_nan() || margin <= 0.0 {
            return Err(Rejection::new(
                DesignRule::MarginExhausted,
                margin,
                0.0,
                format!(
                    "`{}` has {margin:.2} K of margin; no heatsink can cool it",
                    summary.bottleneck_label()
                ),
            ));
        }

        if geometry.fin_count == 0 {
            let width_mm = geometry.width.get::<millimeter>();
            let needed_mm = (params.fins.thickness + params.fins.gap * 2.0).get::<millimeter>();
            return Err(Rejection::new(
                DesignRule::NoFins,
                width_mm,
                needed_mm,
                format!("enclosure width {width_mm:.1} mm cannot hold a single fin pitch"),
            ));
        }
    }

    Ok(())
}
