use uom::si::{f64::Length, length::millimeter};

/// Fin manufacturing process.
///
/// The process fixes the fin efficiency used to size the heatsink and may
/// cap the fin height that can be produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FinProcess {
    /// Die-cast aluminum fins, integral with the housing.
    #[default]
    DieCasting,

    /// Extruded aluminum profile.
    Extrusion,

    /// Fins skived from a solid block.
    Skiving,

    /// A user-supplied efficiency with no height limit.
    Custom { efficiency: f64 },
}

impl FinProcess {
    /// Fin efficiency for this process.
    #[must_use]
    pub fn efficiency(self) -> f64 {
        match self {
            Self::DieCasting => 0.90,
            Self::Extrusion => 0.93,
            Self::Skiving => 0.95,
            Self::Custom { efficiency } => efficiency,
        }
    }

    /// Tallest fin the process can produce, if it has a limit.
    #[must_use]
    pub fn max_fin_height(self) -> Option<Length> {
        let mm = match self {
            Self::DieCasting => 120.0,
            Self::Extrusion => 80.0,
            Self::Skiving => 60.0,
            Self::Custom { .. } => return None,
        };
        Some(Length::new::<millimeter>(mm))
    }
}
