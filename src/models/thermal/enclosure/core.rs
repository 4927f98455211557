//! Thermal resistance network and geometry sizing for a sealed enclosure.
//!
//! Each component is reduced to a junction-to-surface resistance chain and a
//! temperature margin. The smallest margin and the total dissipation then
//! size a naturally cooled fin array by inverting a lumped convection model,
//! and the resulting geometry is gated by design rules before it is weighed.

mod aggregate;
mod convection;
mod design_rules;
mod error;
mod evaluate;
mod geometry;
mod input;
mod results;
mod thermal;
mod weight;

#[cfg(test)]
mod test_support;

pub use convection::ConvectiveCoefficient;
pub use design_rules::{
    DesignRule, MAX_ASPECT_RATIO, MIN_CONVECTIVE_COEFFICIENT, MIN_FIN_GAP_MM, Rejection,
};
pub use error::{ConfigurationIssue, EvaluateError};
pub use evaluate::evaluate;
pub use input::{
    BoardType, COPPER_COIN_CONDUCTIVITY, ComponentRecord, ComponentRow, EdgeClearances,
    EnclosureLayout, FinPitch, FinProcess, GlobalParameters, InterfaceMaterial,
    InterfaceProperties, MassModel, MaterialCatalog, Role, SpreaderFootprint, UnknownVariant,
    VERTICAL_GRADIENT_PER_MM,
};
pub use results::{
    Bottleneck, ComponentResult, DEGENERATE_MARGIN, Evaluation, Geometry, MassBreakdown, Sizing,
    SystemSummary, Verdict,
};
pub use thermal::component_result;
