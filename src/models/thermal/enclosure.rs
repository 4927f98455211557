//! Heatsink and enclosure sizing for radio units.
//!
//! [`EnclosureModel`] turns a bill of heat-generating components and a set of
//! packaging parameters into per-component margins, the bottleneck component,
//! and, for an acceptable design, the fin geometry, enclosure volume, and
//! mass.
//!
//! ```
//! use heatsink_sizer::models::thermal::enclosure::{
//!     BoardType, ComponentRecord, EnclosureInput, EnclosureModel, GlobalParameters,
//!     InterfaceMaterial,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Length, Power, ThermodynamicTemperature},
//!     length::millimeter,
//!     power::watt,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let mm = Length::new::<millimeter>;
//! let pa = ComponentRecord::new(
//!     "PA",
//!     2,
//!     Power::new::<watt>(40.0),
//!     ThermodynamicTemperature::new::<degree_celsius>(150.0),
//! )?
//! .with_pad(mm(12.0), mm(10.0))?
//! .with_board(BoardType::CopperCoin, mm(1.5))?
//! .with_interface(InterfaceMaterial::Solder)
//! .primary();
//!
//! let input = EnclosureInput {
//!     components: vec![pa],
//!     params: GlobalParameters::default(),
//! };
//! let evaluation = EnclosureModel.call(&input)?;
//!
//! assert_eq!(evaluation.summary.bottleneck_label(), "PA");
//! assert!(evaluation.verdict.sizing().is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

pub use self::core::{
    BoardType, Bottleneck, COPPER_COIN_CONDUCTIVITY, ComponentRecord, ComponentResult,
    ComponentRow, ConfigurationIssue, ConvectiveCoefficient, DEGENERATE_MARGIN, DesignRule,
    EdgeClearances, EnclosureLayout, EvaluateError, Evaluation, FinPitch, FinProcess, Geometry,
    GlobalParameters, InterfaceMaterial, InterfaceProperties, MAX_ASPECT_RATIO,
    MIN_CONVECTIVE_COEFFICIENT, MIN_FIN_GAP_MM, MassBreakdown, MassModel, MaterialCatalog,
    Rejection, Role, Sizing, SpreaderFootprint, SystemSummary, UnknownVariant,
    VERTICAL_GRADIENT_PER_MM, Verdict, component_result, evaluate,
};

use twine_core::Model;

/// Components and parameters for one enclosure evaluation.
#[derive(Debug, Clone, Default)]
pub struct EnclosureInput {
    /// Components in bill-of-materials order.
    ///
    /// Order matters only for breaking ties between equal margins.
    pub components: Vec<ComponentRecord>,
    pub params: GlobalParameters,
}

impl EnclosureInput {
    /// Builds an input from editor rows, failing on the first invalid row.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::InvalidConfiguration`] naming the row that
    /// could not be converted.
    pub fn from_rows<'a>(
        rows: impl IntoIterator<Item = &'a ComponentRow>,
        params: GlobalParameters,
    ) -> Result<Self, EvaluateError> {
        let components = rows
            .into_iter()
            .map(ComponentRecord::try_from)
            .collect::<Result<_, _>>()?;
        Ok(Self { components, params })
    }
}

/// Sizes a radio-unit enclosure with the lumped thermal model.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnclosureModel;

impl Model for EnclosureModel {
    type Input = EnclosureInput;
    type Output = Evaluation;
    type Error = EvaluateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate(&input.components, &input.params)
    }
}
