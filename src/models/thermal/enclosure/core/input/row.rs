use uom::si::{
    f64::{Length, Power, ThermodynamicTemperature},
    length::millimeter,
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{constraint::Finite, units::thermal_resistance};

use super::super::{ConfigurationIssue, EvaluateError};
use super::{BoardType, ComponentRecord, InterfaceMaterial, Role};

/// A bill-of-materials row as a table editor produces it.
///
/// Values are in the editor's units (W, mm, °C, °C/W) and the board and
/// interface types are free-text labels.
/// Converting to a [`ComponentRecord`] validates every field and fails on
/// the first problem, naming the row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentRow {
    pub name: String,
    pub primary: bool,
    pub quantity: u32,
    pub unit_power_w: f64,
    pub height_mm: f64,
    pub pad_length_mm: f64,
    pub pad_width_mm: f64,
    pub thickness_mm: f64,
    pub board_type: String,
    pub limit_c: f64,
    pub junction_to_case_c_per_w: f64,
    pub interface_material: String,
}

impl TryFrom<&ComponentRow> for ComponentRecord {
    type Error = EvaluateError;

    fn try_from(row: &ComponentRow) -> Result<Self, Self::Error> {
        let invalid = |issue: ConfigurationIssue| EvaluateError::invalid(row.name.as_str(), issue);
        let mm = Length::new::<millimeter>;

        let board_type: BoardType = row
            .board_type
            .parse()
            .map_err(|err| invalid(ConfigurationIssue::from(err)))?;
        let interface: InterfaceMaterial = row
            .interface_material
            .parse()
            .map_err(|err| invalid(ConfigurationIssue::from(err)))?;

        let role = if row.primary {
            Role::Primary
        } else {
            Role::Standard
        };

        Finite::new(row.limit_c)
            .map_err(ConfigurationIssue::field("limit_c"))
            .map_err(invalid)?;

        let record = ComponentRecord::new(
            row.name.as_str(),
            row.quantity,
            Power::new::<watt>(row.unit_power_w),
            ThermodynamicTemperature::new::<degree_celsius>(row.limit_c),
        )
        .map_err(ConfigurationIssue::field("unit_power_w"))
        .map_err(invalid)?
        .with_height(mm(row.height_mm))
        .map_err(ConfigurationIssue::field("height_mm"))
        .map_err(invalid)?
        .with_pad(mm(row.pad_length_mm), mm(row.pad_width_mm))
        .map_err(ConfigurationIssue::field("pad"))
        .map_err(invalid)?
        .with_board(board_type, mm(row.thickness_mm))
        .map_err(ConfigurationIssue::field("thickness_mm"))
        .map_err(invalid)?
        .with_junction_to_case(thermal_resistance(row.junction_to_case_c_per_w))
        .map_err(ConfigurationIssue::field("junction_to_case_c_per_w"))
        .map_err(invalid)?
        .with_interface(interface)
        .with_role(role);

        Ok(record)
    }
}

impl TryFrom<ComponentRow> for ComponentRecord {
    type Error = EvaluateError;

    fn try_from(row: ComponentRow) -> Result<Self, Self::Error> {
        Self::try_from(&row)
    }
}
