use std::str::FromStr;

use thiserror::Error;
use uom::si::f64::{Length, Power, ThermodynamicTemperature};

use crate::support::{
    constraint::{ConstraintResult, Finite, NonNegative},
    units::ThermalResistance,
};

/// Whether a component is the designated primary heat source.
///
/// The primary component (by convention the highest-power amplifier) sits on
/// a fixed heat spreader and carries a solder-void penalty.
/// The role is resolved when the record is built, never from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Primary,
    #[default]
    Standard,
}

/// Conduction mechanism between a component and the heatsink base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardType {
    ThermalVia,
    CopperCoin,
    /// No conduction path through the board; contributes zero resistance.
    #[default]
    None,
}

/// Thermal interface material between a component and the heatsink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterfaceMaterial {
    Solder,
    Grease,
    Pad,
    Putty,
    #[default]
    None,
}

/// A label that names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} `{label}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub label: String,
}

/// Lowercases and drops spaces, dashes, and underscores.
fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for BoardType {
    type Err = UnknownVariant;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match normalize(label).as_str() {
            "thermalvia" | "via" => Ok(Self::ThermalVia),
            "coppercoin" | "coin" => Ok(Self::CopperCoin),
            "none" => Ok(Self::None),
            _ => Err(UnknownVariant {
                kind: "board type",
                label: label.to_owned(),
            }),
        }
    }
}

impl FromStr for InterfaceMaterial {
    type Err = UnknownVariant;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match normalize(label).as_str() {
            "solder" => Ok(Self::Solder),
            "grease" => Ok(Self::Grease),
            "pad" | "gappad" => Ok(Self::Pad),
            "putty" => Ok(Self::Putty),
            "none" => Ok(Self::None),
            _ => Err(UnknownVariant {
                kind: "interface material",
                label: label.to_owned(),
            }),
        }
    }
}

/// One row of the bill of heat-generating components.
///
/// Every length, power, and resistance is checked to be non-negative when it
/// is set. Records start with no pad, no board path, no interface material,
/// zero height, and zero junction-to-case resistance.
///
/// # Example
///
/// ```
/// use heatsink_sizer::models::thermal::enclosure::{BoardType, ComponentRecord, InterfaceMaterial};
/// use heatsink_sizer::support::{constraint::ConstraintResult, units::thermal_resistance};
/// use uom::si::{
///     f64::{Length, Power, ThermodynamicTemperature},
///     length::millimeter,
///     power::watt,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// fn main() -> ConstraintResult<()> {
///     let mm = Length::new::<millimeter>;
///     let fpga = ComponentRecord::new(
///         "FPGA",
///         1,
///         Power::new::<watt>(35.0),
///         ThermodynamicTemperature::new::<degree_celsius>(100.0),
///     )?
///     .with_pad(mm(35.0), mm(35.0))?
///     .with_board(BoardType::ThermalVia, mm(1.6))?
///     .with_junction_to_case(thermal_resistance(0.1))?
///     .with_interface(InterfaceMaterial::Putty);
///
///     assert_eq!(fpga.name(), "FPGA");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRecord {
    name: String,
    role: Role,
    quantity: u32,
    unit_power: Power,
    height: Length,
    pad_length: Length,
    pad_width: Length,
    thickness: Length,
    board_type: BoardType,
    limit: ThermodynamicTemperature,
    junction_to_case: ThermalResistance,
    interface_material: InterfaceMaterial,
}

impl ComponentRecord {
    /// Creates a standard component with the given count, unit power, and limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `unit_power` is negative or `NaN`, or if `limit`
    /// is not finite.
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        unit_power: Power,
        limit: ThermodynamicTemperature,
    ) -> ConstraintResult<Self> {
        let unit_power = NonNegative::new(unit_power)?.into_inner();
        Finite::new(limit.value)?;
        Ok(Self {
            name: name.into(),
            role: Role::Standard,
            quantity,
            unit_power,
            height: Length::default(),
            pad_length: Length::default(),
            pad_width: Length::default(),
            thickness: Length::default(),
            board_type: BoardType::None,
            limit,
            junction_to_case: ThermalResistance::default(),
            interface_material: InterfaceMaterial::None,
        })
    }

    /// Sets the thermal contact pad size.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is negative or `NaN`.
    pub fn with_pad(self, length: Length, width: Length) -> ConstraintResult<Self> {
        Ok(Self {
            pad_length: NonNegative::new(length)?.into_inner(),
            pad_width: NonNegative::new(width)?.into_inner(),
            ..self
        })
    }

    /// Sets the board conduction mechanism and its path thickness.
    ///
    /// # Errors
    ///
    /// Returns an error if `thickness` is negative or `NaN`.
    pub fn with_board(self, board_type: BoardType, thickness: Length) -> ConstraintResult<Self> {
        Ok(Self {
            board_type,
            thickness: NonNegative::new(thickness)?.into_inner(),
            ..self
        })
    }

    /// Sets the height above the reference plane.
    ///
    /// # Errors
    ///
    /// Returns an error if `height` is negative or `NaN`.
    pub fn with_height(self, height: Length) -> ConstraintResult<Self> {
        Ok(Self {
            height: NonNegative::new(height)?.into_inner(),
            ..self
        })
    }

    /// Sets the package junction-to-case resistance.
    ///
    /// # Errors
    ///
    /// Returns an error if `resistance` is negative or `NaN`.
    pub fn with_junction_to_case(self, resistance: ThermalResistance) -> ConstraintResult<Self> {
        Ok(Self {
            junction_to_case: NonNegative::new(resistance)?.into_inner(),
            ..self
        })
    }

    /// Sets the thermal interface material.
    #[must_use]
    pub fn with_interface(self, interface_material: InterfaceMaterial) -> Self {
        Self {
            interface_material,
            ..self
        }
    }

    /// Sets the component role.
    #[must_use]
    pub fn with_role(self, role: Role) -> Self {
        Self { role, ..self }
    }

    /// Marks this component as the primary heat source.
    #[must_use]
    pub fn primary(self) -> Self {
        self.with_role(Role::Primary)
    }

    /// Returns the component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the role of the component.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns `true` for the primary heat source.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.role == Role::Primary
    }

    /// Returns the number of identical instances.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the heat dissipated by one instance.
    #[must_use]
    pub fn unit_power(&self) -> Power {
        self.unit_power
    }

    /// Returns the height above the reference plane.
    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }

    /// Returns the pad length.
    #[must_use]
    pub fn pad_length(&self) -> Length {
        self.pad_length
    }

    /// Returns the pad width.
    #[must_use]
    pub fn pad_width(&self) -> Length {
        self.pad_width
    }

    /// Returns the thickness of the board or coin under the component.
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness
    }

    /// Returns the board conduction mechanism.
    #[must_use]
    pub fn board_type(&self) -> BoardType {
        self.board_type
    }

    /// Returns the maximum allowed case or junction temperature.
    #[must_use]
    pub fn limit(&self) -> ThermodynamicTemperature {
        self.limit
    }

    /// Returns the package junction-to-case resistance.
    #[must_use]
    pub fn junction_to_case(&self) -> ThermalResistance {
        self.junction_to_case
    }

    /// Returns the thermal interface material.
    #[must_use]
    pub fn interface_material(&self) -> InterfaceMaterial {
        self.interface_material
    }
}
