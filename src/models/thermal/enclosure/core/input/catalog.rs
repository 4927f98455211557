use uom::si::{
    f64::{Length, ThermalConductivity},
    length::millimeter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use super::{BoardType, InterfaceMaterial};

/// Conductivity of a copper coin pressed into the board, W/m·K.
pub const COPPER_COIN_CONDUCTIVITY: f64 = 380.0;

/// Conductivity and bond-line thickness of a thermal interface material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterfaceProperties {
    pub conductivity: ThermalConductivity,
    pub thickness: Length,
}

impl InterfaceProperties {
    /// Creates properties from W/m·K and mm.
    #[must_use]
    pub fn new(conductivity_w_per_m_k: f64, thickness_mm: f64) -> Self {
        Self {
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                conductivity_w_per_m_k,
            ),
            thickness: Length::new::<millimeter>(thickness_mm),
        }
    }

    /// The neutral entry used for [`InterfaceMaterial::None`].
    ///
    /// A conductivity of one with zero thickness yields exactly zero
    /// resistance once the thickness guard applies.
    #[must_use]
    pub fn neutral() -> Self {
        Self::new(1.0, 0.0)
    }
}

/// Material constants for interface and board conduction paths.
///
/// Lookups are exhaustive matches, so every [`InterfaceMaterial`] and
/// [`BoardType`] variant has a defined entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialCatalog {
    pub solder: InterfaceProperties,
    pub grease: InterfaceProperties,
    pub pad: InterfaceProperties,
    pub putty: InterfaceProperties,

    /// Equivalent through-plane conductivity of a thermal-via array.
    pub thermal_via_conductivity: ThermalConductivity,

    /// Process efficiency of plated vias, in `(0, 1]`.
    ///
    /// Resistance of a standard via path is divided by this value.
    pub via_efficiency: f64,

    /// Fraction of the primary pad left wetted after solder voiding, in `(0, 1]`.
    ///
    /// One means a void-free joint.
    pub solder_voiding: f64,
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self {
            solder: InterfaceProperties::new(58.0, 0.1),
            grease: InterfaceProperties::new(3.0, 0.05),
            pad: InterfaceProperties::new(6.0, 0.5),
            putty: InterfaceProperties::new(3.5, 0.3),
            thermal_via_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(30.0),
            via_efficiency: 0.8,
            solder_voiding: 0.75,
        }
    }
}

impl MaterialCatalog {
    /// Returns the interface properties for `material`.
    #[must_use]
    pub fn interface(&self, material: InterfaceMaterial) -> InterfaceProperties {
        match material {
            InterfaceMaterial::Solder => self.solder,
            InterfaceMaterial::Grease => self.grease,
            InterfaceMaterial::Pad => self.pad,
            InterfaceMaterial::Putty => self.putty,
            InterfaceMaterial::None => InterfaceProperties::neutral(),
        }
    }

    /// Returns the conduction constant for `board`.
    ///
    /// [`BoardType::None`] has no conduction path and resolves to zero, which
    /// the conduction model reads as zero resistance.
    #[must_use]
    pub fn board_conductivity(&self, board: BoardType) -> ThermalConductivity {
        match board {
            BoardType::CopperCoin => {
                ThermalConductivity::new::<watt_per_meter_kelvin>(COPPER_COIN_CONDUCTIVITY)
            }
            BoardType::ThermalVia => self.thermal_via_conductivity,
            BoardType::None => ThermalConductivity::new::<watt_per_meter_kelvin>(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn none_interface_is_neutral() {
        let props = MaterialCatalog::default().interface(InterfaceMaterial::None);
        assert_relative_eq!(props.conductivity.get::<watt_per_meter_kelvin>(), 1.0);
        assert_eq!(props.thickness.get::<millimeter>(), 0.0);
    }

    #[test]
    fn board_constants() {
        let catalog = MaterialCatalog {
            thermal_via_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(25.0),
            ..MaterialCatalog::default()
        };
        let k = |board| catalog.board_conductivity(board).get::<watt_per_meter_kelvin>();

        assert_relative_eq!(k(BoardType::CopperCoin), COPPER_COIN_CONDUCTIVITY);
        assert_relative_eq!(k(BoardType::ThermalVia), 25.0);
        assert_eq!(k(BoardType::None), 0.0);
    }

    #[test]
    fn solder_entry_is_used_for_solder() {
        let catalog = MaterialCatalog::default();
        assert_eq!(catalog.interface(InterfaceMaterial::Solder), catalog.solder);
        assert_eq!(catalog.interface(InterfaceMaterial::Putty), catalog.putty);
    }
}
