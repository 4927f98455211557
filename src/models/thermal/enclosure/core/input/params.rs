use uom::si::{
    f64::{Length, MassDensity, ThermodynamicTemperature},
    length::millimeter,
    mass_density::gram_per_cubic_centimeter,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{Finite, NonNegative, StrictlyPositive, UnitIntervalLowerOpen},
    units::{TemperatureGradient, kelvin_per_millimeter, temperature_gradient},
};

use super::super::EvaluateError;
use super::{FinProcess, MaterialCatalog};

/// Vertical air temperature rise inside the unit, K/mm.
pub const VERTICAL_GRADIENT_PER_MM: f64 = 0.03;

/// Parameters shared by every component in one evaluation.
///
/// The value is built once per run and threaded through each stage by
/// reference. Defaults describe a reference outdoor radio unit.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalParameters {
    /// Outside air temperature.
    pub ambient: ThermodynamicTemperature,

    /// Air temperature rise per unit height above the reference plane.
    pub gradient: TemperatureGradient,

    /// Safety factor applied to the total power when sizing, must be positive.
    pub margin_ratio: f64,

    /// Fin manufacturing process, which selects the fin efficiency.
    pub fin_process: FinProcess,

    pub enclosure: EnclosureLayout,
    pub fins: FinPitch,
    pub spreader: SpreaderFootprint,
    pub catalog: MaterialCatalog,
    pub mass: MassModel,
}

impl Default for GlobalParameters {
    fn default() -> Self {
        Self {
            ambient: ThermodynamicTemperature::new::<degree_celsius>(45.0),
            gradient: temperature_gradient(VERTICAL_GRADIENT_PER_MM),
            margin_ratio: 1.2,
            fin_process: FinProcess::default(),
            enclosure: EnclosureLayout::default(),
            fins: FinPitch::default(),
            spreader: SpreaderFootprint::default(),
            catalog: MaterialCatalog::default(),
            mass: MassModel::default(),
        }
    }
}

/// Plan size and stack-up of the enclosure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnclosureLayout {
    /// Board plan length, measured along the fins.
    pub plan_length: Length,

    /// Board plan width, measured across the fins.
    pub plan_width: Length,

    pub base_thickness: Length,
    pub cavity_depth: Length,
    pub filter_thickness: Length,
    pub clearances: EdgeClearances,
}

impl Default for EnclosureLayout {
    fn default() -> Self {
        let mm = Length::new::<millimeter>;
        Self {
            plan_length: mm(350.0),
            plan_width: mm(250.0),
            base_thickness: mm(6.0),
            cavity_depth: mm(20.0),
            filter_thickness: mm(35.0),
            clearances: EdgeClearances::uniform(mm(5.0)),
        }
    }
}

impl EnclosureLayout {
    /// Enclosure length: plan length plus top and bottom clearances.
    #[must_use]
    pub fn length(&self) -> Length {
        self.plan_length + self.clearances.top + self.clearances.bottom
    }

    /// Enclosure width: plan width plus left and right clearances.
    #[must_use]
    pub fn width(&self) -> Length {
        self.plan_width + self.clearances.left + self.clearances.right
    }
}

/// Margins between the board plan and the enclosure walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeClearances {
    pub top: Length,
    pub bottom: Length,
    pub left: Length,
    pub right: Length,
}

impl EdgeClearances {
    /// The same clearance on all four edges.
    #[must_use]
    pub fn uniform(clearance: Length) -> Self {
        Self {
            top: clearance,
            bottom: clearance,
            left: clearance,
            right: clearance,
        }
    }
}

/// Fin spacing and thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinPitch {
    /// Air gap between adjacent fins.
    pub gap: Length,
    pub thickness: Length,
}

impl Default for FinPitch {
    fn default() -> Self {
        Self {
            gap: Length::new::<millimeter>(10.0),
            thickness: Length::new::<millimeter>(2.0),
        }
    }
}

/// Fixed footprint of the heat spreader under the primary component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreaderFootprint {
    pub length: Length,
    pub width: Length,
}

impl Default for SpreaderFootprint {
    fn default() -> Self {
        Self {
            length: Length::new::<millimeter>(40.0),
            width: Length::new::<millimeter>(40.0),
        }
    }
}

/// Densities and fill ratios for the weight estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassModel {
    /// Housing alloy used for the base plate, fins, and shielding shell.
    pub heatsink_density: MassDensity,
    pub filter_density: MassDensity,
    pub shield_can_density: MassDensity,
    pub board_density: MassDensity,

    /// Solid fraction of the shielding-cavity volume (walls and ribs).
    pub shell_fill_ratio: f64,

    /// Solid fraction of the filter stack volume.
    pub filter_fill_ratio: f64,

    pub shield_can_thickness: Length,
    pub board_thickness: Length,
}

impl Default for MassModel {
    fn default() -> Self {
        let g_per_cm3 = MassDensity::new::<gram_per_cubic_centimeter>;
        Self {
            heatsink_density: g_per_cm3(2.70),
            filter_density: g_per_cm3(2.70),
            shield_can_density: g_per_cm3(7.85),
            board_density: g_per_cm3(1.85),
            shell_fill_ratio: 0.25,
            filter_fill_ratio: 0.35,
            shield_can_thickness: Length::new::<millimeter>(0.3),
            board_thickness: Length::new::<millimeter>(2.0),
        }
    }
}

impl GlobalParameters {
    /// Checks every parameter against its physical range.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::InvalidParameter`] naming the first parameter
    /// that is out of range.
    pub fn validate(&self) -> Result<(), EvaluateError> {
        let non_negative = |parameter: &'static str, value: Length| {
            NonNegative::new(value)
                .map(drop)
                .map_err(EvaluateError::parameter(parameter))
        };
        let positive = |parameter: &'static str, value: f64| {
            StrictlyPositive::new(value)
                .map(drop)
                .map_err(EvaluateError::parameter(parameter))
        };
        let fraction = |parameter: &'static str, value: f64| {
            UnitIntervalLowerOpen::new(value)
                .map(drop)
                .map_err(EvaluateError::parameter(parameter))
        };

        Finite::new(self.ambient.value).map_err(EvaluateError::parameter("ambient"))?;
        Finite::new(kelvin_per_millimeter(self.gradient))
            .map_err(EvaluateError::parameter("gradient"))?;
        positive("margin_ratio", self.margin_ratio)?;
        fraction("fin_efficiency", self.fin_process.efficiency())?;

        let layout = &self.enclosure;
        non_negative("plan_length", layout.plan_length)?;
        non_negative("plan_width", layout.plan_width)?;
        non_negative("base_thickness", layout.base_thickness)?;
        non_negative("cavity_depth", layout.cavity_depth)?;
        non_negative("filter_thickness", layout.filter_thickness)?;
        non_negative("clearance_top", layout.clearances.top)?;
        non_negative("clearance_bottom", layout.clearances.bottom)?;
        non_negative("clearance_left", layout.clearances.left)?;
        non_negative("clearance_right", layout.clearances.right)?;

        non_negative("fin_gap", self.fins.gap)?;
        non_negative("fin_thickness", self.fins.thickness)?;
        non_negative("spreader_length", self.spreader.length)?;
        non_negative("spreader_width", self.spreader.width)?;

        let catalog = &self.catalog;
        for (parameter, props) in [
            ("solder", catalog.solder),
            ("grease", catalog.grease),
            ("pad", catalog.pad),
            ("putty", catalog.putty),
        ] {
            StrictlyPositive::new(props.conductivity)
                .map_err(EvaluateError::parameter(parameter))?;
            non_negative(parameter, props.thickness)?;
        }
        NonNegative::new(catalog.thermal_via_conductivity)
            .map_err(EvaluateError::parameter("thermal_via_conductivity"))?;
        fraction("via_efficiency", catalog.via_efficiency)?;
        fraction("solder_voiding", catalog.solder_voiding)?;

        let mass = &self.mass;
        for (parameter, density) in [
            ("heatsink_density", mass.heatsink_density),
            ("filter_density", mass.filter_density),
            ("shield_can_density", mass.shield_can_density),
            ("board_density", mass.board_density),
        ] {
            NonNegative::new(density).map_err(EvaluateError::parameter(parameter))?;
        }
        fraction("shell_fill_ratio", mass.shell_fill_ratio)?;
        fraction("filter_fill_ratio", mass.filter_fill_ratio)?;
        non_negative("shield_can_thickness", mass.shield_can_thickness)?;
        non_negative("board_thickness", mass.board_thickness)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn defaults_are_valid() {
        let params = GlobalParameters::default();
        assert!(params.validate().is_ok());
        assert_relative_eq!(kelvin_per_millimeter(params.gradient), 0.03, epsilon = 1e-15);
    }

    #[test]
    fn enclosure_adds_clearances() {
        let mm = Length::new::<millimeter>;
        let layout = EnclosureLayout {
            plan_length: mm(300.0),
            plan_width: mm(200.0),
            clearances: EdgeClearances {
                top: mm(4.0),
                bottom: mm(6.0),
                left: mm(1.0),
                right: mm(2.0),
            },
            ..EnclosureLayout::default()
        };
        assert_relative_eq!(layout.length().get::<millimeter>(), 310.0, epsilon = 1e-9);
        assert_relative_eq!(layout.width().get::<millimeter>(), 203.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        let params = GlobalParameters {
            margin_ratio: 0.0,
            ..GlobalParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(EvaluateError::InvalidParameter {
                parameter: "margin_ratio",
                source: ConstraintError::Zero,
            })
        );

        let mut params = GlobalParameters::default();
        params.catalog.solder_voiding = 0.0;
        assert!(matches!(
            params.validate(),
            Err(EvaluateError::InvalidParameter {
                parameter: "solder_voiding",
                ..
            })
        ));

        let mut params = GlobalParameters::default();
        params.fins.gap = Length::new::<millimeter>(-1.0);
        assert!(params.validate().is_err());

        let params = GlobalParameters {
            fin_process: FinProcess::Custom { efficiency: 1.5 },
            ..GlobalParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_air_temperatures() {
        let params = GlobalParameters {
            ambient: ThermodynamicTemperature::new::<degree_celsius>(f64::NAN),
            ..GlobalParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(EvaluateError::InvalidParameter {
                parameter: "ambient",
                source: ConstraintError::NotANumber,
            })
        );

        let params = GlobalParameters {
            gradient: temperature_gradient(f64::INFINITY),
            ..GlobalParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(EvaluateError::InvalidParameter {
                parameter: "gradient",
                source: ConstraintError::Infinite,
            })
        );

        let params = GlobalParameters {
            gradient: temperature_gradient(-0.01),
            ..GlobalParameters::default()
        };
        assert!(params.validate().is_ok());
    }
}
