//! Natural convection and radiation from a fin array.

use uom::si::{
    f64::{HeatTransfer, Length},
    heat_transfer::watt_per_square_meter_kelvin,
    length::millimeter,
};

/// Saturation value of the convective term, W/m²·K.
const CONVECTIVE_SCALE: f64 = 6.4;

/// Gap at which the convective term reaches `tanh(1)` of saturation, mm.
const CONVECTIVE_GAP_SCALE_MM: f64 = 7.0;

/// Radiative term with an unobstructed view, W/m²·K.
const RADIATIVE_SCALE: f64 = 2.4;

/// Gap from which the radiation view factor is no longer reduced, mm.
const NOMINAL_RADIATION_GAP_MM: f64 = 10.0;

/// Combined convective and radiative heat transfer coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvectiveCoefficient {
    /// Natural convection term.
    pub convective: HeatTransfer,

    /// Linearized radiation term.
    pub radiative: HeatTransfer,
}

impl ConvectiveCoefficient {
    /// Evaluates the coefficient for a fin gap.
    ///
    /// `h_conv = 6.4·tanh(gap/7)` saturates as the gap widens.
    /// `h_rad = 2.4·f` where `f = sqrt(gap/10)` below a 10 mm gap and one
    /// above it.
    ///
    /// The model is total for any non-negative gap; a zero gap is left for
    /// the design rules to reject.
    #[must_use]
    pub fn from_gap(gap: Length) -> Self {
        let gap_mm = gap.get::<millimeter>();

        let convective = CONVECTIVE_SCALE * (gap_mm / CONVECTIVE_GAP_SCALE_MM).tanh();

        let view_factor = if gap_mm >= NOMINAL_RADIATION_GAP_MM {
            1.0
        } else {
            (gap_mm / NOMINAL_RADIATION_GAP_MM).sqrt()
        };
        let radiative = RADIATIVE_SCALE * view_factor;

        Self {
            convective: HeatTransfer::new::<watt_per_square_meter_kelvin>(convective),
            radiative: HeatTransfer::new::<watt_per_square_meter_kelvin>(radiative),
        }
    }

    /// Sum of the convective and radiative terms.
    #[must_use]
    pub fn combined(&self) -> HeatTransfer {
        self.convective + self.radiative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn h(gap_mm: f64) -> ConvectiveCoefficient {
        ConvectiveCoefficient::from_gap(Length::new::<millimeter>(gap_mm))
    }

    #[test]
    fn narrow_gap_convects_poorly() {
        let coefficient = h(2.0);
        let convective = coefficient.convective.get::<watt_per_square_meter_kelvin>();
        assert_relative_eq!(convective, 6.4 * (2.0_f64 / 7.0).tanh());
        assert!((convective - 1.78).abs() < 0.05);
        assert_relative_eq!(
            coefficient.radiative.get::<watt_per_square_meter_kelvin>(),
            2.4 * 0.2_f64.sqrt()
        );
    }

    #[test]
    fn radiation_saturates_at_nominal_gap() {
        for gap in [10.0, 12.0, 40.0] {
            assert_relative_eq!(
                h(gap).radiative.get::<watt_per_square_meter_kelvin>(),
                2.4
            );
        }
        assert!(h(9.9).radiative < h(10.0).radiative);
    }

    #[test]
    fn combined_is_the_sum() {
        let coefficient = h(10.0);
        assert_relative_eq!(
            coefficient.combined().get::<watt_per_square_meter_kelvin>(),
            6.4 * (10.0_f64 / 7.0).tanh() + 2.4,
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_gap_has_no_transfer() {
        let coefficient = h(0.0);
        assert_eq!(coefficient.convective.get::<watt_per_square_meter_kelvin>(), 0.0);
        assert_eq!(coefficient.radiative.get::<watt_per_square_meter_kelvin>(), 0.0);
    }

    #[test]
    fn convective_term_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=60 {
            let value = h(f64::from(step) * 0.5)
                .convective
                .get::<watt_per_square_meter_kelvin>();
            assert!(value > previous);
            assert!(value < 6.4);
            previous = value;
        }
    }
}
