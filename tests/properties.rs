//! Property-based tests for the enclosure model.
//!
//! Covers: suppressed conduction paths, margin monotonicity, bottleneck
//! stability under reordering, and the fin-height area balance.

use heatsink_sizer::{
    models::thermal::enclosure::{
        BoardType, ComponentRecord, GlobalParameters, InterfaceMaterial, component_result,
        evaluate,
    },
    support::units::{kelvin_per_watt, thermal_resistance},
};
use proptest::prelude::*;
use uom::si::{
    area::square_millimeter,
    f64::{Length, Power, ThermodynamicTemperature},
    length::millimeter,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

fn record(name: &str, quantity: u32, power_w: f64, limit_c: f64) -> ComponentRecord {
    ComponentRecord::new(
        name,
        quantity,
        Power::new::<watt>(power_w),
        ThermodynamicTemperature::new::<degree_celsius>(limit_c),
    )
    .unwrap()
}

fn board() -> impl Strategy<Value = BoardType> {
    prop_oneof![
        Just(BoardType::ThermalVia),
        Just(BoardType::CopperCoin),
        Just(BoardType::None),
    ]
}

fn interface() -> impl Strategy<Value = InterfaceMaterial> {
    prop_oneof![
        Just(InterfaceMaterial::Solder),
        Just(InterfaceMaterial::Grease),
        Just(InterfaceMaterial::Pad),
        Just(InterfaceMaterial::Putty),
        Just(InterfaceMaterial::None),
    ]
}

// ── Suppressed conduction ────────────────────────────────────────────

proptest! {
    /// No thickness or no power means no footprint and no conduction.
    #[test]
    fn empty_path_has_zero_conduction(
        zero_power in any::<bool>(),
        power_w in 0.1f64..200.0,
        thickness_mm in 0.1f64..5.0,
        pad_mm in 0.0f64..40.0,
        board in board(),
        interface in interface(),
    ) {
        let (power_w, thickness_mm) = if zero_power {
            (0.0, thickness_mm)
        } else {
            (power_w, 0.0)
        };
        let component = record("U1", 1, power_w, 125.0)
            .with_pad(mm(pad_mm), mm(pad_mm))
            .unwrap()
            .with_board(board, mm(thickness_mm))
            .unwrap()
            .with_interface(interface);

        let result = component_result(&component, &GlobalParameters::default());

        prop_assert_eq!(result.base_length.get::<millimeter>(), 0.0);
        prop_assert_eq!(result.base_width.get::<millimeter>(), 0.0);
        prop_assert_eq!(kelvin_per_watt(result.conduction), 0.0);
    }
}

// ── Margin monotonicity ──────────────────────────────────────────────

proptest! {
    /// A larger temperature drop leaves less margin.
    #[test]
    fn margin_decreases_with_drop(
        power_w in 0.5f64..100.0,
        r_jc in 0.0f64..5.0,
        extra in 0.01f64..5.0,
    ) {
        let params = GlobalParameters::default();
        let at = |r: f64| {
            let component = record("U1", 1, power_w, 150.0)
                .with_junction_to_case(thermal_resistance(r))
                .unwrap();
            component_result(&component, &params)
        };

        let low = at(r_jc);
        let high = at(r_jc + extra);
        prop_assert!(high.drop > low.drop);
        prop_assert!(high.margin < low.margin);
    }

    /// A warmer local ambient leaves less margin.
    #[test]
    fn margin_decreases_with_height(
        power_w in 0.0f64..100.0,
        height_mm in 0.0f64..300.0,
        rise_mm in 1.0f64..300.0,
    ) {
        let params = GlobalParameters::default();
        let at = |h: f64| {
            let component = record("U1", 1, power_w, 150.0)
                .with_height(mm(h))
                .unwrap();
            component_result(&component, &params)
        };

        let low = at(height_mm);
        let high = at(height_mm + rise_mm);
        prop_assert!(high.local_ambient > low.local_ambient);
        prop_assert!(high.margin < low.margin);
    }
}

// ── Bottleneck selection ─────────────────────────────────────────────

proptest! {
    /// Reordering keeps the minimum margin and picks the earliest tie.
    #[test]
    fn bottleneck_is_stable_under_reordering(
        limits in prop::collection::vec(prop_oneof![Just(95.0), Just(110.0), Just(125.0)], 1..8),
        rotation in 0usize..8,
    ) {
        init_tracing();
        let params = GlobalParameters::default();
        let components: Vec<_> = limits
            .iter()
            .enumerate()
            .map(|(i, &limit)| record(&format!("U{i}"), 1, 5.0, limit))
            .collect();

        let mut rotated = components.clone();
        rotated.rotate_left(rotation % components.len());

        for input in [&components, &rotated] {
            let evaluation = evaluate(input, &params).unwrap();
            let bottleneck = evaluation.summary.bottleneck.clone().unwrap();
            let min = evaluation.summary.min_margin;

            let first_min = evaluation
                .components
                .iter()
                .position(|result| result.margin == min)
                .unwrap();
            prop_assert_eq!(bottleneck.index, first_min);
            prop_assert_eq!(bottleneck.name.as_str(), input[first_min].name());
        }

        let in_order = evaluate(&components, &params).unwrap().summary.min_margin;
        let reordered = evaluate(&rotated, &params).unwrap().summary.min_margin;
        prop_assert_eq!(in_order, reordered);
    }
}

// ── Geometry ─────────────────────────────────────────────────────────

proptest! {
    /// Base plate plus both fin faces add back up to the required area.
    #[test]
    fn fin_height_balances_required_area(
        quantity in 1u32..6,
        power_w in 5.0f64..80.0,
        limit_c in 90.0f64..150.0,
    ) {
        init_tracing();
        let params = GlobalParameters::default();
        let evaluation = evaluate(&[record("PA", quantity, power_w, limit_c)], &params).unwrap();

        let sizing = evaluation.verdict.sizing();
        prop_assume!(sizing.is_some());
        let geometry = sizing.unwrap().geometry;
        prop_assume!(geometry.fin_height.get::<millimeter>() > 0.0);

        let length = geometry.length.get::<millimeter>();
        let width = geometry.width.get::<millimeter>();
        let fin_height = geometry.fin_height.get::<millimeter>();
        let required = geometry.required_area.get::<square_millimeter>();

        let area = length * width + 2.0 * f64::from(geometry.fin_count) * length * fin_height;
        prop_assert!(((area - required) / required).abs() < 1e-9);

        let recovered = (required - length * width) / (2.0 * f64::from(geometry.fin_count) * length);
        prop_assert!(((recovered - fin_height) / fin_height).abs() < 1e-9);
    }

    /// Margins are independent of quantity; total power is not.
    #[test]
    fn quantity_scales_power_only(quantity in 1u32..20, power_w in 0.1f64..50.0) {
        let params = GlobalParameters::default();
        let one = component_result(&record("U1", 1, power_w, 125.0), &params);
        let many = component_result(&record("U1", quantity, power_w, 125.0), &params);

        prop_assert_eq!(one.margin, many.margin);
        prop_assert!(
            (many.total_power.get::<watt>() - f64::from(quantity) * power_w).abs() < 1e-9
        );
        prop_assert!(many.drop.get::<delta_kelvin>() >= 0.0);
    }
}
