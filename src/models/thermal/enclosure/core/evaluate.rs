//! End-to-end evaluation of an enclosure design.

use tracing::{debug, info, instrument, warn};
use uom::si::{
    heat_transfer::watt_per_square_meter_kelvin,
    length::millimeter,
    mass::kilogram,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    volume::liter,
};

use super::{
    ComponentRecord, ComponentResult, ConfigurationIssue, ConvectiveCoefficient, EvaluateError,
    Evaluation, GlobalParameters, Sizing, Verdict, aggregate, component_result, design_rules,
    geometry, weight,
};

/// Sizes a heatsink and enclosure for a set of components.
///
/// Components are evaluated in input order, reduced to a system summary,
/// and, when anything dissipates heat, sized and gated by the design rules.
/// A rejected design is a normal outcome reported in the verdict.
///
/// # Errors
///
/// Returns an [`EvaluateError`] if a parameter is out of range or more than
/// one component is marked primary.
#[instrument(skip_all, fields(components = components.len()))]
pub fn evaluate(
    components: &[ComponentRecord],
    params: &GlobalParameters,
) -> Result<Evaluation, EvaluateError> {
    params.validate()?;
    ensure_single_primary(components)?;

    let results: Vec<ComponentResult> = components
        .iter()
        .map(|record| {
            let result = component_result(record, params);
            debug!(
                component = record.name(),
                margin_k = result.margin.get::<delta_kelvin>(),
                drop_k = result.drop.get::<delta_kelvin>(),
                power_w = result.total_power.get::<watt>(),
                "component evaluated"
            );
            result
        })
        .collect();

    let coefficient = ConvectiveCoefficient::from_gap(params.fins.gap);
    let summary = aggregate::summarize(components.iter().zip(&results), coefficient);
    debug!(
        total_power_w = summary.total_power.get::<watt>(),
        min_margin_k = summary.min_margin.get::<delta_kelvin>(),
        bottleneck = summary.bottleneck_label(),
        h_conv = coefficient.convective.get::<watt_per_square_meter_kelvin>(),
        h_rad = coefficient.radiative.get::<watt_per_square_meter_kelvin>(),
        "system summarized"
    );

    if !summary.is_loaded() {
        info!("no component dissipates heat; nothing to size");
        return Ok(Evaluation {
            components: results,
            summary,
            verdict: Verdict::Valid(Sizing::default()),
        });
    }

    let geometry = geometry::solve(summary.total_power, summary.min_margin, &coefficient, params);
    debug!(
        fin_count = geometry.fin_count,
        fin_height_mm = geometry.fin_height.get::<millimeter>(),
        enclosure_height_mm = geometry.enclosure_height.get::<millimeter>(),
        "geometry solved"
    );

    let verdict = match design_rules::check(&summary, &geometry, params) {
        Ok(()) => {
            let mass = weight::estimate(&geometry, params);
            info!(
                volume_l = geometry.volume.get::<liter>(),
                mass_kg = mass.total().get::<kilogram>(),
                bottleneck = summary.bottleneck_label(),
                "design accepted"
            );
            Verdict::Valid(Sizing { geometry, mass })
        }
        Err(rejection) => {
            warn!(
                rule = %rejection.rule,
                value = rejection.value,
                limit = rejection.limit,
                "design rejected: {}",
                rejection.message
            );
            Verdict::Rejected(rejection)
        }
    };

    Ok(Evaluation {
        components: results,
        summary,
        verdict,
    })
}

fn ensure_single_primary(components: &[ComponentRecord]) -> Result<(), EvaluateError> {
    let mut primaries = components.iter().filter(|record| record.is_primary());
    if let (Some(first), Some(second)) = (primaries.next(), primaries.next()) {
        return Err(EvaluateError::invalid(
            second.name(),
            ConfigurationIssue::DuplicatePrimary {
                first: first.name().to_owned(),
            },
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::{
        ConstZero,
        si::f64::{Power, TemperatureInterval},
    };

    use crate::models::thermal::enclosure::core::{
        BoardType, DEGENERATE_MARGIN, DesignRule, FinProcess, Geometry, InterfaceMaterial,
        test_support::{component, init_tracing, mm},
    };

    #[test]
    fn single_bare_component() {
        init_tracing();
        let params = GlobalParameters::default();
        let evaluation = evaluate(&[component("PA", 1, 100.0, 150.0)], &params).unwrap();

        let result = &evaluation.components[0];
        assert_eq!(result.drop, TemperatureInterval::ZERO);
        assert_relative_eq!(result.margin.get::<delta_kelvin>(), 105.0, epsilon = 1e-9);
        assert_relative_eq!(evaluation.summary.total_power.get::<watt>(), 100.0);
        assert_eq!(evaluation.summary.bottleneck_label(), "PA");

        let sizing = evaluation.verdict.sizing().unwrap();
        assert!(sizing.geometry.fin_count > 0);
        assert!(sizing.mass.total().get::<kilogram>() > 0.0);
    }

    #[test]
    fn no_components_is_degenerate() {
        init_tracing();
        let evaluation = evaluate(&[], &GlobalParameters::default()).unwrap();

        assert!(evaluation.components.is_empty());
        assert_eq!(evaluation.summary.total_power, Power::ZERO);
        assert_eq!(evaluation.summary.min_margin, DEGENERATE_MARGIN);
        assert_eq!(evaluation.summary.bottleneck_label(), "None");
        assert_eq!(evaluation.verdict, Verdict::Valid(Sizing::default()));
        assert_eq!(evaluation.verdict.sizing().unwrap().geometry, Geometry::default());
    }

    #[test]
    fn narrow_gap_is_rejected_without_geometry() {
        init_tracing();
        let mut params = GlobalParameters::default();
        params.fins.gap = mm(2.0);

        // Small enough that the fins stay short of the aspect-ratio limit.
        let evaluation = evaluate(&[component("LNA", 2, 10.0, 125.0)], &params).unwrap();

        let rejection = evaluation.verdict.rejection().unwrap();
        assert_eq!(rejection.rule, DesignRule::PoorConvection);
        assert_relative_eq!(rejection.value, 6.4 * (2.0_f64 / 7.0).tanh(), epsilon = 1e-12);
        assert!(evaluation.verdict.sizing().is_none());
    }

    #[test]
    fn tied_margins_pick_the_first_component() {
        init_tracing();
        let params = GlobalParameters::default();
        let components = [
            component("Driver", 1, 5.0, 140.0),
            component("TRX-A", 2, 8.0, 110.0),
            component("TRX-B", 2, 8.0, 110.0),
        ];

        let evaluation = evaluate(&components, &params).unwrap();
        let bottleneck = evaluation.summary.bottleneck.unwrap();
        assert_eq!(bottleneck.name, "TRX-A");
        assert_eq!(bottleneck.index, 1);
    }

    #[test]
    fn solder_voiding_raises_primary_conduction() {
        init_tracing();
        let pa = component("PA", 1, 80.0, 175.0)
            .with_pad(mm(12.0), mm(10.0))
            .unwrap()
            .with_board(BoardType::CopperCoin, mm(1.5))
            .unwrap()
            .with_interface(InterfaceMaterial::Solder)
            .primary();

        let mut params = GlobalParameters::default();
        params.catalog.solder_voiding = 1.0;
        let void_free = evaluate(std::slice::from_ref(&pa), &params).unwrap();
        params.catalog.solder_voiding = 0.6;
        let voided = evaluate(std::slice::from_ref(&pa), &params).unwrap();

        assert!(voided.components[0].conduction > void_free.components[0].conduction);
        assert!(voided.summary.min_margin < void_free.summary.min_margin);
    }

    #[test]
    fn two_primaries_are_rejected_as_configuration() {
        let components = [
            component("PA-1", 1, 60.0, 175.0).primary(),
            component("PA-2", 1, 60.0, 175.0).primary(),
        ];

        let err = evaluate(&components, &GlobalParameters::default()).unwrap_err();
        assert_eq!(
            err,
            EvaluateError::InvalidConfiguration {
                record: "PA-2".into(),
                issue: ConfigurationIssue::DuplicatePrimary {
                    first: "PA-1".into(),
                },
            }
        );
    }

    #[test]
    fn invalid_parameters_fail_before_evaluation() {
        let params = GlobalParameters {
            margin_ratio: -1.0,
            ..GlobalParameters::default()
        };
        assert!(matches!(
            evaluate(&[component("PA", 1, 10.0, 100.0)], &params),
            Err(EvaluateError::InvalidParameter {
                parameter: "margin_ratio",
                ..
            })
        ));
    }

    #[test]
    fn overheated_component_exhausts_the_margin() {
        init_tracing();
        let evaluation =
            evaluate(&[component("Hot", 1, 20.0, 40.0)], &GlobalParameters::default()).unwrap();

        let rejection = evaluation.verdict.rejection().unwrap();
        assert_eq!(rejection.rule, DesignRule::MarginExhausted);
    }

    #[test]
    fn extruded_fins_hit_the_process_limit() {
        init_tracing();
        let params = GlobalParameters {
            fin_process: FinProcess::Extrusion,
            ..GlobalParameters::default()
        };

        // About 104 mm of fin: within the aspect ratio, above the 80 mm extrusion cap.
        let evaluation = evaluate(&[component("PA", 5, 150.0, 120.0)], &params).unwrap();

        let rejection = evaluation.verdict.rejection().unwrap();
        assert_eq!(rejection.rule, DesignRule::ProcessHeightLimit);
        assert!(rejection.value > 80.0 && rejection.value < 120.0);
    }
}
