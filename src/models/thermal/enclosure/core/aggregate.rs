//! Reduction of per-component results to a system summary.

use uom::{ConstZero, si::f64::Power};

use crate::support::constraint::{Constrained, NonNegative};

use super::{
    Bottleneck, ComponentRecord, ComponentResult, ConvectiveCoefficient, DEGENERATE_MARGIN,
    SystemSummary,
};

/// Sums the dissipation and finds the component with the least margin.
///
/// Only components that dissipate heat take part. Ties on the minimum margin
/// go to the component that appears first, so the result does not depend on
/// anything but input order.
///
/// When no component dissipates heat the summary is degenerate: zero power,
/// [`DEGENERATE_MARGIN`], and no bottleneck.
pub fn summarize<'a, I>(entries: I, coefficient: ConvectiveCoefficient) -> SystemSummary
where
    I: IntoIterator<Item = (&'a ComponentRecord, &'a ComponentResult)>,
{
    let loaded: Vec<(usize, (&ComponentRecord, &ComponentResult))> = entries
        .into_iter()
        .enumerate()
        .filter(|(_, (_, result))| result.total_power > Power::ZERO)
        .collect();

    let total_power = loaded
        .iter()
        .filter_map(|(_, (_, result))| NonNegative::new(result.total_power).ok())
        .sum::<Constrained<Power, NonNegative>>()
        .into_inner();

    // Strict comparison keeps the earliest of equal margins.
    let worst = loaded.into_iter().reduce(|best, next| {
        let (_, (_, candidate)) = next;
        let (_, (_, current)) = best;
        if candidate.margin < current.margin {
            next
        } else {
            best
        }
    });

    let (min_margin, bottleneck) = match worst {
        Some((index, (record, result))) => (
            result.margin,
            Some(Bottleneck {
                index,
                name: record.name().to_owned(),
            }),
        ),
        None => (DEGENERATE_MARGIN, None),
    };

    SystemSummary {
        total_power,
        min_margin,
        bottleneck,
        coefficient,
    }
}
