//! Scales a toggled layer subset against assembly totals for a dual-bar,
//! sign-split visualization. Pure geometry/percentage data; rendering is the
//! caller's concern.

use serde::Serialize;

/// One bar: height in report units, side of the shared center line, and the
/// toggled subset's percentage share of the total.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarGeometry {
    pub height: f64,
    pub below_center: bool,
    pub toggled_percent: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContributionBars {
    pub product_stage: BarGeometry,
    pub biogenic: BarGeometry,
}

/// Both bars share one height scale derived from the maximum absolute value
/// across all four inputs, so magnitudes stay visually comparable. A zero
/// maximum yields empty bars; a zero total yields a 0% share. The percentage
/// is deliberately not clamped: a toggled subset whose sign opposes the total
/// can legitimately exceed 100%, which signals sign-cancelling contributions
/// within the assembly.
pub fn scale(
    total_product_stage: f64,
    total_biogenic: f64,
    toggled_product_stage: f64,
    toggled_biogenic: f64,
    half_height: f64,
) -> ContributionBars {
    let max_abs = [
        total_product_stage,
        total_biogenic,
        toggled_product_stage,
        toggled_biogenic,
    ]
    .iter()
    .fold(0.0_f64, |acc, v| acc.max(v.abs()));

    let unit = if max_abs == 0.0 {
        0.0
    } else {
        half_height / max_abs
    };

    ContributionBars {
        product_stage: bar(total_product_stage, toggled_product_stage, unit),
        biogenic: bar(total_biogenic, toggled_biogenic, unit),
    }
}

fn bar(total: f64, toggled: f64, unit: f64) -> BarGeometry {
    let toggled_percent = if total.abs() == 0.0 {
        0.0
    } else {
        toggled.abs() / total.abs() * 100.0
    };
    BarGeometry {
        height: total.abs() * unit,
        below_center: total < 0.0,
        toggled_percent,
    }
}
