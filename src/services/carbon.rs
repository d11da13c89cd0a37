//! Per-layer carbon/mass calculation and assembly aggregation.
//!
//! Both functions are pure and never fail: a missing material or an invalid
//! thickness yields an all-zero result rather than an error, because layer
//! data arrives from free-form user edits.

use crate::catalog::{Catalog, Material};
use crate::domain::models::{AssemblyTotals, Layer};

/// Round to 3 decimal places so persisted values survive recomputation
/// byte-identically.
pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Derived per-area values for one layer (kg/m² and kgCO2e/m²).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayerDerived {
    pub mass_per_area: f64,
    pub carbon_inc_biogenic: f64,
    pub carbon_biogenic: f64,
    pub carbon_exc_biogenic: f64,
}

/// Converts one (material, thickness) pair into mass and split carbon
/// contributions. `None` material or a non-finite/negative thickness gives
/// all zeros.
pub fn compute_layer(material: Option<&Material>, thickness_mm: f64) -> LayerDerived {
    let Some(m) = material else {
        return LayerDerived::default();
    };
    if !thickness_mm.is_finite() || thickness_mm < 0.0 {
        return LayerDerived::default();
    }
    let mass = round3(m.density * thickness_mm / 1000.0);
    let inc = round3(mass * m.ecf_inc_biogenic);
    let bio = round3(mass * m.ecf_biogenic);
    LayerDerived {
        mass_per_area: mass,
        carbon_inc_biogenic: inc,
        carbon_biogenic: bio,
        carbon_exc_biogenic: round3(inc - bio),
    }
}

/// Recomputes a layer's derived fields in place. A material key that no
/// longer resolves in the catalog is treated the same as no material.
pub fn recompute_layer(layer: &mut Layer, catalog: &Catalog) {
    let material = layer
        .material_key
        .as_deref()
        .and_then(|k| crate::catalog::get(catalog, k));
    let d = compute_layer(material, layer.thickness_mm);
    layer.mass_per_area = d.mass_per_area;
    layer.carbon_inc_biogenic = d.carbon_inc_biogenic;
    layer.carbon_biogenic = d.carbon_biogenic;
    layer.carbon_exc_biogenic = d.carbon_exc_biogenic;
}

/// Sums layer values into assembly totals. Callers must replace (not merge)
/// the stored totals with this result after every layer insert, edit, or
/// delete. An empty layer list is a valid state and yields all zeros.
pub fn aggregate(layers: &[Layer]) -> AssemblyTotals {
    let mut t = AssemblyTotals::default();
    for l in layers {
        t.thickness_mm += l.thickness_mm;
        t.mass_per_area += l.mass_per_area;
        t.carbon_inc_biogenic += l.carbon_inc_biogenic;
        t.carbon_biogenic += l.carbon_biogenic;
    }
    AssemblyTotals {
        thickness_mm: round3(t.thickness_mm),
        mass_per_area: round3(t.mass_per_area),
        carbon_inc_biogenic: round3(t.carbon_inc_biogenic),
        carbon_biogenic: round3(t.carbon_biogenic),
    }
}
