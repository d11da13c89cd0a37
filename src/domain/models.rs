use crate::domain::constants::DEFAULT_HALF_HEIGHT;
use crate::services::contribution::ContributionBars;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Persisted application state: the full build-up collection.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct State {
    pub buildups: Vec<BuildUp>,
    #[serde(default)]
    pub next_buildup_id: u64,
}

/// One constructed element: an ordered stack of material layers plus the
/// NRM codes it is classified under. `totals` always equals the sum over the
/// current layers; every layer mutation replaces it wholesale.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BuildUp {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub classification_codes: Vec<String>,
    #[serde(default)]
    pub totals: AssemblyTotals,
    #[serde(default)]
    pub next_layer_id: u64,
}

/// One material+thickness row of a build-up. The `*_per_area` fields are
/// derived and recomputed whenever the material or thickness changes; a layer
/// with no assigned material carries all-zero derived values.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Layer {
    pub id: u64,
    pub material_key: Option<String>,
    pub thickness_mm: f64,
    #[serde(default)]
    pub mass_per_area: f64,
    #[serde(default)]
    pub carbon_inc_biogenic: f64,
    #[serde(default)]
    pub carbon_biogenic: f64,
    #[serde(default)]
    pub carbon_exc_biogenic: f64,
}

/// Assembly-level sums over layer derived values (kg/m² and kgCO2e/m²).
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AssemblyTotals {
    pub thickness_mm: f64,
    pub mass_per_area: f64,
    pub carbon_inc_biogenic: f64,
    pub carbon_biogenic: f64,
}

/// Contribution report for a toggled subset of a build-up's layers.
/// Biogenic values are reported with the conventional negative sign
/// (sequestration renders below the center line).
#[derive(Serialize)]
pub struct ContributionReport {
    pub buildup: String,
    pub toggled_indices: Vec<usize>,
    pub total_product_stage: f64,
    pub total_biogenic: f64,
    pub toggled_product_stage: f64,
    pub toggled_biogenic: f64,
    pub bars: ContributionBars,
}

fn default_half_height() -> f64 {
    DEFAULT_HALF_HEIGHT
}

/// Optional user settings from `~/.config/buildup/config.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_half_height")]
    pub half_height: f64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            half_height: DEFAULT_HALF_HEIGHT,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct CatalogSettings {
    #[serde(default)]
    pub default_source: Option<String>,
}
