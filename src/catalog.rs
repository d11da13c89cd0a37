use crate::domain::constants::DEFAULT_TAXONOMY_JSON;
use crate::services::taxonomy::TaxonomyDef;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// External material feed. Read-only to the engine; the catalog owns its
/// records and the engine never mutates them.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Catalog {
    pub name: String,
    #[serde(default)]
    pub materials: Vec<Material>,
}

/// Physical and carbon properties of one material. Density in kg/m³, both
/// embodied carbon factors in kgCO2e per kg of material.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Material {
    pub key: String,
    pub group_name: String,
    pub density: f64,
    pub ecf_inc_biogenic: f64,
    pub ecf_biogenic: f64,
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("material not found: {0}")]
    MaterialNotFound(String),
    #[error("duplicate material key: {0}")]
    DuplicateMaterial(String),
}

/// A directory source resolves to `<dir>/catalog.json`; anything else is
/// taken as the catalog file itself.
pub fn resolve_catalog_file(source: &str) -> PathBuf {
    let p = Path::new(source);
    if p.is_dir() {
        p.join("catalog.json")
    } else {
        p.to_path_buf()
    }
}

pub fn load_catalog(source: &str) -> anyhow::Result<Catalog> {
    let file = resolve_catalog_file(source);
    let raw = std::fs::read_to_string(file)?;
    let catalog: Catalog = serde_json::from_str(&raw)?;
    validate(&catalog)?;
    Ok(catalog)
}

pub fn discover<'a>(c: &'a Catalog, query: Option<&str>) -> Vec<&'a Material> {
    match query {
        None => c.materials.iter().collect(),
        Some(q) => {
            let q = q.to_ascii_lowercase();
            c.materials
                .iter()
                .filter(|m| {
                    m.key.to_ascii_lowercase().contains(&q)
                        || m.group_name.to_ascii_lowercase().contains(&q)
                })
                .collect()
        }
    }
}

pub fn find<'a>(c: &'a Catalog, key: &str) -> anyhow::Result<&'a Material> {
    get(c, key).ok_or_else(|| CatalogError::MaterialNotFound(key.to_string()).into())
}

pub fn get<'a>(c: &'a Catalog, key: &str) -> Option<&'a Material> {
    c.materials.iter().find(|m| m.key == key)
}

pub fn validate(c: &Catalog) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for m in &c.materials {
        if !seen.insert(&m.key) {
            return Err(CatalogError::DuplicateMaterial(m.key.clone()).into());
        }
    }
    Ok(())
}

/// Loads the nested label hierarchy, falling back to the built-in NRM
/// definition when no file is given. Treated as static configuration.
pub fn load_taxonomy(path: Option<&str>) -> anyhow::Result<TaxonomyDef> {
    let raw = match path {
        Some(p) => std::fs::read_to_string(p)?,
        None => DEFAULT_TAXONOMY_JSON.to_string(),
    };
    Ok(serde_json::from_str(&raw)?)
}
