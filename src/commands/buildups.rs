use crate::catalog::{self, Catalog};
use crate::cli::{Cli, Commands, LayerCommands, TagCommands};
use crate::domain::models::{BuildUp, Layer, State};
use crate::services::carbon;
use crate::services::naming::unique_name;
use crate::services::ordering::compare_coded;
use crate::services::output::{print_one, print_out};
use crate::services::storage::{audit, save_state, find_buildup, find_buildup_mut, StoreError};

/// Recompute every layer against the catalog and replace the stored totals.
/// Replacing (not merging) prevents stale partial sums.
fn recompute(b: &mut BuildUp, catalog: &Catalog) {
    for layer in &mut b.layers {
        carbon::recompute_layer(layer, catalog);
    }
    b.totals = carbon::aggregate(&b.layers);
}

pub fn handle_buildup_commands(
    cli: &Cli,
    state: &mut State,
    catalog_source: &str,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Create { name } => {
            let resolved = unique_name(
                state.buildups.iter().map(|b| b.name.as_str()),
                name,
            );
            let entry = BuildUp {
                id: state.next_buildup_id,
                name: resolved,
                layers: Vec::new(),
                classification_codes: Vec::new(),
                totals: Default::default(),
                next_layer_id: 0,
            };
            state.next_buildup_id += 1;
            state.buildups.push(entry.clone());
            audit("create", serde_json::json!({"buildup": entry.name}));
            save_state(state)?;
            print_one(cli.json, entry, |b| format!("created {}", b.name))?;
        }
        Commands::List => {
            print_out(cli.json, &state.buildups, |b| {
                format!(
                    "{}\t{}mm\t{}kg/m2\t{}kgCO2e/m2",
                    b.name, b.totals.thickness_mm, b.totals.mass_per_area,
                    b.totals.carbon_inc_biogenic
                )
            })?;
        }
        Commands::Show { buildup } => {
            let b = find_buildup(state, buildup)?;
            if cli.json {
                print_one(cli.json, b.clone(), |_| String::new())?;
            } else {
                println!("name: {}", b.name);
                println!(
                    "totals: {}mm, {}kg/m2, inc {} / bio {} kgCO2e/m2",
                    b.totals.thickness_mm,
                    b.totals.mass_per_area,
                    b.totals.carbon_inc_biogenic,
                    b.totals.carbon_biogenic
                );
                for (i, l) in b.layers.iter().enumerate() {
                    println!(
                        "[{}] {}\t{}mm\t{}kg/m2\tinc {}\tbio {}\texc {}",
                        i,
                        l.material_key.as_deref().unwrap_or("-"),
                        l.thickness_mm,
                        l.mass_per_area,
                        l.carbon_inc_biogenic,
                        l.carbon_biogenic,
                        l.carbon_exc_biogenic
                    );
                }
                if !b.classification_codes.is_empty() {
                    println!("codes: {}", b.classification_codes.join(", "));
                }
            }
        }
        Commands::Rename { buildup, new_name } => {
            let taken: Vec<String> = state
                .buildups
                .iter()
                .filter(|b| b.name != *buildup)
                .map(|b| b.name.clone())
                .collect();
            let resolved = unique_name(taken.iter().map(String::as_str), new_name);
            let b = find_buildup_mut(state, buildup)?;
            b.name = resolved.clone();
            audit(
                "rename",
                serde_json::json!({"from": buildup, "to": resolved}),
            );
            save_state(state)?;
            print_one(cli.json, resolved, |n| format!("renamed to {n}"))?;
        }
        Commands::Remove { buildup } => {
            let before = state.buildups.len();
            state.buildups.retain(|b| b.name != *buildup);
            let removed = before.saturating_sub(state.buildups.len());
            audit("remove", serde_json::json!({"buildup": buildup}));
            save_state(state)?;
            print_one(cli.json, removed, |n| format!("removed {n} entries"))?;
        }
        Commands::Layer { command } => {
            handle_layer_commands(cli, state, catalog_source, command)?;
        }
        Commands::Tag { command } => {
            handle_tag_commands(cli, state, command)?;
        }
        _ => unreachable!("report commands are dispatched separately"),
    }
    Ok(())
}

fn handle_layer_commands(
    cli: &Cli,
    state: &mut State,
    catalog_source: &str,
    command: &LayerCommands,
) -> anyhow::Result<()> {
    let catalog = catalog::load_catalog(catalog_source)?;
    match command {
        LayerCommands::Add {
            buildup,
            material,
            thickness,
        } => {
            if let Some(key) = material.as_deref() {
                catalog::find(&catalog, key)?;
            }
            let updated = {
                let b = find_buildup_mut(state, buildup)?;
                b.layers.push(Layer {
                    id: b.next_layer_id,
                    material_key: material.clone(),
                    thickness_mm: *thickness,
                    mass_per_area: 0.0,
                    carbon_inc_biogenic: 0.0,
                    carbon_biogenic: 0.0,
                    carbon_exc_biogenic: 0.0,
                });
                b.next_layer_id += 1;
                recompute(b, &catalog);
                b.clone()
            };
            audit(
                "layer_add",
                serde_json::json!({"buildup": buildup, "material": material, "thickness": thickness}),
            );
            save_state(state)?;
            print_one(cli.json, updated, |b| {
                format!("{} now has {} layers", b.name, b.layers.len())
            })?;
        }
        LayerCommands::Set {
            buildup,
            index,
            material,
            thickness,
        } => {
            if let Some(key) = material.as_deref() {
                catalog::find(&catalog, key)?;
            }
            let updated = {
                let b = find_buildup_mut(state, buildup)?;
                let layer = b
                    .layers
                    .get_mut(*index)
                    .ok_or(StoreError::LayerOutOfRange(*index))?;
                if let Some(key) = material {
                    layer.material_key = Some(key.clone());
                }
                if let Some(t) = thickness {
                    layer.thickness_mm = *t;
                }
                recompute(b, &catalog);
                b.clone()
            };
            audit(
                "layer_set",
                serde_json::json!({"buildup": buildup, "index": index}),
            );
            save_state(state)?;
            print_one(cli.json, updated, |b| {
                format!("updated layer {index} of {}", b.name)
            })?;
        }
        LayerCommands::Remove { buildup, index } => {
            let updated = {
                let b = find_buildup_mut(state, buildup)?;
                if *index >= b.layers.len() {
                    return Err(StoreError::LayerOutOfRange(*index).into());
                }
                b.layers.remove(*index);
                recompute(b, &catalog);
                b.clone()
            };
            audit(
                "layer_remove",
                serde_json::json!({"buildup": buildup, "index": index}),
            );
            save_state(state)?;
            print_one(cli.json, updated, |b| {
                format!("{} now has {} layers", b.name, b.layers.len())
            })?;
        }
    }
    Ok(())
}

fn handle_tag_commands(cli: &Cli, state: &mut State, command: &TagCommands) -> anyhow::Result<()> {
    match command {
        TagCommands::Add { buildup, code } => {
            let codes = {
                let b = find_buildup_mut(state, buildup)?;
                // set semantics: adding an existing code is a no-op
                if !b.classification_codes.contains(code) {
                    b.classification_codes.push(code.clone());
                }
                b.classification_codes.clone()
            };
            audit(
                "tag_add",
                serde_json::json!({"buildup": buildup, "code": code}),
            );
            save_state(state)?;
            print_one(cli.json, codes, |c| format!("{} codes", c.len()))?;
        }
        TagCommands::Remove { buildup, code } => {
            let codes = {
                let b = find_buildup_mut(state, buildup)?;
                b.classification_codes.retain(|c| c != code);
                b.classification_codes.clone()
            };
            audit(
                "tag_remove",
                serde_json::json!({"buildup": buildup, "code": code}),
            );
            save_state(state)?;
            print_one(cli.json, codes, |c| format!("{} codes", c.len()))?;
        }
        TagCommands::List { buildup } => {
            let b = find_buildup(state, buildup)?;
            // same ordering law as the taxonomy tree
            let mut codes = b.classification_codes.clone();
            codes.sort_by(|a, b| compare_coded(a, b));
            print_out(cli.json, &codes, |c| c.clone())?;
        }
    }
    Ok(())
}
