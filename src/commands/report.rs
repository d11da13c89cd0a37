use crate::catalog;
use crate::cli::{Cli, Commands};
use crate::domain::models::{ContributionReport, Settings, State};
use crate::services::carbon::round3;
use crate::services::contribution;
use crate::services::output::{print_one, print_out};
use crate::services::storage::{find_buildup, StoreError};
use crate::services::taxonomy::{self, TaxonomyNode};

pub fn handle_report_commands(
    cli: &Cli,
    state: &State,
    catalog_source: &str,
    settings: &Settings,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Catalog { query } => {
            let loaded = catalog::load_catalog(catalog_source)?;
            let items: Vec<_> = catalog::discover(&loaded, query.as_deref())
                .into_iter()
                .cloned()
                .collect();
            print_out(cli.json, &items, |m| {
                format!("{}\t{}\t{}kg/m3", m.key, m.group_name, m.density)
            })?;
        }
        Commands::Material { key } => {
            let loaded = catalog::load_catalog(catalog_source)?;
            let m = catalog::find(&loaded, key)?.clone();
            if cli.json {
                print_one(cli.json, m, |_| String::new())?;
            } else {
                println!("key: {}", m.key);
                println!("group: {}", m.group_name);
                println!("density: {} kg/m3", m.density);
                println!("ecf inc biogenic: {} kgCO2e/kg", m.ecf_inc_biogenic);
                println!("ecf biogenic: {} kgCO2e/kg", m.ecf_biogenic);
            }
        }
        Commands::Tree => {
            let def = catalog::load_taxonomy(cli.taxonomy.as_deref())?;
            let skeleton = taxonomy::build_tree(&def);
            let classified = taxonomy::classify(&skeleton, &state.buildups);
            if cli.json {
                print_one(cli.json, classified, |_| String::new())?;
            } else {
                print_tree(&classified, 0);
            }
        }
        Commands::Contribution { buildup, layers } => {
            let b = find_buildup(state, buildup)?;
            let indices = parse_indices(layers)?;
            for &i in &indices {
                if i >= b.layers.len() {
                    return Err(StoreError::LayerOutOfRange(i).into());
                }
            }

            let total_exc: f64 = b.layers.iter().map(|l| l.carbon_exc_biogenic).sum();
            let total_bio: f64 = b.layers.iter().map(|l| l.carbon_biogenic).sum();
            let toggled_exc: f64 = indices.iter().map(|&i| b.layers[i].carbon_exc_biogenic).sum();
            let toggled_bio: f64 = indices.iter().map(|&i| b.layers[i].carbon_biogenic).sum();

            // biogenic carbon is sequestered: reported below the center line
            let total_product_stage = round3(total_exc);
            let total_biogenic = round3(-total_bio);
            let toggled_product_stage = round3(toggled_exc);
            let toggled_biogenic = round3(-toggled_bio);

            let bars = contribution::scale(
                total_product_stage,
                total_biogenic,
                toggled_product_stage,
                toggled_biogenic,
                settings.report.half_height,
            );
            let report = ContributionReport {
                buildup: b.name.clone(),
                toggled_indices: indices,
                total_product_stage,
                total_biogenic,
                toggled_product_stage,
                toggled_biogenic,
                bars,
            };
            print_one(cli.json, report, |r| {
                format!(
                    "{}: product-stage {:.1}% / biogenic {:.1}% of totals",
                    r.buildup,
                    r.bars.product_stage.toggled_percent,
                    r.bars.biogenic.toggled_percent
                )
            })?;
        }
        _ => unreachable!("build-up commands are dispatched separately"),
    }
    Ok(())
}

fn parse_indices(raw: &str) -> anyhow::Result<Vec<usize>> {
    let mut out = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let i: usize = part
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid layer index: {part}"))?;
        if !out.contains(&i) {
            out.push(i);
        }
    }
    Ok(out)
}

fn print_tree(node: &TaxonomyNode, depth: usize) {
    println!("{}{}\t{}", "  ".repeat(depth), node.label, node.subtree_count);
    for name in &node.assigned {
        println!("{}- {}", "  ".repeat(depth + 1), name);
    }
    for child in &node.children {
        print_tree(child, depth + 1);
    }
}
