use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod domain;
mod services;

use catalog::CatalogError;
use cli::{Cli, Commands, DEFAULT_CATALOG_SOURCE};
use services::storage::{load_settings, load_state, StoreError};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        services::output::print_err(cli.json, error_code(&e), &format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let mut state = load_state()?;

    let catalog_source = cli
        .catalog
        .clone()
        .or_else(|| settings.catalog.default_source.clone())
        .unwrap_or_else(|| DEFAULT_CATALOG_SOURCE.to_string());

    match &cli.command {
        Commands::Catalog { .. }
        | Commands::Material { .. }
        | Commands::Tree
        | Commands::Contribution { .. } => {
            commands::handle_report_commands(cli, &state, &catalog_source, &settings)
        }
        _ => commands::handle_buildup_commands(cli, &mut state, &catalog_source),
    }
}

fn error_code(e: &anyhow::Error) -> &'static str {
    if let Some(ce) = e.downcast_ref::<CatalogError>() {
        return match ce {
            CatalogError::MaterialNotFound(_) => "MATERIAL_NOT_FOUND",
            CatalogError::DuplicateMaterial(_) => "DUPLICATE_MATERIAL",
        };
    }
    if let Some(se) = e.downcast_ref::<StoreError>() {
        return match se {
            StoreError::BuildUpNotFound(_) => "BUILDUP_NOT_FOUND",
            StoreError::LayerOutOfRange(_) => "LAYER_OUT_OF_RANGE",
        };
    }
    "ERROR"
}
