use clap::{Parser, Subcommand};

pub const DEFAULT_CATALOG_SOURCE: &str = "./catalog";

#[derive(Parser, Debug)]
#[command(
    name = "buildup",
    version,
    about = "Embodied carbon accounting for construction build-ups"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Materials catalog source (dir or catalog.json) [default: ./catalog]"
    )]
    pub catalog: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Taxonomy definition file (defaults to the built-in NRM hierarchy)"
    )]
    pub taxonomy: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List or search catalog materials
    Catalog { query: Option<String> },
    /// Show one catalog material
    Material { key: String },
    /// Create a new empty build-up
    Create { name: String },
    /// List all build-ups with their totals
    List,
    /// Show one build-up with layers and totals
    Show { buildup: String },
    /// Rename a build-up (collisions get a numeric suffix)
    Rename { buildup: String, new_name: String },
    /// Delete a build-up
    Remove { buildup: String },
    /// Edit a build-up's material layers
    Layer {
        #[command(subcommand)]
        command: LayerCommands,
    },
    /// Manage a build-up's NRM classification codes
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
    /// Classify all build-ups into the NRM hierarchy and print the tree
    Tree,
    /// Contribution of a toggled layer subset, scaled for a dual-bar view
    Contribution {
        buildup: String,
        #[arg(long, help = "Comma-separated zero-based layer indices")]
        layers: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum LayerCommands {
    Add {
        buildup: String,
        #[arg(long)]
        material: Option<String>,
        #[arg(long, default_value_t = 0.0)]
        thickness: f64,
    },
    Set {
        buildup: String,
        index: usize,
        #[arg(long)]
        material: Option<String>,
        #[arg(long)]
        thickness: Option<f64>,
    },
    Remove { buildup: String, index: usize },
}

#[derive(Subcommand, Debug)]
pub enum TagCommands {
    Add { buildup: String, code: String },
    Remove { buildup: String, code: String },
    List { buildup: String },
}
