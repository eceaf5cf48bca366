use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::Dataset;

#[derive(Debug, Parser)]
#[command(
    name = "exo-disposition",
    version,
    about = "Exoplanet candidate disposition classifier"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify a batch of predictions and report disposition statistics
    Classify(ClassifyArgs),
    /// Render catalog rows from a NASA archive table as planet cards
    Planets(PlanetsArgs),
    /// List available catalog datasets
    Datasets,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[arg(long, help = "Predictions file (.json or .csv, optionally .gz)")]
    pub input: PathBuf,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = false, help = "Print one line per prediction")]
    pub rows: bool,
}

#[derive(Debug, Args)]
pub struct PlanetsArgs {
    #[arg(long, value_parser = str::parse::<Dataset>, help = "kepler, k2planets or tess")]
    pub dataset: Dataset,

    #[arg(long, help = "NASA exoplanet archive CSV export")]
    pub input: PathBuf,

    #[arg(long, default_value_t = crate::catalog::DEFAULT_LIMIT)]
    pub limit: usize,
}
