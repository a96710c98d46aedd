use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cell_topology::{logging, write_sites, ConfigLoader, OutputFormat, TopologyConfig};

#[derive(Debug, Parser)]
#[command(author, version, about = "Hexagonal base-station layout generator")]
struct Cli {
    /// Path to a layout YAML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the cell radius (half the distance between neighbouring sites)
    #[arg(long, allow_negative_numbers = true)]
    cell_radius: Option<f64>,

    /// Override the number of tiers around the origin site (0..=3)
    #[arg(long, allow_negative_numbers = true)]
    tiers: Option<u32>,

    /// Output format for the site list on stdout
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

/// Layout file (or defaults) with command-line overrides applied
fn layout_config(cli: &Cli) -> Result<TopologyConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::new(".").load(path)?,
        None => TopologyConfig::default(),
    };
    if let Some(cell_radius) = cli.cell_radius {
        config.cell_radius = cell_radius;
    }
    if let Some(tiers) = cli.tiers {
        config.tiers = tiers;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log = logging::init(cli.verbose)?;

    let config = layout_config(&cli)?;
    log.apply_level(&config.logging.level)?;

    let sites = config
        .generate()
        .with_context(|| format!("Cannot generate layout '{}'", config.name))?;
    info!(
        layout = %config.name,
        sites = sites.len(),
        max_range = sites.max_range(),
        "layout generated"
    );

    write_sites(&sites, config.output.format, io::stdout().lock())
        .context("Failed to write site list")?;
    Ok(())
}
