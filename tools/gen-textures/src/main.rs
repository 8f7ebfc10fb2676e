//! gen-textures - procedural texture generator
//!
//! Draws the FuzeCreek tiles and the GUI sprites on large working canvases,
//! shrinks them and writes PNG files into an asset directory.
//!
//! Usage:
//!   gen-textures list
//!   gen-textures generate rock mine
//!   gen-textures --output assets --parallel all

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tex_gen::{generate, ResampleFilter, TextureSpec};

mod catalog;
mod config;

use config::{FilterName, Overrides, Settings};

#[derive(Parser)]
#[command(name = "gen-textures")]
#[command(about = "Generate procedural game textures as PNG files")]
#[command(version)]
struct Cli {
    /// Optional TOML config (asset_dir, filter, parallel, only)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Downsampling filter (overrides config)
    #[arg(short, long, global = true, value_enum)]
    filter: Option<FilterName>,

    /// Generate textures on the rayon thread pool
    #[arg(short, long, global = true)]
    parallel: bool,

    /// Generate one texture at a time, even if the config enables parallel
    #[arg(long, global = true, conflicts_with = "parallel")]
    no_parallel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List texture names with working and final sizes
    List,

    /// Generate the named textures
    Generate {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Generate the whole catalog (or the config's `only` subset)
    All,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => Default::default(),
    };
    let settings = Settings::resolve(
        file,
        Overrides {
            asset_dir: cli.output,
            filter: cli.filter,
            parallel: match (cli.parallel, cli.no_parallel) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
        },
    );

    match cli.command {
        Commands::List => {
            for spec in catalog::all() {
                println!(
                    "{:<22} {:>4}x{:<4} -> {:>3}x{:<3} {}",
                    spec.name,
                    spec.working.0,
                    spec.working.1,
                    spec.output.0,
                    spec.output.1,
                    spec.file_name
                );
            }
        }
        Commands::Generate { names } => {
            let specs = catalog::select(&names)?;
            run_batch(&specs, &settings)?;
        }
        Commands::All => {
            let specs = match &settings.only {
                Some(names) => catalog::select(names)?,
                None => catalog::all(),
            };
            run_batch(&specs, &settings)?;
        }
    }

    Ok(())
}

/// Generate every spec, logging failures and continuing with the rest
fn run_batch(specs: &[TextureSpec], settings: &Settings) -> Result<()> {
    tracing::info!(
        "Generating {} texture(s) into {:?} ({:?} filter{})",
        specs.len(),
        settings.asset_dir,
        settings.filter,
        if settings.parallel { ", parallel" } else { "" }
    );

    let failed: Vec<&str> = if settings.parallel {
        specs
            .par_iter()
            .filter_map(|spec| generate_one(spec, &settings.asset_dir, settings.filter))
            .collect()
    } else {
        specs
            .iter()
            .filter_map(|spec| generate_one(spec, &settings.asset_dir, settings.filter))
            .collect()
    };

    if !failed.is_empty() {
        bail!(
            "{} of {} texture(s) failed: {}",
            failed.len(),
            specs.len(),
            failed.join(", ")
        );
    }
    tracing::info!("Done!");
    Ok(())
}

/// Returns the texture name on failure
fn generate_one<'a>(
    spec: &'a TextureSpec,
    asset_dir: &Path,
    filter: ResampleFilter,
) -> Option<&'a str> {
    match generate(spec, asset_dir, filter) {
        Ok(_) => None,
        Err(e) => {
            tracing::error!("{} failed: {}", spec.name, e);
            Some(spec.name.as_str())
        }
    }
}
