//! Optional TOML configuration and its merge with command-line flags

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tex_gen::ResampleFilter;

/// Default directory textures are written to
pub const DEFAULT_ASSET_DIR: &str = "build";

/// Contents of a `textures.toml` file; every key is optional
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub asset_dir: Option<PathBuf>,
    #[serde(default)]
    pub filter: Option<FilterName>,
    #[serde(default)]
    pub parallel: Option<bool>,
    /// Subset of texture names generated by `all`
    #[serde(default)]
    pub only: Option<Vec<String>>,
}

/// Resampling filter as spelled on the command line and in config files
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FilterName {
    Area,
    Lanczos3,
}

impl From<FilterName> for ResampleFilter {
    fn from(name: FilterName) -> Self {
        match name {
            FilterName::Area => ResampleFilter::Area,
            FilterName::Lanczos3 => ResampleFilter::Lanczos3,
        }
    }
}

pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {:?}", path))?;
    parse_config(&content).with_context(|| format!("Failed to parse config: {:?}", path))
}

fn parse_config(content: &str) -> Result<FileConfig> {
    Ok(toml::from_str(content)?)
}

/// Command-line overrides (unset flags fall through to the file)
#[derive(Debug, Default)]
pub struct Overrides {
    pub asset_dir: Option<PathBuf>,
    pub filter: Option<FilterName>,
    /// `Some(false)` forces sequential even if the file enables parallel
    pub parallel: Option<bool>,
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub asset_dir: PathBuf,
    pub filter: ResampleFilter,
    pub parallel: bool,
    pub only: Option<Vec<String>>,
}

impl Settings {
    pub fn resolve(file: FileConfig, cli: Overrides) -> Self {
        Self {
            asset_dir: cli
                .asset_dir
                .or(file.asset_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR)),
            filter: cli
                .filter
                .or(file.filter)
                .map(ResampleFilter::from)
                .unwrap_or_default(),
            parallel: cli.parallel.or(file.parallel).unwrap_or(false),
            only: file.only,
        }
    }
}
