pub mod completions;
pub mod generate;
pub mod init;
pub mod list;
pub mod palettes;
pub mod styles;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::config::EngineConfig;
use crate::error::Result;

/// artlens - procedural art synthesis
#[derive(Parser, Debug)]
#[command(name = "artlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render artwork and store it as PNG
    Generate(generate::GenerateArgs),

    /// List available palettes
    Palettes(palettes::PalettesArgs),

    /// List styles and themes
    Styles(styles::StylesArgs),

    /// List generated artwork
    List(list::ListArgs),

    /// Initialize an artlens project (generates artlens.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load an explicit config file, or artlens.yaml from the current directory.
pub(crate) fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path),
        None => EngineConfig::discover(Path::new(".")),
    }
}
