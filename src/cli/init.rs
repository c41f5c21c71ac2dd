//! Init command implementation.
//!
//! Writes an `artlens.yaml` holding the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{EngineConfig, CONFIG_FILENAME};
use crate::error::{ArtError, Result};
use crate::output::{display_path, Printer};

/// Initialize an artlens project by writing artlens.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing artlens.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(ArtError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = EngineConfig::default().to_yaml()?;

    fs::create_dir_all(&args.path).map_err(|e| ArtError::Io {
        path: args.path.clone(),
        message: format!("Failed to create directory: {}", e),
    })?;
    fs::write(&config_path, &yaml).map_err(|e| ArtError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success("Created", &display_path(&config_path));

    Ok(())
}
