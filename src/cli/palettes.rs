//! Palettes command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::PaletteCatalog;

use super::load_config;

/// List available palettes and their colours
#[derive(Args, Debug)]
pub struct PalettesArgs {
    /// Config file with extra palettes (default: ./artlens.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: PalettesArgs, printer: &Printer) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let catalog = config.catalog()?;

    printer.info("Palettes", &plural(catalog.len(), "palette", "palettes"));
    println!("{}", listing(&catalog));

    Ok(())
}

/// One line per palette: name, then its colours as hex.
pub fn listing(catalog: &PaletteCatalog) -> String {
    catalog
        .iter()
        .map(|palette| {
            let colours: Vec<String> = palette.colours().iter().map(|c| c.to_string()).collect();
            format!("{:<12}{}", palette.name, colours.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
