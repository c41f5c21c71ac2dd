//! List command implementation.
//!
//! Walks the storage directory and prints every generated PNG.

use std::path::{Path, PathBuf};

use clap::Args;
use walkdir::WalkDir;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};

use super::load_config;

/// List generated artwork
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to scan (default: storage directory from config)
    pub dir: Option<PathBuf>,

    /// Config file (default: ./artlens.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let dir = match args.dir {
        Some(dir) => dir,
        None => load_config(args.config.as_deref())?.storage,
    };

    if !dir.is_dir() {
        printer.warning("Missing", &display_path(&dir));
        return Ok(());
    }

    let artworks = scan(&dir);
    for path in &artworks {
        println!("{}", display_path(path));
    }
    printer.status(
        "Found",
        &format!("{} in {}", plural(artworks.len(), "artwork", "artworks"), display_path(&dir)),
    );

    Ok(())
}

/// PNG files under `dir`, sorted by path.
pub fn scan(dir: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        })
        .collect();
    found.sort();
    found
}
