//! Generate command implementation.
//!
//! Renders one or more artworks through the render pool and stores them
//! as PNG files.

use std::path::PathBuf;

use clap::Args;

use crate::config::EngineConfig;
use crate::engine::{
    ArtRequest, GeneratedArtwork, DEFAULT_PALETTE, DEFAULT_SIZE, DEFAULT_STYLE, DEFAULT_THEME,
};
use crate::error::{ArtError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{Style, Theme};
use crate::worker::RenderPool;

use super::load_config;

/// Render artwork and store it as PNG
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Rendering style (unknown styles use the configured default)
    #[arg(long, default_value = DEFAULT_STYLE)]
    pub style: String,

    /// Palette name (unknown palettes fall back to vibrant)
    #[arg(long, default_value = DEFAULT_PALETTE)]
    pub palette: String,

    /// Theme (unknown themes render as ocean)
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE, allow_negative_numbers = true)]
    pub width: i64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE, allow_negative_numbers = true)]
    pub height: i64,

    /// Seed for reproducible output; with --count, incremented per artwork
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of artworks to generate
    #[arg(long, default_value_t = 1)]
    pub count: u32,

    /// Output directory (overrides config storage)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor for output (integer upscaling, at most 16384px per side)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Config file (default: ./artlens.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print generated artwork as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Apply command-line overrides on top of the loaded config.
    fn configure(&self, mut config: EngineConfig) -> EngineConfig {
        if let Some(output) = &self.output {
            config.storage = output.clone();
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        config
    }

    fn requests(&self) -> Vec<ArtRequest> {
        (0..self.count)
            .map(|i| ArtRequest {
                seed: self.seed.map(|seed| seed.wrapping_add(u64::from(i))),
                ..ArtRequest::new(
                    &self.style,
                    &self.palette,
                    &self.theme,
                    self.width,
                    self.height,
                )
            })
            .collect()
    }
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let config = args.configure(load_config(args.config.as_deref())?);
    let pool = RenderPool::from_config(&config)?;
    warn_fallbacks(&args, &pool, printer);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    printer.status(
        "Rendering",
        &format!(
            "{} ({}x{})",
            plural(args.count as usize, "artwork", "artworks"),
            args.width,
            args.height
        ),
    );
    let results = runtime.block_on(pool.generate_many(args.requests()));

    let mut generated: Vec<GeneratedArtwork> = Vec::new();
    let mut first_error: Option<ArtError> = None;
    for result in results {
        match result {
            Ok(artwork) => {
                printer.success(
                    "Generated",
                    &format!(
                        "{} {}",
                        display_path(&artwork.path),
                        printer.dim(&format!(
                            "{}/{}/{}",
                            artwork.style, artwork.palette, artwork.theme
                        ))
                    ),
                );
                generated.push(artwork);
            }
            Err(e) => {
                printer.error("Failed", &e.to_string());
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&generated).map_err(|e| ArtError::Worker {
            message: format!("Failed to encode JSON: {}", e),
        })?;
        println!("{}", json);
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Tell the user when a name will not be used as given.
fn warn_fallbacks(args: &GenerateArgs, pool: &RenderPool, printer: &Printer) {
    let engine = pool.engine();
    if Style::from_name(&args.style).is_none() {
        printer.warning(
            "Fallback",
            &format!("unknown style '{}', using {}", args.style, engine.default_style()),
        );
    }
    if !engine.catalog().contains(&args.palette) {
        printer.warning(
            "Fallback",
            &format!("unknown palette '{}', using vibrant", args.palette),
        );
    }
    if Theme::from_name(&args.theme).is_none() {
        printer.warning(
            "Fallback",
            &format!("unknown theme '{}', using ocean", args.theme),
        );
    }
}
