//! artlens - procedural art synthesis
//!
//! A library for rendering palette-driven artwork in a handful of styles
//! (geometric shapes, pixel blocks, colour gradients, fractals) across a
//! set of themes, and storing the results as PNG files.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod render;
pub mod types;
pub mod worker;

pub use config::{EngineConfig, CONFIG_FILENAME};
pub use engine::{ArtEngine, ArtRequest, ArtStore, Dimensions, FsStore, GeneratedArtwork};
pub use error::{ArtError, Result};
pub use render::{
    scale_pixels, write_png, CancelFlag, Canvas, RenderContext, RenderFn, RendererRegistry,
};
pub use types::{Colour, Palette, PaletteCatalog, Style, Theme, FALLBACK_PALETTE};
pub use worker::RenderPool;
