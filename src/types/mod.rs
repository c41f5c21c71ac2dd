//! Core domain types for artlens.
//!
//! This module contains the fundamental types shared by every renderer:
//! - `Colour` - RGB colour values
//! - `Palette` / `PaletteCatalog` - Named colour collections
//! - `Style` / `Theme` - Render selectors

mod colour;
mod palette;
mod style;

pub use colour::Colour;
pub use palette::{Palette, PaletteCatalog, FALLBACK_PALETTE};
pub use style::{Style, Theme};
