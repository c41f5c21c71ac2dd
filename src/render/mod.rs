//! Rendering module for artlens.
//!
//! Renderers paint a [`Canvas`] for one style/theme pair. The
//! [`RendererRegistry`] maps pairs to render functions, and [`write_png`]
//! turns a finished canvas into an image file.

mod canvas;
mod context;
pub mod fractal;
pub mod geometric;
pub mod gradient;
pub mod pixel;
mod png;
pub mod raster;
mod registry;

pub use canvas::Canvas;
pub use context::{CancelFlag, RenderContext};
pub use png::{scale_pixels, write_png, MAX_OUTPUT_DIMENSION};
pub use registry::{RenderFn, RendererRegistry, Strategy};
