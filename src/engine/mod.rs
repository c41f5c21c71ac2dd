//! The art synthesis facade.
//!
//! [`ArtEngine`] resolves a request's free-text names (with fallbacks),
//! dispatches to the renderer registered for the style and theme, and
//! optionally persists the result through an [`ArtStore`].

mod request;
mod store;

use std::path::PathBuf;

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::{ArtError, Result};
use crate::render::{CancelFlag, Canvas, RenderContext, RendererRegistry};
use crate::types::{Palette, PaletteCatalog, Style, Theme};

pub use request::{
    ArtRequest, Dimensions, DEFAULT_PALETTE, DEFAULT_SIZE, DEFAULT_STYLE, DEFAULT_THEME,
};
pub use store::{ArtStore, FilenameGenerator, FsStore};

/// A persisted artwork and the resolved request that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedArtwork {
    pub style: Style,
    pub theme: Theme,
    /// Resolved palette name (after any fallback).
    pub palette: String,
    pub width: u32,
    pub height: u32,
    pub seed: Option<u64>,
    pub filename: String,
    pub path: PathBuf,
    #[serde(skip)]
    pub canvas: Canvas,
}

/// A request with every name resolved.
struct Resolved<'a> {
    style: Style,
    theme: Theme,
    palette: &'a Palette,
    dimensions: Dimensions,
}

/// Public entry point for rendering artwork.
///
/// Holds only immutable data plus the filename sequence, so one engine can
/// serve concurrent requests.
pub struct ArtEngine {
    catalog: PaletteCatalog,
    registry: RendererRegistry,
    store: Box<dyn ArtStore>,
    filenames: FilenameGenerator,
    default_style: Style,
    max_dimension: u32,
}

impl ArtEngine {
    /// Engine with builtin palettes and renderers, default limits.
    pub fn new(store: impl ArtStore + 'static) -> Self {
        let defaults = EngineConfig::default();
        Self {
            catalog: PaletteCatalog::builtin(),
            registry: RendererRegistry::builtin(),
            store: Box::new(store),
            filenames: FilenameGenerator::new(),
            default_style: defaults.default_style,
            max_dimension: defaults.max_dimension,
        }
    }

    /// Engine configured from `config`, storing into its storage directory.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let store = FsStore::new(&config.storage).with_scale(config.effective_scale());
        Ok(Self {
            catalog: config.catalog()?,
            registry: RendererRegistry::builtin(),
            store: Box::new(store),
            filenames: FilenameGenerator::new(),
            default_style: config.default_style,
            max_dimension: config.max_dimension,
        })
    }

    /// Replace the renderer table.
    pub fn with_registry(mut self, registry: RendererRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn catalog(&self) -> &PaletteCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn default_style(&self) -> Style {
        self.default_style
    }

    /// Render without persisting.
    pub fn render(&self, request: &ArtRequest) -> Result<Canvas> {
        self.render_with_cancel(request, CancelFlag::new())
    }

    /// Render without persisting, aborting once `cancel` is tripped.
    pub fn render_with_cancel(&self, request: &ArtRequest, cancel: CancelFlag) -> Result<Canvas> {
        let resolved = self.resolve(request)?;
        self.paint(&resolved, request.seed, cancel)
    }

    /// Render and persist.
    pub fn generate(&self, request: &ArtRequest) -> Result<GeneratedArtwork> {
        self.generate_with_cancel(request, CancelFlag::new())
    }

    /// Render and persist, aborting once `cancel` is tripped.
    pub fn generate_with_cancel(
        &self,
        request: &ArtRequest,
        cancel: CancelFlag,
    ) -> Result<GeneratedArtwork> {
        let resolved = self.resolve(request)?;
        let canvas = self.paint(&resolved, request.seed, cancel.clone())?;

        // A render can finish after its deadline has already been reported.
        if cancel.is_cancelled() {
            debug!("Discarding cancelled render before storing");
            return Err(ArtError::Cancelled);
        }

        let filename = self.filenames.next(resolved.style, resolved.theme);
        let path = self.store.store(&canvas, &filename)?;
        info!("Stored {}", path.display());

        Ok(GeneratedArtwork {
            style: resolved.style,
            theme: resolved.theme,
            palette: resolved.palette.name.clone(),
            width: resolved.dimensions.width,
            height: resolved.dimensions.height,
            seed: request.seed,
            filename,
            path,
            canvas,
        })
    }

    fn paint(
        &self,
        resolved: &Resolved<'_>,
        seed: Option<u64>,
        cancel: CancelFlag,
    ) -> Result<Canvas> {
        let mut ctx = RenderContext::new(resolved.palette, seed, cancel);
        self.registry.render(
            resolved.style,
            resolved.theme,
            resolved.dimensions.width,
            resolved.dimensions.height,
            &mut ctx,
        )
    }

    fn resolve<'a>(&'a self, request: &ArtRequest) -> Result<Resolved<'a>> {
        let dimensions = Dimensions::new(request.width, request.height, self.max_dimension)?;
        let style = self.resolve_style(&request.style)?;

        let theme = Theme::resolve(&request.theme);
        if Theme::from_name(&request.theme).is_none() {
            warn!("Unknown theme '{}', using {}", request.theme, theme);
        }

        if !self.catalog.contains(&request.palette) {
            warn!("Unknown palette '{}', using fallback", request.palette);
        }
        let palette = self.catalog.palette_for(&request.palette);

        debug!(
            "Resolved {}/{}/{} to {}/{}/{}",
            request.style,
            request.palette,
            request.theme,
            style,
            palette.name,
            theme
        );

        Ok(Resolved {
            style,
            theme,
            palette,
            dimensions,
        })
    }

    fn resolve_style(&self, name: &str) -> Result<Style> {
        match Style::from_name(name) {
            Some(style) if self.registry.supports(style) => Ok(style),
            Some(_) => Err(ArtError::UnsupportedStyle {
                style: name.to_string(),
            }),
            None => {
                warn!("Unknown style '{}', using {}", name, self.default_style);
                Ok(self.default_style)
            }
        }
    }
}
