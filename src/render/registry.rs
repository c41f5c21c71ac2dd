//! Strategy table mapping `(style, theme)` to a render function.

use std::collections::HashMap;

use log::debug;

use crate::error::{ArtError, Result};
use crate::types::{Colour, Style, Theme};

use super::{fractal, geometric, gradient, pixel, Canvas, RenderContext};

/// A render function: paints a canvas in place.
pub type RenderFn = fn(&mut Canvas, &mut RenderContext<'_>) -> Result<()>;

/// A registered render strategy.
#[derive(Clone, Copy)]
pub struct Strategy {
    /// Colour the canvas is cleared to before `render` runs.
    pub background: Colour,
    pub render: RenderFn,
}

/// Table of render strategies.
#[derive(Clone, Default)]
pub struct RendererRegistry {
    strategies: HashMap<(Style, Theme), Strategy>,
}

impl RendererRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every builtin renderer.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        geometric::register(&mut registry);
        pixel::register(&mut registry);
        gradient::register(&mut registry);
        fractal::register(&mut registry);
        registry
    }

    /// Register (or replace) the strategy for a style/theme pair.
    pub fn register(&mut self, style: Style, theme: Theme, background: Colour, render: RenderFn) {
        self.strategies
            .insert((style, theme), Strategy { background, render });
    }

    /// Look up the strategy for a style/theme pair.
    pub fn get(&self, style: Style, theme: Theme) -> Option<&Strategy> {
        self.strategies.get(&(style, theme))
    }

    /// Whether any theme is registered for `style`.
    pub fn supports(&self, style: Style) -> bool {
        self.strategies.keys().any(|(s, _)| *s == style)
    }

    /// Render a fresh canvas with the registered strategy.
    pub fn render(
        &self,
        style: Style,
        theme: Theme,
        width: u32,
        height: u32,
        ctx: &mut RenderContext<'_>,
    ) -> Result<Canvas> {
        let Some(strategy) = self.get(style, theme) else {
            return Err(ArtError::UnsupportedStyle {
                style: style.name().to_string(),
            });
        };

        debug!("Rendering {}/{} at {}x{}", style, theme, width, height);
        let mut canvas = Canvas::new(width, height, strategy.background);
        (strategy.render)(&mut canvas, ctx)?;
        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CancelFlag;
    use crate::types::Palette;

    fn paint_red(canvas: &mut Canvas, _ctx: &mut RenderContext<'_>) -> Result<()> {
        canvas.fill(Colour::rgb(255, 0, 0));
        Ok(())
    }

    #[test]
    fn test_builtin_covers_every_implemented_pair() {
        let registry = RendererRegistry::builtin();
        for style in Style::ALL {
            for theme in Theme::ALL {
                assert_eq!(
                    registry.get(style, theme).is_some(),
                    style.is_implemented(),
                    "{}/{}",
                    style,
                    theme
                );
            }
        }
    }

    #[test]
    fn test_unregistered_style_is_unsupported() {
        let registry = RendererRegistry::builtin();
        let palette = Palette::new("p", vec![Colour::BLACK]).unwrap();
        let mut ctx = RenderContext::new(&palette, Some(1), CancelFlag::new());

        let result = registry.render(Style::Expressionist, Theme::Nature, 4, 4, &mut ctx);
        assert!(matches!(result, Err(ArtError::UnsupportedStyle { .. })));
        assert!(!registry.supports(Style::Expressionist));
    }

    #[test]
    fn test_custom_strategy_replaces_builtin() {
        let mut registry = RendererRegistry::builtin();
        registry.register(Style::Pixel, Theme::Space, Colour::BLACK, paint_red);

        let palette = Palette::new("p", vec![Colour::BLACK]).unwrap();
        let mut ctx = RenderContext::new(&palette, Some(1), CancelFlag::new());
        let canvas = registry
            .render(Style::Pixel, Theme::Space, 3, 3, &mut ctx)
            .unwrap();

        assert!(canvas.pixels().iter().all(|&c| c == Colour::rgb(255, 0, 0)));
    }

    #[test]
    fn test_render_uses_background() {
        fn noop(_canvas: &mut Canvas, _ctx: &mut RenderContext<'_>) -> Result<()> {
            Ok(())
        }

        let mut registry = RendererRegistry::new();
        registry.register(Style::Expressionist, Theme::Urban, Colour::rgb(1, 2, 3), noop);

        let palette = Palette::new("p", vec![Colour::BLACK]).unwrap();
        let mut ctx = RenderContext::new(&palette, None, CancelFlag::new());
        let canvas = registry
            .render(Style::Expressionist, Theme::Urban, 2, 2, &mut ctx)
            .unwrap();

        assert_eq!(canvas.get(1, 1), Some(Colour::rgb(1, 2, 3)));
    }
}
