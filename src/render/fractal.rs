//! Fractal style - escape-time Mandelbrot and Julia sets.
//!
//! Each theme picks a viewport. Points that escape are coloured by their
//! iteration count, cycling through the palette from a random starting
//! offset; points that never escape are black.

use rand::Rng;

use crate::error::Result;
use crate::types::{Colour, Style, Theme};

use super::{Canvas, RenderContext, RendererRegistry};

/// Iteration bound per pixel.
pub const MAX_ITERATIONS: usize = 96;

/// Squared escape radius (|z| > 2).
const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Which set a viewport samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalKind {
    /// `z0 = 0`, `c = point`.
    Mandelbrot,
    /// `z0 = point`, fixed `c = (re, im)`.
    Julia { re: f64, im: f64 },
}

/// A window onto the complex plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub kind: FractalKind,
    /// Centre of the window.
    pub centre: (f64, f64),
    /// Width of the window along the real axis.
    pub span: f64,
}

impl Viewport {
    /// The viewport used for a theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Nature => Self {
                kind: FractalKind::Julia { re: -0.8, im: 0.156 },
                centre: (0.0, 0.0),
                span: 3.2,
            },
            Theme::Space => Self {
                kind: FractalKind::Mandelbrot,
                centre: (-0.5, 0.0),
                span: 3.0,
            },
            Theme::Urban => Self {
                kind: FractalKind::Julia { re: 0.285, im: 0.01 },
                centre: (0.0, 0.0),
                span: 3.0,
            },
            Theme::Abstract => Self {
                kind: FractalKind::Julia { re: -0.4, im: 0.6 },
                centre: (0.0, 0.0),
                span: 3.0,
            },
            Theme::Ocean => Self {
                kind: FractalKind::Mandelbrot,
                centre: (-0.745, 0.1),
                span: 0.3,
            },
        }
    }

    /// Iterations before `point` escapes, or `None` if it stays bounded.
    pub fn escape_time(&self, point: (f64, f64)) -> Option<usize> {
        let ((mut zr, mut zi), (cr, ci)) = match self.kind {
            FractalKind::Mandelbrot => ((0.0, 0.0), point),
            FractalKind::Julia { re, im } => (point, (re, im)),
        };

        for i in 0..MAX_ITERATIONS {
            let (zr2, zi2) = (zr * zr, zi * zi);
            if zr2 + zi2 > ESCAPE_RADIUS_SQ {
                return Some(i);
            }
            zi = 2.0 * zr * zi + ci;
            zr = zr2 - zi2 + cr;
        }
        None
    }
}

pub(super) fn register(registry: &mut RendererRegistry) {
    registry.register(Style::Fractal, Theme::Nature, Colour::BLACK, nature);
    registry.register(Style::Fractal, Theme::Space, Colour::BLACK, space);
    registry.register(Style::Fractal, Theme::Urban, Colour::BLACK, urban);
    registry.register(Style::Fractal, Theme::Abstract, Colour::BLACK, abstract_julia);
    registry.register(Style::Fractal, Theme::Ocean, Colour::BLACK, ocean);
}

/// Dendrite Julia set.
pub fn nature(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    render_viewport(canvas, ctx, Viewport::for_theme(Theme::Nature))
}

/// Full Mandelbrot set.
pub fn space(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    render_viewport(canvas, ctx, Viewport::for_theme(Theme::Space))
}

pub fn urban(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    render_viewport(canvas, ctx, Viewport::for_theme(Theme::Urban))
}

pub fn abstract_julia(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    render_viewport(canvas, ctx, Viewport::for_theme(Theme::Abstract))
}

/// Seahorse valley.
pub fn ocean(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    render_viewport(canvas, ctx, Viewport::for_theme(Theme::Ocean))
}

/// Paint `viewport` across the canvas, keeping pixels square.
pub fn render_viewport(
    canvas: &mut Canvas,
    ctx: &mut RenderContext<'_>,
    viewport: Viewport,
) -> Result<()> {
    let palette = ctx.palette();
    let offset = ctx.rng().gen_range(0..palette.len());

    let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
    let scale = viewport.span / w;

    for y in 0..canvas.height() {
        ctx.checkpoint()?;
        let im = viewport.centre.1 + (f64::from(y) + 0.5 - h / 2.0) * scale;
        for x in 0..canvas.width() {
            let re = viewport.centre.0 + (f64::from(x) + 0.5 - w / 2.0) * scale;
            let colour = match viewport.escape_time((re, im)) {
                Some(iterations) => palette.cycle(iterations + offset),
                None => Colour::BLACK,
            };
            canvas.put(x.into(), y.into(), colour);
        }
    }
    Ok(())
}
