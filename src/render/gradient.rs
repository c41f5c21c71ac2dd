//! Gradient style - continuous colour fields blended between two palette colours.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::types::{Colour, Style, Theme};

use super::{Canvas, RenderContext, RendererRegistry};

const MAX_GLOWS: usize = 5;

pub(super) fn register(registry: &mut RendererRegistry) {
    let style = Style::Gradient;
    registry.register(style, Theme::Nature, Colour::BLACK, nature);
    registry.register(style, Theme::Space, Colour::BLACK, space);
    registry.register(style, Theme::Urban, Colour::BLACK, urban);
    registry.register(style, Theme::Abstract, Colour::BLACK, abstract_field);
    registry.register(style, Theme::Ocean, Colour::BLACK, ocean);
}

/// Pick two distinct palette colours (the same colour twice only if the
/// palette has nothing else to offer).
fn colour_pair(ctx: &mut RenderContext<'_>) -> (Colour, Colour) {
    let first = ctx.pick();
    let others: Vec<Colour> = ctx
        .palette()
        .colours()
        .iter()
        .copied()
        .filter(|&c| c != first)
        .collect();
    let second = others.choose(ctx.rng()).copied().unwrap_or(first);
    (first, second)
}

/// Paint every pixel from `shade(x, y)`, checking for cancellation per row.
fn paint<F>(canvas: &mut Canvas, ctx: &RenderContext<'_>, mut shade: F) -> Result<()>
where
    F: FnMut(u32, u32) -> Colour,
{
    for y in 0..canvas.height() {
        ctx.checkpoint()?;
        for x in 0..canvas.width() {
            canvas.put(x.into(), y.into(), shade(x, y));
        }
    }
    Ok(())
}

/// Radial blend outward from the canvas centre.
pub fn nature(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (c1, c2) = colour_pair(ctx);
    let cx = f64::from(canvas.width() / 2);
    let cy = f64::from(canvas.height() / 2);
    let max_dist = (cx * cx + cy * cy).sqrt();

    paint(canvas, ctx, |x, y| {
        let (dx, dy) = (f64::from(x) - cx, f64::from(y) - cy);
        let ratio = if max_dist > 0.0 {
            (dx * dx + dy * dy).sqrt() / max_dist
        } else {
            0.0
        };
        c2.blend(c1, ratio)
    })
}

/// Additive glows on black, one per distinct palette colour (at most five).
pub fn space(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    canvas.fill(Colour::BLACK);

    let (w, h) = (i64::from(canvas.width()), i64::from(canvas.height()));
    let centres: Vec<(i64, i64)> = (0..MAX_GLOWS)
        .map(|_| (ctx.rng().gen_range(0..=w), ctx.rng().gen_range(0..=h)))
        .collect();
    let palette = ctx.palette();
    let colours: Vec<Colour> = palette
        .colours()
        .choose_multiple(ctx.rng(), MAX_GLOWS.min(palette.len()))
        .copied()
        .collect();

    let radius = w / 3;
    if radius == 0 {
        return Ok(());
    }
    let r = radius as f64;

    for ((cx, cy), colour) in centres.into_iter().zip(colours) {
        ctx.checkpoint()?;
        for y in (cy - radius).max(0)..(cy + radius).min(h) {
            for x in (cx - radius).max(0)..(cx + radius).min(w) {
                let (dx, dy) = ((x - cx) as f64, (y - cy) as f64);
                let dist = (dx * dx + dy * dy).sqrt();
                if dist >= r {
                    continue;
                }
                let existing = canvas
                    .get(x as u32, y as u32)
                    .unwrap_or(Colour::BLACK);
                canvas.put(x, y, existing.saturating_add(colour.scale(1.0 - dist / r)));
            }
        }
    }
    Ok(())
}

/// Five to ten horizontal bands with per-pixel brightness noise.
pub fn urban(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (w, h) = (canvas.width(), canvas.height());
    let bands = ctx.rng().gen_range(5..=10u32);
    let band_height = (h / bands).max(1);

    for band in 0..bands {
        let start = band * band_height;
        let end = if band == bands - 1 {
            h
        } else {
            ((band + 1) * band_height).min(h)
        };
        let colour = ctx.pick();

        for y in start..end {
            ctx.checkpoint()?;
            for x in 0..w {
                let noise = ctx.rng().gen_range(-20..=20);
                canvas.put(x.into(), y.into(), colour.offset(noise));
            }
        }
    }
    Ok(())
}

/// Separable `sin(x)·cos(y)` field; no randomness beyond the colour pair.
pub fn abstract_field(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (c1, c2) = colour_pair(ctx);
    paint(canvas, ctx, |x, y| noise_field(c1, c2, x, y))
}

/// Colour of the abstract field at `(x, y)`.
fn noise_field(c1: Colour, c2: Colour, x: u32, y: u32) -> Colour {
    let t = (f64::from(x) * 0.01).sin() * (f64::from(y) * 0.01).cos() * 0.5 + 0.5;
    c1.blend(c2, t)
}

/// Horizontal swell with a slow sideways drift.
pub fn ocean(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (c1, c2) = colour_pair(ctx);
    paint(canvas, ctx, |x, y| {
        let wave = (f64::from(y) * 0.05).sin() * 0.5 + 0.5;
        let drift = (f64::from(x) * 0.01).sin() * 0.2;
        c1.blend(c2, (wave + drift).clamp(0.0, 1.0))
    })
}
