//! Geometric style - compositions of filled vector primitives on white.

use rand::Rng;

use crate::error::Result;
use crate::types::{Colour, Style, Theme};

use super::raster::{draw_line, fill_circle, fill_ellipse, fill_polygon, fill_rect, Point};
use super::{Canvas, RenderContext, RendererRegistry};

/// Cell size of the urban grid.
pub const URBAN_CELL: i64 = 30;

pub(super) fn register(registry: &mut RendererRegistry) {
    let style = Style::Geometric;
    registry.register(style, Theme::Nature, Colour::WHITE, nature);
    registry.register(style, Theme::Space, Colour::WHITE, space);
    registry.register(style, Theme::Urban, Colour::WHITE, urban);
    registry.register(style, Theme::Abstract, Colour::WHITE, abstract_shapes);
    registry.register(style, Theme::Ocean, Colour::WHITE, ocean);
}

fn extent(canvas: &Canvas) -> (i64, i64) {
    (i64::from(canvas.width()), i64::from(canvas.height()))
}

const TRIANGLES: usize = 20;
const SQUARES: usize = 30;

/// Axis-aligned square: top-left corner and side length in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Square {
    x: i64,
    y: i64,
    side: i64,
}

/// Triangles for the nature theme, each jittered within 100px of a random anchor.
fn nature_triangles(
    ctx: &mut RenderContext<'_>,
    w: i64,
    h: i64,
) -> Result<Vec<([Point; 3], Colour)>> {
    let mut triangles = Vec::with_capacity(TRIANGLES);
    for _ in 0..TRIANGLES {
        ctx.checkpoint()?;
        let rng = ctx.rng();
        let (x1, y1) = (rng.gen_range(0..=w), rng.gen_range(0..=h));
        let (x2, y2) = (x1 + rng.gen_range(-100..=100), y1 + rng.gen_range(-100..=100));
        let (x3, y3) = (x1 + rng.gen_range(-100..=100), y1 + rng.gen_range(-100..=100));
        let colour = ctx.pick();
        let points = [
            (x1 as f64, y1 as f64),
            (x2 as f64, y2 as f64),
            (x3 as f64, y3 as f64),
        ];
        triangles.push((points, colour));
    }
    Ok(triangles)
}

/// 20 triangles jittered around random anchors.
pub fn nature(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (w, h) = extent(canvas);
    for (points, colour) in nature_triangles(ctx, w, h)? {
        fill_polygon(canvas, &points, colour);
    }
    Ok(())
}

/// Squares for the space theme, anywhere on the canvas.
fn space_squares(ctx: &mut RenderContext<'_>, w: i64, h: i64) -> Result<Vec<(Square, Colour)>> {
    let mut squares = Vec::with_capacity(SQUARES);
    for _ in 0..SQUARES {
        ctx.checkpoint()?;
        let rng = ctx.rng();
        let (x, y) = (rng.gen_range(0..=w), rng.gen_range(0..=h));
        let side = rng.gen_range(5..=50);
        let colour = ctx.pick();
        squares.push((Square { x, y, side }, colour));
    }
    Ok(squares)
}

/// 30 scattered squares, 5-50px a side.
pub fn space(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (w, h) = extent(canvas);
    for (square, colour) in space_squares(ctx, w, h)? {
        let Square { x, y, side } = square;
        fill_rect(canvas, x, y, x + side, y + side, colour);
    }
    Ok(())
}

/// Fixed grid; each cell holds a rectangle or an ellipse 70% of the time.
pub fn urban(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (w, h) = extent(canvas);
    for x in (0..w).step_by(URBAN_CELL as usize) {
        ctx.checkpoint()?;
        for y in (0..h).step_by(URBAN_CELL as usize) {
            if !ctx.chance(0.7) {
                continue;
            }
            let rect = ctx.chance(0.5);
            let colour = ctx.pick();
            if rect {
                fill_rect(canvas, x, y, x + URBAN_CELL, y + URBAN_CELL, colour);
            } else {
                fill_ellipse(
                    canvas,
                    x as f64,
                    y as f64,
                    (x + URBAN_CELL) as f64,
                    (y + URBAN_CELL) as f64,
                    colour,
                );
            }
        }
    }
    Ok(())
}

/// 40 random rectangles, circles, lines and polygons.
pub fn abstract_shapes(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (w, h) = extent(canvas);
    for _ in 0..40 {
        ctx.checkpoint()?;
        let kind = ctx.rng().gen_range(0..4);
        let colour = ctx.pick();
        let rng = ctx.rng();

        match kind {
            0 => {
                let (x, y) = (rng.gen_range(0..=w), rng.gen_range(0..=h));
                let (rw, rh) = (rng.gen_range(20..=100), rng.gen_range(20..=100));
                fill_rect(canvas, x, y, x + rw, y + rh, colour);
            }
            1 => {
                let (x, y) = (rng.gen_range(0..=w), rng.gen_range(0..=h));
                let r = rng.gen_range(10..=50);
                fill_circle(canvas, x as f64, y as f64, r as f64, colour);
            }
            2 => {
                let from = (rng.gen_range(0..=w) as f64, rng.gen_range(0..=h) as f64);
                let to = (rng.gen_range(0..=w) as f64, rng.gen_range(0..=h) as f64);
                let width = rng.gen_range(1..=10);
                draw_line(canvas, from, to, width as f64, colour);
            }
            _ => {
                let count = rng.gen_range(3..=6);
                let points: Vec<Point> = (0..count)
                    .map(|_| (rng.gen_range(0..=w) as f64, rng.gen_range(0..=h) as f64))
                    .collect();
                fill_polygon(canvas, &points, colour);
            }
        }
    }
    Ok(())
}

/// Sine-displaced bands, one per 10px strip, each closed against the bottom edge.
pub fn ocean(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (w, h) = extent(canvas);
    for y in (0..h).step_by(10) {
        ctx.checkpoint()?;
        let rng = ctx.rng();
        let amplitude = rng.gen_range(5..=20) as f64;
        let frequency = rng.gen::<f64>() * 0.1;
        let phase = rng.gen::<f64>() * 10.0;

        let mut points: Vec<Point> = (0..w)
            .step_by(5)
            .map(|x| {
                let x = x as f64;
                (x, y as f64 + amplitude * (frequency * x + phase).sin())
            })
            .collect();
        points.push((w as f64, h as f64));
        points.push((0.0, h as f64));

        let colour = ctx.pick();
        fill_polygon(canvas, &points, colour);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CancelFlag, RenderFn};
    use crate::types::{Palette, PaletteCatalog};

    fn vibrant() -> Palette {
        PaletteCatalog::builtin().palette_for("vibrant").clone()
    }

    fn run(render: RenderFn, w: u32, h: u32, seed: u64) -> Canvas {
        let palette = vibrant();
        let mut ctx = RenderContext::new(&palette, Some(seed), CancelFlag::new());
        let mut canvas = Canvas::new(w, h, Colour::WHITE);
        render(&mut canvas, &mut ctx).unwrap();
        canvas
    }

    fn only_palette_or_white(canvas: &Canvas) -> bool {
        let palette = vibrant();
        canvas
            .pixels()
            .iter()
            .all(|c| *c == Colour::WHITE || palette.colours().contains(c))
    }

    #[test]
    fn test_every_theme_uses_palette_colours() {
        for render in [nature, space, urban, abstract_shapes, ocean] {
            let canvas = run(render, 120, 90, 11);
            assert!(only_palette_or_white(&canvas));
        }
    }

    #[test]
    fn test_ocean_paints_something() {
        let canvas = run(ocean, 100, 100, 3);
        let painted = canvas.pixels().iter().filter(|&&c| c != Colour::WHITE).count();
        assert!(painted > 5_000, "painted {}", painted);
    }

    #[test]
    fn test_urban_cells_are_single_shapes() {
        let canvas = run(urban, 300, 300, 5);

        for cy in 0..10u32 {
            for cx in 0..10u32 {
                let mut colours: Vec<Colour> = Vec::new();
                for y in cy * 30..(cy + 1) * 30 {
                    for x in cx * 30..(cx + 1) * 30 {
                        let c = canvas.get(x, y).unwrap();
                        if c != Colour::WHITE && !colours.contains(&c) {
                            colours.push(c);
                        }
                    }
                }
                assert!(colours.len() <= 1, "cell ({}, {}) has {:?}", cx, cy, colours);
            }
        }
    }

    fn context(palette: &Palette, seed: u64) -> RenderContext<'_> {
        RenderContext::new(palette, Some(seed), CancelFlag::new())
    }

    #[test]
    fn test_nature_draws_twenty_triangles() {
        let palette = vibrant();
        for seed in 0..8 {
            let triangles = nature_triangles(&mut context(&palette, seed), 200, 150).unwrap();
            assert_eq!(triangles.len(), 20);

            for ([anchor, a, b], _) in triangles {
                assert!((0.0..=200.0).contains(&anchor.0) && (0.0..=150.0).contains(&anchor.1));
                for (x, y) in [a, b] {
                    assert!((x - anchor.0).abs() <= 100.0 && (y - anchor.1).abs() <= 100.0);
                }
            }
        }
    }

    #[test]
    fn test_nature_render_matches_triangles() {
        let palette = vibrant();
        let triangles = nature_triangles(&mut context(&palette, 21), 160, 120).unwrap();

        let mut expected = Canvas::new(160, 120, Colour::WHITE);
        for (points, colour) in &triangles {
            fill_polygon(&mut expected, points, *colour);
        }
        assert_eq!(run(nature, 160, 120, 21), expected);
    }

    #[test]
    fn test_space_squares_are_five_to_fifty_pixels() {
        let palette = vibrant();
        for seed in 0..8 {
            let squares = space_squares(&mut context(&palette, seed), 300, 300).unwrap();
            assert_eq!(squares.len(), 30);
            assert!(squares.iter().all(|(sq, _)| (5..=50).contains(&sq.side)));
        }
    }

    #[test]
    fn test_space_square_bounds_on_single_colour() {
        let red = Colour::rgb(220, 20, 60);
        let palette = Palette::new("red", vec![red]).unwrap();
        let squares = space_squares(&mut context(&palette, 4), 400, 400).unwrap();

        let mut ctx = context(&palette, 4);
        let mut canvas = Canvas::new(400, 400, Colour::WHITE);
        space(&mut canvas, &mut ctx).unwrap();

        let covered = |x: i64, y: i64| {
            squares
                .iter()
                .any(|(sq, _)| x >= sq.x && x < sq.x + sq.side && y >= sq.y && y < sq.y + sq.side)
        };
        for y in 0..400u32 {
            for x in 0..400u32 {
                let painted = canvas.get(x, y) == Some(red);
                assert_eq!(painted, covered(x.into(), y.into()), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_tiny_canvas_tolerates_out_of_range_shapes() {
        for render in [nature, space, urban, abstract_shapes, ocean] {
            let canvas = run(render, 1, 1, 9);
            assert_eq!(canvas.size(), (1, 1));
        }
    }

    #[test]
    fn test_cancelled_render_stops() {
        let palette = vibrant();
        let flag = CancelFlag::new();
        flag.cancel();
        let mut ctx = RenderContext::new(&palette, Some(1), flag);
        let mut canvas = Canvas::new(50, 50, Colour::WHITE);

        assert!(abstract_shapes(&mut canvas, &mut ctx).is_err());
    }
}
