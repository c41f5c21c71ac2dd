//! Pixel style - scenes built from solid 10x10 blocks.
//!
//! All drawing happens in block coordinates, so every block (including the
//! partial blocks along the right and bottom edges) ends up one solid colour.

use rand::seq::index;
use rand::Rng;

use crate::error::Result;
use crate::types::{Colour, Style, Theme};

use super::raster::fill_rect;
use super::{Canvas, RenderContext, RendererRegistry};

/// Edge length of a block in pixels.
pub const BLOCK: u32 = 10;

const STARS: usize = 100;
const PLANETS: usize = 3;

pub(super) fn register(registry: &mut RendererRegistry) {
    let style = Style::Pixel;
    registry.register(style, Theme::Nature, Colour::WHITE, nature);
    registry.register(style, Theme::Space, Colour::BLACK, space);
    registry.register(style, Theme::Urban, Colour::WHITE, urban);
    registry.register(style, Theme::Abstract, Colour::WHITE, abstract_blocks);
    registry.register(style, Theme::Ocean, Colour::WHITE, ocean);
}

/// Number of blocks needed to cover `pixels`.
fn blocks(pixels: u32) -> u32 {
    pixels.div_ceil(BLOCK)
}

/// Block grid dimensions (columns, rows) of a canvas.
pub fn grid(canvas: &Canvas) -> (u32, u32) {
    (blocks(canvas.width()), blocks(canvas.height()))
}

/// Paint one block, clipped to the canvas.
fn fill_block(canvas: &mut Canvas, col: i64, row: i64, colour: Colour) {
    let size = i64::from(BLOCK);
    fill_rect(canvas, col * size, row * size, (col + 1) * size, (row + 1) * size, colour);
}

/// Random pixel height in `[lo * h, hi * h]`, truncated like the block maths.
fn random_height(ctx: &mut RenderContext<'_>, height: u32, lo: f64, hi: f64) -> u32 {
    let min = (f64::from(height) * lo) as u32;
    let max = (f64::from(height) * hi) as u32;
    ctx.rng().gen_range(min..=max)
}

/// A tree standing on the ground line, in block units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tree {
    left: i64,
    cols: i64,
    rows: u32,
}

/// Size a tree centred on `col`: 20-50% of the canvas tall, 2-4 blocks wide.
fn plant_tree(ctx: &mut RenderContext<'_>, col: u32, height: u32) -> Tree {
    let rows = blocks(random_height(ctx, height, 0.2, 0.5));
    let cols = i64::from(ctx.rng().gen_range(2..=4u32));
    Tree {
        left: i64::from(col) - cols / 2,
        cols,
        rows,
    }
}

/// Speckled ground along the bottom 30% with occasional trees or mountains.
pub fn nature(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (cols, rows) = grid(canvas);
    let ground_row = rows * 7 / 10;

    for col in 0..cols {
        ctx.checkpoint()?;
        for row in ground_row..rows {
            let colour = ctx.pick();
            fill_block(canvas, col.into(), row.into(), colour);
        }

        if !ctx.chance(0.3) {
            continue;
        }
        let tree = plant_tree(ctx, col, canvas.height());
        let colour = ctx.pick();

        for row in ground_row.saturating_sub(tree.rows)..ground_row {
            for c in tree.left..tree.left + tree.cols {
                if c >= 0 && c < i64::from(cols) {
                    fill_block(canvas, c, row.into(), colour);
                }
            }
        }
    }
    Ok(())
}

/// Black sky, three block-circle planets and exactly one hundred white stars.
///
/// Stars are drawn last and on distinct blocks, so every star survives.
pub fn space(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (cols, rows) = grid(canvas);
    canvas.fill(Colour::BLACK);

    for _ in 0..PLANETS {
        ctx.checkpoint()?;
        let radius = i64::from(ctx.rng().gen_range(3..=5u32));
        let cx = i64::from(ctx.rng().gen_range(0..cols));
        let cy = i64::from(ctx.rng().gen_range(0..rows));
        let colour = ctx.pick();

        for row in (cy - radius).max(0)..(cy + radius + 1).min(rows.into()) {
            for col in (cx - radius).max(0)..(cx + radius + 1).min(cols.into()) {
                let (dx, dy) = (col - cx, row - cy);
                if dx * dx + dy * dy <= radius * radius {
                    fill_block(canvas, col, row, colour);
                }
            }
        }
    }

    ctx.checkpoint()?;
    let cells = cols as usize * rows as usize;
    for cell in index::sample(ctx.rng(), cells, STARS.min(cells)) {
        let (col, row) = (cell % cols as usize, cell / cols as usize);
        fill_block(canvas, col as i64, row as i64, Colour::WHITE);
    }
    Ok(())
}

/// Solid sky over the top 40%, then 3-block buildings with lit and unlit windows.
pub fn urban(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (cols, rows) = grid(canvas);
    let sky_rows = blocks(canvas.height() * 4 / 10);

    let sky = ctx.pick();
    for row in 0..sky_rows.min(rows) {
        for col in 0..cols {
            fill_block(canvas, col.into(), row.into(), sky);
        }
    }

    for col in (0..cols).step_by(3) {
        ctx.checkpoint()?;
        let building_rows = blocks(random_height(ctx, canvas.height(), 0.3, 0.7));
        let colour = ctx.pick();
        let bottom = (sky_rows + building_rows).min(rows);

        for row in sky_rows..bottom {
            for c in col..(col + 3).min(cols) {
                fill_block(canvas, c.into(), row.into(), colour);
            }
        }

        let window_col = col + 1;
        if window_col >= cols {
            continue;
        }
        for row in (sky_rows + 1..sky_rows + building_rows).step_by(2) {
            let window = if ctx.chance(0.7) {
                Colour::YELLOW
            } else {
                Colour::GRAY
            };
            fill_block(canvas, window_col.into(), row.into(), window);
        }
    }
    Ok(())
}

/// Every block an independent palette colour.
pub fn abstract_blocks(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (cols, rows) = grid(canvas);
    for col in 0..cols {
        ctx.checkpoint()?;
        for row in 0..rows {
            let colour = ctx.pick();
            fill_block(canvas, col.into(), row.into(), colour);
        }
    }
    Ok(())
}

/// Horizontal bands, one colour per block row, shifted along a sine wave.
pub fn ocean(canvas: &mut Canvas, ctx: &mut RenderContext<'_>) -> Result<()> {
    let (cols, rows) = grid(canvas);
    let size = i64::from(BLOCK);

    for row in 0..rows {
        ctx.checkpoint()?;
        let colour = ctx.pick();
        let y = i64::from(row * BLOCK);
        let offset = (10.0 * (y as f64 * 0.05).sin()) as i64;

        // One block of overhang on each side keeps the row covered after the shift.
        for col in -1..=i64::from(cols) {
            let x = col * size + offset;
            fill_rect(canvas, x, y, x + size, y + size, colour);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CancelFlag, RenderFn};
    use crate::types::{Palette, PaletteCatalog};

    fn run(render: RenderFn, palette: &str, w: u32, h: u32, seed: u64) -> Canvas {
        let catalog = PaletteCatalog::builtin();
        run_with(render, catalog.palette_for(palette), w, h, seed)
    }

    fn run_with(render: RenderFn, palette: &Palette, w: u32, h: u32, seed: u64) -> Canvas {
        let mut ctx = RenderContext::new(palette, Some(seed), CancelFlag::new());
        let mut canvas = Canvas::new(w, h, Colour::WHITE);
        render(&mut canvas, &mut ctx).unwrap();
        canvas
    }

    /// Solid colour of the block at (col, row).
    fn block(canvas: &Canvas, col: u32, row: u32) -> Colour {
        canvas.get(col * BLOCK, row * BLOCK).unwrap()
    }

    /// Colour of every block, or `None` for a block that is not solid.
    fn block_colours(canvas: &Canvas) -> Vec<Option<Colour>> {
        let (cols, rows) = grid(canvas);
        let mut out = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                let first = canvas.get(col * BLOCK, row * BLOCK).unwrap();
                let mut solid = true;
                for y in row * BLOCK..((row + 1) * BLOCK).min(canvas.height()) {
                    for x in col * BLOCK..((col + 1) * BLOCK).min(canvas.width()) {
                        solid &= canvas.get(x, y) == Some(first);
                    }
                }
                out.push(solid.then_some(first));
            }
        }
        out
    }

    #[test]
    fn test_blocks_are_solid_with_partial_edges() {
        for render in [nature, space, urban, abstract_blocks, ocean] {
            for seed in 0..4 {
                let canvas = run(render, "vibrant", 127, 93, seed);
                assert!(block_colours(&canvas).iter().all(Option::is_some));
            }
        }
    }

    #[test]
    fn test_grid_rounds_up() {
        let canvas = Canvas::new(101, 9, Colour::WHITE);
        assert_eq!(grid(&canvas), (11, 1));
    }

    #[test]
    fn test_space_has_exactly_one_hundred_stars() {
        let canvas = run(space, "monochrome", 200, 200, 42);
        let stars = block_colours(&canvas)
            .into_iter()
            .filter(|c| *c == Some(Colour::WHITE))
            .count();
        assert_eq!(stars, 100);
    }

    #[test]
    fn test_space_tiny_canvas_caps_stars() {
        let canvas = run(space, "monochrome", 20, 20, 1);
        assert!(canvas.pixels().iter().all(|&c| c == Colour::WHITE));
    }

    #[test]
    fn test_abstract_uses_only_palette() {
        let catalog = PaletteCatalog::builtin();
        let palette = catalog.palette_for("earthy");
        let canvas = run(abstract_blocks, "earthy", 64, 64, 8);
        assert!(canvas.pixels().iter().all(|c| palette.colours().contains(c)));
    }

    #[test]
    fn test_ocean_rows_are_uniform() {
        let canvas = run(ocean, "ocean", 90, 60, 2);
        for row in canvas.rows() {
            assert!(row.iter().all(|&c| c == row[0]));
        }
    }

    #[test]
    fn test_urban_sky_is_one_colour() {
        let canvas = run(urban, "pastel", 200, 200, 6);
        let sky = canvas.get(0, 0).unwrap();
        for y in 0..80 {
            for x in 0..200 {
                assert_eq!(canvas.get(x, y), Some(sky));
            }
        }
    }

    #[test]
    fn test_urban_windows_are_lit_or_unlit() {
        let canvas = run(urban, "earthy", 300, 300, 12);
        let windows = canvas
            .pixels()
            .iter()
            .filter(|&&c| c == Colour::YELLOW || c == Colour::GRAY)
            .count();
        assert!(windows > 0);
    }

    #[test]
    fn test_urban_windows_follow_building_middle_column() {
        let is_window = |c: Colour| c == Colour::YELLOW || c == Colour::GRAY;

        for seed in 0..6 {
            // Earthy has no white, yellow or gray, so buildings and windows stand out.
            let canvas = run(urban, "earthy", 300, 300, seed);
            let (cols, rows) = grid(&canvas);
            let sky_rows = blocks(300 * 4 / 10);

            for row in 0..rows {
                for col in 0..cols {
                    if is_window(block(&canvas, col, row)) {
                        assert_eq!(col % 3, 1, "seed {} block ({}, {})", seed, col, row);
                        assert!(row > sky_rows && (row - sky_rows - 1) % 2 == 0);
                    }
                }
            }

            for left in (0..cols).step_by(3) {
                let body = block(&canvas, left, sky_rows);
                let depth = (sky_rows..rows)
                    .take_while(|&row| block(&canvas, left, row) == body)
                    .count() as u32;
                assert!(depth > 0);

                for row in sky_rows..sky_rows + depth {
                    let middle = block(&canvas, left + 1, row);
                    if row > sky_rows && (row - sky_rows - 1) % 2 == 0 {
                        assert!(is_window(middle), "seed {} block ({}, {})", seed, left + 1, row);
                    } else {
                        assert_eq!(middle, body);
                    }
                }
            }
        }
    }

    #[test]
    fn test_trees_are_two_to_four_blocks_wide() {
        let catalog = PaletteCatalog::builtin();
        let palette = catalog.palette_for("vibrant");
        for seed in 0..20 {
            let mut ctx = RenderContext::new(palette, Some(seed), CancelFlag::new());
            let tree = plant_tree(&mut ctx, 7, 100);

            assert!((2..=4).contains(&tree.cols));
            assert_eq!(tree.left, 7 - tree.cols / 2);
            assert!((2..=5).contains(&tree.rows));
        }
    }

    #[test]
    fn test_trees_stand_strictly_above_ground() {
        let leaf = Colour::rgb(34, 139, 34);
        let palette = Palette::new("leaf", vec![leaf]).unwrap();

        for seed in 0..6 {
            let canvas = run_with(nature, &palette, 300, 200, seed);
            let (cols, rows) = grid(&canvas);
            let ground_row = rows * 7 / 10;

            for col in 0..cols {
                // Ground is solid; anything above it hangs down from the ground line.
                for row in ground_row..rows {
                    assert_eq!(block(&canvas, col, row), leaf);
                }
                let height = (0..ground_row)
                    .rev()
                    .take_while(|&row| block(&canvas, col, row) == leaf)
                    .count() as u32;
                for row in 0..ground_row - height {
                    assert_eq!(block(&canvas, col, row), Colour::WHITE, "seed {}", seed);
                }
                assert!(height <= blocks(200 / 2));
            }
        }
    }

    #[test]
    fn test_nature_ground_is_covered() {
        let catalog = PaletteCatalog::builtin();
        let palette = catalog.palette_for("ocean");
        let canvas = run(nature, "ocean", 100, 100, 4);
        for y in 70..100 {
            for x in 0..100 {
                assert!(palette.colours().contains(&canvas.get(x, y).unwrap()));
            }
        }
    }
}
