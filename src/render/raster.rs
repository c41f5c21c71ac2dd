//! Vector primitive rasterization.
//!
//! Coverage is decided by pixel centres: pixel `(x, y)` is covered when the
//! point `(x + 0.5, y + 0.5)` lies inside the shape. Shapes may extend past
//! the canvas; everything is clipped to the grid.

use crate::types::Colour;

use super::Canvas;

/// A point in canvas space.
pub type Point = (f64, f64);

/// Fill the half-open rectangle `[x0, x1) x [y0, y1)`.
///
/// Corners may be given in any order.
pub fn fill_rect(canvas: &mut Canvas, x0: i64, y0: i64, x1: i64, y1: i64, colour: Colour) {
    let (left, right) = (x0.min(x1), x0.max(x1));
    let (top, bottom) = (y0.min(y1), y0.max(y1));
    let top = top.max(0);
    let bottom = bottom.min(i64::from(canvas.height()));
    for y in top..bottom {
        canvas.fill_span(y, left, right, colour);
    }
}

/// Fill the ellipse inscribed in the box `[x0, x1) x [y0, y1)`.
pub fn fill_ellipse(canvas: &mut Canvas, x0: f64, y0: f64, x1: f64, y1: f64, colour: Colour) {
    let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    let (rx, ry) = ((x1 - x0).abs() / 2.0, (y1 - y0).abs() / 2.0);
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }

    let (top, bottom) = row_range(canvas, cy - ry, cy + ry);
    for y in top..bottom {
        let dy = (y as f64 + 0.5 - cy) / ry;
        if dy * dy > 1.0 {
            continue;
        }
        let dx = (1.0 - dy * dy).sqrt() * rx;
        let start = (cx - dx - 0.5).ceil() as i64;
        let end = (cx + dx - 0.5).floor() as i64 + 1;
        canvas.fill_span(y, start, end, colour);
    }
}

/// Fill a circle of radius `r` centred on `(cx, cy)`.
pub fn fill_circle(canvas: &mut Canvas, cx: f64, cy: f64, r: f64, colour: Colour) {
    fill_ellipse(canvas, cx - r, cy - r, cx + r, cy + r, colour);
}

/// Fill a simple or self-intersecting polygon using the even-odd rule.
///
/// Fewer than three points draw nothing.
pub fn fill_polygon(canvas: &mut Canvas, points: &[Point], colour: Colour) {
    if points.len() < 3 {
        return;
    }

    let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let (top, bottom) = row_range(canvas, min_y, max_y);

    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
    for y in top..bottom {
        let sy = y as f64 + 0.5;
        crossings.clear();

        for (i, &(xa, ya)) in points.iter().enumerate() {
            let (xb, yb) = points[(i + 1) % points.len()];
            if (ya <= sy) != (yb <= sy) {
                crossings.push(xa + (sy - ya) * (xb - xa) / (yb - ya));
            }
        }
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil() as i64;
            let end = (pair[1] - 0.5).ceil() as i64;
            canvas.fill_span(y, start, end, colour);
        }
    }
}

/// Draw a straight line with the given stroke width.
///
/// Strokes thinner than one pixel are widened to one pixel.
pub fn draw_line(canvas: &mut Canvas, from: Point, to: Point, width: f64, colour: Colour) {
    let half = (width / 2.0).max(0.5);
    let (top, bottom) = row_range(canvas, from.1.min(to.1) - half, from.1.max(to.1) + half);
    let left = ((from.0.min(to.0) - half).floor() as i64).max(0);
    let right = ((from.0.max(to.0) + half).ceil() as i64).min(i64::from(canvas.width()));

    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length_sq = dx * dx + dy * dy;

    for y in top..bottom {
        let py = y as f64 + 0.5;
        for x in left..right {
            let px = x as f64 + 0.5;
            let t = if length_sq == 0.0 {
                0.0
            } else {
                (((px - from.0) * dx + (py - from.1) * dy) / length_sq).clamp(0.0, 1.0)
            };
            let (nx, ny) = (from.0 + t * dx - px, from.1 + t * dy - py);
            if nx * nx + ny * ny <= half * half {
                canvas.put(x, y, colour);
            }
        }
    }
}

/// Rows whose centres can fall inside `[min_y, max_y]`, clipped to the canvas.
fn row_range(canvas: &Canvas, min_y: f64, max_y: f64) -> (i64, i64) {
    if !min_y.is_finite() || !max_y.is_finite() {
        return (0, 0);
    }
    let top = (min_y.floor() as i64).max(0);
    let bottom = (max_y.ceil() as i64 + 1).min(i64::from(canvas.height()));
    (top, bottom.max(top))
}
