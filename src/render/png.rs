//! PNG output for rendered canvases.
//!
//! Converts canvases to 8-bit RGB PNG files with optional integer scaling.

use std::path::Path;

use image::RgbImage;

use crate::error::{ArtError, Result};

use super::Canvas;

/// Largest width or height a stored (scaled) image may have.
pub const MAX_OUTPUT_DIMENSION: u32 = 16_384;

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The rendered canvas to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    let scaled = scale_pixels(canvas, scale).ok_or_else(|| ArtError::StorageFailure {
        path: path.to_path_buf(),
        message: format!(
            "{}x{} at scale {} exceeds {}px per side",
            canvas.width(),
            canvas.height(),
            scale,
            MAX_OUTPUT_DIMENSION
        ),
    })?;

    let img = RgbImage::from_raw(scaled.width(), scaled.height(), scaled.to_rgb_buffer())
        .ok_or_else(|| ArtError::StorageFailure {
            path: path.to_path_buf(),
            message: "Pixel buffer does not match canvas size".to_string(),
        })?;

    img.save(path).map_err(|e| ArtError::StorageFailure {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Scale a canvas by an integer factor.
///
/// Uses nearest-neighbour scaling so blocks stay crisp. Returns `None` when
/// either scaled side would exceed [`MAX_OUTPUT_DIMENSION`].
pub fn scale_pixels(canvas: &Canvas, scale: u32) -> Option<Canvas> {
    if scale <= 1 {
        return Some(canvas.clone());
    }

    let width = canvas.width().checked_mul(scale)?;
    let height = canvas.height().checked_mul(scale)?;
    if width > MAX_OUTPUT_DIMENSION || height > MAX_OUTPUT_DIMENSION {
        return None;
    }

    let mut scaled = Canvas::new(width, height, Default::default());

    for (y, row) in canvas.rows().enumerate() {
        for (x, &colour) in row.iter().enumerate() {
            let x0 = x as i64 * i64::from(scale);
            let y0 = y as i64 * i64::from(scale);
            for sy in 0..i64::from(scale) {
                scaled.fill_span(y0 + sy, x0, x0 + i64::from(scale), colour);
            }
        }
    }

    Some(scaled)
}
