//! Canvas - the owned pixel buffer a single render writes into.

use crate::types::Colour;

/// A width x height grid of RGB pixels.
///
/// Every pixel starts as the background colour, so a canvas never holds
/// an unset pixel. Writes outside the grid are clipped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Pixel grid, row-major (`pixels[y * width + x]`).
    pixels: Vec<Colour>,

    /// Width in pixels.
    width: u32,

    /// Height in pixels.
    height: u32,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            pixels: vec![background; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Set a pixel; coordinates outside the canvas are ignored.
    pub fn put(&mut self, x: i64, y: i64, colour: Colour) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let index = self.index(x as u32, y as u32);
        self.pixels[index] = colour;
    }

    /// Fill a horizontal run `[x0, x1)` on row `y`, clipped.
    pub fn fill_span(&mut self, y: i64, x0: i64, x1: i64, colour: Colour) {
        if y < 0 || y >= i64::from(self.height) {
            return;
        }
        let start = x0.clamp(0, i64::from(self.width)) as u32;
        let end = x1.clamp(0, i64::from(self.width)) as u32;
        if start >= end {
            return;
        }
        let row = self.index(0, y as u32);
        self.pixels[row + start as usize..row + end as usize].fill(colour);
    }

    /// Fill the whole canvas.
    pub fn fill(&mut self, colour: Colour) {
        self.pixels.fill(colour);
    }

    /// Flat row-major view of the pixels.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Colour]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Convert to a flat RGB buffer (for image output).
    pub fn to_rgb_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 3);
        for colour in &self.pixels {
            buffer.extend_from_slice(&colour.to_rgb());
        }
        buffer
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
