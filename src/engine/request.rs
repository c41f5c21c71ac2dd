//! Generation requests and dimension validation.

use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};

/// Style requested when the caller does not name one.
pub const DEFAULT_STYLE: &str = "abstract";

/// Palette requested when the caller does not name one.
pub const DEFAULT_PALETTE: &str = "vibrant";

/// Theme requested when the caller does not name one.
pub const DEFAULT_THEME: &str = "nature";

/// Canvas edge used when the caller does not give one.
pub const DEFAULT_SIZE: i64 = 512;

/// A request as it arrives from the calling layer.
///
/// Names are kept as free text; the engine resolves them with fallbacks
/// rather than rejecting unknown values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtRequest {
    pub style: String,
    pub palette: String,
    pub theme: String,
    pub width: i64,
    pub height: i64,
    /// Makes the render reproducible when set.
    pub seed: Option<u64>,
}

impl Default for ArtRequest {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            palette: DEFAULT_PALETTE.to_string(),
            theme: DEFAULT_THEME.to_string(),
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            seed: None,
        }
    }
}

impl ArtRequest {
    pub fn new(
        style: impl Into<String>,
        palette: impl Into<String>,
        theme: impl Into<String>,
        width: i64,
        height: i64,
    ) -> Self {
        Self {
            style: style.into(),
            palette: palette.into(),
            theme: theme.into(),
            width,
            height,
            seed: None,
        }
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Validated canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Validate a width/height pair against `1..=max`.
    pub fn new(width: i64, height: i64, max: u32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(ArtError::InvalidDimensions {
                width,
                height,
                help: Some("Width and height must both be positive".to_string()),
            });
        }
        let limit = i64::from(max);
        if width > limit || height > limit {
            return Err(ArtError::InvalidDimensions {
                width,
                height,
                help: Some(format!("Width and height are limited to {}", max)),
            });
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }
}
