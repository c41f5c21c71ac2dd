//! Style and theme selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};

/// Top-level rendering algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Geometric,
    Pixel,
    Gradient,
    Fractal,
    /// Known to the rest of the service but has no renderer.
    Expressionist,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Geometric,
        Style::Pixel,
        Style::Gradient,
        Style::Fractal,
        Style::Expressionist,
    ];

    /// Lowercase name used in requests and filenames.
    pub fn name(self) -> &'static str {
        match self {
            Style::Geometric => "geometric",
            Style::Pixel => "pixel",
            Style::Gradient => "gradient",
            Style::Fractal => "fractal",
            Style::Expressionist => "expressionist",
        }
    }

    /// Look up a style by name; `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Relative rendering complexity in [0, 1].
    pub fn complexity(self) -> f32 {
        match self {
            Style::Geometric => 0.3,
            Style::Pixel => 0.4,
            Style::Gradient => 0.2,
            Style::Fractal => 0.8,
            Style::Expressionist => 0.6,
        }
    }

    /// Whether a renderer exists for this style.
    pub fn is_implemented(self) -> bool {
        !matches!(self, Style::Expressionist)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| ArtError::Config {
            message: format!("Unknown style: {}", s),
            help: Some("Use geometric, pixel, gradient or fractal".to_string()),
        })
    }
}

/// Compositional motif within a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Nature,
    Space,
    Urban,
    Abstract,
    Ocean,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Nature,
        Theme::Space,
        Theme::Urban,
        Theme::Abstract,
        Theme::Ocean,
    ];

    /// Lowercase name used in requests and filenames.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Nature => "nature",
            Theme::Space => "space",
            Theme::Urban => "urban",
            Theme::Abstract => "abstract",
            Theme::Ocean => "ocean",
        }
    }

    /// Look up a theme by name; `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Resolve a theme name. Unknown names take the ocean branch.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Theme::Ocean)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
