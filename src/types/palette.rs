//! Named colour palettes and the catalog that resolves them.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{ArtError, Result};

use super::Colour;

/// Name of the palette every unknown lookup falls back to.
pub const FALLBACK_PALETTE: &str = "vibrant";

/// An ordered, immutable collection of colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Palette name
    pub name: String,

    colours: Arc<[Colour]>,
}

impl Palette {
    /// Create a palette. Returns `None` when `colours` is empty.
    pub fn new(name: impl Into<String>, colours: Vec<Colour>) -> Option<Self> {
        if colours.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            colours: colours.into(),
        })
    }

    /// The colours in palette order.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Always false: palettes are never empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Get a colour by index, wrapping around the palette.
    pub fn cycle(&self, index: usize) -> Colour {
        self.colours[index % self.colours.len()]
    }
}

/// The builtin palettes, in listing order.
fn builtin_palettes() -> Vec<(&'static str, Vec<Colour>)> {
    vec![
        (
            "vibrant",
            vec![
                Colour::rgb(255, 0, 0),
                Colour::rgb(0, 255, 0),
                Colour::rgb(0, 0, 255),
                Colour::rgb(255, 255, 0),
                Colour::rgb(255, 0, 255),
                Colour::rgb(0, 255, 255),
            ],
        ),
        (
            "pastel",
            vec![
                Colour::rgb(255, 182, 193),
                Colour::rgb(173, 216, 230),
                Colour::rgb(152, 251, 152),
                Colour::rgb(255, 239, 213),
                Colour::rgb(221, 160, 221),
            ],
        ),
        (
            "monochrome",
            vec![
                Colour::rgb(0, 0, 0),
                Colour::rgb(50, 50, 50),
                Colour::rgb(100, 100, 100),
                Colour::rgb(150, 150, 150),
                Colour::rgb(200, 200, 200),
            ],
        ),
        (
            "earthy",
            vec![
                Colour::rgb(121, 85, 72),
                Colour::rgb(109, 76, 65),
                Colour::rgb(141, 110, 99),
                Colour::rgb(188, 170, 164),
                Colour::rgb(215, 204, 200),
            ],
        ),
        (
            "ocean",
            vec![
                Colour::rgb(0, 105, 148),
                Colour::rgb(0, 119, 190),
                Colour::rgb(0, 167, 186),
                Colour::rgb(0, 150, 199),
                Colour::rgb(0, 180, 216),
            ],
        ),
    ]
}

/// Immutable set of palettes, built once and shared by every render.
#[derive(Debug, Clone)]
pub struct PaletteCatalog {
    palettes: BTreeMap<String, Palette>,
    /// Builtins first, then custom palettes in insertion order.
    order: Vec<String>,
    fallback: Palette,
}

impl PaletteCatalog {
    /// Catalog holding only the builtin palettes.
    pub fn builtin() -> Self {
        let mut palettes = BTreeMap::new();
        let mut order = Vec::new();
        for (name, colours) in builtin_palettes() {
            if let Some(palette) = Palette::new(name, colours) {
                order.push(name.to_string());
                palettes.insert(name.to_string(), palette);
            }
        }
        let fallback = palettes[FALLBACK_PALETTE].clone();
        Self {
            palettes,
            order,
            fallback,
        }
    }

    /// Builtins plus custom palettes.
    ///
    /// Custom palettes may not reuse a builtin name and may not be empty.
    pub fn with_custom<I>(custom: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<Colour>)>,
    {
        let mut catalog = Self::builtin();
        for (name, colours) in custom {
            if catalog.palettes.contains_key(&name) {
                return Err(ArtError::Config {
                    message: format!("Palette '{}' is already defined", name),
                    help: Some(
                        "Builtin palettes cannot be redefined; pick another name".to_string(),
                    ),
                });
            }
            let Some(palette) = Palette::new(name.clone(), colours) else {
                return Err(ArtError::Config {
                    message: format!("Palette '{}' has no colours", name),
                    help: None,
                });
            };
            catalog.order.push(name.clone());
            catalog.palettes.insert(name, palette);
        }
        Ok(catalog)
    }

    /// Look up a palette, falling back to "vibrant" for unknown names.
    pub fn palette_for(&self, name: &str) -> &Palette {
        self.palettes.get(name).unwrap_or(&self.fallback)
    }

    /// Look up a palette without falling back.
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.get(name)
    }

    /// Check whether `name` resolves to itself rather than the fallback.
    pub fn contains(&self, name: &str) -> bool {
        self.palettes.contains_key(name)
    }

    /// Iterate palettes in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.order.iter().filter_map(|name| self.palettes.get(name))
    }

    /// Get the number of palettes.
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Always false: the builtins are always present.
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

impl Default for PaletteCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_names_in_order() {
        let catalog = PaletteCatalog::builtin();
        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["vibrant", "pastel", "monochrome", "earthy", "ocean"]);
    }

    #[test]
    fn test_palette_sizes() {
        let catalog = PaletteCatalog::builtin();
        assert_eq!(catalog.palette_for("vibrant").len(), 6);
        assert_eq!(catalog.palette_for("monochrome").len(), 5);
    }

    #[test]
    fn test_unknown_falls_back_to_vibrant() {
        let catalog = PaletteCatalog::builtin();
        assert_eq!(catalog.palette_for("neon"), catalog.palette_for("vibrant"));
        assert_eq!(catalog.palette_for(""), catalog.palette_for("vibrant"));
        assert!(!catalog.contains("neon"));
    }

    #[test]
    fn test_ocean_palette_values() {
        let catalog = PaletteCatalog::builtin();
        assert_eq!(
            catalog.palette_for("ocean").colours()[0],
            Colour::rgb(0, 105, 148)
        );
    }

    #[test]
    fn test_custom_palette_added() {
        let catalog = PaletteCatalog::with_custom(vec![(
            "sunset".to_string(),
            vec![Colour::rgb(255, 94, 91), Colour::rgb(255, 237, 102)],
        )])
        .unwrap();

        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.palette_for("sunset").len(), 2);
        assert_eq!(catalog.iter().last().unwrap().name, "sunset");
    }

    #[test]
    fn test_custom_cannot_redefine_builtin() {
        let result =
            PaletteCatalog::with_custom(vec![("vibrant".to_string(), vec![Colour::BLACK])]);
        assert!(matches!(result, Err(ArtError::Config { .. })));
    }

    #[test]
    fn test_custom_cannot_be_empty() {
        let result = PaletteCatalog::with_custom(vec![("void".to_string(), vec![])]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cycle_wraps() {
        let palette = Palette::new("two", vec![Colour::BLACK, Colour::WHITE]).unwrap();
        assert_eq!(palette.cycle(0), Colour::BLACK);
        assert_eq!(palette.cycle(3), Colour::WHITE);
    }
}
