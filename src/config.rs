//! Engine configuration (artlens.yaml) parsing.
//!
//! The config file sets where artwork is stored, how renders are bounded,
//! and which extra palettes are available. Every field is optional.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};
use crate::render::MAX_OUTPUT_DIMENSION;
use crate::types::{Colour, PaletteCatalog, Style};

/// Config filename looked up in a project directory.
pub const CONFIG_FILENAME: &str = "artlens.yaml";

/// Engine configuration loaded from artlens.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory generated PNGs are written to.
    pub storage: PathBuf,

    /// Integer upscale applied when storing.
    pub scale: u32,

    /// Style used when a request names an unknown one.
    pub default_style: Style,

    /// Largest accepted width or height.
    pub max_dimension: u32,

    /// Maximum concurrent renders in the pool.
    pub workers: usize,

    /// Per-render time limit in milliseconds.
    pub timeout_ms: u64,

    /// Extra palettes, name to colours.
    pub palettes: BTreeMap<String, Vec<Colour>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage: PathBuf::from("generated"),
            scale: 1,
            default_style: Style::Geometric,
            max_dimension: 4096,
            workers: 4,
            timeout_ms: 30_000,
            palettes: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    /// Load config from an artlens.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `dir/artlens.yaml` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            log::debug!("Loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| ArtError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.default_style.is_implemented() {
            return Err(ArtError::Config {
                message: format!("default_style '{}' has no renderer", self.default_style),
                help: Some("Use geometric, pixel, gradient or fractal".to_string()),
            });
        }
        if self.workers == 0 {
            return Err(ArtError::Config {
                message: "workers must be at least 1".to_string(),
                help: None,
            });
        }
        if self.max_dimension == 0 {
            return Err(ArtError::Config {
                message: "max_dimension must be at least 1".to_string(),
                help: None,
            });
        }
        let largest = self.max_dimension.checked_mul(self.effective_scale());
        if !matches!(largest, Some(side) if side <= MAX_OUTPUT_DIMENSION) {
            return Err(ArtError::Config {
                message: format!(
                    "scale {} with max_dimension {} exceeds {}px per stored side",
                    self.scale, self.max_dimension, MAX_OUTPUT_DIMENSION
                ),
                help: Some("Lower scale or max_dimension".to_string()),
            });
        }
        Ok(())
    }

    /// Builtin palettes plus the configured ones.
    pub fn catalog(&self) -> Result<PaletteCatalog> {
        PaletteCatalog::with_custom(self.palettes.clone())
    }

    /// Get the per-render time limit.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> u32 {
        self.scale.max(1)
    }

    /// Render the config as YAML, for `init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ArtError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_config() {
        let config = EngineConfig::parse("storage: out").unwrap();

        assert_eq!(config.storage, PathBuf::from("out"));
        assert_eq!(config.default_style, Style::Geometric);
        assert!(config.palettes.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
storage: art/generated
scale: 2
default_style: fractal
max_dimension: 1024
workers: 2
timeout_ms: 500
palettes:
  neon:
    - "#ff00ff"
    - "#0ff"
"##;
        let config = EngineConfig::parse(yaml).unwrap();

        assert_eq!(config.storage, PathBuf::from("art/generated"));
        assert_eq!(config.scale, 2);
        assert_eq!(config.default_style, Style::Fractal);
        assert_eq!(config.max_dimension, 1024);
        assert_eq!(config.workers, 2);
        assert_eq!(config.timeout(), Duration::from_millis(500));
        assert_eq!(
            config.palettes["neon"],
            vec![Colour::rgb(255, 0, 255), Colour::rgb(0, 255, 255)]
        );
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();

        assert_eq!(config.storage, PathBuf::from("generated"));
        assert_eq!(config.scale, 1);
        assert_eq!(config.max_dimension, 4096);
        assert_eq!(config.workers, 4);
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(EngineConfig::parse("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_unimplemented_default_style_rejected() {
        let err = EngineConfig::parse("default_style: expressionist").unwrap_err();
        assert!(matches!(err, ArtError::Config { .. }));
    }

    #[test]
    fn test_unknown_default_style_rejected() {
        assert!(EngineConfig::parse("default_style: cubist").is_err());
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(EngineConfig::parse("workers: 0").is_err());
    }

    #[test]
    fn test_oversized_scale_rejected() {
        assert!(matches!(
            EngineConfig::parse("scale: 64"),
            Err(ArtError::Config { .. })
        ));
        assert!(EngineConfig::parse("scale: 4294967295").is_err());
        assert!(EngineConfig::parse("scale: 2\nmax_dimension: 10000").is_err());
    }

    #[test]
    fn test_scale_within_output_limit_accepted() {
        let config = EngineConfig::parse("scale: 4").unwrap();
        assert_eq!(config.scale, 4);

        let config = EngineConfig::parse("scale: 16\nmax_dimension: 1024").unwrap();
        assert_eq!(config.effective_scale(), 16);
    }

    #[test]
    fn test_bad_palette_colour_rejected() {
        let yaml = "palettes:\n  bad:\n    - not-a-colour\n";
        assert!(matches!(
            EngineConfig::parse(yaml),
            Err(ArtError::Config { .. })
        ));
    }

    #[test]
    fn test_catalog_includes_custom_palettes() {
        let yaml = "palettes:\n  neon:\n    - \"#39ff14\"\n";
        let catalog = EngineConfig::parse(yaml).unwrap().catalog().unwrap();

        assert!(catalog.contains("neon"));
        assert!(catalog.contains("vibrant"));
    }

    #[test]
    fn test_catalog_rejects_builtin_redefinition() {
        let yaml = "palettes:\n  ocean:\n    - \"#000000\"\n";
        let config = EngineConfig::parse(yaml).unwrap();
        assert!(config.catalog().is_err());
    }

    #[test]
    fn test_to_yaml_round_trips() {
        let config = EngineConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(EngineConfig::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_discover_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            EngineConfig::discover(dir.path()).unwrap(),
            EngineConfig::default()
        );
    }

    #[test]
    fn test_discover_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "scale: 3\n").unwrap();
        assert_eq!(EngineConfig::discover(dir.path()).unwrap().scale, 3);
    }
}
