//! Artwork persistence and filename assignment.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::error::{ArtError, Result};
use crate::render::{write_png, Canvas};
use crate::types::{Style, Theme};

/// Somewhere finished canvases can be kept.
pub trait ArtStore: Send + Sync {
    /// Persist `canvas` under `filename` and return where it went.
    fn store(&self, canvas: &Canvas, filename: &str) -> Result<PathBuf>;
}

/// Writes PNG files into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct FsStore {
    dir: PathBuf,
    scale: u32,
}

impl FsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            scale: 1,
        }
    }

    /// Upscale stored images by an integer factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtStore for FsStore {
    fn store(&self, canvas: &Canvas, filename: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| ArtError::StorageFailure {
            path: self.dir.clone(),
            message: format!("Failed to create storage directory: {}", e),
        })?;

        let path = self.dir.join(filename);
        write_png(canvas, &path, self.scale)?;
        Ok(path)
    }
}

/// Hands out unique artwork filenames.
///
/// `{style}_{theme}_{utc timestamp}_{sequence}_{random}.png`; the sequence
/// keeps names unique within a process even when timestamps collide.
#[derive(Debug, Default)]
pub struct FilenameGenerator {
    sequence: AtomicU64,
}

impl FilenameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, style: Style, theme: Theme) -> String {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S_%6f");
        let suffix: u32 = rand::random();
        format!(
            "{}_{}_{}_{:04}_{:08x}.png",
            style, theme, timestamp, sequence, suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use std::collections::HashSet;
    use tempfile::tempdir;

    #[test]
    fn test_filename_shape() {
        let names = FilenameGenerator::new();
        let name = names.next(Style::Pixel, Theme::Space);

        assert!(name.starts_with("pixel_space_"));
        assert!(name.ends_with(".png"));
        // pixel, space, date, time, micros, sequence, random
        let stem = name.trim_end_matches(".png");
        let parts: Vec<&str> = stem.split('_').collect();
        assert_eq!(parts.len(), 7);
        assert_eq!(parts[4].len(), 6);
        assert_eq!(parts[5], "0000");
        assert_eq!(parts[6].len(), 8);
        assert!(parts[6].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_filenames_are_unique() {
        let names = FilenameGenerator::new();
        let all: HashSet<String> = (0..500)
            .map(|_| names.next(Style::Geometric, Theme::Urban))
            .collect();
        assert_eq!(all.len(), 500);
    }

    #[test]
    fn test_fs_store_creates_directory() {
        let dir = tempdir().unwrap();
        let store = FsStore::new(dir.path().join("nested").join("out"));
        let canvas = Canvas::new(3, 2, Colour::WHITE);

        let path = store.store(&canvas, "a.png").unwrap();

        assert!(path.exists());
        assert_eq!(path, dir.path().join("nested/out/a.png"));
    }

    #[test]
    fn test_fs_store_scales() {
        let dir = tempdir().unwrap();
        let store = FsStore::new(dir.path()).with_scale(4);
        let canvas = Canvas::new(3, 2, Colour::BLACK);

        let path = store.store(&canvas, "big.png").unwrap();
        let img = image::open(path).unwrap();

        assert_eq!((img.width(), img.height()), (12, 8));
    }

    #[test]
    fn test_fs_store_unwritable_is_storage_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let store = FsStore::new(blocker.join("sub"));
        let err = store
            .store(&Canvas::new(1, 1, Colour::WHITE), "x.png")
            .unwrap_err();

        assert!(matches!(err, ArtError::StorageFailure { .. }));
    }
}
