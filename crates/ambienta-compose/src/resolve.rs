//! Tile image resolution.
//!
//! Selections reference imagery by convention: the image for category `key`
//! at index `i` lives at `<base>/<key>/<key><i>.<ext>`, with a fixed
//! extension preference. A resolver chain tries sources in order and ends at
//! a generated placeholder, so resolution as a whole cannot fail unless a
//! caller builds a chain without one.

use std::collections::BTreeMap;
use std::path::PathBuf;

use image::{ImageBuffer, Rgba, RgbaImage};
use sha2::{Digest, Sha256};

use crate::error::ResolveError;
use crate::glyphs;

/// Extension preference for on-disk tiles, most common format first.
pub const EXTENSION_ORDER: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Maps a category key to a tile image.
pub trait TileResolver {
    fn resolve(&self, key: &str) -> Result<RgbaImage, ResolveError>;
}

/// Looks tiles up on disk by the directory convention. Each category can
/// carry its own image index (the one the user picked); unknown categories
/// default to the first image.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    base_dir: PathBuf,
    indices: BTreeMap<String, u32>,
}

impl DirectoryResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            indices: BTreeMap::new(),
        }
    }

    /// Per-category image indices, typically the `image_index` of each
    /// stored selection.
    pub fn with_indices(mut self, indices: BTreeMap<String, u32>) -> Self {
        self.indices = indices;
        self
    }

    fn index_for(&self, key: &str) -> u32 {
        self.indices.get(key).copied().unwrap_or(1)
    }
}

impl TileResolver for DirectoryResolver {
    fn resolve(&self, key: &str) -> Result<RgbaImage, ResolveError> {
        let index = self.index_for(key);
        let mut undecodable: Option<(PathBuf, image::ImageError)> = None;
        for ext in EXTENSION_ORDER {
            let path = self.base_dir.join(key).join(format!("{key}{index}.{ext}"));
            if !path.exists() {
                continue;
            }
            match image::open(&path) {
                Ok(img) => return Ok(img.to_rgba8()),
                Err(err) => {
                    tracing::warn!(
                        key,
                        path = %path.display(),
                        "tile image exists but does not decode: {err}"
                    );
                    if undecodable.is_none() {
                        undecodable = Some((path, err));
                    }
                }
            }
        }
        match undecodable {
            Some((path, source)) => Err(ResolveError::Unreadable {
                key: key.to_string(),
                path,
                source,
            }),
            None => Err(ResolveError::NotFound {
                key: key.to_string(),
            }),
        }
    }
}

/// Generates a flat labeled tile. Never fails, which is what makes it the
/// chain terminator.
#[derive(Debug, Clone)]
pub struct PlaceholderResolver {
    width: u32,
    height: u32,
    labels: BTreeMap<String, String>,
}

impl PlaceholderResolver {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            labels: BTreeMap::new(),
        }
    }

    /// Display names per category key; tiles for keys without one are
    /// labeled with the key itself.
    pub fn with_labels(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = labels;
        self
    }
}

impl TileResolver for PlaceholderResolver {
    fn resolve(&self, key: &str) -> Result<RgbaImage, ResolveError> {
        let label = self.labels.get(key).map(String::as_str).unwrap_or(key);
        Ok(placeholder_tile(key, label, self.width, self.height))
    }
}

/// Flat tile in a color derived from the key, with the label stenciled on.
pub fn placeholder_tile(key: &str, label: &str, width: u32, height: u32) -> RgbaImage {
    let mut img = ImageBuffer::from_pixel(width, height, color_for_key(key));
    glyphs::draw_label_centered(&mut img, label, Rgba([245, 245, 245, 255]));
    img
}

/// Stable muted color for a key: first digest bytes mapped into 96..=223
/// per channel, so placeholders look the same on every run.
pub fn color_for_key(key: &str) -> Rgba<u8> {
    let digest = Sha256::digest(key.as_bytes());
    Rgba([
        96 + digest[0] % 128,
        96 + digest[1] % 128,
        96 + digest[2] % 128,
        255,
    ])
}

/// Tries resolvers in order, returning the first hit. Misses are logged;
/// the error of the last resolver is surfaced if every one misses.
pub struct ResolverChain {
    resolvers: Vec<Box<dyn TileResolver>>,
}

impl ResolverChain {
    pub fn new(resolvers: Vec<Box<dyn TileResolver>>) -> Self {
        Self { resolvers }
    }
}

impl TileResolver for ResolverChain {
    fn resolve(&self, key: &str) -> Result<RgbaImage, ResolveError> {
        let mut last: Option<ResolveError> = None;
        for resolver in &self.resolvers {
            match resolver.resolve(key) {
                Ok(img) => return Ok(img),
                Err(err) => {
                    tracing::debug!(key, "resolver miss: {err}");
                    last = Some(err);
                }
            }
        }
        Err(last.unwrap_or_else(|| ResolveError::NotFound {
            key: key.to_string(),
        }))
    }
}
