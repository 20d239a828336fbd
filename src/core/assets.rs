//! # Asset Resolution
//!
//! Listings refer to their picture by a logical name (`pic_1`). A resolver
//! turns that name into something renderable; in the terminal that is a
//! block of ASCII art. Not finding an asset is an ordinary outcome and the
//! screens draw an "Image not found" panel instead.
//!
//! - [`EmbeddedAssets`]: art compiled in from `assets/*.txt` by `build.rs`
//! - [`DirectoryAssets`]: `<dir>/<name>.txt` read on demand
//! - [`LayeredAssets`]: directory first, embedded as fallback

use log::debug;
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

include!(concat!(env!("OUT_DIR"), "/embedded_assets.rs"));

/// A resolved picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub art: Cow<'static, str>,
}

impl Asset {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.art.lines()
    }

    pub fn height(&self) -> usize {
        self.art.lines().count()
    }
}

pub trait AssetResolver: Send + Sync {
    /// Look up an asset by logical name. `None` means "not found", which
    /// callers render as a placeholder.
    fn resolve(&self, name: &str) -> Option<Asset>;
}

/// Art embedded at build time.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedAssets;

impl EmbeddedAssets {
    pub fn names() -> impl Iterator<Item = &'static str> {
        EMBEDDED_ASSETS.iter().map(|(name, _)| *name)
    }
}

impl AssetResolver for EmbeddedAssets {
    fn resolve(&self, name: &str) -> Option<Asset> {
        EMBEDDED_ASSETS
            .iter()
            .find(|(asset_name, _)| *asset_name == name)
            .map(|(asset_name, art)| Asset {
                name: asset_name.to_string(),
                art: Cow::Borrowed(art),
            })
    }
}

/// Art read from a user-supplied directory, one `<name>.txt` per asset.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    dir: PathBuf,
}

impl DirectoryAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl AssetResolver for DirectoryAssets {
    fn resolve(&self, name: &str) -> Option<Asset> {
        // Logical names never contain separators
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return None;
        }
        let path = self.dir.join(format!("{name}.txt"));
        match fs::read_to_string(&path) {
            Ok(art) if !art.trim().is_empty() => Some(Asset {
                name: name.to_string(),
                art: Cow::Owned(art),
            }),
            Ok(_) => {
                debug!("Asset file is empty: {}", path.display());
                None
            }
            Err(e) => {
                debug!("Asset {} not in {}: {}", name, self.dir.display(), e);
                None
            }
        }
    }
}

/// Tries each resolver in order.
pub struct LayeredAssets {
    layers: Vec<Box<dyn AssetResolver>>,
}

impl LayeredAssets {
    pub fn new(layers: Vec<Box<dyn AssetResolver>>) -> Self {
        Self { layers }
    }

    /// Optional directory override on top of the embedded art.
    pub fn with_override(dir: Option<PathBuf>) -> Self {
        let mut layers: Vec<Box<dyn AssetResolver>> = Vec::new();
        if let Some(dir) = dir {
            layers.push(Box::new(DirectoryAssets::new(dir)));
        }
        layers.push(Box::new(EmbeddedAssets));
        Self::new(layers)
    }
}

impl AssetResolver for LayeredAssets {
    fn resolve(&self, name: &str) -> Option<Asset> {
        self.layers.iter().find_map(|layer| layer.resolve(name))
    }
}
