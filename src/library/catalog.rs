// SPDX-License-Identifier: MPL-2.0
//! Name-to-image resolution for the bundled assets.

use crate::error::{AssetError, Result};
use iced::widget::image::Handle;
use iced::Size;
use image_rs::ImageReader;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::io::Cursor;

#[derive(RustEmbed)]
#[folder = "assets/images/"]
struct BundledImages;

const IMAGE_SUFFIX: &str = ".png";

/// A named image ready to render.
#[derive(Debug, Clone)]
pub struct Asset {
    pub name: String,
    pub handle: Handle,
    /// Intrinsic pixel size.
    pub size: Size<u32>,
}

impl Asset {
    /// Reads the image header to learn its size and wraps the bytes in a handle.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let name = name.into();
        let decode_error = |message: String| AssetError::Decode {
            name: name.clone(),
            message,
        };

        let (width, height) = ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .map_err(|err| decode_error(err.to_string()))?
            .into_dimensions()
            .map_err(|err| decode_error(err.to_string()))?;

        Ok(Self {
            handle: Handle::from_bytes(bytes),
            size: Size::new(width, height),
            name,
        })
    }
}

/// Resolves item names to images. Handles are created once per asset so
/// every lookup of the same name yields the same image identity.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    assets: HashMap<String, Asset>,
}

impl AssetCatalog {
    /// Loads every image embedded under `assets/images/`.
    pub fn bundled() -> Result<Self> {
        let mut catalog = Self::default();

        for file in BundledImages::iter() {
            let Some(name) = file.strip_suffix(IMAGE_SUFFIX) else {
                continue;
            };
            if let Some(content) = BundledImages::get(&file) {
                catalog.insert(name, content.data.into_owned())?;
            }
        }

        tracing::debug!(count = catalog.len(), "loaded bundled image assets");
        Ok(catalog)
    }

    /// Adds or replaces the asset stored under `name`.
    pub fn insert(&mut self, name: &str, bytes: Vec<u8>) -> Result<()> {
        let asset = Asset::from_bytes(name, bytes)?;
        self.assets.insert(name.to_string(), asset);
        Ok(())
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Asset> {
        self.assets.get(name)
    }

    /// Like [`resolve`](Self::resolve), but a missing name is an error.
    pub fn require(&self, name: &str) -> std::result::Result<&Asset, AssetError> {
        self.resolve(name)
            .ok_or_else(|| AssetError::Missing(name.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Fixtures;

    #[test]
    fn bundled_catalog_covers_every_fixture() {
        let catalog = AssetCatalog::bundled().expect("bundled assets load");
        for name in Fixtures::default().iter() {
            let asset = catalog.resolve(name).expect("fixture has an asset");
            assert_eq!(asset.name, name);
            assert!(asset.size.width > 0 && asset.size.height > 0);
        }
    }

    #[test]
    fn repeated_lookups_share_the_handle() {
        let catalog = AssetCatalog::bundled().expect("bundled assets load");
        let first = catalog.resolve("lake").expect("lake exists");
        let second = catalog.resolve("lake").expect("lake exists");
        assert_eq!(first.handle.id(), second.handle.id());
    }

    #[test]
    fn unknown_name_is_missing() {
        let catalog = AssetCatalog::default();
        assert!(catalog.resolve("nowhere").is_none());
        assert_eq!(
            catalog.require("nowhere").unwrap_err(),
            AssetError::Missing("nowhere".to_string())
        );
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let mut catalog = AssetCatalog::default();
        let err = catalog
            .insert("broken", b"not an image".to_vec())
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Asset(AssetError::Decode { ref name, .. }) if name == "broken"
        ));
        assert!(catalog.is_empty());
    }
}
