// SPDX-License-Identifier: MPL-2.0
//! The surface shown while an item is being previewed.

use crate::error::Result;
use crate::library::{capitalized, AssetCatalog};
use iced::widget::image::Handle;
use iced::Size;

/// Read-only preview of one item's image, sized to the image's own
/// aspect ratio instead of the full preview area.
#[derive(Debug, Clone)]
pub struct PreviewSurface {
    name: String,
    title: String,
    handle: Handle,
    intrinsic: Size<u32>,
}

impl PreviewSurface {
    /// Builds the preview for `name`. The name must resolve to an asset.
    pub fn new(name: &str, catalog: &AssetCatalog) -> Result<Self> {
        let asset = catalog.require(name)?;
        Ok(Self {
            name: name.to_string(),
            title: capitalized(name),
            handle: asset.handle.clone(),
            intrinsic: asset.size,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header title: the capitalized item name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    #[must_use]
    pub fn intrinsic_size(&self) -> Size<u32> {
        self.intrinsic
    }

    /// Size the preview asks for inside `available`.
    #[must_use]
    pub fn preferred_size(&self, available: Size) -> Size {
        preferred_size(self.intrinsic, available)
    }
}

/// Fits an image of size `intrinsic` into `available` keeping its aspect
/// ratio: landscape images take the full available width, everything
/// else takes the full available height.
#[allow(clippy::cast_precision_loss)] // image dimensions stay far below 2^24
#[must_use]
pub fn preferred_size(intrinsic: Size<u32>, available: Size) -> Size {
    if intrinsic.width == 0 || intrinsic.height == 0 {
        return available;
    }

    let image_width = intrinsic.width as f32;
    let image_height = intrinsic.height as f32;

    if intrinsic.width > intrinsic.height {
        let width = available.width;
        Size::new(width, image_height * (width / image_width))
    } else {
        let height = available.height;
        Size::new(image_width * (height / image_height), height)
    }
}
