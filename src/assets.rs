// SPDX-License-Identifier: MPL-2.0
//! Decoded raster assets: the bundled garment background and the
//! user-supplied logo.

use crate::error::{Error, Result};
use iced::widget::image;
use std::sync::Arc;

/// The garment artwork drawn behind the logo, embedded so packaging does
/// not need to locate assets on disk.
const BACKGROUND_BYTES: &[u8] = include_bytes!("../assets/tshirt.png");

/// A decoded raster layer: RGBA pixels plus a handle for on-screen display.
///
/// The pixels are stored in an Arc to avoid expensive cloning when assets
/// are snapshotted for an export.
#[derive(Debug, Clone)]
pub struct RasterAsset {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl RasterAsset {
    /// Creates a new `RasterAsset` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Decodes encoded image bytes (PNG, JPEG, GIF, WebP, BMP, ...).
    ///
    /// Everything is normalized to RGBA on decode, so compositing never has
    /// to wait on, or re-run, a decode step.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let decoded =
            image_rs::load_from_memory(bytes).map_err(|e| Error::InvalidAsset(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_rgba(width, height, rgba.into_raw()))
    }

    /// Returns a reference to the decoded RGBA bytes.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

/// Owns the two raster inputs of a design session.
///
/// The background is immutable after startup. The logo is replaced
/// wholesale on each successful upload; a failed upload leaves it alone.
#[derive(Debug, Clone)]
pub struct AssetStore {
    background: RasterAsset,
    logo: Option<RasterAsset>,
}

impl AssetStore {
    #[must_use]
    pub fn new(background: RasterAsset) -> Self {
        Self {
            background,
            logo: None,
        }
    }

    /// Decodes the bundled garment artwork.
    ///
    /// A failure here is fatal to startup: there is no meaningful UI
    /// without the background.
    pub fn load_background() -> Result<Self> {
        let background = RasterAsset::decode(BACKGROUND_BYTES)
            .map_err(|e| Error::InvalidAsset(format!("bundled garment artwork: {}", e)))?;
        Ok(Self::new(background))
    }

    #[must_use]
    pub fn background(&self) -> &RasterAsset {
        &self.background
    }

    #[must_use]
    pub fn logo(&self) -> Option<&RasterAsset> {
        self.logo.as_ref()
    }

    #[must_use]
    pub fn has_logo(&self) -> bool {
        self.logo.is_some()
    }

    /// Decodes and installs a new logo, discarding the previous one.
    ///
    /// On decode failure the previous logo is retained unchanged; an upload
    /// failure must not corrupt existing state. Placement is not touched
    /// either way.
    pub fn set_logo(&mut self, bytes: &[u8]) -> Result<()> {
        let asset = RasterAsset::decode(bytes)?;
        self.logo = Some(asset);
        Ok(())
    }

    /// Installs an already-decoded logo (the async upload path decodes off
    /// the update loop and delivers the finished asset).
    pub fn install_logo(&mut self, asset: RasterAsset) {
        self.logo = Some(asset);
    }
}
