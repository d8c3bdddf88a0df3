// SPDX-License-Identifier: MPL-2.0
//! Deterministic two-pass rasterization of the export target.
//!
//! Pass 1 stretches the background to fill the whole 640x640 target (its
//! aspect ratio is deliberately not preserved). Pass 2 draws the logo at
//! the mapped offset and size, aspect preserved, with no rotation, opacity
//! blending, or clipping against the garment silhouette: a logo may
//! overflow the garment artwork, and that is accepted behavior.
//!
//! Both inputs are fully decoded RGBA before this module runs, so no draw
//! can race an undecoded image.

use crate::assets::RasterAsset;
use crate::config::{EXPORT_HEIGHT, EXPORT_WIDTH};
use crate::error::{Error, Result};
use crate::geometry;
use crate::placement::PlacementModel;
use image_rs::imageops::{self, FilterType};
use image_rs::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

/// A freshly encoded export image.
///
/// Produced per export request and handed off to the save step; never
/// cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeResult {
    bytes: Vec<u8>,
}

impl CompositeResult {
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

fn pixel_buffer(asset: &RasterAsset, layer: &str) -> Result<RgbaImage> {
    RgbaImage::from_raw(asset.width, asset.height, asset.rgba_bytes().to_vec()).ok_or_else(|| {
        Error::Composition(format!("{} pixel buffer has the wrong length", layer))
    })
}

/// Rasterizes background and logo into a PNG byte stream.
///
/// With no logo loaded the export still succeeds and yields a
/// background-only image. Any draw or encode failure aborts the whole
/// export; partial output is never returned.
pub fn composite(
    background: &RasterAsset,
    logo: Option<&RasterAsset>,
    placement: &PlacementModel,
) -> Result<CompositeResult> {
    let background_pixels = pixel_buffer(background, "background")?;

    // Pass 1: fill-to-bounds.
    let mut target = DynamicImage::ImageRgba8(background_pixels)
        .resize_exact(EXPORT_WIDTH, EXPORT_HEIGHT, FilterType::Lanczos3)
        .to_rgba8();

    // Pass 2: logo at the mapped placement.
    if let Some(logo) = logo {
        let logo_pixels = pixel_buffer(logo, "logo")?;

        let logo_width = geometry::to_export_logo_width(placement.scale());
        let logo_height = geometry::to_export_logo_height(logo_width, logo)?;
        let offset = geometry::to_export_offset(placement.offset());

        let scaled_width = logo_width.round().max(1.0) as u32;
        let scaled_height = logo_height.round().max(1.0) as u32;
        let scaled = DynamicImage::ImageRgba8(logo_pixels)
            .resize_exact(scaled_width, scaled_height, FilterType::Lanczos3)
            .to_rgba8();

        imageops::overlay(
            &mut target,
            &scaled,
            offset.x.round() as i64,
            offset.y.round() as i64,
        );
    }

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(target)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| Error::Composition(e.to_string()))?;

    Ok(CompositeResult { bytes })
}
