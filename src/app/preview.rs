// SPDX-License-Identifier: MPL-2.0
//! Live rendering of the interactive preview surface.
//!
//! The preview is a 256x256 composite of the same two layers the exporter
//! draws, regenerated whenever the logo, its scale, or its position
//! changes. Rendering from the decoded RGBA buffers keeps what the user
//! sees in lockstep with what the export produces, including a logo
//! overflowing the surface edge.

use crate::assets::RasterAsset;
use crate::config::PREVIEW_SIZE;
use crate::placement::PlacementModel;
use iced::widget::image;
use image_rs::imageops::{self, FilterType};
use image_rs::{DynamicImage, RgbaImage};

const SURFACE: u32 = PREVIEW_SIZE as u32;

/// Renders preview frames, caching the expensive intermediate rasters.
///
/// The background never changes, so it is scaled to the surface once. The
/// scaled logo is cached between frames and only rebuilt when its target
/// dimensions change; pointer drags reuse it and pay for a single blit.
#[derive(Debug)]
pub struct PreviewRenderer {
    surface: RgbaImage,
    scaled_logo: Option<RgbaImage>,
    handle: image::Handle,
}

impl PreviewRenderer {
    /// Scales the background to the preview surface and renders an initial
    /// background-only frame.
    ///
    /// # Panics
    ///
    /// Panics if the asset's RGBA buffer is invalid (cannot happen: buffers
    /// are validated at construction).
    #[must_use]
    pub fn new(background: &RasterAsset) -> Self {
        let pixels = RgbaImage::from_raw(
            background.width,
            background.height,
            background.rgba_bytes().to_vec(),
        )
        .expect("RGBA bytes should be valid");
        let surface = DynamicImage::ImageRgba8(pixels)
            .resize_exact(SURFACE, SURFACE, FilterType::Lanczos3)
            .to_rgba8();
        let handle = image::Handle::from_rgba(SURFACE, SURFACE, surface.clone().into_raw());

        Self {
            surface,
            scaled_logo: None,
            handle,
        }
    }

    /// Drops the cached scaled logo. Call after a logo replacement so the
    /// next frame rescales the new pixels even at unchanged dimensions.
    pub fn invalidate_logo(&mut self) {
        self.scaled_logo = None;
    }

    /// Regenerates the preview frame for the current placement.
    pub fn render(&mut self, logo: Option<&RasterAsset>, placement: &PlacementModel) {
        let mut frame = self.surface.clone();

        if let Some(logo) = logo {
            if logo.width > 0 && logo.height > 0 {
                let width = placement.preview_logo_width().round().max(1.0) as u32;
                let height = placement.preview_logo_height(logo).round().max(1.0) as u32;

                let cache_is_current = self
                    .scaled_logo
                    .as_ref()
                    .is_some_and(|cached| cached.dimensions() == (width, height));
                if !cache_is_current {
                    let pixels =
                        RgbaImage::from_raw(logo.width, logo.height, logo.rgba_bytes().to_vec())
                            .expect("RGBA bytes should be valid");
                    // Triangle keeps slider drags responsive; the export
                    // path does its own Lanczos pass at full resolution.
                    self.scaled_logo = Some(
                        DynamicImage::ImageRgba8(pixels)
                            .resize_exact(width, height, FilterType::Triangle)
                            .to_rgba8(),
                    );
                }

                if let Some(scaled) = &self.scaled_logo {
                    let offset = placement.offset();
                    imageops::overlay(
                        &mut frame,
                        scaled,
                        offset.x.round() as i64,
                        offset.y.round() as i64,
                    );
                }
            }
        }

        self.handle = image::Handle::from_rgba(SURFACE, SURFACE, frame.into_raw());
    }

    /// Handle for the current frame.
    #[must_use]
    pub fn handle(&self) -> image::Handle {
        self.handle.clone()
    }
}
