// SPDX-License-Identifier: MPL-2.0
//! Coordinate mapping between the preview surface and the export target.
//!
//! The two coordinate systems are first-class types so a call site cannot
//! accidentally hand a preview-space value to an export-space consumer:
//!
//! - **Preview space**: the fixed 256x256 logical system of the on-screen
//!   interactive surface, origin at its top-left corner.
//! - **Export space**: the fixed 640x640 system of the off-screen raster
//!   target used for the downloadable file.
//!
//! All functions here are pure and stateless.

use crate::assets::RasterAsset;
use crate::config::{EXPORT_HEIGHT, EXPORT_WIDTH, PREVIEW_SIZE};
use crate::error::{Error, Result};
use crate::placement::ScalePercent;

/// A point on the interactive preview surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreviewPoint {
    pub x: f32,
    pub y: f32,
}

impl PreviewPoint {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle on the preview surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewRect {
    pub origin: PreviewPoint,
    pub width: f32,
    pub height: f32,
}

impl PreviewRect {
    /// Whether the point lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: PreviewPoint) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.height
    }
}

/// A point on the export raster target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExportPoint {
    pub x: f32,
    pub y: f32,
}

/// Maps a placement offset from preview space to export space.
///
/// The mapping is linear per axis: (0, 0) maps to (0, 0) and the preview's
/// bottom-right corner maps to the export target's bottom-right corner.
#[must_use]
pub fn to_export_offset(offset: PreviewPoint) -> ExportPoint {
    ExportPoint {
        x: offset.x * EXPORT_WIDTH as f32 / PREVIEW_SIZE,
        y: offset.y * EXPORT_HEIGHT as f32 / PREVIEW_SIZE,
    }
}

/// Rendered logo width on the export target for the given scale.
#[must_use]
pub fn to_export_logo_width(scale: ScalePercent) -> f32 {
    EXPORT_WIDTH as f32 * scale.value() / 100.0
}

/// Rendered logo height on the export target, preserving the logo's
/// original aspect ratio.
pub fn to_export_logo_height(logo_width: f32, logo: &RasterAsset) -> Result<f32> {
    if logo.width == 0 {
        return Err(Error::DegenerateAsset(
            "logo has zero pixel width".to_string(),
        ));
    }
    Ok(logo_width * logo.height as f32 / logo.width as f32)
}
