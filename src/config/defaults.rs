// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and fixed dimensions.
//!
//! This module is the single source of truth for the two coordinate spaces
//! and the scale bounds used across the application.

// ==========================================================================
// Preview surface
// ==========================================================================

/// Side length of the square interactive preview surface, in logical pixels.
/// Placement offsets are expressed in this coordinate system.
pub const PREVIEW_SIZE: f32 = 256.0;

// ==========================================================================
// Export target
// ==========================================================================

/// Width of the off-screen export raster target, in pixels.
pub const EXPORT_WIDTH: u32 = 640;

/// Height of the off-screen export raster target, in pixels.
pub const EXPORT_HEIGHT: u32 = 640;

/// Suggested filename offered by the save dialog.
pub const EXPORT_FILE_NAME: &str = "tshirt_design.png";

// ==========================================================================
// Logo scale
// ==========================================================================

/// Default logo scale when a session starts (100% = full preview width).
pub const DEFAULT_SCALE_PERCENT: f32 = 100.0;

/// Minimum allowed logo scale percentage.
pub const MIN_SCALE_PERCENT: f32 = 10.0;

/// Maximum allowed logo scale percentage.
pub const MAX_SCALE_PERCENT: f32 = 200.0;
