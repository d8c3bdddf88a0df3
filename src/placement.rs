// SPDX-License-Identifier: MPL-2.0
//! Logo placement state: position and scale on the preview surface.
//!
//! Placement is independent of asset identity: re-uploading a logo never
//! resets it, and it lives for the whole session.

use crate::assets::RasterAsset;
use crate::config::{DEFAULT_SCALE_PERCENT, MAX_SCALE_PERCENT, MIN_SCALE_PERCENT, PREVIEW_SIZE};
use crate::geometry::{PreviewPoint, PreviewRect};

/// Logo scale percentage, guaranteed to be within the valid range (10%-200%).
///
/// The scale expresses the logo's rendered width as a percentage of the
/// preview surface's width; height is always derived from the logo's own
/// aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePercent(f32);

impl ScalePercent {
    /// Creates a new scale percentage, clamping the value to the valid range.
    ///
    /// Out-of-range input is silently clamped rather than rejected: the
    /// slider control cannot produce it, but defensive callers can.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(percent.clamp(MIN_SCALE_PERCENT, MAX_SCALE_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale as a multiplier (e.g. 100% -> 1.0).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for ScalePercent {
    fn default() -> Self {
        Self(DEFAULT_SCALE_PERCENT)
    }
}

/// The logo's current position and scale, expressed in preview space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacementModel {
    offset: PreviewPoint,
    scale: ScalePercent,
}

impl PlacementModel {
    /// Logo offset from the preview surface's top-left corner.
    ///
    /// Invariant: both axes stay within `[0, PREVIEW_SIZE]` at all times.
    #[must_use]
    pub fn offset(&self) -> PreviewPoint {
        self.offset
    }

    #[must_use]
    pub fn scale(&self) -> ScalePercent {
        self.scale
    }

    /// Sets the logo scale, clamping to the valid range.
    pub fn set_scale(&mut self, percent: f32) {
        self.scale = ScalePercent::new(percent);
    }

    /// Applies a position update under the all-or-nothing bounds policy.
    ///
    /// The candidate is accepted only when **both** axes lie inside the
    /// preview surface; otherwise the prior offset is kept on both axes.
    /// Unlike scale, an out-of-bounds position is never clamped to the
    /// boundary: the logo freezes at its last in-bounds position until the
    /// pointer comes back in range.
    ///
    /// Returns whether the candidate was accepted.
    pub fn set_position(&mut self, candidate: PreviewPoint) -> bool {
        let in_bounds = candidate.x >= 0.0
            && candidate.x <= PREVIEW_SIZE
            && candidate.y >= 0.0
            && candidate.y <= PREVIEW_SIZE;
        if in_bounds {
            self.offset = candidate;
        }
        in_bounds
    }

    /// Rendered logo width on the preview surface.
    #[must_use]
    pub fn preview_logo_width(&self) -> f32 {
        PREVIEW_SIZE * self.scale.as_factor()
    }

    /// Rendered logo height on the preview surface, preserving the asset's
    /// aspect ratio. Zero-width assets render with zero height.
    #[must_use]
    pub fn preview_logo_height(&self, logo: &RasterAsset) -> f32 {
        if logo.width == 0 {
            return 0.0;
        }
        self.preview_logo_width() * logo.height as f32 / logo.width as f32
    }

    /// The rectangle the logo currently occupies on the preview surface.
    #[must_use]
    pub fn preview_logo_rect(&self, logo: &RasterAsset) -> PreviewRect {
        PreviewRect {
            origin: self.offset,
            width: self.preview_logo_width(),
            height: self.preview_logo_height(logo),
        }
    }
}

/// Transient drag state, alive between pointer-down-on-logo and the matching
/// pointer-up or pointer-leave.
///
/// Holds the vector from the initiating pointer position to the logo offset,
/// computed once at drag start and constant for the whole drag so the logo
/// does not jump to the pointer location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pointer_offset_x: f32,
    pointer_offset_y: f32,
}

impl DragSession {
    #[must_use]
    pub fn begin(pointer: PreviewPoint, logo_offset: PreviewPoint) -> Self {
        Self {
            pointer_offset_x: pointer.x - logo_offset.x,
            pointer_offset_y: pointer.y - logo_offset.y,
        }
    }

    /// Candidate logo offset for the current pointer position.
    #[must_use]
    pub fn candidate_offset(&self, pointer: PreviewPoint) -> PreviewPoint {
        PreviewPoint::new(
            pointer.x - self.pointer_offset_x,
            pointer.y - self.pointer_offset_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_placement_is_origin_at_full_scale() {
        let placement = PlacementModel::default();
        assert_eq!(placement.offset(), PreviewPoint::new(0.0, 0.0));
        assert_eq!(placement.scale().value(), DEFAULT_SCALE_PERCENT);
    }

    #[test]
    fn set_scale_clamps_out_of_range_values() {
        let mut placement = PlacementModel::default();

        placement.set_scale(5.0);
        assert_eq!(placement.scale().value(), MIN_SCALE_PERCENT);

        placement.set_scale(9999.0);
        assert_eq!(placement.scale().value(), MAX_SCALE_PERCENT);

        placement.set_scale(150.0);
        assert_eq!(placement.scale().value(), 150.0);
    }

    #[test]
    fn set_position_accepts_in_bounds_candidate() {
        let mut placement = PlacementModel::default();
        assert!(placement.set_position(PreviewPoint::new(50.0, 60.0)));
        assert_eq!(placement.offset(), PreviewPoint::new(50.0, 60.0));
    }

    #[test]
    fn set_position_rejects_both_axes_together() {
        let mut placement = PlacementModel::default();
        placement.set_position(PreviewPoint::new(50.0, 50.0));

        // y is fine but x is out of bounds: neither axis moves.
        assert!(!placement.set_position(PreviewPoint::new(-10.0, 80.0)));
        assert_eq!(placement.offset(), PreviewPoint::new(50.0, 50.0));

        assert!(!placement.set_position(PreviewPoint::new(80.0, 300.0)));
        assert_eq!(placement.offset(), PreviewPoint::new(50.0, 50.0));
    }

    #[test]
    fn set_position_accepts_the_boundary_itself() {
        let mut placement = PlacementModel::default();
        assert!(placement.set_position(PreviewPoint::new(PREVIEW_SIZE, PREVIEW_SIZE)));
        assert!(placement.set_position(PreviewPoint::new(0.0, 0.0)));
    }

    #[test]
    fn scale_percent_as_factor() {
        assert_eq!(ScalePercent::new(100.0).as_factor(), 1.0);
        assert_eq!(ScalePercent::new(50.0).as_factor(), 0.5);
    }

    #[test]
    fn drag_session_keeps_grab_point_constant() {
        let session = DragSession::begin(PreviewPoint::new(100.0, 100.0), PreviewPoint::new(50.0, 50.0));
        let candidate = session.candidate_offset(PreviewPoint::new(110.0, 95.0));
        assert_eq!(candidate, PreviewPoint::new(60.0, 45.0));
    }

    #[test]
    fn preview_logo_dimensions_follow_scale_and_aspect() {
        let mut placement = PlacementModel::default();
        placement.set_scale(50.0);
        let logo = RasterAsset::from_rgba(200, 100, vec![0; 200 * 100 * 4]);

        assert_eq!(placement.preview_logo_width(), 128.0);
        assert_eq!(placement.preview_logo_height(&logo), 64.0);
    }
}
