// SPDX-License-Identifier: MPL-2.0
//! Pointer-interaction state machine for repositioning the logo.
//!
//! The controller owns the placement model and the transient drag session;
//! no other component mutates the logo position. States are `Idle` and
//! `Dragging`, with transitions driven synchronously by pointer events:
//!
//! - `Idle` -> `Dragging` on pointer-down over the logo (only when a logo
//!   is loaded).
//! - `Dragging` -> `Dragging` on pointer-move, submitting a candidate
//!   offset under the all-or-nothing bounds policy.
//! - `Dragging` -> `Idle` on pointer-up or pointer-leave, unconditionally,
//!   with no position change.
//!
//! There is no cancellation beyond pointer-up/leave and no timeout.

use crate::assets::RasterAsset;
use crate::geometry::PreviewPoint;
use crate::placement::{DragSession, PlacementModel};

#[derive(Debug, Default)]
pub struct InteractionController {
    placement: PlacementModel,
    drag: Option<DragSession>,
}

impl InteractionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn placement(&self) -> &PlacementModel {
        &self.placement
    }

    /// Whether a drag session is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Forwards a scale change from the slider to the placement model.
    pub fn set_scale(&mut self, percent: f32) {
        self.placement.set_scale(percent);
    }

    /// Pointer pressed on the preview surface.
    ///
    /// Starts a drag session only when a logo is loaded and the pointer is
    /// over it; otherwise this is a no-op. The session records the vector
    /// from the pointer to the logo offset so subsequent moves keep the
    /// grab point under the cursor.
    pub fn pointer_down(&mut self, pointer: PreviewPoint, logo: Option<&RasterAsset>) {
        let Some(logo) = logo else { return };
        if !self.placement.preview_logo_rect(logo).contains(pointer) {
            return;
        }
        self.drag = Some(DragSession::begin(pointer, self.placement.offset()));
    }

    /// Pointer moved over the preview surface.
    ///
    /// Ignored while idle. While dragging, the candidate offset is accepted
    /// only when both axes are in bounds; otherwise the logo stays frozen
    /// at its last in-bounds position.
    pub fn pointer_move(&mut self, pointer: PreviewPoint) {
        if let Some(drag) = self.drag {
            self.placement.set_position(drag.candidate_offset(pointer));
        }
    }

    /// Pointer released: ends the drag, keeping the current position.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Pointer left the preview surface: ends the drag like `pointer_up`.
    pub fn pointer_left(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PREVIEW_SIZE;

    fn test_logo() -> RasterAsset {
        RasterAsset::from_rgba(64, 64, vec![255; 64 * 64 * 4])
    }

    #[test]
    fn pointer_down_without_logo_is_a_no_op() {
        let mut controller = InteractionController::new();
        controller.pointer_down(PreviewPoint::new(10.0, 10.0), None);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn pointer_down_outside_logo_is_a_no_op() {
        let logo = test_logo();
        let mut controller = InteractionController::new();
        // Logo sits at the origin at 100% scale: 256 wide, 256 tall.
        controller.pointer_down(PreviewPoint::new(300.0, 10.0), Some(&logo));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn drag_moves_logo_by_pointer_delta() {
        let logo = test_logo();
        let mut controller = InteractionController::new();

        controller.pointer_down(PreviewPoint::new(100.0, 100.0), Some(&logo));
        assert!(controller.is_dragging());

        controller.pointer_move(PreviewPoint::new(150.0, 130.0));
        assert_eq!(controller.placement().offset(), PreviewPoint::new(50.0, 30.0));

        controller.pointer_up();
        assert!(!controller.is_dragging());
        assert_eq!(controller.placement().offset(), PreviewPoint::new(50.0, 30.0));
    }

    #[test]
    fn out_of_bounds_candidate_freezes_both_axes() {
        let logo = test_logo();
        let mut controller = InteractionController::new();

        // Place the logo at (50, 50) first.
        controller.pointer_down(PreviewPoint::new(0.0, 0.0), Some(&logo));
        controller.pointer_move(PreviewPoint::new(50.0, 50.0));
        controller.pointer_up();

        // Grab at (100, 100): the pointer offset becomes (50, 50).
        controller.pointer_down(PreviewPoint::new(100.0, 100.0), Some(&logo));
        controller.pointer_move(PreviewPoint::new(40.0, 40.0));

        // Candidate (-10, -10) is rejected entirely.
        assert_eq!(controller.placement().offset(), PreviewPoint::new(50.0, 50.0));
    }

    #[test]
    fn offset_never_leaves_the_preview_surface() {
        let logo = test_logo();
        let mut controller = InteractionController::new();
        controller.pointer_down(PreviewPoint::new(0.0, 0.0), Some(&logo));

        let moves = [
            (100.0, 100.0),
            (400.0, 100.0),
            (-50.0, -50.0),
            (255.0, 256.0),
            (300.0, 300.0),
            (10.0, 500.0),
            (20.0, 30.0),
        ];
        for (x, y) in moves {
            controller.pointer_move(PreviewPoint::new(x, y));
            let offset = controller.placement().offset();
            assert!((0.0..=PREVIEW_SIZE).contains(&offset.x));
            assert!((0.0..=PREVIEW_SIZE).contains(&offset.y));
        }
    }

    #[test]
    fn pointer_move_while_idle_does_not_move_the_logo() {
        let mut controller = InteractionController::new();
        controller.pointer_move(PreviewPoint::new(120.0, 120.0));
        assert_eq!(controller.placement().offset(), PreviewPoint::new(0.0, 0.0));
    }

    #[test]
    fn pointer_leave_ends_the_drag_without_moving() {
        let logo = test_logo();
        let mut controller = InteractionController::new();
        controller.pointer_down(PreviewPoint::new(10.0, 10.0), Some(&logo));
        controller.pointer_move(PreviewPoint::new(60.0, 60.0));
        controller.pointer_left();

        assert!(!controller.is_dragging());
        assert_eq!(controller.placement().offset(), PreviewPoint::new(50.0, 50.0));

        // Moves after leaving are ignored until the next pointer-down.
        controller.pointer_move(PreviewPoint::new(200.0, 200.0));
        assert_eq!(controller.placement().offset(), PreviewPoint::new(50.0, 50.0));
    }
}
