// SPDX-License-Identifier: MPL-2.0
//! `tee_studio` is a small garment mockup designer built with the Iced GUI
//! framework.
//!
//! A user-supplied logo image is placed on a bundled t-shirt background,
//! repositioned by dragging and resized with a slider, and the composited
//! result is exported as a 640x640 PNG. The compositing and placement
//! engine (coordinate mapping, drag state machine, two-pass rasterizer) is
//! plain library code, independent of the widget layer.

pub mod app;
pub mod assets;
pub mod compositor;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod interaction;
pub mod placement;
