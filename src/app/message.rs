// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::assets::RasterAsset;
use crate::compositor::CompositeResult;
use crate::error::Error;
use iced::Point;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the logo file picker.
    PickLogo,
    /// A logo finished reading and decoding. `None` when the picker was
    /// cancelled.
    LogoLoaded(Option<Result<RasterAsset, Error>>),
    /// Pointer pressed on the preview surface.
    PointerPressed,
    /// Pointer moved over the preview surface (preview-space coordinates).
    PointerMoved(Point),
    /// Pointer released over the preview surface.
    PointerReleased,
    /// Pointer left the preview surface.
    PointerExited,
    /// Scale slider changed (integer percent, 10-200).
    ScaleChanged(f32),
    /// Export button pressed.
    ExportRequested,
    /// Composition finished for the outstanding export.
    CompositeFinished(Result<CompositeResult, Error>),
    /// Save dialog resolved (`None` = cancelled).
    SaveLocationChosen(Option<PathBuf>),
    /// The composited file was written, or writing it failed.
    SaveFinished(Result<PathBuf, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional logo image path to preload on startup.
    pub logo_path: Option<String>,
}
