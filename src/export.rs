// SPDX-License-Identifier: MPL-2.0
//! Export orchestration: input snapshotting, composition, and the
//! file-save side effect.
//!
//! Export requests are explicitly serialized: a second request while one
//! is outstanding is rejected rather than queued. There is no retry; a
//! failed export reports an error and leaves everything else untouched.

use crate::assets::{AssetStore, RasterAsset};
use crate::compositor::{self, CompositeResult};
use crate::error::{Error, Result};
use crate::placement::PlacementModel;
use std::fs;
use std::path::Path;

/// Immutable inputs for one export, captured before composition starts.
///
/// The logo reference is the only state shared between the interaction
/// path and the export path; snapshotting it here means a logo replacement
/// that lands while an export is in flight cannot be observed mid-draw.
#[derive(Debug, Clone)]
pub struct ExportSnapshot {
    background: RasterAsset,
    logo: Option<RasterAsset>,
    placement: PlacementModel,
}

impl ExportSnapshot {
    #[must_use]
    pub fn capture(store: &AssetStore, placement: &PlacementModel) -> Self {
        Self {
            background: store.background().clone(),
            logo: store.logo().cloned(),
            placement: *placement,
        }
    }

    /// Runs the two-pass rasterizer over the captured inputs.
    pub fn compose(&self) -> Result<CompositeResult> {
        compositor::composite(&self.background, self.logo.as_ref(), &self.placement)
    }
}

/// Guards the export pipeline against re-entrant double submission.
#[derive(Debug, Default)]
pub struct ExportController {
    in_flight: bool,
}

impl ExportController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Claims the export slot. Returns `false` when an export is already
    /// outstanding; the caller must then drop the request.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Releases the export slot once the save side effect has resolved
    /// (written, failed, or cancelled).
    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

/// Writes the composited bytes to `path`.
///
/// On failure the composite is discarded by the caller; nothing is retried.
pub fn save_composite(result: &CompositeResult, path: &Path) -> Result<()> {
    fs::write(path, result.bytes()).map_err(|e| Error::Save(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_with_background() -> AssetStore {
        AssetStore::new(RasterAsset::from_rgba(2, 2, vec![0; 2 * 2 * 4]))
    }

    #[test]
    fn second_export_is_rejected_while_one_is_outstanding() {
        let mut controller = ExportController::new();

        assert!(controller.begin());
        assert!(controller.is_in_flight());
        assert!(!controller.begin());

        controller.finish();
        assert!(controller.begin());
    }

    #[test]
    fn snapshot_is_immune_to_later_logo_replacement() {
        let mut store = store_with_background();
        let placement = PlacementModel::default();

        let snapshot = ExportSnapshot::capture(&store, &placement);
        store.install_logo(RasterAsset::from_rgba(1, 1, vec![255, 0, 0, 255]));

        // The snapshot was taken before the install: background only.
        assert!(snapshot.logo.is_none());
        snapshot.compose().expect("background-only export succeeds");
    }

    #[test]
    fn save_composite_writes_the_bytes() {
        let store = store_with_background();
        let snapshot = ExportSnapshot::capture(&store, &PlacementModel::default());
        let result = snapshot.compose().expect("export succeeds");

        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("tshirt_design.png");
        save_composite(&result, &path).expect("write succeeds");

        let written = std::fs::read(&path).expect("file exists");
        assert_eq!(written, result.bytes());
    }

    #[test]
    fn save_to_missing_directory_reports_save_error() {
        let store = store_with_background();
        let snapshot = ExportSnapshot::capture(&store, &PlacementModel::default());
        let result = snapshot.compose().expect("export succeeds");

        let outcome = save_composite(&result, Path::new("/nonexistent/dir/out.png"));
        assert!(matches!(outcome, Err(Error::Save(_))));
    }
}
