// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message, Status};
use crate::assets::RasterAsset;
use crate::config::{self, EXPORT_FILE_NAME};
use crate::export::{self, ExportSnapshot};
use crate::geometry::PreviewPoint;
use iced::Task;
use std::path::PathBuf;

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickLogo => pick_logo_task(),

            Message::LogoLoaded(None) => Task::none(),

            Message::LogoLoaded(Some(Ok(asset))) => {
                tracing::info!(width = asset.width, height = asset.height, "logo decoded");
                self.store.install_logo(asset);
                // Placement survives re-uploads: position and scale are
                // independent of asset identity.
                self.preview.invalidate_logo();
                self.refresh_preview();
                self.status = Some(Status::success("Logo loaded"));
                Task::none()
            }

            Message::LogoLoaded(Some(Err(err))) => {
                tracing::warn!("logo upload failed: {err}");
                self.status = Some(Status::error(err.to_string()));
                Task::none()
            }

            Message::PointerPressed => {
                let pointer = PreviewPoint::new(self.cursor.x, self.cursor.y);
                self.controller.pointer_down(pointer, self.store.logo());
                Task::none()
            }

            Message::PointerMoved(point) => {
                self.cursor = point;
                if self.controller.is_dragging() {
                    self.controller
                        .pointer_move(PreviewPoint::new(point.x, point.y));
                    self.refresh_preview();
                }
                Task::none()
            }

            Message::PointerReleased => {
                self.controller.pointer_up();
                Task::none()
            }

            Message::PointerExited => {
                self.controller.pointer_left();
                Task::none()
            }

            Message::ScaleChanged(percent) => {
                self.controller.set_scale(percent);
                self.refresh_preview();
                Task::none()
            }

            Message::ExportRequested => {
                if !self.exporter.begin() {
                    tracing::warn!("export rejected: one is already in progress");
                    self.status = Some(Status::info("An export is already in progress"));
                    return Task::none();
                }
                tracing::info!("export started");
                let snapshot = ExportSnapshot::capture(&self.store, self.controller.placement());
                Task::perform(async move { snapshot.compose() }, Message::CompositeFinished)
            }

            Message::CompositeFinished(Ok(result)) => {
                self.pending_composite = Some(result);
                save_dialog_task(self.config.last_save_directory.clone())
            }

            Message::CompositeFinished(Err(err)) => {
                self.exporter.finish();
                tracing::error!("composition failed: {err}");
                self.status = Some(Status::error(err.to_string()));
                Task::none()
            }

            Message::SaveLocationChosen(None) => {
                // User cancelled: the composite is discarded silently.
                self.exporter.finish();
                self.pending_composite = None;
                Task::none()
            }

            Message::SaveLocationChosen(Some(path)) => {
                let Some(result) = self.pending_composite.take() else {
                    self.exporter.finish();
                    return Task::none();
                };
                Task::perform(
                    async move { export::save_composite(&result, &path).map(|()| path) },
                    Message::SaveFinished,
                )
            }

            Message::SaveFinished(Ok(path)) => {
                self.exporter.finish();
                tracing::info!(path = %path.display(), "design exported");
                if let Some(parent) = path.parent() {
                    self.config.last_save_directory = Some(parent.to_path_buf());
                    if let Err(err) = config::save(&self.config) {
                        tracing::warn!("could not persist settings: {err}");
                    }
                }
                self.status = Some(Status::success(format!("Saved {}", path.display())));
                Task::none()
            }

            Message::SaveFinished(Err(err)) => {
                self.exporter.finish();
                tracing::error!("saving the design failed: {err}");
                self.status = Some(Status::error(err.to_string()));
                Task::none()
            }
        }
    }

    pub(super) fn refresh_preview(&mut self) {
        self.preview
            .render(self.store.logo(), self.controller.placement());
    }
}

/// Opens the logo picker and decodes the chosen file off the update loop.
fn pick_logo_task() -> Task<Message> {
    Task::perform(
        async {
            let Some(handle) = rfd::AsyncFileDialog::new()
                .set_title("Choose Logo")
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                .pick_file()
                .await
            else {
                return None;
            };
            let bytes = handle.read().await;
            Some(RasterAsset::decode(&bytes))
        },
        Message::LogoLoaded,
    )
}

/// Opens the save dialog pre-filled with the fixed export filename.
fn save_dialog_task(last_save_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title("Save Design")
                .set_file_name(EXPORT_FILE_NAME)
                .add_filter("PNG image", &["png"]);

            if let Some(dir) = last_save_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveLocationChosen,
    )
}
