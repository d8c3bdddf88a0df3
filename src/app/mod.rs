// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the asset store, the interaction controller, and
//! the export pipeline to the widget tree, and translates messages into
//! side effects like file dialogs and config persistence.

mod message;
mod preview;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::assets::AssetStore;
use crate::compositor::CompositeResult;
use crate::config::Config;
use crate::export::ExportController;
use crate::interaction::InteractionController;
use preview::PreviewRenderer;

use iced::{window, Point, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 420;

/// Root Iced application state.
pub struct App {
    store: AssetStore,
    controller: InteractionController,
    exporter: ExportController,
    preview: PreviewRenderer,
    /// Last pointer position observed over the preview surface.
    cursor: Point,
    /// Composite waiting for the save dialog to resolve.
    pending_composite: Option<CompositeResult>,
    /// One-line user feedback (errors and export confirmations).
    status: Option<Status>,
    config: Config,
}

/// Severity of the status line, used only for its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Status {
    pub severity: Severity,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// The asset store is decoded by the caller beforehand: startup without the
/// bundled background is aborted before any window exists.
pub fn run(store: AssetStore, flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap the boot inputs in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming them once.
    let boot_state = RefCell::new(Some((store, flags)));
    let boot = move || {
        let (store, flags) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(store, flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// logo loading based on `Flags` received from the launcher.
    fn new(store: AssetStore, flags: Flags) -> (Self, Task<Message>) {
        let config = crate::config::load().unwrap_or_default();
        let preview = PreviewRenderer::new(store.background());

        let app = App {
            store,
            controller: InteractionController::new(),
            exporter: ExportController::new(),
            preview,
            cursor: Point::ORIGIN,
            pending_composite: None,
            status: None,
            config,
        };

        let task = match flags.logo_path {
            Some(path) => {
                tracing::info!(path = %path, "preloading logo from the command line");
                let path = std::path::PathBuf::from(path);
                Task::perform(
                    async move {
                        let bytes = std::fs::read(&path)
                            .map_err(|e| crate::error::Error::Io(e.to_string()))?;
                        crate::assets::RasterAsset::decode(&bytes)
                    },
                    |result| Message::LogoLoaded(Some(result)),
                )
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        String::from("Tee Studio")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}
