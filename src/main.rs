// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;
use tee_studio::app::{self, Flags};
use tee_studio::assets::AssetStore;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        logo_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    // No meaningful UI exists without the garment artwork.
    let store = match AssetStore::load_background() {
        Ok(store) => store,
        Err(err) => {
            tracing::error!("cannot start without the bundled garment artwork: {err}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(store, flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("ui runtime failed: {err}");
            ExitCode::FAILURE
        }
    }
}
