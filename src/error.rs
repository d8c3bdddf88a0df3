// SPDX-License-Identifier: MPL-2.0
//! Error taxonomy for the designer session.
//!
//! All variants except a failed background decode at startup are recovered
//! at the application boundary and surfaced as a status line.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// A user-supplied logo failed to decode. The previously loaded logo,
    /// if any, is retained unchanged.
    InvalidAsset(String),

    /// A decoded asset has a zero-width raster and cannot be scaled.
    DegenerateAsset(String),

    /// Drawing or encoding the export target failed. No partial output is
    /// ever handed to the save step.
    Composition(String),

    /// Writing the composited file to disk failed. The bytes are discarded.
    Save(String),

    /// I/O error outside the save path (reading a logo file, config, etc.).
    Io(String),

    /// Settings file could not be serialized or written.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidAsset(e) => write!(f, "Invalid image: {}", e),
            Error::DegenerateAsset(e) => write!(f, "Degenerate image: {}", e),
            Error::Composition(e) => write!(f, "Composition failed: {}", e),
            Error::Save(e) => write!(f, "Save failed: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_invalid_asset() {
        let err = Error::InvalidAsset("bad magic bytes".to_string());
        assert_eq!(format!("{}", err), "Invalid image: bad magic bytes");
    }

    #[test]
    fn display_formats_save_error() {
        let err = Error::Save("permission denied".to_string());
        assert_eq!(format!("{}", err), "Save failed: permission denied");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn composition_error_formats_properly() {
        let err = Error::Composition("encode step".into());
        assert_eq!(format!("{}", err), "Composition failed: encode step");
    }
}
