//! Failure types for bringing up the surface and loading bitmaps.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The terminal could not be switched into game mode (raw input, alternate
/// screen, mouse capture).
#[derive(Debug, Error)]
#[error("failed to initialize terminal surface")]
pub struct InitError {
    #[from]
    source: io::Error,
}

/// A bitmap could not be read or decoded.
#[derive(Debug, Error)]
#[error("unable to load image {}", .path.display())]
pub struct AssetLoadError {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}
