use thiserror::Error;

use crate::term::{AssetLoadError, InitError};

/// Why the game did not run to a normal quit.
///
/// None of these change the process exit status; they are logged and the
/// program proceeds to teardown.
#[derive(Debug, Error)]
pub enum GameError {
    /// The platform could not be brought up.
    #[error("failed to initialize")]
    Init(#[from] InitError),

    /// A bitmap was missing or unreadable; the loop never started.
    #[error("failed to load media")]
    AssetLoad(#[from] AssetLoadError),

    /// Polling or presenting failed mid-game.
    #[error(transparent)]
    Runtime(#[from] anyhow::Error),
}
