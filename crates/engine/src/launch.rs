//! Startup sequence.

use std::path::Path;

use tracing::info;

use crate::error::GameError;
use crate::game::{Game, Outcome};
use crate::platform::Platform;
use crate::term::{Assets, InitError};

/// Bring up the platform, load the assets and run the game to completion.
///
/// Each step short-circuits on failure. The platform and the assets are owned
/// by this frame, so both are released on every return path: after a normal
/// quit, after a runtime error, and when asset loading fails after the
/// platform was already up.
pub fn launch<P, F>(init: F, assets_dir: &Path) -> Result<Outcome, GameError>
where
    P: Platform,
    F: FnOnce() -> Result<P, InitError>,
{
    let mut platform = init()?;
    info!(dir = %assets_dir.display(), "loading media");
    let assets = Assets::load(assets_dir)?;
    let mut game = Game::new(assets);
    Ok(game.run(&mut platform)?)
}
