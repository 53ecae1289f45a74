//! The three bitmaps the game draws with.

use std::path::Path;

use tracing::{debug, error};

use crate::canvas::Canvas;
use crate::core::MarkPainter;
use crate::error::AssetLoadError;
use crate::texture::Texture;
use crate::types::{Player, GRID_ASSET, O_ASSET, X_ASSET};

/// Grid background plus the X and O marks. Loaded once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    pub grid: Texture,
    pub x: Texture,
    pub o: Texture,
}

impl Assets {
    /// Load `grid.bmp`, `x.bmp` and `o.bmp` from `dir`.
    ///
    /// Every file is attempted and every failure logged, so a single run
    /// reports all missing assets. The first failure is returned.
    pub fn load(dir: &Path) -> Result<Self, AssetLoadError> {
        let grid = load_one(dir, GRID_ASSET);
        let x = load_one(dir, X_ASSET);
        let o = load_one(dir, O_ASSET);
        Ok(Self {
            grid: grid?,
            x: x?,
            o: o?,
        })
    }

    pub fn mark(&self, player: Player) -> &Texture {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }
}

fn load_one(dir: &Path, name: &str) -> Result<Texture, AssetLoadError> {
    let path = dir.join(name);
    match Texture::load_bmp(&path) {
        Ok(texture) => {
            debug!(
                path = %path.display(),
                width = texture.width(),
                height = texture.height(),
                "loaded texture"
            );
            Ok(texture)
        }
        Err(err) => {
            error!(path = %path.display(), error = %err.source, "failed to load texture");
            Err(err)
        }
    }
}

/// Paints board marks onto a canvas using the loaded textures.
pub struct MarkBrush<'a> {
    canvas: &'a mut Canvas,
    assets: &'a Assets,
}

impl<'a> MarkBrush<'a> {
    pub fn new(canvas: &'a mut Canvas, assets: &'a Assets) -> Self {
        Self { canvas, assets }
    }
}

impl MarkPainter for MarkBrush<'_> {
    fn paint(&mut self, player: Player, x: i32, y: i32) {
        self.canvas.blit(self.assets.mark(player), x, y);
    }
}
