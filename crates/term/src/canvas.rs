//! Logical pixel surface the game draws into every frame.

use crate::texture::Texture;
use crate::types::{Rgb, SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Copy `texture` at its own size with its top-left corner at (x, y).
    ///
    /// Transparent texels leave the canvas untouched; anything falling outside
    /// the canvas is clipped.
    pub fn blit(&mut self, texture: &Texture, x: i32, y: i32) {
        let x0 = i64::from(x).max(0);
        let y0 = i64::from(y).max(0);
        let x1 = (i64::from(x) + i64::from(texture.width())).min(i64::from(self.width));
        let y1 = (i64::from(y) + i64::from(texture.height())).min(i64::from(self.height));

        for cy in y0..y1 {
            let ty = (cy - i64::from(y)) as u32;
            let row = (cy as usize) * (self.width as usize);
            for cx in x0..x1 {
                let tx = (cx - i64::from(x)) as u32;
                if let Some(color) = texture.texel(tx, ty) {
                    self.pixels[row + cx as usize] = color;
                }
            }
        }
    }
}
