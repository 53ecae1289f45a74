//! Decoded bitmaps with colour-key transparency.

use std::path::Path;

use crate::error::AssetLoadError;
use crate::types::{Rgb, COLOR_KEY};

/// An immutable image. Texels matching the colour key are stored as `None`
/// and skipped when blitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    texels: Vec<Option<Rgb>>,
}

impl Texture {
    /// Build a texture from row-major pixels, dropping every pixel equal to
    /// `key`. Missing pixels are treated as transparent, extra ones ignored.
    pub fn from_pixels(
        width: u32,
        height: u32,
        pixels: impl IntoIterator<Item = Rgb>,
        key: Option<Rgb>,
    ) -> Self {
        let len = (width as usize) * (height as usize);
        let mut texels: Vec<Option<Rgb>> = pixels
            .into_iter()
            .take(len)
            .map(|px| if Some(px) == key { None } else { Some(px) })
            .collect();
        texels.resize(len, None);
        Self {
            width,
            height,
            texels,
        }
    }

    /// Decode a bitmap from disk with the magenta colour key applied.
    pub fn load_bmp(path: &Path) -> Result<Self, AssetLoadError> {
        let img = image::open(path)
            .map_err(|source| AssetLoadError {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]));
        Ok(Self::from_pixels(width, height, pixels, Some(COLOR_KEY)))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texel at (x, y); `None` when transparent or out of range.
    pub fn texel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.texels[(y as usize) * (self.width as usize) + (x as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_key_becomes_transparent() {
        let red = Rgb::new(255, 0, 0);
        let tex = Texture::from_pixels(2, 1, [COLOR_KEY, red], Some(COLOR_KEY));
        assert_eq!(tex.texel(0, 0), None);
        assert_eq!(tex.texel(1, 0), Some(red));
        assert_eq!(tex.texel(2, 0), None);
    }

    #[test]
    fn test_short_pixel_data_is_padded_transparent() {
        let tex = Texture::from_pixels(2, 2, [Rgb::new(1, 2, 3)], None);
        assert_eq!(tex.texel(0, 0), Some(Rgb::new(1, 2, 3)));
        assert_eq!(tex.texel(1, 1), None);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Texture::load_bmp(Path::new("definitely/not/here.bmp")).unwrap_err();
        assert_eq!(err.path, Path::new("definitely/not/here.bmp"));
        assert!(err.to_string().contains("here.bmp"));
    }
}
