//! Raster frame type consumed by the renderer.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// A rectangular, row-major grid of RGBA8 pixels.
///
/// Produced by a decoder or capturer and handed to the renderer for a
/// single frame. Frames are never retained across renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterFrame {
    image: RgbaImage,
}

impl RasterFrame {
    /// Create a frame from raw RGBA bytes.
    ///
    /// Returns `None` if `data` is not exactly `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, data).map(|image| Self { image })
    }

    /// Create a frame where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(rgba)),
        }
    }

    /// Create a frame by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 4]) -> Self {
        Self {
            image: RgbaImage::from_fn(width, height, |x, y| Rgba(f(x, y))),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_empty(&self) -> bool {
        self.image.width() == 0 || self.image.height() == 0
    }

    /// RGBA value of the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Raw RGBA bytes of one source row (`width * 4` bytes).
    ///
    /// # Panics
    /// Panics if `y` is out of bounds.
    pub fn row_bytes(&self, y: u32) -> &[u8] {
        let stride = self.image.width() as usize * 4;
        let start = y as usize * stride;
        &self.image.as_raw()[start..start + stride]
    }

    /// Stretch the frame to exactly `width` x `height` with nearest-neighbor
    /// sampling. A zero target dimension yields an empty frame.
    pub fn resized(&self, width: u32, height: u32) -> Self {
        if width == 0 || height == 0 || self.is_empty() {
            return Self {
                image: RgbaImage::new(width, height),
            };
        }
        if width == self.width() && height == self.height() {
            return self.clone();
        }
        Self {
            image: imageops::resize(&self.image, width, height, FilterType::Nearest),
        }
    }
}

impl From<RgbaImage> for RasterFrame {
    fn from(image: RgbaImage) -> Self {
        Self { image }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_rejects_wrong_length() {
        assert!(RasterFrame::from_rgba(2, 2, vec![0; 15]).is_none());
        assert!(RasterFrame::from_rgba(2, 2, vec![0; 16]).is_some());
    }

    #[test]
    fn test_pixel_is_row_major() {
        let data = vec![
            1, 1, 1, 255, 2, 2, 2, 255, //
            3, 3, 3, 255, 4, 4, 4, 255,
        ];
        let frame = RasterFrame::from_rgba(2, 2, data).unwrap();
        assert_eq!(frame.pixel(1, 0), [2, 2, 2, 255]);
        assert_eq!(frame.pixel(0, 1), [3, 3, 3, 255]);
    }

    #[test]
    fn test_row_bytes_slices_one_scanline() {
        let frame = RasterFrame::from_fn(3, 2, |x, y| [x as u8, y as u8, 0, 255]);
        assert_eq!(
            frame.row_bytes(1),
            &[0, 1, 0, 255, 1, 1, 0, 255, 2, 1, 0, 255]
        );
    }

    #[test]
    fn test_resized_stretches_to_exact_size() {
        let frame = RasterFrame::filled(10, 7, [9, 8, 7, 255]);
        let resized = frame.resized(80, 46);
        assert_eq!(resized.width(), 80);
        assert_eq!(resized.height(), 46);
        assert_eq!(resized.pixel(79, 45), [9, 8, 7, 255]);
    }

    #[test]
    fn test_resized_nearest_keeps_source_colors() {
        // Left half red, right half blue; upscaling must not blend.
        let frame = RasterFrame::from_fn(2, 1, |x, _| {
            if x == 0 {
                [255, 0, 0, 255]
            } else {
                [0, 0, 255, 255]
            }
        });
        let resized = frame.resized(8, 2);
        for y in 0..2 {
            for x in 0..8 {
                let p = resized.pixel(x, y);
                assert!(p == [255, 0, 0, 255] || p == [0, 0, 255, 255], "blended pixel {p:?}");
            }
        }
        assert_eq!(resized.pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(resized.pixel(7, 0), [0, 0, 255, 255]);
    }

    #[test]
    fn test_resized_zero_target_is_empty() {
        let frame = RasterFrame::filled(4, 4, [0, 0, 0, 255]);
        assert!(frame.resized(0, 10).is_empty());
        assert!(frame.resized(10, 0).is_empty());
    }
}
