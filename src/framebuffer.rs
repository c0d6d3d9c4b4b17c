//! Core framebuffer for pixel rendering.
//!
//! Provides a SIMD-aligned RGBA pixel buffer. Whole-buffer operations such as
//! [`Framebuffer::fade_toward`] use trueno for SIMD-accelerated vector math.

use crate::color::Rgba;
use crate::error::{Error, Result};
use trueno::Vector;

/// Alignment for SIMD operations (64 bytes for AVX-512).
const SIMD_ALIGNMENT: usize = 64;

/// SIMD-aligned RGBA framebuffer.
///
/// Rows are padded to a 64-byte stride so that row slices stay friendly to
/// wide SIMD loads. Pixels are stored row-major as `[R, G, B, A]` bytes.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use curvetrail::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 800).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + SIMD_ALIGNMENT - 1) & !(SIMD_ALIGNMENT - 1);
        let size = stride * (height as usize);

        let mut pixels = Vec::with_capacity(size + SIMD_ALIGNMENT);
        pixels.resize(size, 0);

        Ok(Self {
            width,
            height,
            pixels,
            stride,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let [r, g, b, a] = color.to_array();

        // 64-byte pattern (16 pixels) for SIMD-friendly memset
        let pattern: [u8; 64] = {
            let mut p = [0u8; 64];
            for i in 0..16 {
                p[i * 4] = r;
                p[i * 4 + 1] = g;
                p[i * 4 + 2] = b;
                p[i * 4 + 3] = a;
            }
            p
        };

        for y in 0..self.height {
            let row_start = (y as usize) * self.stride;
            let row_end = row_start + (self.width as usize) * 4;
            let row = &mut self.pixels[row_start..row_end];

            let mut offset = 0;
            while offset + 64 <= row.len() {
                row[offset..offset + 64].copy_from_slice(&pattern);
                offset += 64;
            }

            for chunk in row[offset..].chunks_exact_mut(4) {
                chunk[0] = r;
                chunk[1] = g;
                chunk[2] = b;
                chunk[3] = a;
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        let [r, g, b, a] = color.to_array();
        self.pixels[idx] = r;
        self.pixels[idx + 1] = g;
        self.pixels[idx + 2] = b;
        self.pixels[idx + 3] = a;
    }

    /// Blend a color at a specific pixel coordinate using alpha blending.
    ///
    /// Uses the standard "over" compositing operation:
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a > 0.0 {
            let blend = |src: u8, dst: u8| -> u8 {
                let src_f = f32::from(src) / 255.0;
                let dst_f = f32::from(dst) / 255.0;
                let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
                (out * 255.0) as u8
            };

            self.pixels[idx] = blend(color.r, self.pixels[idx]);
            self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
            self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
            self.pixels[idx + 3] = (out_a * 255.0) as u8;
        }
    }

    /// Blend every pixel toward a solid color with a small fixed opacity.
    ///
    /// This is the trail decay step: with `alpha` around 0.01-0.05 per tick,
    /// drawn geometry fades exponentially toward the background. `alpha` is
    /// clamped to `[0, 1]`; 0 leaves the buffer untouched, 1 is a full clear.
    ///
    /// Uses trueno Vector operations row by row:
    /// `out = background * alpha + dst * (1 - alpha)`.
    pub fn fade_toward(&mut self, background: Rgba, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let inv_alpha = 1.0 - alpha;
        let row_pixels = (self.width as usize) * 4;

        // Pre-scaled background pattern, one entry per channel byte
        let bg = background.to_array();
        let bg_scaled: Vec<f32> = (0..row_pixels)
            .map(|i| f32::from(bg[i % 4]) * alpha)
            .collect();

        for y in 0..self.height {
            let row_start = (y as usize) * self.stride;
            let dst_f32: Vec<f32> = self.pixels[row_start..row_start + row_pixels]
                .iter()
                .map(|&b| f32::from(b))
                .collect();

            let dst_vec = Vector::from_vec(dst_f32);
            let bg_vec = Vector::from_vec(bg_scaled.clone());

            if let Ok(dst_scaled) = dst_vec.mul(&Vector::from_vec(vec![inv_alpha; row_pixels])) {
                if let Ok(result) = dst_scaled.add(&bg_vec) {
                    let row = &mut self.pixels[row_start..row_start + row_pixels];
                    for (i, &v) in result.as_slice().iter().enumerate() {
                        row[i] = v.clamp(0.0, 255.0) as u8;
                    }
                }
            }
        }
    }

    /// Copy pixel data from another framebuffer of identical dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffers have different dimensions.
    pub fn copy_from(&mut self, other: &Framebuffer) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::InvalidDimensions {
                width: other.width,
                height: other.height,
            });
        }

        // Strides are derived from width, so the layouts match
        self.pixels.copy_from_slice(&other.pixels);
        Ok(())
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// Useful for encoding to formats like PNG that expect tightly-packed
    /// pixel data.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels[..row_bytes * (self.height as usize)].to_vec();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert!(fb.stride() >= 400);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::RED));
            }
        }
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(100, 100), None);
    }

    #[test]
    fn test_blend_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);

        let semi_red = Rgba::new(255, 0, 0, 128);
        fb.blend_pixel(5, 5, semi_red);

        let result = fb.get_pixel(5, 5).unwrap();
        // Pinkish blend of red over white
        assert!(result.r > 200);
        assert!(result.g > 100);
        assert!(result.b > 100);
    }

    #[test]
    fn test_fade_toward_darkens() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.clear(Rgba::WHITE);

        fb.fade_toward(Rgba::BLACK, 0.5);

        let result = fb.get_pixel(10, 10).unwrap();
        assert!(result.r > 100 && result.r < 150);
        assert!(result.g > 100 && result.g < 150);
        assert!(result.b > 100 && result.b < 150);
    }

    #[test]
    fn test_fade_toward_converges() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);

        // Repeated small fades must decay toward the background
        for _ in 0..600 {
            fb.fade_toward(Rgba::BLACK, 0.05);
        }

        let result = fb.get_pixel(5, 5).unwrap();
        assert!(result.r < 10);
        assert!(result.g < 10);
        assert!(result.b < 10);
    }

    #[test]
    fn test_fade_toward_zero_alpha_is_noop() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::GREEN);

        fb.fade_toward(Rgba::BLACK, 0.0);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::GREEN));
    }

    #[test]
    fn test_copy_from() {
        let mut dst = Framebuffer::new(50, 50).unwrap();
        let mut src = Framebuffer::new(50, 50).unwrap();
        src.clear(Rgba::BLUE);

        dst.copy_from(&src).unwrap();
        assert_eq!(dst.get_pixel(25, 25), Some(Rgba::BLUE));
    }

    #[test]
    fn test_copy_from_dimension_mismatch() {
        let mut dst = Framebuffer::new(50, 50).unwrap();
        let src = Framebuffer::new(40, 50).unwrap();
        assert!(dst.copy_from(&src).is_err());
    }

    #[test]
    fn test_compact_pixels_size() {
        let fb = Framebuffer::new(33, 7).unwrap();
        assert_eq!(fb.to_compact_pixels().len(), 33 * 7 * 4);
    }
}
