//! PNG frame encoder.
//!
//! Encodes animator frames (RGBA8 framebuffers) to PNG, pure Rust via the
//! `png` crate. File output is layered on the in-memory encoder so both
//! paths share one code path.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::fs;
use std::path::Path;

/// PNG encoder for animator frames.
pub struct PngEncoder;

impl PngEncoder {
    /// Encode a framebuffer to PNG bytes.
    ///
    /// Stride padding is stripped; the image data is the tightly-packed
    /// RGBA8 pixel grid.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        {
            let mut encoder = png::Encoder::new(&mut buffer, fb.width(), fb.height());
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&fb.to_compact_pixels())?;
        }

        Ok(buffer)
    }

    /// Encode a framebuffer and write it to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding or the file write fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        fs::write(path, Self::to_bytes(fb)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::butterfly::{Butterfly, ButterflyConfig};

    #[test]
    fn test_animator_frame_encodes_with_header() {
        let mut fly = Butterfly::new(ButterflyConfig::smooth()).unwrap();
        for _ in 0..30 {
            fly.tick();
        }

        let bytes = PngEncoder::to_bytes(fly.frame()).unwrap();
        // PNG magic bytes
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
        // IHDR width and height (big-endian, 800 = 0x0320)
        assert_eq!(&bytes[16..20], &[0, 0, 3, 32]);
        assert_eq!(&bytes[20..24], &[0, 0, 3, 32]);
    }

    #[test]
    fn test_distinct_frames_encode_distinct_bytes() {
        let mut fly = Butterfly::new(ButterflyConfig::smooth()).unwrap();
        fly.tick();
        let first = PngEncoder::to_bytes(fly.frame()).unwrap();

        for _ in 0..30 {
            fly.tick();
        }
        let later = PngEncoder::to_bytes(fly.frame()).unwrap();
        assert_ne!(first, later);
    }
}
