//! Persistent trail raster with fade-and-draw operations.
//!
//! A [`TrailCanvas`] accumulates drawn geometry across frames. Each tick the
//! animator calls [`TrailCanvas::fade`] once, blending the whole buffer
//! slightly toward the background color, then draws the new sample at full
//! strength on top. The result is an exponentially decaying motion trail.
//!
//! The canvas is owned exclusively by one animator and mutated only from its
//! tick path; presentation reads it immutably.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::render;

/// Persistent raster accumulating faded drawing history.
#[derive(Debug, Clone)]
pub struct TrailCanvas {
    buffer: Framebuffer,
    background: Rgba,
    fade_alpha: f32,
}

impl TrailCanvas {
    /// Create a trail canvas cleared to the background color.
    ///
    /// `fade_alpha` is the per-tick decay opacity; small values (0.01-0.05)
    /// give long trails.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32, background: Rgba, fade_alpha: f32) -> Result<Self> {
        let mut buffer = Framebuffer::new(width, height)?;
        buffer.clear(background);
        Ok(Self {
            buffer,
            background,
            fade_alpha: fade_alpha.clamp(0.0, 1.0),
        })
    }

    /// One decay step: blend the whole buffer toward the background.
    pub fn fade(&mut self) {
        self.buffer.fade_toward(self.background, self.fade_alpha);
    }

    /// Clear the buffer back to the background outright (no decay).
    pub fn clear(&mut self) {
        self.buffer.clear(self.background);
    }

    /// Draw a filled dot at full strength.
    pub fn dot(&mut self, center: Point, diameter: f32, color: Rgba) {
        render::draw_dot(&mut self.buffer, center, diameter, color);
    }

    /// Draw a round-capped stroke between two points.
    pub fn segment(&mut self, from: Point, to: Point, width: f32, color: Rgba) {
        render::draw_segment(&mut self.buffer, from, to, width, color);
    }

    /// Draw a glowing stroke: a wide translucent back layer under a bright
    /// core stroke of the same color.
    pub fn glow_segment(
        &mut self,
        from: Point,
        to: Point,
        core_width: f32,
        glow_width: f32,
        glow_alpha: u8,
        color: Rgba,
    ) {
        render::draw_segment(
            &mut self.buffer,
            from,
            to,
            glow_width,
            color.with_alpha(glow_alpha),
        );
        render::draw_segment(&mut self.buffer, from, to, core_width, color);
    }

    /// The accumulated trail raster.
    #[must_use]
    pub fn buffer(&self) -> &Framebuffer {
        &self.buffer
    }

    /// Background color the canvas decays toward.
    #[must_use]
    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Per-tick decay opacity.
    #[must_use]
    pub fn fade_alpha(&self) -> f32 {
        self.fade_alpha
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> TrailCanvas {
        TrailCanvas::new(100, 100, Rgba::BLACK, 0.05).unwrap()
    }

    #[test]
    fn test_new_is_cleared_to_background() {
        let c = canvas();
        assert_eq!(c.buffer().get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(c.width(), 100);
        assert_eq!(c.height(), 100);
    }

    #[test]
    fn test_dot_then_fade_decays() {
        let mut c = canvas();
        c.dot(Point::new(50.0, 50.0), 4.0, Rgba::WHITE);
        assert_eq!(c.buffer().get_pixel(50, 50), Some(Rgba::WHITE));

        c.fade();
        let faded = c.buffer().get_pixel(50, 50).unwrap();
        assert!(faded.r < 255);
        assert!(faded.r > 200);

        // Many fades approach background
        for _ in 0..400 {
            c.fade();
        }
        assert!(c.buffer().get_pixel(50, 50).unwrap().r < 5);
    }

    #[test]
    fn test_clear_drops_everything_at_once() {
        let mut c = canvas();
        c.segment(Point::new(10.0, 10.0), Point::new(90.0, 90.0), 2.0, Rgba::GREEN);
        c.clear();

        for y in 0..100 {
            for x in 0..100 {
                assert_eq!(c.buffer().get_pixel(x, y), Some(Rgba::BLACK));
            }
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut c1 = canvas();
        c1.dot(Point::new(20.0, 20.0), 6.0, Rgba::RED);
        c1.clear();
        let once = c1.buffer().to_compact_pixels();

        c1.clear();
        let twice = c1.buffer().to_compact_pixels();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_glow_segment_layers() {
        let mut c = canvas();
        c.glow_segment(
            Point::new(20.0, 50.0),
            Point::new(80.0, 50.0),
            2.0,
            6.0,
            32,
            Rgba::RED,
        );

        // Core is saturated red
        let core = c.buffer().get_pixel(50, 50).unwrap();
        assert!(core.r > 200);

        // Glow halo off-axis is dim but present
        let halo = c.buffer().get_pixel(50, 47).unwrap();
        assert!(halo.r > 0);
        assert!(halo.r < core.r);
    }
}
