//! Butterfly curve animator.
//!
//! A single tracer follows the butterfly curve, leaving a rainbow trail that
//! decays toward black. Two trace styles cover the classic dotted look and
//! the smooth glow-stroke look; everything else is shared.

use crate::animator::Driver;
use crate::color::{Hsla, Rgba};
use crate::curve::{self, ScreenMap};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::trail::TrailCanvas;

/// Glow layer parameters for [`TraceStyle::Strokes`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowStyle {
    /// Stroke width of the glow back layer in pixels.
    pub width: f32,
    /// Alpha of the glow color (combined opacity of the wide layer).
    pub alpha: u8,
}

impl Default for GlowStyle {
    fn default() -> Self {
        Self {
            width: 6.0,
            alpha: 32,
        }
    }
}

/// How each new sample is drawn into the trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceStyle {
    /// A filled dot per tick; no connecting segments.
    Dots {
        /// Dot diameter in pixels.
        diameter: f32,
    },
    /// A stroke connecting consecutive samples, optionally glow-backed.
    Strokes {
        /// Core stroke width in pixels.
        width: f32,
        /// Optional wide translucent layer drawn beneath the core.
        glow: Option<GlowStyle>,
    },
}

/// Configuration for a [`Butterfly`] animator.
#[derive(Debug, Clone)]
pub struct ButterflyConfig {
    width: u32,
    height: u32,
    scale: f64,
    initial: f64,
    step: f64,
    fade_alpha: f32,
    style: TraceStyle,
}

impl Default for ButterflyConfig {
    fn default() -> Self {
        Self::smooth()
    }
}

impl ButterflyConfig {
    /// Classic variant: rainbow dots, long trail.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            width: 800,
            height: 800,
            scale: 60.0,
            initial: 0.0,
            step: 0.02,
            fade_alpha: 0.01,
            style: TraceStyle::Dots { diameter: 4.0 },
        }
    }

    /// Smooth variant: glow-backed strokes between consecutive samples.
    #[must_use]
    pub fn smooth() -> Self {
        Self {
            style: TraceStyle::Strokes {
                width: 2.0,
                glow: Some(GlowStyle::default()),
            },
            ..Self::classic()
        }
    }

    /// Set the surface dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the curve-to-screen scale (pixels per curve unit).
    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the progress step per tick. Non-positive values are ignored, so
    /// progress always moves forward while running.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        if step > 0.0 {
            self.step = step;
        }
        self
    }

    /// Set the per-tick trail decay opacity.
    #[must_use]
    pub fn fade_alpha(mut self, alpha: f32) -> Self {
        self.fade_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set the trace style.
    #[must_use]
    pub fn style(mut self, style: TraceStyle) -> Self {
        self.style = style;
        self
    }
}

/// Butterfly curve animator: trail canvas, frame driver, and the remembered
/// previous sample for segment drawing.
#[derive(Debug, Clone)]
pub struct Butterfly {
    style: TraceStyle,
    map: ScreenMap,
    driver: Driver,
    trail: TrailCanvas,
    prev: Option<Point>,
}

impl Butterfly {
    /// Create an animator from a configuration. Starts running.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured dimensions are zero.
    pub fn new(config: ButterflyConfig) -> Result<Self> {
        let trail = TrailCanvas::new(config.width, config.height, Rgba::BLACK, config.fade_alpha)?;
        Ok(Self {
            style: config.style,
            map: ScreenMap::centered(config.width, config.height, config.scale),
            driver: Driver::new(config.initial, config.step),
            trail,
            prev: None,
        })
    }

    /// Fire one tick: fade the trail, sample the curve, draw the new
    /// geometry, advance progress.
    ///
    /// Returns `false` (and does nothing) while paused.
    pub fn tick(&mut self) -> bool {
        let Some(t) = self.driver.tick() else {
            return false;
        };

        self.trail.fade();

        let (x, y) = curve::butterfly(t);
        let point = self.map.to_screen(x, y);
        let color = Hsla::wheel(curve::hue_fraction(t)).to_rgba();

        match self.style {
            TraceStyle::Dots { diameter } => {
                self.trail.dot(point, diameter, color);
            }
            TraceStyle::Strokes { width, glow } => match self.prev {
                Some(prev) => {
                    if let Some(g) = glow {
                        self.trail.glow_segment(prev, point, width, g.width, g.alpha, color);
                    } else {
                        self.trail.segment(prev, point, width, color);
                    }
                }
                // No previous sample yet: a single core-width dot
                None => self.trail.dot(point, width, color),
            },
        }

        self.prev = Some(point);
        true
    }

    /// Pause or resume. The only driver state transition.
    pub fn toggle(&mut self) {
        self.driver.toggle();
    }

    /// Whether ticks currently advance the animation.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Clear the trail, drop the previous sample, and restore initial
    /// progress. Run state is unchanged. Idempotent.
    pub fn reset(&mut self) {
        self.trail.clear();
        self.driver.reset_progress();
        self.prev = None;
    }

    /// Current progress value.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.driver.progress()
    }

    /// Screen position of the most recent sample, if any.
    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.prev
    }

    /// The presented frame: the trail buffer as-is (the butterfly has no
    /// per-frame overlays).
    #[must_use]
    pub fn frame(&self) -> &Framebuffer {
        self.trail.buffer()
    }
}
