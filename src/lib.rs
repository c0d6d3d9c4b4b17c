//! # Curvetrail
//!
//! Trailing parametric curve animators rendered headlessly into RGBA
//! framebuffers.
//!
//! Each animator owns a persistent trail raster. Every tick it fades the
//! raster slightly toward the background, samples a closed-form curve at the
//! current progress value, and draws the new geometry on top, producing the
//! classic phosphor-trail look. Presentation (compositing the trail beneath
//! fresh per-frame overlays) is separate from mutation, so frames can be
//! encoded to PNG or handed to any display surface.
//!
//! Two animators are provided:
//!
//! - [`animator::butterfly::Butterfly`]: a single tracer following the
//!   butterfly curve `r = e^cos(t) - 2 cos(4t) - sin^5(t/12)`, drawing either
//!   rainbow dots or glow-backed strokes.
//! - [`animator::lissajous::LissajousGrid`]: an n x n grid of Lissajous
//!   figures driven by per-axis guide circles, with runtime grid resizing and
//!   per-axis frequency control.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use curvetrail::prelude::*;
//!
//! let mut fly = Butterfly::new(ButterflyConfig::smooth())?;
//! for _ in 0..600 {
//!     fly.tick();
//! }
//! PngEncoder::write_to_file(fly.frame(), "butterfly.png")?;
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and color space conversions.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives.
pub mod geometry;

/// Parametric curve samplers and screen mapping.
pub mod curve;

// ============================================================================
// Animation Modules
// ============================================================================

/// Persistent trail raster with fade-and-draw operations.
pub mod trail;

/// Frame drivers and the concrete animators.
pub mod animator;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization primitives.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Console Art
// ============================================================================

/// ASCII heart pattern generation for the console printer.
pub mod heart;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for curvetrail operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust,ignore
/// use curvetrail::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animator::butterfly::{Butterfly, ButterflyConfig, GlowStyle, TraceStyle};
    pub use crate::animator::lissajous::{GridConfig, LissajousGrid};
    pub use crate::animator::{Driver, DriverState};
    pub use crate::color::{Hsla, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::Point;
    pub use crate::output::PngEncoder;
    pub use crate::trail::TrailCanvas;
}
