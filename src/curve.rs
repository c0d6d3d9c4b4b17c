//! Parametric curve samplers and screen mapping.
//!
//! Pure functions from a progress scalar to curve-space coordinates, plus the
//! curve-to-screen transform with the vertical-axis inversion every raster
//! surface needs (y grows downward on screen).
//!
//! The samplers have no error conditions: the domain is all reals and the
//! outputs are finite for every input.

use crate::geometry::Point;
use std::f64::consts::{E, TAU};

/// Upper bound on `|butterfly_radius(t)|` for any t.
///
/// `exp(cos t)` peaks at e, `2 cos(4t)` at 2, `sin^5(t/12)` at 1.
pub const BUTTERFLY_RADIUS_BOUND: f64 = E + 3.0;

/// Radius of the butterfly curve at progress `t`:
/// `r = e^cos(t) - 2 cos(4t) - sin^5(t/12)`.
#[must_use]
pub fn butterfly_radius(t: f64) -> f64 {
    t.cos().exp() - 2.0 * (4.0 * t).cos() - (t / 12.0).sin().powi(5)
}

/// Curve-space position of the butterfly tracer at progress `t`.
///
/// The curve is expressed in the rotated polar form `(r sin t, r cos t)`,
/// which orients the butterfly upright.
#[must_use]
pub fn butterfly(t: f64) -> (f64, f64) {
    let r = butterfly_radius(t);
    (t.sin() * r, t.cos() * r)
}

/// Fraction of a full turn for the rainbow hue ramp: `(t mod 2pi) / 2pi`.
#[must_use]
pub fn hue_fraction(t: f64) -> f32 {
    (t.rem_euclid(TAU) / TAU) as f32
}

/// Position of a rotating marker on a guide circle:
/// `center + radius * (cos angle, sin angle)`.
///
/// Each offset is truncated to a whole pixel before adding, so marker
/// coordinates land on the integer grid the trail segments connect.
#[must_use]
pub fn circle_marker(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + (radius * angle.cos()).trunc() as f32,
        center.y + (radius * angle.sin()).trunc() as f32,
    )
}

/// Transform from curve space to screen space.
///
/// Scales curve coordinates, truncates to whole pixels, and inverts the
/// vertical axis around the center point.
#[derive(Debug, Clone, Copy)]
pub struct ScreenMap {
    /// Screen-space center the curve origin maps to.
    pub center: Point,
    /// Pixels per curve-space unit.
    pub scale: f64,
}

impl ScreenMap {
    /// Map centered on a surface of the given dimensions.
    #[must_use]
    pub fn centered(width: u32, height: u32, scale: f64) -> Self {
        Self {
            center: Point::new((width / 2) as f32, (height / 2) as f32),
            scale,
        }
    }

    /// Map a curve-space point to screen space.
    #[must_use]
    pub fn to_screen(&self, x: f64, y: f64) -> Point {
        Point::new(
            self.center.x + (x * self.scale).trunc() as f32,
            self.center.y - (y * self.scale).trunc() as f32,
        )
    }
}
