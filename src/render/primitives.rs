//! Primitive rendering functions.
//!
//! Implements rasterization algorithms for the shapes the animators need:
//! anti-aliased lines, circle outlines, dots, axis-aligned guide lines, and
//! round-capped thick strokes.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw an anti-aliased line using Wu's algorithm.
///
/// Wu's algorithm draws two pixels at each step along the major axis,
/// adjusting their intensities based on the fractional distance from the
/// ideal line position. This is the antialiasing path for thin trail
/// strokes.
pub fn draw_line_aa(fb: &mut Framebuffer, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    let (x0, y0, x1, y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };

    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx.abs() < f32::EPSILON { 1.0 } else { dy / dx };

    // First endpoint
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i32;
    let ypxl1 = yend.floor() as i32;

    if steep {
        plot(fb, ypxl1, xpxl1, color, rfpart(yend) * xgap);
        plot(fb, ypxl1 + 1, xpxl1, color, fpart(yend) * xgap);
    } else {
        plot(fb, xpxl1, ypxl1, color, rfpart(yend) * xgap);
        plot(fb, xpxl1, ypxl1 + 1, color, fpart(yend) * xgap);
    }

    let mut intery = yend + gradient;

    // Second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i32;
    let ypxl2 = yend.floor() as i32;

    if steep {
        plot(fb, ypxl2, xpxl2, color, rfpart(yend) * xgap);
        plot(fb, ypxl2 + 1, xpxl2, color, fpart(yend) * xgap);
    } else {
        plot(fb, xpxl2, ypxl2, color, rfpart(yend) * xgap);
        plot(fb, xpxl2, ypxl2 + 1, color, fpart(yend) * xgap);
    }

    // Main loop
    if steep {
        for x in (xpxl1 + 1)..xpxl2 {
            let ipart = intery.floor() as i32;
            plot(fb, ipart, x, color, rfpart(intery));
            plot(fb, ipart + 1, x, color, fpart(intery));
            intery += gradient;
        }
    } else {
        for x in (xpxl1 + 1)..xpxl2 {
            let ipart = intery.floor() as i32;
            plot(fb, x, ipart, color, rfpart(intery));
            plot(fb, x, ipart + 1, color, fpart(intery));
            intery += gradient;
        }
    }
}

/// Plot a pixel with intensity (for anti-aliased drawing).
#[inline]
fn plot(fb: &mut Framebuffer, x: i32, y: i32, color: Rgba, intensity: f32) {
    if x >= 0 && y >= 0 && x < fb.width() as i32 && y < fb.height() as i32 {
        let alpha = (f32::from(color.a) * intensity) as u8;
        let blended = color.with_alpha(alpha);
        fb.blend_pixel(x as u32, y as u32, blended);
    }
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f32) -> f32 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}

/// Draw a horizontal line, blending when the color is translucent.
pub fn draw_hline(fb: &mut Framebuffer, x0: i32, x1: i32, y: i32, color: Rgba) {
    if y < 0 || y >= fb.height() as i32 {
        return;
    }
    let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    let lo = lo.max(0);
    let hi = hi.min(fb.width() as i32 - 1);
    for x in lo..=hi {
        if color.a == 255 {
            fb.set_pixel(x as u32, y as u32, color);
        } else {
            fb.blend_pixel(x as u32, y as u32, color);
        }
    }
}

/// Draw a vertical line, blending when the color is translucent.
pub fn draw_vline(fb: &mut Framebuffer, x: i32, y0: i32, y1: i32, color: Rgba) {
    if x < 0 || x >= fb.width() as i32 {
        return;
    }
    let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    let lo = lo.max(0);
    let hi = hi.min(fb.height() as i32 - 1);
    for y in lo..=hi {
        if color.a == 255 {
            fb.set_pixel(x as u32, y as u32, color);
        } else {
            fb.blend_pixel(x as u32, y as u32, color);
        }
    }
}

// ============================================================================
// Circle / Dot Drawing
// ============================================================================

/// Draw a circle outline using the midpoint algorithm.
pub fn draw_circle_outline(fb: &mut Framebuffer, cx: i32, cy: i32, radius: i32, color: Rgba) {
    if radius <= 0 {
        if radius == 0 && cx >= 0 && cy >= 0 {
            fb.set_pixel(cx as u32, cy as u32, color);
        }
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        plot_solid(fb, cx + x, cy + y, color);
        plot_solid(fb, cx - x, cy + y, color);
        plot_solid(fb, cx + x, cy - y, color);
        plot_solid(fb, cx - x, cy - y, color);
        plot_solid(fb, cx + y, cy + x, color);
        plot_solid(fb, cx - y, cy + x, color);
        plot_solid(fb, cx + y, cy - x, color);
        plot_solid(fb, cx - y, cy - x, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Draw a filled dot centered on a point, given its diameter in pixels.
///
/// Translucent colors are alpha-blended; opaque colors overwrite.
pub fn draw_dot(fb: &mut Framebuffer, center: Point, diameter: f32, color: Rgba) {
    stamp_disk(fb, center.x, center.y, (diameter / 2.0).max(0.5), color);
}

/// Draw a round-capped stroke of the given width between two points.
///
/// Width at or below 1.5 px falls back to a Wu anti-aliased line; wider
/// strokes are built by stamping overlapping disks along the segment, which
/// reproduces the round-cap, round-join look of a classic wide pen stroke.
pub fn draw_segment(fb: &mut Framebuffer, from: Point, to: Point, width: f32, color: Rgba) {
    if width <= 1.5 {
        draw_line_aa(fb, from.x, from.y, to.x, to.y, color);
        return;
    }

    let radius = width / 2.0;
    let length = from.distance(to);
    let spacing = (radius * 0.5).max(1.0);
    let steps = (length / spacing).ceil() as i32;

    if steps == 0 {
        stamp_disk(fb, from.x, from.y, radius, color);
        return;
    }

    for i in 0..=steps {
        let p = from.lerp(to, i as f32 / steps as f32);
        stamp_disk(fb, p.x, p.y, radius, color);
    }
}

/// Stamp a filled disk, blending per pixel when the color is translucent.
fn stamp_disk(fb: &mut Framebuffer, cx: f32, cy: f32, radius: f32, color: Rgba) {
    let r_i = radius.ceil() as i32;
    let cx_i = cx.round() as i32;
    let cy_i = cy.round() as i32;
    let r_sq = radius * radius;

    for dy in -r_i..=r_i {
        for dx in -r_i..=r_i {
            if (dx * dx + dy * dy) as f32 <= r_sq {
                let x = cx_i + dx;
                let y = cy_i + dy;
                if x >= 0 && y >= 0 {
                    if color.a == 255 {
                        fb.set_pixel(x as u32, y as u32, color);
                    } else {
                        fb.blend_pixel(x as u32, y as u32, color);
                    }
                }
            }
        }
    }
}

/// Plot a single opaque pixel with bounds checking.
#[inline]
fn plot_solid(fb: &mut Framebuffer, x: i32, y: i32, color: Rgba) {
    if x >= 0 && y >= 0 && x < fb.width() as i32 && y < fb.height() as i32 {
        fb.set_pixel(x as u32, y as u32, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
