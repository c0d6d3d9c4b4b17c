//! Lissajous grid animator.
//!
//! An n x n grid of Lissajous figures. One guide circle per column sits along
//! the top margin and one per row along the left margin; a marker rotates on
//! each at `angle = t * frequency`. Every cell traces the intersection of its
//! column marker's x coordinate and its row marker's y coordinate, leaving a
//! fading trail in a hue assigned per cell.
//!
//! The grid can be resized at runtime (reallocating the trail and all
//! per-cell state) and each axis frequency can be changed independently.

use crate::animator::Driver;
use crate::color::{Hsla, Rgba};
use crate::curve::circle_marker;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::render;
use crate::trail::TrailCanvas;

/// Largest supported grid size.
pub const MAX_GRID_SIZE: u32 = 12;

/// Crosshair line color (translucent white).
const CROSSHAIR: Rgba = Rgba::new(255, 255, 255, 60);

/// Configuration for a [`LissajousGrid`] animator.
#[derive(Debug, Clone)]
pub struct GridConfig {
    grid_size: u32,
    cell_size: u32,
    initial: f64,
    step: f64,
    fade_alpha: f32,
    stroke_width: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GridConfig {
    /// Default configuration: 6x6 grid of 100 px cells, slow fade.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid_size: 6,
            cell_size: 100,
            initial: 0.0,
            step: 0.01,
            fade_alpha: 0.05,
            stroke_width: 1.5,
        }
    }

    /// Set the initial grid size (1..=12).
    #[must_use]
    pub fn grid_size(mut self, size: u32) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the cell size in pixels.
    #[must_use]
    pub fn cell_size(mut self, size: u32) -> Self {
        self.cell_size = size;
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

    /// Set the trail stroke width.
    #[must_use]
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }
}

/// Per-cell state: assigned hue and the previous intersection point.
#[derive(Debug, Clone, Copy)]
struct Cell {
    color: Rgba,
    prev: Option<Point>,
}

/// Lissajous grid animator.
#[derive(Debug, Clone)]
pub struct LissajousGrid {
    config: GridConfig,
    grid_size: usize,
    driver: Driver,
    trail: TrailCanvas,
    cells: Vec<Cell>,
    x_frequencies: Vec<u32>,
    y_frequencies: Vec<u32>,
    x_markers: Vec<Point>,
    y_markers: Vec<Point>,
}

impl LissajousGrid {
    /// Create an animator from a configuration. Starts running.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size is outside 1..=12.
    pub fn new(config: GridConfig) -> Result<Self> {
        let driver = Driver::new(config.initial, config.step);
        let mut grid = Self {
            grid_size: 0,
            driver,
            trail: TrailCanvas::new(1, 1, Rgba::BLACK, 0.0)?,
            cells: Vec::new(),
            x_frequencies: Vec::new(),
            y_frequencies: Vec::new(),
            x_markers: Vec::new(),
            y_markers: Vec::new(),
            config,
        };
        grid.init_grid(grid.config.grid_size)?;
        Ok(grid)
    }

    /// Reinitialize all grid state for a new size: trail buffer, per-cell
    /// hues and previous points, frequency tables, and marker positions.
    /// Progress and run state are preserved.
    fn init_grid(&mut self, size: u32) -> Result<()> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(Error::InvalidGridSize { size });
        }

        let n = size as usize;
        let side = self.surface_side(size);
        self.grid_size = n;
        self.trail = TrailCanvas::new(side, side, Rgba::BLACK, self.config.fade_alpha)?;

        self.cells = (0..n * n)
            .map(|i| Cell {
                color: Hsla::wheel(i as f32 / (n * n) as f32).to_rgba(),
                prev: None,
            })
            .collect();

        self.x_frequencies = (1..=size).collect();
        self.y_frequencies = (1..=size).collect();

        self.x_markers = vec![Point::ORIGIN; n];
        self.y_markers = vec![Point::ORIGIN; n];
        self.update_markers(self.driver.progress());

        Ok(())
    }

    /// Surface side length for a given grid size: margin plus cells, where
    /// the margin is one cell (hosting the guide circles).
    fn surface_side(&self, size: u32) -> u32 {
        self.config.cell_size + size * self.config.cell_size
    }

    /// Recompute the guide-circle marker positions for progress `t`.
    fn update_markers(&mut self, t: f64) {
        let margin = self.config.cell_size;
        let cell = self.config.cell_size;
        let radius = f64::from(cell) / 2.0 - 10.0;

        for i in 0..self.grid_size {
            let offset = (margin + i as u32 * cell + cell / 2) as f32;
            let top_center = Point::new(offset, (margin / 2) as f32);
            let left_center = Point::new((margin / 2) as f32, offset);

            let x_angle = t * f64::from(self.x_frequencies[i]);
            let y_angle = t * f64::from(self.y_frequencies[i]);

            self.x_markers[i] = circle_marker(top_center, radius, x_angle);
            self.y_markers[i] = circle_marker(left_center, radius, y_angle);
        }
    }

    /// Fire one tick: fade the trail, advance progress, move the markers,
    /// and extend each cell's trail to its new intersection point.
    ///
    /// Returns `false` (and does nothing) while paused.
    pub fn tick(&mut self) -> bool {
        let Some(t) = self.driver.tick() else {
            return false;
        };

        self.trail.fade();
        self.update_markers(t);

        let n = self.grid_size;
        for row in 0..n {
            for col in 0..n {
                let point = Point::new(self.x_markers[col].x, self.y_markers[row].y);
                let cell = &mut self.cells[row * n + col];
                if let Some(prev) = cell.prev {
                    self.trail
                        .segment(prev, point, self.config.stroke_width, cell.color);
                }
                cell.prev = Some(point);
            }
        }

        true
    }

    /// Pause or resume.
    pub fn toggle(&mut self) {
        self.driver.toggle();
    }

    /// Whether ticks currently advance the animation.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Current progress value.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.driver.progress()
    }

    /// Resize the grid to `size` x `size`, reinitializing the trail buffer
    /// and all per-cell state from scratch.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is outside 1..=12.
    pub fn set_grid_size(&mut self, size: u32) -> Result<()> {
        self.init_grid(size)
    }

    /// Set the rotation frequency of a column's guide circle.
    /// Out-of-range indices are ignored.
    pub fn set_x_frequency(&mut self, index: usize, value: u32) {
        if let Some(freq) = self.x_frequencies.get_mut(index) {
            *freq = value;
        }
    }

    /// Set the rotation frequency of a row's guide circle.
    /// Out-of-range indices are ignored.
    pub fn set_y_frequency(&mut self, index: usize, value: u32) {
        if let Some(freq) = self.y_frequencies.get_mut(index) {
            *freq = value;
        }
    }

    /// Clear the trail buffer outright, drop all remembered intersection
    /// points, and restore initial progress. Run state is unchanged.
    /// Idempotent.
    pub fn clear_trails(&mut self) {
        self.trail.clear();
        for cell in &mut self.cells {
            cell.prev = None;
        }
        self.driver.reset_progress();
        self.update_markers(self.driver.progress());
    }

    /// Current grid size.
    #[must_use]
    pub fn grid_size(&self) -> u32 {
        self.grid_size as u32
    }

    /// Side length of the square presentation surface in pixels.
    #[must_use]
    pub fn surface_size(&self) -> u32 {
        self.trail.width()
    }

    /// Assigned trail hue of a cell, or `None` if out of range.
    #[must_use]
    pub fn cell_color(&self, row: usize, col: usize) -> Option<Rgba> {
        if row < self.grid_size && col < self.grid_size {
            Some(self.cells[row * self.grid_size + col].color)
        } else {
            None
        }
    }

    /// Current intersection point of a cell, if it has sampled one.
    #[must_use]
    pub fn cell_position(&self, row: usize, col: usize) -> Option<Point> {
        if row < self.grid_size && col < self.grid_size {
            self.cells[row * self.grid_size + col].prev
        } else {
            None
        }
    }

    /// Per-column guide circle frequencies.
    #[must_use]
    pub fn x_frequencies(&self) -> &[u32] {
        &self.x_frequencies
    }

    /// Per-row guide circle frequencies.
    #[must_use]
    pub fn y_frequencies(&self) -> &[u32] {
        &self.y_frequencies
    }

    /// The accumulated trail raster (no overlays).
    #[must_use]
    pub fn trail_buffer(&self) -> &Framebuffer {
        self.trail.buffer()
    }

    /// Composite a full frame: the trail as-is, then fresh overlays (guide
    /// circles, crosshair lines, markers, and current intersection dots).
    /// Overlays are never persisted into the trail.
    ///
    /// # Errors
    ///
    /// Returns an error if `fb` does not match the surface dimensions.
    pub fn render(&self, fb: &mut Framebuffer) -> Result<()> {
        fb.copy_from(self.trail.buffer())?;

        let margin = self.config.cell_size as i32;
        let cell = self.config.cell_size as i32;
        let side = self.surface_size() as i32;
        let radius = cell / 2 - 10;

        for i in 0..self.grid_size {
            let offset = margin + i as i32 * cell + cell / 2;

            // Guide circle outlines
            render::draw_circle_outline(fb, offset, margin / 2, radius, Rgba::DARK_GRAY);
            render::draw_circle_outline(fb, margin / 2, offset, radius, Rgba::DARK_GRAY);

            // Crosshair lines from each marker across the grid
            let xm = self.x_markers[i];
            let ym = self.y_markers[i];
            render::draw_vline(fb, xm.x as i32, margin, side, CROSSHAIR);
            render::draw_hline(fb, margin, side, ym.y as i32, CROSSHAIR);

            // Marker dots on the guide circles
            render::draw_dot(fb, xm, 8.0, Rgba::WHITE);
            render::draw_dot(fb, ym, 8.0, Rgba::WHITE);
        }

        // Bright dot at each cell's current intersection
        for cell_state in &self.cells {
            if let Some(point) = cell_state.prev {
                render::draw_dot(fb, point, 6.0, Rgba::WHITE);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid() -> LissajousGrid {
        LissajousGrid::new(GridConfig::new()).unwrap()
    }

    #[test]
    fn test_new_grid_dimensions() {
        let g = grid();
        assert_eq!(g.grid_size(), 6);
        // margin (one cell) + 6 cells of 100 px
        assert_eq!(g.surface_size(), 700);
        assert_eq!(g.x_frequencies(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(g.y_frequencies(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_grid_sizes_rejected() {
        assert!(LissajousGrid::new(GridConfig::new().grid_size(0)).is_err());
        assert!(LissajousGrid::new(GridConfig::new().grid_size(13)).is_err());
        let mut g = grid();
        assert!(g.set_grid_size(0).is_err());
        assert!(g.set_grid_size(13).is_err());
    }

    #[test]
    fn test_cell_hues_deterministic() {
        let g = grid();
        for row in 0..6 {
            for col in 0..6 {
                let expected = Hsla::wheel((row * 6 + col) as f32 / 36.0).to_rgba();
                assert_eq!(g.cell_color(row, col), Some(expected));
            }
        }
        assert_eq!(g.cell_color(6, 0), None);
    }

    #[test]
    fn test_resize_reinitializes_everything() {
        let mut g = grid();
        for _ in 0..20 {
            g.tick();
        }
        let progress = g.progress();

        g.set_grid_size(3).unwrap();
        assert_eq!(g.grid_size(), 3);
        assert_eq!(g.surface_size(), 400);
        assert_eq!(g.x_frequencies(), &[1, 2, 3]);

        // All positional memory cleared
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(g.cell_position(row, col), None);
                let expected = Hsla::wheel((row * 3 + col) as f32 / 9.0).to_rgba();
                assert_eq!(g.cell_color(row, col), Some(expected));
            }
        }

        // Trail buffer is fresh
        let fresh = g.trail_buffer();
        assert_eq!(fresh.get_pixel(200, 200), Some(Rgba::BLACK));

        // Progress and run state survive a resize
        assert_relative_eq!(g.progress(), progress);
        assert!(g.is_running());
    }

    #[test]
    fn test_first_tick_records_without_segments() {
        let mut g = grid();
        let before = g.trail_buffer().to_compact_pixels();
        assert!(g.tick());

        // Every cell now has a position
        for row in 0..6 {
            for col in 0..6 {
                assert!(g.cell_position(row, col).is_some());
            }
        }

        // No segments drawn yet, so the trail is untouched (fade of a
        // uniform background is a no-op)
        assert_eq!(g.trail_buffer().to_compact_pixels(), before);
    }

    #[test]
    fn test_second_tick_draws_trail_segments() {
        let mut g = grid();
        g.tick();
        g.tick();

        let lit = g
            .trail_buffer()
            .to_compact_pixels()
            .chunks_exact(4)
            .filter(|px| px[0] > 0 || px[1] > 0 || px[2] > 0)
            .count();
        assert!(lit > 0, "second tick must draw at least one segment");
    }

    #[test]
    fn test_frequency_setters() {
        let mut g = grid();
        g.set_x_frequency(0, 7);
        g.set_y_frequency(5, 9);
        assert_eq!(g.x_frequencies()[0], 7);
        assert_eq!(g.y_frequencies()[5], 9);

        // Out-of-range index ignored
        g.set_x_frequency(99, 1);
        assert_eq!(g.x_frequencies().len(), 6);
    }

    #[test]
    fn test_nonpositive_step_is_ignored() {
        let mut g = LissajousGrid::new(GridConfig::new().step(-0.5)).unwrap();
        g.tick();
        g.tick();
        // Default step retained; progress still strictly increases
        assert_relative_eq!(g.progress(), 0.02);
    }

    #[test]
    fn test_clear_trails_idempotent() {
        let mut g = grid();
        for _ in 0..10 {
            g.tick();
        }

        g.clear_trails();
        let once = g.trail_buffer().to_compact_pixels();
        assert_relative_eq!(g.progress(), 0.0);
        assert_eq!(g.cell_position(0, 0), None);

        g.clear_trails();
        assert_eq!(g.trail_buffer().to_compact_pixels(), once);
    }

    #[test]
    fn test_pause_freezes_progress() {
        let mut g = grid();
        g.tick();
        let progress = g.progress();
        g.toggle();
        assert!(!g.tick());
        assert_relative_eq!(g.progress(), progress);
    }

    #[test]
    fn test_render_composites_overlays() {
        let mut g = grid();
        g.tick();

        let side = g.surface_size();
        let mut fb = Framebuffer::new(side, side).unwrap();
        g.render(&mut fb).unwrap();

        // Marker dot on the first top guide circle is white
        let m = g.x_markers[0];
        assert_eq!(fb.get_pixel(m.x as u32, m.y as u32), Some(Rgba::WHITE));

        // Overlays never touch the trail buffer itself
        assert_ne!(
            g.trail_buffer().get_pixel(m.x as u32, m.y as u32),
            Some(Rgba::WHITE)
        );
    }

    #[test]
    fn test_render_dimension_mismatch() {
        let g = grid();
        let mut fb = Framebuffer::new(100, 100).unwrap();
        assert!(g.render(&mut fb).is_err());
    }

    #[test]
    fn test_marker_positions_at_t0() {
        let g = grid();
        // angle 0: marker sits at center + (radius, 0); first top circle
        // center is (150, 50), radius 40
        assert_eq!(g.x_markers[0], Point::new(190.0, 50.0));
        assert_eq!(g.y_markers[0], Point::new(90.0, 150.0));
    }
}
