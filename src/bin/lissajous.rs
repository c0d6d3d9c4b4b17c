//! lissajous - headless Lissajous grid animation.
//!
//! Runs the grid animator for a number of ticks, compositing the trail with
//! its guide-circle overlays, and writes one PNG frame per 60 ticks. Partway
//! through the run it retunes the first column's frequency, and later grows
//! the grid by one, so the written frames cover all three grid operations.
//!
//! Usage: `lissajous [GRID_SIZE] [TICKS] [OUT_DIR]`

use curvetrail::animator::lissajous::MAX_GRID_SIZE;
use curvetrail::prelude::*;
use std::env;
use std::fs;

/// Ticks per written frame (one frame per simulated second at ~60 fps).
const TICKS_PER_FRAME: u32 = 60;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let size: u32 = args.get(1).map(|s| s.parse()).transpose()?.unwrap_or(6);
    let ticks: u32 = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(1200);
    let out_dir = args.get(3).cloned().unwrap_or_else(|| "frames".to_string());

    let mut grid = LissajousGrid::new(GridConfig::new().grid_size(size))?;
    let side = grid.surface_size();
    let mut fb = Framebuffer::new(side, side)?;

    fs::create_dir_all(&out_dir)?;

    let mut frames = 0u32;
    for i in 0..ticks {
        grid.tick();

        // Retune the first column a third of the way in
        if i == ticks / 3 {
            grid.set_x_frequency(0, size + 2);
        }

        // Grow the grid for the final third (trails restart on resize)
        if i == 2 * ticks / 3 && size < MAX_GRID_SIZE {
            grid.set_grid_size(size + 1)?;
            fb = Framebuffer::new(grid.surface_size(), grid.surface_size())?;
        }

        if (i + 1) % TICKS_PER_FRAME == 0 {
            grid.render(&mut fb)?;
            let path = format!("{out_dir}/lissajous_{frames:04}.png");
            PngEncoder::write_to_file(&fb, &path)?;
            frames += 1;
        }
    }

    println!("wrote {frames} frames to {out_dir}/");
    Ok(())
}
