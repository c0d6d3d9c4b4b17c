//! butterfly - headless butterfly curve animation.
//!
//! Runs the butterfly animator for a number of ticks and writes one PNG
//! frame per second of animation (every 60 ticks).
//!
//! Usage: `butterfly [classic|smooth] [TICKS] [OUT_DIR]`

use curvetrail::prelude::*;
use std::env;
use std::fs;

/// Ticks per written frame (one frame per simulated second at ~60 fps).
const TICKS_PER_FRAME: u32 = 60;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let style = args.get(1).map_or("smooth", String::as_str);
    let ticks: u32 = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(600);
    let out_dir = args.get(3).cloned().unwrap_or_else(|| "frames".to_string());

    let config = match style {
        "classic" => ButterflyConfig::classic(),
        _ => ButterflyConfig::smooth(),
    };
    let mut fly = Butterfly::new(config)?;

    fs::create_dir_all(&out_dir)?;

    let mut frames = 0u32;
    for i in 0..ticks {
        fly.tick();
        if (i + 1) % TICKS_PER_FRAME == 0 {
            let path = format!("{out_dir}/butterfly_{frames:04}.png");
            PngEncoder::write_to_file(fly.frame(), &path)?;
            frames += 1;
        }
    }

    println!("wrote {frames} frames to {out_dir}/");
    Ok(())
}
