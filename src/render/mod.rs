//! Rasterization primitives.
//!
//! # Algorithms
//!
//! - **Wu's Anti-aliased Line**: smooth line rendering with sub-pixel accuracy
//! - **Midpoint Circle**: guide circle outlines
//! - **Stamped Strokes**: round-capped thick segments built from disk stamps
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

mod primitives;

pub use primitives::{
    draw_circle_outline, draw_dot, draw_hline, draw_line_aa, draw_segment, draw_vline,
};
