//! Line clipping against an axis-aligned window.
//!
//! - [`outcode`]: the 4-bit region code of a point relative to a window.
//! - [`cohen_sutherland`]: the Cohen–Sutherland clip loop built on it.

pub mod cohen_sutherland;
pub mod outcode;

pub use cohen_sutherland::{
    clip, ClipEdge, ClipState, ClipStep, ClipTrace, Endpoint, LineClipper, MAX_CLIP_ITERATIONS,
};
pub use outcode::Outcode;
