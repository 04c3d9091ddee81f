//! Cohen–Sutherland line clipping against a rectangular window.
//!
//! Each endpoint carries an [`Outcode`]. The loop is a small state machine:
//!
//! ```text
//!              o1 | o2 == 0
//!   ClipNeeded ------------> Accept
//!       |  ^
//!       |  |  replace the outside point with its
//!       |  |  intersection on one boundary
//!       +--+
//!       |
//!       +---------------------> Reject
//!              o1 & o2 != 0
//! ```
//!
//! Only one boundary is crossed per iteration, chosen from the outside
//! point's outcode in the order TOP, BOTTOM, RIGHT, LEFT. Point 1 is refined
//! first whenever both endpoints are outside.

use log::{trace, warn};

use super::outcode::Outcode;
use crate::math::{ClipWindow, Point2f};

/// Upper bound on refinement iterations.
///
/// Exact arithmetic needs at most two per endpoint. Rounding after an
/// intersection can leave a coordinate a hair outside the window, so allow
/// headroom before giving up.
pub const MAX_CLIP_ITERATIONS: usize = 16;

/// State of the clip loop after evaluating the two outcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipState {
    /// Both endpoints inside: the current segment is the result.
    Accept,
    /// Both endpoints outside the same half-plane: nothing to draw.
    Reject,
    /// At least one endpoint must be moved onto a boundary.
    ClipNeeded,
}

impl ClipState {
    pub fn evaluate(o1: Outcode, o2: Outcode) -> Self {
        if (o1 | o2).is_inside() {
            ClipState::Accept
        } else if !(o1 & o2).is_inside() {
            ClipState::Reject
        } else {
            ClipState::ClipNeeded
        }
    }
}

/// One of the four window boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipEdge {
    Top,
    Bottom,
    Right,
    Left,
}

impl ClipEdge {
    /// The highest-priority boundary violated by `code`.
    pub fn from_outcode(code: Outcode) -> Option<Self> {
        match code.first_violated()? {
            c if c == Outcode::TOP => Some(ClipEdge::Top),
            c if c == Outcode::BOTTOM => Some(ClipEdge::Bottom),
            c if c == Outcode::RIGHT => Some(ClipEdge::Right),
            _ => Some(ClipEdge::Left),
        }
    }

    /// Intersect the line through `outside -> other` with this boundary.
    ///
    /// The outcodes guarantee the segment crosses this boundary, so the
    /// divisor (`dy` for TOP/BOTTOM, `dx` for LEFT/RIGHT) is non-zero.
    pub fn intersect(self, outside: Point2f, other: Point2f, window: &ClipWindow) -> Point2f {
        let dx = other.x - outside.x;
        let dy = other.y - outside.y;

        match self {
            ClipEdge::Top => Point2f::new(
                outside.x + (dx / dy) * (window.y_max() - outside.y),
                window.y_max(),
            ),
            ClipEdge::Bottom => Point2f::new(
                outside.x + (dx / dy) * (window.y_min() - outside.y),
                window.y_min(),
            ),
            ClipEdge::Right => Point2f::new(
                window.x_max(),
                outside.y + (dy / dx) * (window.x_max() - outside.x),
            ),
            ClipEdge::Left => Point2f::new(
                window.x_min(),
                outside.y + (dy / dx) * (window.x_min() - outside.x),
            ),
        }
    }
}

/// Which endpoint of the segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    First,
    Second,
}

/// A single refinement performed by the clipper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipStep {
    pub endpoint: Endpoint,
    pub edge: ClipEdge,
    pub from: Point2f,
    pub to: Point2f,
}

/// The outcome of a clip together with every refinement it took.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipTrace {
    pub result: Option<(Point2f, Point2f)>,
    pub steps: Vec<ClipStep>,
}

impl ClipTrace {
    /// Whether the segment was decided without computing an intersection.
    pub fn is_trivial(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Clips line segments against a fixed window.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineClipper {
    window: ClipWindow,
}

impl LineClipper {
    pub fn new(window: ClipWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &ClipWindow {
        &self.window
    }

    pub fn clip(&self, p1: Point2f, p2: Point2f) -> Option<(Point2f, Point2f)> {
        self.clip_traced(p1, p2).result
    }

    /// Clip and record the intermediate refinements.
    pub fn clip_traced(&self, p1: Point2f, p2: Point2f) -> ClipTrace {
        let window = &self.window;
        let mut a = p1;
        let mut b = p2;
        let mut code_a = Outcode::compute(a, window);
        let mut code_b = Outcode::compute(b, window);
        let mut steps = Vec::new();

        trace!("clipping {a} -> {b}");

        for _ in 0..MAX_CLIP_ITERATIONS {
            let state = ClipState::evaluate(code_a, code_b);
            trace!("P1({code_a}) P2({code_b}) => {state:?}");

            match state {
                ClipState::Accept => {
                    return ClipTrace {
                        result: Some((a, b)),
                        steps,
                    };
                }
                ClipState::Reject => {
                    return ClipTrace {
                        result: None,
                        steps,
                    };
                }
                ClipState::ClipNeeded => {}
            }

            let (endpoint, outside, other, code) = if !code_a.is_inside() {
                (Endpoint::First, a, b, code_a)
            } else {
                (Endpoint::Second, b, a, code_b)
            };

            let edge = match ClipEdge::from_outcode(code) {
                Some(edge) => edge,
                // Unreachable while ClipNeeded implies a non-empty outcode.
                None => {
                    return ClipTrace {
                        result: None,
                        steps,
                    };
                }
            };
            let hit = edge.intersect(outside, other, window);
            trace!("{endpoint:?} {outside} ({code}) clipped on {edge:?} to {hit}");

            steps.push(ClipStep {
                endpoint,
                edge,
                from: outside,
                to: hit,
            });

            match endpoint {
                Endpoint::First => {
                    a = hit;
                    code_a = Outcode::compute(a, window);
                }
                Endpoint::Second => {
                    b = hit;
                    code_b = Outcode::compute(b, window);
                }
            }
        }

        warn!(
            "clip of {p1} -> {p2} did not converge in {MAX_CLIP_ITERATIONS} iterations, rejecting"
        );
        ClipTrace {
            result: None,
            steps,
        }
    }
}

/// Clip the segment `p1 -> p2` against `window`.
///
/// Returns the visible part of the segment, or `None` when nothing of it lies
/// inside the window. Accepted endpoints keep their order and are not snapped
/// to pixels.
pub fn clip(p1: Point2f, p2: Point2f, window: &ClipWindow) -> Option<(Point2f, Point2f)> {
    LineClipper::new(*window).clip(p1, p2)
}
