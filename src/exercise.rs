//! Click-driven exercises.
//!
//! [`Exercise`] collects pointer clicks until the active [`Mode`] has enough
//! of them, then runs the matching algorithm and keeps the result as the
//! current [`Drawing`]. It knows nothing about windows or events beyond
//! coordinates and characters, so it can be driven from tests.

use std::fmt;

use log::debug;

use crate::clip::LineClipper;
use crate::colors;
use crate::math::{ClipWindow, Point2f, Point2i};
use crate::raster::{rasterize_circle, rasterize_segment, rasterize_triangle_outline};
use crate::render::Surface;
use crate::viewport::{radius_from_points, snap_click};

/// Which algorithm the next clicks feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Two clicks: a Bresenham line (key: r)
    #[default]
    Line,
    /// Three clicks: a triangle outline from three lines (key: t)
    Triangle,
    /// Center click then rim click: a Bresenham circle (key: c)
    Circle,
    /// Two clicks: a segment clipped to the window (key: x)
    Clip,
}

impl Mode {
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'r' => Some(Mode::Line),
            't' => Some(Mode::Triangle),
            'c' => Some(Mode::Circle),
            'x' => Some(Mode::Clip),
            _ => None,
        }
    }

    pub fn clicks_required(self) -> usize {
        match self {
            Mode::Triangle => 3,
            Mode::Line | Mode::Circle | Mode::Clip => 2,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Line => write!(f, "Line"),
            Mode::Triangle => write!(f, "Triangle"),
            Mode::Circle => write!(f, "Circle"),
            Mode::Clip => write!(f, "Clip"),
        }
    }
}

/// A finished shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub mode: Mode,
    pub pixels: Vec<Point2i>,
    pub color: u32,
    /// Clip mode only: the input segment as clicked.
    pub input_segment: Option<(Point2f, Point2f)>,
    /// Clip mode only: the visible part, `None` when rejected.
    pub clipped: Option<(Point2f, Point2f)>,
}

/// Result of feeding a key to an [`Exercise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Switched to a different mode; pending clicks and drawing were dropped.
    ModeChanged(Mode),
    /// Selected a palette color.
    ColorChanged(u32),
    Ignored,
}

pub struct Exercise {
    mode: Mode,
    color: u32,
    clicks: Vec<Point2f>,
    last: Option<Drawing>,
    clipper: LineClipper,
}

impl Exercise {
    pub fn new(mode: Mode, window: ClipWindow) -> Self {
        Self {
            mode,
            color: colors::RED,
            clicks: Vec::with_capacity(3),
            last: None,
            clipper: LineClipper::new(window),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn pending_clicks(&self) -> usize {
        self.clicks.len()
    }

    pub fn last_drawing(&self) -> Option<&Drawing> {
        self.last.as_ref()
    }

    pub fn clip_window(&self) -> &ClipWindow {
        self.clipper.window()
    }

    /// Switch mode. Re-selecting the current mode keeps the drawing.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if mode == self.mode {
            return false;
        }
        debug!("mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.clicks.clear();
        self.last = None;
        true
    }

    /// Mode letters switch exercises, digits pick a palette color (and
    /// re-color the current drawing).
    pub fn handle_key(&mut self, key: char) -> KeyAction {
        if let Some(mode) = Mode::from_key(key) {
            return if self.set_mode(mode) {
                KeyAction::ModeChanged(mode)
            } else {
                KeyAction::Ignored
            };
        }

        match colors::palette(key) {
            Some(color) => {
                self.color = color;
                if let Some(drawing) = self.last.as_mut() {
                    drawing.color = color;
                }
                KeyAction::ColorChanged(color)
            }
            None => KeyAction::Ignored,
        }
    }

    /// Record a click in pixel coordinates.
    ///
    /// Returns the new drawing once the mode has all the clicks it needs.
    pub fn handle_click(&mut self, x: f64, y: f64) -> Option<&Drawing> {
        self.clicks.push(Point2f::new(x, y));
        if self.clicks.len() < self.mode.clicks_required() {
            return None;
        }

        let clicks = std::mem::take(&mut self.clicks);
        let drawing = self.build(&clicks);
        debug!(
            "{} from {} clicks: {} pixels",
            drawing.mode,
            clicks.len(),
            drawing.pixels.len()
        );
        self.last = Some(drawing);
        self.last.as_ref()
    }

    fn build(&self, clicks: &[Point2f]) -> Drawing {
        let snapped: Vec<Point2i> = clicks.iter().map(|p| snap_click(p.x, p.y)).collect();
        let mut drawing = Drawing {
            mode: self.mode,
            pixels: Vec::new(),
            color: self.color,
            input_segment: None,
            clipped: None,
        };

        match self.mode {
            Mode::Line => {
                drawing.pixels = rasterize_segment(snapped[0], snapped[1]);
            }
            Mode::Triangle => {
                drawing.pixels = rasterize_triangle_outline(snapped[0], snapped[1], snapped[2]);
            }
            Mode::Circle => {
                let center = snapped[0];
                let radius = radius_from_points(center, snapped[1]);
                drawing.pixels = rasterize_circle(center.x, center.y, radius);
            }
            Mode::Clip => {
                // Clip on the raw click positions; only the result is snapped.
                let (p1, p2) = (clicks[0], clicks[1]);
                drawing.input_segment = Some((p1, p2));
                drawing.clipped = self.clipper.clip(p1, p2);
                if let Some((a, b)) = drawing.clipped {
                    drawing.pixels = rasterize_segment(a.round(), b.round());
                }
            }
        }

        drawing
    }

    /// Draw the clip window (in clip mode) and the current drawing.
    ///
    /// Each pixel is drawn as a `point_size` square anchored at the pixel.
    pub fn render_into<S: Surface>(&self, surface: &mut S, point_size: u32) {
        if self.mode == Mode::Clip {
            surface.draw_window_outline(self.clip_window(), colors::CLIP_WINDOW);
        }

        let Some(drawing) = &self.last else {
            return;
        };

        if let Some((a, b)) = drawing.input_segment {
            let ghost = rasterize_segment(a.round(), b.round());
            surface.plot_points(&ghost, colors::GRID);
        }

        let size = point_size.max(1) as i32;
        for p in &drawing.pixels {
            for dy in 0..size {
                for dx in 0..size {
                    surface.plot(p.x + dx, p.y + dy, drawing.color);
                }
            }
        }
    }
}

impl Default for Exercise {
    fn default() -> Self {
        Self::new(Mode::default(), ClipWindow::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Canvas;

    #[test]
    fn line_needs_two_clicks() {
        let mut ex = Exercise::default();
        assert!(ex.handle_click(10.0, 10.0).is_none());
        assert_eq!(ex.pending_clicks(), 1);
        let drawing = ex.handle_click(20.0, 12.0).unwrap();
        assert_eq!(drawing.mode, Mode::Line);
        assert_eq!(drawing.pixels.len(), 11);
        assert_eq!(ex.pending_clicks(), 0);
    }

    #[test]
    fn clicks_are_snapped() {
        let mut ex = Exercise::default();
        ex.handle_click(10.4, 10.6);
        let drawing = ex.handle_click(12.5, 11.0).unwrap();
        assert_eq!(drawing.pixels.first(), Some(&Point2i::new(10, 11)));
        assert_eq!(drawing.pixels.last(), Some(&Point2i::new(13, 11)));
    }

    #[test]
    fn triangle_needs_three_clicks() {
        let mut ex = Exercise::default();
        assert_eq!(ex.handle_key('t'), KeyAction::ModeChanged(Mode::Triangle));
        assert!(ex.handle_click(0.0, 0.0).is_none());
        assert!(ex.handle_click(10.0, 0.0).is_none());
        let drawing = ex.handle_click(0.0, 5.0).unwrap();
        assert_eq!(drawing.pixels.len(), 28);
    }

    #[test]
    fn circle_radius_from_rim_click() {
        let mut ex = Exercise::new(Mode::Circle, ClipWindow::DEFAULT);
        ex.handle_click(50.0, 50.0);
        let drawing = ex.handle_click(53.0, 54.0).unwrap();
        assert!(drawing.pixels.contains(&Point2i::new(50, 55)));
        assert!(drawing.pixels.contains(&Point2i::new(45, 50)));
    }

    #[test]
    fn clip_mode_keeps_raw_and_clipped_segments() {
        let mut ex = Exercise::new(Mode::Clip, ClipWindow::DEFAULT);
        ex.handle_click(50.0, 150.0);
        let drawing = ex.handle_click(150.0, 200.0).unwrap();
        assert_eq!(
            drawing.input_segment,
            Some((Point2f::new(50.0, 150.0), Point2f::new(150.0, 200.0)))
        );
        let (a, b) = drawing.clipped.unwrap();
        assert_eq!(a.round(), Point2i::new(100, 175));
        assert_eq!(b, Point2f::new(150.0, 200.0));
        assert_eq!(drawing.pixels.len(), 51);
    }

    #[test]
    fn rejected_clip_draws_nothing() {
        let mut ex = Exercise::new(Mode::Clip, ClipWindow::DEFAULT);
        ex.handle_click(50.0, 50.0);
        let drawing = ex.handle_click(90.0, 90.0).unwrap();
        assert!(drawing.clipped.is_none());
        assert!(drawing.pixels.is_empty());
    }

    #[test]
    fn switching_mode_clears_state() {
        let mut ex = Exercise::default();
        ex.handle_click(0.0, 0.0);
        ex.handle_click(5.0, 5.0);
        ex.handle_click(7.0, 7.0);
        assert!(ex.last_drawing().is_some());
        assert_eq!(ex.pending_clicks(), 1);

        assert_eq!(ex.handle_key('r'), KeyAction::Ignored);
        assert_eq!(ex.pending_clicks(), 1);

        assert_eq!(ex.handle_key('C'), KeyAction::ModeChanged(Mode::Circle));
        assert!(ex.last_drawing().is_none());
        assert_eq!(ex.pending_clicks(), 0);
    }

    #[test]
    fn digit_recolors_last_drawing() {
        let mut ex = Exercise::default();
        ex.handle_click(0.0, 0.0);
        ex.handle_click(3.0, 0.0);
        assert_eq!(ex.handle_key('3'), KeyAction::ColorChanged(colors::BLUE));
        assert_eq!(ex.last_drawing().unwrap().color, colors::BLUE);
        assert_eq!(ex.handle_key('?'), KeyAction::Ignored);
    }

    #[test]
    fn render_draws_window_and_shape() {
        let mut ex = Exercise::new(Mode::Clip, ClipWindow::DEFAULT);
        ex.handle_click(0.0, 200.0);
        ex.handle_click(500.0, 200.0);

        let mut canvas = Canvas::new(600, 400).unwrap();
        ex.render_into(&mut canvas, 1);

        assert_eq!(canvas.get_pixel(100, 250), Some(colors::CLIP_WINDOW));
        assert_eq!(canvas.get_pixel(250, 200), Some(colors::RED));
        // Outside the window only the unclipped input shows.
        assert_eq!(canvas.get_pixel(50, 200), Some(colors::GRID));
    }

    #[test]
    fn point_size_expands_pixels() {
        let mut ex = Exercise::default();
        ex.handle_click(5.0, 5.0);
        ex.handle_click(5.0, 5.0);

        let mut canvas = Canvas::new(20, 20).unwrap();
        ex.render_into(&mut canvas, 2);
        assert_eq!(canvas.count_color(colors::RED), 4);
    }
}
