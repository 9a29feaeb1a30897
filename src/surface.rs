//! Drawing surface model: turns pointer positions into a sequence of dots.
//!
//! This layer owns all drawing state (active colour, stroke flag, last point
//! and the dot list) and knows nothing about the DOM. Every mutating call
//! returns the dots it just created so a renderer can paint incrementally;
//! `dots()` is the full record in paint order.

use crate::config::SurfaceConfig;
use crate::geometry::{Point, clamp_to_bounds, interpolate};
use crate::palette::{Palette, PaletteColor};

/// A single fixed-size circular mark. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub center: Point,
    pub color: PaletteColor,
    pub radius: f64,
}

pub struct DrawingSurface {
    width: f64,
    height: f64,
    brush_radius: f64,
    palette: Palette,
    drawing: bool,
    last: Point,
    dots: Vec<Dot>,
}

impl DrawingSurface {
    pub fn new(width: f64, height: f64, brush_radius: f64) -> Self {
        Self {
            width,
            height,
            brush_radius,
            palette: Palette::new(),
            drawing: false,
            last: Point::default(),
            dots: Vec::new(),
        }
    }

    pub fn from_config(cfg: &SurfaceConfig) -> Self {
        Self::new(cfg.width, cfg.height, cfg.brush_radius)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn brush_radius(&self) -> f64 {
        self.brush_radius
    }

    pub fn active_color(&self) -> PaletteColor {
        self.palette.active()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn last_point(&self) -> Point {
        self.last
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    pub fn clamp(&self, p: Point) -> Point {
        clamp_to_bounds(p, self.width, self.height, self.brush_radius)
    }

    /// Map an on-screen position to clamped surface coordinates, given the
    /// surface's on-screen top-left corner.
    pub fn to_local(&self, client: Point, origin: Point) -> Point {
        self.clamp(Point::new(client.x - origin.x, client.y - origin.y))
    }

    pub fn select_color(&mut self, color: PaletteColor) {
        self.palette.select(color);
    }

    pub fn begin_stroke(&mut self, p: Point) -> &[Dot] {
        let p = self.clamp(p);
        self.drawing = true;
        self.last = p;
        let start = self.dots.len();
        self.push_dot(p);
        &self.dots[start..]
    }

    /// Extend the active stroke to `p`. Returns an empty slice when idle.
    pub fn continue_stroke(&mut self, p: Point) -> &[Dot] {
        let start = self.dots.len();
        if !self.drawing {
            return &self.dots[start..];
        }
        let p = self.clamp(p);
        for c in interpolate(self.last, p, self.brush_radius) {
            self.push_dot(c);
        }
        self.last = p;
        &self.dots[start..]
    }

    pub fn end_stroke(&mut self) {
        self.drawing = false;
    }

    /// Drop every dot. Colour and last point are kept.
    pub fn clear(&mut self) {
        self.dots.clear();
    }

    fn push_dot(&mut self, center: Point) {
        self.dots.push(Dot {
            center,
            color: self.palette.active(),
            radius: self.brush_radius,
        });
    }
}
