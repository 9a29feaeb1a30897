//! Surface-local geometry: points, bounds clamping and the dot interpolation
//! used to approximate continuous strokes with discrete circular marks.

/// A position in surface-local units (origin = top-left of the drawing area).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn lerp(self, to: Point, t: f64) -> Point {
        Point {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Clamp one axis into `[radius, extent - radius]`. When the extent is too
/// small to fit a whole dot the lower bound wins.
fn clamp_axis(v: f64, extent: f64, radius: f64) -> f64 {
    v.min(extent - radius).max(radius)
}

/// Clamp `p` so a dot of `radius` centred on it stays fully inside a
/// `width` x `height` surface.
pub fn clamp_to_bounds(p: Point, width: f64, height: f64, radius: f64) -> Point {
    Point {
        x: clamp_axis(p.x, width, radius),
        y: clamp_axis(p.y, height, radius),
    }
}

/// Upper bound on interpolation steps for one segment.
pub const MAX_STEPS: usize = 4096;

/// Number of interpolation steps between two points `d` apart.
/// Zero means the degenerate single-dot case.
pub fn steps_for(d: f64, radius: f64) -> usize {
    if d == 0.0 {
        return 0;
    }
    let ratio = d / radius;
    if ratio.is_nan() {
        return 2;
    }
    // dot radius sets the sampling density: at least 2 steps, so 3 dots
    (ratio.floor().min(MAX_STEPS as f64) as usize).max(2)
}

/// Dot centres approximating the segment `p1 -> p2`, both ends included.
pub fn interpolate(p1: Point, p2: Point, radius: f64) -> Vec<Point> {
    let steps = steps_for(distance(p1, p2), radius);
    if steps == 0 {
        return vec![p1];
    }
    (0..=steps)
        .map(|i| p1.lerp(p2, i as f64 / steps as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert!((distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_inside_is_identity() {
        let p = Point::new(50.0, 60.0);
        assert_eq!(clamp_to_bounds(p, 668.0, 522.0, 4.0), p);
    }

    #[test]
    fn test_clamp_outside_each_side() {
        let c = clamp_to_bounds(Point::new(-20.0, 900.0), 668.0, 522.0, 4.0);
        assert_eq!(c, Point::new(4.0, 518.0));
        let c = clamp_to_bounds(Point::new(1000.0, -1.0), 668.0, 522.0, 4.0);
        assert_eq!(c, Point::new(664.0, 4.0));
    }

    #[test]
    fn test_clamp_tiny_surface_prefers_lower_bound() {
        let c = clamp_to_bounds(Point::new(3.0, 3.0), 6.0, 6.0, 4.0);
        assert_eq!(c, Point::new(4.0, 4.0));
    }

    #[test]
    fn test_steps_minimum_two() {
        assert_eq!(steps_for(0.0, 4.0), 0);
        assert_eq!(steps_for(1.0, 4.0), 2);
        assert_eq!(steps_for(11.9, 4.0), 2);
        assert_eq!(steps_for(12.0, 4.0), 3);
        assert_eq!(steps_for(96.0, 4.0), 24);
    }

    #[test]
    fn test_steps_capped_for_degenerate_radius() {
        assert_eq!(steps_for(10.0, 1e-300), MAX_STEPS);
        assert_eq!(steps_for(10.0, 0.0), MAX_STEPS);
        assert_eq!(steps_for(10.0, -4.0), 2);
        assert_eq!(steps_for(f64::NAN, 4.0), 2);
        assert_eq!(interpolate(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 0.0).len(), MAX_STEPS + 1);
    }

    #[test]
    fn test_interpolate_degenerate() {
        let p = Point::new(10.0, 10.0);
        assert_eq!(interpolate(p, p, 4.0), vec![p]);
    }

    #[test]
    fn test_interpolate_endpoints_and_spacing() {
        let pts = interpolate(Point::new(4.0, 4.0), Point::new(100.0, 4.0), 4.0);
        assert_eq!(pts.len(), 25);
        assert_eq!(pts[0], Point::new(4.0, 4.0));
        assert_eq!(pts[24], Point::new(100.0, 4.0));
        for w in pts.windows(2) {
            assert!((w[1].x - w[0].x - 4.0).abs() < 1e-9);
            assert_eq!(w[1].y, 4.0);
        }
    }

    #[test]
    fn test_interpolate_diagonal_stays_on_segment() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(40.0, 60.0);
        for p in interpolate(a, b, 4.0) {
            // (y - 20) / (x - 10) == 4/3 along the segment
            assert!(((p.y - a.y) * 3.0 - (p.x - a.x) * 4.0).abs() < 1e-9);
        }
    }
}
