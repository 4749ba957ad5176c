//! Shared geometry utilities.
//!
//! Point and segment distances used by the simplifier, plus the 2x2
//! linear transform applied by [`Path::rotate`](crate::Path::rotate).

use kurbo::{Point, Vec2};

/// Euclidean distance between two points.
pub fn point_distance(a: Point, b: Point) -> f64 {
    (a - b).hypot()
}

/// Distance from `p` to the infinite line through `l1 → l2`.
///
/// Returns the perpendicular distance and whether the projection of `p`
/// lands between `l1` and `l2` (inclusive). When `l1 == l2` the direction
/// collapses to zero: the distance is 0 and the flag only holds for points
/// exactly at `l1`. Callers must check for that case themselves.
pub fn line_distance(p: Point, l1: Point, l2: Point) -> (f64, bool) {
    let mut l = l2 - l1;
    let w = p - l1;
    let mag = l.hypot();
    if mag > 0.0 {
        l = l / mag;
    }
    let dist = w.cross(l);
    let dot = l.dot(w);
    (dist.abs(), dot >= 0.0 && dot <= mag)
}

/// A finite line segment, built on demand for a distance query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Whether both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    /// Shortest distance from `p` to this segment.
    ///
    /// Perpendicular distance when the projection falls inside the segment,
    /// otherwise the distance to the nearer endpoint. Degenerate segments
    /// always use the endpoint distance.
    pub fn distance_to(&self, p: Point) -> f64 {
        let (d, within) = line_distance(p, self.p1, self.p2);
        if !self.is_degenerate() && within {
            d
        } else {
            point_distance(p, self.p2).min(point_distance(p, self.p1))
        }
    }
}

/// Column-major 2x2 linear transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat22 {
    pub col1: Vec2,
    pub col2: Vec2,
}

impl Mat22 {
    pub const IDENTITY: Mat22 = Mat22 {
        col1: Vec2::new(1.0, 0.0),
        col2: Vec2::new(0.0, 1.0),
    };

    pub fn new(col1: Vec2, col2: Vec2) -> Self {
        Self { col1, col2 }
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn from_angle(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            col1: Vec2::new(c, s),
            col2: Vec2::new(-s, c),
        }
    }

    /// Matrix-vector product.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.col1.x * p.x + self.col2.x * p.y,
            self.col1.y * p.x + self.col2.y * p.y,
        )
    }
}

impl Default for Mat22 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn point_distance_is_euclidean() {
        let d = point_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < EPS);
    }

    #[test]
    fn line_distance_inside_segment() {
        let (d, within) = line_distance(
            Point::new(5.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!((d - 3.0).abs() < EPS);
        assert!(within);
    }

    #[test]
    fn line_distance_before_segment_start() {
        let (d, within) = line_distance(
            Point::new(-5.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!(d.abs() < EPS);
        assert!(!within);
    }

    #[test]
    fn line_distance_endpoints_are_within() {
        let l1 = Point::new(1.0, 1.0);
        let l2 = Point::new(4.0, 5.0);
        assert!(line_distance(l1, l1, l2).1);
        assert!(line_distance(l2, l1, l2).1);
    }

    #[test]
    fn segment_falls_back_to_nearest_endpoint() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!((seg.distance_to(Point::new(-5.0, 0.0)) - 5.0).abs() < EPS);
        assert!((seg.distance_to(Point::new(13.0, 4.0)) - 5.0).abs() < EPS);
    }

    #[test]
    fn degenerate_segment_uses_point_distance() {
        let seg = Segment::new(Point::new(2.0, 2.0), Point::new(2.0, 2.0));
        assert!(seg.is_degenerate());
        for p in [Point::new(2.0, 2.0), Point::new(5.0, 6.0), Point::new(-1.0, 2.0)] {
            let d = seg.distance_to(p);
            assert!(!d.is_nan());
            assert!((d - point_distance(p, Point::new(2.0, 2.0))).abs() < EPS);
        }
    }

    #[test]
    fn rotation_quarter_turn() {
        let m = Mat22::from_angle(std::f64::consts::FRAC_PI_2);
        let p = m.apply(Point::new(1.0, 0.0));
        assert!(p.x.abs() < EPS);
        assert!((p.y - 1.0).abs() < EPS);
    }

    #[test]
    fn identity_leaves_point_alone() {
        let p = Point::new(-3.5, 7.25);
        assert_eq!(Mat22::IDENTITY.apply(p), p);
        assert_eq!(Mat22::default(), Mat22::IDENTITY);
    }
}
