//! The stroke path: an ordered sequence of points.

use std::ops::Index;

use kurbo::{BezPath, Point, Rect, Vec2};

use crate::geom::{point_distance, Mat22};
use crate::{parse, simplify};

/// An ordered, resizable sequence of points describing one stroke.
///
/// Order is geometric order: consecutive points form the stroke's segments.
/// Transforms take the path by value and hand it back, so they chain:
///
/// ```
/// use stroke_path::{kurbo::Vec2, Path};
///
/// let path = Path::parse_legacy("0,0 10,0 10,10")
///     .scale(2.0)
///     .translate(Vec2::new(5.0, 5.0));
/// assert_eq!(path[2], stroke_path::kurbo::Point::new(25.0, 25.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_point(p: Point) -> Self {
        Self { points: vec![p] }
    }

    pub fn from_points(points: &[Point]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    /// Lenient decode of `"x,y x,y ..."`. See [`parse::parse_legacy`].
    pub fn parse_legacy(s: &str) -> Self {
        parse::parse_legacy(s)
    }

    /// Lenient decode of `"Mx yLx y..."`. See [`parse::parse_svg`].
    pub fn from_svg(s: &str) -> Self {
        parse::parse_svg(s)
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Axis-aligned bounds of every point.
    ///
    /// An empty path gives the zero rect at the origin.
    pub fn bbox(&self) -> Rect {
        let Some(&first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .fold(Rect::from_points(first, first), |r, &p| r.union_pt(p))
    }

    /// Sum of segment lengths.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| point_distance(w[0], w[1]))
            .sum()
    }

    /// Rewrite every point as an offset from the first one.
    pub fn make_relative(mut self) -> Self {
        if let Some(&anchor) = self.points.first() {
            for p in &mut self.points {
                *p = (*p - anchor).to_point();
            }
        }
        self
    }

    pub fn translate(mut self, offset: Vec2) -> Self {
        for p in &mut self.points {
            *p += offset;
        }
        self
    }

    pub fn rotate(mut self, m: Mat22) -> Self {
        for p in &mut self.points {
            *p = m.apply(*p);
        }
        self
    }

    pub fn scale(mut self, factor: f64) -> Self {
        for p in &mut self.points {
            p.x *= factor;
            p.y *= factor;
        }
        self
    }

    /// Drop points that stay within `threshold` of the simplified stroke,
    /// then collapse consecutive duplicates. See [`simplify::simplify`].
    pub fn simplify(self, threshold: f64) -> Self {
        Self {
            points: simplify::simplify(&self.points, threshold),
        }
    }

    /// Polyline for a renderer: one move followed by line segments.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        if let Some((&first, rest)) = self.points.split_first() {
            path.move_to(first);
            for &p in rest {
                path.line_to(p);
            }
        }
        path
    }

    pub fn to_legacy_string(&self) -> String {
        parse::to_legacy(&self.points)
    }

    pub fn to_svg_string(&self) -> String {
        parse::to_svg(&self.points)
    }
}

impl Index<usize> for Path {
    type Output = Point;

    fn index(&self, i: usize) -> &Point {
        &self.points[i]
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn path(coords: &[(f64, f64)]) -> Path {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn constructors() {
        assert!(Path::new().is_empty());
        let single = Path::from_point(Point::new(1.0, 2.0));
        assert_eq!(single.len(), 1);
        let buf = [Point::new(1.0, 1.0), Point::new(2.0, 3.0)];
        let copied = Path::from_points(&buf);
        assert_eq!(copied.points(), &buf[..]);
        assert_eq!(copied[1], Point::new(2.0, 3.0));
    }

    #[test]
    fn bbox_of_empty_is_origin() {
        assert_eq!(Path::new().bbox(), Rect::ZERO);
    }

    #[test]
    fn bbox_of_single_point() {
        let r = Path::from_point(Point::new(3.0, -4.0)).bbox();
        assert_eq!(r, Rect::new(3.0, -4.0, 3.0, -4.0));
        assert_eq!(r.area(), 0.0);
    }

    #[test]
    fn bbox_covers_all_points() {
        let r = path(&[(1.0, 5.0), (-2.0, 3.0), (4.0, -1.0)]).bbox();
        assert_eq!(r, Rect::new(-2.0, -1.0, 4.0, 5.0));
    }

    #[test]
    fn make_relative_uses_original_anchor() {
        let p = path(&[(5.0, 5.0), (6.0, 7.0), (5.0, 5.0), (0.0, 10.0)]).make_relative();
        assert_eq!(p, path(&[(0.0, 0.0), (1.0, 2.0), (0.0, 0.0), (-5.0, 5.0)]));
        assert!(Path::new().make_relative().is_empty());
    }

    #[test]
    fn transforms_chain() {
        let p = path(&[(1.0, 0.0), (0.0, 2.0)])
            .rotate(Mat22::new(Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0)))
            .scale(3.0)
            .translate(Vec2::new(1.0, 1.0));
        assert_eq!(p, path(&[(1.0, 4.0), (-5.0, 1.0)]));
    }

    #[test]
    fn length_sums_segments() {
        let p = path(&[(0.0, 0.0), (3.0, 4.0), (3.0, 10.0)]);
        assert!((p.length() - 11.0).abs() < 1e-9);
        assert_eq!(Path::from_point(Point::ZERO).length(), 0.0);
    }

    #[test]
    fn bez_path_is_a_polyline() {
        let p = path(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let elements = p.to_bez_path().elements().to_vec();
        assert_eq!(
            elements,
            vec![
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(10.0, 0.0)),
                PathEl::LineTo(Point::new(10.0, 10.0)),
            ]
        );
        assert!(Path::new().to_bez_path().elements().is_empty());
    }

    #[test]
    fn simplify_on_tiny_paths() {
        assert!(Path::new().simplify(1.0).is_empty());
        assert_eq!(Path::from_point(Point::ZERO).simplify(1.0).len(), 1);
        let doubled = path(&[(2.0, 2.0), (2.0, 2.0)]).simplify(0.0);
        assert_eq!(doubled, path(&[(2.0, 2.0)]));
    }
}
