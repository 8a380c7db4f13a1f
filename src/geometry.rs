//! Rectangle rotation and enclosing-box mathematics.
//!
//! All angles are in degrees. Image space has y growing downward, so a
//! positive angle turns points clockwise on screen.
//!
//! Rotated source boxes are reduced to the axis-aligned box enclosing their
//! rotated corners. That box can be larger than the rotated footprint; the
//! tighter polygon is not kept.

use serde::{Deserialize, Serialize};

/// A 2D point in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Corners of an unrotated `x, y, w, h` box.
///
/// Order is top-left, bottom-left, bottom-right, top-right.
pub fn rectangle_corners(x: f64, y: f64, width: f64, height: f64) -> [Point; 4] {
    let right = x + width;
    let bottom = y + height;
    [
        Point::new(x, y),
        Point::new(x, bottom),
        Point::new(right, bottom),
        Point::new(right, y),
    ]
}

/// Rotate every point by `angle` degrees about `pivot`.
///
/// ```text
/// x' = px + (x - px)·cos θ - (y - py)·sin θ
/// y' = py + (x - px)·sin θ + (y - py)·cos θ
/// ```
pub fn rotate_points(points: &[Point], angle: f64, pivot: Point) -> Vec<Point> {
    let (sin, cos) = angle.to_radians().sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x - pivot.x;
            let dy = p.y - pivot.y;
            Point::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
        })
        .collect()
}

/// Rotate a rectangle's corners about its first corner.
pub fn rotate_rectangle(corners: &[Point], angle: f64) -> Vec<Point> {
    match corners.first() {
        Some(&pivot) => rotate_points(corners, angle, pivot),
        None => Vec::new(),
    }
}

/// Rotate a rectangle's corners about their centroid.
pub fn rotate_rectangle_about_center(corners: &[Point], angle: f64) -> Vec<Point> {
    rotate_points(corners, angle, centroid(corners))
}

/// Mean of a point set, or the origin for an empty set.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Tightest axis-aligned box `(x1, y1, x2, y2)` containing all points.
///
/// Returns `(0, 0, 0, 0)` for an empty set.
pub fn enclosing_box(points: &[Point]) -> (f64, f64, f64, f64) {
    let Some(first) = points.first() else {
        return (0.0, 0.0, 0.0, 0.0);
    };
    points.iter().skip(1).fold(
        (first.x, first.y, first.x, first.y),
        |(x1, y1, x2, y2), p| (x1.min(p.x), y1.min(p.y), x2.max(p.x), y2.max(p.y)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_rectangle_corner_order() {
        let c = rectangle_corners(10.0, 20.0, 30.0, 40.0);
        assert_eq!(c[0], Point::new(10.0, 20.0));
        assert_eq!(c[1], Point::new(10.0, 60.0));
        assert_eq!(c[2], Point::new(40.0, 60.0));
        assert_eq!(c[3], Point::new(40.0, 20.0));
    }

    #[test]
    fn test_zero_angle_identity() {
        let corners = rectangle_corners(10.0, 20.0, 30.0, 40.0);
        let rotated = rotate_rectangle(&corners, 0.0);
        assert_eq!(enclosing_box(&rotated), (10.0, 20.0, 40.0, 60.0));
    }

    #[test]
    fn test_rotation_round_trip() {
        let corners = rectangle_corners(5.0, 7.0, 120.0, 33.0);
        let pivot = Point::new(50.0, -3.0);
        for angle in [0.5, 17.0, 90.0, 133.7, -45.0, 359.0] {
            let there = rotate_points(&corners, angle, pivot);
            let back = rotate_points(&there, -angle, pivot);
            for (orig, restored) in corners.iter().zip(&back) {
                assert_close(*orig, *restored);
            }
        }
    }

    #[test]
    fn test_quarter_turn_is_clockwise_in_image_space() {
        // x axis maps onto the downward y axis
        let rotated = rotate_points(&[Point::new(10.0, 0.0)], 90.0, Point::default());
        assert_close(rotated[0], Point::new(0.0, 10.0));
    }

    #[test]
    fn test_quarter_turn_swaps_dimensions() {
        let corners = rectangle_corners(0.0, 0.0, 40.0, 10.0);
        let (x1, y1, x2, y2) = enclosing_box(&rotate_rectangle(&corners, 90.0));
        assert!((x2 - x1 - 10.0).abs() < EPS);
        assert!((y2 - y1 - 40.0).abs() < EPS);
    }

    #[test]
    fn test_center_rotation_keeps_center() {
        let corners = rectangle_corners(0.0, 0.0, 40.0, 10.0);
        let rotated = rotate_rectangle_about_center(&corners, 90.0);
        assert_close(centroid(&rotated), Point::new(20.0, 5.0));
        let (x1, y1, x2, y2) = enclosing_box(&rotated);
        assert!((x1 - 15.0).abs() < EPS && (x2 - 25.0).abs() < EPS);
        assert!((y1 + 15.0).abs() < EPS && (y2 - 25.0).abs() < EPS);
    }

    #[test]
    fn test_enclosing_box_is_ordered() {
        let points = [
            Point::new(3.0, -8.0),
            Point::new(-12.5, 4.0),
            Point::new(7.25, 1.0),
        ];
        let (x1, y1, x2, y2) = enclosing_box(&points);
        assert!(x1 <= x2 && y1 <= y2);
        assert_eq!((x1, y1, x2, y2), (-12.5, -8.0, 7.25, 4.0));

        for angle in [0.0, 30.0, 91.0, 180.0, 271.0] {
            let (x1, y1, x2, y2) = enclosing_box(&rotate_points(&points, angle, Point::default()));
            assert!(x1 <= x2 && y1 <= y2);
        }
    }

    #[test]
    fn test_enclosing_box_over_approximates() {
        // 45° turn of a 10x10 square grows the box to the diagonal
        let corners = rectangle_corners(0.0, 0.0, 10.0, 10.0);
        let (x1, _, x2, _) = enclosing_box(&rotate_rectangle_about_center(&corners, 45.0));
        assert!((x2 - x1 - 200f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(enclosing_box(&[]), (0.0, 0.0, 0.0, 0.0));
        assert!(rotate_rectangle(&[], 10.0).is_empty());
        assert_eq!(centroid(&[]), Point::default());
    }
}
