use std::f64::consts::TAU;

use crate::geometry::geo_traits::DistanceTo;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub const ORIGIN: Point = Point(0.0, 0.0);

    /// Point at `distance` from `center` in the direction of `angle` (radians, counter-clockwise from +x)
    pub fn polar(center: Point, distance: f64, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point(center.0 + distance * cos, center.1 + distance * sin)
    }

    /// `n` points equally spaced on the circle of radius `distance` around `center`, starting at angle 0
    pub fn ring(center: Point, distance: f64, n: usize) -> impl Iterator<Item = Point> {
        (0..n).map(move |i| Point::polar(center, distance, TAU * i as f64 / n as f64))
    }

    /// Distance to the origin
    pub fn norm(&self) -> f64 {
        self.0.hypot(self.1)
    }

    /// Moves `self` towards `target` by `ratio` of the vector between them.
    pub fn lerp(&self, target: &Point, ratio: f64) -> Point {
        Point(
            self.0 + (target.0 - self.0) * ratio,
            self.1 + (target.1 - self.1) * ratio,
        )
    }

    /// Snaps the point onto a grid with cell size `1 / scale`, used as a hashable key.
    pub fn grid_key(&self, scale: f64) -> (i64, i64) {
        ((self.0 * scale).round() as i64, (self.1 * scale).round() as i64)
    }
}

impl DistanceTo<Point> for Point {
    fn distance_to(&self, other: &Point) -> f64 {
        (self.0 - other.0).hypot(self.1 - other.1)
    }
}
