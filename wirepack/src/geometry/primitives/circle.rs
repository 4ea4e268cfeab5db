use std::f64::consts::PI;

use crate::geometry::geo_traits::{DistanceTo, Shape};
use crate::geometry::primitives::{Point, Rect};

/// Geometric primitive representing a circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}"
        );

        Self { center, radius }
    }

    /// True if the interiors of `self` and `other` overlap by more than `tolerance`.
    /// Touching circles (and circles overlapping by less than `tolerance`) do not overlap.
    pub fn overlaps(&self, other: &Circle, tolerance: f64) -> bool {
        self.center.distance_to(&other.center) < self.radius + other.radius - tolerance
    }

    /// How far `other` sticks out of `self`. Negative or zero if `other` is fully contained.
    pub fn excess(&self, other: &Circle) -> f64 {
        self.center.distance_to(&other.center) + other.radius - self.radius
    }

    /// True if `other` lies within `self`, allowing it to stick out by at most `tolerance`.
    pub fn contains(&self, other: &Circle, tolerance: f64) -> bool {
        self.excess(other) <= tolerance
    }

    /// Returns the smallest circle that contains both `self` and `other`, assuming `other`
    /// is not already contained in `self`.
    ///
    /// The new circle spans the segment through both centers, extended by both radii.
    /// Coinciding centers leave the center in place and keep the largest radius.
    pub fn expanded_to_include(&self, other: &Circle) -> Circle {
        let d = self.center.distance_to(&other.center);
        if d == 0.0 {
            return Circle::new(self.center, f64::max(self.radius, other.radius));
        }
        let radius = (d + other.radius + self.radius) / 2.0;
        let center = self
            .center
            .lerp(&other.center, (radius - self.radius) / d);
        Circle::new(center, radius)
    }

    /// Intersection points of the borders of `self` and `other`.
    ///
    /// Returns no points for disjoint, nested or concentric circles and a single point when the circles
    /// touch (within `tolerance`).
    pub fn border_intersections(&self, other: &Circle, tolerance: f64) -> [Option<Point>; 2] {
        let (c1, r1) = (self.center, self.radius);
        let (c2, r2) = (other.center, other.radius);
        let d = c1.distance_to(&c2);

        if d <= tolerance || d > r1 + r2 + tolerance || d < (r1 - r2).abs() - tolerance {
            return [None, None];
        }

        //distance from c1 to the chord through both intersection points
        let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
        let h = f64::max(r1 * r1 - a * a, 0.0).sqrt();
        let (ux, uy) = ((c2.0 - c1.0) / d, (c2.1 - c1.1) / d);
        let base = Point(c1.0 + a * ux, c1.1 + a * uy);

        if h <= tolerance {
            [Some(base), None]
        } else {
            [
                Some(Point(base.0 - h * uy, base.1 + h * ux)),
                Some(Point(base.0 + h * uy, base.1 - h * ux)),
            ]
        }
    }

    /// Distance from the origin to the point of `self` furthest away from it.
    pub fn extent(&self) -> f64 {
        self.center.norm() + self.radius
    }
}

impl Shape for Circle {
    fn centroid(&self) -> Point {
        self.center
    }

    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    fn bbox(&self) -> Rect {
        let (r, x, y) = (self.radius, self.center.0, self.center.1);
        Rect::new(x - r, y - r, x + r, y + r)
    }

    fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}
