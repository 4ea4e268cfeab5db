use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Circle, Point};

/// A circle waiting to be placed by the Packing Engine.
///
/// `label` and `payload` belong to the caller, they are carried through untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UnplacedCircle<L, P = ()> {
    pub radius: f64,
    pub label: L,
    pub payload: P,
}

impl<L, P> UnplacedCircle<L, P> {
    pub fn new(radius: f64, label: L, payload: P) -> Self {
        Self {
            radius,
            label,
            payload,
        }
    }

    /// Assigns a position to the circle
    pub fn place(self, center: Point) -> PlacedCircle<L, P> {
        PlacedCircle {
            x: center.0,
            y: center.1,
            radius: self.radius,
            label: self.label,
            payload: self.payload,
        }
    }
}

impl<L> UnplacedCircle<L, ()> {
    pub fn labeled(radius: f64, label: L) -> Self {
        Self::new(radius, label, ())
    }
}

/// A circle with a position in the bundle cross-section.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlacedCircle<L, P = ()> {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub label: L,
    pub payload: P,
}

impl<L, P> PlacedCircle<L, P> {
    pub fn center(&self) -> Point {
        Point(self.x, self.y)
    }

    /// The geometric circle occupied, without the caller's data
    pub fn circle(&self) -> Circle {
        Circle::new(self.center(), self.radius)
    }
}
