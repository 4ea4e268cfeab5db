use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Circle, Point};

/// Outcome of the Enclosing Circle Solver
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct EnclosingResult {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    /// False if the iteration cap was hit while some circles were still sticking out
    pub converged: bool,
    /// Number of relaxation steps performed
    pub iterations: usize,
}

impl EnclosingResult {
    pub fn center(&self) -> Point {
        Point(self.center_x, self.center_y)
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.center(), self.radius)
    }
}
