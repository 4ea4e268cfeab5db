use serde::{Deserialize, Serialize};

use crate::entities::{EnclosingResult, PackStats, PlacedCircle};
use crate::geometry::geo_traits::Shape;

/// Complete outcome of a bundle diameter computation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BundleResult<L, P = ()> {
    /// Placed circles, in placement order (largest first)
    pub layout: Vec<PlacedCircle<L, P>>,
    pub enclosing: EnclosingResult,
    /// Uniform radial thickness added around the packed bundle (jacket, heat-shrink...)
    pub margin: f64,
    pub outer_diameter: f64,
    pub outer_diameter_with_margin: f64,
    pub stats: PackStats,
}

impl<L, P> BundleResult<L, P> {
    /// Fraction of the enclosing circle's area covered by the circles of the layout
    pub fn density(&self) -> f64 {
        let occupied = self.layout.iter().map(|c| c.circle().area()).sum::<f64>();
        occupied / self.enclosing.circle().area()
    }
}
