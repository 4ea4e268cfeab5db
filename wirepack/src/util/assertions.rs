use itertools::Itertools;
use log::error;

use crate::entities::{BundleResult, PlacedCircle};
use crate::geometry::primitives::Circle;
//Various checks to verify correctness of the results
//Used in debug_assert!() blocks and tests

/// True if no two circles overlap by more than `tolerance`
pub fn layout_has_no_overlap(circles: &[Circle], tolerance: f64) -> bool {
    for ((i, a), (j, b)) in circles.iter().enumerate().tuple_combinations() {
        if a.overlaps(b, tolerance) {
            error!("circles {i} ({a:?}) and {j} ({b:?}) overlap");
            return false;
        }
    }
    true
}

/// True if every circle sticks out of `enclosing` by at most `tolerance`
pub fn encloses_all(enclosing: &Circle, circles: &[Circle], tolerance: f64) -> bool {
    for (i, c) in circles.iter().enumerate() {
        if !enclosing.contains(c, tolerance) {
            error!(
                "circle {i} ({c:?}) sticks out of the enclosing circle by {}",
                enclosing.excess(c)
            );
            return false;
        }
    }
    true
}

/// Checks all invariants of a bundle result
pub fn bundle_is_consistent<L, P>(
    bundle: &BundleResult<L, P>,
    overlap_tolerance: f64,
    enclosing_tolerance: f64,
) -> bool {
    let circles = layout_circles(&bundle.layout);
    layout_has_no_overlap(&circles, overlap_tolerance)
        && (!bundle.enclosing.converged
            || encloses_all(&bundle.enclosing.circle(), &circles, enclosing_tolerance))
        && bundle.outer_diameter == 2.0 * bundle.enclosing.radius
        && bundle.outer_diameter_with_margin == 2.0 * (bundle.enclosing.radius + bundle.margin)
}

pub fn layout_circles<L, P>(layout: &[PlacedCircle<L, P>]) -> Vec<Circle> {
    layout.iter().map(|c| c.circle()).collect()
}
