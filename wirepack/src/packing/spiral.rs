use std::f64::consts::TAU;

use crate::geometry::primitives::{Circle, Point};
use crate::packing::fits;
use crate::util::PackConfig;

/// Upper limit on the number of positions tested on a single ring
const MAX_ANGLES_PER_RING: usize = 4096;

/// Scans rings of increasing radius around the origin, up to `bound`, for the first position where a circle
/// with `radius` does not overlap any of the `placed` circles.
///
/// Rings are spaced by half the radius of the circle (coarser if that would exceed `config.max_spiral_rings`)
/// and the number of positions per ring grows with its circumference.
/// Every tested position is added to `n_samples`.
pub fn spiral_search(
    placed: &[Circle],
    radius: f64,
    bound: f64,
    config: &PackConfig,
    n_samples: &mut usize,
) -> Option<Point> {
    let step = f64::max(radius / 2.0, bound / config.max_spiral_rings as f64);
    let n_rings = (bound / step).ceil() as usize;

    for i in 0..=n_rings {
        let ring_radius = f64::min(i as f64 * step, bound);
        let n_angles = match i {
            0 => 1,
            _ => ((TAU * ring_radius / step).ceil() as usize).clamp(8, MAX_ANGLES_PER_RING),
        };
        for position in Point::ring(Point::ORIGIN, ring_radius, n_angles) {
            *n_samples += 1;
            if fits(placed, &Circle::new(position, radius), config.overlap_tolerance) {
                return Some(position);
            }
        }
    }
    None
}
