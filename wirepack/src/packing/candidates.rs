use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::{Circle, Point};
use crate::util::PackConfig;

/// Generates all positions where a circle with `radius` would touch one or two of the `placed` circles,
/// most compact first.
///
/// Positions are deduplicated on a grid of `config.dedup_precision` and ordered by their distance to the origin,
/// compared on the same grid. Equally distant positions are ordered by their distance to the area-weighted
/// centroid of the placed circles, and then by the order in which they were generated.
/// The candidates are not checked for overlap.
pub fn tangency_candidates(placed: &[Circle], radius: f64, config: &PackConfig) -> Vec<Point> {
    let scale = 1.0 / config.dedup_precision;
    let centroid = weighted_centroid(placed);

    single_tangency_candidates(placed, radius, config.n_angles)
        .chain(pairwise_tangency_candidates(
            placed,
            radius,
            config.overlap_tolerance,
        ))
        .unique_by(|p| p.grid_key(scale))
        .sorted_by_cached_key(|p| {
            (
                (p.norm() * scale).round() as i64,
                OrderedFloat(p.distance_to(&centroid)),
            )
        })
        .collect()
}

/// Samples `n_angles` positions around every placed circle where a circle with `radius` would touch it.
pub fn single_tangency_candidates(
    placed: &[Circle],
    radius: f64,
    n_angles: usize,
) -> impl Iterator<Item = Point> {
    placed
        .iter()
        .flat_map(move |p| Point::ring(p.center, p.radius + radius, n_angles))
}

/// Positions where a circle with `radius` would touch two placed circles at once.
///
/// These are the intersections of the placed circles inflated by `radius`.
pub fn pairwise_tangency_candidates(
    placed: &[Circle],
    radius: f64,
    tolerance: f64,
) -> impl Iterator<Item = Point> {
    placed
        .iter()
        .tuple_combinations()
        .flat_map(move |(p, q)| {
            let p_inflated = Circle::new(p.center, p.radius + radius);
            let q_inflated = Circle::new(q.center, q.radius + radius);
            p_inflated.border_intersections(&q_inflated, tolerance)
        })
        .flatten()
}

/// Centroid of the circles, weighted by their area. The origin for an empty set.
pub fn weighted_centroid(circles: &[Circle]) -> Point {
    let (sum_w, sum_x, sum_y) = circles.iter().fold((0.0, 0.0, 0.0), |(w, x, y), c| {
        let c_w = c.radius * c.radius;
        (w + c_w, x + c_w * c.center.0, y + c_w * c.center.1)
    });
    match sum_w > 0.0 {
        true => Point(sum_x / sum_w, sum_y / sum_w),
        false => Point::ORIGIN,
    }
}
