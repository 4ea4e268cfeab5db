//! Greedy incremental placement of circles around the origin.
//!
//! Circles are placed from large to small. Each new circle goes to the most compact position where it
//! touches one or two of the circles already placed ([candidates]). If none of those positions are free,
//! a spiral search around the origin takes over ([spiral]), and as a last resort the circle is put on the
//! x-axis beyond everything placed so far. The result is a compact, overlap-free arrangement, not an optimal one.

pub mod candidates;
pub mod spiral;

use itertools::Itertools;
use log::{debug, warn};

use crate::entities::{PackStats, PlacedCircle, UnplacedCircle};
use crate::geometry::primitives::{Circle, Point};
use crate::util::PackConfig;
use crate::util::assertions;

/// Places all `circles` without overlap, see [Packer].
pub fn pack<L, P>(circles: Vec<UnplacedCircle<L, P>>, config: &PackConfig) -> Vec<PlacedCircle<L, P>> {
    Packer::new(*config).pack(circles)
}

/// The Packing Engine.
pub struct Packer {
    pub config: PackConfig,
    /// Geometry of the circles placed so far, in placement order
    placed: Vec<Circle>,
    pub stats: PackStats,
}

impl Packer {
    pub fn new(config: PackConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid config: {config:?}");
        Self {
            config,
            placed: vec![],
            stats: PackStats::default(),
        }
    }

    /// Places `circles`, largest first (ties keep their input order).
    /// Returns the placed circles in placement order.
    ///
    /// All radii should be strictly positive and finite.
    pub fn pack<L, P>(&mut self, circles: Vec<UnplacedCircle<L, P>>) -> Vec<PlacedCircle<L, P>> {
        debug_assert!(
            circles.iter().all(|c| c.radius.is_finite() && c.radius > 0.0),
            "all radii should be strictly positive"
        );
        self.placed.clear();
        self.stats = PackStats::default();

        let n_circles = circles.len();
        let sum_radii = circles.iter().map(|c| c.radius).sum::<f64>();
        let spiral_bound = f64::max(
            sum_radii * self.config.spiral_bound_factor,
            self.config.min_spiral_bound,
        );

        let layout = circles
            .into_iter()
            .sorted_by(|a, b| b.radius.total_cmp(&a.radius))
            .map(|circle| {
                let center = self.find_position(circle.radius, spiral_bound);
                self.placed.push(Circle::new(center, circle.radius));
                debug!(
                    "[PACK] placed circle {}/{} (r: {:.3}) at ({:.3}, {:.3})",
                    self.placed.len(),
                    n_circles,
                    circle.radius,
                    center.0,
                    center.1
                );
                circle.place(center)
            })
            .collect_vec();

        debug_assert!(assertions::layout_has_no_overlap(
            &self.placed,
            self.config.overlap_tolerance
        ));
        layout
    }

    fn find_position(&mut self, radius: f64, spiral_bound: f64) -> Point {
        if self.placed.is_empty() {
            self.stats.n_tangent += 1;
            return Point::ORIGIN;
        }

        let tolerance = self.config.overlap_tolerance;

        for candidate in candidates::tangency_candidates(&self.placed, radius, &self.config) {
            self.stats.n_candidates += 1;
            if fits(&self.placed, &Circle::new(candidate, radius), tolerance) {
                self.stats.n_tangent += 1;
                return candidate;
            }
        }

        if let Some(position) = spiral::spiral_search(
            &self.placed,
            radius,
            spiral_bound,
            &self.config,
            &mut self.stats.n_candidates,
        ) {
            debug!("[PACK] no tangent position free for r: {radius:.3}, placed by spiral search");
            self.stats.n_spiral += 1;
            return position;
        }

        //everything placed so far lies within this distance from the origin
        let bound = self
            .placed
            .iter()
            .map(|c| c.extent())
            .fold(spiral_bound, f64::max);
        warn!("[PACK] spiral search exhausted for r: {radius:.3}, placing at the edge ({bound:.3})");
        self.stats.n_edge += 1;
        Point(bound + radius, 0.0)
    }
}

/// True if `candidate` does not overlap any of the `placed` circles
pub fn fits(placed: &[Circle], candidate: &Circle, tolerance: f64) -> bool {
    placed.iter().all(|p| !p.overlaps(candidate, tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::UnplacedCircle;

    /// Only positions touching two placed circles, so the second circle always needs a fallback
    fn pairwise_only() -> PackConfig {
        PackConfig {
            n_angles: 0,
            ..PackConfig::default()
        }
    }

    fn unit_circles(n: usize) -> Vec<UnplacedCircle<usize>> {
        (0..n).map(|i| UnplacedCircle::labeled(1.0, i)).collect()
    }

    #[test]
    fn tangent_positions_suffice_by_default() {
        let mut packer = Packer::new(PackConfig::default());
        let layout = packer.pack(unit_circles(10));
        assert_eq!(packer.stats.n_tangent, 10);
        assert_eq!(packer.stats.n_fallbacks(), 0);
        assert!(assertions::layout_has_no_overlap(
            &assertions::layout_circles(&layout),
            1e-7
        ));
    }

    #[test]
    fn spiral_search_fallback() {
        let mut packer = Packer::new(pairwise_only());
        let layout = packer.pack(unit_circles(3));

        //first ring of the spiral clear of the circle at the origin
        assert_eq!(layout[1].center(), Point(2.0, 0.0));
        assert_eq!(packer.stats.n_spiral, 1);
        assert_eq!(packer.stats.n_edge, 0);
        assert_eq!(packer.stats.n_tangent, 2);
        assert!(packer.stats.n_candidates > 1);
        assert!(assertions::layout_has_no_overlap(
            &assertions::layout_circles(&layout),
            1e-7
        ));
    }

    #[test]
    fn edge_fallback() {
        let config = PackConfig {
            spiral_bound_factor: 0.0,
            min_spiral_bound: 0.5,
            ..pairwise_only()
        };
        let mut packer = Packer::new(config);
        let layout = packer.pack(unit_circles(3));

        //the spiral only covers positions overlapping the first circle
        assert_eq!(layout[1].center(), Point(2.0, 0.0));
        assert_eq!(packer.stats.n_edge, 1);
        assert_eq!(packer.stats.n_spiral, 0);
        assert_eq!(packer.stats.n_tangent, 2);
        assert!(assertions::layout_has_no_overlap(
            &assertions::layout_circles(&layout),
            1e-7
        ));
    }

    #[test]
    fn fallbacks_never_overlap() {
        let config = PackConfig {
            spiral_bound_factor: 0.0,
            min_spiral_bound: 0.5,
            ..pairwise_only()
        };
        let radii = [3.0, 0.4, 2.0, 1.0, 0.5, 2.5, 0.8, 1.5];
        let circles = radii
            .iter()
            .enumerate()
            .map(|(i, &r)| UnplacedCircle::labeled(r, i))
            .collect();
        let mut packer = Packer::new(config);
        let layout = packer.pack(circles);

        let stats = packer.stats;
        assert_eq!(stats.n_tangent + stats.n_spiral + stats.n_edge, radii.len());
        assert!(stats.n_edge >= 1);
        assert!(assertions::layout_has_no_overlap(
            &assertions::layout_circles(&layout),
            1e-7
        ));
    }

    #[test]
    fn stats_are_reset_between_packings() {
        let mut packer = Packer::new(pairwise_only());
        packer.pack(unit_circles(3));
        let first = packer.stats;
        packer.pack(unit_circles(3));
        assert_eq!(packer.stats, first);
    }
}
