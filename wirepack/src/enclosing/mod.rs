//! Enclosing Circle Solver.
//!
//! Approximates the smallest circle containing a set of circles by iterative relaxation:
//! starting from the first circle, the candidate is repeatedly grown just enough to also contain one of the
//! circles still sticking out, until none remain. A converged candidate can then be polished ([refine]),
//! which moves its center towards the true minimum enclosing circle.

pub mod refine;

use log::{debug, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rand::seq::IteratorRandom;

use crate::entities::EnclosingResult;
use crate::geometry::primitives::Circle;
use crate::util::{EnclosingConfig, ViolatorSelection};

/// Computes a circle containing all `circles` (within `config.tolerance`), as small as the relaxation allows.
///
/// If `config.max_iterations` is exhausted, the last candidate is returned with `converged == false`.
pub fn min_enclosing(circles: &[Circle], config: &EnclosingConfig) -> EnclosingResult {
    assert!(!circles.is_empty(), "no circles provided");

    let mut rng = match config.selection {
        ViolatorSelection::MaxExcess => None,
        ViolatorSelection::Seeded { seed } => Some(SmallRng::seed_from_u64(seed)),
    };

    let mut candidate = circles[0];
    let mut iterations = 0;

    let converged = loop {
        let violators = circles
            .iter()
            .filter(|c| candidate.excess(c) > config.tolerance);

        let violator = match rng.as_mut() {
            //first of the violators with the largest excess
            None => violators.min_by(|a, b| candidate.excess(b).total_cmp(&candidate.excess(a))),
            Some(rng) => violators.choose(rng),
        };

        match violator {
            None => break true,
            Some(_) if iterations >= config.max_iterations => break false,
            Some(v) => {
                candidate = candidate.expanded_to_include(v);
                iterations += 1;
            }
        }
    };

    if !converged {
        let n_outside = circles
            .iter()
            .filter(|c| candidate.excess(c) > config.tolerance)
            .count();
        warn!(
            "[MEC] no convergence after {iterations} iterations, {n_outside} circle(s) still outside (r: {:.6})",
            candidate.radius
        );
    } else if config.refine {
        let refined = refine::refine(circles, config.tolerance * 1e-3);
        if refined.radius < candidate.radius {
            debug!(
                "[MEC] refined radius from {:.6} to {:.6}",
                candidate.radius, refined.radius
            );
            candidate = refined;
        }
    }

    EnclosingResult {
        center_x: candidate.center.0,
        center_y: candidate.center.1,
        radius: candidate.radius,
        converged,
        iterations,
    }
}
