use itertools::Itertools;
use itertools::MinMaxResult;

use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::{Circle, Point};

/// 1 / golden ratio
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Upper limit on the number of interval reductions of a single golden-section search
const MAX_REDUCTIONS: usize = 256;

/// Finds the center minimizing the radius of the circle around it that contains all `circles`.
/// Both coordinates are searched down to intervals of `precision`, or a few ulps of the coordinates when
/// `precision` is finer than those.
///
/// The radius needed around a center `c` is `max(|c - p| + r)`, a convex function of `c` with its minimum
/// inside the bounding box of the centers. It is minimized with a golden-section search over x, which
/// for every x minimizes over y with another golden-section search.
pub fn refine(circles: &[Circle], precision: f64) -> Circle {
    assert!(!circles.is_empty(), "no circles provided");
    let (x_min, x_max) = min_max(circles.iter().map(|c| c.center.0));
    let (y_min, y_max) = min_max(circles.iter().map(|c| c.center.1));

    let best_y_at = |x: f64| {
        golden_section_min(|y| required_radius(circles, Point(x, y)), y_min, y_max, precision)
    };
    let (x, _) = golden_section_min(|x| best_y_at(x).1, x_min, x_max, precision);
    let (y, radius) = best_y_at(x);

    Circle::new(Point(x, y), radius)
}

/// Radius of the smallest circle around `center` containing all `circles`
pub fn required_radius(circles: &[Circle], center: Point) -> f64 {
    circles
        .iter()
        .map(|c| center.distance_to(&c.center) + c.radius)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Minimizes the unimodal function `f` over `[lo, hi]`. Returns the argument and the value at the minimum.
///
/// The search interval is narrowed until it is smaller than `precision` or than the floating point
/// resolution at its bounds. Where `f` is flat around its minimum, the argument is only as accurate as `f`
/// can discriminate (about the square root of the relative resolution of `f`).
fn golden_section_min(
    f: impl Fn(f64) -> f64,
    mut lo: f64,
    mut hi: f64,
    precision: f64,
) -> (f64, f64) {
    let mut a = hi - INV_PHI * (hi - lo);
    let mut b = lo + INV_PHI * (hi - lo);
    let (mut f_a, mut f_b) = (f(a), f(b));

    for _ in 0..MAX_REDUCTIONS {
        let resolution = 4.0 * f64::EPSILON * f64::max(lo.abs(), hi.abs());
        if hi - lo <= f64::max(precision, resolution) {
            break;
        }
        if f_a <= f_b {
            hi = b;
            b = a;
            f_b = f_a;
            a = hi - INV_PHI * (hi - lo);
            f_a = f(a);
        } else {
            lo = a;
            a = b;
            f_a = f_b;
            b = lo + INV_PHI * (hi - lo);
            f_b = f(b);
        }
    }

    let x = (lo + hi) / 2.0;
    (x, f(x))
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    match values.minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => (0.0, 0.0),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max),
    }
}
