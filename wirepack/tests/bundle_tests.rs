#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use float_cmp::approx_eq;
    use itertools::Itertools;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use wirepack::InvalidInputError;
    use wirepack::entities::UnplacedCircle;
    use wirepack::geometry::geo_traits::DistanceTo;
    use wirepack::geometry::primitives::Point;
    use wirepack::resolver::resolve;
    use wirepack::util::assertions;
    use wirepack::util::{EnclosingConfig, ResolveConfig, ViolatorSelection};

    const OVERLAP_TOL: f64 = 1e-7;
    const ENCLOSING_TOL: f64 = 1e-6;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .try_init();
    }

    fn random_circles(seed: u64, n: usize) -> Vec<UnplacedCircle<usize>> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..n)
            .map(|i| UnplacedCircle::labeled(rng.random_range(0.1..=10.0), i))
            .collect()
    }

    fn unit_circles(n: usize) -> Vec<UnplacedCircle<usize>> {
        (0..n).map(|i| UnplacedCircle::labeled(1.0, i)).collect()
    }

    #[test_case(0, 3; "3 circles")]
    #[test_case(1, 10; "10 circles")]
    #[test_case(2, 37; "37 circles")]
    #[test_case(3, 80; "80 circles")]
    #[test_case(4, 200; "200 circles")]
    fn random_bundle(seed: u64, n: usize) {
        init_logger();
        let circles = random_circles(seed, n);
        let input_radii = circles.iter().map(|c| c.radius).collect_vec();

        let bundle = resolve(circles, 1.0, &ResolveConfig::default()).unwrap();

        assert_eq!(bundle.layout.len(), n);
        assert!(bundle.enclosing.converged);

        let layout = assertions::layout_circles(&bundle.layout);
        assert!(assertions::layout_has_no_overlap(&layout, OVERLAP_TOL));
        assert!(assertions::encloses_all(&bundle.enclosing.circle(), &layout, ENCLOSING_TOL));
        assert!(assertions::bundle_is_consistent(&bundle, OVERLAP_TOL, ENCLOSING_TOL));

        //every input circle is echoed back exactly once, with its radius untouched
        for placed in &bundle.layout {
            assert_eq!(placed.radius, input_radii[placed.label]);
        }
        assert_eq!(bundle.layout.iter().map(|c| c.label).sorted().collect_vec(), (0..n).collect_vec());

        //the enclosing circle can never hold more area than it encloses
        assert!(bundle.density() <= 1.0);
    }

    #[test]
    fn placement_order_is_largest_first() {
        let bundle = resolve(random_circles(7, 50), 0.0, &ResolveConfig::default()).unwrap();
        assert!(bundle.layout.windows(2).all(|w| w[0].radius >= w[1].radius));
        assert_eq!(bundle.layout[0].center(), Point::ORIGIN);
    }

    #[test]
    fn equal_radii_keep_input_order() {
        let bundle = resolve(unit_circles(12), 0.0, &ResolveConfig::default()).unwrap();
        assert_eq!(bundle.layout.iter().map(|c| c.label).collect_vec(), (0..12).collect_vec());
    }

    #[test]
    fn resolving_is_deterministic() {
        let config = ResolveConfig::default();
        let first = resolve(random_circles(11, 60), 0.8, &config).unwrap();
        let second = resolve(random_circles(11, 60), 0.8, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn seeded_selection_is_deterministic() {
        let config = ResolveConfig {
            enclosing_config: EnclosingConfig {
                selection: ViolatorSelection::Seeded { seed: 42 },
                ..EnclosingConfig::default()
            },
            ..ResolveConfig::default()
        };
        let first = resolve(random_circles(5, 40), 0.0, &config).unwrap();
        let second = resolve(random_circles(5, 40), 0.0, &config).unwrap();
        assert_eq!(first, second);

        let layout = assertions::layout_circles(&first.layout);
        assert!(assertions::encloses_all(&first.enclosing.circle(), &layout, ENCLOSING_TOL));
    }

    #[test]
    fn margin_only_inflates_the_diameter() {
        let config = ResolveConfig::default();
        let diameters = [0.0, 0.25, 1.0, 3.5]
            .into_iter()
            .map(|margin| resolve(random_circles(3, 25), margin, &config).unwrap())
            .collect_vec();

        for (a, b) in diameters.iter().tuple_windows() {
            assert_eq!(a.outer_diameter, b.outer_diameter);
            assert_eq!(a.layout, b.layout);
            assert!(a.outer_diameter_with_margin < b.outer_diameter_with_margin);
        }
    }

    #[test]
    fn margin_composition() {
        let config = ResolveConfig::default();
        let bundle = resolve(random_circles(9, 15), 2.0, &config).unwrap();
        assert_eq!(bundle.outer_diameter_with_margin, bundle.outer_diameter + 4.0);

        let no_margin = resolve(random_circles(9, 15), 0.0, &config).unwrap();
        assert_eq!(no_margin.outer_diameter_with_margin, no_margin.outer_diameter);
    }

    #[test]
    fn single_circle() {
        let bundle = resolve(vec![UnplacedCircle::labeled(5.0, "only")], 0.0, &ResolveConfig::default()).unwrap();
        assert_eq!(bundle.outer_diameter, 10.0);
        assert_eq!(bundle.enclosing.center(), Point::ORIGIN);
        assert_eq!(bundle.layout[0].center(), Point::ORIGIN);
        assert_eq!(bundle.enclosing.iterations, 0);
    }

    #[test]
    fn two_equal_circles() {
        let bundle = resolve(unit_circles(2), 0.0, &ResolveConfig::default()).unwrap();
        let (a, b) = (bundle.layout[0].center(), bundle.layout[1].center());
        assert!(approx_eq!(f64, a.distance_to(&b), 2.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, bundle.outer_diameter, 4.0, epsilon = 1e-5));
    }

    #[test]
    fn three_equal_circles() {
        let bundle = resolve(unit_circles(3), 0.0, &ResolveConfig::default()).unwrap();

        //mutually tangent
        for (a, b) in bundle.layout.iter().tuple_combinations() {
            assert!(approx_eq!(f64, a.center().distance_to(&b.center()), 2.0, epsilon = 1e-6));
        }
        //circumradius of the triangle of centers plus the circle radius
        let expected = 1.0 + 2.0 / 3.0f64.sqrt();
        assert!((bundle.enclosing.radius - expected).abs() < 1e-3);
    }

    #[test_case(1e5; "1e5")]
    #[test_case(1e8; "1e8")]
    fn three_huge_circles(radius: f64) {
        let circles = (0..3).map(|i| UnplacedCircle::labeled(radius, i)).collect_vec();
        let bundle = resolve(circles, 0.0, &ResolveConfig::default()).unwrap();
        assert!(bundle.enclosing.converged);
        let expected = 2.0 * radius * (1.0 + 2.0 / 3.0f64.sqrt());
        assert!(approx_eq!(f64, bundle.outer_diameter / expected, 1.0, epsilon = 1e-6));
    }

    #[test]
    fn hexagonal_ring() {
        //one circle surrounded by six of the same size fits in a circle three times as large
        let bundle = resolve(unit_circles(7), 0.0, &ResolveConfig::default()).unwrap();
        let layout = assertions::layout_circles(&bundle.layout);
        assert!(assertions::layout_has_no_overlap(&layout, OVERLAP_TOL));
        assert!(approx_eq!(f64, bundle.enclosing.radius, 3.0, epsilon = 1e-3));
        assert!(approx_eq!(f64, bundle.density(), 7.0 / 9.0, epsilon = 1e-3));
    }

    #[test]
    fn small_circles_fill_gaps() {
        //a small circle fits in the gap between three large mutually tangent ones
        let mut circles = unit_circles(3);
        circles.push(UnplacedCircle::labeled(0.15, 3));
        let bundle = resolve(circles, 0.0, &ResolveConfig::default()).unwrap();
        let expected = 1.0 + 2.0 / 3.0f64.sqrt();
        assert!((bundle.enclosing.radius - expected).abs() < 1e-3);
        let gap_center = bundle.layout[..3]
            .iter()
            .map(|c| c.center())
            .fold(Point::ORIGIN, |acc, p| Point(acc.0 + p.0 / 3.0, acc.1 + p.1 / 3.0));
        assert!(bundle.layout[3].center().distance_to(&gap_center) < 0.01);
        assert_eq!(bundle.stats.n_fallbacks(), 0);
    }

    #[test]
    fn area_lower_bound() {
        let bundle = resolve(random_circles(13, 30), 0.0, &ResolveConfig::default()).unwrap();
        let total_area: f64 = bundle.layout.iter().map(|c| PI * c.radius * c.radius).sum();
        assert!(PI * bundle.enclosing.radius.powi(2) >= total_area);
    }

    #[test]
    fn invalid_input() {
        let config = ResolveConfig::default();
        assert_eq!(
            resolve(Vec::<UnplacedCircle<()>>::new(), 0.0, &config),
            Err(InvalidInputError::Empty)
        );
        assert_eq!(
            resolve(vec![UnplacedCircle::labeled(1.0, ()), UnplacedCircle::labeled(0.0, ())], 0.0, &config),
            Err(InvalidInputError::InvalidRadius { index: 1, radius: 0.0 })
        );
        assert_eq!(
            resolve(vec![UnplacedCircle::labeled(1.0, ())], -1.0, &config),
            Err(InvalidInputError::InvalidMargin(-1.0))
        );
    }
}
