use std::path::Path;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hdc::config::HdcConfig;
use hdc::io;
use rand::SeedableRng;
use rand::prelude::{IteratorRandom, SmallRng};
use wirepack::entities::UnplacedCircle;
use wirepack::resolver;

criterion_main!(benches);
criterion_group!(benches, resolve_random_bench, resolve_harness_bench);

const N_CIRCLES: [usize; 4] = [10, 50, 100, 200];
const LARGE_LOOM_PATH: &str = "../assets/large_loom.json";

/// Benchmark how long it takes to resolve bundles of increasing size, with wire radii drawn from the catalogue
fn resolve_random_bench(c: &mut Criterion) {
    let config = HdcConfig::default();
    let radii = config.catalogue.wires.iter().map(|w| w.radius_mm()).collect::<Vec<_>>();

    let mut group = c.benchmark_group("resolve_random");
    for n in N_CIRCLES {
        let mut rng = SmallRng::seed_from_u64(0);
        let circles = (0..n)
            .map(|i| UnplacedCircle::labeled(*radii.iter().choose(&mut rng).unwrap(), i))
            .collect::<Vec<_>>();

        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| resolver::resolve(circles.clone(), 0.0, &config.resolve_config).unwrap())
        });
    }
    group.finish();
}

fn resolve_harness_bench(c: &mut Criterion) {
    let config = HdcConfig::default();
    let harness = io::read_harness(Path::new(LARGE_LOOM_PATH)).unwrap();
    let circles = harness.to_circles(&config.catalogue).unwrap();

    c.bench_function("resolve_large_loom", |b| {
        b.iter(|| resolver::resolve(circles.clone(), harness.margin, &config.resolve_config).unwrap())
    });
}
