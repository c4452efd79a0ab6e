use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planesweep::algorithms::{closest_pair, closest_pair_naive};
use planesweep::data::*;

use rand::Rng;
use rand::SeedableRng;

fn random_points<R: Rng>(rng: &mut R, n: usize) -> Vec<Point<f64>> {
  (0..n).map(|_| rng.gen::<Point<f64>>()).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
  let mut group = c.benchmark_group("closest_pair");
  for &n in &[100, 1_000, 10_000] {
    let pts = random_points(&mut rng, n);
    group.bench_with_input(BenchmarkId::new("sweep", n), &pts, |b, pts| {
      b.iter(|| closest_pair(pts))
    });
    // The quadratic baseline is only worth timing on small inputs.
    if n <= 1_000 {
      group.bench_with_input(BenchmarkId::new("naive", n), &pts, |b, pts| {
        b.iter(|| closest_pair_naive(pts))
      });
    }
  }
  group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
