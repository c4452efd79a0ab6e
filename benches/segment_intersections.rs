use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planesweep::algorithms::{segment_intersections, segment_intersections_naive};
use planesweep::data::*;

use rand::Rng;
use rand::SeedableRng;

// Short segments in the unit square keep the number of intersections roughly
// linear in `n`, which is where the sweep pays off.
fn random_segments<R: Rng>(rng: &mut R, n: usize) -> Vec<LineSegment> {
  let len = 2.0 / (n as f64).sqrt();
  (0..n)
    .map(|_| {
      let start: Point<f64> = rng.gen();
      let end = Point::new([
        start.x_coord() + rng.gen_range(-len..len),
        start.y_coord() + rng.gen_range(-len..len),
      ]);
      LineSegment::new(start, end)
    })
    .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
  let mut group = c.benchmark_group("segment_intersections");
  for &n in &[100, 1_000, 5_000] {
    let segments = random_segments(&mut rng, n);
    group.bench_with_input(BenchmarkId::new("sweep", n), &segments, |b, segments| {
      b.iter(|| segment_intersections(segments))
    });
    if n <= 1_000 {
      group.bench_with_input(BenchmarkId::new("naive", n), &segments, |b, segments| {
        b.iter(|| segment_intersections_naive(segments))
      });
    }
  }
  group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
