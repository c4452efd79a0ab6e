//! Pairwise intersections among line segments.
//!
//! [`bentley_ottmann::segment_intersections`] sweeps in
//! $O((n + k) \log n)$, [`naive::segment_intersections`] tests every pair.
//! Both report `(i, j, point)` triples with `i < j`, sorted by `(i, j)`, and
//! compute each point with the same primitive so their answers agree.
use crate::data::{LineSegmentView, Point};
use crate::Error;

pub mod bentley_ottmann;
pub mod naive;

mod events;
mod status;

/// Indices of two intersecting segments (`i < j`) and their intersection.
pub type Intersection = (usize, usize, Point<f64>);

type PairKey = (usize, usize);

fn pair_key(a: usize, b: usize) -> PairKey {
  if a < b {
    (a, b)
  } else {
    (b, a)
  }
}

fn views<'a, Edge>(edges: &'a [Edge]) -> Result<Vec<LineSegmentView<'a, f64>>, Error>
where
  &'a Edge: Into<LineSegmentView<'a, f64>>,
{
  if edges.is_empty() {
    return Err(Error::NoSegments);
  }
  let views: Vec<LineSegmentView<'a, f64>> = edges.iter().map(Into::into).collect();
  if !views.iter().all(LineSegmentView::is_finite) {
    return Err(Error::NonFiniteCoordinate);
  }
  Ok(views)
}
