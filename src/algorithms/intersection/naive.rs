use super::{views, Intersection};
use crate::data::LineSegmentView;
use crate::{Error, Tolerance};

/// Find all line segment intersections by testing every pair.
///
/// # Errors
/// [`Error::NoSegments`] for an empty slice and
/// [`Error::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
///
/// # Time complexity
/// $O(n^2)$
pub fn segment_intersections<'a, Edge>(edges: &'a [Edge]) -> Result<Vec<Intersection>, Error>
where
  &'a Edge: Into<LineSegmentView<'a, f64>>,
{
  segment_intersections_with(edges, Tolerance::default())
}

/// Like [`segment_intersections`] with explicit numerical thresholds.
pub fn segment_intersections_with<'a, Edge>(
  edges: &'a [Edge],
  tol: Tolerance,
) -> Result<Vec<Intersection>, Error>
where
  &'a Edge: Into<LineSegmentView<'a, f64>>,
{
  let segments = views(edges)?;
  let n = segments.len();
  let mut out = Vec::new();
  for i in 0..n {
    for j in i + 1..n {
      if let Some(pt) = segments[i].intersect_with(&segments[j], &tol) {
        out.push((i, j, pt));
      }
    }
  }
  Ok(out)
}
