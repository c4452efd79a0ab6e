use std::collections::BTreeSet;

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use super::{validate, ClosestPair};
use crate::data::Point;
use crate::Error;

// https://en.wikipedia.org/wiki/Closest_pair_of_points_problem#Planar_case

/// $O(n \log n)$ Closest pair of points.
///
/// Sweeps a vertical line from left to right over the points sorted by x.
/// Points less than `d` (the best distance so far) behind the sweep line are
/// kept in a status structure ordered by y. Each new point only has to be
/// compared against the status entries within `d` of its own y-coordinate;
/// at most a constant number of points fit in that `d` by `2d` box.
///
/// The returned points borrow from `points`. The pair is ordered by x
/// (then y). When several pairs share the minimal distance, the first pair
/// discovered by the sweep is kept.
///
/// # Errors
/// [`Error::InsufficientPoints`] for fewer than two points and
/// [`Error::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
///
/// # Examples
///
/// ```rust
/// # use planesweep::algorithms::closest_pair;
/// # use planesweep::data::Point;
/// let pts = vec![
///   Point::new([1.0, 0.0]),
///   Point::new([2.0, 0.5]),
///   Point::new([3.0, 7.0]),
///   Point::new([4.0, 4.0]),
/// ];
/// let (a, b, dist) = closest_pair(&pts).unwrap();
/// assert_eq!((a, b), (&pts[0], &pts[1]));
/// assert_eq!(dist, 1.25f64.sqrt());
/// ```
pub fn closest_pair(points: &[Point<f64>]) -> Result<ClosestPair<'_>, Error> {
  validate(points)?;

  let mut sorted: Vec<&Point<f64>> = points.iter().collect();
  sorted.sort_by(|a, b| {
    a.x_coord()
      .total_cmp(b.x_coord())
      .then_with(|| a.y_coord().total_cmp(b.y_coord()))
  });

  // Entries are (y, index into `sorted`). The index makes equal y-coordinates
  // distinct and doubles as a handle for removal.
  let key = |idx: usize| (OrderedFloat(*sorted[idx].y_coord()), idx);

  let mut best: ClosestPair<'_> = (sorted[0], sorted[1], sorted[0].distance(sorted[1]));
  let mut status = BTreeSet::new();
  status.insert(key(0));
  status.insert(key(1));

  let mut trailing = 0;
  let mut leading = 2;
  let mut examined = 0usize;
  while leading < sorted.len() {
    let lead = sorted[leading];
    let dist = best.2;
    if lead.x_coord() - sorted[trailing].x_coord() > dist {
      status.remove(&key(trailing));
      trailing += 1;
      continue;
    }

    status.insert(key(leading));
    let y = *lead.y_coord();
    let range = (OrderedFloat(y - dist), 0)..=(OrderedFloat(y + dist), usize::MAX);
    for &(_, idx) in status.range(range) {
      if idx == leading {
        continue;
      }
      examined += 1;
      let candidate = sorted[idx].distance(lead);
      if candidate < best.2 {
        trace!(
          from = best.2,
          to = candidate,
          x = lead.x_coord(),
          "closer pair"
        );
        best = (sorted[idx], lead, candidate);
      }
    }
    leading += 1;
  }

  debug!(
    points = points.len(),
    examined,
    distance = best.2,
    "closest pair sweep finished"
  );
  Ok(order_by_x(best))
}

fn order_by_x(pair: ClosestPair<'_>) -> ClosestPair<'_> {
  let (a, b, dist) = pair;
  let a_first = a
    .x_coord()
    .total_cmp(b.x_coord())
    .then_with(|| a.y_coord().total_cmp(b.y_coord()))
    .is_le();
  if a_first {
    (a, b, dist)
  } else {
    (b, a, dist)
  }
}
