use super::{validate, ClosestPair};
use crate::data::Point;
use crate::Error;

/// Closest pair by checking every pair of points.
///
/// Among pairs at the same minimal distance, the first one in input order
/// wins.
///
/// # Errors
/// [`Error::InsufficientPoints`] for fewer than two points and
/// [`Error::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
///
/// # Time complexity
/// $O(n^2)$
pub fn closest_pair(points: &[Point<f64>]) -> Result<ClosestPair<'_>, Error> {
  validate(points)?;
  pairs(points)
    .map(|(a, b)| (a, b, a.distance(b)))
    .min_by(|x, y| x.2.total_cmp(&y.2))
    .ok_or(Error::InsufficientPoints)
}

fn pairs<E>(slice: &[E]) -> impl Iterator<Item = (&E, &E)> {
  let n = slice.len();
  (0..n).flat_map(move |a| (a + 1..n).map(move |b| (&slice[a], &slice[b])))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::assert_err_eq;
  use proptest::prelude::*;

  #[test]
  fn two_points() {
    let pts = vec![Point::new([0.0, 0.0]), Point::new([3.0, 4.0])];
    assert_eq!(closest_pair(&pts), Ok((&pts[0], &pts[1], 5.0)));
  }

  #[test]
  fn first_pair_wins_ties() {
    let pts = vec![
      Point::new([0.0, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([5.0, 0.0]),
      Point::new([6.0, 0.0]),
    ];
    let (a, b, _) = closest_pair(&pts).unwrap();
    assert!(std::ptr::eq(a, &pts[0]));
    assert!(std::ptr::eq(b, &pts[1]));
  }

  #[test]
  fn distances_do_not_overflow() {
    let pts = vec![
      Point::new([0.0, 0.0]),
      Point::new([5e200, 0.0]),
      Point::new([6e200, 0.0]),
    ];
    assert_eq!(closest_pair(&pts), Ok((&pts[1], &pts[2], 6e200 - 5e200)));
  }

  #[test]
  fn too_few_points() {
    assert_err_eq!(closest_pair(&[]), Error::InsufficientPoints);
    assert_err_eq!(
      closest_pair(&[Point::new([1.0, 1.0])]),
      Error::InsufficientPoints
    );
  }

  #[test]
  fn nan_coordinate() {
    let pts = [Point::new([0.0, 0.0]), Point::new([f64::NAN, 1.0])];
    assert_err_eq!(closest_pair(&pts), Error::NonFiniteCoordinate);
  }

  proptest! {
    #[test]
    fn deterministic(pts in points(2..40)) {
      prop_assert_eq!(closest_pair(&pts), closest_pair(&pts))
    }

    #[test]
    fn no_pair_is_closer(pts in points(2..30)) {
      let (_, _, dist) = closest_pair(&pts).unwrap();
      for (a, b) in pairs(&pts) {
        prop_assert!(a.distance(b) >= dist);
      }
    }
  }
}
