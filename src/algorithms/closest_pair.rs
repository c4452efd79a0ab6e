//! Closest pair of points.
//!
//! [`sweep::closest_pair`] runs in $O(n \log n)$, [`naive::closest_pair`]
//! checks all pairs and serves as the reference.
use crate::data::Point;
use crate::Error;

pub mod naive;
pub mod sweep;

/// Two points borrowed from the input and the distance between them.
pub type ClosestPair<'a> = (&'a Point<f64>, &'a Point<f64>, f64);

fn validate(points: &[Point<f64>]) -> Result<(), Error> {
  if points.len() < 2 {
    return Err(Error::InsufficientPoints);
  }
  if !points.iter().all(Point::is_finite) {
    return Err(Error::NonFiniteCoordinate);
  }
  Ok(())
}
