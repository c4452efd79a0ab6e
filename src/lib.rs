#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Plane-sweep algorithms for two classical problems:
//!
//! * the closest pair among a set of planar points, and
//! * every pairwise intersection among a set of line segments.
//!
//! Both problems come with an $O(n^2)$ reference implementation which is
//! used to cross-check the sweeps.
//!
//! ```rust
//! # use planesweep::algorithms::closest_pair;
//! # use planesweep::data::Point;
//! let pts = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([5.0, 5.0]),
//!   Point::new([1.0, 0.0]),
//! ];
//! let (a, b, dist) = closest_pair(&pts).unwrap();
//! assert_eq!(dist, 1.0);
//! assert_eq!((a, b), (&pts[0], &pts[2]));
//! ```
use std::fmt;

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;
mod tolerance;

pub use orientation::Orientation;

pub use intersection::Intersects;

pub use tolerance::Tolerance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Closest pair queries need at least two points.
  InsufficientPoints,
  /// Intersection queries need at least one segment.
  NoSegments,
  /// An input coordinate was NaN or infinite.
  NonFiniteCoordinate,
}

impl Error {
  /// Every variant describes a malformed top-level input.
  pub fn is_invalid_input(&self) -> bool {
    matches!(
      self,
      Error::InsufficientPoints | Error::NoSegments | Error::NonFiniteCoordinate
    )
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    match self {
      Error::InsufficientPoints => write!(f, "Insufficient points"),
      Error::NoSegments => write!(f, "No segments"),
      Error::NonFiniteCoordinate => write!(f, "Coordinate is NaN or infinite"),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
