use array_init::array_init;
use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T, const N: usize = 2> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  /// Euclidean distance between two points.
  ///
  /// NaN coordinates propagate into the result.
  ///
  /// ```rust
  /// # use planesweep::data::Point;
  /// let a = Point::new([1.0, 0.0]);
  /// let b = Point::new([2.0, 0.5]);
  /// assert_eq!(a.distance(&b), 1.25f64.sqrt());
  /// ```
  pub fn distance(&self, other: &Point<T, N>) -> T
  where
    T: Float,
  {
    (self - other).norm()
  }

  /// True if every coordinate is neither NaN nor infinite.
  pub fn is_finite(&self) -> bool
  where
    T: Float,
  {
    self.array.iter().all(|c| c.is_finite())
  }

  /// Coordinate-wise comparison within `eps`.
  pub fn approx_eq(&self, other: &Point<T, N>, eps: T) -> bool
  where
    T: Float,
  {
    self
      .array
      .iter()
      .zip(other.array.iter())
      .all(|(a, b)| (*a - *b).abs() <= eps)
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }
  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

mod add;
mod sub;
