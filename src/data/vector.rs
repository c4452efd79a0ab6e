use array_init::array_init;
use num_traits::{Float, NumOps, Zero};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Distribution<Vector<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector<T, N> {
    Vector(array_init(|_| rng.gen()))
  }
}

impl<T, const N: usize> Vector<T, N>
where
  T: NumOps + Zero + Clone,
{
  pub fn dot(&self, other: &Vector<T, N>) -> T {
    self
      .0
      .iter()
      .zip(other.0.iter())
      .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
  }

  pub fn squared_magnitude(&self) -> T {
    self.dot(self)
  }
}

impl<T: Float, const N: usize> Vector<T, N> {
  /// Euclidean (2-)norm.
  ///
  /// Does not overflow or underflow for finite components: when the sum of
  /// squares leaves the normal range, the vector is rescaled by its largest
  /// component first.
  pub fn norm(&self) -> T {
    let sq = self.squared_magnitude();
    if sq.is_finite() && sq >= T::min_positive_value() {
      return sq.sqrt();
    }
    let largest = self.0.iter().fold(T::zero(), |m, c| m.max(c.abs()));
    if largest.is_zero() || !largest.is_finite() {
      return sq.sqrt();
    }
    let unit: Vector<T, N> = Vector(array_init(|i| self.0[i] / largest));
    unit.squared_magnitude().sqrt() * largest
  }
}

impl<T> Vector<T, 2>
where
  T: NumOps + Clone,
{
  /// Determinant of the 2x2 matrix with `self` and `other` as columns.
  ///
  /// Positive if `other` is counter-clockwise from `self`, zero if the two
  /// vectors are parallel.
  pub fn cross(&self, other: &Vector<T, 2>) -> T {
    self.0[0].clone() * other.0[1].clone() - self.0[1].clone() * other.0[0].clone()
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

mod mul;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cross_sign() {
    let x = Vector([1.0, 0.0]);
    let y = Vector([0.0, 1.0]);
    assert_eq!(x.cross(&y), 1.0);
    assert_eq!(y.cross(&x), -1.0);
    assert_eq!(x.cross(&(x * 3.0)), 0.0);
  }

  #[test]
  fn norm_and_dot() {
    let v = Vector([3.0, 4.0]);
    assert_eq!(v.norm(), 5.0);
    assert_eq!(v.dot(&Vector([1.0, -1.0])), -1.0);
    assert_eq!(Vector([2, 3]).squared_magnitude(), 13);
  }

  #[test]
  fn norm_far_from_unit_scale() {
    let close = |a: f64, b: f64| ((a - b) / b).abs() < 1e-15;
    assert!(close(Vector([3e200, 4e200]).norm(), 5e200));
    assert!(close(Vector([-3e-200, 4e-200]).norm(), 5e-200));
    assert_eq!(Vector([1e300, 0.0]).norm(), 1e300);
    assert_eq!(Vector([0.0, -1e-320]).norm(), 1e-320);
    assert_eq!(Vector([0.0, 0.0]).norm(), 0.0);
    assert!(Vector([f64::NAN, 1e300]).norm().is_nan());
  }
}
