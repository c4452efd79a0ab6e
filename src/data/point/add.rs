use array_init::array_init;
use std::ops::Add;
use std::ops::Index;

use super::Point;
use super::Vector;

// &point + &vector = point
impl<'a, 'b, T, const N: usize> Add<&'a Vector<T, N>> for &'b Point<T, N>
where
  T: Add<T, Output = T> + Clone,
{
  type Output = Point<T, N>;

  fn add(self: &'b Point<T, N>, other: &'a Vector<T, N>) -> Self::Output {
    Point {
      array: array_init(|i| self.array.index(i).clone() + other.0.index(i).clone()),
    }
  }
}

// point + vector = point
impl<T, const N: usize> Add<Vector<T, N>> for Point<T, N>
where
  T: Add<T, Output = T> + Clone,
{
  type Output = Point<T, N>;

  fn add(self: Point<T, N>, other: Vector<T, N>) -> Self::Output {
    Add::add(&self, &other)
  }
}
