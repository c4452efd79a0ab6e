#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

use crate::tolerance::unit_scale;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign is exact: it is computed with adaptive precision arithmetic
  /// and never suffers from rounding, even for nearly colinear points.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use planesweep::data::Point;
  /// # use planesweep::Orientation;
  /// let p1 = Point::new([ 0.0, 0.0 ]);
  /// let p2 = Point::new([ 0.0, 1.0 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0.0, 2.0 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1.0, 2.0 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1.0, 2.0 ])).is_cw());
  /// ```
  pub fn new(p1: &[f64; 2], p2: &[f64; 2], p3: &[f64; 2]) -> Orientation {
    let det = Orientation::side_of_line(p1, p2, p3);
    if det > 0.0 {
      CounterClockWise
    } else if det < 0.0 {
      ClockWise
    } else {
      CoLinear
    }
  }

  /// Signed area of the parallelogram spanned by `b - a` and `p - a`.
  ///
  /// Positive if `p` lies to the left of the directed line `a -> b`, negative
  /// if it lies to the right and zero if the three points are colinear. The
  /// sign is exact for any finite input, the magnitude is an approximation.
  pub fn side_of_line(a: &[f64; 2], b: &[f64; 2], p: &[f64; 2]) -> f64 {
    // The predicate's exact arithmetic needs products of coordinates to stay
    // within range. Rescaling by a power of two keeps the sign.
    let k = unit_scale(
      a.iter()
        .chain(b.iter())
        .chain(p.iter())
        .fold(0.0, |m: f64, c| m.max(c.abs())),
    );
    let shrink = |q: &[f64; 2]| [q[0] / k, q[1] / k];
    geometry_predicates::predicates::orient2d(shrink(a), shrink(b), shrink(p)) * k * k
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
