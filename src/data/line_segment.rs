use std::cmp::Ordering;
use std::ops::Range;
use std::ops::RangeInclusive;

use super::Point;

use crate::tolerance::unit_scale;
use crate::{Intersects, Tolerance};

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// A line segment between two points.
///
/// The endpoints are stored in the order they were given. Sweeps derive the
/// left-to-right orientation on demand with [`LineSegmentView::left`] and
/// [`LineSegmentView::right`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<T = f64> {
  pub start: Point<T>,
  pub end: Point<T>,
}

impl<T> LineSegment<T> {
  pub const fn new(start: Point<T>, end: Point<T>) -> LineSegment<T> {
    LineSegment { start, end }
  }

  pub fn as_ref(&self) -> LineSegmentView<'_, T> {
    LineSegmentView {
      start: &self.start,
      end: &self.end,
    }
  }
}

impl<T> From<Range<Point<T>>> for LineSegment<T> {
  fn from(range: Range<Point<T>>) -> LineSegment<T> {
    LineSegment::new(range.start, range.end)
  }
}

impl<T> From<Range<(T, T)>> for LineSegment<T> {
  fn from(range: Range<(T, T)>) -> LineSegment<T> {
    LineSegment::new(range.start.into(), range.end.into())
  }
}

impl<T> From<RangeInclusive<Point<T>>> for LineSegment<T> {
  fn from(range: RangeInclusive<Point<T>>) -> LineSegment<T> {
    let (start, end) = range.into_inner();
    LineSegment::new(start, end)
  }
}

impl<T> From<(Point<T>, Point<T>)> for LineSegment<T> {
  fn from((start, end): (Point<T>, Point<T>)) -> LineSegment<T> {
    LineSegment::new(start, end)
  }
}

///////////////////////////////////////////////////////////////////////////////
// LineSegmentView

#[derive(Debug, PartialEq)]
pub struct LineSegmentView<'a, T = f64> {
  pub start: &'a Point<T>,
  pub end: &'a Point<T>,
}

impl<'a, T> Clone for LineSegmentView<'a, T> {
  fn clone(&self) -> Self {
    *self
  }
}
impl<'a, T> Copy for LineSegmentView<'a, T> {}

impl<'a, T> LineSegmentView<'a, T> {
  pub const fn new(start: &'a Point<T>, end: &'a Point<T>) -> LineSegmentView<'a, T> {
    LineSegmentView { start, end }
  }
}

impl<'a> LineSegmentView<'a, f64> {
  fn cmp_endpoints(&self) -> Ordering {
    let [ax, ay] = self.start.array;
    let [bx, by] = self.end.array;
    ax.total_cmp(&bx).then_with(|| ay.total_cmp(&by))
  }

  /// The endpoint with the smaller x-coordinate (smaller y on ties).
  pub fn left(&self) -> &'a Point<f64> {
    match self.cmp_endpoints() {
      Ordering::Greater => self.end,
      _ => self.start,
    }
  }

  /// The endpoint with the larger x-coordinate (larger y on ties).
  pub fn right(&self) -> &'a Point<f64> {
    match self.cmp_endpoints() {
      Ordering::Greater => self.start,
      _ => self.end,
    }
  }

  /// Both endpoints share an x-coordinate. Degenerate (zero length)
  /// segments are vertical.
  pub fn is_vertical(&self) -> bool {
    self.start.x_coord() == self.end.x_coord()
  }

  pub fn is_finite(&self) -> bool {
    self.start.is_finite() && self.end.is_finite()
  }

  /// `dy/dx`, or `None` for vertical segments.
  pub fn slope(&self) -> Option<f64> {
    if self.is_vertical() {
      return None;
    }
    let (l, r) = (self.left(), self.right());
    Some((r.y_coord() - l.y_coord()) / (r.x_coord() - l.x_coord()))
  }

  /// The y-value of the segment's supporting line at `x`.
  ///
  /// Returns the exact endpoint y-coordinate when `x` hits an endpoint and
  /// `None` for vertical segments.
  ///
  /// ```rust
  /// # use planesweep::data::{LineSegment, Point};
  /// let seg = LineSegment::from((0.0, 0.0)..(4.0, 2.0));
  /// assert_eq!(seg.as_ref().interpolate_y(1.0), Some(0.5));
  /// let vertical = LineSegment::from((1.0, 0.0)..(1.0, 2.0));
  /// assert_eq!(vertical.as_ref().interpolate_y(1.0), None);
  /// ```
  pub fn interpolate_y(&self, x: f64) -> Option<f64> {
    if self.is_vertical() {
      return None;
    }
    let (l, r) = (self.left(), self.right());
    let [lx, ly] = l.array;
    let [rx, ry] = r.array;
    if x == lx {
      Some(ly)
    } else if x == rx {
      Some(ry)
    } else {
      Some(ly + (ry - ly) * ((x - lx) / (rx - lx)))
    }
  }

  /// Intersection point of two segments.
  ///
  /// Solves `start + t*(end-start) = other.start + u*(other.end-other.start)`
  /// and accepts the solution if both `t` and `u` lie in `[0, 1]` (within
  /// `tol.parameter`). Returns `None` for parallel, colinear and degenerate
  /// (zero length) segments as well as for crossings outside either segment.
  pub fn intersect_with(
    &self,
    other: &LineSegmentView<'_, f64>,
    tol: &Tolerance,
  ) -> Option<Point<f64>> {
    let r = self.end - self.start;
    let s = other.end - other.start;
    let qp = other.start - self.start;
    // `t` and `u` are ratios of cross products. Solve with the differences
    // rescaled by a power of two so the products stay in range.
    let k = unit_scale(
      r.0
        .iter()
        .chain(s.0.iter())
        .chain(qp.0.iter())
        .fold(0.0, |m: f64, c| m.max(c.abs())),
    )
    .recip();
    let (rk, sk, qpk) = (&r * k, &s * k, &qp * k);
    let denom = rk.cross(&sk);
    if !(denom.abs() > tol.parallel * rk.norm() * sk.norm()) {
      return None;
    }
    let t = qpk.cross(&sk) / denom;
    let u = qpk.cross(&rk) / denom;
    if tol.within_unit(t) && tol.within_unit(u) {
      Some(self.start + &(r * t))
    } else {
      None
    }
  }

  /// Shortest distance between `pt` and any point on the segment.
  pub fn distance_to(&self, pt: &Point<f64>) -> f64 {
    let d = self.end - self.start;
    let len2 = d.squared_magnitude();
    if len2 == 0.0 {
      return self.start.distance(pt);
    }
    let t = ((pt - self.start).dot(&d) / len2).clamp(0.0, 1.0);
    (self.start + &(d * t)).distance(pt)
  }
}

impl<'a, T> From<&'a LineSegment<T>> for LineSegmentView<'a, T> {
  fn from(segment: &'a LineSegment<T>) -> LineSegmentView<'a, T> {
    segment.as_ref()
  }
}

impl<'a, T> From<&'a (Point<T>, Point<T>)> for LineSegmentView<'a, T> {
  fn from(pair: &'a (Point<T>, Point<T>)) -> LineSegmentView<'a, T> {
    LineSegmentView::new(&pair.0, &pair.1)
  }
}

impl<'a, T> From<&'a Range<Point<T>>> for LineSegmentView<'a, T> {
  fn from(range: &'a Range<Point<T>>) -> LineSegmentView<'a, T> {
    LineSegmentView::new(&range.start, &range.end)
  }
}

impl<'a, T> From<&'a RangeInclusive<Point<T>>> for LineSegmentView<'a, T> {
  fn from(range: &'a RangeInclusive<Point<T>>) -> LineSegmentView<'a, T> {
    LineSegmentView::new(range.start(), range.end())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

impl<'a> Intersects for LineSegmentView<'a, f64> {
  type Result = Point<f64>;
  fn intersect(self, other: LineSegmentView<'a, f64>) -> Option<Self::Result> {
    self.intersect_with(&other, &Tolerance::default())
  }
}

impl<'a> Intersects for &'a LineSegment<f64> {
  type Result = Point<f64>;
  fn intersect(self, other: &'a LineSegment<f64>) -> Option<Self::Result> {
    self.as_ref().intersect(other.as_ref())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
