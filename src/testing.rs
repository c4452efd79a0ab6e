// Strategies for:
//  * points
//  * line segments
// Coordinates are drawn from a continuous range so that degenerate
// configurations (shared x-coordinates, three segments through one point)
// practically never happen. `grid_*` strategies generate them on purpose and
// `scaled_grid_*` move them far from unit scale, where most of the scaled
// coordinates are rounded.
use crate::data::{LineSegment, Point};

use core::ops::Range;
use proptest::collection::*;
use proptest::prelude::*;

const SPAN: f64 = 100.0;

///////////////////////////////////////////////////////////////////////////////
// Points

pub fn any_point() -> impl Strategy<Value = Point<f64>> {
  prop::array::uniform2(-SPAN..SPAN).prop_map(Point::new)
}

pub fn points(size: Range<usize>) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(any_point(), size)
}

// Small integer coordinates. Produces duplicate points, shared x and shared y
// coordinates.
pub fn grid_point() -> impl Strategy<Value = Point<f64>> {
  (-4i8..=4, -4i8..=4).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

pub fn grid_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(grid_point(), size)
}

pub fn far_scale() -> impl Strategy<Value = f64> {
  prop::sample::select(vec![1e-200, 1e-12, 1e-6, 0.1, 1e100, 1e200])
}

fn scale_point(pt: Point<f64>, k: f64) -> Point<f64> {
  Point::new([pt.x_coord() * k, pt.y_coord() * k])
}

pub fn scaled_grid_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point<f64>>> {
  (grid_points(size), far_scale())
    .prop_map(|(pts, k)| pts.into_iter().map(|pt| scale_point(pt, k)).collect())
}

///////////////////////////////////////////////////////////////////////////////
// Segments

pub fn any_segment() -> impl Strategy<Value = LineSegment> {
  (any_point(), any_point()).prop_map(LineSegment::from)
}

pub fn segments(size: Range<usize>) -> impl Strategy<Value = Vec<LineSegment>> {
  vec(any_segment(), size)
}

// Short segments with a 1/8 chance of being vertical.
pub fn short_segment() -> impl Strategy<Value = LineSegment> {
  (any_point(), -20.0..20.0f64, -20.0..20.0f64, 0..8u8).prop_map(|(start, dx, dy, vertical)| {
    let dx = if vertical == 0 { 0.0 } else { dx };
    let end = Point::new([start.x_coord() + dx, start.y_coord() + dy]);
    LineSegment::new(start, end)
  })
}

pub fn short_segments(size: Range<usize>) -> impl Strategy<Value = Vec<LineSegment>> {
  vec(short_segment(), size)
}

// Segments between grid points. Produces shared endpoints, T-junctions,
// colinear overlaps and many segments through one point.
pub fn grid_segment() -> impl Strategy<Value = LineSegment> {
  (grid_point(), grid_point()).prop_map(LineSegment::from)
}

pub fn grid_segments(size: Range<usize>) -> impl Strategy<Value = Vec<LineSegment>> {
  vec(grid_segment(), size)
}

pub fn scaled_grid_segments(size: Range<usize>) -> impl Strategy<Value = Vec<LineSegment>> {
  (grid_segments(size), far_scale()).prop_map(|(segments, k)| {
    segments
      .into_iter()
      .map(|s| LineSegment::new(scale_point(s.start, k), scale_point(s.end, k)))
      .collect()
  })
}
