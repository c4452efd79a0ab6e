//! Bentley–Ottmann sweep-line intersection detection.
//!
//! The sweep line advances from left to right across an event queue seeded
//! with the segment endpoints and enriched with crossings as they are
//! discovered. A balanced search tree keeps the active segments in their
//! vertical order, so every structural update costs logarithmic time.
//!
//! # High-level workflow
//! 1. **Event queue** – A binary heap ordered by x, then event kind (crossing,
//!    left endpoint, vertical segment, right endpoint), then y.
//! 2. **Status structure** – A treap of the segments that currently cross the
//!    sweep line, bottom to top. Entering segments are placed with exact
//!    orientation tests against the lines of the active segments.
//! 3. **Processing** – Entering and leaving segments are inserted or removed
//!    and their neighbours tested. A pair of neighbours whose order flips to
//!    the right of the sweep line gets a crossing event; any other touching
//!    pair is reported right away.
//! 4. **Crossings** – At a crossing, the block of segments passing through the
//!    crossing point is re-sorted by slope, which is their order just right of
//!    the point. Every pair inside the block is reported.
//! 5. **Vertical segments** – These never enter the status. A range query on
//!    the status at their x-coordinate finds every candidate.
//!
//! Every unordered pair is reported at most once and every point comes from
//! [`LineSegmentView::intersect_with`], exactly as in the quadratic baseline.
//! Colinear overlaps have no single intersection point and are skipped by both.
//!
//! The algorithm runs in $O((n + k) \log n)$ expected time where `n` is the
//! number of segments and `k` the number of intersections.
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use tracing::{debug, trace, warn};

use super::events::{Event, EventKind, EventQueue};
use super::status::Status;
use super::{pair_key, views, Intersection, PairKey};
use crate::data::{LineSegmentView, Point};
use crate::{Error, Orientation, Tolerance};

/// Find all line segment intersections using a Bentley–Ottmann sweep.
///
/// Returns `(i, j, point)` triples with `i < j`, sorted by `(i, j)`.
///
/// # Errors
/// [`Error::NoSegments`] for an empty slice and
/// [`Error::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
///
/// # Examples
///
/// ```rust
/// # use planesweep::algorithms::segment_intersections;
/// # use planesweep::data::{LineSegment, Point};
/// let segments = vec![
///   LineSegment::from((0.0, 0.0)..(2.0, 2.0)),
///   LineSegment::from((0.0, 2.0)..(2.0, 0.0)),
///   LineSegment::from((3.0, 0.0)..(3.0, 1.0)),
/// ];
/// let found = segment_intersections(&segments).unwrap();
/// assert_eq!(found, vec![(0, 1, Point::new([1.0, 1.0]))]);
/// ```
pub fn segment_intersections<'a, Edge>(edges: &'a [Edge]) -> Result<Vec<Intersection>, Error>
where
  &'a Edge: Into<LineSegmentView<'a, f64>>,
{
  segment_intersections_with(edges, Tolerance::default())
}

/// Like [`segment_intersections`] with explicit numerical thresholds.
pub fn segment_intersections_with<'a, Edge>(
  edges: &'a [Edge],
  tol: Tolerance,
) -> Result<Vec<Intersection>, Error>
where
  &'a Edge: Into<LineSegmentView<'a, f64>>,
{
  Ok(BentleyOttmann::with_tolerance(edges, tol)?.finish())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  /// No event has been processed yet.
  Idle,
  Processing,
  /// The event queue is exhausted.
  Done,
}

///////////////////////////////////////////////////////////////////////////////
// Segments and the sweep line

#[derive(Debug)]
struct Segment<'a> {
  index: usize,
  view: LineSegmentView<'a, f64>,
  left: &'a Point<f64>,
  right: &'a Point<f64>,
}

impl<'a> Segment<'a> {
  fn new(index: usize, view: LineSegmentView<'a, f64>) -> Segment<'a> {
    Segment {
      index,
      view,
      left: view.left(),
      right: view.right(),
    }
  }

  // Sweep key. Vertical segments never enter the status.
  fn y_at(&self, x: f64) -> f64 {
    self
      .view
      .interpolate_y(x)
      .unwrap_or_else(|| *self.left.y_coord())
  }

  fn slope(&self) -> f64 {
    self.view.slope().unwrap_or(f64::INFINITY)
  }

  fn line_contains(&self, pt: &Point<f64>) -> bool {
    Orientation::new(self.left, self.right, pt).is_colinear()
  }
}

/// Position of the sweep line and the thresholds used to compare segment
/// keys there. Keys are compared relative to `extent`, the largest absolute
/// coordinate of the input.
#[derive(Debug, Clone, Copy)]
struct SweepLine {
  x: f64,
  extent: f64,
  tol: Tolerance,
}

impl SweepLine {
  // Numeric order just right of the sweep line. Only used when the exact
  // bookkeeping has lost track of a crossing.
  fn compare(&self, a: &Segment<'_>, b: &Segment<'_>) -> Ordering {
    let (ya, yb) = (a.y_at(self.x), b.y_at(self.x));
    if self.tol.keys_coincide(ya, yb, self.extent) {
      a.slope()
        .total_cmp(&b.slope())
        .then_with(|| a.index.cmp(&b.index))
    } else {
      ya.total_cmp(&yb)
    }
  }

  fn meets(&self, segment: &Segment<'_>, y: f64) -> bool {
    self.tol.keys_coincide(segment.y_at(self.x), y, self.extent)
  }

  fn slack(&self, lo: f64, hi: f64) -> f64 {
    self.tol.coincident * self.extent.max(lo.abs()).max(hi.abs())
  }
}

// Order of a segment entering at its left endpoint relative to an active
// segment. Exact: both tests only involve input coordinates.
fn compare_entering(entering: &Segment<'_>, active: &Segment<'_>) -> Ordering {
  let side = |pt: &Point<f64>| match Orientation::new(active.left, active.right, pt) {
    Orientation::CounterClockWise => Some(Ordering::Greater),
    Orientation::ClockWise => Some(Ordering::Less),
    Orientation::CoLinear => None,
  };
  side(entering.left)
    .or_else(|| side(entering.right))
    .unwrap_or_else(|| entering.index.cmp(&active.index))
}

// `lower` ends strictly above `upper`, so the pair has to swap somewhere
// right of the sweep line.
fn crosses_ahead(lower: &Segment<'_>, upper: &Segment<'_>) -> bool {
  if lower.right.x_coord() <= upper.right.x_coord() {
    Orientation::new(upper.left, upper.right, lower.right).is_ccw()
  } else {
    Orientation::new(lower.left, lower.right, upper.right).is_cw()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Driver

/// A Bentley–Ottmann sweep that can be advanced one event at a time.
///
/// ```rust
/// # use planesweep::algorithms::intersection::bentley_ottmann::{BentleyOttmann, Phase};
/// # use planesweep::data::LineSegment;
/// let segments = vec![
///   LineSegment::from((0.0, 0.0)..(4.0, 4.0)),
///   LineSegment::from((0.0, 4.0)..(4.0, 0.0)),
/// ];
/// let mut sweep = BentleyOttmann::new(&segments).unwrap();
/// assert_eq!(sweep.phase(), Phase::Idle);
/// while sweep.step() {
///   assert!(sweep.sweep_x().is_some());
/// }
/// assert_eq!(sweep.phase(), Phase::Done);
/// assert_eq!(sweep.intersections().len(), 1);
/// ```
#[derive(Debug)]
pub struct BentleyOttmann<'a> {
  segments: Vec<Segment<'a>>,
  queue: EventQueue,
  status: Status,
  sweep: SweepLine,
  phase: Phase,
  // Crossings waiting in the queue, with their intersection points.
  pending: HashMap<PairKey, Point<f64>>,
  // Each pair gets at most one crossing event.
  scheduled: HashSet<PairKey>,
  reported: HashSet<PairKey>,
  results: Vec<Intersection>,
  processed: usize,
  repairs: usize,
}

impl<'a> BentleyOttmann<'a> {
  pub fn new<Edge>(edges: &'a [Edge]) -> Result<BentleyOttmann<'a>, Error>
  where
    &'a Edge: Into<LineSegmentView<'a, f64>>,
  {
    BentleyOttmann::with_tolerance(edges, Tolerance::default())
  }

  pub fn with_tolerance<Edge>(
    edges: &'a [Edge],
    tol: Tolerance,
  ) -> Result<BentleyOttmann<'a>, Error>
  where
    &'a Edge: Into<LineSegmentView<'a, f64>>,
  {
    let segments: Vec<Segment<'a>> = views(edges)?
      .into_iter()
      .enumerate()
      .map(|(index, view)| Segment::new(index, view))
      .collect();
    let extent = segments
      .iter()
      .flat_map(|segment| segment.left.array.iter().chain(segment.right.array.iter()))
      .fold(0.0, |m: f64, c| m.max(c.abs()));

    let mut queue = EventQueue::default();
    for segment in &segments {
      let [lx, ly] = segment.left.array;
      if segment.view.is_vertical() {
        queue.push(Event::new(lx, ly, EventKind::Vertical(segment.index)));
      } else {
        let [rx, ry] = segment.right.array;
        queue.push(Event::new(lx, ly, EventKind::Left(segment.index)));
        queue.push(Event::new(rx, ry, EventKind::Right(segment.index)));
      }
    }

    Ok(BentleyOttmann {
      status: Status::new(segments.len()),
      segments,
      queue,
      sweep: SweepLine {
        x: f64::NEG_INFINITY,
        extent,
        tol,
      },
      phase: Phase::Idle,
      pending: HashMap::new(),
      scheduled: HashSet::new(),
      reported: HashSet::new(),
      results: Vec::new(),
      processed: 0,
      repairs: 0,
    })
  }

  pub fn phase(&self) -> Phase {
    self.phase
  }

  /// x-coordinate of the last processed event.
  pub fn sweep_x(&self) -> Option<f64> {
    match self.phase {
      Phase::Idle => None,
      _ => Some(self.sweep.x),
    }
  }

  /// Intersections found so far, in discovery order.
  pub fn intersections(&self) -> &[Intersection] {
    &self.results
  }

  /// Indices of the segments crossing the sweep line, bottom to top.
  pub fn active(&self) -> impl Iterator<Item = usize> + '_ {
    self.status.iter()
  }

  /// Process the next event. Returns `false` once the queue is exhausted.
  pub fn step(&mut self) -> bool {
    let event = match self.queue.pop() {
      Some(event) => event,
      None => {
        self.phase = Phase::Done;
        return false;
      }
    };
    self.phase = Phase::Processing;
    self.sweep.x = event.x;
    self.processed += 1;
    trace!(
      x = event.x,
      y = event.y,
      kind = ?event.kind,
      active = self.status.len(),
      queued = self.queue.len(),
      "event"
    );

    match event.kind {
      EventKind::Crossing { lower, upper } => self.cross(lower, upper, event.y),
      EventKind::Left(s) => self.enter(s),
      EventKind::Vertical(s) => self.vertical(s),
      EventKind::Right(s) => self.leave(s),
    }

    if self.queue.is_empty() {
      self.phase = Phase::Done;
    }
    true
  }

  /// Run the sweep to completion and return the intersections sorted by
  /// segment indices.
  pub fn finish(mut self) -> Vec<Intersection> {
    while self.step() {}
    debug_assert!(self.status.is_empty());
    debug!(
      segments = self.segments.len(),
      events = self.processed,
      intersections = self.results.len(),
      repairs = self.repairs,
      "segment sweep finished"
    );
    let mut results = self.results;
    results.sort_by_key(|&(i, j, _)| (i, j));
    results
  }

  ///////////////////////////////////////////////////////////////////////////
  // Event handlers

  fn enter(&mut self, s: usize) {
    let segments = &self.segments;
    let entering = &segments[s];
    self
      .status
      .insert(s, |other| compare_entering(entering, &segments[other]));
    let endpoint = self.segments[s].left;
    self.touching(s, endpoint);
    if let Some(below) = self.status.below(s) {
      self.check(below, s);
    }
    if let Some(above) = self.status.above(s) {
      self.check(s, above);
    }
  }

  fn leave(&mut self, s: usize) {
    let endpoint = self.segments[s].right;
    self.touching(s, endpoint);
    if let Some((Some(below), Some(above))) = self.status.remove(s) {
      self.check(below, above);
    }
  }

  fn vertical(&mut self, v: usize) {
    let x = self.sweep.x;
    let lo = *self.segments[v].left.y_coord();
    let hi = *self.segments[v].right.y_coord();
    let slack = self.sweep.slack(lo, hi);

    let segments = &self.segments;
    let mut hits = Vec::new();
    let mut cursor = self.status.lower_bound(|s| segments[s].y_at(x) < lo - slack);
    while let Some(s) = cursor {
      if segments[s].y_at(x) > hi + slack {
        break;
      }
      hits.push(s);
      cursor = self.status.above(s);
    }
    for s in hits {
      self.report_if_intersecting(s, v);
    }
  }

  fn cross(&mut self, lower: usize, upper: usize, y: f64) {
    let key = pair_key(lower, upper);
    if let Some(point) = self.pending.remove(&key) {
      self.report(key, point);
    }
    if !(self.status.contains(lower) && self.status.contains(upper)) {
      return;
    }

    let run = self.run_through(lower, y);
    if !run.contains(&upper) {
      self.repair(lower, upper);
      return;
    }

    // Just right of the crossing point the block is ordered by slope.
    let mut order = run.clone();
    let segments = &self.segments;
    order.sort_by(|&a, &b| {
      segments[a]
        .slope()
        .total_cmp(&segments[b].slope())
        .then_with(|| a.cmp(&b))
    });
    self.status.reorder(&run, &order);

    for (k, &a) in order.iter().enumerate() {
      for &b in &order[k + 1..] {
        self.report_if_intersecting(a, b);
      }
    }
    if let (Some(&first), Some(&last)) = (order.first(), order.last()) {
      if let Some(below) = self.status.below(first) {
        self.check(below, first);
      }
      if let Some(above) = self.status.above(last) {
        self.check(last, above);
      }
    }
  }

  ///////////////////////////////////////////////////////////////////////////
  // Helpers

  // The contiguous block of active segments around `s` whose key at the sweep
  // line coincides with `y`, bottom to top.
  fn run_through(&self, s: usize, y: f64) -> Vec<usize> {
    let mut run = vec![s];
    let mut cursor = self.status.below(s);
    while let Some(n) = cursor {
      if !self.sweep.meets(&self.segments[n], y) {
        break;
      }
      run.push(n);
      cursor = self.status.below(n);
    }
    run.reverse();
    cursor = self.status.above(s);
    while let Some(n) = cursor {
      if !self.sweep.meets(&self.segments[n], y) {
        break;
      }
      run.push(n);
      cursor = self.status.above(n);
    }
    run
  }

  // Report `s` against the neighbours that pass through `endpoint`, one of
  // the endpoints of `s`. At the sweep line those neighbours sit next to `s`
  // in a contiguous block. Rounded inputs put an endpoint next to, rather
  // than on, a line, so keys that coincide at the endpoint count too.
  fn touching(&mut self, s: usize, endpoint: &Point<f64>) {
    let y = *endpoint.y_coord();
    for &upward in &[false, true] {
      let mut cursor = self.neighbour(s, upward);
      while let Some(n) = cursor {
        let segment = &self.segments[n];
        if !(segment.line_contains(endpoint) || self.sweep.meets(segment, y)) {
          break;
        }
        self.report_if_intersecting(s, n);
        cursor = self.neighbour(n, upward);
      }
    }
  }

  fn neighbour(&self, s: usize, upward: bool) -> Option<usize> {
    if upward {
      self.status.above(s)
    } else {
      self.status.below(s)
    }
  }

  // Test a pair that just became adjacent, `lower` directly below `upper`.
  fn check(&mut self, lower: usize, upper: usize) {
    let key = pair_key(lower, upper);
    if self.pending.contains_key(&key) {
      return;
    }
    let point = match self.intersect(key) {
      Some(point) => point,
      None => return,
    };
    if crosses_ahead(&self.segments[lower], &self.segments[upper]) {
      if !self.scheduled.insert(key) {
        return;
      }
      let x = point.x_coord().max(self.sweep.x);
      trace!(lower, upper, x, "crossing scheduled");
      self.pending.insert(key, point);
      self
        .queue
        .push(Event::new(x, *point.y_coord(), EventKind::Crossing { lower, upper }));
    } else {
      self.report(key, point);
    }
  }

  // Fallback for a crossing whose segments are no longer neighbours: take both
  // out and put them back by their numeric keys.
  fn repair(&mut self, a: usize, b: usize) {
    warn!(
      x = self.sweep.x,
      a, b, "crossing segments are not adjacent, reinserting"
    );
    self.repairs += 1;
    for &s in &[a, b] {
      self.status.remove(s);
    }
    for &s in &[a, b] {
      let segments = &self.segments;
      let sweep = &self.sweep;
      self
        .status
        .insert(s, |other| sweep.compare(&segments[s], &segments[other]));
    }
    for &s in &[a, b] {
      if let Some(below) = self.status.below(s) {
        self.check(below, s);
      }
      if let Some(above) = self.status.above(s) {
        self.check(s, above);
      }
    }
  }

  fn intersect(&self, (i, j): PairKey) -> Option<Point<f64>> {
    self.segments[i]
      .view
      .intersect_with(&self.segments[j].view, &self.sweep.tol)
  }

  fn report_if_intersecting(&mut self, a: usize, b: usize) {
    let key = pair_key(a, b);
    if self.reported.contains(&key) {
      return;
    }
    if let Some(point) = self.intersect(key) {
      self.report(key, point);
    }
  }

  fn report(&mut self, key: PairKey, point: Point<f64>) {
    if self.reported.insert(key) {
      trace!(
        a = key.0,
        b = key.1,
        x = point.x_coord(),
        y = point.y_coord(),
        "intersection"
      );
      self.results.push((key.0, key.1, point));
    }
  }
}
