use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// What happens when the sweep line reaches an event.
///
/// At equal x, events are processed in declaration order: pending crossings
/// first so the status is correct at `x`, then entering segments, then
/// vertical segments (which see every segment active at `x`), then leaving
/// segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum EventKind {
  /// Two adjacent segments cross. `lower` was below `upper` when the
  /// crossing was scheduled.
  Crossing { lower: usize, upper: usize },
  /// Left endpoint of a non-vertical segment.
  Left(usize),
  /// A vertical (or zero length) segment.
  Vertical(usize),
  /// Right endpoint of a non-vertical segment.
  Right(usize),
}

impl EventKind {
  fn rank(&self) -> u8 {
    match self {
      EventKind::Crossing { .. } => 0,
      EventKind::Left(_) => 1,
      EventKind::Vertical(_) => 2,
      EventKind::Right(_) => 3,
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub(super) struct Event {
  pub x: f64,
  pub y: f64,
  pub kind: EventKind,
}

impl Event {
  pub fn new(x: f64, y: f64, kind: EventKind) -> Event {
    // Adding zero turns -0.0 into 0.0 so both sort as the same coordinate.
    Event {
      x: x + 0.0,
      y: y + 0.0,
      kind,
    }
  }
}

impl Ord for Event {
  fn cmp(&self, other: &Event) -> Ordering {
    self
      .x
      .total_cmp(&other.x)
      .then_with(|| self.kind.rank().cmp(&other.kind.rank()))
      .then_with(|| self.y.total_cmp(&other.y))
      .then_with(|| self.kind.cmp(&other.kind))
  }
}

impl PartialOrd for Event {
  fn partial_cmp(&self, other: &Event) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl PartialEq for Event {
  fn eq(&self, other: &Event) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Event {}

/// Min-queue of events.
#[derive(Debug, Clone, Default)]
pub(super) struct EventQueue {
  heap: BinaryHeap<Reverse<Event>>,
}

impl EventQueue {
  pub fn push(&mut self, event: Event) {
    self.heap.push(Reverse(event))
  }

  pub fn pop(&mut self) -> Option<Event> {
    self.heap.pop().map(|Reverse(event)| event)
  }

  pub fn len(&self) -> usize {
    self.heap.len()
  }

  pub fn is_empty(&self) -> bool {
    self.heap.is_empty()
  }
}
