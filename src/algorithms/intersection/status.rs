// Sweep status: the active segments ordered bottom to top.
//
// A treap stored in an arena. Nodes refer to each other by index and keep a
// parent link so that neighbours can be found from a segment's node without a
// search from the root. `handles` maps a segment id to its node.
use std::cmp::Ordering;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

type NodeId = usize;

const SEED: u64 = 0x5eed_5a3e;

#[derive(Debug, Clone)]
struct Node {
  segment: usize,
  priority: u32,
  parent: Option<NodeId>,
  left: Option<NodeId>,
  right: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub(super) struct Status {
  nodes: Vec<Node>,
  free: Vec<NodeId>,
  root: Option<NodeId>,
  handles: Vec<Option<NodeId>>,
  rng: SmallRng,
  len: usize,
}

impl Status {
  /// Empty status for segment ids in `0..segments`.
  pub fn new(segments: usize) -> Status {
    Status {
      nodes: Vec::with_capacity(segments),
      free: Vec::new(),
      root: None,
      handles: vec![None; segments],
      rng: SmallRng::seed_from_u64(SEED),
      len: 0,
    }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn contains(&self, segment: usize) -> bool {
    self.handle(segment).is_some()
  }

  fn handle(&self, segment: usize) -> Option<NodeId> {
    self.handles.get(segment).copied().flatten()
  }

  /// Insert `segment`. `cmp(other)` orders the new segment relative to an
  /// already active one: `Less` means below.
  ///
  /// Inserting a segment twice is a no-op.
  pub fn insert<F>(&mut self, segment: usize, mut cmp: F)
  where
    F: FnMut(usize) -> Ordering,
  {
    if self.contains(segment) {
      return;
    }
    let mut parent = None;
    let mut go_left = false;
    let mut cursor = self.root;
    while let Some(id) = cursor {
      parent = Some(id);
      go_left = cmp(self.nodes[id].segment) == Ordering::Less;
      cursor = if go_left {
        self.nodes[id].left
      } else {
        self.nodes[id].right
      };
    }

    let id = self.alloc(segment, parent);
    match parent {
      None => self.root = Some(id),
      Some(p) if go_left => self.nodes[p].left = Some(id),
      Some(p) => self.nodes[p].right = Some(id),
    }
    while let Some(p) = self.nodes[id].parent {
      if self.nodes[p].priority >= self.nodes[id].priority {
        break;
      }
      self.rotate_up(id);
    }
    self.handles[segment] = Some(id);
    self.len += 1;
  }

  /// Remove `segment` and return its former `(below, above)` neighbours.
  /// `None` if the segment was not active.
  pub fn remove(&mut self, segment: usize) -> Option<(Option<usize>, Option<usize>)> {
    let id = self.handle(segment)?;
    let neighbours = (self.below(segment), self.above(segment));

    // Rotate the node down until it is a leaf, then cut it off.
    loop {
      let node = &self.nodes[id];
      let child = match (node.left, node.right) {
        (None, None) => break,
        (Some(c), None) | (None, Some(c)) => c,
        (Some(l), Some(r)) => {
          if self.nodes[l].priority > self.nodes[r].priority {
            l
          } else {
            r
          }
        }
      };
      self.rotate_up(child);
    }
    let parent = self.nodes[id].parent;
    self.replace_child(parent, id, None);
    self.nodes[id].parent = None;
    self.free.push(id);
    self.handles[segment] = None;
    self.len -= 1;
    Some(neighbours)
  }

  /// The active segment directly below `segment`.
  pub fn below(&self, segment: usize) -> Option<usize> {
    let id = self.handle(segment)?;
    self.predecessor(id).map(|n| self.nodes[n].segment)
  }

  /// The active segment directly above `segment`.
  pub fn above(&self, segment: usize) -> Option<usize> {
    let id = self.handle(segment)?;
    self.successor(id).map(|n| self.nodes[n].segment)
  }

  /// The lowest active segment for which `is_below` returns false.
  ///
  /// `is_below` must be monotone over the status order: true for a (possibly
  /// empty) prefix and false afterwards.
  pub fn lower_bound<F>(&self, mut is_below: F) -> Option<usize>
  where
    F: FnMut(usize) -> bool,
  {
    let mut found = None;
    let mut cursor = self.root;
    while let Some(id) = cursor {
      let node = &self.nodes[id];
      if is_below(node.segment) {
        cursor = node.right;
      } else {
        found = Some(node.segment);
        cursor = node.left;
      }
    }
    found
  }

  /// Rearrange a contiguous run of active segments.
  ///
  /// `run` lists the segments in their current bottom to top order and
  /// `order` lists the same segments in the desired order. The tree shape is
  /// untouched; nodes simply trade segments.
  pub fn reorder(&mut self, run: &[usize], order: &[usize]) {
    debug_assert_eq!(run.len(), order.len());
    let ids: Vec<Option<NodeId>> = run.iter().map(|&s| self.handle(s)).collect();
    for (id, &segment) in ids.into_iter().zip(order) {
      if let Some(id) = id {
        self.nodes[id].segment = segment;
        self.handles[segment] = Some(id);
      }
    }
  }

  /// Active segments from bottom to top.
  pub fn iter(&self) -> Iter<'_> {
    Iter {
      status: self,
      next: self.root.map(|r| self.leftmost(r)),
    }
  }

  ///////////////////////////////////////////////////////////////////////////
  // Tree plumbing

  fn alloc(&mut self, segment: usize, parent: Option<NodeId>) -> NodeId {
    let node = Node {
      segment,
      priority: self.rng.gen(),
      parent,
      left: None,
      right: None,
    };
    match self.free.pop() {
      Some(id) => {
        self.nodes[id] = node;
        id
      }
      None => {
        self.nodes.push(node);
        self.nodes.len() - 1
      }
    }
  }

  fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
    match parent {
      None => self.root = new,
      Some(p) => {
        if self.nodes[p].left == Some(old) {
          self.nodes[p].left = new;
        } else {
          self.nodes[p].right = new;
        }
      }
    }
  }

  // Lift `id` above its parent while keeping the in-order sequence.
  fn rotate_up(&mut self, id: NodeId) {
    let parent = match self.nodes[id].parent {
      Some(p) => p,
      None => return,
    };
    let grandparent = self.nodes[parent].parent;
    if self.nodes[parent].left == Some(id) {
      let inner = self.nodes[id].right;
      self.nodes[parent].left = inner;
      self.nodes[id].right = Some(parent);
      if let Some(c) = inner {
        self.nodes[c].parent = Some(parent);
      }
    } else {
      let inner = self.nodes[id].left;
      self.nodes[parent].right = inner;
      self.nodes[id].left = Some(parent);
      if let Some(c) = inner {
        self.nodes[c].parent = Some(parent);
      }
    }
    self.nodes[parent].parent = Some(id);
    self.nodes[id].parent = grandparent;
    self.replace_child(grandparent, parent, Some(id));
  }

  fn leftmost(&self, mut id: NodeId) -> NodeId {
    while let Some(l) = self.nodes[id].left {
      id = l;
    }
    id
  }

  fn rightmost(&self, mut id: NodeId) -> NodeId {
    while let Some(r) = self.nodes[id].right {
      id = r;
    }
    id
  }

  fn predecessor(&self, id: NodeId) -> Option<NodeId> {
    if let Some(l) = self.nodes[id].left {
      return Some(self.rightmost(l));
    }
    let mut child = id;
    let mut parent = self.nodes[id].parent;
    while let Some(p) = parent {
      if self.nodes[p].right == Some(child) {
        return Some(p);
      }
      child = p;
      parent = self.nodes[p].parent;
    }
    None
  }

  fn successor(&self, id: NodeId) -> Option<NodeId> {
    if let Some(r) = self.nodes[id].right {
      return Some(self.leftmost(r));
    }
    let mut child = id;
    let mut parent = self.nodes[id].parent;
    while let Some(p) = parent {
      if self.nodes[p].left == Some(child) {
        return Some(p);
      }
      child = p;
      parent = self.nodes[p].parent;
    }
    None
  }
}

pub(super) struct Iter<'a> {
  status: &'a Status,
  next: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
  type Item = usize;
  fn next(&mut self) -> Option<usize> {
    let id = self.next?;
    self.next = self.status.successor(id);
    Some(self.status.nodes[id].segment)
  }
}
