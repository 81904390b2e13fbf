//! Per-search scratch state shared by the best-first engines.
//!
//! The grid itself carries no traversal bookkeeping; every search owns a
//! [`Frontier`] (or two) holding its cost, predecessor and settled arrays
//! plus the open heap, and drops it with the search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pathvis_core::{Grid, Point};

/// Sentinel predecessor for seeds and unreached cells.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Entry in the open heap: an arena index and the priority it was pushed
/// with. A cell is re-pushed whenever its cost improves; entries that no
/// longer match an unsettled cell are dropped on pop (lazy deletion).
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) prio: f64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.idx == other.idx && self.prio.total_cmp(&other.prio) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first.
        other.prio.total_cmp(&self.prio)
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One search frontier.
pub(crate) struct Frontier {
    /// Best known cost from the seed, `+∞` until first relaxed.
    pub(crate) dist: Vec<f64>,
    /// Predecessor on the best known walk, [`NO_PARENT`] until relaxed.
    pub(crate) parent: Vec<usize>,
    /// Cells already settled; their entries in the heap are stale.
    pub(crate) visited: Vec<bool>,
    pub(crate) open: BinaryHeap<OpenEntry>,
}

impl Frontier {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            dist: vec![f64::INFINITY; len],
            parent: vec![NO_PARENT; len],
            visited: vec![false; len],
            open: BinaryHeap::new(),
        }
    }

    /// Seed the frontier at `idx` with zero cost and the given priority.
    pub(crate) fn seed(&mut self, idx: usize, prio: f64) {
        self.dist[idx] = 0.0;
        self.open.push(OpenEntry { idx, prio });
    }

    /// Priority of the best unsettled entry, dropping stale tops.
    pub(crate) fn peek_priority(&mut self) -> Option<f64> {
        while let Some(top) = self.open.peek() {
            if !self.visited[top.idx] {
                return Some(top.prio);
            }
            self.open.pop();
        }
        None
    }

    /// Pop the best unsettled entry.
    pub(crate) fn pop_next(&mut self) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            if !self.visited[entry.idx] {
                return Some(entry.idx);
            }
        }
        None
    }
}

/// Walk the predecessor chain from `end` back to `start` and return the
/// intermediate cells in walking order. Both markers are excluded. Callers
/// only reconstruct once the end has been settled, so the chain is intact.
pub(crate) fn reconstruct(grid: &Grid, parent: &[usize], start: usize, end: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = end;
    while cur != start {
        if cur != end {
            path.push(grid.point(cur));
        }
        cur = parent[cur];
    }
    path.reverse();
    path
}
