//! The grid arena: node storage, marker bookkeeping, edit locking and
//! pattern application.

use std::fmt;

use crate::geom::{Point, Range};
use crate::node::{Node, NodeStatus};

/// Cost multiplier applied to weighted cells until a host overrides it.
pub const DEFAULT_WEIGHT_MULTIPLIER: f64 = 4.0;

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors reported by grid editing operations.
///
/// An unreachable end marker is not an error; searches report it through
/// their result instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The change would leave the markers in an invalid state: a second
    /// start or end, or a marker stacked on the cell holding the other one.
    InvalidTransition { pos: Point, to: NodeStatus },
    /// The grid is locked while a visualization plays back.
    Locked,
    /// The position lies outside the grid.
    OutOfBounds(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidTransition { pos, to } => {
                write!(f, "cannot set {pos} to {to}")
            }
            GridError::Locked => write!(f, "grid is locked"),
            GridError::OutOfBounds(pos) => write!(f, "{pos} is out of bounds"),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// The editable grid a visualizer operates on.
///
/// Cells live in a row-major arena of [`Node`]s addressed by `usize`
/// indices; the start and end markers are indices into that arena. Searches
/// borrow the grid immutably and keep all traversal bookkeeping in their own
/// state, so one grid can serve any number of searches in sequence without
/// per-cell resets in between.
#[derive(Debug, Clone)]
pub struct Grid {
    nodes: Vec<Node>,
    width: i32,
    height: i32,
    start: usize,
    end: usize,
    weight_multiplier: f64,
    locked: bool,
}

impl Grid {
    /// Create a `width × height` grid of open cells, with the start marker
    /// at `(width/4, height/2)` and the end marker at `(3·width/4,
    /// height/2)` (floor division).
    ///
    /// # Panics
    ///
    /// Panics if `width < 2` or `height < 1`; smaller grids cannot hold two
    /// distinct markers.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width >= 2 && height >= 1,
            "grid must be at least 2x1, got {width}x{height}"
        );
        let index = |x: i32, y: i32| (y * width + x) as usize;
        let mut nodes = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let mut node = Node::new(Point::new(x, y));
                if y > 0 {
                    node.neighbors[0] = Some(index(x, y - 1));
                }
                if x + 1 < width {
                    node.neighbors[1] = Some(index(x + 1, y));
                }
                if y + 1 < height {
                    node.neighbors[2] = Some(index(x, y + 1));
                }
                if x > 0 {
                    node.neighbors[3] = Some(index(x - 1, y));
                }
                nodes.push(node);
            }
        }
        let start = index(width / 4, height / 2);
        let end = index(3 * width / 4, height / 2);
        nodes[start].status = NodeStatus::Start;
        nodes[end].status = NodeStatus::End;
        Self {
            nodes,
            width,
            height,
            start,
            end,
            weight_multiplier: DEFAULT_WEIGHT_MULTIPLIER,
            locked: false,
        }
    }

    // -----------------------------------------------------------------------
    // Geometry and lookup
    // -----------------------------------------------------------------------

    /// Bounding range `[(0, 0), (width, height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells in the arena. Never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Convert a point to its arena index. `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Convert an arena index back to a point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.width, idx as i32 / self.width)
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The node at `p`, or `None` if out of bounds.
    #[inline]
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// The status at `p`, or `None` if out of bounds.
    #[inline]
    pub fn status(&self, p: Point) -> Option<NodeStatus> {
        self.node(p).map(|n| n.status())
    }

    /// Iterate over the nodes in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    // -----------------------------------------------------------------------
    // Markers
    // -----------------------------------------------------------------------

    /// Arena index of the start marker.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Arena index of the end marker.
    #[inline]
    pub fn end_index(&self) -> usize {
        self.end
    }

    /// Position of the start marker.
    #[inline]
    pub fn start(&self) -> Point {
        self.nodes[self.start].pos
    }

    /// Position of the end marker.
    #[inline]
    pub fn end(&self) -> Point {
        self.nodes[self.end].pos
    }

    // -----------------------------------------------------------------------
    // Traversal costs
    // -----------------------------------------------------------------------

    /// Cost of stepping onto the cell at arena index `i`: the weight
    /// multiplier for weighted cells, 1 for everything else. Walls are
    /// filtered out of traversal before costs are read.
    #[inline]
    pub fn weight(&self, i: usize) -> f64 {
        if self.nodes[i].status == NodeStatus::Weighted {
            self.weight_multiplier
        } else {
            1.0
        }
    }

    /// Whether the cell at arena index `i` is a wall.
    #[inline]
    pub fn is_wall(&self, i: usize) -> bool {
        self.nodes[i].status.is_wall()
    }

    /// Neighbour indices of the cell at arena index `i`, in up, right,
    /// down, left order.
    #[inline]
    pub fn neighbors(&self, i: usize) -> [Option<usize>; 4] {
        self.nodes[i].neighbors
    }

    /// The current cost multiplier for weighted cells.
    #[inline]
    pub fn weight_multiplier(&self) -> f64 {
        self.weight_multiplier
    }

    /// Set the cost multiplier for weighted cells.
    ///
    /// # Panics
    ///
    /// Panics if `multiplier < 1.0`; the relaxation engines assume step
    /// costs of at least 1.
    pub fn set_weight_multiplier(&mut self, multiplier: f64) {
        assert!(
            multiplier >= 1.0,
            "weight multiplier must be >= 1.0, got {multiplier}"
        );
        self.weight_multiplier = multiplier;
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Lock the grid while a visualization plays back. Editing operations
    /// fail with [`GridError::Locked`] until [`Grid::unlock`] or
    /// [`Grid::clear`].
    #[inline]
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Unlock the grid.
    #[inline]
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Whether the grid is locked.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Change the status of the cell at `p`.
    ///
    /// Markers follow a demote-then-promote protocol: demoting the cell
    /// currently holding a marker to a plain status is always allowed,
    /// promoting a cell to `Start`/`End` while another cell still holds
    /// that marker is not, and neither is promoting onto the cell holding
    /// the other marker. Plain statuses overwrite each other freely.
    /// `prev_status` is untouched; only the drag operations use it.
    pub fn set_status(&mut self, p: Point, status: NodeStatus) -> Result<(), GridError> {
        if self.locked {
            return Err(GridError::Locked);
        }
        let Some(i) = self.idx(p) else {
            return Err(GridError::OutOfBounds(p));
        };
        if self.nodes[i].status == status {
            return Ok(());
        }
        match status {
            NodeStatus::Start => {
                if self.nodes[self.start].status == NodeStatus::Start && i != self.start {
                    return Err(GridError::InvalidTransition { pos: p, to: status });
                }
                if i == self.end && self.nodes[self.end].status == NodeStatus::End {
                    return Err(GridError::InvalidTransition { pos: p, to: status });
                }
                self.nodes[i].status = NodeStatus::Start;
                self.start = i;
            }
            NodeStatus::End => {
                if self.nodes[self.end].status == NodeStatus::End && i != self.end {
                    return Err(GridError::InvalidTransition { pos: p, to: status });
                }
                if i == self.start && self.nodes[self.start].status == NodeStatus::Start {
                    return Err(GridError::InvalidTransition { pos: p, to: status });
                }
                self.nodes[i].status = NodeStatus::End;
                self.end = i;
            }
            _ => self.nodes[i].status = status,
        }
        Ok(())
    }

    /// Drag the start marker to `p`.
    ///
    /// The target cell remembers its current status in `prev_status` and
    /// takes the marker; the vacated cell reverts to its own remembered
    /// status. Dropping the marker on the cell it already occupies is a
    /// no-op. Fails on marker cells, out-of-bounds targets and locked
    /// grids.
    pub fn move_start(&mut self, p: Point) -> Result<(), GridError> {
        self.move_marker(p, NodeStatus::Start)
    }

    /// Drag the end marker to `p`. Same semantics as [`Grid::move_start`].
    pub fn move_end(&mut self, p: Point) -> Result<(), GridError> {
        self.move_marker(p, NodeStatus::End)
    }

    fn move_marker(&mut self, p: Point, marker: NodeStatus) -> Result<(), GridError> {
        if self.locked {
            return Err(GridError::Locked);
        }
        let Some(i) = self.idx(p) else {
            return Err(GridError::OutOfBounds(p));
        };
        let old = if marker == NodeStatus::Start {
            self.start
        } else {
            self.end
        };
        if i == old {
            return Ok(());
        }
        if self.nodes[i].status.is_marker() {
            return Err(GridError::InvalidTransition { pos: p, to: marker });
        }
        self.nodes[i].prev_status = self.nodes[i].status;
        self.nodes[i].status = marker;
        // The vacated cell may have been demoted through set_status in the
        // meantime; restore it only if it still holds the marker.
        if self.nodes[old].status == marker {
            self.nodes[old].status = self.nodes[old].prev_status;
            self.nodes[old].prev_status = NodeStatus::Open;
        }
        if marker == NodeStatus::Start {
            self.start = i;
        } else {
            self.end = i;
        }
        Ok(())
    }

    /// Reset every non-marker cell to open, clear all remembered
    /// `prev_status` values and unlock the grid. The markers stay put.
    pub fn clear(&mut self) {
        for node in &mut self.nodes {
            if !node.status.is_marker() {
                node.status = NodeStatus::Open;
            }
            node.prev_status = NodeStatus::Open;
        }
        self.locked = false;
    }

    // -----------------------------------------------------------------------
    // Pattern application
    // -----------------------------------------------------------------------

    /// Place a wall at a generated key. Marker cells and out-of-bounds keys
    /// are skipped silently. Works on a locked grid; the lock blocks user
    /// edits, not playback.
    pub fn apply_wall(&mut self, p: Point) {
        self.apply(p, NodeStatus::Wall);
    }

    /// Place a weighted cell at a generated key. Same skip rules as
    /// [`Grid::apply_wall`].
    pub fn apply_weight(&mut self, p: Point) {
        self.apply(p, NodeStatus::Weighted);
    }

    /// Apply a whole wall key sequence at once.
    pub fn apply_walls(&mut self, keys: &[Point]) {
        for &p in keys {
            self.apply_wall(p);
        }
    }

    /// Apply a whole weight key sequence at once.
    pub fn apply_weights(&mut self, keys: &[Point]) {
        for &p in keys {
            self.apply_weight(p);
        }
    }

    fn apply(&mut self, p: Point, status: NodeStatus) {
        let Some(i) = self.idx(p) else {
            return;
        };
        if self.nodes[i].status.is_marker() {
            return;
        }
        self.nodes[i].status = status;
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

/// Serialized form of a grid. Adjacency is a cache and is rebuilt on
/// deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    statuses: Vec<NodeStatus>,
    prev_statuses: Vec<NodeStatus>,
    start: usize,
    end: usize,
    weight_multiplier: f64,
    locked: bool,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = GridRepr {
            width: self.width,
            height: self.height,
            statuses: self.nodes.iter().map(|n| n.status).collect(),
            prev_statuses: self.nodes.iter().map(|n| n.prev_status).collect(),
            start: self.start,
            end: self.end,
            weight_multiplier: self.weight_multiplier,
            locked: self.locked,
        };
        repr.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let repr = GridRepr::deserialize(deserializer)?;
        if repr.width < 2 || repr.height < 1 {
            return Err(D::Error::custom("grid dimensions out of range"));
        }
        let len = (repr.width * repr.height) as usize;
        if repr.statuses.len() != len || repr.prev_statuses.len() != len {
            return Err(D::Error::custom("status count does not match dimensions"));
        }
        if repr.start >= len || repr.end >= len {
            return Err(D::Error::custom("marker index out of range"));
        }
        let starts = repr
            .statuses
            .iter()
            .filter(|&&s| s == NodeStatus::Start)
            .count();
        let ends = repr
            .statuses
            .iter()
            .filter(|&&s| s == NodeStatus::End)
            .count();
        if starts != 1
            || ends != 1
            || repr.statuses[repr.start] != NodeStatus::Start
            || repr.statuses[repr.end] != NodeStatus::End
        {
            return Err(D::Error::custom("grid must hold exactly one start and one end"));
        }
        if repr.weight_multiplier.is_nan() || repr.weight_multiplier < 1.0 {
            return Err(D::Error::custom("weight multiplier must be >= 1.0"));
        }

        let mut grid = Grid::new(repr.width, repr.height);
        for (node, (&status, &prev)) in grid
            .nodes
            .iter_mut()
            .zip(repr.statuses.iter().zip(&repr.prev_statuses))
        {
            node.status = status;
            node.prev_status = prev;
        }
        grid.start = repr.start;
        grid.end = repr.end;
        grid.weight_multiplier = repr.weight_multiplier;
        grid.locked = repr.locked;
        Ok(grid)
    }
}
