//! Grid cells: [`Node`] and its [`NodeStatus`].

use std::fmt;

use crate::geom::Point;

/// The role a cell currently plays on the grid.
///
/// `Start` and `End` are the search markers. At any time exactly one cell
/// holds each marker; [`crate::Grid`] enforces this.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeStatus {
    /// Freely traversable at unit cost.
    #[default]
    Open,
    /// The search origin marker.
    Start,
    /// The search target marker.
    End,
    /// Impassable.
    Wall,
    /// Traversable at the grid's weight multiplier.
    Weighted,
}

impl NodeStatus {
    /// Whether searches treat this cell as impassable.
    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, NodeStatus::Wall)
    }

    /// Whether this is the start or end marker.
    #[inline]
    pub const fn is_marker(self) -> bool {
        matches!(self, NodeStatus::Start | NodeStatus::End)
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeStatus::Open => "open",
            NodeStatus::Start => "start",
            NodeStatus::End => "end",
            NodeStatus::Wall => "wall",
            NodeStatus::Weighted => "weighted",
        };
        f.write_str(s)
    }
}

/// A single grid cell.
///
/// Nodes live in the grid's arena and are addressed by index. Each node
/// remembers its position, its current status, the status it had before a
/// marker was dragged onto it, and the arena indices of its four cardinal
/// neighbours (`None` at the grid edge).
#[derive(Copy, Clone, Debug)]
pub struct Node {
    pub(crate) pos: Point,
    pub(crate) status: NodeStatus,
    pub(crate) prev_status: NodeStatus,
    pub(crate) neighbors: [Option<usize>; 4],
}

impl Node {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            status: NodeStatus::Open,
            prev_status: NodeStatus::Open,
            neighbors: [None; 4],
        }
    }

    /// Position of this cell on the grid.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    /// Current status.
    #[inline]
    pub const fn status(&self) -> NodeStatus {
        self.status
    }

    /// Status this cell had before a marker was dragged onto it. Restored
    /// when the marker moves away again.
    #[inline]
    pub const fn prev_status(&self) -> NodeStatus {
        self.prev_status
    }

    /// Arena indices of the four cardinal neighbours, in up, right, down,
    /// left order. `None` where the cell sits on the grid edge.
    #[inline]
    pub const fn neighbors(&self) -> [Option<usize>; 4] {
        self.neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_predicates() {
        assert!(NodeStatus::Wall.is_wall());
        assert!(!NodeStatus::Weighted.is_wall());
        assert!(NodeStatus::Start.is_marker());
        assert!(NodeStatus::End.is_marker());
        assert!(!NodeStatus::Open.is_marker());
    }

    #[test]
    fn default_status_is_open() {
        assert_eq!(NodeStatus::default(), NodeStatus::Open);
        let n = Node::new(Point::new(2, 3));
        assert_eq!(n.status(), NodeStatus::Open);
        assert_eq!(n.prev_status(), NodeStatus::Open);
        assert_eq!(n.pos(), Point::new(2, 3));
        assert_eq!(n.neighbors(), [None; 4]);
    }
}
