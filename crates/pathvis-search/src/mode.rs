//! Search mode selection and dispatch.

use std::fmt;

use pathvis_core::Grid;

use crate::result::SearchResult;
use crate::uniform::{self, PriorityRule};
use crate::{bfs, bidirectional, dfs, heuristic};

/// The search algorithms the visualizer offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Uniform-cost search; always finds a cheapest walk.
    Dijkstra,
    /// A* with Euclidean distance inflated by 1.1.
    AStarEuclidean,
    /// A* with squared Euclidean distance; very focused, very greedy.
    AStarSquared,
    /// A* with Manhattan distance inflated by 1.001.
    AStarManhattan,
    /// A* drawn toward both markers at once.
    Swarm,
    /// [`Mode::Swarm`] with the pull turned up to 6.001.
    ConvergentSwarm,
    /// Best-first on the estimate alone; travelled cost is ignored.
    Greedy,
    /// Breadth-first search; fewest hops, weights ignored.
    Bfs,
    /// Depth-first search; first walk found, rarely a short one.
    Dfs,
    /// Dijkstra from both markers, meeting in the middle.
    BidirectionalDijkstra,
    /// The swarm estimate from both markers, meeting in the middle.
    BidirectionalSwarm,
}

impl Mode {
    /// Every mode, in menu order.
    pub const ALL: [Mode; 11] = [
        Mode::Dijkstra,
        Mode::AStarEuclidean,
        Mode::AStarSquared,
        Mode::AStarManhattan,
        Mode::Swarm,
        Mode::ConvergentSwarm,
        Mode::Greedy,
        Mode::Bfs,
        Mode::Dfs,
        Mode::BidirectionalDijkstra,
        Mode::BidirectionalSwarm,
    ];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mode::Dijkstra => "Dijkstra",
            Mode::AStarEuclidean => "A* (Euclidean)",
            Mode::AStarSquared => "A* (Squared)",
            Mode::AStarManhattan => "A* (Manhattan)",
            Mode::Swarm => "Swarm",
            Mode::ConvergentSwarm => "Convergent Swarm",
            Mode::Greedy => "Greedy",
            Mode::Bfs => "Breadth-First Search",
            Mode::Dfs => "Depth-First Search",
            Mode::BidirectionalDijkstra => "Bidirectional Dijkstra",
            Mode::BidirectionalSwarm => "Bidirectional Swarm",
        };
        f.write_str(label)
    }
}

/// Run one search mode against the grid.
///
/// The grid is only read. Both markers are assumed to be in place, which
/// every grid built through the public [`Grid`] API guarantees.
pub fn run_search(grid: &Grid, mode: Mode) -> SearchResult {
    let start = grid.start();
    let end = grid.end();
    match mode {
        Mode::Dijkstra => {
            uniform::search(grid, heuristic::zero(), PriorityRule::CostPlusHeuristic)
        }
        Mode::AStarEuclidean => uniform::search(
            grid,
            heuristic::euclidean_inflated(end),
            PriorityRule::CostPlusHeuristic,
        ),
        Mode::AStarSquared => uniform::search(
            grid,
            heuristic::euclidean_squared(end),
            PriorityRule::CostPlusHeuristic,
        ),
        Mode::AStarManhattan => uniform::search(
            grid,
            heuristic::manhattan_inflated(end),
            PriorityRule::CostPlusHeuristic,
        ),
        Mode::Swarm => uniform::search(
            grid,
            heuristic::swarm(start, end, 1.001),
            PriorityRule::CostPlusHeuristic,
        ),
        Mode::ConvergentSwarm => uniform::search(
            grid,
            heuristic::swarm(start, end, 6.001),
            PriorityRule::CostPlusHeuristic,
        ),
        Mode::Greedy => uniform::search(
            grid,
            heuristic::greedy(grid, end),
            PriorityRule::GreedyBestFirst,
        ),
        Mode::Bfs => bfs::search(grid),
        Mode::Dfs => dfs::search(grid),
        Mode::BidirectionalDijkstra => {
            bidirectional::search(grid, heuristic::zero(), heuristic::zero())
        }
        Mode::BidirectionalSwarm => bidirectional::search(
            grid,
            heuristic::swarm(start, end, 1.001),
            heuristic::swarm(end, start, 1.001),
        ),
    }
}

#[cfg(test)]
mod tests {
    use pathvis_core::{NodeStatus, Point};

    use super::*;

    fn wall_column(g: &mut Grid, x: i32) {
        for y in 0..g.height() {
            g.set_status(Point::new(x, y), NodeStatus::Wall).unwrap();
        }
    }

    #[test]
    fn every_mode_crosses_an_open_field() {
        let g = Grid::new(12, 9);
        for mode in Mode::ALL {
            let result = run_search(&g, mode);
            assert!(result.is_reachable(), "{mode} failed to reach the end");
            // Whatever a mode finds must be a contiguous walk between the
            // markers.
            let path = result.path.unwrap();
            let mut prev = g.start();
            for &p in &path {
                assert_eq!(crate::manhattan(prev, p), 1, "{mode} path jumps");
                prev = p;
            }
            assert_eq!(crate::manhattan(prev, g.end()), 1, "{mode} misses the end");
        }
    }

    #[test]
    fn every_mode_reports_a_partition() {
        let mut g = Grid::new(12, 9);
        wall_column(&mut g, 6);
        for mode in Mode::ALL {
            let result = run_search(&g, mode);
            assert!(result.path.is_none(), "{mode} crossed a full wall");
        }
    }

    #[test]
    fn bfs_hops_never_beat_dijkstra_cost_on_uniform_grids() {
        let mut g = Grid::new(10, 7);
        for p in [
            Point::new(4, 1),
            Point::new(4, 2),
            Point::new(4, 3),
            Point::new(5, 5),
            Point::new(6, 5),
            Point::new(7, 2),
        ] {
            g.set_status(p, NodeStatus::Wall).unwrap();
        }
        let b = run_search(&g, Mode::Bfs).path_len().unwrap();
        let d = run_search(&g, Mode::Dijkstra).path_len().unwrap();
        assert!(b <= d);
    }

    #[test]
    fn bidirectional_settles_no_more_than_unidirectional() {
        let g = Grid::new(16, 11);
        let uni = run_search(&g, Mode::Dijkstra).visit_order.len();
        let bi = run_search(&g, Mode::BidirectionalDijkstra).visit_order.len();
        assert!(bi <= uni);
    }

    #[test]
    fn greedy_settles_fewer_cells_than_dijkstra_in_the_open() {
        let g = Grid::new(12, 9);
        let greedy = run_search(&g, Mode::Greedy).visit_order.len();
        let dijkstra = run_search(&g, Mode::Dijkstra).visit_order.len();
        assert!(greedy < dijkstra);
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<String> = Mode::ALL.iter().map(|m| m.to_string()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Mode::ALL.len());
    }
}
