//! Breadth-first search.

use std::collections::VecDeque;

use pathvis_core::Grid;

use crate::result::SearchResult;
use crate::state::{NO_PARENT, reconstruct};

/// Unweighted search in expanding rings around the start marker.
///
/// Cells are marked and given their predecessor when enqueued, so each cell
/// enters the queue at most once and the first walk found uses the fewest
/// hops. The search stops as soon as the end is enqueued; the end itself is
/// never dequeued.
pub(crate) fn search(grid: &Grid) -> SearchResult {
    let start = grid.start_index();
    let end = grid.end_index();
    let mut parent = vec![NO_PARENT; grid.len()];
    let mut visited = vec![false; grid.len()];
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    let mut visit_order = Vec::new();
    let found = 'search: loop {
        let Some(u) = queue.pop_front() else {
            break 'search false;
        };
        for v in grid.neighbors(u).into_iter().flatten() {
            if grid.is_wall(v) || visited[v] {
                continue;
            }
            visited[v] = true;
            parent[v] = u;
            queue.push_back(v);
        }
        if u != start && u != end {
            visit_order.push(grid.point(u));
        }
        if visited[end] {
            break 'search true;
        }
    };

    let path = found.then(|| reconstruct(grid, &parent, start, end));
    SearchResult { path, visit_order }
}

#[cfg(test)]
mod tests {
    use pathvis_core::{Grid, NodeStatus, Point};

    use crate::mode::{Mode, run_search};

    #[test]
    fn shortest_hop_path_crosses_weights() {
        let mut g = Grid::new(5, 3);
        g.set_status(Point::new(2, 1), NodeStatus::Weighted).unwrap();
        let result = run_search(&g, Mode::Bfs);
        // Hop count is all that matters; the weighted cell costs nothing
        // extra here.
        assert_eq!(result.path, Some(vec![Point::new(2, 1)]));
    }

    #[test]
    fn open_field_path_length_is_manhattan() {
        let g = Grid::new(9, 7);
        let man = crate::manhattan(g.start(), g.end()) as usize;
        let result = run_search(&g, Mode::Bfs);
        assert_eq!(result.path_len(), Some(man - 1));
        assert!(!result.visit_order.contains(&g.start()));
        assert!(!result.visit_order.contains(&g.end()));
    }

    #[test]
    fn adjacent_markers_probe_nothing() {
        let g = Grid::new(2, 1);
        let result = run_search(&g, Mode::Bfs);
        assert_eq!(result.path, Some(vec![]));
        assert!(result.visit_order.is_empty());
    }

    #[test]
    fn drained_queue_means_unreachable() {
        let mut g = Grid::new(9, 7);
        for y in 0..7 {
            g.set_status(Point::new(4, y), NodeStatus::Wall).unwrap();
        }
        let result = run_search(&g, Mode::Bfs);
        assert_eq!(result.path, None);
    }
}
