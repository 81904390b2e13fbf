//! Depth-first search.

use pathvis_core::Grid;

use crate::result::SearchResult;
use crate::state::{NO_PARENT, reconstruct};

/// Stack-based search that dives as deep as it can before backtracking.
///
/// Cells are marked settled when popped, not when pushed, so a cell can sit
/// on the stack several times and be recorded in the visit trace on each
/// pop. Predecessors are overwritten at every push; the walk that is
/// reconstructed is whichever one last touched each cell, and it is not
/// shortest in general.
pub(crate) fn search(grid: &Grid) -> SearchResult {
    let start = grid.start_index();
    let end = grid.end_index();
    let mut parent = vec![NO_PARENT; grid.len()];
    let mut visited = vec![false; grid.len()];
    let mut stack = vec![start];

    let mut visit_order = Vec::new();
    let found = 'search: loop {
        let Some(u) = stack.pop() else {
            break 'search false;
        };
        for v in grid.neighbors(u).into_iter().flatten() {
            if grid.is_wall(v) || visited[v] {
                continue;
            }
            parent[v] = u;
            stack.push(v);
        }
        if u != start && u != end {
            visit_order.push(grid.point(u));
        }
        visited[u] = true;
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
    fn corridor_path_is_exact() {
        let g = Grid::new(3, 1);
        let result = run_search(&g, Mode::Dfs);
        assert_eq!(result.path, Some(vec![Point::new(1, 0)]));
        assert_eq!(result.visit_order, vec![Point::new(1, 0)]);
    }

    #[test]
    fn path_is_a_contiguous_walk() {
        let g = Grid::new(8, 6);
        let result = run_search(&g, Mode::Dfs);
        let path = result.path.unwrap();
        let mut prev = g.start();
        for &p in &path {
            assert_eq!(crate::manhattan(prev, p), 1);
            prev = p;
        }
        assert_eq!(crate::manhattan(prev, g.end()), 1);
    }

    #[test]
    fn wanders_at_least_as_far_as_bfs() {
        let g = Grid::new(8, 6);
        let bfs_len = run_search(&g, Mode::Bfs).path_len().unwrap();
        let dfs_len = run_search(&g, Mode::Dfs).path_len().unwrap();
        assert!(dfs_len >= bfs_len);
    }

    #[test]
    fn walled_in_start_finds_nothing() {
        let mut g = Grid::new(8, 6);
        for p in g.start().neighbors_4() {
            g.set_status(p, NodeStatus::Wall).unwrap();
        }
        let result = run_search(&g, Mode::Dfs);
        assert_eq!(result.path, None);
        assert!(result.visit_order.is_empty());
    }
}
