//! The shared best-first relaxation engine behind Dijkstra, the A*
//! variants, the swarms and greedy best-first.

use pathvis_core::{Grid, Point};

use crate::result::SearchResult;
use crate::state::{Frontier, OpenEntry, reconstruct};

/// How the engine turns costs and estimates into heap priorities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PriorityRule {
    /// Priority = cost so far + estimate. Dijkstra and the A* family.
    CostPlusHeuristic,
    /// Priority = estimate alone; the travelled cost only drives
    /// relaxation, not the expansion order.
    GreedyBestFirst,
}

/// Best-first search from the start marker to the end marker.
///
/// Settling order: pop the open cell with the smallest priority, relax its
/// four non-wall neighbours, record it in the visit trace, then stop if it
/// was the end. A settled cell's cost can still improve afterwards through
/// relaxation, but the cell is never expanded again.
pub(crate) fn search(grid: &Grid, h: impl Fn(Point) -> f64, rule: PriorityRule) -> SearchResult {
    let start = grid.start_index();
    let end = grid.end_index();
    let mut frontier = Frontier::new(grid.len());
    frontier.seed(start, h(grid.point(start)));

    let mut visit_order = Vec::new();
    let found = 'search: loop {
        let Some(u) = frontier.pop_next() else {
            // Open heap drained: everything reachable is settled.
            break 'search false;
        };
        for v in grid.neighbors(u).into_iter().flatten() {
            if grid.is_wall(v) {
                continue;
            }
            let cand = frontier.dist[u] + grid.weight(v);
            if cand < frontier.dist[v] {
                frontier.dist[v] = cand;
                frontier.parent[v] = u;
                let prio = match rule {
                    PriorityRule::CostPlusHeuristic => cand + h(grid.point(v)),
                    PriorityRule::GreedyBestFirst => h(grid.point(v)),
                };
                frontier.open.push(OpenEntry { idx: v, prio });
            }
        }
        if u != start && u != end {
            visit_order.push(grid.point(u));
        }
        frontier.visited[u] = true;
        if u == end {
            break 'search true;
        }
    };

    let path = found.then(|| reconstruct(grid, &frontier.parent, start, end));
    SearchResult { path, visit_order }
}
