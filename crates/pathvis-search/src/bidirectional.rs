//! Bidirectional best-first search: two frontiers meeting in the middle.

use pathvis_core::{Grid, Point};

use crate::result::SearchResult;
use crate::state::{Frontier, NO_PARENT, OpenEntry};

/// Run one frontier from each marker and stop at the first cell settled by
/// both.
///
/// Each step expands the frontier whose best open priority is smaller,
/// with ties going to the start side. The two frontiers are fully
/// independent; each keeps its own costs, predecessors and heap, and `h1`
/// and `h2` estimate for the start and end side respectively. When either
/// frontier drains before a meeting, no walk between the markers exists.
pub(crate) fn search(
    grid: &Grid,
    h1: impl Fn(Point) -> f64,
    h2: impl Fn(Point) -> f64,
) -> SearchResult {
    let start = grid.start_index();
    let end = grid.end_index();
    let mut fstart = Frontier::new(grid.len());
    let mut fend = Frontier::new(grid.len());
    fstart.seed(start, h1(grid.point(start)));
    fend.seed(end, h2(grid.point(end)));

    let mut visit_order = Vec::new();
    let mut meeting = None;
    'search: loop {
        let (Some(sp), Some(ep)) = (fstart.peek_priority(), fend.peek_priority()) else {
            break 'search;
        };
        let (frontier, h): (&mut Frontier, &dyn Fn(Point) -> f64) = if sp <= ep {
            (&mut fstart, &h1)
        } else {
            (&mut fend, &h2)
        };
        let Some(u) = frontier.pop_next() else {
            break 'search;
        };
        for v in grid.neighbors(u).into_iter().flatten() {
            if grid.is_wall(v) {
                continue;
            }
            let cand = frontier.dist[u] + grid.weight(v);
            if cand < frontier.dist[v] {
                frontier.dist[v] = cand;
                frontier.parent[v] = u;
                let prio = cand + h(grid.point(v));
                frontier.open.push(OpenEntry { idx: v, prio });
            }
        }
        if u != start && u != end {
            visit_order.push(grid.point(u));
        }
        frontier.visited[u] = true;
        if fstart.visited[u] && fend.visited[u] {
            meeting = Some(u);
            break 'search;
        }
    }

    let path = meeting.map(|m| join_walks(grid, &fstart, &fend, m, start, end));
    SearchResult { path, visit_order }
}

/// Stitch the two half-walks together at the meeting cell: the start side's
/// predecessor chain in walking order, then the end side's chain onward to
/// the end. Markers are excluded and cells already emitted are not emitted
/// again.
fn join_walks(
    grid: &Grid,
    fstart: &Frontier,
    fend: &Frontier,
    meeting: usize,
    start: usize,
    end: usize,
) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = meeting;
    while cur != NO_PARENT {
        if cur != start && cur != end {
            path.push(grid.point(cur));
        }
        cur = fstart.parent[cur];
    }
    path.reverse();
    let mut cur = fend.parent[meeting];
    while cur != NO_PARENT {
        let p = grid.point(cur);
        if cur != start && cur != end && !path.contains(&p) {
            path.push(p);
        }
        cur = fend.parent[cur];
    }
    path
}
