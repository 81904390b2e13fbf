//! Distance estimates used by the search modes.
//!
//! The inflation factors are part of each mode's identity. All of them
//! overestimate, so the modes built on them do not promise shortest paths;
//! what changes is the shape of the explored area a visualizer shows.

use pathvis_core::{Grid, Point};

/// Manhattan (taxicab) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean (straight-line) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Zero estimate; turns the engine into plain Dijkstra.
pub(crate) fn zero() -> impl Fn(Point) -> f64 {
    |_| 0.0
}

/// Euclidean distance to `end`, inflated by 1.1.
pub(crate) fn euclidean_inflated(end: Point) -> impl Fn(Point) -> f64 {
    move |v| 1.1 * euclidean(v, end)
}

/// Squared Euclidean distance to `end`.
pub(crate) fn euclidean_squared(end: Point) -> impl Fn(Point) -> f64 {
    move |v| {
        let dx = (v.x - end.x) as f64;
        let dy = (v.y - end.y) as f64;
        dx * dx + dy * dy
    }
}

/// Manhattan distance to `end`, inflated by 1.001.
pub(crate) fn manhattan_inflated(end: Point) -> impl Fn(Point) -> f64 {
    move |v| 1.001 * manhattan(v, end) as f64
}

/// Combined Manhattan distance to both markers, scaled by `factor`.
pub(crate) fn swarm(start: Point, end: Point, factor: f64) -> impl Fn(Point) -> f64 {
    move |v| factor * (manhattan(v, end) + manhattan(v, start)) as f64
}

/// Greedy estimate: inflated Manhattan distance to `end` plus twice the
/// cell's step cost. Used as the whole priority; the travelled cost only
/// drives relaxation.
pub(crate) fn greedy(grid: &Grid, end: Point) -> impl Fn(Point) -> f64 + '_ {
    move |v| {
        let w = grid.idx(v).map_or(1.0, |i| grid.weight(i));
        1.001 * manhattan(v, end) as f64 + 2.0 * w
    }
}
