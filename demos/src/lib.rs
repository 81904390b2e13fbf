//! Shared board setup and rendering for the pathfinding demos.

use pathvis_core::{Grid, NodeStatus, Point};
use pathvis_patterns::PatternGen;
use rand::Rng;

pub const WIDTH: i32 = 40;
pub const HEIGHT: i32 = 15;

/// Build a maze board with weighted cells scattered through the corridors.
pub fn maze_board<R: Rng>(rng: R) -> Grid {
    let mut grid = Grid::new(WIDTH, HEIGHT);
    let mut r#gen = PatternGen::new(rng);
    let walls = r#gen.recursive_maze(&grid);
    let weights = r#gen.random_weights_for_maze(&grid, grid.len() / 7, &walls);
    grid.apply_walls(&walls);
    grid.apply_weights(&weights);
    grid
}

/// Render the board as text, optionally overlaying a path.
///
/// Walls are `#`, weighted cells `~`, open cells `.`, the markers `S` and
/// `E`, and path cells `*`.
pub fn render(grid: &Grid, path: Option<&[Point]>) -> String {
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = if p == grid.start() {
                'S'
            } else if p == grid.end() {
                'E'
            } else if path.is_some_and(|path| path.contains(&p)) {
                '*'
            } else {
                match grid.status(p) {
                    Some(NodeStatus::Wall) => '#',
                    Some(NodeStatus::Weighted) => '~',
                    _ => '.',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
