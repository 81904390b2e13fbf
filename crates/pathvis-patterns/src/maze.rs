//! Recursive-division maze generation.

use std::collections::HashSet;

use pathvis_core::{Grid, Point};
use rand::{Rng, RngExt};

use crate::pattern::PatternGen;

impl<R: Rng> PatternGen<R> {
    /// Generate a recursive-division maze for `grid`.
    ///
    /// Walls come back in carve order, one full dividing wall at a time
    /// before its two halves are divided in turn, so applying the keys one
    /// by one draws the maze from the outermost wall inwards. Every wall
    /// keeps exactly one gap, gaps line up across wall junctions, and the
    /// start and end cells are never part of the pattern.
    pub fn recursive_maze(&mut self, grid: &Grid) -> Vec<Point> {
        let mut maze = MazeBuilder {
            rng: &mut self.rng,
            start: grid.start(),
            end: grid.end(),
            walls: Vec::new(),
            holes: HashSet::new(),
        };
        maze.holes.insert(maze.start);
        maze.holes.insert(maze.end);
        maze.first_cut(grid.width(), grid.height());
        maze.walls
    }
}

/// Divide-and-cut state for one maze run.
struct MazeBuilder<'a, R: Rng> {
    rng: &'a mut R,
    start: Point,
    end: Point,
    walls: Vec<Point>,
    /// Gap cells no wall may cover, the markers included. New walls consult
    /// this set to line their own gap up with a gap just past either end.
    holes: HashSet<Point>,
}

impl<R: Rng> MazeBuilder<'_, R> {
    /// Cut the whole grid across its longer axis. The cut lands in the
    /// middle third so both halves keep room to divide further.
    fn first_cut(&mut self, width: i32, height: i32) {
        if width > height {
            let cut_x = self.rng.random_range(width / 3..=2 * width / 3);
            let hole_y = self.rng.random_range(0..height);
            self.emit_column(cut_x, 0, height - 1, hole_y);
            self.holes.insert(Point::new(cut_x, hole_y));
            self.divide(0, 0, cut_x - 1, height - 1, None, Some(hole_y));
            self.divide(cut_x + 1, 0, width - 1, height - 1, None, Some(hole_y));
        } else {
            let cut_y = self.rng.random_range(height / 3..=2 * height / 3);
            let hole_x = self.rng.random_range(0..width);
            self.emit_row(cut_y, 0, width - 1, hole_x);
            self.holes.insert(Point::new(hole_x, cut_y));
            self.divide(0, 0, width - 1, cut_y - 1, Some(hole_x), None);
            self.divide(0, cut_y + 1, width - 1, height - 1, Some(hole_x), None);
        }
    }

    /// Divide the inclusive sub-rectangle, threading through the gap
    /// coordinates of the most recent cut on each axis.
    fn divide(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        prev_hole_x: Option<i32>,
        prev_hole_y: Option<i32>,
    ) {
        let width = x2 - x1;
        let height = y2 - y1;
        if width < 3 && height < 3 {
            return;
        }

        if width > height {
            let mut cut_x = self.rng.random_range(x1 + 1..=x2 - 1);
            // Re-roll cuts that line up with the bounding wall's gap.
            while prev_hole_x == Some(cut_x) {
                cut_x = self.rng.random_range(x1 + 1..=x2 - 1);
            }
            // Line the gap up with a gap just past either wall end.
            let hole_y = if self.holes.contains(&Point::new(cut_x, y2 + 1)) {
                y2
            } else if self.holes.contains(&Point::new(cut_x, y1 - 1)) {
                y1
            } else {
                self.rng.random_range(y1..=y2)
            };
            self.emit_column(cut_x, y1, y2, hole_y);
            self.holes.insert(Point::new(cut_x, hole_y));
            self.divide(x1, y1, cut_x - 1, y2, prev_hole_x, Some(hole_y));
            self.divide(cut_x + 1, y1, x2, y2, prev_hole_x, Some(hole_y));
        } else {
            let mut cut_y = self.rng.random_range(y1 + 1..=y2 - 1);
            while prev_hole_y == Some(cut_y) {
                cut_y = self.rng.random_range(y1 + 1..=y2 - 1);
            }
            let hole_x = if self.holes.contains(&Point::new(x2 + 1, cut_y)) {
                x2
            } else if self.holes.contains(&Point::new(x1 - 1, cut_y)) {
                x1
            } else {
                self.rng.random_range(x1..=x2)
            };
            self.emit_row(cut_y, x1, x2, hole_x);
            self.holes.insert(Point::new(hole_x, cut_y));
            self.divide(x1, y1, x2, cut_y - 1, Some(hole_x), prev_hole_y);
            self.divide(x1, cut_y + 1, x2, y2, Some(hole_x), prev_hole_y);
        }
    }

    /// Emit a vertical wall, skipping the gap and the markers.
    fn emit_column(&mut self, x: i32, y1: i32, y2: i32, hole_y: i32) {
        for y in y1..=y2 {
            if y == hole_y {
                continue;
            }
            let p = Point::new(x, y);
            if p == self.start || p == self.end {
                continue;
            }
            self.walls.push(p);
        }
    }

    /// Emit a horizontal wall, skipping the gap and the markers.
    fn emit_row(&mut self, y: i32, x1: i32, x2: i32, hole_x: i32) {
        for x in x1..=x2 {
            if x == hole_x {
                continue;
            }
            let p = Point::new(x, y);
            if p == self.start || p == self.end {
                continue;
            }
            self.walls.push(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pathvis_core::{Grid, NodeStatus};
    use pathvis_search::{Mode, run_search};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::PatternGen;

    #[test]
    fn test_maze_never_emits_the_markers() {
        for (w, h) in [(3, 3), (8, 5), (5, 8), (20, 11), (31, 17)] {
            for seed in 0..8 {
                let grid = Grid::new(w, h);
                let mut r#gen = PatternGen::new(StdRng::seed_from_u64(seed));
                let walls = r#gen.recursive_maze(&grid);
                assert!(!walls.contains(&grid.start()));
                assert!(!walls.contains(&grid.end()));
                for &p in &walls {
                    assert!(grid.contains(p), "wall {p} off the {w}x{h} grid");
                }
            }
        }
    }

    #[test]
    fn test_maze_walls_are_distinct() {
        let grid = Grid::new(24, 15);
        let mut r#gen = PatternGen::new(StdRng::seed_from_u64(7));
        let walls = r#gen.recursive_maze(&grid);
        let unique: HashSet<_> = walls.iter().copied().collect();
        assert_eq!(unique.len(), walls.len());
    }

    #[test]
    fn test_maze_survives_the_apply_round_trip() {
        let mut grid = Grid::new(19, 12);
        let mut r#gen = PatternGen::new(StdRng::seed_from_u64(3));
        let walls = r#gen.recursive_maze(&grid);
        grid.lock();
        grid.apply_walls(&walls);
        grid.unlock();
        let painted: Vec<_> = grid
            .iter()
            .filter(|n| n.status() == NodeStatus::Wall)
            .map(|n| n.pos())
            .collect();
        let emitted: HashSet<_> = walls.iter().copied().collect();
        let applied: HashSet<_> = painted.iter().copied().collect();
        assert_eq!(emitted, applied);
        assert_eq!(painted.len(), walls.len());
    }

    #[test]
    fn test_maze_leaves_a_route_between_the_markers() {
        for seed in 0..6 {
            let mut grid = Grid::new(22, 13);
            let mut r#gen = PatternGen::new(StdRng::seed_from_u64(seed));
            let walls = r#gen.recursive_maze(&grid);
            grid.apply_walls(&walls);
            let result = run_search(&grid, Mode::Bfs);
            assert!(result.is_reachable(), "maze for seed {seed} has no route");
        }
    }

    #[test]
    fn test_maze_is_deterministic_per_seed() {
        let grid = Grid::new(16, 9);
        let a = PatternGen::new(StdRng::seed_from_u64(42)).recursive_maze(&grid);
        let b = PatternGen::new(StdRng::seed_from_u64(42)).recursive_maze(&grid);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tiny_grids_produce_no_walls() {
        let grid = Grid::new(2, 1);
        let mut r#gen = PatternGen::new(StdRng::seed_from_u64(0));
        assert!(r#gen.recursive_maze(&grid).is_empty());
    }
}
