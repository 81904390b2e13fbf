//! Uniform random wall and weight scatters.

use std::collections::HashSet;

use pathvis_core::{Grid, Point};
use rand::Rng;

use crate::pattern::PatternGen;

impl<R: Rng> PatternGen<R> {
    /// Scatter `count` random wall keys over the grid.
    ///
    /// Cells are sampled independently, so the list can hold duplicates and
    /// comes up short when samples land on the start or end cell.
    pub fn random_walls(&mut self, grid: &Grid, count: usize) -> Vec<Point> {
        self.scatter(grid, count)
    }

    /// Scatter `count` random weight keys over the grid.
    ///
    /// Sampling is identical to [`random_walls`](Self::random_walls); only
    /// the apply step distinguishes the two.
    pub fn random_weights(&mut self, grid: &Grid, count: usize) -> Vec<Point> {
        self.scatter(grid, count)
    }

    /// Scatter weight keys over the open cells left by a wall pattern.
    ///
    /// Samples colliding with `walls` or a marker are redrawn rather than
    /// dropped, so the output length is exact. The count is capped at 70%
    /// of the grid area minus the wall count, keeping dense boards from
    /// drowning in weights.
    pub fn random_weights_for_maze(
        &mut self,
        grid: &Grid,
        count: usize,
        walls: &[Point],
    ) -> Vec<Point> {
        let mut blocked: HashSet<Point> = walls.iter().copied().collect();
        blocked.insert(grid.start());
        blocked.insert(grid.end());
        if blocked.len() >= grid.len() {
            return Vec::new();
        }
        let cap = (grid.len() as f64 * 0.7) as usize;
        let count = count.min(cap.saturating_sub(walls.len()));
        let mut weights = Vec::with_capacity(count);
        for _ in 0..count {
            let mut p = self.random_cell(grid);
            while blocked.contains(&p) {
                p = self.random_cell(grid);
            }
            weights.push(p);
        }
        weights
    }

    fn scatter(&mut self, grid: &Grid, count: usize) -> Vec<Point> {
        let mut keys = Vec::with_capacity(count);
        for _ in 0..count {
            let p = self.random_cell(grid);
            if p != grid.start() && p != grid.end() {
                keys.push(p);
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pathvis_core::{Grid, NodeStatus, Point};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::PatternGen;

    #[test]
    fn test_scatters_never_hit_the_markers() {
        let grid = Grid::new(12, 7);
        let mut r#gen = PatternGen::new(StdRng::seed_from_u64(1));
        let walls = r#gen.random_walls(&grid, 500);
        let weights = r#gen.random_weights(&grid, 500);
        for p in walls.iter().chain(&weights) {
            assert!(grid.contains(*p));
            assert_ne!(*p, grid.start());
            assert_ne!(*p, grid.end());
        }
    }

    #[test]
    fn test_scatter_count_is_bounded_by_the_request() {
        let grid = Grid::new(10, 6);
        let mut r#gen = PatternGen::new(StdRng::seed_from_u64(2));
        let walls = r#gen.random_walls(&grid, 120);
        assert!(walls.len() <= 120);
        assert!(!walls.is_empty());
    }

    #[test]
    fn test_maze_weights_avoid_the_wall_set() {
        let grid = Grid::new(15, 9);
        let mut r#gen = PatternGen::new(StdRng::seed_from_u64(3));
        let walls = r#gen.recursive_maze(&grid);
        let weights = r#gen.random_weights_for_maze(&grid, 40, &walls);
        let wall_set: HashSet<_> = walls.iter().copied().collect();
        for p in &weights {
            assert!(!wall_set.contains(p));
            assert_ne!(*p, grid.start());
            assert_ne!(*p, grid.end());
        }
    }

    #[test]
    fn test_maze_weights_produce_the_exact_count() {
        let grid = Grid::new(15, 9);
        let mut r#gen = PatternGen::new(StdRng::seed_from_u64(6));
        let weights = r#gen.random_weights_for_maze(&grid, 20, &[]);
        assert_eq!(weights.len(), 20);
    }

    #[test]
    fn test_maze_weights_cap_follows_the_open_area() {
        let grid = Grid::new(10, 5);
        let mut r#gen = PatternGen::new(StdRng::seed_from_u64(4));
        let walls: Vec<Point> = grid
            .iter()
            .map(|n| n.pos())
            .filter(|p| *p != grid.start() && *p != grid.end())
            .take(30)
            .collect();
        // Area 50: the cap is 35 keys minus the 30 walls.
        let weights = r#gen.random_weights_for_maze(&grid, 100, &walls);
        assert_eq!(weights.len(), 5);
    }

    #[test]
    fn test_maze_weights_on_a_fully_blocked_grid_are_empty() {
        let grid = Grid::new(3, 1);
        let mut r#gen = PatternGen::new(StdRng::seed_from_u64(5));
        let weights = r#gen.random_weights_for_maze(&grid, 10, &[Point::new(1, 0)]);
        assert!(weights.is_empty());
    }

    #[test]
    fn test_weights_survive_the_apply_round_trip() {
        let mut grid = Grid::new(14, 8);
        let mut r#gen = PatternGen::new(StdRng::seed_from_u64(7));
        let walls = r#gen.recursive_maze(&grid);
        let weights = r#gen.random_weights_for_maze(&grid, 25, &walls);
        grid.lock();
        grid.apply_walls(&walls);
        grid.apply_weights(&weights);
        grid.unlock();
        let painted: HashSet<_> = grid
            .iter()
            .filter(|n| n.status() == NodeStatus::Weighted)
            .map(|n| n.pos())
            .collect();
        let emitted: HashSet<_> = weights.iter().copied().collect();
        assert_eq!(painted, emitted);
    }
}
