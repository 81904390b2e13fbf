//! Pattern generator state.

use pathvis_core::{Grid, Point};
use rand::{Rng, RngExt};

/// Pattern generator owning the randomness source.
///
/// The individual generators live in sibling modules; they all borrow the
/// grid read-only and leave committing their output to the caller.
pub struct PatternGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> PatternGen<R> {
    /// Create a generator from a randomness source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform random cell of the grid.
    pub(crate) fn random_cell(&mut self, grid: &Grid) -> Point {
        Point::new(
            self.rng.random_range(0..grid.width()),
            self.rng.random_range(0..grid.height()),
        )
    }
}
