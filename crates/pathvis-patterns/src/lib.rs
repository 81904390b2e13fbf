//! Wall and weight pattern generators for the pathfinding grid.
//!
//! Generators emit lists of cell coordinates instead of mutating the grid,
//! which lets a host animate a pattern key by key before committing it with
//! [`Grid::apply_walls`](pathvis_core::Grid::apply_walls) or
//! [`Grid::apply_weights`](pathvis_core::Grid::apply_weights).
//!
//! - **Recursive maze**: divide-and-cut walls, one gap per wall.
//! - **Random walls / weights**: uniform scatter over the grid.
//! - **Maze weights**: uniform scatter avoiding an existing wall set.

mod maze;
mod pattern;
mod random;

pub use pattern::PatternGen;
