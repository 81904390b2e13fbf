//! **pathvis-core**: grid model for the pathfinding visualizer.
//!
//! This crate provides the data model the search and pattern crates operate
//! on: geometry primitives, the five-state cell model, and the [`Grid`]
//! arena with its start/end markers, precomputed 4-directional adjacency,
//! and the edit lock used while a visualization is playing back.
//!
//! The grid never runs searches itself; see `pathvis-search` for the
//! algorithm family and `pathvis-patterns` for maze and random-pattern
//! generation.

pub mod geom;
pub mod grid;
pub mod node;

pub use geom::{Point, Range};
pub use grid::{DEFAULT_WEIGHT_MULTIPLIER, Grid, GridError};
pub use node::{Node, NodeStatus};
