//! **pathvis-search**: search algorithms for the grid pathfinding
//! visualizer.
//!
//! Every algorithm the visualizer offers runs through [`run_search`]:
//!
//! - **Dijkstra**, the **A\*** variants, the **Swarms** and **Greedy**: one
//!   shared best-first relaxation engine, parameterized by heuristic and
//!   priority rule
//! - **Bidirectional Dijkstra / Swarm**: two independent frontiers meeting
//!   in the middle
//! - **BFS** and **DFS**: the unweighted baselines
//!
//! Searches borrow the [`Grid`](pathvis_core::Grid) immutably and keep all
//! traversal bookkeeping in per-search state, so one grid can serve any
//! number of searches in sequence. Results come back as a [`SearchResult`]:
//! the reconstructed path plus the order in which cells were settled, which
//! is the order a visualizer animates them.

mod bfs;
mod bidirectional;
mod dfs;
mod heuristic;
mod mode;
mod result;
mod state;
mod uniform;

pub use heuristic::{euclidean, manhattan};
pub use mode::{Mode, run_search};
pub use result::SearchResult;
