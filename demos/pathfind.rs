//! Runs every search mode over one maze board and prints the results.
//!
//! Run: cargo run --bin pathfind

use pathvis_demos::{maze_board, render};
use pathvis_search::{Mode, run_search};

fn main() {
    let mut grid = maze_board(rand::rng());

    // Playback runs against a locked board.
    grid.lock();
    println!("{}x{} maze board", grid.width(), grid.height());
    println!();
    for mode in Mode::ALL {
        let result = run_search(&grid, mode);
        let outcome = match result.path_len() {
            Some(len) => format!("path {len}"),
            None => "unreachable".to_string(),
        };
        println!(
            "{:<22} visited {:>4}  {outcome}",
            mode.to_string(),
            result.visit_order.len()
        );
    }

    let dijkstra = run_search(&grid, Mode::Dijkstra);
    grid.unlock();

    println!();
    println!("{}", render(&grid, dijkstra.path.as_deref()));
}
