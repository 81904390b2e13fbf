//! Prints one board per pattern recipe.
//!
//! Run: cargo run --bin patterns

use pathvis_core::Grid;
use pathvis_demos::render;
use pathvis_patterns::PatternGen;

fn main() {
    let mut r#gen = PatternGen::new(rand::rng());

    let mut maze = Grid::new(31, 11);
    let walls = r#gen.recursive_maze(&maze);
    let weights = r#gen.random_weights_for_maze(&maze, maze.len() / 7, &walls);
    maze.apply_walls(&walls);
    maze.apply_weights(&weights);
    println!(
        "recursive maze: {} walls, {} weights",
        walls.len(),
        weights.len()
    );
    println!("{}", render(&maze, None));

    let mut scatter = Grid::new(31, 11);
    let walls = r#gen.random_walls(&scatter, scatter.len() / 4);
    scatter.apply_walls(&walls);
    println!("random walls: {} keys", walls.len());
    println!("{}", render(&scatter, None));

    let mut mixed = Grid::new(31, 11);
    let walls = r#gen.random_walls(&mixed, mixed.len() / 7);
    let weights: Vec<_> = r#gen
        .random_weights(&mixed, mixed.len() / 4)
        .into_iter()
        .filter(|p| !walls.contains(p))
        .collect();
    mixed.apply_walls(&walls);
    mixed.apply_weights(&weights);
    println!("random walls and weights");
    println!("{}", render(&mixed, None));
}
