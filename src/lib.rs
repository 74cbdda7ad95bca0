//! Perfect maze generation with a randomized iterative backtracker.
//!
//! A [`Maze`] is a square grid of [`Cell`]s, each with four walls. A
//! [`Backtracker`] carves it one [`Generator::step`] at a time until its
//! stack empties, leaving a spanning tree of the grid: every cell reachable,
//! no loops. Nothing here draws; callers read cell walls to render.

pub mod config;
pub mod cursor;
pub mod error;
pub mod generators;
pub mod grids;
pub mod solver;

pub use config::GeneratorConfig;
pub use cursor::Cursor;
pub use error::MazeError;
pub use generators::{Backtracker, GenerationStats, Generator, StepOutcome};
pub use grids::{Cell, Direction, Maze, Position};

/// Builds a size x size maze and carves it to completion from (0, 0).
pub fn generate(size: usize) -> Result<Maze, MazeError> {
    generate_with(&GeneratorConfig::new(size))
}

pub fn generate_with(config: &GeneratorConfig) -> Result<Maze, MazeError> {
    config.validate()?;

    let mut maze = Maze::new(config.size)?;
    Backtracker::from_config(&mut maze, config)?.generate_maze();

    Ok(maze)
}
