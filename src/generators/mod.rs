pub mod backtracker;

pub use backtracker::Backtracker;

use crate::grids::Position;

/// What a single generation step did to the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Carved { from: Position, to: Position },
    Stalled,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationStats {
    pub steps: usize,
    pub carves: usize,
    pub stalled: usize,
}

pub trait Generator {
    fn step(&mut self) -> StepOutcome;
    fn is_done(&self) -> bool;

    fn generate_maze(&mut self) {
        while !self.is_done() {
            self.step();
        }
    }
}
