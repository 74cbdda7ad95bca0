use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::MazeError;
use crate::grids::Position;

pub const DEFAULT_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub size: usize,
    /// Fixed seed for reproducible mazes, entropy-seeded when absent.
    pub seed: Option<u64>,
    pub start: Position,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
            start: Position::new(0, 0),
        }
    }
}

impl GeneratorConfig {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        if self.size == 0 || self.size.checked_mul(self.size).is_none() {
            return Err(MazeError::InvalidSize { size: self.size });
        }
        if self.start.row >= self.size || self.start.col >= self.size {
            return Err(MazeError::OutOfBounds {
                row: self.start.row,
                col: self.start.col,
                size: self.size,
            });
        }
        Ok(())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
