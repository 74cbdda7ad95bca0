use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze size {size}")]
    InvalidSize { size: usize },

    #[error("cell ({row}, {col}) is outside a {size}x{size} maze")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("config is for a {expected}x{expected} maze, got {actual}x{actual}")]
    SizeMismatch { expected: usize, actual: usize },
}
