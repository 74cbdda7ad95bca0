use crate::grids::{Direction, Maze, Position};

/// A positioned marker that walks the maze through open walls only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    position: Position,
}

impl Cursor {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn place(&mut self, position: Position) {
        self.position = position;
    }

    // bumping into a wall leaves the cursor where it was
    pub fn try_move(&mut self, direction: Direction, maze: &Maze) -> bool {
        let open = match maze.cell(self.position) {
            Ok(cell) => !cell.has_wall(direction),
            Err(_) => false,
        };
        if !open {
            return false;
        }

        match self.position.step(direction, maze.size()) {
            Some(next) => {
                self.position = next;
                true
            }
            None => false,
        }
    }
}
