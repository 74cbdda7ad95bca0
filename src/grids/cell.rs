use crate::grids::{Direction, Position};

/// One grid position: four boundary walls (`true` = present) and a visited marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    walls: [bool; 4], // [North, East, South, West]
    pub visited: bool,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            walls: [true; 4],
            visited: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    #[inline]
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    #[inline]
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    pub fn open_sides(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |dir| !self.has_wall(*dir))
    }

    fn clear_wall(&mut self, direction: Direction) {
        self.walls[direction.index()] = false;
    }
}

// adjacency is not checked, `b` must be `a`'s neighbor in `direction`
pub fn remove_wall_pair(a: &mut Cell, direction: Direction, b: &mut Cell) {
    a.clear_wall(direction);
    b.clear_wall(-direction);
}
