use std::fmt;

use crate::error::MazeError;
use crate::grids::{remove_wall_pair, Cell, Direction, Position};

/// Height in pixels of the display the original grid was scaled to.
pub const DISPLAY_HEIGHT: usize = 1000;

/// A size x size grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    size: usize,
    cells: Vec<Cell>,
}

impl Maze {
    pub fn new(size: usize) -> Result<Self, MazeError> {
        if size == 0 {
            return Err(MazeError::InvalidSize { size });
        }
        let count = size
            .checked_mul(size)
            .ok_or(MazeError::InvalidSize { size })?;

        let cells = (0..count)
            .map(|index| Cell::new(index / size, index % size))
            .collect();

        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cell_size(&self) -> usize {
        DISPLAY_HEIGHT / self.size
    }

    #[inline]
    fn index_of(&self, row: usize, col: usize) -> usize {
        (self.size * row) + col
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.size && position.col < self.size
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, MazeError> {
        if row < self.size && col < self.size {
            Ok(self.index_of(row, col))
        } else {
            Err(MazeError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, MazeError> {
        let index = self.checked_index(row, col)?;
        Ok(&self.cells[index])
    }

    #[inline]
    pub fn cell(&self, position: Position) -> Result<&Cell, MazeError> {
        self.cell_at(position.row, position.col)
    }

    /// Neighbors that exist on the grid, in N, E, S, W order.
    pub fn neighbors_of(&self, row: usize, col: usize) -> Result<Vec<&Cell>, MazeError> {
        self.checked_index(row, col)?;
        let here = Position::new(row, col);

        Ok(Direction::ALL
            .iter()
            .filter_map(|dir| here.step(*dir, self.size))
            .map(|pos| &self.cells[self.index_of(pos.row, pos.col)])
            .collect())
    }

    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<&Cell> {
        if !self.contains(position) {
            return None;
        }
        position
            .step(direction, self.size)
            .map(|pos| &self.cells[self.index_of(pos.row, pos.col)])
    }

    pub fn is_open(&self, position: Position, direction: Direction) -> Result<bool, MazeError> {
        Ok(!self.cell(position)?.has_wall(direction))
    }

    pub(crate) fn mark_visited(&mut self, position: Position) {
        let index = self.index_of(position.row, position.col);
        self.cells[index].visited = true;
    }

    // removes the shared wall between `from` and its neighbor in `direction`,
    // returns the neighbor's position or None when it would be off grid
    pub(crate) fn carve(&mut self, from: Position, direction: Direction) -> Option<Position> {
        if !self.contains(from) {
            return None;
        }
        let to = from.step(direction, self.size)?;
        let one = self.index_of(from.row, from.col);
        let two = self.index_of(to.row, to.col);

        let (a, b) = if one < two {
            let (low, high) = self.cells.split_at_mut(two);
            (&mut low[one], &mut high[0])
        } else {
            let (low, high) = self.cells.split_at_mut(one);
            (&mut high[0], &mut low[two])
        };
        remove_wall_pair(a, direction, b);

        Some(to)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }

    // every shared edge is owned by the cell above or to the left of it
    pub fn open_edge_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                let south = cell.row + 1 < self.size && !cell.has_wall(Direction::South);
                let east = cell.col + 1 < self.size && !cell.has_wall(Direction::East);
                south as usize + east as usize
            })
            .sum()
    }

    // 0 = wall, 1 = open, cell centers at (2 * row + 1, 2 * col + 1)
    pub fn to_binary_grid(&self) -> Vec<Vec<u8>> {
        let grid_size = self.size * 2 + 1;
        let mut grid = vec![vec![0u8; grid_size]; grid_size];

        for cell in self.cells.iter() {
            let gr = cell.row * 2 + 1;
            let gc = cell.col * 2 + 1;

            grid[gr][gc] = 1;

            if !cell.has_wall(Direction::North) {
                grid[gr - 1][gc] = 1;
            }
            if !cell.has_wall(Direction::South) {
                grid[gr + 1][gc] = 1;
            }
            if !cell.has_wall(Direction::East) {
                grid[gr][gc + 1] = 1;
            }
            if !cell.has_wall(Direction::West) {
                grid[gr][gc - 1] = 1;
            }
        }

        grid
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_binary_grid() {
            let line: String = row
                .iter()
                .map(|square| if *square == 0 { '#' } else { ' ' })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
