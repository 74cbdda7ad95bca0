//! Breadth-first pathfinding over a generated maze.

use std::collections::VecDeque;

use log::debug;

use crate::cursor::Cursor;
use crate::error::MazeError;
use crate::grids::{Direction, Maze, Position};

pub const PATH: u8 = 2;

// both ends included, None only on a maze that was never finished
pub fn shortest_path(
    maze: &Maze,
    from: Position,
    to: Position,
) -> Result<Option<Vec<Position>>, MazeError> {
    maze.cell(from)?;
    maze.cell(to)?;

    let size = maze.size();
    let index_of = |pos: Position| pos.row * size + pos.col;

    let mut came_from: Vec<Option<Position>> = vec![None; size * size];
    let mut seen = vec![false; size * size];
    let mut queue = VecDeque::new();

    seen[index_of(from)] = true;
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            break;
        }

        for dir in Direction::ALL.iter() {
            let mut cursor = Cursor::new(current);
            if !cursor.try_move(*dir, maze) {
                continue;
            }
            let next = cursor.position();
            if !seen[index_of(next)] {
                seen[index_of(next)] = true;
                came_from[index_of(next)] = Some(current);
                queue.push_back(next);
            }
        }
    }

    if !seen[index_of(to)] {
        debug!("no path from {} to {}", from, to);
        return Ok(None);
    }

    let mut path = vec![to];
    let mut current = to;
    while let Some(previous) = came_from[index_of(current)] {
        path.push(previous);
        current = previous;
    }
    path.reverse();

    debug!("path from {} to {} spans {} cells", from, to, path.len());
    Ok(Some(path))
}

pub fn path_grid(maze: &Maze, path: &[Position]) -> Vec<Vec<u8>> {
    let mut grid = maze.to_binary_grid();

    for pos in path.iter() {
        grid[pos.row * 2 + 1][pos.col * 2 + 1] = PATH;
    }
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        grid[a.row + b.row + 1][a.col + b.col + 1] = PATH;
    }

    grid
}
