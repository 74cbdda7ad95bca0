//! Randomized iterative backtracker.
//!
//! Each step pops the top of the stack, pushes it back while it still has
//! unvisited neighbors, then picks one of the four directions at random.
//! Picks toward the grid edge or an already visited cell carve nothing and
//! the step is spent; the cell stays on the stack and is retried later.

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::cursor::Cursor;
use crate::error::MazeError;
use crate::generators::{GenerationStats, Generator, StepOutcome};
use crate::grids::{Direction, Maze, Position};

pub struct Backtracker<'a, R: Rng = StdRng> {
    maze: &'a mut Maze,
    rng: R,
    cursor: Cursor,
    stack: Vec<Position>,
    last_carved: Option<(Position, Position)>,
    stats: GenerationStats,
    done: bool,
}

impl<'a> Backtracker<'a, StdRng> {
    pub fn from_config(maze: &'a mut Maze, config: &GeneratorConfig) -> Result<Self, MazeError> {
        if config.size != maze.size() {
            return Err(MazeError::SizeMismatch {
                expected: config.size,
                actual: maze.size(),
            });
        }
        Self::with_rng(maze, config.start, config.rng())
    }
}

impl<'a, R: Rng> Backtracker<'a, R> {
    pub fn with_rng(maze: &'a mut Maze, start: Position, rng: R) -> Result<Self, MazeError> {
        maze.cell(start)?;
        maze.mark_visited(start);

        debug!(
            "backtracker over {}x{} maze starting at {}",
            maze.size(),
            maze.size(),
            start
        );

        Ok(Self {
            maze,
            rng,
            cursor: Cursor::new(start),
            stack: vec![start],
            last_carved: None,
            stats: GenerationStats::default(),
            done: false,
        })
    }

    pub fn maze(&self) -> &Maze {
        self.maze
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn last_carved(&self) -> Option<(Position, Position)> {
        self.last_carved
    }

    pub fn stats(&self) -> GenerationStats {
        self.stats
    }

    fn has_unvisited_neighbor(&self, position: Position) -> bool {
        self.maze
            .neighbors_of(position.row, position.col)
            .map(|neighbors| neighbors.iter().any(|cell| !cell.visited))
            .unwrap_or(false)
    }

    fn finish(&mut self) {
        self.done = true;
        info!(
            "maze of size {} complete after {} steps ({} carved, {} stalled)",
            self.maze.size(),
            self.stats.steps,
            self.stats.carves,
            self.stats.stalled
        );
    }
}

impl<'a, R: Rng> Generator for Backtracker<'a, R> {
    fn step(&mut self) -> StepOutcome {
        if self.done {
            return StepOutcome::Finished;
        }

        self.last_carved = None;

        let current = match self.stack.pop() {
            Some(current) => current,
            None => {
                self.finish();
                return StepOutcome::Finished;
            }
        };
        self.stats.steps += 1;
        self.cursor.place(current);

        // keep the cell as backtrack point before the pick, the pick may be wasted
        if self.has_unvisited_neighbor(current) {
            self.stack.push(current);
        }

        let pick: usize = self.rng.gen_range(0, 4);
        let direction = Direction::ALL[pick];
        let target = self
            .maze
            .neighbor(current, direction)
            .filter(|cell| !cell.visited)
            .map(|cell| cell.position());

        let outcome = match target {
            Some(next) => {
                self.maze.carve(current, direction);
                self.maze.mark_visited(next);
                self.stack.push(next);
                self.cursor.try_move(direction, self.maze);

                self.stats.carves += 1;
                self.last_carved = Some((current, next));
                trace!("carved {} -> {} ({:?})", current, next, direction);

                StepOutcome::Carved {
                    from: current,
                    to: next,
                }
            }
            None => {
                self.stats.stalled += 1;
                trace!(
                    "stalled at {} picking {:?}, stack depth {}",
                    current,
                    direction,
                    self.stack.len()
                );

                StepOutcome::Stalled
            }
        };

        if self.stack.is_empty() {
            self.finish();
            return StepOutcome::Finished;
        }

        outcome
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod test_backtracker {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use std::collections::{HashSet, VecDeque};

    fn seeded<'a>(maze: &'a mut Maze, seed: u64) -> Backtracker<'a> {
        Backtracker::with_rng(maze, Position::new(0, 0), StdRng::seed_from_u64(seed)).unwrap()
    }

    fn run(size: usize, seed: u64) -> (Maze, GenerationStats) {
        let mut maze = Maze::new(size).unwrap();
        let stats = {
            let mut generator = seeded(&mut maze, seed);
            generator.generate_maze();
            generator.stats()
        };
        (maze, stats)
    }

    fn assert_walls_symmetric(maze: &Maze) {
        for cell in maze.cells() {
            for dir in Direction::ALL.iter() {
                match maze.neighbor(cell.position(), *dir) {
                    Some(other) => assert_eq!(
                        cell.has_wall(*dir),
                        other.has_wall(dir.opposite()),
                        "wall mismatch between {} and {}",
                        cell.position(),
                        other.position()
                    ),
                    None => assert!(cell.has_wall(*dir), "edge wall removed at {}", cell.position()),
                }
            }
        }
    }

    fn reachable_from_origin(maze: &Maze) -> usize {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(Position::new(0, 0));
        queue.push_back(Position::new(0, 0));

        while let Some(pos) = queue.pop_front() {
            let cell = maze.cell(pos).unwrap();
            for dir in cell.open_sides() {
                if let Some(next) = pos.step(dir, maze.size()) {
                    if seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        seen.len()
    }

    #[test]
    fn single_cell_finishes_after_one_step() {
        let mut maze = Maze::new(1).unwrap();
        let mut generator = seeded(&mut maze, 1);
        assert!(!generator.is_done());
        assert_eq!(generator.stack_depth(), 1);

        assert_eq!(generator.step(), StepOutcome::Finished);
        assert!(generator.is_done());
        assert_eq!(generator.stats().steps, 1);
        assert_eq!(generator.stats().carves, 0);
        assert_eq!(generator.maze().open_edge_count(), 0);
        assert_eq!(generator.maze().visited_count(), 1);
    }

    #[test]
    fn two_by_two_opens_three_edges() {
        for seed in 0..20 {
            let (maze, stats) = run(2, seed);
            assert_eq!(maze.open_edge_count(), 3);
            assert_eq!(maze.visited_count(), 4);
            assert_eq!(stats.carves, 3);
        }
    }

    #[test]
    fn produces_spanning_trees() {
        for size in 1..=12 {
            for seed in 0..4 {
                let (maze, stats) = run(size, seed);
                assert_eq!(maze.open_edge_count(), size * size - 1, "size {}", size);
                assert_eq!(reachable_from_origin(&maze), size * size, "size {}", size);
                assert_eq!(maze.visited_count(), size * size);
                assert_eq!(stats.carves, size * size - 1);
                assert_eq!(stats.steps, stats.carves + stats.stalled);
                assert_walls_symmetric(&maze);
            }
        }
    }

    #[test]
    fn invariants_hold_at_every_step() {
        let mut maze = Maze::new(6).unwrap();
        let mut generator = seeded(&mut maze, 42);
        let mut visited = generator.maze().visited_count();
        assert_eq!(visited, 1);

        while !generator.is_done() {
            let outcome = generator.step();
            let maze = generator.maze();
            assert_walls_symmetric(maze);

            let now = maze.visited_count();
            assert!(now >= visited);
            match outcome {
                StepOutcome::Carved { from, to } => {
                    assert_eq!(now, visited + 1);
                    assert_eq!(generator.last_carved(), Some((from, to)));
                    assert_eq!(generator.cursor().position(), to);
                }
                _ => assert_eq!(now, visited),
            }
            visited = now;

            for pos in generator.stack.iter() {
                assert!(maze.cell(*pos).unwrap().visited);
            }
        }

        assert_eq!(visited, 36);
    }

    #[test]
    fn same_seed_same_maze() {
        let (one, one_stats) = run(10, 99999);
        let (two, two_stats) = run(10, 99999);
        assert_eq!(one, two);
        assert_eq!(one_stats, two_stats);
    }

    #[test]
    fn different_seeds_differ() {
        let (one, _) = run(10, 11111);
        let (two, _) = run(10, 22222);
        assert_ne!(one, two);
    }

    #[test]
    fn step_after_done_changes_nothing() {
        let mut maze = Maze::new(5).unwrap();
        let mut generator = seeded(&mut maze, 3);
        generator.generate_maze();

        let snapshot = generator.maze().clone();
        let stats = generator.stats();
        for _ in 0..10 {
            assert_eq!(generator.step(), StepOutcome::Finished);
            assert!(generator.is_done());
        }
        assert_eq!(generator.maze(), &snapshot);
        assert_eq!(generator.stats(), stats);
    }

    #[test]
    fn wasted_pick_keeps_cell_on_stack() {
        // an all-zero rng always picks north
        let mut maze = Maze::new(3).unwrap();
        let mut generator =
            Backtracker::with_rng(&mut maze, Position::new(0, 1), StepRng::new(0, 0)).unwrap();

        assert_eq!(generator.step(), StepOutcome::Stalled);
        assert_eq!(generator.stack_depth(), 1);
        assert_eq!(generator.last_carved(), None);
        assert_eq!(generator.cursor().position(), Position::new(0, 1));
        assert_eq!(generator.maze().open_edge_count(), 0);
        assert!(!generator.is_done());
    }

    #[test]
    fn carves_toward_the_picked_direction() {
        let mut maze = Maze::new(3).unwrap();
        let mut generator =
            Backtracker::with_rng(&mut maze, Position::new(2, 1), StepRng::new(0, 0)).unwrap();

        assert_eq!(
            generator.step(),
            StepOutcome::Carved {
                from: Position::new(2, 1),
                to: Position::new(1, 1)
            }
        );
        assert_eq!(
            generator.step(),
            StepOutcome::Carved {
                from: Position::new(1, 1),
                to: Position::new(0, 1)
            }
        );
        assert_eq!(generator.step(), StepOutcome::Stalled);
        assert_eq!(generator.stack_depth(), 3);

        let maze = generator.maze();
        assert!(maze.is_open(Position::new(2, 1), Direction::North).unwrap());
        assert!(maze.is_open(Position::new(1, 1), Direction::South).unwrap());
        assert!(maze.is_open(Position::new(0, 1), Direction::South).unwrap());
        assert_eq!(maze.visited_count(), 3);
    }

    #[test]
    fn other_start_cells_still_span() {
        let mut maze = Maze::new(7).unwrap();
        {
            let config = GeneratorConfig::new(7)
                .with_seed(5)
                .with_start(Position::new(3, 4));
            let mut generator = Backtracker::from_config(&mut maze, &config).unwrap();
            assert!(generator.maze().cell_at(3, 4).unwrap().visited);
            generator.generate_maze();
        }
        assert_eq!(maze.open_edge_count(), 48);
        assert_eq!(reachable_from_origin(&maze), 49);
    }

    #[test]
    fn rejects_config_for_another_size() {
        let mut maze = Maze::new(10).unwrap();
        {
            let config = GeneratorConfig::new(5).with_seed(1);
            let result = Backtracker::from_config(&mut maze, &config);
            assert!(matches!(
                result,
                Err(MazeError::SizeMismatch {
                    expected: 5,
                    actual: 10
                })
            ));
        }
        assert_eq!(maze.visited_count(), 0);
    }

    #[test]
    fn rejects_off_grid_start() {
        let mut maze = Maze::new(3).unwrap();
        {
            let result = Backtracker::with_rng(&mut maze, Position::new(3, 0), StepRng::new(0, 0));
            assert!(matches!(
                result,
                Err(MazeError::OutOfBounds {
                    row: 3,
                    col: 0,
                    size: 3
                })
            ));
        }
        assert_eq!(maze.visited_count(), 0);
    }
}
