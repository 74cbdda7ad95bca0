use anyhow::Context;
use clap::Parser;
use log::info;

use backtrack_maze::config::DEFAULT_SIZE;
use backtrack_maze::solver::{self, PATH};
use backtrack_maze::{Backtracker, GeneratorConfig, Generator, Maze, Position};

/// Headless perfect maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cells along each side
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Random seed, for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 0)]
    start_row: usize,

    #[arg(long, default_value_t = 0)]
    start_col: usize,

    /// Overlay the shortest path from the start cell to the opposite corner
    #[arg(long)]
    solve: bool,

    /// Print step statistics after generation
    #[arg(long)]
    stats: bool,
}

fn render(grid: &[Vec<u8>]) -> String {
    let mut out = String::new();
    for row in grid.iter() {
        for square in row.iter() {
            out.push(match *square {
                0 => '#',
                PATH => '.',
                _ => ' ',
            });
        }
        out.push('\n');
    }
    out
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = GeneratorConfig::new(args.size)
        .with_start(Position::new(args.start_row, args.start_col));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate().context("invalid maze configuration")?;

    let mut maze = Maze::new(config.size).context("failed to build maze")?;
    let stats = {
        let mut generator = Backtracker::from_config(&mut maze, &config)
            .context("failed to start generator")?;
        generator.generate_maze();
        generator.stats()
    };
    info!("generated {}x{} maze", maze.size(), maze.size());

    if args.solve {
        let goal = Position::new(
            maze.size() - 1 - config.start.row,
            maze.size() - 1 - config.start.col,
        );
        let path = solver::shortest_path(&maze, config.start, goal)
            .context("failed to solve maze")?
            .with_context(|| format!("no path from {} to {}", config.start, goal))?;
        print!("{}", render(&solver::path_grid(&maze, &path)));
        println!("path length: {}", path.len());
    } else {
        print!("{}", maze);
    }

    if args.stats {
        println!(
            "steps: {}, carved: {}, stalled: {}",
            stats.steps, stats.carves, stats.stalled
        );
    }

    Ok(())
}
