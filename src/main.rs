use anyhow::{Context, Result};
use clap::Parser;
use grid_search::maze::Maze;
use grid_search::report::{MazeView, Report};
use grid_search::solver::{astar::AstarSolver, dfs::DfsSolver, Algorithm};
use std::path::PathBuf;

/// Solve a JSON maze with depth-first search or A*
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search algorithm
    #[arg(value_enum, ignore_case = true)]
    algorithm: Algorithm,

    /// Maze file: {"maze": [[0, 1, ...], ...], "start": [row, col], "goal": [row, col]}
    maze: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let maze = Maze::load(&args.maze)
        .with_context(|| format!("could not load maze from '{}'", args.maze.display()))?;
    println!("Maze:");
    println!();
    print!("{}", MazeView::new(&maze));
    println!("Solving...");
    let report = match args.algorithm {
        Algorithm::DepthFirst => Report::run(&DfsSolver, &maze),
        Algorithm::Astar => Report::run(&AstarSolver::new(), &maze),
    };
    print!("{}", report.display(&maze));
    Ok(())
}
