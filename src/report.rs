//! Text output: the maze with an optional path overlay and the statistics of a timed run.
use crate::maze::Maze;
use crate::search::{Path, SearchOutcome};
use crate::solver::GridSolver;
use core::fmt;
use log::info;
use std::time::{Duration, Instant};

/// Renders a maze, three characters per cell: ` 1 ` wall, ` S ` start, ` G ` goal, ` * ` path
/// and ` 0 ` open. Ends with a blank line.
pub struct MazeView<'a> {
    maze: &'a Maze,
    path: Option<&'a Path>,
}

impl<'a> MazeView<'a> {
    pub fn new(maze: &'a Maze) -> MazeView<'a> {
        MazeView { maze, path: None }
    }

    pub fn with_path(maze: &'a Maze, path: Option<&'a Path>) -> MazeView<'a> {
        MazeView { maze, path }
    }
}

impl fmt::Display for MazeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let grid = self.maze.grid();
        for cell in grid.cells() {
            let symbol = if !grid.is_passable(cell) {
                " 1 "
            } else if cell == self.maze.start() {
                " S "
            } else if cell == self.maze.goal() {
                " G "
            } else if self.path.is_some_and(|p| p.contains(&cell)) {
                " * "
            } else {
                " 0 "
            };
            f.write_str(symbol)?;
            if cell.col as usize == grid.cols() - 1 {
                writeln!(f)?;
            }
        }
        writeln!(f)
    }
}

/// Outcome of a single run together with its wall-clock time.
pub struct Report {
    pub outcome: SearchOutcome,
    pub runtime: Duration,
}

impl Report {
    /// Solves `maze` with `solver` and times the search.
    pub fn run<S: GridSolver>(solver: &S, maze: &Maze) -> Report {
        let start_time = Instant::now();
        let outcome = solver.solve(maze);
        let runtime = start_time.elapsed();
        info!(
            "{} finished in {:?}: solved = {}, explored = {}",
            solver.name(),
            runtime,
            outcome.is_solved(),
            outcome.explored()
        );
        Report { outcome, runtime }
    }

    /// Peak search memory in megabytes, estimated from the sizes of the arena, frontier and
    /// closed set rather than measured.
    pub fn peak_megabytes(&self) -> f64 {
        self.outcome.stats().peak_bytes as f64 / 1e6
    }

    /// Prints the statistics and, when a path was found, the maze with the path drawn in.
    pub fn display<'a>(&'a self, maze: &'a Maze) -> ReportView<'a> {
        ReportView { report: self, maze }
    }
}

pub struct ReportView<'a> {
    report: &'a Report,
    maze: &'a Maze,
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = self.report;
        let stats = report.outcome.stats();
        match report.outcome.path() {
            Some(path) => {
                writeln!(f, "Solution found.")?;
                writeln!(f, "States Explored: {}", stats.explored)?;
                writeln!(f, "Path Length: {}", path.edge_count())?;
            }
            None => {
                writeln!(f, "No solution exists for the maze.")?;
                writeln!(f, "States Explored: {}", stats.explored)?;
            }
        }
        writeln!(f, "Runtime: {:.8} seconds", report.runtime.as_secs_f64())?;
        writeln!(
            f,
            "Memory Usage: Peak ≈ {:.4} MB (estimated search state); Peak Frontier = {} nodes",
            report.peak_megabytes(),
            stats.peak_frontier
        )?;
        if let Some(path) = report.outcome.path() {
            writeln!(f, "Solution:")?;
            writeln!(f)?;
            write!(f, "{}", MazeView::with_path(self.maze, Some(path)))?;
        }
        Ok(())
    }
}
