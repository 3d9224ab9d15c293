use crate::cell::Cell;
use crate::frontier::{Frontier, FrontierEntry};
use crate::maze::Maze;
use crate::pathing_grid::PathingGrid;
use crate::search::{SearchContext, SearchOutcome};
use clap::ValueEnum;
use log::debug;
use std::borrow::Cow;

pub mod astar;
pub mod dfs;

/// A search strategy. The main loop lives in [solve_grid](GridSolver::solve_grid) and is shared
/// by every solver; a solver only picks the frontier type, the heuristic and the rule by which
/// an expanded node's neighbours enter the frontier.
pub trait GridSolver {
    type Frontier: Frontier;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Estimated remaining cost from `cell` to `goal`.
    fn heuristic(&self, cell: &Cell, goal: &Cell) -> u32;

    /// Generates the successors of `current`, which has just been closed.
    fn expand(
        &self,
        ctx: &mut SearchContext<Self::Frontier>,
        grid: &PathingGrid,
        current: FrontierEntry,
        goal: &Cell,
    );

    fn solve(&self, maze: &Maze) -> SearchOutcome {
        self.solve_grid(maze.grid(), maze.start(), maze.goal())
    }

    /// Runs a search from `start` to `goal`. Both endpoints are treated as passable whatever
    /// the grid holds there; an endpoint outside the grid is simply never reached.
    fn solve_grid(&self, grid: &PathingGrid, start: Cell, goal: Cell) -> SearchOutcome {
        debug!("{}: searching from {} to {}", self.name(), start, goal);
        let grid = open_endpoints(grid, start, goal);
        let mut ctx = SearchContext::<Self::Frontier>::new(start, self.heuristic(&start, &goal));
        loop {
            if ctx.frontier_is_empty() {
                let stats = ctx.stats();
                debug!(
                    "{}: frontier exhausted after exploring {} states",
                    self.name(),
                    stats.explored
                );
                return SearchOutcome::Exhausted { stats };
            }
            let current = ctx.next_entry();
            // Superseded by a cheaper entry for the same state that was expanded earlier.
            if ctx.is_closed(&current.state) {
                ctx.discard();
                continue;
            }
            if current.state == goal {
                let path = ctx.reconstruct_path(current.index);
                let stats = ctx.stats();
                debug!(
                    "{}: reached {} in {} moves after exploring {} states",
                    self.name(),
                    goal,
                    path.edge_count(),
                    stats.explored
                );
                return SearchOutcome::Solved { path, stats };
            }
            ctx.close(current.state);
            self.expand(&mut ctx, &grid, current, &goal);
            ctx.record_peaks();
        }
    }
}

/// Borrows `grid` unchanged unless `start` or `goal` is blocked, in which case a copy with both
/// cells cleared is searched instead.
fn open_endpoints(grid: &PathingGrid, start: Cell, goal: Cell) -> Cow<'_, PathingGrid> {
    let blocked = |c: Cell| grid.in_bounds(c) && grid.get(c);
    if !blocked(start) && !blocked(goal) {
        return Cow::Borrowed(grid);
    }
    let mut open = grid.clone();
    for cell in [start, goal] {
        if open.in_bounds(cell) {
            open.set(cell, false);
        }
    }
    Cow::Owned(open)
}

/// Selects a solver at runtime, e.g. from a command line argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Depth-first search, any path.
    #[value(name = "dfs")]
    DepthFirst,
    /// A* with the Manhattan heuristic, a shortest path.
    #[value(name = "astar", alias = "a*")]
    Astar,
}

impl Algorithm {
    pub fn solve(self, maze: &Maze) -> SearchOutcome {
        match self {
            Algorithm::DepthFirst => dfs::DfsSolver.solve(maze),
            Algorithm::Astar => astar::AstarSolver::new().solve(maze),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::solver::{astar::AstarSolver, dfs::DfsSolver};

    #[test]
    fn parse_algorithm() {
        assert_eq!(Algorithm::from_str("dfs", false), Ok(Algorithm::DepthFirst));
        assert_eq!(Algorithm::from_str("AStar", true), Ok(Algorithm::Astar));
        assert_eq!(Algorithm::from_str("a*", false), Ok(Algorithm::Astar));
        assert!(Algorithm::from_str("bfs", true).is_err());
    }

    /// |S G #|: the raw goal cell is blocked but still reachable.
    #[test]
    fn blocked_goal_is_reached() {
        let mut grid = PathingGrid::new(1, 3, false);
        grid.set(Cell::new(0, 2), true);
        let (start, goal) = (Cell::new(0, 0), Cell::new(0, 2));
        let astar = AstarSolver::new().solve_grid(&grid, start, goal);
        let dfs = DfsSolver.solve_grid(&grid, start, goal);
        for outcome in [astar, dfs] {
            let path = outcome.path().unwrap();
            assert_eq!(path.edge_count(), 2);
            assert_eq!(path.goal(), goal);
        }
        // The caller's grid is left untouched.
        assert!(grid.get(goal));
    }

    #[test]
    fn blocked_start_is_left() {
        let mut grid = PathingGrid::new(1, 3, false);
        grid.set(Cell::new(0, 0), true);
        let outcome = AstarSolver::new().solve_grid(&grid, Cell::new(0, 0), Cell::new(0, 2));
        assert_eq!(outcome.path().unwrap().edge_count(), 2);
        assert_eq!(outcome.explored(), 2);
    }

    #[test]
    fn goal_outside_grid_is_exhausted() {
        let grid = PathingGrid::new(2, 2, false);
        let outcome = DfsSolver.solve_grid(&grid, Cell::new(0, 0), Cell::new(5, 5));
        assert!(!outcome.is_solved());
        assert_eq!(outcome.explored(), 4);
    }

    /// Both solvers agree on whether a path exists and on how much of the grid they close when
    /// it does not.
    #[test]
    fn algorithms_agree_on_unsolvable_maze() {
        let maze = Maze::from_json(
            r#"{"maze": [[0, 1, 0], [0, 1, 0]], "start": [0, 0], "goal": [1, 2]}"#,
        )
        .unwrap();
        for algorithm in [Algorithm::DepthFirst, Algorithm::Astar] {
            let outcome = algorithm.solve(&maze);
            assert!(!outcome.is_solved());
            assert_eq!(outcome.explored(), 2);
        }
    }
}
