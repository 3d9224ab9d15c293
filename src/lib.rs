//! # grid_search
//!
//! Uninformed and heuristic search on a 4-connected occupancy grid. A single search loop is
//! shared by two strategies that differ only in their frontier and expansion rule:
//!
//! - [DfsSolver](solver::dfs::DfsSolver): depth-first search on a stack. Finds some path, not
//!   necessarily a short one.
//! - [AstarSolver](solver::astar::AstarSolver): [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//!   with the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as
//!   heuristic. Finds a shortest path, since every move has the same cost.
//!
//! Both report how many states were expanded along the way, and [report] renders the result in
//! the same text format the command line tool prints.
//!
//! ```
//! use grid_search::maze::Maze;
//! use grid_search::solver::{astar::AstarSolver, GridSolver};
//!
//! let maze = Maze::from_json(r#"{"maze": [[0, 0], [1, 0]], "start": [0, 0], "goal": [1, 1]}"#)
//!     .unwrap();
//! let outcome = AstarSolver::new().solve(&maze);
//! assert_eq!(outcome.path().unwrap().edge_count(), 2);
//! ```
pub mod cell;
pub mod frontier;
pub mod maze;
pub mod pathing_grid;
pub mod report;
pub mod search;
pub mod solver;

pub use cell::{Cell, Direction};
pub use maze::{Maze, MazeError};
pub use pathing_grid::PathingGrid;
pub use search::{Path, SearchOutcome, SearchStats};

/// Cost of a single orthogonal move.
pub const EDGE_COST: u32 = 1;
/// Inline capacity for neighbour lists; a cell has at most four neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
