//! Loading and validation of maze documents.
//!
//! A maze document is a JSON object of the form
//!
//! ```json
//! { "maze": [[0, 1, 0], [0, 0, 0]], "start": [0, 0], "goal": [1, 2] }
//! ```
//!
//! where `0` marks an open cell and any other value a wall. Coordinates are `[row, column]`.
use crate::cell::Cell;
use crate::pathing_grid::{addressable, PathingGrid};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("could not read maze file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse maze document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("maze has no cells")]
    Empty,

    #[error("maze of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("maze row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid start position, out of maze bounds: {0}")]
    StartOutOfBounds(Cell),

    #[error("Invalid goal position, out of maze bounds: {0}")]
    GoalOutOfBounds(Cell),
}

/// The on-disk form of a maze.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeFile {
    pub maze: Vec<Vec<i64>>,
    pub start: [i32; 2],
    pub goal: [i32; 2],
}

/// A validated search problem: a grid plus in-bounds start and goal cells. Start and goal are
/// always open, whatever the source document says about them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: PathingGrid,
    start: Cell,
    goal: Cell,
}

impl Maze {
    pub fn new(mut grid: PathingGrid, start: Cell, goal: Cell) -> Result<Maze, MazeError> {
        if !grid.in_bounds(start) {
            return Err(MazeError::StartOutOfBounds(start));
        }
        if !grid.in_bounds(goal) {
            return Err(MazeError::GoalOutOfBounds(goal));
        }
        grid.set(start, false);
        grid.set(goal, false);
        Ok(Maze { grid, start, goal })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Maze, MazeError> {
        let path = path.as_ref();
        info!("Loading maze from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Maze::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Maze, MazeError> {
        let file: MazeFile = serde_json::from_str(json)?;
        Maze::try_from(file)
    }

    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }
}

impl TryFrom<MazeFile> for Maze {
    type Error = MazeError;

    fn try_from(file: MazeFile) -> Result<Maze, MazeError> {
        let expected = file.maze.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(MazeError::Empty);
        }
        if !addressable(file.maze.len(), expected) {
            return Err(MazeError::TooLarge {
                rows: file.maze.len(),
                cols: expected,
            });
        }
        if let Some((row, r)) = file
            .maze
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != expected)
        {
            return Err(MazeError::RaggedRow {
                row,
                expected,
                found: r.len(),
            });
        }
        let rows = file
            .maze
            .into_iter()
            .map(|r| r.into_iter().map(|v| v != 0).collect())
            .collect();
        let grid = PathingGrid::from_rows(rows).ok_or(MazeError::Empty)?;
        let [sr, sc] = file.start;
        let [gr, gc] = file.goal;
        Maze::new(grid, Cell::new(sr, sc), Cell::new(gr, gc))
    }
}

impl From<&Maze> for MazeFile {
    fn from(maze: &Maze) -> MazeFile {
        let grid = maze.grid();
        let cells = (0..grid.rows() as i32)
            .map(|r| {
                (0..grid.cols() as i32)
                    .map(|c| grid.get(Cell::new(r, c)) as i64)
                    .collect()
            })
            .collect();
        MazeFile {
            maze: cells,
            start: [maze.start.row, maze.start.col],
            goal: [maze.goal.row, maze.goal.col],
        }
    }
}
