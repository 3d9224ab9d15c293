use crate::cell::{Cell, Direction};
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use smallvec::SmallVec;

/// [PathingGrid] stores the raw [bool] cell values that determine whether a cell is blocked
/// ([true]) or open ([false]), laid out row by row. The dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathingGrid {
    rows: usize,
    cols: usize,
    blocked: Vec<bool>,
}

impl PathingGrid {
    /// Creates a `rows × cols` grid where every cell is set to `blocked`.
    ///
    /// # Panics
    /// If either dimension is zero or does not fit a [Cell] coordinate.
    pub fn new(rows: usize, cols: usize, blocked: bool) -> PathingGrid {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        assert!(
            addressable(rows, cols),
            "grid dimensions {rows}x{cols} exceed the cell coordinate range"
        );
        PathingGrid {
            rows,
            cols,
            blocked: vec![blocked; rows * cols],
        }
    }

    /// Builds a grid from rows of blocked flags. Returns [None] if there are no rows, the rows
    /// are empty, they differ in length or there are too many to address.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Option<PathingGrid> {
        let cols = rows.first()?.len();
        if cols == 0 || !addressable(rows.len(), cols) || rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(PathingGrid {
            rows: rows.len(),
            cols,
            blocked: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    fn ix(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols + cell.col as usize
    }

    /// Raw blocked flag of an in-bounds cell.
    ///
    /// # Panics
    /// If `cell` lies outside the grid.
    pub fn get(&self, cell: Cell) -> bool {
        assert!(self.in_bounds(cell), "{cell} is outside the grid");
        self.blocked[self.ix(cell)]
    }

    /// # Panics
    /// If `cell` lies outside the grid.
    pub fn set(&mut self, cell: Cell, blocked: bool) {
        assert!(self.in_bounds(cell), "{cell} is outside the grid");
        let ix = self.ix(cell);
        self.blocked[ix] = blocked;
    }

    /// Out-of-bounds cells are never passable.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.blocked[self.ix(cell)]
    }

    /// Passable orthogonal neighbours in the order up, down, left, right, each paired with the
    /// move that reaches it.
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[(Direction, Cell); N_SMALLVEC_SIZE]> {
        Direction::ALL
            .into_iter()
            .map(|dir| (dir, cell + dir))
            .filter(|&(_, n)| self.is_passable(n))
            .collect()
    }

    pub fn open_cell_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| !b).count()
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows as i32).flat_map(move |r| (0..self.cols as i32).map(move |c| Cell::new(r, c)))
    }
}

/// Whether every cell of a `rows × cols` grid has a [Cell] with `i32` coordinates.
pub fn addressable(rows: usize, cols: usize) -> bool {
    i32::try_from(rows).is_ok() && i32::try_from(cols).is_ok()
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in self.blocked.chunks(self.cols) {
            let values = row.iter().map(|&b| b as i32).collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Neighbours come back in up, down, left, right order with walls and borders filtered out.
    #[test]
    fn neighbour_order() {
        //  ___
        // |   |
        // |  #|
        // |   |
        //  ___
        let mut grid = PathingGrid::new(3, 3, false);
        grid.set(Cell::new(1, 2), true);
        let n = grid.neighbors(Cell::new(1, 1));
        assert_eq!(
            n.as_slice(),
            &[
                (Direction::Up, Cell::new(0, 1)),
                (Direction::Down, Cell::new(2, 1)),
                (Direction::Left, Cell::new(1, 0)),
            ]
        );
        let corner = grid.neighbors(Cell::new(0, 0));
        assert_eq!(
            corner.as_slice(),
            &[
                (Direction::Down, Cell::new(1, 0)),
                (Direction::Right, Cell::new(0, 1)),
            ]
        );
    }

    #[test]
    fn passability() {
        let mut grid = PathingGrid::new(2, 3, false);
        grid.set(Cell::new(0, 1), true);
        assert!(grid.is_passable(Cell::new(0, 0)));
        assert!(!grid.is_passable(Cell::new(0, 1)));
        assert!(!grid.is_passable(Cell::new(-1, 0)));
        assert!(!grid.is_passable(Cell::new(0, 3)));
        assert!(!grid.is_passable(Cell::new(2, 0)));
        assert_eq!(grid.open_cell_count(), 5);
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert!(PathingGrid::from_rows(vec![]).is_none());
        assert!(PathingGrid::from_rows(vec![vec![]]).is_none());
        assert!(PathingGrid::from_rows(vec![vec![false, true], vec![false]]).is_none());
        let grid = PathingGrid::from_rows(vec![vec![false, true], vec![true, false]]).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert!(grid.get(Cell::new(0, 1)));
        assert!(!grid.get(Cell::new(1, 1)));
    }

    #[test]
    fn cells_are_row_major() {
        let grid = PathingGrid::new(2, 2, false);
        let cells = grid.cells().collect::<Vec<_>>();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1)
            ]
        );
    }

    #[test]
    fn display_lists_rows() {
        let mut grid = PathingGrid::new(2, 2, false);
        grid.set(Cell::new(1, 0), true);
        assert_eq!(grid.to_string(), "Grid:\n[0, 0]\n[1, 0]\n");
    }

    #[test]
    fn addressable_dimensions() {
        let max = i32::MAX as usize;
        assert!(addressable(max, max));
        assert!(!addressable(max + 1, 1));
        assert!(!addressable(1, max + 1));
    }

    #[test]
    #[should_panic(expected = "exceed the cell coordinate range")]
    fn new_rejects_oversized_grid() {
        PathingGrid::new(i32::MAX as usize + 1, 1, false);
    }
}
