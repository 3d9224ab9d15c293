use core::fmt;
use core::ops::Add;

/// A grid coordinate given as (row, column). Rows grow downwards and columns grow to the right,
/// matching the order in which a maze is written down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to `other`.
    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The direction of a single orthogonal step from `self` to `other`, if they are adjacent.
    pub fn dir_to(&self, other: &Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| *self + dir == *other)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The action label of a single move on a 4-connected grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in expansion order. Neighbour generation follows this order, so it
    /// determines tie-breaking in both solvers.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Offset as (row, column).
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;
    fn add(self, dir: Direction) -> Cell {
        let (dr, dc) = dir.delta();
        Cell::new(self.row + dr, self.col + dc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Cell::new(0, 0);
        let b = Cell::new(2, -3);
        assert_eq!(a.manhattan_distance(&b), 5);
        assert_eq!(b.manhattan_distance(&a), 5);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn step_directions() {
        let c = Cell::new(3, 3);
        assert_eq!(c + Direction::Up, Cell::new(2, 3));
        assert_eq!(c + Direction::Down, Cell::new(4, 3));
        assert_eq!(c + Direction::Left, Cell::new(3, 2));
        assert_eq!(c + Direction::Right, Cell::new(3, 4));
        assert_eq!(c.dir_to(&Cell::new(3, 4)), Some(Direction::Right));
        assert_eq!(c.dir_to(&Cell::new(4, 4)), None);
        assert_eq!(c.dir_to(&c), None);
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}
