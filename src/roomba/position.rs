//! file: position.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:06:44 Sunday
//! brief:

use super::{Direction, GridBounds};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub col: i32,
    pub row: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { col: 0, row: 0 };

    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            col: self.col + dx,
            row: self.row + dy,
        }
    }

    /// Row-major index of this cell within `bounds`.
    pub fn cell_index(self, bounds: GridBounds) -> usize {
        self.row as usize * bounds.width() as usize + self.col as usize
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
