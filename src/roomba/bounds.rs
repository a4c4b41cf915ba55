//! file: bounds.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:08:15 Sunday
//! brief:

use super::{Position, RoombaError};

/// Grid dimensions. Both are positive once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridBounds {
    width: i32,
    height: i32,
}

impl GridBounds {
    pub fn new(width: i32, height: i32) -> Result<Self, RoombaError> {
        if width <= 0 || height <= 0 {
            return Err(RoombaError::InvalidConfiguration { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.col) && (0..self.height).contains(&position.row)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
