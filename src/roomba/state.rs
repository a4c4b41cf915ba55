//! file: state.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:09:51 Sunday
//! brief:

use super::{Direction, GridBounds, Position};

/// Snapshot of everything the controller tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionState {
    pub(crate) bounds: GridBounds,
    pub(crate) position: Position,
    pub(crate) direction: Direction,
}

impl MotionState {
    pub(crate) fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            position: Position::ORIGIN,
            direction: Direction::Up,
        }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether one step in the current facing stays on the grid.
    pub fn can_advance(&self) -> bool {
        let Position { col, row } = self.position;
        match self.direction {
            Direction::Right => col < self.bounds.width() - 1,
            Direction::Down => row < self.bounds.height() - 1,
            Direction::Left => col > 0,
            Direction::Up => row > 0,
        }
    }
}
