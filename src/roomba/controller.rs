//! file: controller.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:14:03 Sunday
//! brief:

use tracing::{debug, trace};

use super::{Direction, GridBounds, MotionState, Position, Presenter};

/// The single change produced by `MotionController::advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Moved(Position),
    Turned(Direction),
}

/// Moves a cursor over a fixed grid, turning clockwise at walls.
///
/// Starts at the top-left cell facing up. Every call to [`turn`](Self::turn)
/// or [`advance`](Self::advance) notifies the presenter exactly once.
pub struct MotionController<P: Presenter> {
    state: MotionState,
    presenter: P,
}

impl<P: Presenter> MotionController<P> {
    pub fn new(bounds: GridBounds, presenter: P) -> Self {
        Self {
            state: MotionState::new(bounds),
            presenter,
        }
    }

    pub fn turn(&mut self) -> Direction {
        let direction = self.state.direction.clockwise();
        self.state.direction = direction;
        debug!(%direction, "turn");
        self.presenter.on_direction_changed(direction);
        direction
    }

    /// Steps forward, or turns in place when facing a wall.
    pub fn advance(&mut self) -> Motion {
        if !self.state.can_advance() {
            trace!(position = %self.state.position, direction = %self.state.direction, "blocked");
            return Motion::Turned(self.turn());
        }

        let position = self.state.position.offset(self.state.direction);
        debug_assert!(self.state.bounds.contains(position));
        self.state.position = position;
        debug!(%position, "advance");
        self.presenter.on_position_changed(position);
        Motion::Moved(position)
    }

    pub fn position(&self) -> Position {
        self.state.position
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn bounds(&self) -> GridBounds {
        self.state.bounds
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
