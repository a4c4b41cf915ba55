//! file: mod.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:03:12 Sunday
//! brief:

mod bounds;
mod controller;
mod direction;
mod error;
mod position;
mod presenter;
mod state;

pub use bounds::GridBounds;
pub use controller::{Motion, MotionController};
pub use direction::Direction;
pub use error::RoombaError;
pub use position::Position;
pub use presenter::{Presenter, TracingPresenter};
pub use state::MotionState;
