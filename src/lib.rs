//! file: lib.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:02:41 Sunday
//! brief: grid cursor that turns clockwise at walls

pub mod roomba;

pub use roomba::{
    Direction, GridBounds, Motion, MotionController, MotionState, Position, Presenter,
    RoombaError, TracingPresenter,
};
