//! file: presenter.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:11:27 Sunday
//! brief: observer notified by the controller after every change

use tracing::info;

use super::{Direction, Position};

/// Rendering collaborator injected into a `MotionController`.
///
/// Exactly one callback fires per operation. Implementations read any other
/// state they need through the controller's accessors.
pub trait Presenter {
    fn on_direction_changed(&mut self, direction: Direction);

    fn on_position_changed(&mut self, position: Position);
}

impl Presenter for () {
    fn on_direction_changed(&mut self, _: Direction) {}

    fn on_position_changed(&mut self, _: Position) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn on_direction_changed(&mut self, direction: Direction) {
        (**self).on_direction_changed(direction);
    }

    fn on_position_changed(&mut self, position: Position) {
        (**self).on_position_changed(position);
    }
}

/// Headless presenter that only logs.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingPresenter;

impl Presenter for TracingPresenter {
    fn on_direction_changed(&mut self, direction: Direction) {
        info!(%direction, "cursor turned");
    }

    fn on_position_changed(&mut self, position: Position) {
        info!(%position, "cursor moved");
    }
}
