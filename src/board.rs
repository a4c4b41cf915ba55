//! file: board.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:40:26 Sunday
//! brief: gpui view over a MotionController

use gpui::{
    App, ClickEvent, Context, FocusHandle, Focusable, Render, SharedString, Window, actions, div,
    prelude::*, px, rgb,
};
use gpui_roomba::{Direction, GridBounds, MotionController, Position, Presenter};

use crate::config::Config;

actions!(roomba, [TurnRight, MoveForward, QuitRoomba]);

/// What the board draws for the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorSprite {
    pub cell: Position,
    pub facing: Direction,
}

/// Presenter that keeps the sprite in sync and flags the view for repaint.
#[derive(Debug, Default)]
pub struct BoardPresenter {
    sprite: CursorSprite,
    dirty: bool,
}

impl BoardPresenter {
    pub fn sprite(&self) -> CursorSprite {
        self.sprite
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Presenter for BoardPresenter {
    fn on_direction_changed(&mut self, direction: Direction) {
        self.sprite.facing = direction;
        self.dirty = true;
    }

    fn on_position_changed(&mut self, position: Position) {
        self.sprite.cell = position;
        self.dirty = true;
    }
}

pub struct RoombaBoard {
    controller: MotionController<BoardPresenter>,
    focus_handle: FocusHandle,
    cell_px: f32,
    cursor_label: Option<SharedString>,
}

impl RoombaBoard {
    pub fn new(bounds: GridBounds, config: &Config, cx: &mut Context<Self>) -> Self {
        Self {
            controller: MotionController::new(bounds, BoardPresenter::default()),
            focus_handle: cx.focus_handle(),
            cell_px: config.cell_size,
            cursor_label: config.cursor.clone().map(SharedString::from),
        }
    }

    fn handle_turn(&mut self, cx: &mut Context<Self>) {
        self.controller.turn();
        self.repaint_if_dirty(cx);
    }

    fn handle_advance(&mut self, cx: &mut Context<Self>) {
        self.controller.advance();
        self.repaint_if_dirty(cx);
    }

    fn repaint_if_dirty(&mut self, cx: &mut Context<Self>) {
        if self.controller.presenter_mut().take_dirty() {
            cx.notify();
        }
    }

    fn cursor_text(&self, facing: Direction) -> SharedString {
        match &self.cursor_label {
            Some(label) => label.clone(),
            None => SharedString::from(facing.glyph()),
        }
    }
}

impl Render for RoombaBoard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let bounds = self.controller.bounds();
        let sprite = self.controller.presenter().sprite();
        let cursor_text = self.cursor_text(sprite.facing);
        let cell_size = px(self.cell_px);

        let grid = div()
            .flex()
            .flex_col()
            .gap_1()
            .children((0..bounds.height()).map(|row| {
                div()
                    .flex()
                    .gap_1()
                    .children((0..bounds.width()).map(|col| {
                        let cell = div()
                            .w(cell_size)
                            .h(cell_size)
                            .rounded_sm()
                            .flex()
                            .items_center()
                            .justify_center();
                        if Position::new(col, row) == sprite.cell {
                            cell.bg(rgb(0x10b981))
                                .text_color(rgb(0x022c22))
                                .child(cursor_text.clone())
                        } else {
                            cell.bg(rgb(0x1e293b))
                        }
                    }))
            }));

        let status = format!(
            "Position {}  facing {}  cell #{}",
            sprite.cell,
            sprite.facing,
            sprite.cell.cell_index(bounds)
        );

        div()
            .bg(rgb(0x020617))
            .text_color(rgb(0xf8fafc))
            .size_full()
            .p_5()
            .gap_4()
            .flex()
            .flex_col()
            .track_focus(&self.focus_handle(cx))
            .key_context("gpui-roomba")
            .on_action(cx.listener(|this, _: &TurnRight, _, cx| this.handle_turn(cx)))
            .on_action(cx.listener(|this, _: &MoveForward, _, cx| this.handle_advance(cx)))
            .child(div().text_xl().child(status))
            .child(
                div()
                    .p_4()
                    .rounded_2xl()
                    .bg(rgb(0x111827))
                    .child(grid),
            )
            .child(
                div()
                    .flex()
                    .gap_3()
                    .text_sm()
                    .child(
                        control_button("turn-right", "Turn right")
                            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                this.handle_turn(cx)
                            })),
                    )
                    .child(
                        control_button("move-forward", "Move forward")
                            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                this.handle_advance(cx)
                            })),
                    ),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(0x94a3b8))
                    .child("R / Right to turn, F / Up / Space to move, Esc to quit"),
            )
    }
}

impl Focusable for RoombaBoard {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

fn control_button(id: &'static str, label: &'static str) -> gpui::Stateful<gpui::Div> {
    div()
        .id(id)
        .px_3()
        .py_2()
        .rounded_md()
        .bg(rgb(0x1e293b))
        .cursor_pointer()
        .child(label)
}

#[cfg(test)]
mod tests {
    use gpui_roomba::Motion;

    use super::*;

    fn board_controller(width: i32, height: i32) -> MotionController<BoardPresenter> {
        let bounds = GridBounds::new(width, height).unwrap();
        MotionController::new(bounds, BoardPresenter::default())
    }

    #[test]
    fn sprite_tracks_controller() {
        let mut controller = board_controller(4, 4);
        for _ in 0..7 {
            controller.advance();
            let sprite = controller.presenter().sprite();
            assert_eq!(sprite.cell, controller.position());
            assert_eq!(sprite.facing, controller.direction());
        }
    }

    #[test]
    fn dirty_flag_is_consumed_once() {
        let mut controller = board_controller(2, 2);
        assert!(!controller.presenter_mut().take_dirty());

        assert_eq!(controller.advance(), Motion::Turned(Direction::Right));
        assert!(controller.presenter_mut().take_dirty());
        assert!(!controller.presenter_mut().take_dirty());

        controller.turn();
        assert!(controller.presenter_mut().take_dirty());
    }
}
