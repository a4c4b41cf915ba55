//! file: app.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:52:09 Sunday
//! brief:

use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, WindowBounds, WindowOptions, px,
    size,
};
use gpui_roomba::GridBounds;
use tracing::error;

use crate::board::{MoveForward, QuitRoomba, RoombaBoard, TurnRight};
use crate::config::Config;

const CHROME_PX: f32 = 260.0;

pub fn run(grid: GridBounds, config: Config) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("r", TurnRight, None),
            KeyBinding::new("right", TurnRight, None),
            KeyBinding::new("f", MoveForward, None),
            KeyBinding::new("up", MoveForward, None),
            KeyBinding::new("space", MoveForward, None),
            KeyBinding::new("escape", QuitRoomba, None),
        ]);

        let (width, height) = window_size(grid, &config);
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let window = match cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |_, cx| cx.new(|cx| RoombaBoard::new(grid, &config, cx)),
        ) {
            Ok(window) => window,
            Err(err) => {
                error!(error = %err, "failed to open window");
                cx.quit();
                return;
            }
        };

        if let Err(err) = window.update(cx, |view: &mut RoombaBoard, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
        }) {
            error!(error = %err, "failed to focus board");
        }

        cx.on_action(|_: &QuitRoomba, cx| cx.quit());
        cx.activate(true);
    });
}

/// Window large enough for the grid plus the status line and buttons.
fn window_size(grid: GridBounds, config: &Config) -> (f32, f32) {
    let cell = config.cell_size + 4.0;
    let width = (grid.width() as f32 * cell + 80.0).max(480.0);
    let height = grid.height() as f32 * cell + CHROME_PX;
    (width, height)
}
