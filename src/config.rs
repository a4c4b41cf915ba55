//! file: config.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:31:18 Sunday
//! brief: command-line options

use clap::Parser;
use gpui_roomba::{GridBounds, RoombaError};

const DEFAULT_COLUMNS: i32 = 10;
const DEFAULT_ROWS: i32 = 10;
const DEFAULT_CELL_PX: f32 = 32.0;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "gpui-roomba",
    about = "Drive a cursor around a grid; it turns clockwise at the walls",
    allow_negative_numbers = true
)]
pub struct Config {
    /// Number of columns.
    #[arg(long, env = "ROOMBA_WIDTH", default_value_t = DEFAULT_COLUMNS)]
    pub width: i32,

    /// Number of rows.
    #[arg(long, env = "ROOMBA_HEIGHT", default_value_t = DEFAULT_ROWS)]
    pub height: i32,

    /// Cell edge in pixels.
    #[arg(long, env = "ROOMBA_CELL_SIZE", default_value_t = DEFAULT_CELL_PX)]
    pub cell_size: f32,

    /// Text drawn as the cursor instead of the direction arrow.
    #[arg(long, env = "ROOMBA_CURSOR")]
    pub cursor: Option<String>,
}

impl Config {
    pub fn bounds(&self) -> Result<GridBounds, RoombaError> {
        GridBounds::new(self.width, self.height)
    }
}
