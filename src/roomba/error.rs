//! file: error.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:04:30 Sunday
//! brief:

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoombaError {
    #[error("invalid grid {width}x{height}: both dimensions must be positive")]
    InvalidConfiguration { width: i32, height: i32 },
}
