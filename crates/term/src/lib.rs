//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! [`core::GameSnapshot`] into a framebuffer that is then flushed to the
//! terminal with `crossterm`.
//!
//! Goals:
//! - Keep `core` free of any terminal concern
//! - Allow precise control over aspect ratio (2 columns per grid cell)
//! - Only send changed cells after the first frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Overlay, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
