//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`KeyCommand`]s: the five engine intents
//! plus the driver-level pause and restart. Nothing here touches game state.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, KeyCommand};
