//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and session state. It has **no
//! dependencies** on UI, terminals or I/O, making it:
//!
//! - **Deterministic**: the piece source is injected, so a seed (or a fixed
//!   sequence) reproduces a whole session
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: any driver that can call a method on a timer can host it
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with row clearing
//! - [`config`]: immutable scoring/speed policy for a session
//! - [`game_state`]: the board engine (movement, rotation, gravity, locking)
//! - [`pieces`]: tetromino patterns and clockwise matrix rotation
//! - [`rng`]: injected piece identity sources
//! - [`scoring`]: line clear points, levels and gravity intervals
//! - [`snapshot`]: copied, renderer-facing view of a session
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each spawn draws one of 7 identities uniformly
//! - **Plain rotation**: clockwise only, no wall kicks; a rotation that
//!   doesn't fit is rejected
//! - **Immediate lock**: a piece locks on the first gravity step it cannot
//!   fall
//! - **Scoring**: 100/300/500/800 per 1-4 rows, multiplied by the level
//! - **Levels**: start at 1, +1 every 10 lines; gravity speeds up to a floor
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, StepOutcome};
//! use blockfall_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! assert_eq!(game.gravity_step(), StepOutcome::Fell);
//!
//! assert!(game.apply_action(GameAction::HardDrop));
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! The engine never reads a clock. The driver calls
//! [`GameState::gravity_step`](game_state::GameState::gravity_step) once per
//! [`GameState::drop_interval`](game_state::GameState::drop_interval) and
//! re-reads the interval afterwards, since it shrinks as the level rises.

pub mod board;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Grid};
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameState, LockEvent, SessionState, StepOutcome};
pub use pieces::{MinoOffset, Pattern, PatternError, Tetromino};
pub use rng::{PieceSource, SequenceSource, UniformSource};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_points};
pub use snapshot::GameSnapshot;
