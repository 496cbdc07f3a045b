//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the engine, the input mapper and
//! the terminal renderer alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! Rows above the grid (negative row indices) exist only for a falling piece;
//! nothing is ever stored there.
//!
//! # Default Tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 500 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 40 | Interval reduction per level |
//! | `MIN_DROP_MS` | 100 | Gravity interval floor |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed per level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let kind = PieceKind::try_from(5u8).unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert!(PieceKind::try_from(7u8).is_err());
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

use thiserror::Error;

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Gravity interval at level 1 in milliseconds
pub const BASE_DROP_MS: u32 = 500;

/// Gravity interval reduction per level gained
pub const DROP_STEP_MS: u32 = 40;

/// Gravity interval floor; the interval never drops below this
pub const MIN_DROP_MS: u32 = 100;

/// Number of cleared lines per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear point tiers, indexed by rows cleared in one lock.
///
/// Multiplied by the current level (levels start at 1).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino identities
///
/// The discriminant is the identity index (0-6), which doubles as the
/// piece's color identity:
/// - **I**: red, 1x4 bar
/// - **J**: green
/// - **L**: blue
/// - **O**: yellow, 2x2 square
/// - **S**: cyan
/// - **T**: magenta
/// - **Z**: orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I = 0,
    J = 1,
    L = 2,
    O = 3,
    S = 4,
    T = 5,
    Z = 6,
}

/// Rejected piece identity index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("piece index {0} is out of range (expected 0..=6)")]
pub struct InvalidPieceKind(pub u8);

impl PieceKind {
    /// All identities in index order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Identity index (0-6).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

impl TryFrom<u8> for PieceKind {
    type Error = InvalidPieceKind;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        PieceKind::ALL
            .get(index as usize)
            .copied()
            .ok_or(InvalidPieceKind(index))
    }
}

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(kind)`: filled by a locked piece of that color identity
pub type Cell = Option<PieceKind>;

/// Player intents accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Drop piece as far as it goes and lock it
    HardDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
}

impl GameAction {
    /// Parse action from camelCase (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
        }
    }
}
