//! Renderer-facing copy of a session.

use crate::board::Grid;
use crate::pieces::Tetromino;
use crate::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub current: Tetromino,
    /// Row the current piece would lock at after a hard drop
    pub ghost_y: i8,
    pub next: Tetromino,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            current: Tetromino::new(PieceKind::I),
            ghost_y: 0,
            next: Tetromino::new(PieceKind::I),
            game_over: false,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: 0,
        }
    }
}
