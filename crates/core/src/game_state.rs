//! Game state module - the board engine
//!
//! Owns the grid, the falling piece and the next piece, and applies every
//! state transition: player intents, gravity steps, locking, line clears,
//! scoring and level progression. A session is either running or over; once
//! over it ignores all input and a new session must be built.

use std::time::Duration;

use log::{debug, info, trace};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::pieces::Tetromino;
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_points};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, PieceKind};

/// Session lifecycle. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    GameOver,
}

/// What a gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece locked and the next piece was promoted (possibly ending the game)
    Locked,
    /// The session is over; nothing changed
    Halted,
}

/// Summary of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    pub level_up: bool,
    /// Piece cells discarded because they were above row 0
    pub hidden_cells: u8,
    /// The promoted piece could not be placed
    pub game_over: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource> {
    config: GameConfig,
    board: Board,
    current: Tetromino,
    next: Tetromino,
    source: S,
    state: SessionState,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<UniformSource> {
    /// Default rules with uniformly random pieces from a seeded generator
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::default(), UniformSource::from_seed(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Start a session with explicit rules and piece source
    pub fn with_source(config: GameConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, source))
    }

    fn build(config: GameConfig, mut source: S) -> Self {
        let current = Tetromino::spawn_from(&mut source);
        let next = Tetromino::spawn_from(&mut source);
        let level = level_for_lines(&config, 0);

        debug!(
            "new session: current {:?}, next {:?}",
            current.kind, next.kind
        );

        Self {
            config,
            board: Board::new(),
            current,
            next,
            source,
            state: SessionState::Running,
            score: 0,
            level,
            lines: 0,
            drop_interval_ms: drop_interval_ms(&config, level),
            last_event: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Tetromino {
        &self.current
    }

    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval. Re-read after every step; it shrinks with level.
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_interval(&self) -> Duration {
        Duration::from_millis(self.drop_interval_ms as u64)
    }

    /// Whether `piece` fits after moving by (dx, dy).
    ///
    /// Side walls and the floor reject; rows above the grid are allowed;
    /// inside the grid every target cell must be empty.
    /// Targets outside the `i8` coordinate range are rejected.
    pub fn valid_move(&self, piece: &Tetromino, dx: i8, dy: i8) -> bool {
        piece
            .cells()
            .all(|(x, y)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(x), Some(y)) => self.board.is_open(x, y),
                _ => false,
            })
    }

    /// Translate the current piece if the target position is valid
    pub fn apply_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over() || !self.valid_move(&self.current, dx, dy) {
            return false;
        }
        self.current = self.current.translated(dx, dy);
        true
    }

    /// Rotate the current piece clockwise in place; rejected rotations leave it untouched
    pub fn attempt_rotate(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        let candidate = self.current.rotated();
        if !self.valid_move(&candidate, 0, 0) {
            return false;
        }
        self.current = candidate;
        true
    }

    /// One gravity tick: fall one row, or lock and bring in the next piece
    pub fn gravity_step(&mut self) -> StepOutcome {
        if self.game_over() {
            return StepOutcome::Halted;
        }
        if self.apply_move(0, 1) {
            return StepOutcome::Fell;
        }
        self.lock_current();
        StepOutcome::Locked
    }

    /// Drop the current piece as far as it goes and lock it immediately
    pub fn hard_drop(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        while self.apply_move(0, 1) {}
        self.lock_current();
        true
    }

    /// Apply a player intent
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.apply_move(-1, 0),
            GameAction::MoveRight => self.apply_move(1, 0),
            GameAction::SoftDrop => self.apply_move(0, 1),
            GameAction::Rotate => self.attempt_rotate(),
            GameAction::HardDrop => self.hard_drop(),
        }
    }

    /// Merge the current piece into the grid, clear rows, score, then promote
    /// the next piece.
    fn lock_current(&mut self) {
        let piece = self.current;
        let hidden_cells =
            self.board
                .lock_pattern(&piece.pattern, piece.x, piece.y, piece.color());

        let cleared_rows = self.board.clear_full_rows();
        let lines_cleared = cleared_rows.len();

        // Points use the level in effect before this clear.
        let points = line_clear_points(&self.config, lines_cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared as u32);

        let previous_level = self.level;
        self.level = level_for_lines(&self.config, self.lines);
        self.drop_interval_ms = drop_interval_ms(&self.config, self.level);
        let level_up = self.level != previous_level;

        debug!(
            "locked {:?} at ({}, {}): rows {:?}, +{} points",
            piece.kind,
            piece.x,
            piece.y,
            cleared_rows.as_slice(),
            points
        );
        if level_up {
            info!(
                "level {} reached, drop interval {}ms",
                self.level, self.drop_interval_ms
            );
        }

        let spawned = self.spawn_next();

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: lines_cleared as u32,
            points,
            level_up,
            hidden_cells,
            game_over: !spawned,
        });
    }

    /// Promote the next piece and draw a new one. Sets game over when the
    /// promoted piece does not fit where it spawns.
    pub(crate) fn spawn_next(&mut self) -> bool {
        let fresh = Tetromino::spawn_from(&mut self.source);
        self.current = std::mem::replace(&mut self.next, fresh);

        if !self.valid_move(&self.current, 0, 0) {
            trace!(
                "spawn of {:?} at ({}, {}) is blocked",
                self.current.kind,
                self.current.x,
                self.current.y
            );
            self.state = SessionState::GameOver;
            info!(
                "game over: score {}, level {}, lines {}",
                self.score, self.level, self.lines
            );
            return false;
        }
        true
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Row the current piece would lock at if hard-dropped now
    pub fn ghost_y(&self) -> i8 {
        let mut ghost = self.current;
        while self.valid_move(&ghost, 0, 1) {
            ghost.y += 1;
        }
        ghost.y
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.grid);
        out.current = self.current;
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.game_over = self.game_over();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
