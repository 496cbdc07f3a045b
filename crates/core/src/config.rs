//! Session configuration
//!
//! Tuning that used to be global constants lives in an immutable
//! [`GameConfig`] handed to each session, so independent sessions (and tests)
//! can run side by side with different rules. Grid dimensions stay fixed at
//! `GRID_WIDTH x GRID_HEIGHT`.

use thiserror::Error;

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_DROP_MS};

/// Scoring and speed policy for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Points per lock, indexed by rows cleared (0-4), before the level multiplier
    pub line_scores: [u32; 5],
    /// Cleared lines needed to gain one level
    pub lines_per_level: u32,
    /// Gravity interval at level 1
    pub base_drop_ms: u32,
    /// Interval reduction per level above 1
    pub drop_step_ms: u32,
    /// Interval floor
    pub min_drop_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("line score table must start at 0 and be strictly increasing, got {0:?}")]
    LineScores([u32; 5]),
    #[error("lines per level must be at least 1")]
    LinesPerLevel,
    #[error("minimum drop interval must be at least 1ms")]
    ZeroDropFloor,
    #[error("base drop interval {base}ms is below the floor {floor}ms")]
    BaseBelowFloor { base: u32, floor: u32 },
}

impl GameConfig {
    pub fn with_line_scores(mut self, line_scores: [u32; 5]) -> Self {
        self.line_scores = line_scores;
        self
    }

    pub fn with_lines_per_level(mut self, lines_per_level: u32) -> Self {
        self.lines_per_level = lines_per_level;
        self
    }

    pub fn with_drop_curve(mut self, base_ms: u32, step_ms: u32, min_ms: u32) -> Self {
        self.base_drop_ms = base_ms;
        self.drop_step_ms = step_ms;
        self.min_drop_ms = min_ms;
        self
    }

    /// Check the invariants scoring and gravity rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scores = self.line_scores;
        if scores[0] != 0 || !scores.windows(2).all(|w| w[0] < w[1]) {
            return Err(ConfigError::LineScores(scores));
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::LinesPerLevel);
        }
        if self.min_drop_ms == 0 {
            return Err(ConfigError::ZeroDropFloor);
        }
        if self.base_drop_ms < self.min_drop_ms {
            return Err(ConfigError::BaseBelowFloor {
                base: self.base_drop_ms,
                floor: self.min_drop_ms,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            line_scores: LINE_SCORES,
            lines_per_level: LINES_PER_LEVEL,
            base_drop_ms: BASE_DROP_MS,
            drop_step_ms: DROP_STEP_MS,
            min_drop_ms: MIN_DROP_MS,
        }
    }
}
