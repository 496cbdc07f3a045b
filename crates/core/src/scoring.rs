//! Scoring module - line clear points, levels and gravity speed
//!
//! - Points: `line_scores[rows] * level`
//! - Level: `1 + lines / lines_per_level`
//! - Gravity: `base - (level - 1) * step`, clamped at the configured floor

use crate::config::GameConfig;

/// Points for clearing `lines` rows at `level`.
///
/// More than four rows in one lock (only possible on a hand-built board)
/// scores as four.
pub fn line_clear_points(config: &GameConfig, lines: usize, level: u32) -> u32 {
    let base = config.line_scores[lines.min(config.line_scores.len() - 1)];
    base.saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines (starts at 1)
pub fn level_for_lines(config: &GameConfig, total_lines: u32) -> u32 {
    1 + total_lines / config.lines_per_level.max(1)
}

/// Gravity interval for a level, in milliseconds
pub fn drop_interval_ms(config: &GameConfig, level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(config.drop_step_ms);
    config
        .base_drop_ms
        .saturating_sub(speedup)
        .max(config.min_drop_ms)
        .max(1)
}
