//! Score thresholds, level-ups and the win condition
//!
//! Threshold at level L is `base_threshold * L^2`. Crossing it subtracts the
//! threshold (the remainder carries over) and either levels up or, at the top
//! level, wins the game. At most one level-up happens per tick.

use super::state::{GameEvent, Session};
use crate::tuning::Tuning;

/// Result of the per-tick progression check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelCheck {
    /// Threshold not reached
    Unchanged,
    /// Advanced to the contained level
    LevelUp(u32),
    /// Cleared the last level
    Victory,
}

pub fn threshold_for_level(tuning: &Tuning, level: u32) -> u64 {
    let level = level as u64;
    tuning.base_threshold * level * level
}

/// Hostile speed after levelling from 1 up to `level`
pub fn enemy_speed_for_level(tuning: &Tuning, level: u32) -> f32 {
    tuning.enemy_base_speed * tuning.enemy_speed_growth.powi(level.saturating_sub(1) as i32)
}

/// Gun level tracks the current level up to the gun's cap
pub fn gun_level_for(tuning: &Tuning, level: u32) -> u32 {
    level.clamp(1, tuning.max_gun_level)
}

/// Apply at most one level-up (or the win) if the score allows it
pub fn check_level_up(session: &mut Session, tuning: &Tuning) -> LevelCheck {
    if session.score < session.threshold {
        return LevelCheck::Unchanged;
    }

    session.score -= session.threshold;
    if session.level >= tuning.max_level {
        log::info!("Cleared final level {}", session.level);
        return LevelCheck::Victory;
    }

    session.level += 1;
    session.threshold = threshold_for_level(tuning, session.level);
    session.enemy_speed *= tuning.enemy_speed_growth;
    session.gun_level = gun_level_for(tuning, session.level);
    session.events.push(GameEvent::LevelUp {
        level: session.level,
    });
    log::info!(
        "Level up -> {} (next at {}, enemy speed {:.1})",
        session.level,
        session.threshold,
        session.enemy_speed
    );
    LevelCheck::LevelUp(session.level)
}
