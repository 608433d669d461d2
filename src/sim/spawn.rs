//! Timer-driven hostile spawning
//!
//! One hostile per expiry. The interval shrinks as `base / level`, so the
//! spawn rate grows linearly with the level.

use glam::Vec2;
use rand::Rng;

use super::state::Hostile;
use crate::tuning::Tuning;

/// Countdown to the next hostile
#[derive(Debug, Clone, Default)]
pub struct SpawnDirector {
    /// Seconds until the next spawn
    pub timer: f32,
}

impl SpawnDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds between spawns at `level`
    pub fn interval(tuning: &Tuning, level: u32) -> f32 {
        tuning.base_spawn_interval / level.max(1) as f32
    }

    /// Restart the countdown for a fresh run at `level`
    pub fn reset(&mut self, level: u32, tuning: &Tuning) {
        self.timer = Self::interval(tuning, level);
    }

    /// Count down by `dt`; returns true (and rearms) when a spawn is due
    pub fn update(&mut self, dt: f32, level: u32, tuning: &Tuning) -> bool {
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.timer = Self::interval(tuning, level);
            true
        } else {
            false
        }
    }
}

/// A new hostile just above the playable area, fully inside it horizontally
pub fn spawn_hostile<R: Rng>(rng: &mut R, tuning: &Tuning, texture: Vec2, speed: f32) -> Hostile {
    let area = tuning.play_area();
    let size = texture * tuning.hostile_scale;
    let min_x = area.left();
    let max_x = (area.right() - size.x).max(min_x);
    let x = rng.random_range(min_x..=max_x);
    let y = area.top() - size.y;
    Hostile::new(
        Vec2::new(x, y),
        Vec2::new(0.0, speed),
        texture,
        tuning.hostile_scale,
    )
}
