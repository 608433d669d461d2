//! Data-driven game balance
//!
//! Every number that shapes difficulty lives here so a run can be re-tuned
//! from a JSON file without touching the simulation. Missing fields fall back
//! to the defaults below.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::persistence;
use crate::sim::collision::Rect;

/// Gameplay balance constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen ===
    /// Full screen size in pixels
    pub screen_size: Vec2,
    /// Inset of the playable area from every screen edge
    pub play_margin: f32,

    // === Ship & gun ===
    /// Horizontal ship speed (px/s)
    pub ship_move_speed: f32,
    /// Bullet speed at gun level 1 (px/s)
    pub bullet_base_speed: f32,
    /// Bullet speed gain per gun level above 1 (fraction of base)
    pub bullet_speed_step: f32,
    /// Fire cooldown at gun level 1 (s)
    pub base_cooldown: f32,
    /// Cooldown reduction per gun level above 1 (s)
    pub cooldown_step: f32,
    /// Cooldown never drops below this (s)
    pub min_cooldown: f32,
    /// Highest gun level
    pub max_gun_level: u32,
    /// Muzzle x offset from the ship centre (px)
    pub gun_offset_x: f32,
    /// Recoil display time after a shot (s)
    pub recoil_duration: f32,
    /// Draw offset applied while recoiling
    pub recoil_offset: Vec2,

    // === Hostiles ===
    /// Seconds between spawns at level 1 (divided by the level)
    pub base_spawn_interval: f32,
    /// Hostile descent speed at level 1 (px/s)
    pub enemy_base_speed: f32,
    /// Enemy speed multiplier applied on every level-up
    pub enemy_speed_growth: f32,
    /// Hostile sprite scale
    pub hostile_scale: f32,

    // === Progression ===
    /// Threshold at level L is `base_threshold * L^2`
    pub base_threshold: u64,
    /// Points per kill at level L is `base_points * L`
    pub base_points: u64,
    /// Clearing this level's threshold wins the game
    pub max_level: u32,

    // === Health ===
    pub starting_health: i32,
    /// Health lost per hostile breaching the bottom line
    pub breach_damage: i32,
    /// Fraction of the playable height that counts as the bottom line
    pub breach_line: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_size: Vec2::new(2560.0, 1440.0),
            play_margin: 50.0,

            ship_move_speed: 600.0,
            bullet_base_speed: 600.0,
            bullet_speed_step: 0.1,
            base_cooldown: 0.5,
            cooldown_step: 0.05,
            min_cooldown: 0.1,
            max_gun_level: 10,
            gun_offset_x: 14.0,
            recoil_duration: 0.1,
            recoil_offset: Vec2::new(0.0, 5.0),

            base_spawn_interval: 2.0,
            enemy_base_speed: 150.0,
            enemy_speed_growth: 1.2,
            hostile_scale: 0.5,

            base_threshold: 1000,
            base_points: 100,
            max_level: 10,

            starting_health: 100,
            breach_damage: 10,
            breach_line: 0.99,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match persistence::read_text(path) {
            Ok(json) => match serde_json::from_str::<Tuning>(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning.sanitized()
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Clamp values that would break the rules (zero levels, zero intervals)
    pub fn sanitized(mut self) -> Self {
        self.max_level = self.max_level.max(1);
        self.max_gun_level = self.max_gun_level.max(1);
        self.base_threshold = self.base_threshold.max(1);
        self.base_spawn_interval = self.base_spawn_interval.max(0.01);
        self.play_margin = self.play_margin.max(0.0);
        self
    }

    /// The playable area: the screen inset by the margin on every side
    pub fn play_area(&self) -> Rect {
        Rect::new(
            Vec2::splat(self.play_margin),
            self.screen_size - Vec2::splat(self.play_margin * 2.0),
        )
    }

    /// Clamp a requested start level into `1..=max_level`
    pub fn clamp_level(&self, level: i64) -> u32 {
        level.clamp(1, self.max_level as i64) as u32
    }
}
