//! Astro Defender - A vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, spawning, progression, mode machine)
//! - `renderer`: Draw command lists for an external sprite/text backend
//! - `audio`: Sound cue requests and volume handling
//! - `platform`: Input snapshots and frame timing
//! - `persistence`: Whole-value text file storage
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::{HighScore, HighScoreStore};
pub use settings::{QualityPreset, Settings};
pub use sim::{Game, Mode, StepOutput};
pub use tuning::Tuning;

use glam::Vec2;

/// Fixed constants that are part of the rules rather than the balance
pub mod consts {
    /// Largest delta a single tick may integrate (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Projectiles above this y are gone for good
    pub const PROJECTILE_CULL_Y: f32 = -10.0;
    /// Projectile bounding box (pixels)
    pub const PROJECTILE_SIZE: f32 = 8.0;

    /// Number of entries in the main menu (Start, Options, Exit)
    pub const MENU_ITEMS: usize = 3;
    /// Number of entries in the pause menu (Continue, Leave)
    pub const PAUSE_ITEMS: usize = 2;

    /// Particles emitted per shot
    pub const SHOT_PARTICLES: usize = 5;
    /// Particles emitted per hostile kill
    pub const EXPLOSION_PARTICLES: usize = 50;
}

/// Wrap `index + delta` into `0..len`
#[inline]
pub fn wrap_index(index: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i64;
    (((index as i64 + delta as i64) % len + len) % len) as usize
}

/// Unit vector for an angle in radians
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
