//! Session state and core simulation types
//!
//! Everything a run mutates lives in [`Session`]; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::particles::ParticlePool;
use super::progression;
use super::spawn::SpawnDirector;
use crate::assets::{AssetManifest, SpriteId};
use crate::consts::*;
use crate::tuning::Tuning;

/// A player bullet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Centre of the bullet
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            active: true,
        }
    }

    /// Move, and switch off once past the top of the screen
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.pos += self.vel * dt;
        if self.pos.y < PROJECTILE_CULL_Y {
            self.active = false;
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, Vec2::splat(PROJECTILE_SIZE))
    }
}

/// A descending enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hostile {
    pub sprite: SpriteId,
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
    pub scale: f32,
    /// Unscaled texture size
    pub texture_size: Vec2,
}

impl Hostile {
    pub fn new(pos: Vec2, vel: Vec2, texture_size: Vec2, scale: f32) -> Self {
        Self {
            sprite: SpriteId::Hostile,
            pos,
            vel,
            active: true,
            scale,
            texture_size,
        }
    }

    /// Move, and switch off once outside the screen
    pub fn update(&mut self, dt: f32, screen: Vec2) {
        if !self.active {
            return;
        }
        self.pos += self.vel * dt;
        let size = self.bounds().size;
        if self.pos.y > screen.y
            || self.pos.y < -size.y
            || self.pos.x > screen.x
            || self.pos.x < -size.x
        {
            self.active = false;
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.texture_size * self.scale)
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Seconds of recoil left to display
    pub recoil: f32,
}

impl Ship {
    pub fn new(size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            size,
            recoil: 0.0,
        }
    }

    /// Park the ship centred on the bottom edge of the playable area
    pub fn place(&mut self, tuning: &Tuning) {
        let area = tuning.play_area();
        self.pos = Vec2::new(
            tuning.screen_size.x / 2.0 - self.size.x / 2.0,
            area.bottom() - self.size.y,
        );
        self.recoil = 0.0;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Where bullets leave the ship
    pub fn gun_position(&self, tuning: &Tuning) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0 + tuning.gun_offset_x, self.pos.y)
    }

    pub fn is_recoiling(&self) -> bool {
        self.recoil > 0.0
    }
}

/// Things that happened during a tick, for audio and UI feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bullet was fired
    Shot { gun_level: u32 },
    /// A projectile destroyed a hostile
    HostileDestroyed { pos: Vec2, points: u64 },
    /// A hostile crossed the bottom line
    HullBreach { health: i32 },
    LevelUp { level: u32 },
    /// Menu cursor moved or start level changed
    MenuMove,
    /// Menu entry confirmed
    MenuSelect,
    GameOver { score: u64 },
    Victory { score: u64 },
    NewHighScore { score: u64 },
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct Session {
    pub score: u64,
    pub health: i32,
    /// Current level (1..=max_level)
    pub level: u32,
    /// Level the run was started at (restarts go back here)
    pub start_level: u32,
    /// Score needed for the next level-up
    pub threshold: u64,
    /// Descent speed of newly spawned hostiles
    pub enemy_speed: f32,
    pub spawner: SpawnDirector,
    /// Seconds until the gun may fire again
    pub shoot_cooldown: f32,
    pub gun_level: u32,
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub hostiles: Vec<Hostile>,
    /// Visual particles (not gameplay-affecting)
    pub particles: ParticlePool,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
    /// Unscaled hostile texture size
    hostile_texture: Vec2,
}

impl Session {
    /// Create a level-1 session with the given seed and particle budget
    pub fn new(tuning: &Tuning, assets: &AssetManifest, seed: u64, max_particles: usize) -> Self {
        let mut session = Self {
            score: 0,
            health: tuning.starting_health,
            level: 1,
            start_level: 1,
            threshold: tuning.base_threshold,
            enemy_speed: tuning.enemy_base_speed,
            spawner: SpawnDirector::new(),
            shoot_cooldown: 0.0,
            gun_level: 1,
            ship: Ship::new(assets.size_of(SpriteId::Ship)),
            projectiles: Vec::new(),
            hostiles: Vec::new(),
            particles: ParticlePool::new(max_particles),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            hostile_texture: assets.size_of(SpriteId::Hostile),
        };
        session.reset(1, tuning);
        session
    }

    /// Start over at `level`: score, health, timers and entities all reset
    ///
    /// Pending events and the RNG stream survive.
    pub fn reset(&mut self, level: u32, tuning: &Tuning) {
        let level = tuning.clamp_level(level as i64);
        self.score = 0;
        self.health = tuning.starting_health;
        self.level = level;
        self.start_level = level;
        self.threshold = progression::threshold_for_level(tuning, level);
        self.enemy_speed = progression::enemy_speed_for_level(tuning, level);
        self.spawner.reset(level, tuning);
        self.shoot_cooldown = 0.0;
        self.gun_level = progression::gun_level_for(tuning, level);
        self.ship.place(tuning);
        self.projectiles.clear();
        self.hostiles.clear();
        self.particles.clear();
    }

    pub fn hostile_texture(&self) -> Vec2 {
        self.hostile_texture
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_deactivates_above_top() {
        let mut p = Projectile::new(Vec2::new(100.0, 0.0), Vec2::new(0.0, -600.0));
        p.update(0.01);
        assert!(p.active); // y = -6
        p.update(0.01);
        assert!(!p.active); // y = -12
        let pos = p.pos;
        p.update(0.01);
        assert_eq!(p.pos, pos);
    }

    #[test]
    fn test_hostile_leaves_screen() {
        let screen = Vec2::new(2560.0, 1440.0);
        let mut h = Hostile::new(
            Vec2::new(2550.0, 100.0),
            Vec2::new(100.0, 0.0),
            Vec2::splat(160.0),
            0.5,
        );
        h.update(0.05, screen);
        assert!(h.active);
        h.update(0.1, screen);
        assert!(!h.active);
    }

    #[test]
    fn test_hostile_cull_uses_scaled_size() {
        let screen = Vec2::new(2560.0, 1440.0);
        // Scaled height is 320, so y = -300 is still partly on screen
        let mut h = Hostile::new(
            Vec2::new(100.0, -300.0),
            Vec2::ZERO,
            Vec2::splat(160.0),
            2.0,
        );
        h.update(0.016, screen);
        assert!(h.active);
        h.pos.y = -330.0;
        h.update(0.016, screen);
        assert!(!h.active);
    }

    #[test]
    fn test_hostile_bounds_scaled() {
        let h = Hostile::new(Vec2::new(10.0, 20.0), Vec2::ZERO, Vec2::splat(160.0), 0.5);
        assert_eq!(h.bounds(), Rect::new(Vec2::new(10.0, 20.0), Vec2::splat(80.0)));
    }

    #[test]
    fn test_reset_clears_run() {
        let tuning = Tuning::default();
        let mut s = Session::new(&tuning, &AssetManifest::default(), 1, 100);
        s.score = 4000;
        s.health = 30;
        s.projectiles
            .push(Projectile::new(Vec2::splat(5.0), Vec2::ZERO));
        s.hostiles
            .push(Hostile::new(Vec2::ZERO, Vec2::ZERO, Vec2::ONE, 1.0));

        s.reset(3, &tuning);
        assert_eq!(s.score, 0);
        assert_eq!(s.health, 100);
        assert_eq!(s.level, 3);
        assert_eq!(s.threshold, 9000);
        assert!(s.projectiles.is_empty());
        assert!(s.hostiles.is_empty());
        assert!(s.particles.is_empty());
    }

    #[test]
    fn test_ship_placed_on_bottom_edge() {
        let tuning = Tuning::default();
        let s = Session::new(&tuning, &AssetManifest::default(), 1, 100);
        assert_eq!(s.ship.pos, Vec2::new(1216.0, 1262.0));
    }
}
