//! Asset boundary
//!
//! Textures, fonts and sounds are loaded by the shell. The core only needs to
//! name them and know their pixel sizes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Handle to a texture owned by the rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Ship,
    Hostile,
    Projectile,
    Particle,
}

/// Pixel sizes of the loaded assets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub ship: Vec2,
    /// Unscaled hostile texture size
    pub hostile: Vec2,
    pub projectile: Vec2,
    pub particle: Vec2,
    /// Advance and line height of one glyph at text scale 1
    pub glyph: Vec2,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            ship: Vec2::new(128.0, 128.0),
            hostile: Vec2::new(160.0, 160.0),
            projectile: Vec2::new(16.0, 32.0),
            particle: Vec2::new(2.0, 2.0),
            glyph: Vec2::new(16.0, 32.0),
        }
    }
}

impl AssetManifest {
    pub fn size_of(&self, sprite: SpriteId) -> Vec2 {
        match sprite {
            SpriteId::Ship => self.ship,
            SpriteId::Hostile => self.hostile,
            SpriteId::Projectile => self.projectile,
            SpriteId::Particle => self.particle,
        }
    }
}
