//! Decorative particles
//!
//! Particles never affect gameplay. The pool is capped; when full, the oldest
//! particle is evicted to make room.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{EXPLOSION_PARTICLES, SHOT_PARTICLES};
use crate::direction;

/// Palette slot for a particle (resolved to a colour by the renderer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleTint {
    /// Muzzle sparks
    Spark,
    /// Explosion core
    Flash,
    Flame,
    Ember,
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left to live
    pub life: f32,
    pub tint: ParticleTint,
    /// Draw scale
    pub size: f32,
}

impl Particle {
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.life -= dt;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Bounded collection of live particles
#[derive(Debug, Clone, Default)]
pub struct ParticlePool {
    particles: VecDeque<Particle>,
    capacity: usize,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: VecDeque::with_capacity(capacity.min(256)),
            capacity,
        }
    }

    /// Add one particle, evicting the oldest if the pool is full
    pub fn spawn(&mut self, particle: Particle) {
        if self.capacity == 0 {
            return;
        }
        if self.particles.len() >= self.capacity {
            self.particles.pop_front();
        }
        self.particles.push_back(particle);
    }

    /// Small upward spray at the muzzle
    pub fn burst_shot<R: Rng>(&mut self, rng: &mut R, pos: Vec2) {
        for _ in 0..SHOT_PARTICLES {
            let vel = Vec2::new(
                rng.random_range(-50.0f32..=50.0),
                -rng.random_range(20.0f32..50.0),
            );
            self.spawn(Particle {
                pos,
                vel,
                life: rng.random_range(0.3..0.8),
                tint: ParticleTint::Spark,
                size: rng.random_range(0.5..1.0),
            });
        }
    }

    /// Radial blast where a hostile died
    pub fn burst_explosion<R: Rng>(&mut self, rng: &mut R, pos: Vec2) {
        for i in 0..EXPLOSION_PARTICLES {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed: f32 = rng.random_range(60.0..240.0);
            let tint = match i % 5 {
                0 => ParticleTint::Flash,
                1 | 2 => ParticleTint::Flame,
                _ => ParticleTint::Ember,
            };
            self.spawn(Particle {
                pos,
                vel: direction(angle) * speed,
                life: rng.random_range(0.4..1.0),
                tint,
                size: rng.random_range(1.0..2.5),
            });
        }
    }

    /// Advance all particles and drop the expired ones
    pub fn update(&mut self, dt: f32) {
        for particle in self.particles.iter_mut() {
            particle.update(dt);
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}
