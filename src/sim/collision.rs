//! Collision detection and combat resolution
//!
//! Everything collides as axis-aligned boxes. Once entities have moved for the
//! tick, overlaps are turned into score, damage and removals in a fixed order:
//! ship contact first, then bottom breaches, then projectile hits.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, Session};
use crate::tuning::Tuning;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rectangle of `size` centred on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size / 2.0, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn bottom_right(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Half-open overlap test: touching edges do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// Half-open point containment
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// What the resolver found this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatOutcome {
    /// A hostile touched the ship (instant loss)
    pub ship_hit: bool,
    /// Hostiles that crossed the bottom line
    pub breaches: u32,
    /// Hostiles destroyed by projectiles
    pub kills: u32,
}

/// Resolve all overlaps for the tick
///
/// Returns early on ship contact: nothing else that tick matters.
pub fn resolve_collisions(session: &mut Session, tuning: &Tuning) -> CombatOutcome {
    let mut outcome = CombatOutcome::default();

    // --- SHIP CONTACT ---
    let ship_rect = session.ship.bounds();
    if session
        .hostiles
        .iter()
        .any(|h| h.active && h.bounds().intersects(&ship_rect))
    {
        outcome.ship_hit = true;
        return outcome;
    }

    // --- BOTTOM BREACH ---
    let area = tuning.play_area();
    let breach_y = area.top() + area.size.y * tuning.breach_line;
    for hostile in session.hostiles.iter_mut().filter(|h| h.active) {
        if hostile.bounds().bottom() > breach_y {
            hostile.active = false;
            session.health -= tuning.breach_damage;
            outcome.breaches += 1;
            session.events.push(GameEvent::HullBreach {
                health: session.health,
            });
            log::debug!("Hostile breached, health now {}", session.health);
        }
    }

    // --- PROJECTILE HITS ---
    // One projectile per hostile per tick: the inner loop stops at the first hit.
    let points = tuning.base_points * session.level as u64;
    for hostile in session.hostiles.iter_mut().filter(|h| h.active) {
        let bounds = hostile.bounds();
        for projectile in session.projectiles.iter_mut().filter(|p| p.active) {
            if projectile.bounds().intersects(&bounds) {
                projectile.active = false;
                hostile.active = false;
                session.score += points;
                outcome.kills += 1;

                let center = bounds.center();
                session.particles.burst_explosion(&mut session.rng, center);
                session.events.push(GameEvent::HostileDestroyed {
                    pos: center,
                    points,
                });
                break;
            }
        }
    }

    session.hostiles.retain(|h| h.active);
    session.projectiles.retain(|p| p.active);

    outcome
}
