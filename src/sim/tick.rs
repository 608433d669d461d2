//! The Playing-mode simulation tick
//!
//! Fixed stage order, once per tick:
//! spawn → motion → collisions → progression → ship control/firing.

use glam::Vec2;

use super::collision::resolve_collisions;
use super::progression::{LevelCheck, check_level_up};
use super::spawn::spawn_hostile;
use super::state::{GameEvent, Projectile, Session};
use crate::platform::input::{InputFrame, Key};
use crate::tuning::Tuning;

/// How a Playing tick ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Continue,
    GameOver,
    Victory,
}

/// Cooldown after a shot: `max(min, base - step * (gun_level - 1))`
pub fn fire_cooldown(tuning: &Tuning, gun_level: u32) -> f32 {
    let upgrades = gun_level.saturating_sub(1) as f32;
    (tuning.base_cooldown - tuning.cooldown_step * upgrades).max(tuning.min_cooldown)
}

/// Bullet speed: `base * (1 + step * (gun_level - 1))`
pub fn bullet_speed(tuning: &Tuning, gun_level: u32) -> f32 {
    let upgrades = gun_level.saturating_sub(1) as f32;
    tuning.bullet_base_speed * (1.0 + tuning.bullet_speed_step * upgrades)
}

/// Advance the session by one Playing tick
pub fn tick_playing(session: &mut Session, input: &InputFrame, dt: f32, tuning: &Tuning) -> PlayOutcome {
    // Spawn
    if session.spawner.update(dt, session.level, tuning) {
        let texture = session.hostile_texture();
        let hostile = spawn_hostile(&mut session.rng, tuning, texture, session.enemy_speed);
        session.hostiles.push(hostile);
    }

    // Motion
    for hostile in &mut session.hostiles {
        hostile.update(dt, tuning.screen_size);
    }
    for projectile in &mut session.projectiles {
        projectile.update(dt);
    }
    session.particles.update(dt);
    session.hostiles.retain(|h| h.active);
    session.projectiles.retain(|p| p.active);

    // Collisions
    let combat = resolve_collisions(session, tuning);
    if combat.ship_hit {
        log::info!("Ship destroyed at score {}", session.score);
        return PlayOutcome::GameOver;
    }
    if session.health <= 0 {
        log::info!("Hull integrity lost at score {}", session.score);
        return PlayOutcome::GameOver;
    }

    // Progression
    if check_level_up(session, tuning) == LevelCheck::Victory {
        return PlayOutcome::Victory;
    }

    // Ship control
    update_ship(session, input, dt, tuning);

    PlayOutcome::Continue
}

/// Move the ship, run the gun timers and fire if allowed
pub fn update_ship(session: &mut Session, input: &InputFrame, dt: f32, tuning: &Tuning) {
    let area = tuning.play_area();
    let ship = &mut session.ship;

    let mut dx = 0.0;
    if input.held(Key::Left) {
        dx -= tuning.ship_move_speed * dt;
    }
    if input.held(Key::Right) {
        dx += tuning.ship_move_speed * dt;
    }
    let max = (area.bottom_right() - ship.size).max(area.min);
    ship.pos.x = (ship.pos.x + dx).clamp(area.left(), max.x);
    ship.pos.y = ship.pos.y.clamp(area.top(), max.y);
    ship.recoil = (ship.recoil - dt).max(0.0);

    session.shoot_cooldown -= dt;
    if input.held(Key::Fire) && session.shoot_cooldown <= 0.0 {
        fire(session, tuning);
    }
}

fn fire(session: &mut Session, tuning: &Tuning) {
    let gun_level = session.gun_level;
    let gun_pos = session.ship.gun_position(tuning);

    session.projectiles.push(Projectile::new(
        gun_pos,
        Vec2::new(0.0, -bullet_speed(tuning, gun_level)),
    ));
    session.shoot_cooldown = fire_cooldown(tuning, gun_level);
    session.ship.recoil = tuning.recoil_duration;
    session.particles.burst_shot(&mut session.rng, gun_pos);
    session.events.push(GameEvent::Shot { gun_level });
}
