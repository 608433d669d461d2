//! Simulation module
//!
//! All gameplay logic lives here. Nothing in `sim` draws, plays sound or reads
//! devices:
//! - Elapsed-time deltas only, passed in by the caller
//! - Seeded RNG only (reproducible runs)
//! - Results surface as state, [`GameEvent`]s and mode changes

pub mod collision;
pub mod mode;
pub mod particles;
pub mod progression;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CombatOutcome, Rect, resolve_collisions};
pub use mode::{Game, MenuItem, Mode, PauseItem, StepOutput};
pub use particles::{Particle, ParticlePool, ParticleTint};
pub use progression::{LevelCheck, check_level_up, enemy_speed_for_level, threshold_for_level};
pub use spawn::{SpawnDirector, spawn_hostile};
pub use state::{GameEvent, Hostile, Projectile, Session, Ship};
pub use tick::{PlayOutcome, bullet_speed, fire_cooldown, tick_playing, update_ship};
