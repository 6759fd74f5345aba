//! Center Shot - hold the centre of the screen against radially spawning enemies
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (entities, collisions, spawning, scheduler)
//! - `render`: Drawing interface consumed by the simulation
//! - `hud`: Per-tick values exposed to the UI
//! - `settings`: Session configuration

pub mod error;
pub mod hud;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::Error;
pub use hud::{GameEvent, HudSnapshot};
pub use settings::Settings;

use glam::Vec2;
use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Default scheduler interval (milliseconds per tick)
    pub const TICK_INTERVAL_MS: u64 = 20;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 30.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 5.0;

    /// Enemy spawn ranges
    pub const ENEMY_MIN_RADIUS: i32 = 10;
    pub const ENEMY_MAX_RADIUS: i32 = 50;
    pub const ENEMY_MIN_SPEED: f32 = 0.5;
    pub const ENEMY_MAX_SPEED: f32 = 1.0;
    /// Concurrent enemy cap
    pub const MAX_ENEMIES: usize = 20;

    /// Health below which the next hit kills
    pub const KILL_THRESHOLD: f32 = 20.0;
    /// Health removed (and points awarded) by a non-lethal hit
    pub const HIT_DAMAGE: f32 = 10.0;
    pub const HIT_SCORE: u64 = 10;
    /// Dead enemies keep crawling at this speed until removed
    pub const DEAD_CRAWL_SPEED: f32 = 0.1;
    /// Ticks a dead enemy stays in the store
    pub const DEAD_GRACE_TICKS: u64 = 1;

    /// Particle defaults
    pub const PARTICLE_SPEED: f32 = 10.0;
    pub const PARTICLE_LIFETIME_TICKS: u64 = 25;
    pub const PARTICLE_VELOCITY_DECAY: f32 = 0.6;
    pub const PARTICLE_ALPHA_DECAY: f32 = 0.5;
    /// Burst size is rand_int(MIN, MAX) * radius / 10
    pub const PARTICLE_BURST_MIN: i32 = 5;
    pub const PARTICLE_BURST_MAX: i32 = 10;

    /// Spawn chance ramp: 1% at zero score, +1% per 1000 points, capped at 10%
    pub const SPAWN_CHANCE_CAP: f64 = 0.1;

    /// Largest accepted playfield side in pixels
    pub const MAX_PLAYFIELD_EXTENT: f32 = 1_000_000.0;
}

/// Angle (radians) of the vector pointing from `from` to `to`
#[inline]
pub fn calc_angle(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Uniform integer in the inclusive range `[low, high]`
#[inline]
pub fn rand_int<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    if high <= low {
        return low;
    }
    rng.random_range(low..=high)
}

/// Circle overlap test on the center difference, without a square root
#[inline]
pub fn circle_collision(diff: Vec2, radius_total: f32) -> bool {
    diff.length_squared() <= radius_total * radius_total
}
