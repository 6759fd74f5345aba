//! Tick-driven simulation module
//!
//! All gameplay logic lives here:
//! - One tick runs to completion before the next
//! - Seeded RNG only
//! - Stable iteration order (store order)
//! - Drawing goes through the `Canvas` trait only

pub mod collision;
pub mod entity;
pub mod scheduler;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod tween;

pub use collision::{HitReport, resolve_collisions};
pub use entity::{Advance, Enemy, Expire, Hit, Particle, Player, Projectile, Render, out_of_bounds};
pub use scheduler::{Frame, Scheduler};
pub use spawn::{maybe_spawn, spawn_chance, spawn_enemy};
pub use state::{GamePhase, Playfield, RunState};
pub use tick::{TickOutcome, tick};
pub use tween::Tween;
