//! Collision detection and hit resolution
//!
//! Runs once per tick against positions from the end of the previous tick,
//! before anything moves.

use super::entity::Particle;
use super::state::{GamePhase, RunState};
use crate::circle_collision;

/// What the collision pass did this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitReport {
    /// One flag per projectile: consumed by a hit and due for removal
    pub consumed: Vec<bool>,
    pub hits: u32,
    pub kills: u32,
    /// A live enemy touched the player
    pub player_hit: bool,
}

/// Resolve player and projectile contacts against every live enemy
///
/// Enemies are visited in store order, projectiles in store order within each
/// enemy. A projectile is consumed by the first live enemy it overlaps and is
/// not tested again, so when one projectile overlaps two enemies on the same
/// tick only the earlier enemy is hit. An enemy can take several projectiles
/// on one tick until one of them kills it.
pub fn resolve_collisions(state: &mut RunState) -> HitReport {
    let mut report = HitReport {
        consumed: vec![false; state.projectiles.len()],
        ..Default::default()
    };
    let tick = state.tick;
    let player = state.player.pos;
    let player_radius = state.player.radius;

    for enemy in state.enemies.iter_mut() {
        if !enemy.is_alive() {
            continue;
        }

        if circle_collision(player - enemy.pos, player_radius + enemy.radius.value()) {
            report.player_hit = true;
        }

        for (index, projectile) in state.projectiles.iter().enumerate() {
            if report.consumed[index] || !enemy.is_alive() {
                continue;
            }
            if !circle_collision(
                enemy.pos - projectile.pos,
                enemy.radius.value() + projectile.radius,
            ) {
                continue;
            }

            // Burst size follows the radius the enemy had when struck
            let struck_radius = enemy.radius.value();
            let hit = enemy.hit(tick);
            state.score += hit.points;
            report.consumed[index] = true;
            report.hits += 1;
            if hit.killed {
                report.kills += 1;
                log::debug!("enemy killed at tick {tick} (+{} points)", hit.points);
            }

            if state.particles_enabled {
                state.particles.extend(Particle::burst(
                    &mut state.rng,
                    enemy.pos,
                    struck_radius,
                    enemy.hue,
                    tick,
                ));
            }
        }
    }

    if report.player_hit {
        state.phase = GamePhase::GameOver;
    }
    report
}
