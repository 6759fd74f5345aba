//! Enemy spawning and the score-driven difficulty curve

use glam::Vec2;
use rand::Rng;

use super::entity::Enemy;
use super::state::{Playfield, RunState};
use crate::consts::*;
use crate::{calc_angle, rand_int};

/// Per-tick spawn probability for a given score
///
/// Ramps linearly from 1% at zero by one point per thousand score, capped at 10%.
pub fn spawn_chance(score: u64) -> f64 {
    ((1.0 + score as f64 / 1000.0) / 100.0).min(SPAWN_CHANCE_CAP)
}

/// Roll this tick's spawn; returns true if an enemy was added
pub fn maybe_spawn(state: &mut RunState) -> bool {
    let chance = spawn_chance(state.score);
    if state.rng.random::<f64>() > chance {
        return false;
    }
    spawn_enemy(state)
}

/// Add one enemy just outside a random edge, aimed at the player
///
/// No-op when the enemy cap is reached or the playfield has no area.
pub fn spawn_enemy(state: &mut RunState) -> bool {
    if state.enemies.len() >= MAX_ENEMIES {
        return false;
    }
    if state.playfield.is_degenerate() {
        log::debug!(
            "skipping spawn: playfield {}x{} has no area",
            state.playfield.width,
            state.playfield.height
        );
        return false;
    }

    let rng = &mut state.rng;
    let radius = rand_int(rng, ENEMY_MIN_RADIUS, ENEMY_MAX_RADIUS);
    let velocity = rng.random_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);
    let hue = rand_int(rng, 0, 359) as u16;
    let horizontal = rng.random_bool(0.5);
    let pos = edge_position(rng, &state.playfield, radius, horizontal);

    let angle = calc_angle(pos, state.player.pos);
    state
        .enemies
        .push(Enemy::new(pos, radius as f32, hue, velocity, angle));
    log::debug!(
        "spawned enemy r={radius} at ({:.0}, {:.0}), {} alive",
        pos.x,
        pos.y,
        state.enemies.len()
    );
    true
}

/// Spawn point just past the left/right (`horizontal`) or top/bottom edge
fn edge_position<R: Rng + ?Sized>(
    rng: &mut R,
    playfield: &Playfield,
    radius: i32,
    horizontal: bool,
) -> Vec2 {
    let (along, across) = if horizontal {
        (playfield.height, playfield.width)
    } else {
        (playfield.width, playfield.height)
    };
    // i64 so sides beyond i32::MAX saturate instead of overflowing
    let low = 1 - i64::from(radius);
    let high = (along as i64).saturating_add(i64::from(radius) - 1);
    let free = if high > low {
        rng.random_range(low..=high) as f32
    } else {
        low as f32
    };
    let fixed = if rng.random_bool(0.5) {
        across + radius as f32 - 1.0
    } else {
        (1 - radius) as f32
    };

    if horizontal {
        Vec2::new(fixed, free)
    } else {
        Vec2::new(free, fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Expire, out_of_bounds};
    use proptest::prelude::*;

    #[test]
    fn test_spawn_chance_curve() {
        assert_eq!(spawn_chance(0), 0.01);
        assert_eq!(spawn_chance(1000), 0.02);
        assert_eq!(spawn_chance(9000), 0.1);
        assert_eq!(spawn_chance(250_000), 0.1);
        assert!(spawn_chance(500) > 0.01 && spawn_chance(500) < 0.02);
    }

    #[test]
    fn test_spawned_enemy_geometry() {
        let mut state = RunState::new(Playfield::new(800.0, 600.0), 11);
        for _ in 0..MAX_ENEMIES {
            assert!(spawn_enemy(&mut state));
        }
        for enemy in &state.enemies {
            let r = enemy.radius.value();
            assert!((10.0..=50.0).contains(&r));
            assert!(enemy.velocity >= 0.5 && enemy.velocity < 1.0);
            assert!(enemy.hue < 360);
            assert!(enemy.is_alive());

            // Starts past an edge but not yet expired
            let on_screen = enemy.pos.x - r >= 1.0
                && enemy.pos.y - r >= 1.0
                && enemy.pos.x + r <= 799.0
                && enemy.pos.y + r <= 599.0;
            assert!(!on_screen);
            assert!(!out_of_bounds(enemy.pos, r, &state.playfield));
            assert!(!enemy.is_expired(&state.playfield, state.tick));

            let expected = calc_angle(enemy.pos, state.player.pos);
            assert!((enemy.angle - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_cap_enforced() {
        let mut state = RunState::new(Playfield::new(800.0, 600.0), 5);
        for _ in 0..MAX_ENEMIES {
            spawn_enemy(&mut state);
        }
        assert!(!spawn_enemy(&mut state));
        assert_eq!(state.enemies.len(), MAX_ENEMIES);
    }

    #[test]
    fn test_degenerate_playfield_skips_spawn() {
        let mut state = RunState::new(Playfield::new(0.0, 0.0), 5);
        assert!(!spawn_enemy(&mut state));
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_huge_playfield_spawns_past_edge() {
        let mut state = RunState::new(Playfield::new(3e9, 3e9), 8);
        for _ in 0..MAX_ENEMIES {
            assert!(spawn_enemy(&mut state));
        }
        for enemy in &state.enemies {
            assert!(enemy.pos.is_finite());
            assert!(!out_of_bounds(enemy.pos, enemy.radius.value(), &state.playfield));
        }
    }

    proptest! {
        #[test]
        fn prop_chance_is_bounded_and_monotonic(a in 0u64..1_000_000, b in 0u64..1_000_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(spawn_chance(lo) <= spawn_chance(hi));
            prop_assert!(spawn_chance(lo) >= 0.01);
            prop_assert!(spawn_chance(hi) <= SPAWN_CHANCE_CAP);
        }

        #[test]
        fn prop_never_exceeds_cap(seed in any::<u64>(), attempts in 0usize..60) {
            let mut state = RunState::new(Playfield::new(640.0, 480.0), seed);
            for _ in 0..attempts {
                spawn_enemy(&mut state);
                prop_assert!(state.enemies.len() <= MAX_ENEMIES);
            }
        }
    }
}
