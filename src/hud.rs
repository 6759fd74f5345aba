//! Values published to the UI once per tick

use serde::{Deserialize, Serialize};

use crate::sim::{RunState, spawn_chance};

/// Counters shown by the score display and the stats panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub tick: u64,
    pub score: u64,
    /// Spawn probability for the next tick
    pub spawn_chance: f64,
    pub enemies: usize,
    pub projectiles: usize,
    pub particles: usize,
    /// Stats panel visibility (presentation only)
    pub show_stats: bool,
}

impl HudSnapshot {
    pub fn capture(state: &RunState, show_stats: bool) -> Self {
        Self {
            tick: state.tick,
            score: state.score,
            spawn_chance: spawn_chance(state.score),
            enemies: state.enemies.len(),
            projectiles: state.projectiles.len(),
            particles: state.particles.len(),
            show_stats,
        }
    }
}

/// Signals for the UI outside the per-tick counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    GameOver { final_score: u64, tick: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Playfield;

    #[test]
    fn test_capture() {
        let mut state = RunState::new(Playfield::new(800.0, 600.0), 1);
        state.score = 1000;
        state.tick = 12;
        let hud = HudSnapshot::capture(&state, true);
        assert_eq!(hud.tick, 12);
        assert_eq!(hud.spawn_chance, 0.02);
        assert!(hud.show_stats);
    }

    #[test]
    fn test_game_over_json() {
        let event = GameEvent::GameOver {
            final_score: 130,
            tick: 900,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"game_over","final_score":130,"tick":900}"#);
    }
}
