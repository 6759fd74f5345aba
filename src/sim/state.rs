//! Run state and core simulation types
//!
//! Everything one run needs lives in [`RunState`]. It is created fresh when a
//! run starts and dropped when the next one begins.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Enemy, Particle, Player, Projectile};
use crate::render::Rect;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; no further ticks are simulated
    GameOver,
}

/// Playfield extent; the origin is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether the playfield has any area to spawn into
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct RunState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter (the first simulated tick is 1)
    pub tick: u64,
    pub score: u64,
    pub phase: GamePhase,
    pub playfield: Playfield,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Emit particles on hits
    pub particles_enabled: bool,
    /// Roll the spawn controller each tick (off for scripted runs)
    pub auto_spawn: bool,
    pub(crate) rng: Pcg32,
}

impl RunState {
    /// Create a new run with the player at the playfield center
    pub fn new(playfield: Playfield, seed: u64) -> Self {
        Self {
            seed,
            tick: 0,
            score: 0,
            phase: GamePhase::Playing,
            playfield,
            player: Player::new(playfield.center()),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            particles: Vec::new(),
            particles_enabled: true,
            auto_spawn: true,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Fire one projectile from the player toward `target`
    pub fn fire(&mut self, target: Vec2) {
        self.projectiles
            .push(Projectile::new(self.player.pos, target));
    }

    /// Log entity counts
    pub fn report(&self) {
        log::debug!(
            "tick {}: {} enemies, {} projectiles, {} particles",
            self.tick,
            self.enemies.len(),
            self.projectiles.len(),
            self.particles.len()
        );
    }
}
