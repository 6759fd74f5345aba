//! Run lifecycle and the tick entry point
//!
//! The scheduler owns the current run. It does not own a timer: the host
//! calls [`Scheduler::tick`] every [`Scheduler::tick_interval`], which keeps
//! the whole game drivable synchronously from tests.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use glam::Vec2;

use super::state::{Playfield, RunState};
use super::tick::{TickOutcome, tick};
use crate::hud::{GameEvent, HudSnapshot};
use crate::render::Canvas;
use crate::settings::Settings;

/// Result of one scheduled tick
#[derive(Debug, Clone)]
pub struct Frame {
    pub hud: HudSnapshot,
    pub outcome: TickOutcome,
}

impl Frame {
    /// Final score if this tick ended the run
    pub fn final_score(&self) -> Option<u64> {
        match self.outcome.event {
            Some(GameEvent::GameOver { final_score, .. }) => Some(final_score),
            None => None,
        }
    }
}

pub struct Scheduler {
    settings: Settings,
    state: Option<RunState>,
    running: bool,
    tick_interval: Duration,
    show_stats: bool,
    /// Tick of the last accepted fire command
    last_fire_tick: Option<u64>,
}

impl Scheduler {
    pub fn new(settings: Settings) -> Self {
        Self {
            tick_interval: Duration::from_millis(settings.tick_interval_ms),
            show_stats: settings.show_stats,
            settings,
            state: None,
            running: false,
            last_fire_tick: None,
        }
    }

    /// Start (or restart) a run ticking every `tick_interval`
    ///
    /// Any previous run is discarded.
    pub fn start(&mut self, tick_interval: Duration) -> &mut RunState {
        let seed = self.settings.seed.unwrap_or_else(seed_from_clock);
        let playfield = Playfield::new(self.settings.width, self.settings.height);
        let mut state = RunState::new(playfield, seed);
        state.particles_enabled = self.settings.particles;
        if playfield.is_degenerate() {
            log::warn!(
                "playfield {}x{} has no area, no enemies will spawn",
                playfield.width,
                playfield.height
            );
        }

        log::info!(
            "Started new run with seed {} on {}x{} every {:?}",
            seed,
            playfield.width,
            playfield.height,
            tick_interval
        );
        self.tick_interval = tick_interval;
        self.running = true;
        self.last_fire_tick = None;
        self.state.insert(state)
    }

    /// Halt ticking; the run stays inspectable until the next start
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Scheduler stopped");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn state(&self) -> Option<&RunState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut RunState> {
        self.state.as_mut()
    }

    /// Run exactly one tick; `None` when stopped
    pub fn tick(&mut self, canvas: &mut dyn Canvas) -> Option<Frame> {
        if !self.running {
            return None;
        }
        let state = self.state.as_mut()?;
        let outcome = tick(state, canvas);
        let hud = HudSnapshot::capture(state, self.show_stats);
        if outcome.event.is_some() {
            self.stop();
        }
        Some(Frame { hud, outcome })
    }

    /// Fire command toward `target`; returns whether a projectile was added
    ///
    /// Ignored while stopped and while the configured cooldown is running.
    pub fn fire(&mut self, target: Vec2) -> bool {
        if !self.running {
            return false;
        }
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        let cooldown = self.settings.fire_cooldown_ticks;
        if let Some(last) = self.last_fire_tick
            && cooldown > 0
            && state.tick < last.saturating_add(cooldown)
        {
            return false;
        }
        state.fire(target);
        self.last_fire_tick = Some(state.tick);
        true
    }

    /// Flip the stats panel; presentation only
    pub fn toggle_stats(&mut self) -> bool {
        self.show_stats = !self.show_stats;
        self.show_stats
    }

    /// Counters for the current run
    pub fn hud(&self) -> Option<HudSnapshot> {
        self.state
            .as_ref()
            .map(|state| HudSnapshot::capture(state, self.show_stats))
    }

    /// Log entity counts for the current run
    pub fn report(&self) {
        if let Some(state) = &self.state {
            state.report();
        }
    }
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}
