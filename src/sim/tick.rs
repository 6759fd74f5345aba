//! One simulation tick
//!
//! Order of work: advance the tick counter, fade the previous frame, resolve
//! collisions, sweep enemies, projectiles and particles (render, advance,
//! check expiry, prune), draw the player, then either end the run or roll
//! the spawn controller.

use super::collision::{HitReport, resolve_collisions};
use super::entity::{Advance, Expire, Render};
use super::spawn::maybe_spawn;
use super::state::{GamePhase, Playfield, RunState};
use crate::hud::GameEvent;
use crate::render::{Canvas, FillStyle, TextAlign};

/// Font used for the final score
pub const GAME_OVER_FONT: &str = "bold 64px sans-serif";

/// What happened during a tick
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    pub hits: HitReport,
    pub removed_enemies: usize,
    pub removed_projectiles: usize,
    pub removed_particles: usize,
    pub spawned: bool,
    /// Set on the tick the run ends
    pub event: Option<GameEvent>,
}

/// Advance the run by one tick; a finished run is left untouched
pub fn tick(state: &mut RunState, canvas: &mut dyn Canvas) -> TickOutcome {
    if state.is_game_over() {
        return TickOutcome::default();
    }

    state.tick += 1;
    let now = state.tick;
    let playfield = state.playfield;

    canvas.fill_region(playfield.rect(), FillStyle::FADE);

    let hits = resolve_collisions(state);

    let removed_enemies = sweep(&mut state.enemies, &[], &playfield, now, canvas);
    let removed_projectiles = sweep(
        &mut state.projectiles,
        &hits.consumed,
        &playfield,
        now,
        canvas,
    );
    let removed_particles = sweep(&mut state.particles, &[], &playfield, now, canvas);

    state.player.render(canvas);

    let mut outcome = TickOutcome {
        hits,
        removed_enemies,
        removed_projectiles,
        removed_particles,
        ..Default::default()
    };

    if state.phase == GamePhase::GameOver {
        outcome.event = Some(game_over(state, canvas));
    } else if state.auto_spawn {
        outcome.spawned = maybe_spawn(state);
    }
    outcome
}

/// Render, advance and expiry-check every item, then drop the expired ones
///
/// `doomed` flags items already condemned this tick (consumed projectiles).
/// Expiry is collected over the whole pass first and pruned afterwards in a
/// single ordered `retain`, so removals never shift an unvisited index.
fn sweep<T: Render + Advance + Expire>(
    items: &mut Vec<T>,
    doomed: &[bool],
    playfield: &Playfield,
    now: u64,
    canvas: &mut dyn Canvas,
) -> usize {
    let expired: Vec<bool> = items
        .iter_mut()
        .enumerate()
        .map(|(index, item)| {
            item.render(canvas);
            item.advance();
            doomed.get(index).copied().unwrap_or(false) || item.is_expired(playfield, now)
        })
        .collect();

    let before = items.len();
    let mut flags = expired.into_iter();
    items.retain(|_| !flags.next().unwrap_or(false));
    before - items.len()
}

/// End-of-run screen: wipe the playfield and show the final score
fn game_over(state: &RunState, canvas: &mut dyn Canvas) -> GameEvent {
    let rect = state.playfield.rect();
    canvas.clear_region(rect);
    canvas.draw_text(
        &state.score.to_string(),
        rect.center(),
        GAME_OVER_FONT,
        TextAlign::Center,
    );
    log::info!(
        "Game over at tick {} with score {}",
        state.tick,
        state.score
    );
    GameEvent::GameOver {
        final_score: state.score,
        tick: state.tick,
    }
}
