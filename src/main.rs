//! Center Shot entry point
//!
//! Headless native host: drives the scheduler at the configured tick rate,
//! auto-aims at the nearest enemy, and prints a JSON summary on game over.
//!
//! Usage: `center-shot [settings.json] [--fast]`

use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;

use center_shot::Settings;
use center_shot::render::DrawList;
use center_shot::sim::{RunState, Scheduler};

/// Ticks between autopilot shots
const FIRE_EVERY_TICKS: u64 = 10;
/// Ticks between entity-count reports
const REPORT_EVERY_TICKS: u64 = 500;

fn main() {
    env_logger::init();
    log::info!("Center Shot (native) starting...");

    let mut settings_path = None;
    let mut fast = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--fast" => fast = true,
            _ => settings_path = Some(arg),
        }
    }

    let settings = match settings_path {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let mut scheduler = Scheduler::new(settings.clone());
    let mut canvas = DrawList::new();
    scheduler.start(Duration::from_millis(settings.tick_interval_ms));

    let mut next_tick = Instant::now();
    while scheduler.is_running() {
        if let Some(target) = scheduler.state().and_then(autopilot_target) {
            scheduler.fire(target);
        }

        canvas.clear();
        let Some(frame) = scheduler.tick(&mut canvas) else {
            break;
        };
        if frame.hud.tick % REPORT_EVERY_TICKS == 0 {
            scheduler.report();
        }

        if let Some(final_score) = frame.final_score() {
            let summary = serde_json::json!({
                "final_score": final_score,
                "ticks": frame.hud.tick,
            });
            println!("{summary}");
            break;
        }

        if !fast {
            next_tick += scheduler.tick_interval();
            let now = Instant::now();
            if next_tick > now {
                thread::sleep(next_tick - now);
            } else {
                next_tick = now;
            }
        }
    }
}

/// Nearest live enemy, on the autopilot's firing ticks
fn autopilot_target(state: &RunState) -> Option<Vec2> {
    if state.tick % FIRE_EVERY_TICKS != 0 {
        return None;
    }
    let player = state.player.pos;
    state
        .enemies
        .iter()
        .filter(|e| e.is_alive())
        .min_by(|a, b| {
            a.pos
                .distance_squared(player)
                .partial_cmp(&b.pos.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|e| e.pos)
}
