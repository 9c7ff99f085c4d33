//! Per-tick simulation pipeline
//!
//! Each tick builds the next state from the previous one in a fixed order:
//! movement, fuel decay, hazards, collectibles, clock. A tick either commits
//! completely or not at all.

use super::state::{GameEvent, GamePhase, GameState, SpeedMode};
use super::{clock, fuel, hazards, resources};

/// Intents sampled from the input source for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Held movement directions (any combination)
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Speed-select key pressed this tick
    pub speed: Option<SpeedMode>,
    /// Pause toggle (one-shot)
    pub pause: bool,
}

impl TickInput {
    /// Input holding the given directions
    pub fn moving(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
            ..Default::default()
        }
    }
}

/// Compute the state that follows `prev` under `input`
pub fn step(prev: &GameState, input: &TickInput) -> GameState {
    let mut next = prev.clone();
    next.events.clear();

    if let Some(mode) = input.speed {
        next.set_speed_mode(mode);
    }
    if input.pause {
        next.toggle_pause();
    }

    // Only a running, unpaused game advances
    if next.run.phase != GamePhase::Playing {
        return next;
    }

    // Movement
    next.player.apply_intents(
        input.up,
        input.down,
        input.left,
        input.right,
        next.run.speed_mode,
    );

    // Passive burn
    next.player.fuel = fuel::decay(
        next.player.fuel,
        next.tuning.base_decay,
        next.run.speed_mode,
        next.run.difficulty,
    );
    if next.player.fuel <= 0.0 {
        next.extinguish();
        return next;
    }

    // Hazards
    hazards::update(&mut next);
    if next.player.fuel <= 0.0 {
        next.extinguish();
        return next;
    }
    hazards::maybe_spawn(&mut next);

    // Collectibles
    resources::update(&mut next);
    resources::maybe_spawn(&mut next);

    // Clock
    next.run.elapsed_ticks = clock::advance(next.run.elapsed_ticks);
    let level = clock::difficulty_level(next.run.elapsed_ticks);
    if level > next.run.difficulty {
        next.events.push(GameEvent::DifficultyUp(level));
        log::info!("Difficulty {} at tick {}", level, next.run.elapsed_ticks);
    }
    next.run.difficulty = level;

    next.normalize_order();
    next
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    *state = step(state, input);
}
