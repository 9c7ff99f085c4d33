//! Hazard movement, pursuit, contact damage and spawn control

use glam::Vec2;
use rand::Rng;

use super::clock::{GRACE_TICKS, SLOW_RAMP_END_TICKS};
use super::fuel;
use super::spawn;
use super::state::{GameEvent, GameState, Hazard, HazardKind};
use crate::consts::*;
use crate::{angle_to, distance, heading_vector};

/// Spawn chance growth per level during the slow ramp
pub const SLOW_RAMP_SPAWN_STEP: f32 = 0.002;
/// Spawn chance growth per level after the slow ramp
pub const FAST_RAMP_SPAWN_STEP: f32 = 0.005;

/// Per-tick hazard spawn probability
pub fn spawn_chance(base: f32, elapsed: u64, difficulty: u32) -> f32 {
    let levels = difficulty.saturating_sub(1) as f32;
    if elapsed > SLOW_RAMP_END_TICKS {
        base + FAST_RAMP_SPAWN_STEP * levels
    } else if elapsed > GRACE_TICKS {
        base + SLOW_RAMP_SPAWN_STEP * levels
    } else {
        base
    }
}

/// Fuel removed when a hazard of `kind` touches the candle
pub fn contact_damage(kind: HazardKind, elapsed: u64, difficulty: u32) -> f32 {
    let bonus = if elapsed < DAMAGE_BONUS_START_TICKS {
        0
    } else {
        difficulty.saturating_sub(1) / 2
    };
    kind.base_damage() + bonus as f32 * kind.bonus_factor()
}

/// True once a position has drifted past the despawn margin on any side
pub fn out_of_bounds(pos: Vec2) -> bool {
    pos.x < -DESPAWN_MARGIN
        || pos.x > ARENA_WIDTH + DESPAWN_MARGIN
        || pos.y < -DESPAWN_MARGIN
        || pos.y > ARENA_HEIGHT + DESPAWN_MARGIN
}

/// Where a hazard moves this tick, including crawler pursuit
fn next_position(hazard: &Hazard, target: Vec2, pursuit_range: f32) -> Vec2 {
    let heading = if hazard.kind == HazardKind::Crawler
        && distance(hazard.pos, target) < pursuit_range
    {
        angle_to(hazard.pos, target)
    } else {
        hazard.heading
    };
    hazard.pos + heading_vector(heading, hazard.speed)
}

/// Move every hazard one tick, resolve contacts, and purge the inactive ones
pub fn update(state: &mut GameState) {
    let GameState {
        hazards,
        player,
        run,
        events,
        tuning,
        ..
    } = state;

    for hazard in hazards.iter_mut().filter(|h| h.active) {
        let tentative = next_position(hazard, player.pos, tuning.crawler_pursuit_range);

        if hazard.kind == HazardKind::Lurker && player.fuel > tuning.lurker_fuel_threshold {
            hazard.active = false;
            events.push(GameEvent::LurkerRetreated { id: hazard.id });
            continue;
        }

        if distance(tentative, player.pos) < HAZARD_HIT_RADIUS {
            let damage = contact_damage(hazard.kind, run.elapsed_ticks, run.difficulty);
            player.fuel = fuel::apply_delta(player.fuel, -damage, player.max_fuel);
            hazard.active = false;
            events.push(GameEvent::HazardHit {
                id: hazard.id,
                kind: hazard.kind,
                damage,
            });
            log::debug!(
                "{:?} #{} hit the candle for {} (fuel {:.1})",
                hazard.kind,
                hazard.id,
                damage,
                player.fuel
            );
            continue;
        }

        if out_of_bounds(tentative) {
            hazard.active = false;
            events.push(GameEvent::HazardDespawned {
                id: hazard.id,
                kind: hazard.kind,
            });
            continue;
        }

        hazard.pos = tentative;
    }

    hazards.retain(|h| h.active);
}

/// Roll for a new hazard
pub fn maybe_spawn(state: &mut GameState) {
    let chance = spawn_chance(
        state.tuning.hazard_spawn_base,
        state.run.elapsed_ticks,
        state.run.difficulty,
    );
    if chance <= 0.0 || !state.rng.random_bool(f64::from(chance.min(1.0))) {
        return;
    }

    let id = state.next_entity_id();
    let hazard = spawn::spawn_hazard(&mut state.rng, id);
    state.events.push(GameEvent::HazardSpawned {
        id,
        kind: hazard.kind,
    });
    state.hazards.push(hazard);
}
