//! Collectible pickup and spawn control

use rand::Rng;

use super::fuel;
use super::spawn;
use super::state::{GameEvent, GameState};
use crate::consts::*;
use crate::distance;

/// Collect everything within reach of the candle, then purge collected items
pub fn update(state: &mut GameState) {
    let GameState {
        collectibles,
        player,
        run,
        events,
        ..
    } = state;

    for item in collectibles.iter_mut().filter(|c| !c.collected) {
        if distance(player.pos, item.pos) >= PICKUP_RADIUS {
            continue;
        }

        item.collected = true;
        let reward = item.kind.fuel_reward();
        player.fuel = fuel::apply_delta(player.fuel, reward, player.max_fuel);
        run.score += PICKUP_SCORE;
        run.combo += 1;
        run.items_collected += 1;

        events.push(GameEvent::Collected {
            id: item.id,
            kind: item.kind,
            fuel: reward,
        });
        log::debug!(
            "Collected {:?} #{} (+{} fuel, score {})",
            item.kind,
            item.id,
            reward,
            run.score
        );
    }

    collectibles.retain(|c| !c.collected);
}

/// Roll for a new collectible
pub fn maybe_spawn(state: &mut GameState) {
    let chance = state.tuning.collectible_spawn_chance;
    if chance <= 0.0 || !state.rng.random_bool(f64::from(chance.min(1.0))) {
        return;
    }

    let id = state.next_entity_id();
    let item = spawn::spawn_collectible(&mut state.rng, id);
    state.events.push(GameEvent::CollectibleSpawned {
        id,
        kind: item.kind,
    });
    state.collectibles.push(item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Collectible, CollectibleKind};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn state_with_item(kind: CollectibleKind, offset: Vec2) -> GameState {
        let mut state = GameState::new(21, Tuning::default().without_spawns());
        state.start();
        state.collectibles.clear();
        let id = state.next_entity_id();
        let pos = state.player.pos + offset;
        state.collectibles.push(Collectible {
            id,
            pos,
            kind,
            collected: false,
            glow: 0.75,
        });
        state
    }

    #[test]
    fn test_pickup_rewards() {
        let mut state = state_with_item(CollectibleKind::Oil, Vec2::new(10.0, 10.0));
        update(&mut state);
        assert!(state.collectibles.is_empty());
        assert_eq!(state.player.fuel, 42.0);
        assert_eq!(state.run.score, 10);
        assert_eq!(state.run.combo, 1);
        assert_eq!(state.run.items_collected, 1);
    }

    #[test]
    fn test_pickup_clamps_to_max() {
        let mut state = state_with_item(CollectibleKind::Ember, Vec2::ZERO);
        state.player.fuel = 45.0;
        update(&mut state);
        assert_eq!(state.player.fuel, 50.0);
        assert_eq!(state.run.score, 10);
    }

    #[test]
    fn test_out_of_reach_untouched() {
        let mut state = state_with_item(CollectibleKind::Wax, Vec2::new(25.0, 0.0));
        update(&mut state);
        assert_eq!(state.collectibles.len(), 1);
        assert_eq!(state.run.score, 0);
    }

    #[test]
    fn test_spawn_always_when_certain() {
        let mut tuning = Tuning::default();
        tuning.collectible_spawn_chance = 1.0;
        let mut state = GameState::new(2, tuning);
        state.start();
        maybe_spawn(&mut state);
        assert_eq!(state.collectibles.len(), 4);
    }
}
