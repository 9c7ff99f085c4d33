//! Property tests over arbitrary inputs and states

use candle_keeper::sim::{
    Collectible, CollectibleKind, GameState, Hazard, HazardKind, SpeedMode, TickInput, tick,
};
use candle_keeper::tuning::Tuning;
use glam::Vec2;
use proptest::prelude::*;

fn arb_input() -> impl Strategy<Value = TickInput> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop::option::weighted(0.05, 1u8..=3),
    )
        .prop_map(|(up, down, left, right, digit)| TickInput {
            up,
            down,
            left,
            right,
            speed: digit.and_then(SpeedMode::from_digit),
            pause: false,
        })
}

fn arb_collectible_kind() -> impl Strategy<Value = CollectibleKind> {
    prop::sample::select(CollectibleKind::ALL.to_vec())
}

fn arb_hazard_kind() -> impl Strategy<Value = HazardKind> {
    prop::sample::select(HazardKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn player_stays_inside_margin(seed in any::<u64>(), inputs in prop::collection::vec(arb_input(), 1..400)) {
        let mut state = GameState::new(seed, Tuning::default());
        state.start();
        for input in &inputs {
            tick(&mut state, input);
            let p = state.player.pos;
            prop_assert!((20.0..=780.0).contains(&p.x), "x out of range: {}", p.x);
            prop_assert!((20.0..=580.0).contains(&p.y), "y out of range: {}", p.y);
            prop_assert!(state.player.fuel >= 0.0);
            prop_assert!(state.player.fuel <= state.player.max_fuel);
        }
    }

    #[test]
    fn pickup_adds_exactly_ten(fuel in 0.1f32..50.0, kind in arb_collectible_kind(), offset in 0.0f32..24.0) {
        let mut state = GameState::new(1, Tuning::default().without_spawns());
        state.start();
        state.collectibles.clear();
        state.player.fuel = fuel;
        let id = state.next_entity_id();
        let pos = state.player.pos + Vec2::new(offset, 0.0);
        state.collectibles.push(Collectible { id, pos, kind, collected: false, glow: 0.6 });

        let score_before = state.run.score;
        tick(&mut state, &TickInput::default());

        if state.run.is_over() {
            // Tiny fuel burned out before the pickup stage
            prop_assert!(fuel <= 0.0455 + 1e-4);
        } else {
            prop_assert_eq!(state.run.score, score_before + 10);
            prop_assert!(state.player.fuel <= state.player.max_fuel);
            prop_assert!(state.collectibles.is_empty());
        }
    }

    #[test]
    fn far_out_hazards_vanish_harmlessly(
        kind in arb_hazard_kind(),
        side in 0usize..4,
        along in 0.0f32..600.0,
        speed in 0.5f32..8.0,
    ) {
        let mut state = GameState::new(2, Tuning::default().without_spawns());
        state.start();
        state.collectibles.clear();
        state.player.fuel = 10.0;

        // Just inside the despawn margin, heading further out
        let (pos, heading) = match side {
            0 => (Vec2::new(-99.9, along), std::f32::consts::PI),
            1 => (Vec2::new(899.9, along), 0.0),
            2 => (Vec2::new(along, -99.9), -std::f32::consts::FRAC_PI_2),
            _ => (Vec2::new(along, 699.9), std::f32::consts::FRAC_PI_2),
        };
        let id = state.next_entity_id();
        state.hazards.push(Hazard { id, pos, kind, speed, heading, active: true });

        tick(&mut state, &TickInput::default());

        prop_assert!(state.hazards.is_empty());
        prop_assert!((state.player.fuel - (10.0 - 0.0455)).abs() < 1e-4);
    }
}
