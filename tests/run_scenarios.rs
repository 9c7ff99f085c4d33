//! End-to-end run scenarios driven through the public tick API

use std::f32::consts::FRAC_PI_2;

use candle_keeper::sim::{
    GameEvent, GamePhase, GameState, Hazard, HazardKind, Snapshot, TickInput, difficulty_level,
    tick,
};
use candle_keeper::tuning::Tuning;
use glam::Vec2;

fn quiet_run(tuning: Tuning, seed: u64) -> GameState {
    let mut state = GameState::new(seed, tuning.without_spawns());
    state.start();
    state.collectibles.clear();
    state
}

fn push_hazard(state: &mut GameState, kind: HazardKind, pos: Vec2, speed: f32, heading: f32) -> u32 {
    let id = state.next_entity_id();
    state.hazards.push(Hazard {
        id,
        pos,
        kind,
        speed,
        heading,
        active: true,
    });
    id
}

#[test]
fn start_yields_fresh_run() {
    let mut state = GameState::new(2024, Tuning::default());
    state.start();

    assert_eq!(state.run.phase, GamePhase::Playing);
    assert_eq!(state.player.fuel, 30.0);
    assert_eq!(state.run.score, 0);
    assert_eq!(state.run.elapsed_ticks, 0);
    assert_eq!(state.run.difficulty, 1);
    assert_eq!(state.collectibles.len(), 3);
    assert!(state.hazards.is_empty());
}

#[test]
fn start_twice_is_idempotent() {
    let mut state = GameState::new(31, Tuning::default());
    state.start();
    for _ in 0..300 {
        tick(&mut state, &TickInput::moving(false, false, true, false));
    }

    state.start();
    let first = Snapshot::capture(&state);
    state.start();
    let second = Snapshot::capture(&state);

    assert_eq!(first.player, second.player);
    assert_eq!(first.run, second.run);
    assert_eq!(first.visible_radius, second.visible_radius);
    assert!(first.hazards.is_empty() && second.hazards.is_empty());
    assert_eq!(first.collectibles.len(), 3);
    assert_eq!(second.collectibles.len(), 3);
}

#[test]
fn slow_regime_burns_steadily_at_level_one() {
    let tuning = Tuning {
        initial_fuel: 60.0,
        max_fuel: 100.0,
        ..Default::default()
    };
    let mut state = quiet_run(tuning, 5);

    let mut last = state.player.fuel;
    for _ in 0..1200 {
        tick(&mut state, &TickInput::default());
        assert!(state.player.fuel < last, "fuel must keep falling");
        assert_eq!(state.run.difficulty, 1);
        last = state.player.fuel;
    }

    assert_eq!(state.run.elapsed_ticks, 1200);
    assert_eq!(difficulty_level(state.run.elapsed_ticks), 1);
    // 0.035 base * 1.3 normal-mode factor per tick
    assert!((state.player.fuel - (60.0 - 1200.0 * 0.0455)).abs() < 0.01);
}

#[test]
fn default_fuel_runs_out_without_pickups() {
    let mut state = quiet_run(Tuning::default(), 6);
    let mut ticks = 0;
    while !state.run.is_over() {
        tick(&mut state, &TickInput::default());
        ticks += 1;
        assert!(ticks < 1000);
    }
    // 30 / 0.0455 ~= 659.3
    assert_eq!(state.run.elapsed_ticks, 659);
    assert_eq!(state.player.fuel, 0.0);
    assert!(
        state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::Extinguished { .. }))
    );
}

#[test]
fn droplet_falls_to_floor_then_despawns() {
    let mut state = quiet_run(Tuning::default(), 7);
    let id = push_hazard(
        &mut state,
        HazardKind::Droplet,
        Vec2::new(100.0, -30.0),
        5.0,
        FRAC_PI_2,
    );

    for _ in 0..126 {
        tick(&mut state, &TickInput::default());
    }
    assert_eq!(state.hazards[0].id, id);
    assert_eq!(state.hazards[0].pos.y, 600.0);
    assert!((state.hazards[0].pos.x - 100.0).abs() < 1e-3);

    let fuel_before = state.player.fuel;
    let mut despawned_at = None;
    for t in 127..=200 {
        tick(&mut state, &TickInput::default());
        if state.hazards.is_empty() {
            despawned_at = Some(t);
            break;
        }
        assert!(state.hazards[0].pos.y <= 700.0);
    }

    // y = 700 after tick 146; the step to 705 is past the margin
    assert_eq!(despawned_at, Some(147));
    assert!(
        state
            .events
            .contains(&GameEvent::HazardDespawned { id, kind: HazardKind::Droplet })
    );
    // Only passive decay since the 126-tick mark
    assert!((fuel_before - state.player.fuel - 21.0 * 0.0455).abs() < 1e-3);
}

#[test]
fn lurker_never_hurts_healthy_flame() {
    let mut state = quiet_run(Tuning::default(), 8);
    let p = state.player.pos;
    push_hazard(&mut state, HazardKind::Lurker, p + Vec2::new(5.0, 0.0), 2.0, 0.0);

    tick(&mut state, &TickInput::default());

    assert!(state.hazards.is_empty());
    assert!((state.player.fuel - (30.0 - 0.0455)).abs() < 1e-5);
    assert!(
        !state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::HazardHit { .. }))
    );
}

#[test]
fn pause_freezes_everything() {
    let mut state = quiet_run(Tuning::default(), 9);
    push_hazard(&mut state, HazardKind::Gust, Vec2::new(-50.0, 100.0), 3.0, 0.0);
    let pause = TickInput {
        pause: true,
        ..Default::default()
    };

    tick(&mut state, &pause);
    let frozen = Snapshot::capture(&state);
    for _ in 0..100 {
        tick(&mut state, &TickInput::moving(true, false, true, false));
    }
    let after = Snapshot::capture(&state);

    assert_eq!(frozen.player, after.player);
    assert_eq!(frozen.hazards, after.hazards);
    assert_eq!(frozen.run, after.run);
}

#[test]
fn game_over_then_restart() {
    let mut state = quiet_run(Tuning::default(), 10).with_best_score(15);
    state.run.score = 40;
    state.player.fuel = 0.01;
    tick(&mut state, &TickInput::default());
    assert!(state.run.is_over());
    assert_eq!(state.run.best_score, 40);
    assert!(state.events.contains(&GameEvent::NewBest(40)));

    state.start();
    assert_eq!(state.run.phase, GamePhase::Playing);
    assert_eq!(state.run.score, 0);
    assert_eq!(state.run.best_score, 40);
}
