//! Candle Keeper headless entry point
//!
//! Runs a single autopiloted run against the simulation core and keeps the
//! best score on disk. Usage:
//!
//! ```text
//! candle-keeper [SEED] [TUNING_JSON]
//! ```

use std::path::PathBuf;

use clap::Parser;

use candle_keeper::BestScore;
use candle_keeper::persistence::{BestScoreStore, JsonFileStore};
use candle_keeper::sim::{GameEvent, GameState, Snapshot, TickInput, tick};
use candle_keeper::tuning::Tuning;
use candle_keeper::{angle_to, distance};

/// Stop after ten minutes of simulated time
const MAX_TICKS: u64 = 10 * 60 * 60;
const BEST_SCORE_FILE: &str = "candle_keeper_best.json";

#[derive(Parser, Debug)]
#[command(name = "candle-keeper")]
#[command(about = "Headless autopiloted run of the Candle Keeper simulation")]
struct Cli {
    /// RNG seed for the run
    #[arg(default_value_t = 0xC4_4D1E)]
    seed: u64,
    /// Balance overrides as JSON; missing fields keep their defaults
    tuning: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let seed = cli.seed;
    let tuning = cli
        .tuning
        .map(Tuning::load_or_default)
        .unwrap_or_default();

    log::info!("Candle Keeper (headless) starting, seed {seed}");

    let mut store = JsonFileStore::new(BEST_SCORE_FILE);
    let best = store.load();

    let mut state = GameState::new(seed, tuning).with_best_score(best.get());
    state.start();

    let mut hits = 0u32;
    while !state.run.is_over() && state.run.elapsed_ticks < MAX_TICKS {
        let input = autopilot(&Snapshot::capture(&state));
        tick(&mut state, &input);
        hits += state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::HazardHit { .. }))
            .count() as u32;
    }

    println!(
        "score {} | survived {}s | items {} | hits taken {} | difficulty {} | pace {}",
        state.run.score,
        state.run.seconds_alive(),
        state.run.items_collected,
        hits,
        state.run.difficulty,
        state.run.speed_mode.as_str()
    );

    let mut record = BestScore(best.get());
    if record.record(state.run.best_score) {
        println!("new best: {}", record.get());
        if let Err(e) = store.save(record) {
            log::error!("{e}");
        }
    }
}

/// Steer away from the nearest lit hazard, otherwise toward the nearest lit
/// collectible
fn autopilot(snap: &Snapshot) -> TickInput {
    let me = snap.player.pos;

    let threat = snap
        .visible_hazards()
        .map(|h| (distance(me, h.pos), h.pos))
        .filter(|(d, _)| *d < 90.0)
        .min_by(|a, b| a.0.total_cmp(&b.0));

    let heading = if let Some((_, pos)) = threat {
        angle_to(pos, me)
    } else if let Some(item) = snap
        .visible_collectibles()
        .min_by(|a, b| distance(me, a.pos).total_cmp(&distance(me, b.pos)))
    {
        angle_to(me, item.pos)
    } else {
        return TickInput::default();
    };

    let (dy, dx) = heading.sin_cos();
    TickInput::moving(dy < -0.3, dy > 0.3, dx < -0.3, dx > 0.3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["candle-keeper"]).unwrap();
        assert_eq!(cli.seed, 0xC4_4D1E);
        assert!(cli.tuning.is_none());
    }

    #[test]
    fn test_cli_seed_and_tuning() {
        let cli = Cli::try_parse_from(["candle-keeper", "42", "balance.json"]).unwrap();
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.tuning, Some(PathBuf::from("balance.json")));
    }

    #[test]
    fn test_cli_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["candle-keeper", "abc"]).is_err());
        assert!(Cli::try_parse_from(["candle-keeper", "-5"]).is_err());
    }
}
