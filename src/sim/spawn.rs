//! Entity factory: hazard and collectible spawn rules
//!
//! Randomness always comes from the state's seeded RNG, so a seed fully
//! determines every spawn.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::sync::LazyLock;

use glam::Vec2;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use super::state::{Collectible, CollectibleKind, Hazard, HazardKind};
use crate::consts::*;

/// Relative spawn weights, out of 11
pub const HAZARD_WEIGHTS: [(HazardKind, u32); 4] = [
    (HazardKind::Gust, 3),
    (HazardKind::Crawler, 1),
    (HazardKind::Droplet, 6),
    (HazardKind::Lurker, 1),
];

static HAZARD_DIST: LazyLock<WeightedIndex<u32>> = LazyLock::new(|| {
    WeightedIndex::new(HAZARD_WEIGHTS.iter().map(|(_, w)| *w))
        .expect("hazard weights should be non-empty and positive")
});

/// Pick a hazard kind from the weighted table
pub fn pick_hazard_kind<R: Rng + ?Sized>(rng: &mut R) -> HazardKind {
    HAZARD_WEIGHTS[HAZARD_DIST.sample(rng)].0
}

/// Create a hazard with kind-dependent entry point and kinematics
pub fn spawn_hazard<R: Rng + ?Sized>(rng: &mut R, id: u32) -> Hazard {
    let kind = pick_hazard_kind(rng);
    let (pos, speed, heading) = match kind {
        HazardKind::Gust => {
            let from_left = rng.random_bool(0.5);
            let x = if from_left {
                -GUST_SPAWN_OFFSET
            } else {
                ARENA_WIDTH + GUST_SPAWN_OFFSET
            };
            let y = rng.random_range(0.0..ARENA_HEIGHT);
            let heading = if from_left { 0.0 } else { PI };
            (Vec2::new(x, y), rng.random_range(1.5..4.0), heading)
        }
        HazardKind::Droplet => {
            let x = rng.random_range(0.0..ARENA_WIDTH);
            (
                Vec2::new(x, DROPLET_SPAWN_Y),
                rng.random_range(3.5..7.5),
                FRAC_PI_2,
            )
        }
        HazardKind::Crawler => (
            random_arena_point(rng),
            rng.random_range(1.0..2.5),
            rng.random_range(0.0..TAU),
        ),
        HazardKind::Lurker => (
            random_arena_point(rng),
            rng.random_range(0.8..2.0),
            rng.random_range(0.0..TAU),
        ),
    };

    log::debug!("Spawned {:?} #{} at ({:.0}, {:.0})", kind, id, pos.x, pos.y);

    Hazard {
        id,
        pos,
        kind,
        speed,
        heading,
        active: true,
    }
}

/// Create a collectible somewhere inside the bordered arena
pub fn spawn_collectible<R: Rng + ?Sized>(rng: &mut R, id: u32) -> Collectible {
    let kind = CollectibleKind::ALL[rng.random_range(0..CollectibleKind::ALL.len())];
    let pos = Vec2::new(
        rng.random_range(ARENA_MARGIN..ARENA_WIDTH - ARENA_MARGIN),
        rng.random_range(ARENA_MARGIN..ARENA_HEIGHT - ARENA_MARGIN),
    );
    let glow = rng.random_range(0.5..1.0);

    log::debug!("Spawned {:?} #{} at ({:.0}, {:.0})", kind, id, pos.x, pos.y);

    Collectible {
        id,
        pos,
        kind,
        collected: false,
        glow,
    }
}

fn random_arena_point<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..ARENA_WIDTH),
        rng.random_range(0.0..ARENA_HEIGHT),
    )
}
