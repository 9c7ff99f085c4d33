//! Candle Keeper - A light-radius survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, hazards, fuel, scoring)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Best-score bookkeeping
//! - `persistence`: Best-score storage backends
//! - `submission`: Remote score submission status tracking

pub mod highscores;
pub mod persistence;
pub mod sim;
pub mod submission;
pub mod tuning;

pub use highscores::BestScore;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate (one tick per rendered frame)
    pub const TICKS_PER_SECOND: u64 = 60;

    /// Arena dimensions (logical units)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Player keeps this distance from every arena edge
    pub const ARENA_MARGIN: f32 = 20.0;
    /// Hazards further than this outside the arena are despawned
    pub const DESPAWN_MARGIN: f32 = 100.0;

    /// Hazard contact distance
    pub const HAZARD_HIT_RADIUS: f32 = 30.0;
    /// Collectible pickup distance
    pub const PICKUP_RADIUS: f32 = 25.0;
    /// Score granted per collectible, regardless of kind
    pub const PICKUP_SCORE: u64 = 10;

    /// Gusts enter this far outside the left/right edge
    pub const GUST_SPAWN_OFFSET: f32 = 50.0;
    /// Droplets enter at this y (above the top edge)
    pub const DROPLET_SPAWN_Y: f32 = -30.0;

    /// Survival time (ticks) after which hazards get a damage bonus
    pub const DAMAGE_BONUS_START_TICKS: u64 = 2400;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Angle (radians) of the direction pointing from `from` to `to`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Unit-length step along a heading, scaled by speed
#[inline]
pub fn heading_vector(heading: f32, speed: f32) -> Vec2 {
    Vec2::new(heading.cos() * speed, heading.sin() * speed)
}
