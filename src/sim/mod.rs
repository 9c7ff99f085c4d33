//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete tick per call
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod clock;
pub mod fuel;
pub mod hazards;
pub mod resources;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod visibility;

pub use clock::difficulty_level;
pub use spawn::{HAZARD_WEIGHTS, spawn_collectible, spawn_hazard};
pub use state::{
    Collectible, CollectibleKind, GameEvent, GamePhase, GameState, Hazard, HazardKind, Player,
    RunState, SpeedMode, clamp_to_arena,
};
pub use tick::{TickInput, step, tick};
pub use visibility::{FuelGauge, GaugeBand, Snapshot, is_visible, visible_radius};
