//! Flame fuel: passive decay and clamped adjustments

use super::state::SpeedMode;

/// Extra decay per difficulty level above 1
pub const DECAY_PER_LEVEL: f32 = 0.1;

/// Decay multiplier for a difficulty level
#[inline]
pub fn difficulty_factor(difficulty: u32) -> f32 {
    1.0 + DECAY_PER_LEVEL * difficulty.saturating_sub(1) as f32
}

/// Fuel burned per tick for the given pace and difficulty
pub fn decay_rate(base_decay: f32, mode: SpeedMode, difficulty: u32) -> f32 {
    base_decay * mode.decay_factor() * difficulty_factor(difficulty)
}

/// Burn one tick of fuel. Never goes below zero; hitting zero is the
/// caller's cue to end the run.
pub fn decay(fuel: f32, base_decay: f32, mode: SpeedMode, difficulty: u32) -> f32 {
    (fuel - decay_rate(base_decay, mode, difficulty)).max(0.0)
}

/// Add (pickup) or subtract (damage) fuel, clamped to [0, max]
#[inline]
pub fn apply_delta(fuel: f32, amount: f32, max: f32) -> f32 {
    (fuel + amount).clamp(0.0, max)
}
