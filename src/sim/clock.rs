//! Survival clock and difficulty curve
//!
//! Difficulty stays at 1 for the first 20 seconds, then follows a slow ramp
//! (one level per 30 seconds) until 40 seconds and a fast ramp (one level per
//! 15 seconds) afterwards. Each ramp counts from its own start boundary and
//! the two do not join up: with the shipped constants the slow ramp never
//! gets past level 1 before the fast ramp takes over. Both formulas are kept
//! as tuned.

/// End of the grace period (ticks)
pub const GRACE_TICKS: u64 = 1200;
/// End of the slow ramp (ticks)
pub const SLOW_RAMP_END_TICKS: u64 = 2400;
/// Ticks per level during the slow ramp
pub const SLOW_RAMP_STEP: u64 = 1800;
/// Ticks per level after the slow ramp
pub const FAST_RAMP_STEP: u64 = 900;

/// Advance the survival counter by one tick
#[inline]
pub fn advance(elapsed: u64) -> u64 {
    elapsed + 1
}

/// Difficulty level for a given number of survived ticks (always >= 1)
pub fn difficulty_level(elapsed: u64) -> u32 {
    let level = if elapsed > SLOW_RAMP_END_TICKS {
        1 + (elapsed - SLOW_RAMP_END_TICKS) / FAST_RAMP_STEP
    } else if elapsed > GRACE_TICKS {
        1 + (elapsed - GRACE_TICKS) / SLOW_RAMP_STEP
    } else {
        1
    };
    level as u32
}
