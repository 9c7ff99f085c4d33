//! Light radius, culling and the per-tick render snapshot
//!
//! The candle is the only light source. Its reach grows with fuel, and only
//! entities inside that reach are handed to the renderer.

use glam::Vec2;
use serde::Serialize;

use super::state::{Collectible, GameState, Hazard, Player, RunState};
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::distance;

/// Light radius gained per unit of fuel
pub const RADIUS_PER_FUEL: f32 = 2.0;
/// Where the glow gradient passes through its middle stop
pub const FALLOFF_KNEE: f32 = 0.7;
/// Glow alpha at the knee
pub const FALLOFF_KNEE_ALPHA: f32 = 0.8;
/// Scenery never fades below this while lit
pub const MIN_SCENERY_OPACITY: f32 = 0.3;

/// Radius of the lit region around the candle
#[inline]
pub fn visible_radius(base_radius: f32, fuel: f32) -> f32 {
    base_radius + fuel * RADIUS_PER_FUEL
}

/// Whether a point is inside the lit region
#[inline]
pub fn is_visible(light: Vec2, radius: f32, point: Vec2) -> bool {
    distance(light, point) < radius
}

/// Glow alpha at distance `d` from the candle: 1 at the centre, 0.8 at the
/// knee, 0 at the edge, linear in between
pub fn light_alpha(d: f32, radius: f32) -> f32 {
    if radius <= 0.0 || d >= radius {
        return 0.0;
    }
    let t = (d / radius).max(0.0);
    if t <= FALLOFF_KNEE {
        1.0 - (1.0 - FALLOFF_KNEE_ALPHA) * (t / FALLOFF_KNEE)
    } else {
        FALLOFF_KNEE_ALPHA * (1.0 - (t - FALLOFF_KNEE) / (1.0 - FALLOFF_KNEE))
    }
}

/// Opacity of static scenery at distance `d`, or `None` while it is dark
pub fn scenery_opacity(d: f32, radius: f32) -> Option<f32> {
    if d < radius {
        Some((1.0 - d / radius).max(MIN_SCENERY_OPACITY))
    } else {
        None
    }
}

/// Fuel gauge colour band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GaugeBand {
    Healthy,
    Low,
    Critical,
}

impl GaugeBand {
    /// Display colour (0xRRGGBB)
    pub fn color(&self) -> u32 {
        match self {
            GaugeBand::Healthy => 0x10b981,
            GaugeBand::Low => 0xf59e0b,
            GaugeBand::Critical => 0xdc2626,
        }
    }
}

/// Fuel readout for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuelGauge {
    /// Fuel fraction in [0, 1]
    pub ratio: f32,
    pub band: GaugeBand,
}

impl FuelGauge {
    pub fn new(fuel: f32, max_fuel: f32) -> Self {
        let ratio = if max_fuel > 0.0 {
            (fuel / max_fuel).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let band = if ratio > 0.6 {
            GaugeBand::Healthy
        } else if ratio > 0.3 {
            GaugeBand::Low
        } else {
            GaugeBand::Critical
        };
        Self { ratio, band }
    }
}

/// Immutable view of one tick, handed to the renderer
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub player: Player,
    pub hazards: Vec<Hazard>,
    pub collectibles: Vec<Collectible>,
    pub visible_radius: f32,
    pub run: RunState,
    pub gauge: FuelGauge,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            player: state.player.clone(),
            hazards: state.hazards.clone(),
            collectibles: state.collectibles.clone(),
            visible_radius: visible_radius(state.tuning.vision_radius, state.player.fuel),
            run: state.run.clone(),
            gauge: FuelGauge::new(state.player.fuel, state.player.max_fuel),
        }
    }

    pub fn is_visible(&self, point: Vec2) -> bool {
        is_visible(self.player.pos, self.visible_radius, point)
    }

    /// Hazards the renderer should draw
    pub fn visible_hazards(&self) -> impl Iterator<Item = &Hazard> {
        self.hazards
            .iter()
            .filter(|h| h.active && self.is_visible(h.pos))
    }

    /// Collectibles the renderer should draw
    pub fn visible_collectibles(&self) -> impl Iterator<Item = &Collectible> {
        self.collectibles
            .iter()
            .filter(|c| !c.collected && self.is_visible(c.pos))
    }

    /// Opacity of the arena-centre emblem, if lit
    pub fn emblem_opacity(&self) -> Option<f32> {
        let centre = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);
        scenery_opacity(distance(self.player.pos, centre), self.visible_radius)
    }
}
