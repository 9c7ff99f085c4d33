//! Data-driven game balance
//!
//! Every value the designers tweak between builds lives here. Defaults match
//! the shipped balance; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Balance parameters for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fuel the candle starts each run with
    pub initial_fuel: f32,
    /// Fuel ceiling (pickups clamp to this)
    pub max_fuel: f32,
    /// Base movement speed (units/tick) before the speed-mode factor
    pub move_speed: f32,
    /// Base fuel decay per tick before speed-mode and difficulty factors
    pub base_decay: f32,
    /// Vision radius at zero fuel
    pub vision_radius: f32,
    /// Per-tick hazard spawn probability before difficulty scaling
    pub hazard_spawn_base: f32,
    /// Per-tick collectible spawn probability
    pub collectible_spawn_chance: f32,
    /// Collectibles placed when a run starts
    pub initial_collectibles: u32,
    /// Lurkers give up while fuel is above this
    pub lurker_fuel_threshold: f32,
    /// Crawlers home in on the candle inside this range
    pub crawler_pursuit_range: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_fuel: 30.0,
            max_fuel: 50.0,
            move_speed: 2.2,
            base_decay: 0.035,
            vision_radius: 120.0,
            hazard_spawn_base: 0.009,
            collectible_spawn_chance: 0.008,
            initial_collectibles: 3,
            lurker_fuel_threshold: 15.0,
            crawler_pursuit_range: 150.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.validate())
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load tuning from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    /// Clamp values that would break the simulation's invariants
    pub fn validate(mut self) -> Self {
        let defaults = Self::default();

        if !(self.max_fuel > 0.0) {
            log::warn!("max_fuel {} must be positive, using {}", self.max_fuel, defaults.max_fuel);
            self.max_fuel = defaults.max_fuel;
        }
        if !(0.0..=self.max_fuel).contains(&self.initial_fuel) {
            let clamped = self.initial_fuel.clamp(0.0, self.max_fuel);
            log::warn!("initial_fuel {} outside [0, {}], clamped to {}", self.initial_fuel, self.max_fuel, clamped);
            self.initial_fuel = clamped;
        }
        for (name, value) in [
            ("move_speed", &mut self.move_speed),
            ("base_decay", &mut self.base_decay),
            ("vision_radius", &mut self.vision_radius),
            ("crawler_pursuit_range", &mut self.crawler_pursuit_range),
            ("lurker_fuel_threshold", &mut self.lurker_fuel_threshold),
        ] {
            if *value < 0.0 {
                log::warn!("{name} {value} is negative, clamped to 0");
                *value = 0.0;
            }
        }
        for (name, value) in [
            ("hazard_spawn_base", &mut self.hazard_spawn_base),
            ("collectible_spawn_chance", &mut self.collectible_spawn_chance),
        ] {
            if !(0.0..=1.0).contains(&*value) {
                let clamped = value.clamp(0.0, 1.0);
                log::warn!("{name} {value} is not a probability, clamped to {clamped}");
                *value = clamped;
            }
        }

        self
    }

    /// Tuning with all random spawning switched off (scripted scenarios)
    pub fn without_spawns(mut self) -> Self {
        self.hazard_spawn_base = 0.0;
        self.collectible_spawn_chance = 0.0;
        self
    }
}
